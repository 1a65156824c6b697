//! Human-readable result report.

use std::fmt::{self, Write};

use flexure_core::calculations::ExtremumMethod;
use flexure_core::equations::Equation;
use flexure_core::units::{KiloNewtonMeters, KiloNewtons, Meters};
use flexure_core::BeamResult;

const RULE: &str = "═══════════════════════════════════════";

/// Number of evenly spaced diagram rows shown in the summary
const DIAGRAM_ROWS: usize = 11;

pub fn print_report(result: &BeamResult) -> Result<(), fmt::Error> {
    print!("{}", render(result)?);
    Ok(())
}

/// Build the report text for a result
pub fn render(result: &BeamResult) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, result)?;
    Ok(out)
}

fn write_report(out: &mut String, result: &BeamResult) -> fmt::Result {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  BEAM MOMENT RESULTS")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "Span:           {}", Meters(result.length_m))?;
    writeln!(out, "Total load:     {}", KiloNewtons(result.total_load_kn))?;
    writeln!(out)?;
    writeln!(out, "Reactions:")?;
    writeln!(out, "  RA = {}", KiloNewtons(result.reactions.left_kn))?;
    writeln!(out, "  RB = {}", KiloNewtons(result.reactions.right_kn))?;
    writeln!(out)?;
    writeln!(out, "Maximum moment:")?;
    writeln!(
        out,
        "  M_max = {} at x = {} ({})",
        KiloNewtonMeters(result.max_moment.moment_knm),
        Meters(result.max_moment.position_m),
        method_label(result.max_moment.method)
    )?;

    if result.load_table.len() > 1 {
        writeln!(out)?;
        writeln!(out, "Load Summary:")?;
        writeln!(out, "  {:>3}  {:>12}  {:>12}", "#", "Load (kN)", "Position (m)")?;
        for row in &result.load_table {
            writeln!(out, "  {:>3}  {:>12.2}  {:>12.2}", row.index, row.magnitude_kn, row.position_m)?;
        }
    }

    let samples = result.moment_diagram.samples();
    if samples.len() >= 2 {
        writeln!(out)?;
        writeln!(out, "Moment Diagram (excerpt):")?;
        writeln!(out, "  {:>10}  {:>12}", "x (m)", "M (kN·m)")?;
        let last = samples.len() - 1;
        let rows = DIAGRAM_ROWS.min(samples.len());
        for k in 0..rows {
            let (x, m) = samples[k * last / (rows - 1)];
            writeln!(out, "  {:>10.3}  {:>12.3}", x, m)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Formulas:")?;
    for (category, equations) in result.equations.by_category() {
        writeln!(out, "  {}:", category.display_name())?;
        for eq in equations {
            write_formula(out, eq)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Conventions: sagging moment positive, reactions upward positive, loads downward positive")?;
    writeln!(out, "{}", RULE)
}

fn write_formula(out: &mut String, eq: Equation) -> fmt::Result {
    let meta = eq.metadata();
    writeln!(out, "    {:<32} {}  [{}]", meta.name, meta.formula_plain, meta.reference.citation())?;
    writeln!(out, "      {}", meta.description)?;
    for var in &meta.variables {
        writeln!(out, "        {:<8} {} ({})", var.symbol, var.description, var.units)?;
    }
    Ok(())
}

fn method_label(method: ExtremumMethod) -> &'static str {
    match method {
        ExtremumMethod::ClosedForm => "closed form",
        ExtremumMethod::Sampled => "sampled",
        ExtremumMethod::Exact => "load positions",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexure_core::{calculate, Beam, BeamInput, LoadCase, PointLoad};

    #[test]
    fn test_point_load_report() {
        let result = calculate(&BeamInput::new("r", Beam::new(10.0), LoadCase::point(100.0, 2.5))).unwrap();
        let text = render(&result).unwrap();

        assert!(text.contains("RA = 75.00 kN"));
        assert!(text.contains("RB = 25.00 kN"));
        assert!(text.contains("M_max = 187.50 kN·m at x = 2.50 m (closed form)"));
        assert!(text.contains("M_max = Pab/L"));
        assert!(!text.contains("Load Summary"));
    }

    #[test]
    fn test_formula_variables_listed() {
        let result = calculate(&BeamInput::new("r", Beam::new(10.0), LoadCase::distributed(10.0))).unwrap();
        let text = render(&result).unwrap();

        assert!(text.contains("Peak moment under a full-span uniform load, at midspan"));
        assert!(text.contains("Uniform load intensity (kN/m)"));
        assert!(text.contains("Span length (m)"));
    }

    #[test]
    fn test_multiple_load_report_has_table() {
        let case = LoadCase::multiple(vec![PointLoad::new(50.0, 3.0), PointLoad::new(50.0, 7.0)]);
        let result = calculate(&BeamInput::new("r", Beam::new(10.0), case)).unwrap();
        let text = render(&result).unwrap();

        assert!(text.contains("Load Summary"));
        assert!(text.contains("(load positions)"));
        assert!(text.contains("Superposition of Point Loads"));
    }
}
