//! # Equation Registry
//!
//! Registry of the beam formulas the engine applies. Each equation carries
//! metadata (LaTeX and plain-text formulas, variables, reference) so a
//! presentation layer can show the governing formulas next to the results.
//!
//! ## Usage
//!
//! ```rust
//! use flexure_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::UniformLoadMaxMoment, "Midspan");
//!
//! let meta = Equation::UniformLoadMaxMoment.metadata();
//! assert_eq!(meta.formula_plain, "M_max = wL^2/8");
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference for the source of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// Structural Analysis by R.C. Hibbeler
    Hibbeler { edition: u8, chapter: u8 },
    /// Fundamental mechanics (no specific reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::Hibbeler { edition, chapter } => {
                format!("Hibbeler {}ed, Ch. {}", edition, chapter)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in a formula listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Support reactions (RA, RB)
    Reactions,
    /// Bending moment along the span
    InternalForces,
    /// Peak moment and its location
    Extrema,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Reactions => "Reactions",
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::Extrema => "Maximum Moment",
        }
    }

    /// Sort order for listings (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Reactions => 1,
            EquationCategory::InternalForces => 2,
            EquationCategory::Extrema => 3,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "M", "L", "w")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kN·m", "m", "kN/m")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Metadata for a beam formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in LaTeX math notation
    pub formula_latex: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All formulas applied by the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// RA = Pb/L, RB = Pa/L
    PointLoadReactions,
    /// M(x) piecewise for a point load
    PointLoadMoment,
    /// M_max = Pab/L
    PointLoadMaxMoment,
    /// RA = RB = wL/2
    UniformLoadReactions,
    /// M(x) = RA·x - wx²/2
    UniformLoadMoment,
    /// M_max = wL²/8
    UniformLoadMaxMoment,
    /// Sum of individual point-load responses
    Superposition,
    /// Maximum over sampled or candidate positions
    SuperposedMaxMoment,
}

/// Every registered equation, in listing order.
pub const ALL_EQUATIONS: &[Equation] = &[
    Equation::PointLoadReactions,
    Equation::PointLoadMoment,
    Equation::PointLoadMaxMoment,
    Equation::UniformLoadReactions,
    Equation::UniformLoadMoment,
    Equation::UniformLoadMaxMoment,
    Equation::Superposition,
    Equation::SuperposedMaxMoment,
];

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::PointLoadReactions => EquationMetadata {
                name: "Point Load Reactions",
                description: "Support reactions for a concentrated load at distance a from the left support",
                formula_latex: r"R_A = \frac{Pb}{L}, \quad R_B = \frac{Pa}{L}",
                formula_plain: "RA = Pb/L, RB = Pa/L",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Point load magnitude", "kN"),
                    Variable::new("a", "Distance from left support to load", "m"),
                    Variable::new("b", "L - a", "m"),
                    Variable::new("L", "Span length", "m"),
                ],
                category: EquationCategory::Reactions,
                source_function: "point_load_reactions",
            },

            Equation::PointLoadMoment => EquationMetadata {
                name: "Point Load Moment",
                description: "Bending moment at position x for a concentrated load",
                formula_latex: r"M(x) = \begin{cases} R_A x & x \le a \\ R_A x - P(x - a) & x > a \end{cases}",
                formula_plain: "M(x) = RA*x for x <= a, M(x) = RA*x - P(x-a) for x > a",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("M", "Bending moment", "kN·m"),
                    Variable::new("x", "Position along beam", "m"),
                    Variable::new("R_A", "Left reaction", "kN"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "point_load_moment",
            },

            Equation::PointLoadMaxMoment => EquationMetadata {
                name: "Point Load Maximum Moment",
                description: "Peak moment under a concentrated load, located at the load point",
                formula_latex: r"M_{max} = \frac{Pab}{L}",
                formula_plain: "M_max = Pab/L",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("M_max", "Maximum moment", "kN·m"),
                    Variable::new("a", "Load position", "m"),
                ],
                category: EquationCategory::Extrema,
                source_function: "point_load_max_moment",
            },

            Equation::UniformLoadReactions => EquationMetadata {
                name: "Uniform Load Reactions",
                description: "Support reactions for a uniform load over the full span",
                formula_latex: r"R_A = R_B = \frac{wL}{2}",
                formula_plain: "RA = RB = wL/2",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![
                    Variable::new("w", "Uniform load intensity", "kN/m"),
                    Variable::new("L", "Span length", "m"),
                ],
                category: EquationCategory::Reactions,
                source_function: "uniform_load_reactions",
            },

            Equation::UniformLoadMoment => EquationMetadata {
                name: "Uniform Load Moment",
                description: "Bending moment at position x for a full-span uniform load",
                formula_latex: r"M(x) = R_A x - \frac{w x^2}{2}",
                formula_plain: "M(x) = RA*x - w*x^2/2",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![
                    Variable::new("M", "Bending moment", "kN·m"),
                    Variable::new("x", "Position along beam", "m"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "uniform_load_moment",
            },

            Equation::UniformLoadMaxMoment => EquationMetadata {
                name: "Uniform Load Maximum Moment",
                description: "Peak moment under a full-span uniform load, at midspan",
                formula_latex: r"M_{max} = \frac{wL^2}{8}",
                formula_plain: "M_max = wL^2/8",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![
                    Variable::new("M_max", "Maximum moment", "kN·m"),
                    Variable::new("w", "Uniform load intensity", "kN/m"),
                ],
                category: EquationCategory::Extrema,
                source_function: "uniform_load_max_moment",
            },

            Equation::Superposition => EquationMetadata {
                name: "Superposition of Point Loads",
                description: "Linear sum of the responses to each point load acting alone",
                formula_latex: r"M(x) = \sum_i M_i(x), \quad R_A = \sum_i R_{A,i}, \quad R_B = \sum_i R_{B,i}",
                formula_plain: "M(x) = sum M_i(x), RA = sum RA_i, RB = sum RB_i",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 4 },
                variables: vec![
                    Variable::new("M_i", "Moment due to load i alone", "kN·m"),
                    Variable::new("R_{A,i}", "Left reaction due to load i alone", "kN"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "superpose_point_loads",
            },

            Equation::SuperposedMaxMoment => EquationMetadata {
                name: "Superposed Maximum Moment",
                description: "Largest superposed moment over the evaluated positions",
                formula_latex: r"M_{max} = \max_{x} \sum_i M_i(x)",
                formula_plain: "M_max = max over x of sum M_i(x)",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("M_max", "Maximum moment", "kN·m")],
                category: EquationCategory::Extrema,
                source_function: "locate_superposed_maximum",
            },
        }
    }
}

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where it was used (e.g., "Load 2")
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during an analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category, sorted for display
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 8);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_latex.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
        }

        let uniform_max = Equation::UniformLoadMaxMoment.metadata();
        assert!(uniform_max.formula_plain.contains("wL^2/8"));

        let point_max = Equation::PointLoadMaxMoment.metadata();
        assert!(point_max.formula_latex.contains(r"\frac{Pab}{L}"));
    }

    #[test]
    fn test_code_reference_citation() {
        let roark = CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" };
        assert_eq!(roark.citation(), "Roark's 8ed, Table 8.1, Case 1a");
        assert_eq!(CodeReference::Mechanics.citation(), "Fundamental Mechanics");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::PointLoadReactions, "Load 1");
        tracker.record(Equation::PointLoadReactions, "Load 2");
        tracker.record(Equation::Superposition, "Total");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::PointLoadReactions, Equation::Superposition]
        );
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::UniformLoadMaxMoment, "test");
        tracker.record(Equation::UniformLoadMoment, "test");
        tracker.record(Equation::UniformLoadReactions, "test");

        let categories: Vec<_> = tracker.by_category().into_iter().map(|(cat, _)| cat).collect();
        assert_eq!(
            categories,
            vec![
                EquationCategory::Reactions,
                EquationCategory::InternalForces,
                EquationCategory::Extrema,
            ]
        );
    }
}
