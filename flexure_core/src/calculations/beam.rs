//! # Simply-Supported Beam Analysis
//!
//! Entry point that ties the calculation modules together: validates a
//! [`BeamInput`], solves reactions, samples the moment diagram and locates
//! the maximum moment.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) boundary conditions
//! - Single point load, full-span uniform load, or 1 to 5 point loads
//! - Linear-elastic, statically determinate (superposition holds)
//!
//! ## Example (JSON-friendly)
//!
//! ```rust
//! use flexure_core::calculations::beam::{calculate, Beam, BeamInput};
//! use flexure_core::loads::LoadCase;
//!
//! let input = BeamInput::new("B-1", Beam::new(10.0), LoadCase::point(100.0, 2.5));
//! let result = calculate(&input).unwrap();
//!
//! assert!((result.reactions.left_kn - 75.0).abs() < 1e-9);
//! assert!((result.max_moment.moment_knm - 187.5).abs() < 1e-9);
//! assert_eq!(result.moment_diagram.len(), 1000);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::extremum::{self, Extremum, MultiLoadExtremum};
use crate::calculations::moment::{
    self, LoadResponse, MomentField, PositionGrid, DEFAULT_RESOLUTION, MAX_RESOLUTION, MIN_RESOLUTION,
};
use crate::calculations::reactions::ReactionPair;
use crate::calculations::superposition::superpose_point_loads;
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{LoadCase, LoadSummaryRow};

/// A simply supported span from x = 0 to x = L.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Span length between supports (m)
    pub length_m: f64,
}

impl Beam {
    pub fn new(length_m: f64) -> Self {
        Beam { length_m }
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !self.length_m.is_finite() || self.length_m <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "length_m",
                self.length_m.to_string(),
                "Beam length must be a positive finite number",
            ));
        }
        Ok(())
    }
}

/// Tunables for one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of uniformly spaced diagram samples over [0, L]
    pub resolution: usize,
    /// How the multiple point load maximum is located
    pub multi_load_extremum: MultiLoadExtremum,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            resolution: DEFAULT_RESOLUTION,
            multi_load_extremum: MultiLoadExtremum::default(),
        }
    }
}

impl AnalysisSettings {
    pub fn validate(&self) -> CalcResult<()> {
        if self.resolution < MIN_RESOLUTION {
            return Err(CalcError::invalid_settings(
                "resolution",
                self.resolution.to_string(),
                format!("At least {} samples are required", MIN_RESOLUTION),
            ));
        }
        if self.resolution > MAX_RESOLUTION {
            return Err(CalcError::invalid_settings(
                "resolution",
                self.resolution.to_string(),
                format!("At most {} samples are allowed", MAX_RESOLUTION),
            ));
        }
        Ok(())
    }
}

/// Input parameters for a beam analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "beam": { "length_m": 10.0 },
///   "load_case": { "type": "Distributed", "intensity_kn_per_m": 10.0 },
///   "settings": { "resolution": 1000, "multi_load_extremum": "Exact" }
/// }
/// ```
///
/// `label` and `settings` may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    /// Span geometry
    pub beam: Beam,

    /// The load configuration to analyse
    pub load_case: LoadCase,

    /// Sampling and extremum options
    #[serde(default)]
    pub settings: AnalysisSettings,
}

impl BeamInput {
    /// Create an input with default settings
    pub fn new(label: impl Into<String>, beam: Beam, load_case: LoadCase) -> Self {
        BeamInput {
            label: label.into(),
            beam,
            load_case,
            settings: AnalysisSettings::default(),
        }
    }

    /// Replace the analysis settings
    pub fn with_settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Parse an input document
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.beam.validate()?;
        self.load_case.validate(self.beam.length_m)?;
        self.settings.validate()
    }
}

/// Results of a beam analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    /// Label copied from the input
    pub label: String,
    /// Span length (m)
    pub length_m: f64,
    /// Support reactions, positive upward
    pub reactions: ReactionPair,
    /// Total applied load (kN)
    pub total_load_kn: f64,
    /// Sampled moment diagram
    pub moment_diagram: MomentField,
    /// Governing maximum moment
    pub max_moment: Extremum,
    /// Point loads for tabular display (empty for a uniform load)
    pub load_table: Vec<LoadSummaryRow>,
    /// Formulas applied in this analysis
    pub equations: EquationTracker,
}

impl BeamResult {
    /// Equilibrium residual RA + RB - total load (should be ~0)
    pub fn equilibrium_residual_kn(&self) -> f64 {
        self.reactions.total_kn() - self.total_load_kn
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Perform the beam analysis.
///
/// # Errors
///
/// Returns the first validation failure of [`BeamInput::validate`]; nothing
/// is computed for invalid input. Finite inputs whose products overflow
/// `f64` yield [`CalcError::NonFiniteResult`].
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    input.validate()?;

    let length_m = input.beam.length_m;
    let grid = PositionGrid::uniform(length_m, input.settings.resolution);
    let mut equations = EquationTracker::new();

    debug!(
        "analysing '{}': L={} m, {} with {} samples",
        input.label,
        length_m,
        input.load_case.display_name(),
        grid.len()
    );

    let (reactions, moment_diagram, max_moment) = match &input.load_case {
        LoadCase::Point(load) => {
            let reactions = load.reactions(length_m);
            equations.record(Equation::PointLoadReactions, "Load 1");
            let field = moment::evaluate(&grid, load, &reactions);
            equations.record(Equation::PointLoadMoment, "Load 1");
            let max = extremum::point_load_maximum(load, length_m);
            equations.record(Equation::PointLoadMaxMoment, "Load 1");
            (reactions, field, max)
        }
        LoadCase::Distributed(load) => {
            let reactions = load.reactions(length_m);
            equations.record(Equation::UniformLoadReactions, "Full span");
            let field = moment::evaluate(&grid, load, &reactions);
            equations.record(Equation::UniformLoadMoment, "Full span");
            let max = extremum::distributed_load_maximum(load, length_m);
            equations.record(Equation::UniformLoadMaxMoment, "Midspan");
            (reactions, field, max)
        }
        LoadCase::MultiplePoint { loads } => {
            for i in 1..=loads.len() {
                let context = format!("Load {}", i);
                equations.record(Equation::PointLoadReactions, context.clone());
                equations.record(Equation::PointLoadMoment, context);
            }
            let summed = superpose_point_loads(loads, length_m, &grid);
            equations.record(Equation::Superposition, "All loads");
            let max = extremum::locate_superposed_maximum(
                loads,
                length_m,
                &summed.field,
                input.settings.multi_load_extremum,
            );
            equations.record(Equation::SuperposedMaxMoment, "All loads");
            (summed.reactions, summed.field, max)
        }
    };

    let total_load_kn = input.load_case.total_load_kn(length_m);
    ensure_finite("reactions.left_kn", reactions.left_kn)?;
    ensure_finite("reactions.right_kn", reactions.right_kn)?;
    ensure_finite("total_load_kn", total_load_kn)?;
    ensure_finite("max_moment.moment_knm", max_moment.moment_knm)?;
    if let Some((x, m)) = moment_diagram.samples().iter().find(|(_, m)| !m.is_finite()) {
        return Err(CalcError::non_finite_result(format!("moment_diagram at x = {}", x), m.to_string()));
    }

    debug!(
        "reactions RA={:.4} kN, RB={:.4} kN; M_max={:.4} kN·m at x={:.4} m ({:?})",
        reactions.left_kn, reactions.right_kn, max_moment.moment_knm, max_moment.position_m, max_moment.method
    );

    Ok(BeamResult {
        label: input.label.clone(),
        length_m,
        reactions,
        total_load_kn,
        moment_diagram,
        max_moment,
        load_table: input.load_case.load_table(),
        equations,
    })
}

fn ensure_finite(quantity: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::non_finite_result(quantity, value.to_string()))
    }
}
