//! # Beam Calculations
//!
//! The analysis follows the pattern:
//!
//! - [`BeamInput`] - Input parameters (JSON-serializable)
//! - [`BeamResult`] - Calculation results (JSON-serializable)
//! - [`calculate`] - Pure calculation function returning `CalcResult<BeamResult>`
//!
//! ## Components (leaf to root)
//!
//! - [`reactions`] - Support reactions from equilibrium
//! - [`moment`] - Position grid and single-load moment diagrams
//! - [`superposition`] - Linear combination of point loads
//! - [`extremum`] - Maximum moment and its location
//! - [`beam`] - Validation and dispatch over the load case

pub mod beam;
pub mod extremum;
pub mod moment;
pub mod reactions;
pub mod superposition;

// Re-export commonly used types
pub use beam::{calculate, AnalysisSettings, Beam, BeamInput, BeamResult};
pub use extremum::{Extremum, ExtremumMethod, MultiLoadExtremum};
pub use moment::{LoadResponse, MomentField, PositionGrid, DEFAULT_RESOLUTION};
pub use reactions::ReactionPair;
pub use superposition::Superposition;
