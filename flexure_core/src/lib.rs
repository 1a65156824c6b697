//! # flexure_core - Simply Supported Beam Moment Engine
//!
//! `flexure_core` computes support reactions, bending-moment diagrams and the
//! governing maximum moment for a simply supported beam carrying a point
//! load, a full-span uniform load, or up to five point loads combined by
//! superposition.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Fail Fast**: Invalid geometry is rejected before anything is computed
//!
//! ## Quick Start
//!
//! ```rust
//! use flexure_core::{calculate, Beam, BeamInput, LoadCase};
//!
//! let input = BeamInput::new("B-1", Beam::new(10.0), LoadCase::distributed(10.0));
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.max_moment.position_m, 5.0);
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("max_moment"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Reactions, moment diagrams, superposition, extrema
//! - [`loads`] - Point and distributed load definitions
//! - [`equations`] - Closed-form formulas and their metadata
//! - [`units`] - Type-safe unit wrappers for display
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, AnalysisSettings, Beam, BeamInput, BeamResult, Extremum, MultiLoadExtremum};
pub use errors::{CalcError, CalcResult};
pub use loads::{DistributedLoad, LoadCase, PointLoad, MAX_POINT_LOADS};
