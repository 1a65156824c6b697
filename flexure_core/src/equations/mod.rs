//! # Beam Equations
//!
//! The structural mechanics formulas used by the calculations, kept in one
//! place so they can be checked against references and listed alongside
//! results.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported beam formulas (reactions, moment, peak moment)
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Reactions**: Positive upward (resisting gravity)

pub mod beam;
pub mod registry;

pub use beam::{
    point_load_max_moment,
    point_load_moment,
    point_load_reactions,
    uniform_load_max_moment,
    uniform_load_moment,
    uniform_load_reactions,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
};
