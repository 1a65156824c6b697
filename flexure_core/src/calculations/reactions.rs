//! Reaction Solver
//!
//! Support reactions from static equilibrium. Geometry is assumed valid
//! (`0 < a < L`, `L > 0`); callers go through [`BeamInput::validate`]
//! before reaching this module.
//!
//! [`BeamInput::validate`]: crate::calculations::beam::BeamInput::validate

use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::equations::beam::{point_load_reactions, uniform_load_reactions};
use crate::loads::{DistributedLoad, LoadCase, PointLoad};

/// Left and right support reactions, positive upward.
///
/// Only produced by the solver functions below, so `left_kn + right_kn`
/// always equals the applied load.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReactionPair {
    /// Left support reaction RA (kN)
    pub left_kn: f64,
    /// Right support reaction RB (kN)
    pub right_kn: f64,
}

impl ReactionPair {
    /// Sum of both reactions
    pub fn total_kn(&self) -> f64 {
        self.left_kn + self.right_kn
    }
}

impl Add for ReactionPair {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        ReactionPair {
            left_kn: self.left_kn + rhs.left_kn,
            right_kn: self.right_kn + rhs.right_kn,
        }
    }
}

/// RA = Pb/L, RB = Pa/L
pub fn point_load(load: &PointLoad, length_m: f64) -> ReactionPair {
    let (left_kn, right_kn) = point_load_reactions(load.magnitude_kn, load.position_m, length_m);
    ReactionPair { left_kn, right_kn }
}

/// RA = RB = wL/2
pub fn distributed_load(load: &DistributedLoad, length_m: f64) -> ReactionPair {
    let (left_kn, right_kn) = uniform_load_reactions(load.intensity_kn_per_m, length_m);
    ReactionPair { left_kn, right_kn }
}

/// Sum of the reactions of each load acting alone
pub fn point_loads(loads: &[PointLoad], length_m: f64) -> ReactionPair {
    loads
        .iter()
        .map(|load| point_load(load, length_m))
        .fold(ReactionPair::default(), |acc, r| acc + r)
}

/// Reactions for any load case
pub fn solve(case: &LoadCase, length_m: f64) -> ReactionPair {
    match case {
        LoadCase::Point(load) => point_load(load, length_m),
        LoadCase::Distributed(load) => distributed_load(load, length_m),
        LoadCase::MultiplePoint { loads } => point_loads(loads, length_m),
    }
}
