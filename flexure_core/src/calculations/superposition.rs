//! Superposition Aggregator
//!
//! Combines point loads linearly: each load is solved as if acting alone on
//! the same simply supported span, then moments and reactions are summed.
//! Valid because the beam is linear-elastic and statically determinate. The
//! result does not depend on load order beyond floating-point rounding.

use log::trace;

use crate::calculations::moment::{self, LoadResponse, MomentField, PositionGrid};
use crate::calculations::reactions::ReactionPair;
use crate::loads::PointLoad;

/// Summed response of several point loads on one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Superposition {
    /// RA_total, RB_total
    pub reactions: ReactionPair,
    /// M_total(x) over the shared grid
    pub field: MomentField,
}

/// Evaluate each load once on `grid` and accumulate moments and reactions
pub fn superpose_point_loads(loads: &[PointLoad], length_m: f64, grid: &PositionGrid) -> Superposition {
    let mut reactions = ReactionPair::default();
    let mut field = MomentField::sample(grid, |_| 0.0);

    for (i, load) in loads.iter().enumerate() {
        let own = load.reactions(length_m);
        trace!(
            "load {}: P={} at a={} -> RA={}, RB={}",
            i + 1,
            load.magnitude_kn,
            load.position_m,
            own.left_kn,
            own.right_kn
        );
        field = field.superpose(&moment::evaluate(grid, load, &own));
        reactions = reactions + own;
    }

    Superposition { reactions, field }
}

/// Superposed moment at a single position
pub fn moment_at(loads: &[PointLoad], length_m: f64, x_m: f64) -> f64 {
    loads
        .iter()
        .map(|load| load.moment_at(x_m, &load.reactions(length_m)))
        .sum()
}
