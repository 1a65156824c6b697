//! Moment Evaluator
//!
//! Samples the bending moment M(x) of a single load over a position grid.
//! Each sample is computed independently with the free-body method: cut the
//! beam at x and sum moments of everything to the left.
//!
//! ## Sign Convention
//! - Positive moment: tension on bottom fiber (sagging)

use serde::{Deserialize, Serialize};

use crate::calculations::reactions::{self, ReactionPair};
use crate::equations::beam::{point_load_moment, uniform_load_moment};
use crate::loads::{DistributedLoad, PointLoad};

/// Default number of diagram samples
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Smallest usable grid: both supports
pub const MIN_RESOLUTION: usize = 2;

/// Largest grid an analysis will allocate
pub const MAX_RESOLUTION: usize = 1_000_000;

// ============================================================================
// Position Grid
// ============================================================================

/// Uniformly spaced sample positions over [0, L].
///
/// The first position is exactly 0 and the last exactly L.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionGrid {
    positions: Vec<f64>,
}

impl PositionGrid {
    /// `resolution` evenly spaced points from 0 to `length_m` inclusive.
    ///
    /// Resolutions outside [`MIN_RESOLUTION`]..=[`MAX_RESOLUTION`] are
    /// clamped into that range.
    pub fn uniform(length_m: f64, resolution: usize) -> Self {
        let n = resolution.clamp(MIN_RESOLUTION, MAX_RESOLUTION);
        let last = n - 1;
        let positions = (0..n)
            .map(|i| if i == last { length_m } else { length_m * i as f64 / last as f64 })
            .collect();
        PositionGrid { positions }
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

// ============================================================================
// Moment Field
// ============================================================================

/// Sampled bending moment diagram: `(position_m, moment_knm)` pairs in
/// ascending position order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MomentField {
    samples: Vec<(f64, f64)>,
}

impl MomentField {
    /// Evaluate `moment` at every grid position
    pub(crate) fn sample(grid: &PositionGrid, moment: impl Fn(f64) -> f64) -> Self {
        let samples = grid.positions().iter().map(|&x| (x, moment(x))).collect();
        MomentField { samples }
    }

    /// All samples
    pub fn samples(&self) -> &[(f64, f64)] {
        &self.samples
    }

    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|&(x, _)| x)
    }

    pub fn moments(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|&(_, m)| m)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample-by-sample sum of two fields over the same grid.
    ///
    /// Positions are taken from `self`; both fields must share a grid.
    pub(crate) fn superpose(&self, other: &MomentField) -> MomentField {
        debug_assert_eq!(self.len(), other.len());
        let samples = self
            .samples
            .iter()
            .zip(&other.samples)
            .map(|(&(x, a), &(_, b))| (x, a + b))
            .collect();
        MomentField { samples }
    }

    /// Largest sampled moment, first occurrence on ties
    pub fn max_sample(&self) -> Option<(f64, f64)> {
        self.samples.iter().copied().fold(None, |best, sample| match best {
            Some((_, m)) if m >= sample.1 => best,
            _ => Some(sample),
        })
    }
}

// ============================================================================
// Single-load response
// ============================================================================

/// A load whose reactions and moment can be evaluated on its own.
pub trait LoadResponse {
    /// Support reactions for this load acting alone on a span of `length_m`
    fn reactions(&self, length_m: f64) -> ReactionPair;

    /// Moment at `x_m` given this load's own reactions
    fn moment_at(&self, x_m: f64, reactions: &ReactionPair) -> f64;
}

impl LoadResponse for PointLoad {
    fn reactions(&self, length_m: f64) -> ReactionPair {
        reactions::point_load(self, length_m)
    }

    /// RA·x left of the load (inclusive), RA·x - P(x - a) right of it
    fn moment_at(&self, x_m: f64, reactions: &ReactionPair) -> f64 {
        point_load_moment(reactions.left_kn, self.magnitude_kn, self.position_m, x_m)
    }
}

impl LoadResponse for DistributedLoad {
    fn reactions(&self, length_m: f64) -> ReactionPair {
        reactions::distributed_load(self, length_m)
    }

    /// RA·x - wx²/2 over the whole span
    fn moment_at(&self, x_m: f64, reactions: &ReactionPair) -> f64 {
        uniform_load_moment(reactions.left_kn, self.intensity_kn_per_m, x_m)
    }
}

/// Sample the moment diagram of one load over `grid`
pub fn evaluate<L: LoadResponse + ?Sized>(grid: &PositionGrid, load: &L, reactions: &ReactionPair) -> MomentField {
    MomentField::sample(grid, |x| load.moment_at(x, reactions))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_grid_endpoints_exact() {
        let grid = PositionGrid::uniform(7.3, DEFAULT_RESOLUTION);
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid.positions()[0], 0.0);
        assert_eq!(grid.positions()[999], 7.3);
        assert!(grid.positions().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_grid_minimum_resolution() {
        let grid = PositionGrid::uniform(4.0, 0);
        assert_eq!(grid.positions(), &[0.0, 4.0]);
    }

    #[test]
    fn test_grid_maximum_resolution() {
        let grid = PositionGrid::uniform(4.0, usize::MAX);
        assert_eq!(grid.len(), MAX_RESOLUTION);
        assert_eq!(grid.positions()[MAX_RESOLUTION - 1], 4.0);
    }

    #[test]
    fn test_point_load_field_shape() {
        // 100 kN at 5 m on 10 m: triangle peaking at 250 kN·m
        let load = PointLoad::new(100.0, 5.0);
        let r = load.reactions(10.0);
        let field = evaluate(&PositionGrid::uniform(10.0, 11), &load, &r);

        let moments: Vec<f64> = field.moments().collect();
        let expected = [0.0, 50.0, 100.0, 150.0, 200.0, 250.0, 200.0, 150.0, 100.0, 50.0, 0.0];
        for (m, e) in moments.iter().zip(expected.iter()) {
            assert!((m - e).abs() < EPSILON, "{} vs {}", m, e);
        }
    }

    #[test]
    fn test_point_load_left_branch_inclusive() {
        let load = PointLoad::new(100.0, 2.5);
        let r = load.reactions(10.0);
        assert!((load.moment_at(2.5, &r) - r.left_kn * 2.5).abs() < EPSILON);
        assert!((load.moment_at(2.5, &r) - 187.5).abs() < EPSILON);
    }

    #[test]
    fn test_distributed_field_zero_at_supports() {
        let load = DistributedLoad::new(10.0);
        let r = load.reactions(10.0);
        let field = evaluate(&PositionGrid::uniform(10.0, 101), &load, &r);

        let (first, last) = (field.samples()[0], field.samples()[100]);
        assert_eq!(first, (0.0, 0.0));
        assert!(last.1.abs() < EPSILON);
        assert!((field.samples()[50].1 - 125.0).abs() < EPSILON);
    }

    #[test]
    fn test_superpose_adds_samples() {
        let grid = PositionGrid::uniform(10.0, 5);
        let a = PointLoad::new(10.0, 3.0);
        let b = DistributedLoad::new(2.0);
        let fa = evaluate(&grid, &a, &a.reactions(10.0));
        let fb = evaluate(&grid, &b, &b.reactions(10.0));

        let sum = fa.superpose(&fb);
        for i in 0..grid.len() {
            assert!((sum.samples()[i].1 - (fa.samples()[i].1 + fb.samples()[i].1)).abs() < EPSILON);
            assert_eq!(sum.samples()[i].0, grid.positions()[i]);
        }
    }

    #[test]
    fn test_max_sample_first_on_tie() {
        let field = MomentField::sample(&PositionGrid::uniform(4.0, 5), |x| if x >= 1.0 && x <= 2.0 { 5.0 } else { 0.0 });
        assert_eq!(field.max_sample(), Some((1.0, 5.0)));
        assert_eq!(MomentField::default().max_sample(), None);
    }
}
