//! Extremum Locator
//!
//! Finds the governing (largest signed) bending moment and where it occurs.
//!
//! - Single point load: closed form `Pab/L` at the load point.
//! - Uniform load: closed form `wL²/8` at midspan.
//! - Multiple point loads: either a scan of the sampled diagram, or an exact
//!   search over the supports and load positions. A sum of piecewise-linear
//!   moment diagrams only changes slope at load points, so its maximum is
//!   always at one of those candidates.

use serde::{Deserialize, Serialize};

use crate::calculations::moment::MomentField;
use crate::calculations::superposition;
use crate::equations::beam::{point_load_max_moment, uniform_load_max_moment};
use crate::loads::{DistributedLoad, PointLoad};

/// How the multiple-load maximum is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MultiLoadExtremum {
    /// Evaluate at supports and load positions; independent of resolution
    #[default]
    Exact,
    /// Scan the sampled diagram; accurate to the grid spacing
    Sampled,
}

/// How a reported extremum was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtremumMethod {
    /// Closed-form formula for a single load
    ClosedForm,
    /// Maximum over the sampled diagram
    Sampled,
    /// Maximum over the finite candidate set of positions
    Exact,
}

impl From<MultiLoadExtremum> for ExtremumMethod {
    fn from(choice: MultiLoadExtremum) -> Self {
        match choice {
            MultiLoadExtremum::Exact => ExtremumMethod::Exact,
            MultiLoadExtremum::Sampled => ExtremumMethod::Sampled,
        }
    }
}

/// Maximum signed moment and its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    /// Maximum moment (kN·m), sagging positive
    pub moment_knm: f64,
    /// Distance from the left support (m)
    pub position_m: f64,
    /// How the value was obtained
    pub method: ExtremumMethod,
}

/// `Pab/L` at `x = a`
pub fn point_load_maximum(load: &PointLoad, length_m: f64) -> Extremum {
    Extremum {
        moment_knm: point_load_max_moment(load.magnitude_kn, load.position_m, length_m),
        position_m: load.position_m,
        method: ExtremumMethod::ClosedForm,
    }
}

/// `wL²/8` at `x = L/2`
pub fn distributed_load_maximum(load: &DistributedLoad, length_m: f64) -> Extremum {
    Extremum {
        moment_knm: uniform_load_max_moment(load.intensity_kn_per_m, length_m),
        position_m: length_m / 2.0,
        method: ExtremumMethod::ClosedForm,
    }
}

/// Largest sample of a diagram, first occurrence on ties
pub fn sampled_maximum(field: &MomentField) -> Option<Extremum> {
    field.max_sample().map(|(position_m, moment_knm)| Extremum {
        moment_knm,
        position_m,
        method: ExtremumMethod::Sampled,
    })
}

/// Largest superposed moment over {0, L, each load position}.
///
/// Candidates are visited in ascending position; the first wins on ties.
pub fn exact_maximum(loads: &[PointLoad], length_m: f64) -> Extremum {
    let mut candidates: Vec<f64> = Vec::with_capacity(loads.len() + 2);
    candidates.push(0.0);
    candidates.extend(loads.iter().map(|l| l.position_m));
    candidates.push(length_m);
    candidates.sort_by(|a, b| a.total_cmp(b));

    let mut best = Extremum {
        moment_knm: superposition::moment_at(loads, length_m, candidates[0]),
        position_m: candidates[0],
        method: ExtremumMethod::Exact,
    };
    for &x in &candidates[1..] {
        let m = superposition::moment_at(loads, length_m, x);
        if m > best.moment_knm {
            best.moment_knm = m;
            best.position_m = x;
        }
    }
    best
}

/// Maximum for a multiple point load case using the configured method
pub fn locate_superposed_maximum(
    loads: &[PointLoad],
    length_m: f64,
    field: &MomentField,
    choice: MultiLoadExtremum,
) -> Extremum {
    match choice {
        MultiLoadExtremum::Exact => exact_maximum(loads, length_m),
        MultiLoadExtremum::Sampled => {
            sampled_maximum(field).unwrap_or_else(|| exact_maximum(loads, length_m))
        }
    }
}
