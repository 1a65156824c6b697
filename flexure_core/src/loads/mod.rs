//! Load definitions for a simply supported beam.
//!
//! # Overview
//!
//! - [`PointLoad`] - Concentrated force at a position strictly inside the span
//! - [`DistributedLoad`] - Uniform intensity over the full span
//! - [`LoadCase`] - The single load configuration analysed at a time
//! - [`LoadSummaryRow`] - Tabular view of point loads for display
//!
//! # Example
//!
//! ```
//! use flexure_core::loads::{LoadCase, PointLoad};
//!
//! let case = LoadCase::multiple(vec![
//!     PointLoad::new(50.0, 3.0),
//!     PointLoad::new(50.0, 7.0),
//! ]);
//!
//! assert!(case.validate(10.0).is_ok());
//! assert_eq!(case.total_load_kn(10.0), 100.0);
//! ```

pub mod distributed;
pub mod point;

pub use distributed::DistributedLoad;
pub use point::PointLoad;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Largest number of simultaneous point loads in a multiple-load case
pub const MAX_POINT_LOADS: usize = 5;

/// Load configuration for one analysis.
///
/// Exactly one variant is active per analysis.
///
/// ## JSON Example
///
/// ```json
/// { "type": "MultiplePoint", "loads": [
///     { "magnitude_kn": 50.0, "position_m": 3.0 },
///     { "magnitude_kn": 50.0, "position_m": 7.0 }
/// ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LoadCase {
    /// One concentrated load
    Point(PointLoad),
    /// Uniform load over the full span
    Distributed(DistributedLoad),
    /// Ordered sequence of 1 to [`MAX_POINT_LOADS`] concentrated loads
    MultiplePoint { loads: Vec<PointLoad> },
}

impl LoadCase {
    /// Single point load case
    pub fn point(magnitude_kn: f64, position_m: f64) -> Self {
        LoadCase::Point(PointLoad::new(magnitude_kn, position_m))
    }

    /// Full-span uniform load case
    pub fn distributed(intensity_kn_per_m: f64) -> Self {
        LoadCase::Distributed(DistributedLoad::new(intensity_kn_per_m))
    }

    /// Multiple point load case
    pub fn multiple(loads: Vec<PointLoad>) -> Self {
        LoadCase::MultiplePoint { loads }
    }

    /// `count` equal loads spaced evenly along the span.
    ///
    /// Load `i` (zero-based) sits at `(i + 1)·L / (count + 1)`, the layout a
    /// fresh multiple-load form starts from.
    pub fn evenly_spaced(count: usize, magnitude_kn: f64, length_m: f64) -> CalcResult<Self> {
        if count == 0 || count > MAX_POINT_LOADS {
            return Err(CalcError::invalid_load_count(count, MAX_POINT_LOADS));
        }
        let spacing = length_m / (count + 1) as f64;
        let loads = (0..count)
            .map(|i| PointLoad::new(magnitude_kn, (i + 1) as f64 * spacing))
            .collect();
        Ok(LoadCase::MultiplePoint { loads })
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadCase::Point(_) => "Point Load",
            LoadCase::Distributed(_) => "Uniform Distributed Load",
            LoadCase::MultiplePoint { .. } => "Multiple Point Loads",
        }
    }

    /// Total downward load carried by the supports
    pub fn total_load_kn(&self, length_m: f64) -> f64 {
        match self {
            LoadCase::Point(load) => load.magnitude_kn,
            LoadCase::Distributed(load) => load.resultant_kn(length_m),
            LoadCase::MultiplePoint { loads } => loads.iter().map(|l| l.magnitude_kn).sum(),
        }
    }

    /// Point loads in input order (empty for the distributed case)
    pub fn point_loads(&self) -> &[PointLoad] {
        match self {
            LoadCase::Point(load) => std::slice::from_ref(load),
            LoadCase::Distributed(_) => &[],
            LoadCase::MultiplePoint { loads } => loads,
        }
    }

    /// Rows for a load summary table, numbered from 1
    pub fn load_table(&self) -> Vec<LoadSummaryRow> {
        self.point_loads()
            .iter()
            .enumerate()
            .map(|(i, load)| LoadSummaryRow {
                index: i + 1,
                magnitude_kn: load.magnitude_kn,
                position_m: load.position_m,
            })
            .collect()
    }

    /// Validate every load against a beam of the given length
    pub fn validate(&self, length_m: f64) -> CalcResult<()> {
        match self {
            LoadCase::Point(load) => load.validate(length_m, "load"),
            LoadCase::Distributed(load) => load.validate(),
            LoadCase::MultiplePoint { loads } => {
                if loads.is_empty() || loads.len() > MAX_POINT_LOADS {
                    return Err(CalcError::invalid_load_count(loads.len(), MAX_POINT_LOADS));
                }
                for (i, load) in loads.iter().enumerate() {
                    load.validate(length_m, &format!("loads[{}]", i))?;
                }
                Ok(())
            }
        }
    }
}

/// One row of the load summary table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSummaryRow {
    /// 1-based load number
    pub index: usize,
    /// Load magnitude (kN)
    pub magnitude_kn: f64,
    /// Distance from the left support (m)
    pub position_m: f64,
}
