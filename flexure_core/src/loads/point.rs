//! Concentrated loads.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A concentrated force applied at a single position.
///
/// Magnitude is positive downward. A negative magnitude is accepted and
/// represents an upward force; the formulas are linear in `P`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude (kN), positive downward
    pub magnitude_kn: f64,
    /// Distance from the left support (m)
    pub position_m: f64,
}

impl PointLoad {
    /// Create a point load
    pub fn new(magnitude_kn: f64, position_m: f64) -> Self {
        PointLoad {
            magnitude_kn,
            position_m,
        }
    }

    /// Distance from the load to the right support (b = L - a)
    pub fn distance_to_right_m(&self, length_m: f64) -> f64 {
        length_m - self.position_m
    }

    /// Check the load against a beam of the given length.
    ///
    /// `field` prefixes the reported field names, e.g. `"loads[2]"`.
    pub fn validate(&self, length_m: f64, field: &str) -> CalcResult<()> {
        if !self.magnitude_kn.is_finite() {
            return Err(CalcError::invalid_magnitude(
                format!("{}.magnitude_kn", field),
                self.magnitude_kn.to_string(),
                "Load magnitude must be a finite number",
            ));
        }
        if !self.position_m.is_finite() || self.position_m <= 0.0 || self.position_m >= length_m {
            return Err(CalcError::invalid_geometry(
                format!("{}.position_m", field),
                self.position_m.to_string(),
                format!("Load must lie strictly between the supports (0, {})", length_m),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_point_load() {
        assert!(PointLoad::new(100.0, 5.0).validate(10.0, "load").is_ok());
        assert!(PointLoad::new(-20.0, 0.1).validate(10.0, "load").is_ok());
    }

    #[test]
    fn test_load_at_support_rejected() {
        let err = PointLoad::new(100.0, 0.0).validate(10.0, "load").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");

        let err = PointLoad::new(100.0, 10.0).validate(10.0, "loads[1]").unwrap_err();
        match err {
            CalcError::InvalidGeometry { field, .. } => assert_eq!(field, "loads[1].position_m"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_magnitude_rejected() {
        let err = PointLoad::new(f64::NAN, 5.0).validate(10.0, "load").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MAGNITUDE");

        let err = PointLoad::new(f64::INFINITY, 5.0).validate(10.0, "load").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MAGNITUDE");
    }

    #[test]
    fn test_distance_to_right() {
        assert_eq!(PointLoad::new(100.0, 2.5).distance_to_right_m(10.0), 7.5);
    }
}
