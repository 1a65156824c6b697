//! Uniform distributed loads.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A uniform load acting over the full span [0, L].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Load intensity (kN/m), positive downward
    pub intensity_kn_per_m: f64,
}

impl DistributedLoad {
    /// Create a full-span uniform load
    pub fn new(intensity_kn_per_m: f64) -> Self {
        DistributedLoad { intensity_kn_per_m }
    }

    /// Resultant force over a span of the given length (w·L)
    pub fn resultant_kn(&self, length_m: f64) -> f64 {
        self.intensity_kn_per_m * length_m
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !self.intensity_kn_per_m.is_finite() {
            return Err(CalcError::invalid_magnitude(
                "intensity_kn_per_m",
                self.intensity_kn_per_m.to_string(),
                "Load intensity must be a finite number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resultant() {
        assert_eq!(DistributedLoad::new(10.0).resultant_kn(10.0), 100.0);
    }

    #[test]
    fn test_validate() {
        assert!(DistributedLoad::new(-5.0).validate().is_ok());
        assert_eq!(
            DistributedLoad::new(f64::NAN).validate().unwrap_err().error_code(),
            "INVALID_MAGNITUDE"
        );
    }
}
