//! # Unit Types
//!
//! Lightweight newtype wrappers for the SI units the calculator reports in.
//! The engine itself works on plain `f64` values with unit-suffixed field
//! names (`length_m`, `magnitude_kn`); these wrappers attach the unit when a
//! value is displayed.
//!
//! - Length: metres (m)
//! - Force: kilonewtons (kN)
//! - Moment: kilonewton-metres (kN·m)
//!
//! ## Example
//!
//! ```rust
//! use flexure_core::units::{KiloNewtonMeters, Meters};
//!
//! assert_eq!(KiloNewtonMeters(250.0).to_string(), "250.00 kN·m");
//! assert_eq!(format!("{:.1}", Meters(2.5)), "2.5 m");
//! ```

use std::fmt;

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Meters(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct KiloNewtons(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct KiloNewtonMeters(pub f64);

// Precision defaults to two decimals and follows `{:.N}` when given.
macro_rules! impl_display {
    ($type:ty, $suffix:expr) => {
        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let precision = f.precision().unwrap_or(2);
                write!(f, "{:.*} {}", precision, self.0, $suffix)
            }
        }
    };
}

impl_display!(Meters, "m");
impl_display!(KiloNewtons, "kN");
impl_display!(KiloNewtonMeters, "kN·m");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(KiloNewtons(75.0).to_string(), "75.00 kN");
        assert_eq!(KiloNewtons(-12.5).to_string(), "-12.50 kN");
        assert_eq!(format!("{:.1}", Meters(2.5)), "2.5 m");
        assert_eq!(format!("{:.3}", KiloNewtonMeters(187.5)), "187.500 kN·m");
    }
}
