//! # Simply-Supported Beam Formulas
//!
//! Closed-form equations for a simply supported beam under a concentrated
//! load or a full-span uniform load. All formulas assume a pin support at the
//! left end (x = 0) and a roller at the right end (x = L).
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `x` = Position along beam from left support
//! - `a` = Load position from left support, `b = L - a`
//! - `P` = Point load magnitude
//! - `w` = Uniform load intensity (force per unit length)
//! - `M` = Bending moment
//! - `RA` = Left reaction, `RB` = Right reaction
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//! - Reactions: Positive upward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Structural Analysis by R.C. Hibbeler

// =============================================================================
// POINT LOAD FORMULAS
// Simply-supported beam with concentrated load P at distance 'a' from left
// =============================================================================

/// Calculate reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   RA  ←───────L────→ RB
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - RA = P(L-a)/L = Pb/L
/// - RB = Pa/L
///
/// # Returns
/// (RA, RB) - Left and right reactions (positive upward)
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    (p * b / l, p * a / l)
}

/// Moment at position x for point load P at position a, given the left reaction
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - M(x) = RA·x           for x ≤ a
/// - M(x) = RA·x - P(x-a)  for x > a
///
/// The left piece is inclusive; both pieces give RA·a at x = a.
#[inline]
pub fn point_load_moment(ra: f64, p: f64, a: f64, x: f64) -> f64 {
    if x <= a {
        ra * x
    } else {
        ra * x - p * (x - a)
    }
}

/// Maximum moment for point load, at the load point
///
/// # Formula
/// M_max = Pab/L
#[inline]
pub fn point_load_max_moment(p: f64, a: f64, l: f64) -> f64 {
    let b = l - a;
    p * a * b / l
}

// =============================================================================
// UNIFORM LOAD FORMULAS
// Simply-supported beam with uniform load w over entire span
// =============================================================================

/// Calculate reactions for uniform load w over full span L
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///    ═════════════════
///    △                △
///   RA  ←─────L─────→ RB
/// ```
///
/// # Formula
/// RA = RB = wL/2
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Moment at position x for uniform load w, given the left reaction
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// M(x) = RA·x - wx²/2
///
/// With RA = wL/2 this is wx(L-x)/2.
#[inline]
pub fn uniform_load_moment(ra: f64, w: f64, x: f64) -> f64 {
    ra * x - w * x * x / 2.0
}

/// Maximum moment for uniform load
///
/// # Formula
/// M_max = wL²/8  at x = L/2
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}
