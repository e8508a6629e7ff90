//! Range reduction into [0°, 360°).
//!
//! Reduction is a single `fmod` plus one conditional add, not a subtraction
//! loop, so far-out inputs like 1e9 degrees cost the same as nearby ones.

use libm::fmod;

use crate::constants::FULL_CIRCLE_DEG;

/// Wraps a degree value into [0°, 360°).
///
/// # Example
///
/// ```
/// use skyangle::wrap_0_360;
///
/// assert_eq!(wrap_0_360(725.0), 5.0);
/// assert_eq!(wrap_0_360(-90.0), 270.0);
/// assert_eq!(wrap_0_360(360.0), 0.0);
/// ```
#[inline]
pub fn wrap_0_360(deg: f64) -> f64 {
    let mut reduced = fmod(deg, FULL_CIRCLE_DEG);
    if reduced < 0.0 {
        reduced += FULL_CIRCLE_DEG;
    }
    // A tiny negative remainder plus 360.0 can round to exactly 360.0, which
    // would fall outside the half-open range.
    if reduced >= FULL_CIRCLE_DEG {
        reduced -= FULL_CIRCLE_DEG;
    }
    reduced
}
