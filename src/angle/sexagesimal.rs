//! Sexagesimal component accessors with a single sign-carrying component.
//!
//! An angle decomposes into (coarse, minute, second, millisecond) parts in either
//! the degree view or the hours view. The parts are pure functions of the current
//! value, recomputed on every call; nothing is stored per component.
//!
//! # Sign Cascade
//!
//! The sign lives on exactly one component: the first nonzero one, coarse to fine.
//! A plain truncating decomposition would lose the sign of `-0° 30' 00"` because
//! its degree component is zero; carrying the sign on the arcminute component
//! keeps the printed form reconstructible.
//!
//! ```
//! use skyangle::Angle;
//!
//! let a = Angle::from_degrees(-0.25); // -0° 15' 00"
//! assert_eq!(a.degree(), 0);
//! assert_eq!(a.arcmin(), -15);
//! assert_eq!(a.arcsec(), 0);
//! ```
//!
//! The hour-view accessors apply the same rule to the hours value, so the sign
//! boundary sits at |hours| < 1, i.e. |degrees| < 15.

use libm::{fabs, trunc};

use super::Angle;

/// Signed base-60 components of one value, in that value's own unit.
#[derive(Clone, Copy, Debug)]
struct SexParts {
    coarse: i32,
    minute: i32,
    second: i32,
    milli: i32,
}

/// Splits a value into truncated base-60 components, then lays the sign of the
/// value on the first nonzero component, coarse to fine.
///
/// Truncation never rounds: 59.999... seconds stays 59. Callers that need the
/// lost remainder back rely on the quantization bound (under one second).
fn split(value: f64) -> SexParts {
    let mag = fabs(value);
    let coarse = trunc(mag);
    let minutes = 60.0 * (mag - coarse);
    let minute = trunc(minutes);
    let seconds = 60.0 * (minutes - minute);
    let second = trunc(seconds);
    let milli = trunc(1000.0 * (seconds - second));

    let mut parts = SexParts {
        coarse: coarse as i32,
        minute: minute as i32,
        second: second as i32,
        milli: milli as i32,
    };
    if value < 0.0 {
        if parts.coarse != 0 {
            parts.coarse = -parts.coarse;
        } else if parts.minute != 0 {
            parts.minute = -parts.minute;
        } else if parts.second != 0 {
            parts.second = -parts.second;
        } else {
            parts.milli = -parts.milli;
        }
    }
    parts
}

/// Inverse of [`split`]: combines magnitude parts into one value, signed by the
/// first nonzero part, coarse to fine.
///
/// Every part contributes its absolute value, so a decomposition that carried
/// its sign on the minute or second component reconstructs exactly.
pub(crate) fn compose(coarse: f64, minute: f64, second: f64, milli: f64) -> f64 {
    let magnitude =
        fabs(coarse) + (fabs(minute) + (fabs(second) + fabs(milli) / 1000.0) / 60.0) / 60.0;
    let negative = [coarse, minute, second, milli]
        .into_iter()
        .find(|part| *part != 0.0)
        .map_or(false, |lead| lead < 0.0);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

impl Angle {
    /// Integer degree component (truncation toward zero).
    #[inline]
    pub fn degree(&self) -> i32 {
        split(self.degrees()).coarse
    }

    /// Arcminute component. Negative only when the degree component is zero
    /// and the angle is negative.
    #[inline]
    pub fn arcmin(&self) -> i32 {
        split(self.degrees()).minute
    }

    /// Arcsecond component. Negative only when the degree and arcminute
    /// components are both zero and the angle is negative.
    #[inline]
    pub fn arcsec(&self) -> i32 {
        split(self.degrees()).second
    }

    /// Milliarcsecond component. Negative only when every coarser component
    /// is zero and the angle is negative.
    #[inline]
    pub fn milliarcsec(&self) -> i32 {
        split(self.degrees()).milli
    }

    /// Integer hour component of the hours view (truncation toward zero).
    #[inline]
    pub fn hour(&self) -> i32 {
        split(self.hours()).coarse
    }

    /// Minute component of the hours view. Sign rule as in
    /// [`arcmin`](Self::arcmin), applied to hours.
    #[inline]
    pub fn minute(&self) -> i32 {
        split(self.hours()).minute
    }

    /// Second component of the hours view.
    #[inline]
    pub fn second(&self) -> i32 {
        split(self.hours()).second
    }

    /// Millisecond component of the hours view.
    #[inline]
    pub fn millisecond(&self) -> i32 {
        split(self.hours()).milli
    }
}
