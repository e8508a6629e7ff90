//! Arithmetic on angles.
//!
//! Operators work on the degree value and build a fresh angle, so the result
//! starts with cold caches. Operands pass by value; [`Angle`] is `Clone`, not
//! `Copy`, so clone an operand you still need.

use core::ops::{Add, Div, Mul, Neg, Sub};

use super::core::Angle;

/// Angle + Angle -> Angle
impl Add for Angle {
    type Output = Angle;

    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle::from_degrees(self.degrees() + rhs.degrees())
    }
}

/// Angle - Angle -> Angle
impl Sub for Angle {
    type Output = Angle;

    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_degrees(self.degrees() - rhs.degrees())
    }
}

/// Angle * f64 -> Angle
impl Mul<f64> for Angle {
    type Output = Angle;

    #[inline]
    fn mul(self, rhs: f64) -> Angle {
        Angle::from_degrees(self.degrees() * rhs)
    }
}

/// Angle / f64 -> Angle
impl Div<f64> for Angle {
    type Output = Angle;

    #[inline]
    fn div(self, rhs: f64) -> Angle {
        Angle::from_degrees(self.degrees() / rhs)
    }
}

/// -Angle -> Angle
impl Neg for Angle {
    type Output = Angle;

    #[inline]
    fn neg(self) -> Angle {
        Angle::from_degrees(-self.degrees())
    }
}
