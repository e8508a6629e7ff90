//! Core angle type with dual degree/hour views and cached trigonometry.
//!
//! This module provides [`Angle`], the fundamental angular measurement type of this
//! crate. The value is stored as decimal degrees (f64); an hours view (1h = 15°) is
//! derived on demand for right-ascension style quantities.
//!
//! # Caching
//!
//! Radians and the sine/cosine pair are computed lazily and kept per instance. Each
//! cached quantity carries a dirty flag: every setter marks both caches dirty, and the
//! first read after a mutation recomputes exactly once. [`Angle::set_radians`] seeds
//! the radians cache directly from its argument, so a radians read-back is exact.
//!
//! # Thread Safety
//!
//! The caches use [`Cell`], so reads like [`Angle::radians`] and [`Angle::sin_cos`]
//! may write cache fields through `&self`. An `Angle` is therefore `!Sync`: sharing
//! one instance across threads is a compile error, and callers that need concurrent
//! access must give each thread its own clone.
//!
//! # Quick Start
//!
//! ```
//! use skyangle::Angle;
//!
//! let mut a = Angle::from_degrees(45.0);
//! assert!((a.radians() - 0.7853981633974483).abs() < 1e-12);
//!
//! // Mutation invalidates the caches; the next read recomputes.
//! a.set_degrees(90.0);
//! assert!((a.radians() - 1.5707963267948966).abs() < 1e-12);
//!
//! let (sin, cos) = a.sin_cos();
//! assert!((sin - 1.0).abs() < 1e-12);
//! assert!(cos.abs() < 1e-12);
//! ```
//!
//! # Hour Angles
//!
//! Right ascension is conventionally measured in hours, where 24h = 360°:
//!
//! ```
//! use skyangle::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert!((ra.degrees() - 90.0).abs() < 1e-10);
//! ```

use core::cell::Cell;
use core::cmp::Ordering;
use core::fmt;

use crate::constants::{DEG_PER_HOUR, DEG_TO_RAD, RAD_TO_DEG};

use super::sexagesimal::compose;

/// An angular measurement stored as decimal degrees, with lazily cached
/// radians and sine/cosine.
///
/// `Angle` is `Clone` but not `Copy`: the cache fields are [`Cell`]s, which also
/// makes the type `!Sync` (see the module docs for the threading contract).
/// Equality and ordering compare the degree value only; cache state is invisible.
///
/// Setters accept any float structurally. Non-finite values do not crash, but
/// component accessors and formatters give meaningless output for them; the
/// string parser is the only entry point that rejects non-finite input.
#[derive(Clone)]
pub struct Angle {
    degrees: f64,
    radians: Cell<f64>,
    radians_dirty: Cell<bool>,
    sin: Cell<f64>,
    cos: Cell<f64>,
    trig_dirty: Cell<bool>,
}

impl Angle {
    /// Zero angle (0°).
    pub const ZERO: Self = Self::from_degrees(0.0);

    /// Creates an angle from decimal degrees.
    ///
    /// This is the `const` constructor: degrees are the internal representation,
    /// so no arithmetic is involved. The caches start dirty.
    #[inline]
    pub const fn from_degrees(deg: f64) -> Self {
        Self {
            degrees: deg,
            radians: Cell::new(0.0),
            radians_dirty: Cell::new(true),
            sin: Cell::new(0.0),
            cos: Cell::new(0.0),
            trig_dirty: Cell::new(true),
        }
    }

    /// Creates an angle from decimal hours (1h = 15°).
    ///
    /// # Example
    ///
    /// ```
    /// use skyangle::Angle;
    ///
    /// let a = Angle::from_hours(1.0);
    /// assert!((a.degrees() - 15.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self::from_degrees(h * DEG_PER_HOUR)
    }

    /// Creates an angle from radians.
    ///
    /// The radians cache is seeded with the argument itself, so
    /// [`radians`](Self::radians) returns it bit-exactly with no round trip
    /// through degrees. The sine/cosine cache starts dirty as usual.
    ///
    /// # Example
    ///
    /// ```
    /// use skyangle::Angle;
    /// use std::f64::consts::PI;
    ///
    /// let a = Angle::from_radians(PI);
    /// assert_eq!(a.radians(), PI);
    /// assert!((a.degrees() - 180.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn from_radians(rad: f64) -> Self {
        let a = Self::from_degrees(rad * RAD_TO_DEG);
        a.radians.set(rad);
        a.radians_dirty.set(false);
        a
    }

    /// Creates an angle from degree, arcminute, arcsecond, and milliarcsecond parts.
    ///
    /// The parts contribute their absolute magnitudes; the sign of the first
    /// nonzero part (coarse to fine) signs the whole value. That rule is the
    /// inverse of the component accessors, so a decomposition reconstructs
    /// exactly even when the degree part is zero:
    ///
    /// ```
    /// use skyangle::Angle;
    ///
    /// let dec = Angle::from_dms(-23, 26, 21, 0);
    /// assert!((dec.degrees() + 23.439166666666665).abs() < 1e-9);
    ///
    /// // -0° 30' 00": the arcmin part carries the sign
    /// let small = Angle::from_dms(0, -30, 0, 0);
    /// assert!((small.degrees() + 0.5).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_dms(d: i32, m: i32, s: i32, ms: i32) -> Self {
        Self::from_degrees(compose(d as f64, m as f64, s as f64, ms as f64))
    }

    /// Creates an angle from hour, minute, second, and millisecond parts.
    ///
    /// Same sign rule as [`from_dms`](Self::from_dms), scaled by 15°/h.
    #[inline]
    pub fn from_hms(h: i32, m: i32, s: i32, ms: i32) -> Self {
        Self::from_degrees(DEG_PER_HOUR * compose(h as f64, m as f64, s as f64, ms as f64))
    }

    /// Sets the value in decimal degrees and marks both caches dirty.
    #[inline]
    pub fn set_degrees(&mut self, deg: f64) {
        self.degrees = deg;
        self.radians_dirty.set(true);
        self.trig_dirty.set(true);
    }

    /// Sets the value in decimal hours (1h = 15°).
    #[inline]
    pub fn set_hours(&mut self, h: f64) {
        self.set_degrees(h * DEG_PER_HOUR);
    }

    /// Sets the value from degree/arcminute/arcsecond/milliarcsecond parts.
    /// Sign rule as in [`from_dms`](Self::from_dms).
    #[inline]
    pub fn set_dms(&mut self, d: i32, m: i32, s: i32, ms: i32) {
        self.set_degrees(compose(d as f64, m as f64, s as f64, ms as f64));
    }

    /// Sets the value from hour/minute/second/millisecond parts.
    /// Sign rule as in [`from_dms`](Self::from_dms).
    #[inline]
    pub fn set_hms(&mut self, h: i32, m: i32, s: i32, ms: i32) {
        self.set_degrees(DEG_PER_HOUR * compose(h as f64, m as f64, s as f64, ms as f64));
    }

    /// Sets the value in radians.
    ///
    /// Converts to degrees for storage and seeds the radians cache with the
    /// argument, clearing its dirty flag. The sine/cosine cache stays dirty.
    ///
    /// # Example
    ///
    /// ```
    /// use skyangle::Angle;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let mut a = Angle::ZERO;
    /// a.set_radians(FRAC_PI_2);
    /// assert_eq!(a.radians(), FRAC_PI_2);
    /// assert!((a.degrees() - 90.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn set_radians(&mut self, rad: f64) {
        self.set_degrees(rad * RAD_TO_DEG);
        self.radians.set(rad);
        self.radians_dirty.set(false);
    }

    /// Returns the value in decimal degrees.
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Returns the value in decimal hours (degrees / 15).
    #[inline]
    pub fn hours(&self) -> f64 {
        self.degrees / DEG_PER_HOUR
    }

    /// Returns the value in radians, recomputing the cache if dirty.
    ///
    /// The first call after a mutation converts once; later calls return the
    /// cached value unchanged.
    pub fn radians(&self) -> f64 {
        if self.radians_dirty.get() {
            self.radians.set(self.degrees * DEG_TO_RAD);
            self.radians_dirty.set(false);
        }
        self.radians.get()
    }

    /// Returns `(sin, cos)` of the angle, recomputing the cache if dirty.
    ///
    /// Both values are produced by one joint `sincos` evaluation and cached
    /// together; the split [`sin`](Self::sin) and [`cos`](Self::cos) accessors
    /// share the same cache.
    ///
    /// # Example
    ///
    /// ```
    /// use skyangle::Angle;
    ///
    /// let a = Angle::from_degrees(30.0);
    /// let (sin, cos) = a.sin_cos();
    /// assert!((sin - 0.5).abs() < 1e-12);
    /// assert!((cos - 0.8660254037844387).abs() < 1e-12);
    /// ```
    pub fn sin_cos(&self) -> (f64, f64) {
        if self.trig_dirty.get() {
            let (sin, cos) = libm::sincos(self.radians());
            self.sin.set(sin);
            self.cos.set(cos);
            self.trig_dirty.set(false);
        }
        (self.sin.get(), self.cos.get())
    }

    /// Returns the sine of the angle.
    #[inline]
    pub fn sin(&self) -> f64 {
        self.sin_cos().0
    }

    /// Returns the cosine of the angle.
    #[inline]
    pub fn cos(&self) -> f64 {
        self.sin_cos().1
    }

    /// Returns a new angle reduced into [0°, 360°).
    ///
    /// # Example
    ///
    /// ```
    /// use skyangle::Angle;
    ///
    /// let a = Angle::from_degrees(-90.0);
    /// assert!((a.normalized().degrees() - 270.0).abs() < 1e-10);
    ///
    /// let b = Angle::from_degrees(725.0);
    /// assert!((b.normalized().degrees() - 5.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::from_degrees(super::normalize::wrap_0_360(self.degrees))
    }
}

impl Default for Angle {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

/// Compares the degree value only; cache state never participates.
impl PartialEq for Angle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.degrees == other.degrees
    }
}

impl PartialOrd for Angle {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.degrees.partial_cmp(&other.degrees)
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Angle")
            .field("degrees", &self.degrees)
            .finish()
    }
}

/// Creates an angle from decimal degrees. Shorthand for [`Angle::from_degrees`].
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}

/// Creates an angle from decimal hours. Shorthand for [`Angle::from_hours`].
#[inline]
pub fn hours(v: f64) -> Angle {
    Angle::from_hours(v)
}

/// Creates an angle from radians. Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}
