//! Sexagesimal angle handling for telescope pointing and catalog work.
//!
//! One [`Angle`] value serves both coordinate conventions: read it as degrees
//! (declination, altitude, azimuth) or as hours of right ascension, where one
//! hour spans 15 degrees. Radians and the sine/cosine pair are derived lazily
//! and cached inside the value.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | The [`Angle`] type: construction, views, caches, strings |
//! | [`constants`] | Conversion factors shared across the crate |
//! | [`errors`] | Crate error and result types |
//!
//! # Quick Start
//!
//! ```
//! use skyangle::{parse_hours, Angle};
//!
//! // Right ascension arrives as text, goes out formatted.
//! let ra = parse_hours("12:30:00")?;
//! assert_eq!(ra.to_hms_string(), "12h 30m 00s");
//! assert!((ra.degrees() - 187.5).abs() < 1e-10);
//!
//! // A declination built from parts keeps its sign through the zero degree.
//! let dec = Angle::from_dms(0, -30, 0, 0);
//! assert_eq!(dec.to_dms_string(false), "-0° 30' 00\"");
//! # Ok::<(), skyangle::Error>(())
//! ```
//!
//! # Serde
//!
//! With the `serde` feature enabled, [`Angle`] serializes as its bare degree
//! value.

pub mod angle;
pub mod constants;
pub mod errors;

pub use angle::{deg, hours, parse_degrees, parse_hours, rad, wrap_0_360, Angle};
pub use errors::{Error, Result};
