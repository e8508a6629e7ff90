//! Angle storage, sexagesimal views, formatting, and parsing.
//!
//! [`Angle`] is the central type. Construct one from degrees, hours, radians,
//! or sexagesimal parts; read it back in any view. Derived values (radians,
//! sine, cosine) are cached lazily inside the value, see the notes on
//! [`Angle`] itself.

mod core;
mod format;
mod normalize;
mod ops;
mod parse;
#[cfg(feature = "serde")]
mod serde_;
mod sexagesimal;

pub use core::{deg, hours, rad, Angle};
pub use normalize::wrap_0_360;
pub use parse::{parse_degrees, parse_hours};
