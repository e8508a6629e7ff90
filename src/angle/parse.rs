//! Angle parsing from free-form text.
//!
//! Input is tried against three shapes in order: a whole number, a decimal
//! literal, then a delimited field list. The unit of the final value comes
//! from the entry point, never from the text itself, so `10h 20m 30s` parsed
//! through [`parse_degrees`] reads as degrees.
//!
//! ```text
//! Whole number:     45          (whole degrees or hours)
//! Decimal literal:  45.5
//! Colon-delimited:  12:30:00    (also 12:30, seconds synthesized)
//! Space-delimited:  -10 30 0    (also -10 30)
//! Unit markers:     10h 20m 30s   or   10d 20m 30s
//! ```
//!
//! A two-field entry with a fractional second field expands into three: the
//! fraction becomes whole seconds, so `10:20.5` reads as `10:20:30`. Fields
//! beyond the third are ignored. The sign belongs on the first field;
//! a later negative field flips nothing once an earlier field is nonzero.

use libm::trunc;
use once_cell::sync::Lazy;
use regex::Regex;

use super::sexagesimal::compose;
use super::Angle;
use crate::errors::{Error, Result};

static COARSE_UNIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("[dh]").unwrap());
static MINUTE_UNIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("m").unwrap());
static SECOND_UNIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("s").unwrap());

/// Parses text as an angle in the degree view.
///
/// # Example
///
/// ```
/// use skyangle::parse_degrees;
///
/// let dec = parse_degrees("-10 30").unwrap();
/// assert!((dec.degrees() + 10.5).abs() < 1e-10);
/// ```
pub fn parse_degrees(text: &str) -> Result<Angle> {
    parse_value(text).map(Angle::from_degrees)
}

/// Parses text as an angle in the hours view (1h = 15 degrees).
///
/// # Example
///
/// ```
/// use skyangle::parse_hours;
///
/// let ra = parse_hours("12:30:00").unwrap();
/// assert!((ra.hours() - 12.5).abs() < 1e-10);
/// ```
pub fn parse_hours(text: &str) -> Result<Angle> {
    parse_value(text).map(Angle::from_hours)
}

/// Parses [`parse_degrees`]-style text.
impl core::str::FromStr for Angle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_degrees(s)
    }
}

fn parse_value(text: &str) -> Result<f64> {
    let entry = text.trim();

    let value = if let Ok(whole) = entry.parse::<i32>() {
        f64::from(whole)
    } else if let Ok(literal) = entry.parse::<f64>() {
        literal
    } else {
        delimited_fields(entry)?
    };

    if !value.is_finite() {
        return Err(Error::NonFinite(value));
    }
    Ok(value)
}

/// Splits on colons when present, otherwise on whitespace, and reads the first
/// three fields as coarse, minute, second. Empty colon fields drop out, so
/// `12::30` reads as two fields.
fn delimited_fields(entry: &str) -> Result<f64> {
    let mut fields: Vec<String> = if entry.contains(':') {
        entry
            .split(':')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_owned)
            .collect()
    } else {
        entry.split_whitespace().map(str::to_owned).collect()
    };

    // A fractional second field expands into whole minutes plus seconds.
    // A non-finite value stays in its field and fails the integer parse below.
    if fields.len() == 2 {
        match fields[1].parse::<f64>() {
            Ok(mixed) if mixed.is_finite() => {
                let whole = trunc(mixed);
                fields[1] = format!("{}", whole as i32);
                fields.push(format!("{}", (60.0 * (mixed - whole)) as i32));
            }
            _ => fields.push("0".to_owned()),
        }
    }
    if fields.len() < 3 {
        return Err(Error::MalformedAngle(entry.to_owned()));
    }

    let coarse = COARSE_UNIT_REGEX.replace_all(&fields[0], "");
    let minute = MINUTE_UNIT_REGEX.replace_all(&fields[1], "");
    let second = SECOND_UNIT_REGEX.replace_all(&fields[2], "");

    let c: i32 = coarse
        .parse()
        .map_err(|_| Error::MalformedAngle(entry.to_owned()))?;
    let m: i32 = minute
        .parse()
        .map_err(|_| Error::MalformedAngle(entry.to_owned()))?;
    let s: f64 = second
        .parse()
        .map_err(|_| Error::MalformedAngle(entry.to_owned()))?;

    Ok(compose(c as f64, m as f64, s, 0.0))
}
