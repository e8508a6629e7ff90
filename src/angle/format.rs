//! Sexagesimal string rendering.
//!
//! Degree strings carry a one-character sign slot so that columns of mixed-sign
//! values line up: `'-'` for negative, `'+'` on request for positive, a space
//! otherwise. The degree field itself takes its natural width (1 to 3 digits).
//! Hour strings print signed components directly with no sign slot, matching
//! the fixed `00h 00m 00s` layout of observing lists.

use core::fmt;

use super::Angle;

impl Angle {
    /// Renders the degree view as `D° MM' SS"` with a leading sign slot.
    ///
    /// The minute and second fields are zero-padded magnitudes; the sign
    /// appears only in the slot. Pass `force_sign` to print `'+'` on
    /// positive values (declination columns).
    ///
    /// # Example
    ///
    /// ```
    /// use skyangle::Angle;
    ///
    /// let dec = Angle::from_degrees(-0.25);
    /// assert_eq!(dec.to_dms_string(false), "-0° 15' 00\"");
    ///
    /// let lat = Angle::from_degrees(45.5);
    /// assert_eq!(lat.to_dms_string(true), "+45° 30' 00\"");
    /// ```
    pub fn to_dms_string(&self, force_sign: bool) -> String {
        let sign = if self.degrees() < 0.0 {
            '-'
        } else if force_sign && self.degrees() > 0.0 {
            '+'
        } else {
            ' '
        };
        format!(
            "{sign}{}° {:02}' {:02}\"",
            self.degree().abs(),
            self.arcmin().abs(),
            self.arcsec().abs()
        )
    }

    /// Renders the hours view as `HHh MMm SSs`.
    ///
    /// Components print signed; a negative angle inside the first hour shows
    /// the sign on the minute field (`00h -30m 00s`).
    ///
    /// # Example
    ///
    /// ```
    /// use skyangle::Angle;
    ///
    /// let ra = Angle::from_hms(10, 20, 30, 0);
    /// assert_eq!(ra.to_hms_string(), "10h 20m 30s");
    /// ```
    pub fn to_hms_string(&self) -> String {
        format!(
            "{:02}h {:02}m {:02}s",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// Decimal degrees with six fractional digits.
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}
