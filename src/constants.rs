#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// One hour of right ascension spans 15 degrees (24h = 360°).
pub const DEG_PER_HOUR: f64 = 15.0;

pub const ARCSEC_PER_DEG: f64 = 3600.0;

pub const FULL_CIRCLE_DEG: f64 = 360.0;
