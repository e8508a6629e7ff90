use skyangle::constants::ARCSEC_PER_DEG;
use skyangle::{deg, hours, parse_degrees, parse_hours, rad, wrap_0_360, Angle, Error};

const ARCSEC: f64 = 1.0 / ARCSEC_PER_DEG;

// --- Construction and views ---

#[test]
fn degree_and_hour_views_describe_one_value() {
    let a = Angle::from_degrees(187.5);
    assert_eq!(a.hours(), 12.5);
    let b = Angle::from_hours(12.5);
    assert_eq!(b.degrees(), 187.5);
}

#[test]
fn free_constructors_match_methods() {
    assert_eq!(deg(45.5), Angle::from_degrees(45.5));
    assert_eq!(hours(3.0), Angle::from_hours(3.0));
    assert_eq!(rad(0.0), Angle::ZERO);
}

#[test]
fn radians_set_then_read_back_exactly() {
    let mut a = Angle::ZERO;
    a.set_radians(skyangle::constants::PI);
    assert_eq!(a.radians(), skyangle::constants::PI);
}

// --- Sexagesimal round trips ---

#[test]
fn parts_reconstruct_within_one_arcsecond() {
    for i in -359..360 {
        for &frac in &[0.0, 0.25, 0.2371, 0.625] {
            let d = f64::from(i) + frac;
            let a = Angle::from_degrees(d);
            let rebuilt = Angle::from_dms(a.degree(), a.arcmin(), a.arcsec(), 0);
            let diff = (rebuilt.degrees() - d).abs();
            assert!(diff <= ARCSEC + 1e-9, "degrees {d}: off by {diff}");
        }
    }
}

#[test]
fn hour_parts_reconstruct_within_one_second() {
    // One second of time is 1/3600 hour.
    let second_of_time = 1.0 / 3600.0;
    for &h in &[-23.7, -12.0, -0.4, 0.0, 0.3, 6.55, 23.9] {
        let a = Angle::from_hours(h);
        let rebuilt = Angle::from_hms(a.hour(), a.minute(), a.second(), 0);
        let diff = (rebuilt.hours() - h).abs();
        assert!(diff <= second_of_time + 1e-9, "hours {h}: off by {diff}");
    }
}

#[test]
fn fractional_negative_angle_keeps_its_sign_through_parts() {
    let a = Angle::from_degrees(-0.25);
    assert_eq!((a.degree(), a.arcmin(), a.arcsec()), (0, -15, 0));
    let rebuilt = Angle::from_dms(a.degree(), a.arcmin(), a.arcsec(), 0);
    assert!((rebuilt.degrees() + 0.25).abs() < 1e-12);
}

// --- Caching across mutation ---

#[test]
fn trig_cache_follows_mutation() {
    let mut a = Angle::from_degrees(30.0);
    let _ = a.sin_cos();
    a.set_degrees(90.0);
    let (sin, cos) = a.sin_cos();
    assert!((sin - 1.0).abs() < 1e-12);
    assert!(cos.abs() < 1e-12);
}

#[test]
fn repeated_reads_are_bit_stable() {
    let a = Angle::from_degrees(123.456);
    assert_eq!(a.radians(), a.radians());
    assert_eq!(a.sin_cos(), a.sin_cos());
}

// --- Normalization ---

#[test]
fn normalized_lands_in_range_for_wild_inputs() {
    for &d in &[-1e-14, -0.001, 360.0, 725.0, -725.0, 1.0e9, -1.0e9] {
        let n = Angle::from_degrees(d).normalized();
        assert!(
            (0.0..360.0).contains(&n.degrees()),
            "degrees {d} wrapped to {}",
            n.degrees()
        );
    }
}

#[test]
fn normalized_keeps_in_range_value() {
    let a = Angle::from_degrees(123.456).normalized();
    assert_eq!(a.degrees(), 123.456);
    assert_eq!(wrap_0_360(123.456), 123.456);
}

// --- Parse-format flows ---

#[test]
fn parsed_right_ascension_formats_back() {
    let ra = parse_hours("12:30:00").unwrap();
    assert_eq!(ra.to_hms_string(), "12h 30m 00s");
    assert_eq!(ra.degrees(), 187.5);
}

#[test]
fn parsed_declination_keeps_sign_slot() {
    let dec = parse_degrees("0 -30 0").unwrap();
    assert_eq!(dec.to_dms_string(false), "-0° 30' 00\"");
    assert!((dec.degrees() + 0.5).abs() < 1e-12);
}

#[test]
fn parse_rejects_garbage_and_non_finite() {
    assert!(matches!(
        parse_degrees("abc"),
        Err(Error::MalformedAngle(_))
    ));
    assert!(matches!(parse_degrees("inf"), Err(Error::NonFinite(_))));
}

#[test]
fn hour_sign_boundary_formats() {
    assert_eq!(Angle::from_degrees(-7.5).to_hms_string(), "00h -30m 00s");
    assert_eq!(Angle::from_degrees(-15.0).to_hms_string(), "-1h 00m 00s");
}

// --- Arithmetic flows ---

#[test]
fn sum_past_a_turn_normalizes() {
    let total = (Angle::from_degrees(350.0) + Angle::from_degrees(20.0)).normalized();
    assert_eq!(total.degrees(), 10.0);
}

#[test]
fn hour_angle_difference() {
    let lst = Angle::from_hours(14.0);
    let ra = Angle::from_hours(12.5);
    let ha = lst - ra;
    assert_eq!(ha.hours(), 1.5);
    assert_eq!(ha.to_hms_string(), "01h 30m 00s");
}
