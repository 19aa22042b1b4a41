//! Julian date and the time scales derived from it.
//!
//! The Julian day is built with truncation toward zero, which differs from `floor` for
//! negative years. Dates before 1582-10-15 are treated as Julian calendar dates.

#![allow(clippy::unreadable_literal)]

use crate::math::trunc;
use crate::types::ObservationRequest;

/// Seconds per day (86,400)
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 TT)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// The five time scales of one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScales {
    /// Julian day
    pub jd: f64,
    /// Julian century
    pub jc: f64,
    /// Julian ephemeris day
    pub jde: f64,
    /// Julian ephemeris century
    pub jce: f64,
    /// Julian ephemeris millennium
    pub jme: f64,
}

/// Julian date together with ΔT, from which every SPA time scale is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    /// Julian Date (JD), referenced to UT
    jd: f64,
    /// TT - UT in seconds
    delta_t: f64,
}

impl JulianDate {
    /// Wraps an already computed Julian day.
    #[must_use]
    pub const fn new(jd: f64, delta_t: f64) -> Self {
        Self { jd, delta_t }
    }

    /// Computes the Julian day of a request's local calendar time.
    ///
    /// The request's timezone is subtracted from the hour and ΔUT1 is added to the seconds,
    /// so the result is referenced to UT.
    #[must_use]
    pub fn from_request(request: &ObservationRequest) -> Self {
        let jd = julian_day(
            request.year(),
            request.month(),
            request.day(),
            request.hour(),
            request.minute(),
            request.second(),
            request.delta_ut1(),
            request.timezone(),
        );
        Self::new(jd, request.delta_t())
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Gets the ΔT value in seconds.
    #[must_use]
    pub const fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Julian Ephemeris Day, JDE = JD + ΔT/86400.
    #[must_use]
    pub fn julian_ephemeris_day(&self) -> f64 {
        self.jd + self.delta_t / SECONDS_PER_DAY
    }

    /// Julian centuries since J2000.0.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Julian ephemeris centuries since J2000.0.
    #[must_use]
    pub fn julian_ephemeris_century(&self) -> f64 {
        (self.julian_ephemeris_day() - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Julian ephemeris millennia since J2000.0.
    #[must_use]
    pub fn julian_ephemeris_millennium(&self) -> f64 {
        self.julian_ephemeris_century() / 10.0
    }

    /// Derives every time scale at once.
    #[must_use]
    pub fn time_scales(&self) -> TimeScales {
        TimeScales {
            jd: self.jd,
            jc: self.julian_century(),
            jde: self.julian_ephemeris_day(),
            jce: self.julian_ephemeris_century(),
            jme: self.julian_ephemeris_millennium(),
        }
    }

    /// Shifts the date by whole or fractional days, keeping ΔT.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self::new(self.jd + days, self.delta_t)
    }

    /// Same Julian day with a different ΔT.
    #[must_use]
    pub const fn with_delta_t(self, delta_t: f64) -> Self {
        Self::new(self.jd, delta_t)
    }
}

/// Julian day of a local calendar time (Reda & Andreas 2003, eq. 4).
#[allow(clippy::too_many_arguments)]
pub(crate) fn julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    delta_ut1: f64,
    timezone: f64,
) -> f64 {
    let day_decimal = f64::from(day)
        + (f64::from(hour) - timezone + (f64::from(minute) + (second + delta_ut1) / 60.0) / 60.0)
            / 24.0;

    let (y, m) = if month < 3 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };

    let mut jd = trunc(365.25 * (y + 4716.0)) + trunc(30.6001 * (m + 1.0)) + day_decimal - 1524.5;

    // Gregorian correction
    if jd > 2_299_160.0 {
        let a = trunc(y / 100.0);
        jd += 2.0 - a + trunc(a / 4.0);
    }

    jd
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn jd(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> f64 {
        julian_day(year, month, day, hour, minute, second, 0.0, 0.0)
    }

    #[test]
    fn test_specific_julian_dates() {
        assert!((jd(2000, 1, 1, 12, 0, 0.0) - 2_451_545.0).abs() < EPSILON);
        assert!((jd(1970, 1, 1, 0, 0, 0.0) - 2_440_587.5).abs() < EPSILON);
        assert!((jd(1987, 1, 27, 0, 0, 0.0) - 2_446_822.5).abs() < EPSILON);
        assert!((jd(1988, 6, 19, 12, 0, 0.0) - 2_447_332.0).abs() < EPSILON);
        assert!((jd(1600, 12, 31, 0, 0, 0.0) - 2_305_812.5).abs() < EPSILON);
        assert!((jd(837, 4, 10, 7, 12, 0.0) - 2_026_871.8).abs() < EPSILON);
        assert!((jd(-1000, 7, 12, 12, 0, 0.0) - 1_356_001.0).abs() < EPSILON);
        assert!((jd(-4712, 1, 1, 12, 0, 0.0) - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_gregorian_calendar_correction() {
        // 1582-10-04 (Julian) is followed by 1582-10-15 (Gregorian)
        let before = jd(1582, 10, 4, 0, 0, 0.0);
        let after = jd(1582, 10, 15, 0, 0, 0.0);
        assert!((after - before - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_timezone_and_delta_ut1() {
        let reference = julian_day(2003, 10, 17, 12, 30, 30.0, 0.0, -7.0);
        assert!((reference - 2_452_930.312_847_222).abs() < EPSILON);

        let utc = jd(2003, 10, 17, 19, 30, 30.0);
        assert!((reference - utc).abs() < EPSILON);

        let shifted = julian_day(2003, 10, 17, 12, 30, 30.0, 0.5, -7.0);
        assert!((shifted - reference - 0.5 / SECONDS_PER_DAY).abs() < EPSILON);
    }

    #[test]
    fn test_hour_24_is_next_midnight() {
        let end_of_day = jd(2003, 10, 17, 24, 0, 0.0);
        let next_day = jd(2003, 10, 18, 0, 0, 0.0);
        assert!((end_of_day - next_day).abs() < EPSILON);
    }

    #[test]
    fn test_january_and_february_use_previous_year() {
        let feb_end = jd(2024, 2, 29, 0, 0, 0.0);
        let mar_start = jd(2024, 3, 1, 0, 0, 0.0);
        assert!((mar_start - feb_end - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_julian_centuries() {
        let date = JulianDate::new(2_451_545.0, 0.0);
        assert_eq!(date.julian_century(), 0.0);
        assert_eq!(date.julian_ephemeris_millennium(), 0.0);

        let date = JulianDate::new(2_451_545.0 + DAYS_PER_CENTURY, 0.0);
        assert!((date.julian_century() - 1.0).abs() < EPSILON);
        assert!((date.julian_ephemeris_millennium() - 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_julian_ephemeris_day() {
        let date = JulianDate::new(2_452_930.312_847_222, 67.0);
        let expected = 2_452_930.312_847_222 + 67.0 / 86_400.0;
        assert!((date.julian_ephemeris_day() - expected).abs() < EPSILON);
        assert!(date.julian_ephemeris_century() > date.julian_century());

        let without = date.with_delta_t(0.0);
        assert_eq!(without.julian_ephemeris_day(), without.julian_date());
    }

    #[test]
    fn test_add_days_keeps_delta_t() {
        let date = JulianDate::new(2_452_930.5, 67.0).add_days(-1.0);
        assert_eq!(date.julian_date(), 2_452_929.5);
        assert_eq!(date.delta_t(), 67.0);
    }

    #[test]
    fn test_from_request() {
        let request = ObservationRequest::new(2003, 10, 17, 12, 30, 30.0, -105.1786, 39.742476)
            .with_timezone(-7.0)
            .with_delta_t(67.0);
        let date = JulianDate::from_request(&request);
        assert!((date.julian_date() - 2_452_930.312_847_222).abs() < EPSILON);
        assert_eq!(date.delta_t(), 67.0);

        let scales = date.time_scales();
        assert!((scales.jc - 0.037_927_798_691_915_17).abs() < 1e-12);
        assert!((scales.jce - 0.037_927_819_922_933_585).abs() < 1e-12);
        assert!((scales.jme - 0.003_792_781_992_293_358).abs() < 1e-12);
        assert_eq!(scales.jde, date.julian_ephemeris_day());
    }
}
