//! Apparent geocentric sun: aberration, sidereal time, right ascension and declination.
//!
//! [`sun_coordinates`] chains every stage up to here for a single Julian date. The main
//! calculation runs it once and the sunrise solver runs it at midnight and on the
//! neighbouring days.

use super::heliocentric::{heliocentric_position, HeliocentricPosition};
use super::nutation::{nutation, Nutation};
use crate::math::{asin, atan2, cos, deg2rad, limit_degrees, rad2deg, sin, tan};
use crate::time::{JulianDate, TimeScales};

/// Aberration constant in arc seconds.
const ABERRATION_CONSTANT: f64 = -20.4898;

/// Apparent geocentric position of the sun and Greenwich sidereal time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricSun {
    /// Aberration correction Δτ in degrees
    pub delta_tau: f64,
    /// Apparent sun longitude λ in degrees
    pub lambda: f64,
    /// Greenwich mean sidereal time ν0 in degrees, [0, 360)
    pub nu0: f64,
    /// Greenwich apparent sidereal time ν in degrees
    pub nu: f64,
    /// Geocentric right ascension α in degrees, [0, 360)
    pub alpha: f64,
    /// Geocentric declination δ in degrees
    pub delta: f64,
}

/// Every stage up to the geocentric sun for one Julian date.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SunCoordinates {
    pub(crate) time: TimeScales,
    pub(crate) heliocentric: HeliocentricPosition,
    pub(crate) nutation: Nutation,
    pub(crate) geocentric: GeocentricSun,
}

pub(crate) fn sun_coordinates(date: JulianDate) -> SunCoordinates {
    let time = date.time_scales();
    let heliocentric = heliocentric_position(time.jme);
    let nutation = nutation(time.jce, time.jme);
    let geocentric = geocentric_sun(&time, &heliocentric, &nutation);

    SunCoordinates {
        time,
        heliocentric,
        nutation,
        geocentric,
    }
}

fn geocentric_sun(
    time: &TimeScales,
    heliocentric: &HeliocentricPosition,
    nutation: &Nutation,
) -> GeocentricSun {
    let delta_tau = ABERRATION_CONSTANT / (3600.0 * heliocentric.r);
    let lambda = heliocentric.theta + nutation.delta_psi + delta_tau;

    let nu0 = greenwich_mean_sidereal_time(time.jd, time.jc);
    let nu = nu0 + nutation.delta_psi * cos(deg2rad(nutation.epsilon));

    GeocentricSun {
        delta_tau,
        lambda,
        nu0,
        nu,
        alpha: right_ascension(lambda, nutation.epsilon, heliocentric.beta),
        delta: declination(heliocentric.beta, nutation.epsilon, lambda),
    }
}

fn greenwich_mean_sidereal_time(jd: f64, jc: f64) -> f64 {
    limit_degrees(
        280.460_618_37
            + 360.985_647_366_29 * (jd - 2_451_545.0)
            + jc * jc * (0.000_387_933 - jc / 38_710_000.0),
    )
}

fn right_ascension(lambda: f64, epsilon: f64, beta: f64) -> f64 {
    let lambda_rad = deg2rad(lambda);
    let epsilon_rad = deg2rad(epsilon);

    limit_degrees(rad2deg(atan2(
        sin(lambda_rad) * cos(epsilon_rad) - tan(deg2rad(beta)) * sin(epsilon_rad),
        cos(lambda_rad),
    )))
}

fn declination(beta: f64, epsilon: f64, lambda: f64) -> f64 {
    let beta_rad = deg2rad(beta);
    let epsilon_rad = deg2rad(epsilon);

    rad2deg(asin(
        sin(beta_rad) * cos(epsilon_rad)
            + cos(beta_rad) * sin(epsilon_rad) * sin(deg2rad(lambda)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_geocentric_sun() {
        let date = JulianDate::new(2_452_930.312_847_222, 67.0);
        let sun = sun_coordinates(date).geocentric;

        assert!((sun.delta_tau - -0.005_711_359_293_251_811).abs() < 1e-10);
        assert!((sun.lambda - 204.008_551_928_082_8).abs() < 1e-8);
        assert!((sun.nu0 - 318.515_578_272_772_5).abs() < 1e-6);
        assert!((sun.nu - 318.511_909_841_120_7).abs() < 1e-6);
        assert!((sun.alpha - 202.227_407_827_207_26).abs() < 1e-8);
        assert!((sun.delta - -9.314_340_090_849_106).abs() < 1e-8);
    }

    #[test]
    fn test_midnight_samples_without_delta_t() {
        let midnight = JulianDate::new(2_452_929.5, 0.0);

        let previous = sun_coordinates(midnight.add_days(-1.0)).geocentric;
        let current = sun_coordinates(midnight).geocentric;
        let next = sun_coordinates(midnight.add_days(1.0)).geocentric;

        assert!((previous.alpha - 200.535_902_589_031_08).abs() < 1e-8);
        assert!((current.alpha - 201.467_557_836_853_05).abs() < 1e-8);
        assert!((next.alpha - 202.401_703_555_477_38).abs() < 1e-8);
        assert!((previous.delta - -8.648_145_125_065_572).abs() < 1e-8);
        assert!((current.delta - -9.016_328_513_305_018).abs() < 1e-8);
        assert!((next.delta - -9.382_403_452_582_901).abs() < 1e-8);
    }

    #[test]
    fn test_sidereal_time_at_j2000() {
        assert!((greenwich_mean_sidereal_time(2_451_545.0, 0.0) - 280.460_618_37).abs() < 1e-9);
    }

    #[test]
    fn test_declination_bounded_by_obliquity() {
        for day in 0..366 {
            let date = JulianDate::new(2_460_310.5 + f64::from(day), 69.0);
            let sun = sun_coordinates(date).geocentric;
            assert!(sun.delta.abs() < 23.45);
            assert!((0.0..360.0).contains(&sun.alpha));
            assert!((0.0..360.0).contains(&sun.nu0));
        }
    }
}
