//! Elevation with refraction, zenith and azimuth angles, and surface incidence.

use crate::math::{acos, asin, atan2, cos, deg2rad, limit_degrees, rad2deg, sin, tan};

/// Apparent sun radius in degrees.
pub(crate) const SUN_RADIUS: f64 = 0.26667;

/// Local horizon coordinates of the sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonAngles {
    /// Topocentric elevation without refraction e0 in degrees
    pub e0: f64,
    /// Atmospheric refraction correction Δe in degrees
    pub delta_e: f64,
    /// Topocentric elevation e in degrees
    pub e: f64,
    /// Topocentric zenith angle in degrees
    pub zenith: f64,
    /// Astronomers' azimuth, measured westward from south, in degrees [0, 360)
    pub azimuth_astro: f64,
    /// Navigators' azimuth, measured eastward from north, in degrees [0, 360)
    pub azimuth: f64,
}

/// Local atmosphere for the refraction correction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Atmosphere {
    /// millibars
    pub(crate) pressure: f64,
    /// °C
    pub(crate) temperature: f64,
    /// refraction at sunrise/sunset, degrees
    pub(crate) refraction: f64,
}

pub(crate) fn horizon_angles(
    latitude: f64,
    delta_prime: f64,
    h_prime: f64,
    atmosphere: &Atmosphere,
) -> HorizonAngles {
    let e0 = elevation_angle(latitude, delta_prime, h_prime);
    let delta_e = refraction_correction(atmosphere, e0);
    let e = e0 + delta_e;

    let h_prime_rad = deg2rad(h_prime);
    let lat_rad = deg2rad(latitude);
    let azimuth_astro = limit_degrees(rad2deg(atan2(
        sin(h_prime_rad),
        cos(h_prime_rad) * sin(lat_rad) - tan(deg2rad(delta_prime)) * cos(lat_rad),
    )));

    HorizonAngles {
        e0,
        delta_e,
        e,
        zenith: 90.0 - e,
        azimuth_astro,
        azimuth: limit_degrees(azimuth_astro + 180.0),
    }
}

/// Sun altitude for a latitude, declination and local hour angle, in degrees.
pub(crate) fn elevation_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg2rad(latitude);
    let declination_rad = deg2rad(declination);

    rad2deg(asin(
        sin(lat_rad) * sin(declination_rad)
            + cos(lat_rad) * cos(declination_rad) * cos(deg2rad(hour_angle)),
    ))
}

/// Bennett-style refraction. No correction once the sun is fully below the refracted horizon.
fn refraction_correction(atmosphere: &Atmosphere, e0: f64) -> f64 {
    if e0 >= -(SUN_RADIUS + atmosphere.refraction) {
        (atmosphere.pressure / 1010.0) * (283.0 / (273.0 + atmosphere.temperature)) * 1.02
            / (60.0 * tan(deg2rad(e0 + 10.3 / (e0 + 5.11))))
    } else {
        0.0
    }
}

/// Angle between the sun and the normal of a tilted surface, in degrees.
///
/// `azimuth_rotation` is measured from south, matching the astronomers' azimuth.
pub(crate) fn incidence_angle(
    zenith: f64,
    azimuth_astro: f64,
    azimuth_rotation: f64,
    slope: f64,
) -> f64 {
    let zenith_rad = deg2rad(zenith);
    let slope_rad = deg2rad(slope);

    rad2deg(acos(
        cos(zenith_rad) * cos(slope_rad)
            + sin(slope_rad) * sin(zenith_rad) * cos(deg2rad(azimuth_astro - azimuth_rotation)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN_ATMOSPHERE: Atmosphere = Atmosphere {
        pressure: 820.0,
        temperature: 11.0,
        refraction: 0.5667,
    };

    #[test]
    fn test_reference_horizon_angles() {
        let angles = horizon_angles(
            39.742476,
            -9.316_178_699_714_907,
            11.106_270_548_897_603,
            &GOLDEN_ATMOSPHERE,
        );

        assert!((angles.e0 - 39.872_045_903_847_18).abs() < 1e-9);
        assert!((angles.delta_e - 0.016_332_072_123_099_44).abs() < 1e-10);
        assert!((angles.zenith - 50.111_622_024_029_72).abs() < 1e-9);
        assert!((angles.azimuth_astro - 14.340_240_510_191_62).abs() < 1e-9);
        assert!((angles.azimuth - 194.340_240_510_191_62).abs() < 1e-9);
    }

    #[test]
    fn test_reference_incidence() {
        let incidence = incidence_angle(50.111_622_024_029_72, 14.340_240_510_191_62, -10.0, 30.0);
        assert!((incidence - 25.187_000_200_353_15).abs() < 1e-9);
    }

    #[test]
    fn test_flat_surface_incidence_equals_zenith() {
        assert!((incidence_angle(42.0, 120.0, 0.0, 0.0) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_refraction_suppressed_below_horizon() {
        let threshold = -(SUN_RADIUS + GOLDEN_ATMOSPHERE.refraction);
        assert_eq!(refraction_correction(&GOLDEN_ATMOSPHERE, threshold - 0.01), 0.0);
        assert!(refraction_correction(&GOLDEN_ATMOSPHERE, threshold) > 0.0);
        assert!(refraction_correction(&GOLDEN_ATMOSPHERE, 0.0) > 0.3);
        assert!(refraction_correction(&GOLDEN_ATMOSPHERE, 89.0) < 0.001);

        let night = horizon_angles(39.742476, -20.0, 180.0, &GOLDEN_ATMOSPHERE);
        assert_eq!(night.delta_e, 0.0);
        assert_eq!(night.e, night.e0);
    }

    #[test]
    fn test_azimuth_conventions() {
        // sun due south at transit in the northern hemisphere
        let noon = horizon_angles(40.0, 0.0, 0.0, &GOLDEN_ATMOSPHERE);
        assert!(noon.azimuth_astro.abs() < 1e-9 || (noon.azimuth_astro - 360.0).abs() < 1e-9);
        assert!((noon.azimuth - 180.0).abs() < 1e-9);
        assert!((noon.e0 - 50.0).abs() < 1e-9);
    }
}
