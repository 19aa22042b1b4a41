//! Parallax correction from the geocenter to the observer.

use crate::math::{atan, atan2, cos, deg2rad, limit_degrees, rad2deg, sin, tan};

/// Earth flattening factor, b/a.
const EARTH_FLATTENING_FACTOR: f64 = 0.99664719;

/// Equatorial Earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_378_140.0;

/// Sun position as seen from the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopocentricSun {
    /// Observer local hour angle H in degrees, [0, 360)
    pub h: f64,
    /// Sun equatorial horizontal parallax ξ in degrees
    pub xi: f64,
    /// Parallax in right ascension Δα in degrees
    pub delta_alpha: f64,
    /// Topocentric declination δ′ in degrees
    pub delta_prime: f64,
    /// Topocentric right ascension α′ in degrees
    pub alpha_prime: f64,
    /// Topocentric local hour angle H′ in degrees
    pub h_prime: f64,
}

/// Observer on the Earth's surface.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Observer {
    pub(crate) longitude: f64,
    pub(crate) latitude: f64,
    pub(crate) elevation: f64,
}

/// Shifts a geocentric sun position (sidereal time ν, right ascension α, declination δ and
/// radius vector R) to the observer's location.
pub(crate) fn topocentric_sun(
    observer: &Observer,
    nu: f64,
    alpha: f64,
    delta: f64,
    r: f64,
) -> TopocentricSun {
    let h = limit_degrees(nu + observer.longitude - alpha);
    let xi = 8.794 / (3600.0 * r);

    let lat_rad = deg2rad(observer.latitude);
    let xi_rad = deg2rad(xi);
    let h_rad = deg2rad(h);
    let delta_rad = deg2rad(delta);

    let u = atan(EARTH_FLATTENING_FACTOR * tan(lat_rad));
    let y = EARTH_FLATTENING_FACTOR * sin(u)
        + observer.elevation * sin(lat_rad) / EARTH_RADIUS_METERS;
    let x = cos(u) + observer.elevation * cos(lat_rad) / EARTH_RADIUS_METERS;

    let denominator = cos(delta_rad) - x * sin(xi_rad) * cos(h_rad);
    let delta_alpha_rad = atan2(-x * sin(xi_rad) * sin(h_rad), denominator);
    let delta_prime = rad2deg(atan2(
        (sin(delta_rad) - y * sin(xi_rad)) * cos(delta_alpha_rad),
        denominator,
    ));
    let delta_alpha = rad2deg(delta_alpha_rad);

    TopocentricSun {
        h,
        xi,
        delta_alpha,
        delta_prime,
        alpha_prime: alpha + delta_alpha,
        h_prime: h - delta_alpha,
    }
}
