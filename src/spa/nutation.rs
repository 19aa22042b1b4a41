//! Nutation in longitude and obliquity (IAU 1980 series) and the obliquity of the ecliptic.

use super::coefficients::{TERMS_PE, TERMS_Y};
use crate::math::{cos, deg2rad, sin, third_order_polynomial};

/// Cubic coefficients `(a, b, c, d)` of the fundamental arguments X0..X4 in JCE.
const FUNDAMENTAL_ARGUMENTS: [[f64; 4]; 5] = [
    // mean elongation of the moon from the sun
    [1.0 / 189_474.0, -0.0019142, 445_267.111_48, 297.85036],
    // mean anomaly of the sun
    [-1.0 / 300_000.0, -0.0001603, 35_999.050_34, 357.52772],
    // mean anomaly of the moon
    [1.0 / 56_250.0, 0.0086972, 477_198.867_398, 134.96298],
    // moon's argument of latitude
    [1.0 / 327_270.0, -0.0036825, 483_202.017_538, 93.27191],
    // longitude of the ascending node of the moon's mean orbit
    [1.0 / 450_000.0, 0.0020708, -1934.136_261, 125.04452],
];

/// Mean obliquity polynomial in U = JME/10, arc seconds, lowest power first.
const MEAN_OBLIQUITY: [f64; 11] = [
    84381.448, -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Nutation and obliquity for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Fundamental arguments X0..X4 in degrees
    pub x: [f64; 5],
    /// Nutation in longitude Δψ in degrees
    pub delta_psi: f64,
    /// Nutation in obliquity Δε in degrees
    pub delta_epsilon: f64,
    /// Mean obliquity of the ecliptic ε0 in arc seconds
    pub epsilon0: f64,
    /// True obliquity of the ecliptic ε in degrees
    pub epsilon: f64,
}

pub(crate) fn nutation(jce: f64, jme: f64) -> Nutation {
    let x = fundamental_arguments(jce);
    let (delta_psi, delta_epsilon) = nutation_longitude_and_obliquity(jce, &x);
    let epsilon0 = ecliptic_mean_obliquity(jme);

    Nutation {
        x,
        delta_psi,
        delta_epsilon,
        epsilon0,
        epsilon: delta_epsilon + epsilon0 / 3600.0,
    }
}

fn fundamental_arguments(jce: f64) -> [f64; 5] {
    FUNDAMENTAL_ARGUMENTS.map(|[a, b, c, d]| third_order_polynomial(a, b, c, d, jce))
}

fn nutation_longitude_and_obliquity(jce: f64, x: &[f64; 5]) -> (f64, f64) {
    let mut sum_psi = 0.0;
    let mut sum_epsilon = 0.0;

    for (y, [a, b, c, d]) in TERMS_Y.iter().zip(TERMS_PE) {
        let argument = deg2rad(xy_term_sum(y, x));
        sum_psi += (a + jce * b) * sin(argument);
        sum_epsilon += (c + jce * d) * cos(argument);
    }

    // terms are in units of 0.0001 arc seconds
    (sum_psi / 36_000_000.0, sum_epsilon / 36_000_000.0)
}

fn xy_term_sum(y: &[i8; 5], x: &[f64; 5]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(&x_j, &y_j)| x_j * f64::from(y_j))
        .sum()
}

fn ecliptic_mean_obliquity(jme: f64) -> f64 {
    let u = jme / 10.0;
    MEAN_OBLIQUITY
        .iter()
        .rev()
        .fold(0.0, |acc, &coefficient| acc * u + coefficient)
}
