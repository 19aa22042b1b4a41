//! Earth heliocentric position from the VSOP87 periodic terms, and its geocentric flip.

use super::coefficients::{TERMS_B, TERMS_L, TERMS_R};
use crate::math::{cos, limit_degrees, powi, rad2deg};

/// Earth heliocentric coordinates and the derived geocentric ecliptic angles of the sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricPosition {
    /// Earth heliocentric longitude L in degrees, [0, 360)
    pub l: f64,
    /// Earth heliocentric latitude B in degrees
    pub b: f64,
    /// Earth radius vector R in AU
    pub r: f64,
    /// Geocentric longitude Θ in degrees, [0, 360)
    pub theta: f64,
    /// Geocentric latitude β in degrees
    pub beta: f64,
}

/// Computes the heliocentric position for a Julian ephemeris millennium.
pub(crate) fn heliocentric_position(jme: f64) -> HeliocentricPosition {
    let l = limit_degrees(rad2deg(earth_value(&TERMS_L, jme)));
    let b = rad2deg(earth_value(&TERMS_B, jme));
    let r = earth_value(&TERMS_R, jme);

    HeliocentricPosition {
        l,
        b,
        r,
        theta: geocentric_longitude(l),
        beta: -b,
    }
}

/// Σ A·cos(B + C·JME) over one row group.
fn periodic_term_sum(terms: &[[f64; 3]], jme: f64) -> f64 {
    terms
        .iter()
        .map(|&[a, b, c]| a * cos(b + c * jme))
        .sum()
}

/// Combines each group's sum with its power of JME, scaled by 10⁻⁸.
fn earth_value(groups: &[&[[f64; 3]]], jme: f64) -> f64 {
    let mut sum = 0.0;
    for (power, terms) in (0_i32..).zip(groups) {
        sum += periodic_term_sum(terms, jme) * powi(jme, power);
    }
    sum / 1.0e8
}

/// Θ = L + 180, kept below 360 with a single subtraction.
fn geocentric_longitude(l: f64) -> f64 {
    let theta = l + 180.0;
    if theta >= 360.0 {
        theta - 360.0
    } else {
        theta
    }
}
