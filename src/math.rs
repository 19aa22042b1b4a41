//! Angle and time utilities shared by every SPA stage.
//!
//! Trigonometry takes radians; the pipeline keeps its quantities in degrees and converts at
//! each call site with [`deg2rad`] / [`rad2deg`].

#![allow(clippy::many_single_char_names)]

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Converts degrees to radians.
#[inline]
pub fn deg2rad(degrees: f64) -> f64 {
    (PI / 180.0) * degrees
}

/// Converts radians to degrees.
#[inline]
pub fn rad2deg(radians: f64) -> f64 {
    (180.0 / PI) * radians
}

/// Reduces an angle in degrees to [0, 360).
pub fn limit_degrees(degrees: f64) -> f64 {
    let turns = degrees / 360.0;
    let mut limited = 360.0 * (turns - floor(turns));
    if limited < 0.0 {
        limited += 360.0;
    }
    // `turns - floor(turns)` can round up to exactly 1.0 for tiny negative inputs
    if limited >= 360.0 {
        limited -= 360.0;
    }
    limited
}

/// Reduces an angle in degrees to (-180, 180].
pub fn limit_degrees_180pm(degrees: f64) -> f64 {
    let turns = degrees / 360.0;
    let limited = 360.0 * (turns - floor(turns));
    if limited < -180.0 {
        limited + 360.0
    } else if limited > 180.0 {
        limited - 360.0
    } else {
        limited
    }
}

/// Reduces an angle in degrees to [0, 180).
pub fn limit_degrees_180(degrees: f64) -> f64 {
    let half_turns = degrees / 180.0;
    let mut limited = 180.0 * (half_turns - floor(half_turns));
    if limited < 0.0 {
        limited += 180.0;
    }
    limited
}

/// Reduces a day fraction to [0, 1).
pub fn limit_zero_to_one(value: f64) -> f64 {
    let limited = value - floor(value);
    if limited < 0.0 {
        limited + 1.0
    } else {
        limited
    }
}

/// Brings an equation-of-time value in minutes back towards [-20, 20].
///
/// Only a single day (1440 minutes) is added or removed; this is not a modulo.
pub fn limit_minutes(minutes: f64) -> f64 {
    if minutes < -20.0 {
        minutes + 1440.0
    } else if minutes > 20.0 {
        minutes - 1440.0
    } else {
        minutes
    }
}

/// Converts a UT day fraction into local clock hours in [0, 24).
pub fn dayfrac_to_local_hours(dayfrac: f64, timezone: f64) -> f64 {
    24.0 * limit_zero_to_one(dayfrac + timezone / 24.0)
}

/// Evaluates `((a·x + b)·x + c)·x + d`.
#[inline]
pub fn third_order_polynomial(a: f64, b: f64, c: f64, d: f64, x: f64) -> f64 {
    ((a * x + b) * x + c) * x + d
}

/// Computes a polynomial using Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = result * x + coeff;
    }
    result
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Truncates toward zero.
#[inline]
pub fn trunc(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.trunc();

    #[cfg(not(feature = "std"))]
    return libm::trunc(x);
}

/// Rounds half away from zero.
#[cfg_attr(not(feature = "chrono"), allow(dead_code))]
#[inline]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

/// Computes |x| using the appropriate function for the compilation target.
#[inline]
pub fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.abs();

    #[cfg(not(feature = "std"))]
    return libm::fabs(x);
}

/// Computes x^n for integer n.
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    return x.powi(n);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, f64::from(n));
}
