//! # NREL Solar Position Algorithm
//!
//! Topocentric sun position, surface incidence angle, equation of time and
//! sunrise/transit/sunset, following the NREL SPA by Reda & Andreas (2003).

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The algorithm is accurate to ±0.0003° for years -2000 to 6000. Every request is a single
//! stateless computation: [`spa::calculate`] takes an [`ObservationRequest`] and returns a
//! [`spa::SpaOutput`] holding each intermediate quantity of the pipeline, or a
//! [`ValidationError`] naming the first input out of range.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): `DateTime<Tz>` request construction and event timestamps
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! nrel-spa = "0.1"
//!
//! # Minimal std (no chrono)
//! nrel-spa = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! nrel-spa = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! Diagnostics go through the [`log`] facade: rejected requests and polar days are logged at
//! `debug`, stage milestones at `trace`. No logger is installed by this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use nrel_spa::{spa, ObservationRequest, SunriseResult};
//!
//! // Golden, Colorado, 2003-10-17 12:30:30 MST
//! let request = ObservationRequest::new(2003, 10, 17, 12, 30, 30.0, -105.1786, 39.742476)
//!     .with_timezone(-7.0)
//!     .with_delta_t(67.0)
//!     .with_elevation(1830.14)
//!     .with_pressure(820.0)
//!     .with_temperature(11.0)
//!     .with_slope(30.0)
//!     .with_azimuth_rotation(-10.0);
//!
//! let output = spa::calculate(&request).unwrap();
//! println!("Zenith: {:.6}°", output.zenith());
//! println!("Azimuth: {:.6}°", output.azimuth());
//! println!("Incidence: {:.6}°", output.incidence().unwrap());
//!
//! if let Some(rts) = output.rise_transit_set() {
//!     if let SunriseResult::RegularDay { sunrise, sunset, .. } = rts.events() {
//!         let (h, m, s) = sunrise.hms();
//!         assert_eq!((h, m, s), (6, 12, 43));
//!         assert_eq!(sunset.hms(), (17, 20, 19));
//!     }
//! }
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Astronomers' azimuth**: 0° = South, measured westward
//! - **Zenith angle**: 0° = directly overhead, 90° = horizon
//! - **Longitude**: positive east of Greenwich; **latitude**: positive north

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of reference values in tests
)]

// Public API exports
pub use crate::error::{Field, Result, ValidationError};
pub use crate::spa::SpaOutput;
pub use crate::types::{LocalHours, ObservationRequest, SpaFunction, SunriseResult};

// Algorithm module
pub mod spa;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_datetime_requests_in_different_zones_agree() {
        let datetime_fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();

        let request_fixed = ObservationRequest::from_datetime(&datetime_fixed, -122.4194, 37.7749)
            .with_delta_t(69.0)
            .with_function(SpaFunction::ZenithAzimuth);
        let request_utc = ObservationRequest::from_datetime(&datetime_utc, -122.4194, 37.7749)
            .with_delta_t(69.0)
            .with_function(SpaFunction::ZenithAzimuth);

        let position1 = spa::calculate(&request_fixed).unwrap();
        let position2 = spa::calculate(&request_utc).unwrap();

        // Both should produce identical positions
        assert!((position1.jd() - position2.jd()).abs() < 1e-9);
        assert!((position1.azimuth() - position2.azimuth()).abs() < 1e-7);
        assert!((position1.zenith() - position2.zenith()).abs() < 1e-7);

        assert!((0.0..360.0).contains(&position1.azimuth()));
        assert!((0.0..=180.0).contains(&position1.zenith()));
    }
}
