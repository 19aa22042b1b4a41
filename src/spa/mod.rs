//! SPA algorithm implementation.
//!
//! High-accuracy solar positioning based on the NREL algorithm by Reda & Andreas (2003).
//! Accuracy: ±0.0003° for years -2000 to 6000.
//!
//! [`calculate`] validates an [`ObservationRequest`] and runs the stages in order:
//!
//! 1. time scales (JD, JC, JDE, JCE, JME)
//! 2. Earth heliocentric position and geocentric flip
//! 3. nutation and obliquity
//! 4. aberration, sidereal time, geocentric right ascension and declination
//! 5. parallax to topocentric coordinates
//! 6. refraction, zenith and azimuth
//! 7. surface incidence and sunrise/transit/sunset, when selected
//!
//! Every intermediate value is kept in the returned [`SpaOutput`].
//!
//! Reference: Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//! Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use crate::error::validate;
use crate::time::{JulianDate, TimeScales};
use crate::types::ObservationRequest;
use crate::Result;
#[cfg(feature = "chrono")]
use crate::LocalHours;

pub(crate) mod coefficients;
mod geocentric;
mod heliocentric;
mod horizon;
mod nutation;
mod rts;
mod topocentric;

pub use geocentric::GeocentricSun;
pub use heliocentric::HeliocentricPosition;
pub use horizon::HorizonAngles;
pub use nutation::Nutation;
pub use rts::RiseTransitSet;
pub use topocentric::TopocentricSun;

use geocentric::sun_coordinates;
use horizon::{horizon_angles, incidence_angle, Atmosphere};
use topocentric::{topocentric_sun, Observer};

#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

/// Runs the full Solar Position Algorithm for one request.
///
/// Validation happens first; nothing is computed for an invalid request. The incidence
/// angle and the sunrise/transit/set block are only computed when the request's
/// [`crate::SpaFunction`] selects them.
///
/// # Errors
/// Returns [`crate::ValidationError`] naming the first input outside its valid range.
///
/// # Example
/// ```
/// use nrel_spa::{spa, ObservationRequest};
///
/// let request = ObservationRequest::new(2003, 10, 17, 12, 30, 30.0, -105.1786, 39.742476)
///     .with_timezone(-7.0)
///     .with_delta_t(67.0)
///     .with_elevation(1830.14)
///     .with_pressure(820.0)
///     .with_temperature(11.0)
///     .with_slope(30.0)
///     .with_azimuth_rotation(-10.0);
///
/// let output = spa::calculate(&request).unwrap();
/// assert!((output.zenith() - 50.11162).abs() < 1e-5);
/// assert!((output.azimuth() - 194.34024).abs() < 1e-5);
/// ```
pub fn calculate(request: &ObservationRequest) -> Result<SpaOutput> {
    validate(request).map_err(|err| {
        log::debug!("rejected SPA request: {err}");
        err
    })?;

    let date = JulianDate::from_request(request);
    log::trace!(
        "julian day {} with delta T {} s",
        date.julian_date(),
        date.delta_t()
    );

    let sun = sun_coordinates(date);
    log::trace!(
        "geocentric sun: right ascension {}, declination {}",
        sun.geocentric.alpha,
        sun.geocentric.delta
    );

    let observer = Observer {
        longitude: request.longitude(),
        latitude: request.latitude(),
        elevation: request.elevation(),
    };
    let topocentric = topocentric_sun(
        &observer,
        sun.geocentric.nu,
        sun.geocentric.alpha,
        sun.geocentric.delta,
        sun.heliocentric.r,
    );

    let atmosphere = Atmosphere {
        pressure: request.pressure(),
        temperature: request.temperature(),
        refraction: request.atmospheric_refraction(),
    };
    let horizon = horizon_angles(
        request.latitude(),
        topocentric.delta_prime,
        topocentric.h_prime,
        &atmosphere,
    );
    log::trace!(
        "topocentric zenith {}, azimuth {}",
        horizon.zenith,
        horizon.azimuth
    );

    let function = request.function();
    let incidence = function.computes_incidence().then(|| {
        incidence_angle(
            horizon.zenith,
            horizon.azimuth_astro,
            request.azimuth_rotation(),
            request.slope(),
        )
    });
    let rise_transit_set = function
        .computes_rise_transit_set()
        .then(|| rts::rise_transit_set(request, &sun));

    Ok(SpaOutput {
        request: *request,
        time: sun.time,
        heliocentric: sun.heliocentric,
        nutation: sun.nutation,
        geocentric: sun.geocentric,
        topocentric,
        horizon,
        incidence,
        rise_transit_set,
    })
}

/// Result of [`calculate`]: the request plus every intermediate and final quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaOutput {
    request: ObservationRequest,
    time: TimeScales,
    heliocentric: HeliocentricPosition,
    nutation: Nutation,
    geocentric: GeocentricSun,
    topocentric: TopocentricSun,
    horizon: HorizonAngles,
    incidence: Option<f64>,
    rise_transit_set: Option<RiseTransitSet>,
}

impl SpaOutput {
    /// The request this output was computed from.
    #[must_use]
    pub const fn request(&self) -> &ObservationRequest {
        &self.request
    }

    /// Time scales of the request instant.
    #[must_use]
    pub const fn time_scales(&self) -> &TimeScales {
        &self.time
    }

    /// Earth heliocentric position.
    #[must_use]
    pub const fn heliocentric(&self) -> &HeliocentricPosition {
        &self.heliocentric
    }

    /// Nutation and obliquity.
    #[must_use]
    pub const fn nutation(&self) -> &Nutation {
        &self.nutation
    }

    /// Apparent geocentric sun.
    #[must_use]
    pub const fn geocentric(&self) -> &GeocentricSun {
        &self.geocentric
    }

    /// Topocentric sun.
    #[must_use]
    pub const fn topocentric(&self) -> &TopocentricSun {
        &self.topocentric
    }

    /// Elevation, zenith and azimuth angles.
    #[must_use]
    pub const fn horizon(&self) -> &HorizonAngles {
        &self.horizon
    }

    /// Equation of time and sunrise/transit/sunset, when selected.
    #[must_use]
    pub const fn rise_transit_set(&self) -> Option<&RiseTransitSet> {
        self.rise_transit_set.as_ref()
    }

    /// Julian day.
    #[must_use]
    pub const fn jd(&self) -> f64 {
        self.time.jd
    }

    /// Julian century.
    #[must_use]
    pub const fn jc(&self) -> f64 {
        self.time.jc
    }

    /// Julian ephemeris day.
    #[must_use]
    pub const fn jde(&self) -> f64 {
        self.time.jde
    }

    /// Julian ephemeris century.
    #[must_use]
    pub const fn jce(&self) -> f64 {
        self.time.jce
    }

    /// Julian ephemeris millennium.
    #[must_use]
    pub const fn jme(&self) -> f64 {
        self.time.jme
    }

    /// Earth heliocentric longitude in degrees.
    #[must_use]
    pub const fn l(&self) -> f64 {
        self.heliocentric.l
    }

    /// Earth heliocentric latitude in degrees.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.heliocentric.b
    }

    /// Earth radius vector in AU.
    #[must_use]
    pub const fn r(&self) -> f64 {
        self.heliocentric.r
    }

    /// Geocentric longitude in degrees.
    #[must_use]
    pub const fn theta(&self) -> f64 {
        self.heliocentric.theta
    }

    /// Geocentric latitude in degrees.
    #[must_use]
    pub const fn beta(&self) -> f64 {
        self.heliocentric.beta
    }

    /// Mean elongation of the moon from the sun in degrees.
    #[must_use]
    pub const fn x0(&self) -> f64 {
        self.nutation.x[0]
    }

    /// Mean anomaly of the sun in degrees.
    #[must_use]
    pub const fn x1(&self) -> f64 {
        self.nutation.x[1]
    }

    /// Mean anomaly of the moon in degrees.
    #[must_use]
    pub const fn x2(&self) -> f64 {
        self.nutation.x[2]
    }

    /// Moon's argument of latitude in degrees.
    #[must_use]
    pub const fn x3(&self) -> f64 {
        self.nutation.x[3]
    }

    /// Longitude of the moon's ascending node in degrees.
    #[must_use]
    pub const fn x4(&self) -> f64 {
        self.nutation.x[4]
    }

    /// Nutation in longitude in degrees.
    #[must_use]
    pub const fn delta_psi(&self) -> f64 {
        self.nutation.delta_psi
    }

    /// Nutation in obliquity in degrees.
    #[must_use]
    pub const fn delta_epsilon(&self) -> f64 {
        self.nutation.delta_epsilon
    }

    /// Mean obliquity of the ecliptic in arc seconds.
    #[must_use]
    pub const fn epsilon0(&self) -> f64 {
        self.nutation.epsilon0
    }

    /// True obliquity of the ecliptic in degrees.
    #[must_use]
    pub const fn epsilon(&self) -> f64 {
        self.nutation.epsilon
    }

    /// Aberration correction in degrees.
    #[must_use]
    pub const fn delta_tau(&self) -> f64 {
        self.geocentric.delta_tau
    }

    /// Apparent sun longitude in degrees.
    #[must_use]
    pub const fn lambda(&self) -> f64 {
        self.geocentric.lambda
    }

    /// Greenwich mean sidereal time in degrees.
    #[must_use]
    pub const fn nu0(&self) -> f64 {
        self.geocentric.nu0
    }

    /// Greenwich apparent sidereal time in degrees.
    #[must_use]
    pub const fn nu(&self) -> f64 {
        self.geocentric.nu
    }

    /// Geocentric right ascension in degrees.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.geocentric.alpha
    }

    /// Geocentric declination in degrees.
    #[must_use]
    pub const fn delta(&self) -> f64 {
        self.geocentric.delta
    }

    /// Observer local hour angle in degrees.
    #[must_use]
    pub const fn h(&self) -> f64 {
        self.topocentric.h
    }

    /// Sun equatorial horizontal parallax in degrees.
    #[must_use]
    pub const fn xi(&self) -> f64 {
        self.topocentric.xi
    }

    /// Parallax in right ascension in degrees.
    #[must_use]
    pub const fn delta_alpha(&self) -> f64 {
        self.topocentric.delta_alpha
    }

    /// Topocentric declination in degrees.
    #[must_use]
    pub const fn delta_prime(&self) -> f64 {
        self.topocentric.delta_prime
    }

    /// Topocentric right ascension in degrees.
    #[must_use]
    pub const fn alpha_prime(&self) -> f64 {
        self.topocentric.alpha_prime
    }

    /// Topocentric local hour angle in degrees.
    #[must_use]
    pub const fn h_prime(&self) -> f64 {
        self.topocentric.h_prime
    }

    /// Topocentric elevation without refraction in degrees.
    #[must_use]
    pub const fn e0(&self) -> f64 {
        self.horizon.e0
    }

    /// Refraction correction in degrees.
    #[must_use]
    pub const fn delta_e(&self) -> f64 {
        self.horizon.delta_e
    }

    /// Topocentric elevation in degrees.
    #[must_use]
    pub const fn e(&self) -> f64 {
        self.horizon.e
    }

    /// Topocentric zenith angle in degrees.
    #[must_use]
    pub const fn zenith(&self) -> f64 {
        self.horizon.zenith
    }

    /// Astronomers' azimuth (westward from south) in degrees.
    #[must_use]
    pub const fn azimuth_astro(&self) -> f64 {
        self.horizon.azimuth_astro
    }

    /// Navigators' azimuth (eastward from north) in degrees.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.horizon.azimuth
    }

    /// Surface incidence angle in degrees, when selected.
    #[must_use]
    pub const fn incidence(&self) -> Option<f64> {
        self.incidence
    }

    /// Equation of time in minutes, when selected.
    #[must_use]
    pub fn eot(&self) -> Option<f64> {
        self.rise_transit_set.as_ref().map(RiseTransitSet::eot)
    }

    /// Sunrise hour angle in degrees, when selected.
    #[must_use]
    pub fn srha(&self) -> Option<f64> {
        self.rise_transit_set.as_ref().map(RiseTransitSet::srha)
    }

    /// Sunset hour angle in degrees, when selected.
    #[must_use]
    pub fn ssha(&self) -> Option<f64> {
        self.rise_transit_set.as_ref().map(RiseTransitSet::ssha)
    }

    /// Sun transit altitude in degrees, when selected.
    #[must_use]
    pub fn sta(&self) -> Option<f64> {
        self.rise_transit_set.as_ref().map(RiseTransitSet::sta)
    }

    /// Local sun transit time in fractional hours, when selected.
    #[must_use]
    pub fn suntransit(&self) -> Option<f64> {
        self.rise_transit_set.as_ref().map(RiseTransitSet::suntransit)
    }

    /// Local sunrise time in fractional hours, when selected.
    #[must_use]
    pub fn sunrise(&self) -> Option<f64> {
        self.rise_transit_set.as_ref().map(RiseTransitSet::sunrise)
    }

    /// Local sunset time in fractional hours, when selected.
    #[must_use]
    pub fn sunset(&self) -> Option<f64> {
        self.rise_transit_set.as_ref().map(RiseTransitSet::sunset)
    }
}

#[cfg(feature = "chrono")]
impl SpaOutput {
    /// Sunrise as a timestamp in the request's timezone.
    ///
    /// `None` when rise/transit/set was not selected or the sun does not rise that day.
    #[must_use]
    pub fn sunrise_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.event_datetime(RiseTransitSet::sunrise)
    }

    /// Sun transit as a timestamp in the request's timezone.
    #[must_use]
    pub fn transit_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.event_datetime(RiseTransitSet::suntransit)
    }

    /// Sunset as a timestamp in the request's timezone.
    #[must_use]
    pub fn sunset_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.event_datetime(RiseTransitSet::sunset)
    }

    fn event_datetime(
        &self,
        event: impl Fn(&RiseTransitSet) -> f64,
    ) -> Option<DateTime<FixedOffset>> {
        let rts = self
            .rise_transit_set
            .as_ref()
            .filter(|rts| rts.is_regular_day())?;
        local_datetime(&self.request, LocalHours::from_hours(event(rts)))
    }
}

/// Local midnight of the request date plus the whole hours, minutes and seconds of `hours`.
#[cfg(feature = "chrono")]
fn local_datetime(
    request: &ObservationRequest,
    hours: LocalHours,
) -> Option<DateTime<FixedOffset>> {
    let offset_seconds = crate::math::round(request.timezone() * 3600.0) as i32;
    let offset = FixedOffset::east_opt(offset_seconds)?;
    let midnight = NaiveDate::from_ymd_opt(request.year(), request.month(), request.day())?
        .and_hms_opt(0, 0, 0)?;
    let start = offset.from_local_datetime(&midnight).single()?;

    let (h, m, s) = hours.hms();
    Some(start + chrono::Duration::seconds(i64::from(h * 3600 + m * 60 + s)))
}
