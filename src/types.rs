//! Request and result types shared across the SPA pipeline.

use crate::math::trunc;
#[cfg(feature = "chrono")]
use chrono::{Datelike, Offset, TimeZone, Timelike};

/// Selects which outputs [`crate::spa::calculate`] produces.
///
/// Zenith and azimuth are always computed; the selector adds the surface incidence angle,
/// the sunrise/transit/sunset solver, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpaFunction {
    /// Zenith and azimuth only
    ZenithAzimuth,
    /// Zenith, azimuth and surface incidence angle
    ZenithAzimuthIncidence,
    /// Zenith, azimuth, equation of time and sunrise/transit/sunset
    ZenithAzimuthRiseTransitSet,
    /// Every output
    #[default]
    All,
}

impl SpaFunction {
    /// Whether the surface incidence angle is computed (and slope/azimuth rotation validated).
    #[must_use]
    pub const fn computes_incidence(self) -> bool {
        matches!(self, Self::ZenithAzimuthIncidence | Self::All)
    }

    /// Whether the equation of time and sunrise/transit/sunset are computed.
    #[must_use]
    pub const fn computes_rise_transit_set(self) -> bool {
        matches!(self, Self::ZenithAzimuthRiseTransitSet | Self::All)
    }
}

/// A single SPA request: local calendar time, observer location, atmosphere and surface.
///
/// Built from the calendar fields and location; every other input has a default and a
/// `with_*` setter. Values are checked by [`crate::spa::calculate`], not here.
///
/// # Example
/// ```
/// # use nrel_spa::{ObservationRequest, SpaFunction};
/// let request = ObservationRequest::new(2003, 10, 17, 12, 30, 30.0, -105.1786, 39.742476)
///     .with_timezone(-7.0)
///     .with_delta_t(67.0)
///     .with_elevation(1830.14)
///     .with_pressure(820.0)
///     .with_temperature(11.0)
///     .with_function(SpaFunction::ZenithAzimuth);
/// assert_eq!(request.pressure(), 820.0);
/// assert_eq!(request.atmospheric_refraction(), 0.5667);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationRequest {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    delta_ut1: f64,
    delta_t: f64,
    timezone: f64,
    longitude: f64,
    latitude: f64,
    elevation: f64,
    pressure: f64,
    temperature: f64,
    slope: f64,
    azimuth_rotation: f64,
    atmospheric_refraction: f64,
    function: SpaFunction,
}

impl ObservationRequest {
    /// Standard sea-level pressure in millibars.
    pub const DEFAULT_PRESSURE: f64 = 1013.25;
    /// Standard temperature in °C.
    pub const DEFAULT_TEMPERATURE: f64 = 15.0;
    /// Refraction at sunrise/sunset in degrees.
    pub const DEFAULT_ATMOSPHERIC_REFRACTION: f64 = 0.5667;

    /// Creates a request for a local calendar time at a location.
    ///
    /// `hour` may be 24 to denote the end of the day, provided minute and second are zero.
    /// Longitude is positive east of Greenwich and latitude positive north.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            delta_ut1: 0.0,
            delta_t: 0.0,
            timezone: 0.0,
            longitude,
            latitude,
            elevation: 0.0,
            pressure: Self::DEFAULT_PRESSURE,
            temperature: Self::DEFAULT_TEMPERATURE,
            slope: 0.0,
            azimuth_rotation: 0.0,
            atmospheric_refraction: Self::DEFAULT_ATMOSPHERIC_REFRACTION,
            function: SpaFunction::All,
        }
    }

    /// Creates a request from a timezone-aware chrono `DateTime`.
    ///
    /// The local calendar fields are kept and the UTC offset becomes the timezone in
    /// fractional hours (e.g. +5.5 for India).
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(
        datetime: &chrono::DateTime<Tz>,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        let local = datetime.naive_local();
        let offset_seconds = datetime.offset().fix().local_minus_utc();
        Self::new(
            local.year(),
            local.month(),
            local.day(),
            local.hour(),
            local.minute(),
            f64::from(local.second()) + f64::from(local.nanosecond()) / 1e9,
            longitude,
            latitude,
        )
        .with_timezone(f64::from(offset_seconds) / 3600.0)
    }

    /// Sets UT1 - UTC in seconds.
    #[must_use]
    pub const fn with_delta_ut1(mut self, delta_ut1: f64) -> Self {
        self.delta_ut1 = delta_ut1;
        self
    }

    /// Sets TT - UT in seconds.
    #[must_use]
    pub const fn with_delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = delta_t;
        self
    }

    /// Sets the timezone in hours, negative west of Greenwich.
    #[must_use]
    pub const fn with_timezone(mut self, timezone: f64) -> Self {
        self.timezone = timezone;
        self
    }

    /// Sets the observer longitude in degrees.
    #[must_use]
    pub const fn with_longitude(mut self, longitude: f64) -> Self {
        self.longitude = longitude;
        self
    }

    /// Sets the observer latitude in degrees.
    #[must_use]
    pub const fn with_latitude(mut self, latitude: f64) -> Self {
        self.latitude = latitude;
        self
    }

    /// Sets the observer elevation in meters.
    #[must_use]
    pub const fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Sets the annual average local pressure in millibars.
    #[must_use]
    pub const fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = pressure;
        self
    }

    /// Sets the annual average local temperature in °C.
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the surface slope from horizontal in degrees.
    #[must_use]
    pub const fn with_slope(mut self, slope: f64) -> Self {
        self.slope = slope;
        self
    }

    /// Sets the surface azimuth rotation from south in degrees.
    #[must_use]
    pub const fn with_azimuth_rotation(mut self, azimuth_rotation: f64) -> Self {
        self.azimuth_rotation = azimuth_rotation;
        self
    }

    /// Sets the atmospheric refraction at sunrise and sunset in degrees.
    #[must_use]
    pub const fn with_atmospheric_refraction(mut self, refraction: f64) -> Self {
        self.atmospheric_refraction = refraction;
        self
    }

    /// Sets which outputs to compute.
    #[must_use]
    pub const fn with_function(mut self, function: SpaFunction) -> Self {
        self.function = function;
        self
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Local hour.
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute.
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Second, possibly fractional.
    #[must_use]
    pub const fn second(&self) -> f64 {
        self.second
    }

    /// UT1 - UTC in seconds.
    #[must_use]
    pub const fn delta_ut1(&self) -> f64 {
        self.delta_ut1
    }

    /// TT - UT in seconds.
    #[must_use]
    pub const fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Timezone in hours.
    #[must_use]
    pub const fn timezone(&self) -> f64 {
        self.timezone
    }

    /// Observer longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Observer latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Observer elevation in meters.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Pressure in millibars.
    #[must_use]
    pub const fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Temperature in °C.
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Surface slope in degrees.
    #[must_use]
    pub const fn slope(&self) -> f64 {
        self.slope
    }

    /// Surface azimuth rotation in degrees.
    #[must_use]
    pub const fn azimuth_rotation(&self) -> f64 {
        self.azimuth_rotation
    }

    /// Atmospheric refraction at sunrise/sunset in degrees.
    #[must_use]
    pub const fn atmospheric_refraction(&self) -> f64 {
        self.atmospheric_refraction
    }

    /// Output selector.
    #[must_use]
    pub const fn function(&self) -> SpaFunction {
        self.function
    }
}

/// Fractional local clock hours, as returned for sunrise, transit and sunset.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LocalHours(f64);

impl LocalHours {
    /// Wraps a fractional hour value.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Splits into hours, minutes and seconds, each truncated toward zero.
    ///
    /// # Example
    /// ```
    /// # use nrel_spa::LocalHours;
    /// assert_eq!(LocalHours::from_hours(6.212066609).hms(), (6, 12, 43));
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn hms(&self) -> (i32, i32, i32) {
        let hours = trunc(self.0);
        let minutes_f = (self.0 - hours) * 60.0;
        let minutes = trunc(minutes_f);
        let seconds = trunc((minutes_f - minutes) * 60.0);
        (hours as i32, minutes as i32, seconds as i32)
    }
}

/// Sunrise, transit and sunset for a day, or the polar condition that prevents them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SunriseResult<T> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (when sun crosses meridian, solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day: the sun stays above the horizon
    AllDay,
    /// Polar night: the sun stays below the horizon
    AllNight,
}

impl<T> SunriseResult<T> {
    /// Gets the transit time if this is a regular day.
    pub const fn transit(&self) -> Option<&T> {
        if let Self::RegularDay { transit, .. } = self {
            Some(transit)
        } else {
            None
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight)
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Maps the event times, keeping the polar variants.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> SunriseResult<U> {
        match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
            } => SunriseResult::RegularDay {
                sunrise: f(sunrise),
                transit: f(transit),
                sunset: f(sunset),
            },
            Self::AllDay => SunriseResult::AllDay,
            Self::AllNight => SunriseResult::AllNight,
        }
    }
}
