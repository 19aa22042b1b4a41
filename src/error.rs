//! Input validation for SPA requests.
//!
//! Every request is checked in full before any computation starts. The first out-of-range
//! field aborts the call with a [`ValidationError`] naming that field.

use crate::math::abs;
use crate::types::ObservationRequest;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, ValidationError>;

/// Input fields of an [`ObservationRequest`] that carry a valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Calendar year, -2000 to 6000.
    Year,
    /// Calendar month, 1 to 12.
    Month,
    /// Day of month, 1 to 31.
    Day,
    /// Hour of day, 0 to 24 (24 only at exactly midnight).
    Hour,
    /// Minute, 0 to 59.
    Minute,
    /// Second, 0 to less than 60.
    Second,
    /// Atmospheric pressure in millibars, 0 to 5000.
    Pressure,
    /// Temperature in °C, above -273 up to 6000.
    Temperature,
    /// UT1-UTC in seconds, strictly between -1 and 1.
    DeltaUt1,
    /// TT-UT in seconds, magnitude up to 8000.
    DeltaT,
    /// Timezone offset in hours, magnitude up to 18.
    Timezone,
    /// Observer longitude in degrees, magnitude up to 180.
    Longitude,
    /// Observer latitude in degrees, magnitude up to 90.
    Latitude,
    /// Atmospheric refraction at sunrise/sunset in degrees, magnitude up to 5.
    AtmosphericRefraction,
    /// Observer elevation in meters, at least -6 500 000.
    Elevation,
    /// Surface slope in degrees, magnitude up to 360.
    Slope,
    /// Surface azimuth rotation in degrees, magnitude up to 360.
    AzimuthRotation,
}

impl Field {
    /// Human-readable field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Pressure => "pressure",
            Self::Temperature => "temperature",
            Self::DeltaUt1 => "delta UT1",
            Self::DeltaT => "delta T",
            Self::Timezone => "timezone",
            Self::Longitude => "longitude",
            Self::Latitude => "latitude",
            Self::AtmosphericRefraction => "atmospheric refraction",
            Self::Elevation => "elevation",
            Self::Slope => "surface slope",
            Self::AzimuthRotation => "surface azimuth rotation",
        }
    }

    /// The accepted range, in interval notation.
    #[must_use]
    pub const fn accepted_range(self) -> &'static str {
        match self {
            Self::Year => "[-2000, 6000]",
            Self::Month => "[1, 12]",
            Self::Day => "[1, 31]",
            Self::Hour => "[0, 24]",
            Self::Minute => "[0, 59], and 0 when hour is 24",
            Self::Second => "[0, 60), and 0 when hour is 24",
            Self::Pressure => "[0, 5000] mbar",
            Self::Temperature => "(-273, 6000] °C",
            Self::DeltaUt1 => "(-1, 1) s",
            Self::DeltaT => "[-8000, 8000] s",
            Self::Timezone => "[-18, 18] h",
            Self::Longitude => "[-180, 180]°",
            Self::Latitude => "[-90, 90]°",
            Self::AtmosphericRefraction => "[-5, 5]°",
            Self::Elevation => ">= -6500000 m",
            Self::Slope | Self::AzimuthRotation => "[-360, 360]°",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A request field outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationError {
    field: Field,
    value: f64,
}

impl ValidationError {
    /// Creates a validation error for `field` holding `value`.
    #[must_use]
    pub const fn new(field: Field, value: f64) -> Self {
        Self { field, value }
    }

    /// The offending field.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// The rejected value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} {} (must be {})",
            self.field.name(),
            self.value,
            self.field.accepted_range()
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

fn check(field: Field, value: f64, valid: bool) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new(field, value))
    }
}

/// Validates latitude is within [-90, 90] degrees.
///
/// # Errors
/// Returns a [`Field::Latitude`] error otherwise (NaN included).
pub fn check_latitude(latitude: f64) -> Result<()> {
    check(Field::Latitude, latitude, abs(latitude) <= 90.0)
}

/// Validates longitude is within [-180, 180] degrees.
///
/// # Errors
/// Returns a [`Field::Longitude`] error otherwise (NaN included).
pub fn check_longitude(longitude: f64) -> Result<()> {
    check(Field::Longitude, longitude, abs(longitude) <= 180.0)
}

/// Validates pressure is within [0, 5000] millibars.
///
/// # Errors
/// Returns a [`Field::Pressure`] error otherwise.
pub fn check_pressure(pressure: f64) -> Result<()> {
    check(Field::Pressure, pressure, (0.0..=5000.0).contains(&pressure))
}

/// Validates temperature is within (-273, 6000] °C.
///
/// # Errors
/// Returns a [`Field::Temperature`] error otherwise.
pub fn check_temperature(temperature: f64) -> Result<()> {
    check(
        Field::Temperature,
        temperature,
        temperature > -273.0 && temperature <= 6000.0,
    )
}

/// Validates ΔUT1 lies strictly inside (-1, 1) seconds.
///
/// # Errors
/// Returns a [`Field::DeltaUt1`] error otherwise, including at exactly ±1.
pub fn check_delta_ut1(delta_ut1: f64) -> Result<()> {
    check(
        Field::DeltaUt1,
        delta_ut1,
        delta_ut1 > -1.0 && delta_ut1 < 1.0,
    )
}

/// Validates |ΔT| ≤ 8000 seconds.
///
/// # Errors
/// Returns a [`Field::DeltaT`] error otherwise.
pub fn check_delta_t(delta_t: f64) -> Result<()> {
    check(Field::DeltaT, delta_t, abs(delta_t) <= 8000.0)
}

/// Validates |timezone| ≤ 18 hours.
///
/// # Errors
/// Returns a [`Field::Timezone`] error otherwise.
pub fn check_timezone(timezone: f64) -> Result<()> {
    check(Field::Timezone, timezone, abs(timezone) <= 18.0)
}

/// Validates |atmospheric refraction| ≤ 5 degrees.
///
/// # Errors
/// Returns a [`Field::AtmosphericRefraction`] error otherwise.
pub fn check_atmospheric_refraction(refraction: f64) -> Result<()> {
    check(
        Field::AtmosphericRefraction,
        refraction,
        abs(refraction) <= 5.0,
    )
}

/// Validates elevation ≥ -6 500 000 meters.
///
/// # Errors
/// Returns a [`Field::Elevation`] error otherwise.
pub fn check_elevation(elevation: f64) -> Result<()> {
    check(Field::Elevation, elevation, elevation >= -6_500_000.0)
}

fn check_surface_angle(field: Field, degrees: f64) -> Result<()> {
    check(field, degrees, abs(degrees) <= 360.0)
}

fn check_calendar(request: &ObservationRequest) -> Result<()> {
    let year = request.year();
    if !(-2000..=6000).contains(&year) {
        return Err(ValidationError::new(Field::Year, f64::from(year)));
    }
    let month = request.month();
    if !(1..=12).contains(&month) {
        return Err(ValidationError::new(Field::Month, f64::from(month)));
    }
    let day = request.day();
    if !(1..=31).contains(&day) {
        return Err(ValidationError::new(Field::Day, f64::from(day)));
    }
    let hour = request.hour();
    if hour > 24 {
        return Err(ValidationError::new(Field::Hour, f64::from(hour)));
    }
    let minute = request.minute();
    if minute > 59 {
        return Err(ValidationError::new(Field::Minute, f64::from(minute)));
    }
    let second = request.second();
    check(Field::Second, second, (0.0..60.0).contains(&second))
}

/// Validates a complete request, field by field, before any computation.
///
/// Surface slope and azimuth rotation are only checked when the request's function selector
/// computes the incidence angle.
///
/// # Errors
/// Returns the first [`ValidationError`] encountered.
pub fn validate(request: &ObservationRequest) -> Result<()> {
    check_calendar(request)?;
    check_pressure(request.pressure())?;
    check_temperature(request.temperature())?;
    check_delta_ut1(request.delta_ut1())?;

    if request.hour() == 24 && request.minute() > 0 {
        return Err(ValidationError::new(
            Field::Minute,
            f64::from(request.minute()),
        ));
    }
    if request.hour() == 24 && request.second() > 0.0 {
        return Err(ValidationError::new(Field::Second, request.second()));
    }

    check_delta_t(request.delta_t())?;
    check_timezone(request.timezone())?;
    check_longitude(request.longitude())?;
    check_latitude(request.latitude())?;
    check_atmospheric_refraction(request.atmospheric_refraction())?;
    check_elevation(request.elevation())?;

    if request.function().computes_incidence() {
        check_surface_angle(Field::Slope, request.slope())?;
        check_surface_angle(Field::AzimuthRotation, request.azimuth_rotation())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpaFunction;

    fn request() -> ObservationRequest {
        ObservationRequest::new(2003, 10, 17, 12, 30, 30.0, -105.1786, 39.742476)
    }

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_pressure_and_temperature_validation() {
        assert!(check_pressure(0.0).is_ok());
        assert!(check_pressure(5000.0).is_ok());
        assert!(check_pressure(5000.001).is_err());
        assert!(check_pressure(-0.1).is_err());
        assert!(check_pressure(f64::NAN).is_err());

        assert!(check_temperature(-272.9).is_ok());
        assert!(check_temperature(6000.0).is_ok());
        assert!(check_temperature(-273.0).is_err());
        assert!(check_temperature(6000.1).is_err());
    }

    #[test]
    fn test_delta_ut1_bounds_are_exclusive() {
        assert!(check_delta_ut1(0.999).is_ok());
        assert!(check_delta_ut1(-0.999).is_ok());
        assert!(check_delta_ut1(1.0).is_err());
        assert!(check_delta_ut1(-1.0).is_err());
    }

    #[test]
    fn test_inclusive_bounds() {
        assert!(check_delta_t(8000.0).is_ok());
        assert!(check_delta_t(-8000.5).is_err());
        assert!(check_timezone(18.0).is_ok());
        assert!(check_timezone(-18.5).is_err());
        assert!(check_atmospheric_refraction(5.0).is_ok());
        assert!(check_atmospheric_refraction(5.1).is_err());
        assert!(check_elevation(-6_500_000.0).is_ok());
        assert!(check_elevation(-6_500_000.1).is_err());
    }

    #[test]
    fn test_validate_reports_first_offending_field() {
        let bad = request().with_pressure(6000.0).with_latitude(95.0);
        let err = validate(&bad).unwrap_err();
        assert_eq!(err.field(), Field::Pressure);
        assert_eq!(err.value(), 6000.0);
    }

    #[test]
    fn test_hour_24_only_at_midnight() {
        let midnight = ObservationRequest::new(2003, 10, 17, 24, 0, 0.0, 0.0, 0.0);
        assert!(validate(&midnight).is_ok());

        let minute_past = ObservationRequest::new(2003, 10, 17, 24, 1, 0.0, 0.0, 0.0);
        assert_eq!(validate(&minute_past).unwrap_err().field(), Field::Minute);

        let second_past = ObservationRequest::new(2003, 10, 17, 24, 0, 0.5, 0.0, 0.0);
        assert_eq!(validate(&second_past).unwrap_err().field(), Field::Second);

        let hour_25 = ObservationRequest::new(2003, 10, 17, 25, 0, 0.0, 0.0, 0.0);
        assert_eq!(validate(&hour_25).unwrap_err().field(), Field::Hour);
    }

    #[test]
    fn test_surface_angles_checked_only_with_incidence() {
        let steep = request().with_slope(400.0);

        let minimal = steep.with_function(SpaFunction::ZenithAzimuth);
        assert!(validate(&minimal).is_ok());
        let rts = steep.with_function(SpaFunction::ZenithAzimuthRiseTransitSet);
        assert!(validate(&rts).is_ok());

        let incidence = steep.with_function(SpaFunction::ZenithAzimuthIncidence);
        assert_eq!(validate(&incidence).unwrap_err().field(), Field::Slope);

        let rotated = request()
            .with_azimuth_rotation(-360.5)
            .with_function(SpaFunction::All);
        assert_eq!(
            validate(&rotated).unwrap_err().field(),
            Field::AzimuthRotation
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = ValidationError::new(Field::Latitude, 95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95 (must be [-90, 90]°)"
        );

        let err = ValidationError::new(Field::DeltaUt1, 1.0);
        assert_eq!(err.to_string(), "invalid delta UT1 1 (must be (-1, 1) s)");
    }
}
