//! Equation of time and sunrise, sun transit and sunset (Reda & Andreas 2003, Appendix A.2).
//!
//! The solver samples the geocentric sun at 0 UT on the day before, the day of, and the day
//! after the request date, interpolates to each approximate event time, then applies a
//! one-step altitude correction to sunrise and sunset.

use super::geocentric::{sun_coordinates, SunCoordinates};
use super::horizon::{elevation_angle, SUN_RADIUS};
use crate::math::{
    abs, acos, cos, deg2rad, dayfrac_to_local_hours, limit_degrees, limit_degrees_180,
    limit_degrees_180pm, limit_minutes, limit_zero_to_one, polynomial, rad2deg, sin,
};
use crate::time::{julian_day, JulianDate, SECONDS_PER_DAY};
use crate::types::{LocalHours, ObservationRequest, SunriseResult};

/// Sun mean longitude polynomial in JME, degrees, lowest power first.
const SUN_MEAN_LONGITUDE: [f64; 6] = [
    280.466_456_7,
    360_007.698_277_9,
    0.030_320_28,
    1.0 / 49_931.0,
    -1.0 / 15_300.0,
    -1.0 / 2_000_000.0,
];

/// Sidereal rotation in degrees per day, as used for the event times.
const SIDEREAL_DEGREES_PER_DAY: f64 = 360.985_647;

const TRANSIT: usize = 0;
const SUNRISE: usize = 1;
const SUNSET: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayCondition {
    Regular,
    AllDay,
    AllNight,
}

/// Equation of time plus the sunrise, transit and sunset outputs.
///
/// When the sun never crosses the horizon every value except the equation of time is
/// [`RiseTransitSet::NO_RISE_SET`]; [`RiseTransitSet::events`] tells polar day from polar night.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseTransitSet {
    eot: f64,
    srha: f64,
    ssha: f64,
    sta: f64,
    suntransit: f64,
    sunrise: f64,
    sunset: f64,
    condition: DayCondition,
}

impl RiseTransitSet {
    /// Value of every rise/transit/set output when the sun does not rise or set.
    pub const NO_RISE_SET: f64 = -99999.0;

    const fn polar(eot: f64, condition: DayCondition) -> Self {
        Self {
            eot,
            srha: Self::NO_RISE_SET,
            ssha: Self::NO_RISE_SET,
            sta: Self::NO_RISE_SET,
            suntransit: Self::NO_RISE_SET,
            sunrise: Self::NO_RISE_SET,
            sunset: Self::NO_RISE_SET,
            condition,
        }
    }

    /// Equation of time in minutes.
    #[must_use]
    pub const fn eot(&self) -> f64 {
        self.eot
    }

    /// Local hour angle at sunrise in degrees.
    #[must_use]
    pub const fn srha(&self) -> f64 {
        self.srha
    }

    /// Local hour angle at sunset in degrees.
    #[must_use]
    pub const fn ssha(&self) -> f64 {
        self.ssha
    }

    /// Sun altitude at transit in degrees.
    #[must_use]
    pub const fn sta(&self) -> f64 {
        self.sta
    }

    /// Local sun transit time in fractional hours.
    #[must_use]
    pub const fn suntransit(&self) -> f64 {
        self.suntransit
    }

    /// Local sunrise time in fractional hours.
    #[must_use]
    pub const fn sunrise(&self) -> f64 {
        self.sunrise
    }

    /// Local sunset time in fractional hours.
    #[must_use]
    pub const fn sunset(&self) -> f64 {
        self.sunset
    }

    /// Whether the sun rises and sets on the request date.
    #[must_use]
    pub const fn is_regular_day(&self) -> bool {
        matches!(self.condition, DayCondition::Regular)
    }

    /// Typed view of the event times.
    #[must_use]
    pub const fn events(&self) -> SunriseResult<LocalHours> {
        match self.condition {
            DayCondition::Regular => SunriseResult::RegularDay {
                sunrise: LocalHours::from_hours(self.sunrise),
                transit: LocalHours::from_hours(self.suntransit),
                sunset: LocalHours::from_hours(self.sunset),
            },
            DayCondition::AllDay => SunriseResult::AllDay,
            DayCondition::AllNight => SunriseResult::AllNight,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct AlphaDelta {
    alpha: f64,
    delta: f64,
}

/// Interpolated sun state at one approximate event time.
#[derive(Debug, Clone, Copy)]
struct EventSample {
    /// day fraction
    m: f64,
    delta_prime: f64,
    h_prime: f64,
    altitude: f64,
}

impl EventSample {
    /// Day fraction refined by one altitude correction step towards `h0_prime`.
    fn corrected(&self, latitude: f64, h0_prime: f64) -> f64 {
        self.m
            + (self.altitude - h0_prime)
                / (360.0
                    * cos(deg2rad(self.delta_prime))
                    * cos(deg2rad(latitude))
                    * sin(deg2rad(self.h_prime)))
    }
}

pub(crate) fn rise_transit_set(
    request: &ObservationRequest,
    sun: &SunCoordinates,
) -> RiseTransitSet {
    let eot = equation_of_time(sun);
    let latitude = request.latitude();
    let longitude = request.longitude();
    let h0_prime = -(SUN_RADIUS + request.atmospheric_refraction());

    let midnight = JulianDate::new(
        julian_day(
            request.year(),
            request.month(),
            request.day(),
            0,
            0,
            0.0,
            0.0,
            0.0,
        ),
        request.delta_t(),
    );
    let nu = sun_coordinates(midnight).geocentric.nu;

    let samples = [-1.0, 0.0, 1.0].map(|offset| {
        let geocentric = sun_coordinates(midnight.with_delta_t(0.0).add_days(offset)).geocentric;
        AlphaDelta {
            alpha: geocentric.alpha,
            delta: geocentric.delta,
        }
    });

    let transit_estimate = (samples[1].alpha - longitude - nu) / 360.0;
    let argument = hour_angle_argument(latitude, samples[1].delta, h0_prime);

    if abs(argument) > 1.0 || argument.is_nan() {
        let condition = if argument < -1.0 {
            DayCondition::AllDay
        } else {
            DayCondition::AllNight
        };
        log::debug!(
            "no sunrise or sunset ({condition:?}) at latitude {latitude}: declination {}, hour angle argument {argument}",
            samples[1].delta
        );
        return RiseTransitSet::polar(eot, condition);
    }

    let h0 = limit_degrees_180(rad2deg(acos(argument)));
    let day_fractions = [
        transit_estimate,
        transit_estimate - h0 / 360.0,
        transit_estimate + h0 / 360.0,
    ]
    .map(limit_zero_to_one);

    let events = day_fractions.map(|m| {
        let n = m + request.delta_t() / SECONDS_PER_DAY;
        let alpha_prime = interpolate(samples.map(|s| s.alpha), n);
        let delta_prime = interpolate(samples.map(|s| s.delta), n);
        let h_prime =
            limit_degrees_180pm(nu + SIDEREAL_DEGREES_PER_DAY * m + longitude - alpha_prime);
        EventSample {
            m,
            delta_prime,
            h_prime,
            altitude: elevation_angle(latitude, delta_prime, h_prime),
        }
    });

    let transit = &events[TRANSIT];
    let timezone = request.timezone();

    RiseTransitSet {
        eot,
        srha: events[SUNRISE].h_prime,
        ssha: events[SUNSET].h_prime,
        sta: transit.altitude,
        suntransit: dayfrac_to_local_hours(transit.m - transit.h_prime / 360.0, timezone),
        sunrise: dayfrac_to_local_hours(events[SUNRISE].corrected(latitude, h0_prime), timezone),
        sunset: dayfrac_to_local_hours(events[SUNSET].corrected(latitude, h0_prime), timezone),
        condition: DayCondition::Regular,
    }
}

/// Equation of time in minutes for the instant of `sun`.
fn equation_of_time(sun: &SunCoordinates) -> f64 {
    let m = limit_degrees(polynomial(&SUN_MEAN_LONGITUDE, sun.time.jme));
    limit_minutes(
        4.0 * (m - 0.005_718_3 - sun.geocentric.alpha
            + sun.nutation.delta_psi * cos(deg2rad(sun.nutation.epsilon))),
    )
}

/// cos H0 for the sunrise/sunset altitude `h0_prime`. Outside [-1, 1] the sun never
/// crosses that altitude: below -1 it stays above, above 1 it stays below.
fn hour_angle_argument(latitude: f64, declination: f64, h0_prime: f64) -> f64 {
    let lat_rad = deg2rad(latitude);
    let declination_rad = deg2rad(declination);

    (sin(deg2rad(h0_prime)) - sin(lat_rad) * sin(declination_rad))
        / (cos(lat_rad) * cos(declination_rad))
}

/// Second-order interpolation across the three daily samples at day fraction `n`.
fn interpolate(values: [f64; 3], n: f64) -> f64 {
    let a = wrap_if_necessary(values[1] - values[0]);
    let b = wrap_if_necessary(values[2] - values[1]);
    values[1] + n * (a + b + (b - a) * n) / 2.0
}

/// Right ascension jumps by ~360° when it wraps; bring such differences back to [0, 1).
fn wrap_if_necessary(difference: f64) -> f64 {
    if abs(difference) >= 2.0 {
        limit_zero_to_one(difference)
    } else {
        difference
    }
}
