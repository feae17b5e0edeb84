use crate::met_formulas::{mixing_ratio, saturation_vapour_pressure};
use metfor::{Celsius, CelsiusDiff, HectoPascal, Knots, Meters, Quantity};
use optional::{none, some, Optioned};
use std::fmt;

/// Relative humidity (%) at or above which stratus cloud is expected.
pub const STRATUS_RH_THRESHOLD: f64 = 99.0;

/// A level on the fixed height grid of a `DerivedProfile`.
///
/// The environment values are interpolated from the original sounding, the humidity values are
/// derived from them and kept in sync by the setters. The lifted parcel temperature is only set
/// from the lifting condensation level upward.
#[derive(Clone, Copy, Debug)]
pub struct DerivedSample {
    height: Meters,
    pressure: HectoPascal,
    temperature: Celsius,
    dew_point: Celsius,
    wind_direction: Optioned<f64>,
    wind_speed: Optioned<Knots>,

    // Derived from temperature, dew point, and pressure
    spread: CelsiusDiff,
    relative_humidity: f64,
    vapour_pressure: HectoPascal,
    mixing_ratio: f64,
    stratus: bool,

    // Parcel analysis
    lifted_parcel_temperature: Optioned<Celsius>,
    lifted_difference: Optioned<CelsiusDiff>,
}

impl DerivedSample {
    /// Create a level and derive the humidity variables.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Celsius, CelsiusDiff, HectoPascal, Meters};
    /// use optional::none;
    /// use sounding_convection::DerivedSample;
    ///
    /// let lvl = DerivedSample::new(
    ///     Meters(1000.0),
    ///     HectoPascal(900.0),
    ///     Celsius(10.0),
    ///     Celsius(10.0),
    ///     none(),
    ///     none(),
    /// );
    ///
    /// assert_eq!(lvl.spread(), CelsiusDiff(0.0));
    /// assert!(lvl.is_stratus());
    /// assert!(lvl.lifted_parcel_temperature().is_none());
    /// ```
    pub fn new(
        height: Meters,
        pressure: HectoPascal,
        temperature: Celsius,
        dew_point: Celsius,
        wind_direction: Optioned<f64>,
        wind_speed: Optioned<Knots>,
    ) -> Self {
        let mut level = DerivedSample {
            height,
            pressure,
            temperature,
            dew_point,
            wind_direction,
            wind_speed,
            spread: CelsiusDiff(0.0),
            relative_humidity: 0.0,
            vapour_pressure: HectoPascal(0.0),
            mixing_ratio: 0.0,
            stratus: false,
            lifted_parcel_temperature: none(),
            lifted_difference: none(),
        };

        level.derive_humidity();
        level
    }

    /// Height of the level in meters.
    #[inline]
    pub fn height(&self) -> Meters {
        self.height
    }

    /// Pressure of the level.
    #[inline]
    pub fn pressure(&self) -> HectoPascal {
        self.pressure
    }

    /// Environment temperature.
    #[inline]
    pub fn temperature(&self) -> Celsius {
        self.temperature
    }

    /// Environment dew point.
    #[inline]
    pub fn dew_point(&self) -> Celsius {
        self.dew_point
    }

    /// Wind direction in degrees clockwise from north.
    #[inline]
    pub fn wind_direction(&self) -> Optioned<f64> {
        self.wind_direction
    }

    /// Wind speed.
    #[inline]
    pub fn wind_speed(&self) -> Optioned<Knots> {
        self.wind_speed
    }

    /// Temperature - dew point spread.
    #[inline]
    pub fn spread(&self) -> CelsiusDiff {
        self.spread
    }

    /// Relative humidity in percent.
    #[inline]
    pub fn relative_humidity(&self) -> f64 {
        self.relative_humidity
    }

    /// Vapour pressure actually present in the air, the saturation vapour pressure at the dew
    /// point.
    #[inline]
    pub fn vapour_pressure(&self) -> HectoPascal {
        self.vapour_pressure
    }

    /// Mixing ratio in g/kg.
    #[inline]
    pub fn mixing_ratio(&self) -> f64 {
        self.mixing_ratio
    }

    /// Whether the relative humidity is high enough to expect stratus cloud.
    #[inline]
    pub fn is_stratus(&self) -> bool {
        self.stratus
    }

    /// Temperature of the lifted parcel at this level, missing below the LCL.
    #[inline]
    pub fn lifted_parcel_temperature(&self) -> Optioned<Celsius> {
        self.lifted_parcel_temperature
    }

    /// Lifted parcel temperature minus the environment temperature.
    #[inline]
    pub fn lifted_difference(&self) -> Optioned<CelsiusDiff> {
        self.lifted_difference
    }

    /// Set the environment temperature, this updates all the derived values that depend on it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Celsius, CelsiusDiff, HectoPascal, Meters};
    /// use optional::none;
    /// use sounding_convection::DerivedSample;
    ///
    /// let mut lvl = DerivedSample::new(
    ///     Meters(1000.0),
    ///     HectoPascal(900.0),
    ///     Celsius(10.0),
    ///     Celsius(10.0),
    ///     none(),
    ///     none(),
    /// );
    /// lvl.set_lifted_parcel_temperature(Celsius(12.0));
    /// lvl.set_temperature(Celsius(15.0));
    ///
    /// assert_eq!(lvl.spread(), CelsiusDiff(5.0));
    /// assert!(!lvl.is_stratus());
    /// assert_eq!(lvl.lifted_difference().unwrap(), CelsiusDiff(-3.0));
    /// ```
    pub fn set_temperature(&mut self, temperature: Celsius) {
        self.temperature = temperature;
        self.derive_lifted_difference();
        self.derive_humidity();
    }

    /// Set the environment dew point, this updates all the derived humidity values.
    pub fn set_dew_point(&mut self, dew_point: Celsius) {
        self.dew_point = dew_point;
        self.derive_humidity();
    }

    /// Set the lifted parcel temperature, only the lifted difference depends on it.
    pub fn set_lifted_parcel_temperature(&mut self, temperature: Celsius) {
        self.lifted_parcel_temperature = some(temperature);
        self.derive_lifted_difference();
    }

    fn derive_lifted_difference(&mut self) {
        self.lifted_difference = match self.lifted_parcel_temperature.into_option() {
            Some(Celsius(lifted_t)) => some(CelsiusDiff(lifted_t - self.temperature.unpack())),
            None => none(),
        };
    }

    fn derive_humidity(&mut self) {
        let Celsius(t) = self.temperature;
        let Celsius(dp) = self.dew_point;

        self.spread = CelsiusDiff(t - dp);

        let HectoPascal(actual) = saturation_vapour_pressure(self.dew_point);
        let HectoPascal(saturated) = saturation_vapour_pressure(self.temperature);

        self.relative_humidity = 100.0 * actual / saturated;
        self.stratus = self.relative_humidity >= STRATUS_RH_THRESHOLD;
        self.vapour_pressure = HectoPascal(actual);
        self.mixing_ratio = mixing_ratio(self.pressure, self.vapour_pressure);
    }
}

impl PartialEq for DerivedSample {
    fn eq(&self, other: &Self) -> bool {
        self.height == other.height
            && self.pressure == other.pressure
            && self.temperature == other.temperature
            && self.dew_point == other.dew_point
            && self.wind_direction.into_option() == other.wind_direction.into_option()
            && self.wind_speed.into_option() == other.wind_speed.into_option()
            && self.spread == other.spread
            && self.relative_humidity == other.relative_humidity
            && self.vapour_pressure == other.vapour_pressure
            && self.mixing_ratio == other.mixing_ratio
            && self.stratus == other.stratus
            && self.lifted_parcel_temperature.into_option()
                == other.lifted_parcel_temperature.into_option()
            && self.lifted_difference.into_option() == other.lifted_difference.into_option()
    }
}

impl fmt::Display for DerivedSample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lifted_t = self
            .lifted_parcel_temperature
            .into_option()
            .map(|t| t.unpack())
            .unwrap_or(std::f64::NAN);
        let lifted_diff = self
            .lifted_difference
            .into_option()
            .map(|d| d.unpack())
            .unwrap_or(std::f64::NAN);

        write!(
            f,
            "pressure: {}\theight: {}\tT: {}\tD: {}\tLT: {}\tDiff: {}",
            self.pressure.unpack(),
            self.height.unpack(),
            self.temperature.unpack(),
            self.dew_point.unpack(),
            lifted_t,
            lifted_diff
        )
    }
}
