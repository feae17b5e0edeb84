use metfor::{Celsius, HectoPascal, Knots, Meters, Quantity};
use optional::Optioned;
use std::fmt;

/// A single observation from the original sounding data.
///
/// The wind may be missing, two samples that are both missing the wind compare equal on the wind.
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    /// Pressure in hPa (mb)
    pub pressure: HectoPascal,
    /// Geopotential height in meters
    pub height: Meters,
    /// Temperature in C
    pub temperature: Celsius,
    /// Dew point in C
    pub dew_point: Celsius,
    /// Wind direction in degrees clockwise from north
    pub wind_direction: Optioned<f64>,
    /// Wind speed in knots
    pub wind_speed: Optioned<Knots>,
}

impl Sample {
    /// Create a sample without any wind information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Celsius, HectoPascal, Meters};
    /// use sounding_convection::Sample;
    ///
    /// let a = Sample::new(HectoPascal(700.0), Meters(5000.0), Celsius(3.0), Celsius(-4.0));
    /// let b = Sample::new(HectoPascal(700.0), Meters(5000.0), Celsius(3.0), Celsius(-4.0));
    ///
    /// assert!(a.wind_direction.is_none());
    /// assert_eq!(a, b);
    /// ```
    #[inline]
    pub fn new(
        pressure: HectoPascal,
        height: Meters,
        temperature: Celsius,
        dew_point: Celsius,
    ) -> Self {
        Sample {
            pressure,
            height,
            temperature,
            dew_point,
            wind_direction: Optioned::default(),
            wind_speed: Optioned::default(),
        }
    }

    /// Builder method to add the wind. A `NaN` direction or speed is treated as missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Celsius, HectoPascal, Knots, Meters};
    /// use sounding_convection::Sample;
    ///
    /// let smpl = Sample::new(HectoPascal(700.0), Meters(5000.0), Celsius(3.0), Celsius(-4.0))
    ///     .with_wind(220.0, Knots(19.0));
    ///
    /// assert_eq!(smpl.wind_direction.unwrap(), 220.0);
    /// assert_eq!(smpl.wind_speed.unwrap(), Knots(19.0));
    /// ```
    #[inline]
    pub fn with_wind(self, direction: f64, speed: Knots) -> Self {
        Sample {
            wind_direction: Optioned::from(direction),
            wind_speed: Optioned::from(speed),
            ..self
        }
    }
}

impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        // Missing values are stored as NaN, compare them as options.
        self.pressure == other.pressure
            && self.height == other.height
            && self.temperature == other.temperature
            && self.dew_point == other.dew_point
            && self.wind_direction.into_option() == other.wind_direction.into_option()
            && self.wind_speed.into_option() == other.wind_speed.into_option()
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}mb, {}m, {} C, {} C, ",
            self.pressure.unpack(),
            self.height.unpack(),
            self.temperature.unpack(),
            self.dew_point.unpack()
        )?;

        match (
            self.wind_direction.into_option(),
            self.wind_speed.into_option(),
        ) {
            (Some(dir), Some(spd)) => write!(f, "{} degrees, {}", dir, spd.unpack()),
            _ => write!(f, "missing wind"),
        }
    }
}
