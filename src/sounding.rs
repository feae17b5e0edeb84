//! Data type and methods to store an atmospheric sounding profile.

use chrono::{Datelike, NaiveDateTime, Timelike};
use itertools::Itertools;
use std::fmt;

pub use self::{
    sample::Sample,
    station_info::{StationInfo, UNKNOWN_STATION},
};

/// A vertical profile of samples, ordered from the surface up.
///
/// The samples must be sorted by ascending height before the profile is handed to the analysis,
/// that is the responsibility of whoever builds the profile. The valid time and station are only
/// metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile {
    // Station info
    station: StationInfo,

    // Valid time of sounding
    valid_time: Option<NaiveDateTime>,

    // The observations, bottom up.
    samples: Vec<Sample>,
}

impl Profile {
    /// Create a new profile with default values. This is a proxy for default with a clearer name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_convection::Profile;
    ///
    /// let prof = Profile::new();
    /// assert!(prof.is_empty());
    /// println!("{:?}", prof);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Profile::default()
    }

    /// Builder function for setting the station info.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_convection::{Profile, StationInfo};
    ///
    /// let stn = StationInfo::new().with_name("Churchill".to_owned());
    /// let prof = Profile::new().with_station_info(stn);
    ///
    /// assert_eq!(prof.station_info().label(), "Churchill");
    /// ```
    #[inline]
    pub fn with_station_info(mut self, new_value: StationInfo) -> Self {
        self.station = new_value;
        self
    }

    /// Get the station info
    #[inline]
    pub fn station_info(&self) -> &StationInfo {
        &self.station
    }

    /// Builder method to set the valid time of the sounding.
    ///
    /// # Examples
    /// ```rust
    /// use sounding_convection::Profile;
    /// use chrono::NaiveDate;
    ///
    /// let vtime = NaiveDate::from_ymd_opt(2006, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
    /// let _prof = Profile::new().with_valid_time(vtime);
    /// let _prof = Profile::new().with_valid_time(Some(vtime));
    /// ```
    #[inline]
    pub fn with_valid_time<T>(mut self, valid_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        self.valid_time = Option::from(valid_time);
        self
    }

    /// Valid time of the sounding.
    #[inline]
    pub fn valid_time(&self) -> Option<NaiveDateTime> {
        self.valid_time
    }

    /// A human readable version of the valid time in the format "YYYY-M-D H UTC", months, days,
    /// and hours are not zero padded.
    ///
    /// # Examples
    /// ```rust
    /// use sounding_convection::Profile;
    /// use chrono::NaiveDate;
    ///
    /// let vtime = NaiveDate::from_ymd_opt(2006, 12, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
    /// let prof = Profile::new().with_valid_time(vtime);
    ///
    /// assert_eq!(prof.time_string().unwrap(), "2006-12-1 12 UTC");
    /// assert!(Profile::new().time_string().is_none());
    /// ```
    pub fn time_string(&self) -> Option<String> {
        self.valid_time.map(|vt| {
            format!(
                "{}-{}-{} {} UTC",
                vt.year(),
                vt.month(),
                vt.day(),
                vt.hour()
            )
        })
    }

    /// Builder method for the samples. They should already be sorted bottom up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Celsius, HectoPascal, Meters};
    /// use sounding_convection::{Profile, Sample};
    ///
    /// let samples = vec![
    ///     Sample::new(HectoPascal(1000.0), Meters(100.0), Celsius(20.0), Celsius(10.0)),
    ///     Sample::new(HectoPascal(850.0), Meters(1500.0), Celsius(10.0), Celsius(5.0)),
    /// ];
    ///
    /// let prof = Profile::new().with_samples(samples);
    /// assert_eq!(prof.len(), 2);
    /// assert!(prof.is_sorted_by_height());
    /// ```
    #[inline]
    pub fn with_samples(self, samples: Vec<Sample>) -> Self {
        Self { samples, ..self }
    }

    /// Builder method to add a single sample to the top of the profile.
    #[inline]
    pub fn with_sample(mut self, sample: Sample) -> Self {
        self.samples.push(sample);
        self
    }

    /// Get the samples, bottom up.
    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The number of samples in the profile.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The lowest sample.
    #[inline]
    pub fn surface(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// The highest sample.
    #[inline]
    pub fn top(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Check that the heights never decrease going up the profile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Celsius, HectoPascal, Meters};
    /// use sounding_convection::{Profile, Sample};
    ///
    /// let prof = Profile::new()
    ///     .with_sample(Sample::new(HectoPascal(850.0), Meters(1500.0), Celsius(10.0), Celsius(5.0)))
    ///     .with_sample(Sample::new(HectoPascal(1000.0), Meters(100.0), Celsius(20.0), Celsius(10.0)));
    ///
    /// assert!(!prof.is_sorted_by_height());
    /// ```
    pub fn is_sorted_by_height(&self) -> bool {
        self.samples
            .iter()
            .tuple_windows::<(_, _)>()
            .all(|(lower, upper)| lower.height <= upper.height)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Station: {}", self.station.label())?;
        match self.time_string() {
            Some(time) => writeln!(f, "Sounding time: {}", time)?,
            None => writeln!(f, "Sounding time: unknown")?,
        }

        for sample in &self.samples {
            writeln!(f, "{}", sample)?;
        }

        Ok(())
    }
}

// FIXME: only configure for test and doc tests, not possible as of 1.41
#[doc(hidden)]
pub mod doctest {
    use super::*;
    use metfor::{Celsius, HectoPascal, Knots, Meters};

    pub fn make_test_profile() -> super::Profile {
        let samples = vec![
            Sample::new(HectoPascal(1000.0), Meters(100.0), Celsius(20.0), Celsius(15.0))
                .with_wind(180.0, Knots(5.0)),
            Sample::new(HectoPascal(925.0), Meters(760.0), Celsius(16.0), Celsius(12.0))
                .with_wind(200.0, Knots(15.0)),
            Sample::new(HectoPascal(850.0), Meters(1480.0), Celsius(11.0), Celsius(8.0))
                .with_wind(220.0, Knots(20.0)),
            Sample::new(HectoPascal(700.0), Meters(3010.0), Celsius(0.0), Celsius(-6.0))
                .with_wind(240.0, Knots(30.0)),
        ];

        Profile::new()
            .with_station_info(StationInfo::new().with_station(71109))
            .with_samples(samples)
    }
}


mod sample;
mod station_info;
