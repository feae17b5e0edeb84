//! The parcel lifted in the convective analysis.
//!
//! The parcel is the simple mean of the planetary boundary layer, sampled on the same fixed
//! height grid used for the derived profile.

use crate::{
    derived::{grid_heights, DerivedSample},
    error::{AnalysisError, Result},
    interpolation::value_at,
    met_formulas::saturation_vapour_pressure,
    sounding::Profile,
};
use metfor::{Celsius, HectoPascal, Meters, Quantity};

/// Depth of the boundary layer averaged to create the parcel.
pub const PBL_DEPTH: Meters = Meters(500.0);

/// Variables defining a parcel as used in parcel analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parcel {
    /// Mean height of the layer the parcel was drawn from.
    pub height: Meters,
    /// Pressure in hPa
    pub pressure: HectoPascal,
    /// Temperature in C
    pub temperature: Celsius,
    /// Dew point in C
    pub dew_point: Celsius,
}

impl Parcel {
    /// The vapour pressure of the parcel, which is the saturation vapour pressure at its dew
    /// point.
    #[inline]
    pub fn vapour_pressure(&self) -> HectoPascal {
        saturation_vapour_pressure(self.dew_point)
    }
}

/// Sums and a count for averaging levels.
#[derive(Debug, Clone, Copy, Default)]
struct RunningMean {
    height: f64,
    pressure: f64,
    temperature: f64,
    dew_point: f64,
    count: u32,
}

impl RunningMean {
    fn add(mut self, lvl: &DerivedSample) -> Self {
        self.height += lvl.height().unpack();
        self.pressure += lvl.pressure().unpack();
        self.temperature += lvl.temperature().unpack();
        self.dew_point += lvl.dew_point().unpack();
        self.count += 1;
        self
    }

    fn mean(&self) -> Option<Parcel> {
        if self.count == 0 {
            return None;
        }

        let n = f64::from(self.count);
        Some(Parcel {
            height: Meters(self.height / n),
            pressure: HectoPascal(self.pressure / n),
            temperature: Celsius(self.temperature / n),
            dew_point: Celsius(self.dew_point / n),
        })
    }
}

/// Create a boundary layer parcel.
///
/// The values in this parcel are the simple mean of the levels in the lowest `PBL_DEPTH` above
/// the surface, starting at the surface height rounded up to a whole meter. If the sounding is
/// not that deep, only the available levels are used.
///
/// # Examples
///
/// ```rust
/// use metfor::HectoPascal;
/// use sounding_convection::pbl_parcel;
/// # use sounding_convection::doctest::make_test_profile;
///
/// let prof = make_test_profile();
/// let pcl = pbl_parcel(&prof).unwrap();
///
/// assert!(pcl.pressure < HectoPascal(1000.0));
/// assert!(pcl.pressure > HectoPascal(925.0));
/// ```
pub fn pbl_parcel(profile: &Profile) -> Result<Parcel> {
    let bottom = profile
        .surface()
        .ok_or(AnalysisError::EmptyProfile)?
        .height
        .unpack()
        .ceil();
    let top = profile.top().ok_or(AnalysisError::EmptyProfile)?.height;

    grid_heights(Meters(bottom), Meters(bottom + PBL_DEPTH.unpack()))
        // Don't extrapolate above the sounding
        .take_while(|h| *h <= top)
        .map(|h| value_at(profile, h))
        .try_fold(RunningMean::default(), |acc, lvl| lvl.map(|lvl| acc.add(&lvl)))?
        .mean()
        .ok_or(AnalysisError::NotEnoughData)
}
