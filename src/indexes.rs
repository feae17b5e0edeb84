//! Stability indexes calculated from the levels of a derived profile.
//!
//! These are computed after the parcel has been lifted. Any index that needs a level that is not
//! in the profile is left as `None`.

use crate::{
    derived::{find_by_height, find_by_pressure, DerivedSample},
    error::Result,
};
use metfor::{HectoPascal, JpKg, Meters, Quantity};

/// Depth of the layer above the surface averaged for the low level wind in the bulk Richardson
/// number.
pub const LOW_LAYER_DEPTH: Meters = Meters(500.0);

// Sampling strides through the low layer for the two wind averages of the bulk Richardson number.
// The second stride is larger than the layer, so only the bottom of the layer is sampled.
const LOW_LAYER_STRIDE: usize = 100;
const SHEAR_LAYER_STRIDE: usize = 6000;

/// The stability indexes of a derived profile.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StabilityIndexes {
    lifted_index: Option<f64>,
    k_index: Option<f64>,
    cross_totals: Option<f64>,
    vertical_totals: Option<f64>,
    total_totals: Option<f64>,
    sweat: Option<f64>,
    bulk_richardson_number: Option<f64>,
}

impl StabilityIndexes {
    /// The lifted index, 500 hPa temperature minus the lifted parcel temperature there.
    #[inline]
    pub fn lifted_index(&self) -> Option<f64> {
        self.lifted_index
    }

    /// The K-index.
    #[inline]
    pub fn k_index(&self) -> Option<f64> {
        self.k_index
    }

    /// Cross totals, the 850 hPa dew point minus the 500 hPa temperature.
    #[inline]
    pub fn cross_totals(&self) -> Option<f64> {
        self.cross_totals
    }

    /// Vertical totals, the 850 hPa temperature minus the 500 hPa temperature.
    #[inline]
    pub fn vertical_totals(&self) -> Option<f64> {
        self.vertical_totals
    }

    /// Total totals, the sum of the cross totals and vertical totals.
    #[inline]
    pub fn total_totals(&self) -> Option<f64> {
        self.total_totals
    }

    /// The severe weather threat index.
    #[inline]
    pub fn sweat(&self) -> Option<f64> {
        self.sweat
    }

    /// The bulk Richardson number.
    #[inline]
    pub fn bulk_richardson_number(&self) -> Option<f64> {
        self.bulk_richardson_number
    }
}

/// Calculate all the indexes.
pub(crate) fn calculate(
    levels: &[DerivedSample],
    surface_height: Meters,
    cape: JpKg,
) -> StabilityIndexes {
    let l850 = standard_level(levels, HectoPascal(850.0));
    let l700 = standard_level(levels, HectoPascal(700.0));
    let l500 = standard_level(levels, HectoPascal(500.0));

    let lifted_index = l500.and_then(lifted_index);
    let k_index = match (l850, l700, l500) {
        (Some(l850), Some(l700), Some(l500)) => Some(k_index(l850, l700, l500)),
        _ => None,
    };

    let (cross_totals, vertical_totals, total_totals, sweat) = match (l850, l500) {
        (Some(l850), Some(l500)) => {
            let ct = cross_totals(l850, l500);
            let vt = vertical_totals(l850, l500);
            let tt = ct + vt;
            (Some(ct), Some(vt), Some(tt), sweat(l850, l500, tt))
        }
        _ => (None, None, None, None),
    };

    let bulk_richardson_number = match bulk_richardson_number(levels, surface_height, cape) {
        Ok(brch) => brch,
        Err(err) => {
            log::warn!("Bulk Richardson number unavailable: {}", err);
            None
        }
    };

    StabilityIndexes {
        lifted_index,
        k_index,
        cross_totals,
        vertical_totals,
        total_totals,
        sweat,
        bulk_richardson_number,
    }
}

fn standard_level(levels: &[DerivedSample], pressure: HectoPascal) -> Option<&DerivedSample> {
    match find_by_pressure(levels, pressure) {
        Ok(lvl) => Some(lvl),
        Err(err) => {
            log::warn!("No level for {:?}, dependent indexes unavailable: {}", pressure, err);
            None
        }
    }
}

fn lifted_index(l500: &DerivedSample) -> Option<f64> {
    l500.lifted_parcel_temperature()
        .into_option()
        .map(|lifted| (l500.temperature() - lifted).unpack())
}

fn k_index(l850: &DerivedSample, l700: &DerivedSample, l500: &DerivedSample) -> f64 {
    let (t850, td850) = (l850.temperature().unpack(), l850.dew_point().unpack());
    let (t700, td700) = (l700.temperature().unpack(), l700.dew_point().unpack());
    let t500 = l500.temperature().unpack();

    (t850 - t500) + td850 - (t700 - td700)
}

fn cross_totals(l850: &DerivedSample, l500: &DerivedSample) -> f64 {
    (l850.dew_point() - l500.temperature()).unpack()
}

fn vertical_totals(l850: &DerivedSample, l500: &DerivedSample) -> f64 {
    (l850.temperature() - l500.temperature()).unpack()
}

fn sweat(l850: &DerivedSample, l500: &DerivedSample, total_totals: f64) -> Option<f64> {
    let spd850 = l850.wind_speed().into_option()?.unpack();
    let spd500 = l500.wind_speed().into_option()?.unpack();
    let dir850 = l850.wind_direction().into_option()?.to_radians();
    let dir500 = l500.wind_direction().into_option()?.to_radians();

    Some(
        12.0 * l850.temperature().unpack()
            + 20.0 * (total_totals - 49.0).max(0.0)
            + 2.0 * spd850
            + spd500
            + 125.0 * ((dir500 - dir850).sin() + 0.2),
    )
}

/// Wind components, u toward the east and v toward the north, of the level.
fn wind_components(lvl: &DerivedSample) -> Option<(f64, f64)> {
    let spd = lvl.wind_speed().into_option()?.unpack();
    let dir = lvl.wind_direction().into_option()?.to_radians();

    Some((spd * dir.cos(), spd * dir.sin()))
}

/// Mean wind components sampled every `stride` meters through the low layer.
///
/// `Ok(None)` means a level in the layer had no wind.
fn mean_low_layer_wind(
    levels: &[DerivedSample],
    surface_height: Meters,
    stride: usize,
) -> Result<Option<(f64, f64)>> {
    let bottom = levels.first().map(|lvl| lvl.height()).unwrap_or(surface_height);

    let mut sums = (0.0, 0.0);
    let mut count = 0.0;
    for offset in (0..=(LOW_LAYER_DEPTH.unpack() as usize)).step_by(stride) {
        let target = surface_height + Meters(offset as f64);
        let target = if target < bottom { bottom } else { target };

        let lvl = find_by_height(levels, target)?;
        let (u, v) = match wind_components(lvl) {
            Some(uv) => uv,
            None => return Ok(None),
        };

        sums.0 += u;
        sums.1 += v;
        count += 1.0;
    }

    Ok(Some((sums.0 / count, sums.1 / count)))
}

fn bulk_richardson_number(
    levels: &[DerivedSample],
    surface_height: Meters,
    cape: JpKg,
) -> Result<Option<f64>> {
    let low = mean_low_layer_wind(levels, surface_height, LOW_LAYER_STRIDE)?;
    let shear = mean_low_layer_wind(levels, surface_height, SHEAR_LAYER_STRIDE)?;

    let ((u_low, v_low), (u_shear, v_shear)) = match (low, shear) {
        (Some(low), Some(shear)) => (low, shear),
        _ => return Ok(None),
    };

    let (du, dv) = (u_low - u_shear, v_low - v_shear);
    let denominator = 0.5 * (du * du + dv * dv);

    if denominator == 0.0 {
        Ok(None)
    } else {
        Ok(Some(cape.unpack() / denominator))
    }
}
