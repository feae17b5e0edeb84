use super::ConvectiveLevels;
use crate::{
    derived::{grid_heights, DerivedSample, SAMPLE_STEP},
    error::{AnalysisError, Result},
    interpolation::value_at,
    met_formulas::{
        d_mixing_ratio_d_temperature, dry_adiabatic_temperature, saturation_vapour_pressure,
        to_kelvin, GRAVITY, LATENT_HEAT, SPECIFIC_HEAT,
    },
    parcel::Parcel,
    sounding::Profile,
};
use metfor::{Celsius, CelsiusDiff, HectoPascal, Meters, Quantity};

/// Walk the grid from the surface up, building the derived levels as the parcel rises.
pub(super) fn lift_parcel(
    profile: &Profile,
    parcel: Parcel,
) -> Result<(Vec<DerivedSample>, ConvectiveLevels)> {
    let bottom = profile
        .surface()
        .ok_or(AnalysisError::EmptyProfile)?
        .height
        .unpack()
        .ceil();
    let top = profile.top().ok_or(AnalysisError::EmptyProfile)?.height;

    let capacity = ((top.unpack() - bottom) / SAMPLE_STEP.unpack()).max(0.0) as usize + 1;
    let mut levels: Vec<DerivedSample> = Vec::with_capacity(capacity);
    let mut sim = ParcelSimulator::new(parcel);

    for height in grid_heights(Meters(bottom), top) {
        let mut level = value_at(profile, height)?;
        sim.step(levels.last(), &mut level);
        levels.push(level);
    }

    Ok((levels, sim.finish()))
}

/// State carried from one grid level to the next while lifting the parcel.
#[derive(Debug, Clone, Copy)]
struct ParcelSimulator {
    parcel: Parcel,
    parcel_vapour_pressure: HectoPascal,

    // Temperature of the lifted parcel at the last level visited.
    lifted: Celsius,

    levels: ConvectiveLevels,
}

impl ParcelSimulator {
    fn new(parcel: Parcel) -> Self {
        ParcelSimulator {
            parcel,
            parcel_vapour_pressure: parcel.vapour_pressure(),
            lifted: parcel.temperature,
            levels: ConvectiveLevels::default(),
        }
    }

    /// Advance the parcel to `level`, which must be one grid step above `prev`.
    fn step(&mut self, prev: Option<&DerivedSample>, level: &mut DerivedSample) {
        let height = level.height();
        let pressure = level.pressure();
        let env_t = level.temperature();

        // Above the LCL the parcel follows the moist adiabat.
        if let (Some(_), Some(prev)) = (self.levels.lcl_height, prev) {
            self.lifted = moist_step(prev.pressure(), self.lifted, pressure);
        }

        if self.levels.lfc_height.is_some() && self.levels.el_height.is_none() {
            if self.lifted <= env_t {
                log::debug!("EL found at {:?}", height);
                self.levels.el_height = Some(height);
            } else {
                self.levels.accumulated_cape += buoyancy(self.lifted, env_t);
            }
        }

        if self.levels.ccl_height.is_none()
            && self.parcel_vapour_pressure >= saturation_vapour_pressure(env_t)
        {
            let conv_t =
                dry_adiabatic_temperature(pressure, self.parcel.temperature, self.parcel.pressure);
            let rise = (conv_t - self.parcel.temperature).unpack().max(0.0);

            log::debug!("CCL found at {:?}, {:?}", height, pressure);
            self.levels.ccl_height = Some(height);
            self.levels.ccl_pressure = Some(pressure);
            self.levels.convective_temperature = Some(conv_t);
            self.levels.convective_temperature_rise = Some(CelsiusDiff(rise));
        }

        if self.levels.lcl_height.is_none() {
            self.lifted =
                dry_adiabatic_temperature(self.parcel.pressure, self.parcel.temperature, pressure);

            if self.parcel_vapour_pressure >= saturation_vapour_pressure(self.lifted) {
                log::debug!("LCL found at {:?}, {:?}", height, pressure);
                self.levels.lcl_height = Some(height);
                self.levels.lcl_pressure = Some(pressure);
                self.levels.lcl_temperature = Some(env_t);
            }
        }

        if self.levels.lcl_height.is_some() {
            level.set_lifted_parcel_temperature(self.lifted);

            if self.levels.lfc_height.is_none() && self.lifted > env_t {
                log::debug!("LFC found at {:?}, {:?}", height, pressure);
                self.levels.lfc_height = Some(height);
                self.levels.lfc_pressure = Some(pressure);
            }
        }
    }

    fn finish(self) -> ConvectiveLevels {
        self.levels
    }
}

/// Cool a saturated parcel from `prev_pressure` to `pressure`.
///
/// The dry adiabatic cooling is scaled down by the latent heat released.
fn moist_step(prev_pressure: HectoPascal, lifted: Celsius, pressure: HectoPascal) -> Celsius {
    let dw_dt = d_mixing_ratio_d_temperature(pressure, lifted);
    let cooled = dry_adiabatic_temperature(prev_pressure, lifted, pressure);

    let dalr = (lifted - cooled).unpack();
    let malr = dalr / (1.0 + (LATENT_HEAT / SPECIFIC_HEAT) * dw_dt);

    Celsius(lifted.unpack() - malr)
}

/// CAPE contribution of one grid step.
fn buoyancy(parcel_t: Celsius, env_t: Celsius) -> f64 {
    let (pcl_k, env_k) = (to_kelvin(parcel_t), to_kelvin(env_t));
    GRAVITY * SAMPLE_STEP.unpack() * (pcl_k - env_k) / env_k
}
