//! Lift the boundary layer parcel up the profile and find the convective levels.
use crate::{
    derived::DerivedSample,
    error::Result,
    parcel::Parcel,
    sounding::Profile,
};
use metfor::{Celsius, CelsiusDiff, HectoPascal, JpKg, Meters};

pub(crate) mod lift;

/// The singular levels and CAPE found by lifting a parcel.
///
/// Every value is `None` until the level is found, and once found it is never changed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConvectiveLevels {
    lcl_height: Option<Meters>,
    lcl_pressure: Option<HectoPascal>,
    lcl_temperature: Option<Celsius>, // environment temperature at the LCL
    ccl_height: Option<Meters>,
    ccl_pressure: Option<HectoPascal>,
    convective_temperature: Option<Celsius>,
    convective_temperature_rise: Option<CelsiusDiff>,
    lfc_height: Option<Meters>,
    lfc_pressure: Option<HectoPascal>,
    el_height: Option<Meters>,

    // Integrated from the LFC to the EL, zero if there was no LFC.
    accumulated_cape: f64,
}

impl ConvectiveLevels {
    /// Get the lifting condensation level height.
    #[inline]
    pub fn lcl_height(&self) -> Option<Meters> {
        self.lcl_height
    }

    /// Get the LCL pressure level.
    #[inline]
    pub fn lcl_pressure(&self) -> Option<HectoPascal> {
        self.lcl_pressure
    }

    /// Get the environment temperature at the LCL.
    #[inline]
    pub fn lcl_temperature(&self) -> Option<Celsius> {
        self.lcl_temperature
    }

    /// Get the convective condensation level height.
    #[inline]
    pub fn ccl_height(&self) -> Option<Meters> {
        self.ccl_height
    }

    /// Get the CCL pressure level.
    #[inline]
    pub fn ccl_pressure(&self) -> Option<HectoPascal> {
        self.ccl_pressure
    }

    /// The temperature the boundary layer must be heated to for it to rise convectively to
    /// the CCL.
    #[inline]
    pub fn convective_temperature(&self) -> Option<Celsius> {
        self.convective_temperature
    }

    /// How much the boundary layer must warm to reach the convective temperature, never
    /// negative.
    #[inline]
    pub fn convective_temperature_rise(&self) -> Option<CelsiusDiff> {
        self.convective_temperature_rise
    }

    /// Get the level of free convection height.
    #[inline]
    pub fn lfc_height(&self) -> Option<Meters> {
        self.lfc_height
    }

    /// Get the LFC pressure level.
    #[inline]
    pub fn lfc_pressure(&self) -> Option<HectoPascal> {
        self.lfc_pressure
    }

    /// Get the equilibrium level height.
    #[inline]
    pub fn el_height(&self) -> Option<Meters> {
        self.el_height
    }

    /// Get the CAPE, this is `None` if there was no LFC.
    #[inline]
    pub fn cape(&self) -> Option<JpKg> {
        self.lfc_height.map(|_| JpKg(self.accumulated_cape))
    }

    /// The CAPE accumulated so far, zero if there was no LFC.
    #[inline]
    pub(crate) fn accumulated_cape(&self) -> JpKg {
        JpKg(self.accumulated_cape)
    }
}

/// Lift a parcel up the fixed height grid of the profile.
///
/// Returns the derived levels, bottom up, with the lifted parcel temperature filled in from the
/// LCL upward, and the levels found along the way.
pub(crate) fn lift_parcel(
    profile: &Profile,
    parcel: Parcel,
) -> Result<(Vec<DerivedSample>, ConvectiveLevels)> {
    lift::lift_parcel(profile, parcel)
}
