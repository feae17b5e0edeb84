//! Keys for the scalar values of a derived profile.
use strum_macros::EnumIter;

/// Every scalar level marker and index calculated for a `DerivedProfile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum IndexKey {
    /// Lifting Condensation Level height (m)
    LCLHeight,
    /// Lifting Condensation Level, or LCL (hPa), pressure vertical coordinate.
    LCLPressure,
    /// Environment temperature at the LCL (C)
    LCLTemperature,
    /// Convective Condensation Level height (m)
    CCLHeight,
    /// Convective Condensation Level (hPa)
    CCLPressure,
    /// Convective temperature (C)
    ConvectiveT,
    /// Heating needed to reach the convective temperature (C)
    ConvectiveTRise,
    /// Level of Free Convection height (m)
    LFCHeight,
    /// Level of Free Convection (hPa), pressure vertical coordinate
    LFCPressure,
    /// Equilibrium level height (m)
    ELHeight,
    /// Convective Available Potential Energy, or CAPE. (J/kg)
    CAPE,
    /// Lifted Index
    LI,
    /// K-index
    K,
    /// Cross totals
    CrossTotals,
    /// Vertical totals
    VerticalTotals,
    /// Total-Totals
    TotalTotals,
    /// Severe Weather Threat Index
    SWeT,
    /// Bulk Richardson Number
    BulkRichardson,
}

impl IndexKey {
    /// A short label for displaying the value.
    pub fn name(self) -> &'static str {
        use IndexKey::*;

        match self {
            LCLHeight => "LCL height",
            LCLPressure => "LCL pressure",
            LCLTemperature => "LCL temperature",
            CCLHeight => "CCL height",
            CCLPressure => "CCL pressure",
            ConvectiveT => "Convective temperature",
            ConvectiveTRise => "Convective temperature rise",
            LFCHeight => "LFC height",
            LFCPressure => "LFC pressure",
            ELHeight => "EL height",
            CAPE => "CAPE",
            LI => "LI",
            K => "KINX",
            CrossTotals => "CTOT",
            VerticalTotals => "VTOT",
            TotalTotals => "TTOTAL",
            SWeT => "SWEAT",
            BulkRichardson => "BRCH",
        }
    }
}
