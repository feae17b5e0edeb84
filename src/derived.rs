//! The derived profile, a sounding resampled on a fixed height grid with the results of the
//! parcel analysis attached.

use crate::{
    error::{AnalysisError, Result},
    indexes::{self, StabilityIndexes},
    keys::IndexKey,
    parcel::{pbl_parcel, Parcel},
    parcel_profile::{lift_parcel, ConvectiveLevels},
    sounding::Profile,
};
use metfor::{Celsius, CelsiusDiff, HectoPascal, JpKg, Meters, Quantity};
use std::fmt;

pub use self::level::{DerivedSample, STRATUS_RH_THRESHOLD};

/// Vertical distance between levels of the derived profile.
pub const SAMPLE_STEP: Meters = Meters(10.0);

/// Heights on the grid starting at `bottom`, stopping before `top_exclusive`.
pub(crate) fn grid_heights(bottom: Meters, top_exclusive: Meters) -> impl Iterator<Item = Meters> {
    let (Meters(bottom), Meters(step)) = (bottom, SAMPLE_STEP);

    // Multiply rather than accumulate so the grid doesn't drift.
    (0u32..)
        .map(move |k| Meters(bottom + f64::from(k) * step))
        .take_while(move |h| *h < top_exclusive)
}

/// Find the last level at or below `target` height.
pub(crate) fn find_by_height(levels: &[DerivedSample], target: Meters) -> Result<&DerivedSample> {
    find_bracketed(levels, target.unpack(), |lvl| lvl.height() <= target, |lvl| {
        lvl.height().unpack()
    })
}

/// Find the last level with pressure at or above `target`, the lowest level at or above it in the
/// atmosphere.
pub(crate) fn find_by_pressure(
    levels: &[DerivedSample],
    target: HectoPascal,
) -> Result<&DerivedSample> {
    find_bracketed(levels, target.unpack(), |lvl| lvl.pressure() >= target, |lvl| {
        lvl.pressure().unpack()
    })
}

fn find_bracketed<P, V>(
    levels: &[DerivedSample],
    target: f64,
    below: P,
    value: V,
) -> Result<&DerivedSample>
where
    P: Fn(&DerivedSample) -> bool,
    V: Fn(&DerivedSample) -> f64,
{
    let (first, last) = match (levels.first(), levels.last()) {
        (Some(first), Some(last)) => (value(first), value(last)),
        _ => return Err(AnalysisError::OutOfRange(target)),
    };

    let (low, high) = if first <= last {
        (first, last)
    } else {
        (last, first)
    };
    if !(target >= low && target <= high) {
        return Err(AnalysisError::OutOfRange(target));
    }

    let idx = levels.partition_point(|lvl| below(lvl));
    idx.checked_sub(1)
        .and_then(|i| levels.get(i))
        .ok_or(AnalysisError::OutOfRange(target))
}

/// A sounding resampled every `SAMPLE_STEP` meters with the results of lifting a boundary layer
/// parcel through it.
///
/// The profile is built in a single pass and never changes afterward.
#[derive(Debug, Clone)]
pub struct DerivedProfile {
    profile: Profile,
    levels: Vec<DerivedSample>,
    parcel: Parcel,
    convective: ConvectiveLevels,
    indexes: StabilityIndexes,
}

macro_rules! level_getter {
    ($(#[$doc:meta])* $name:ident, $type:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&self) -> Option<$type> {
            self.convective.$name()
        }
    };
}

macro_rules! index_getter {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&self) -> Option<f64> {
            self.indexes.$name()
        }
    };
}

impl DerivedProfile {
    /// Analyze a profile.
    ///
    /// The profile is copied, later changes to it do not affect the result. The samples must be
    /// sorted by height.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::Meters;
    /// use sounding_convection::DerivedProfile;
    /// # use sounding_convection::doctest::make_test_profile;
    ///
    /// let prof = make_test_profile();
    /// let derived = DerivedProfile::new(&prof).unwrap();
    ///
    /// assert_eq!(derived.min_height(), Meters(100.0));
    /// assert_eq!(derived.max_height(), Meters(3000.0));
    /// ```
    pub fn new(profile: &Profile) -> Result<Self> {
        if profile.is_empty() {
            return Err(AnalysisError::EmptyProfile);
        }
        debug_assert!(profile.is_sorted_by_height());

        let profile = profile.clone();

        let parcel = pbl_parcel(&profile)?;
        log::debug!("PBL parcel: {:?}", parcel);

        let (levels, convective) = lift_parcel(&profile, parcel)?;
        let surface = match (profile.surface(), levels.is_empty()) {
            (Some(sfc), false) => sfc.height,
            _ => return Err(AnalysisError::NotEnoughData),
        };

        let indexes = indexes::calculate(&levels, surface, convective.accumulated_cape());

        Ok(DerivedProfile {
            profile,
            levels,
            parcel,
            convective,
            indexes,
        })
    }

    /// The copy of the profile this was derived from.
    #[inline]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The boundary layer parcel that was lifted.
    #[inline]
    pub fn parcel(&self) -> Parcel {
        self.parcel
    }

    /// All the levels, bottom up.
    #[inline]
    pub fn levels(&self) -> &[DerivedSample] {
        &self.levels
    }

    /// Get a level by its index, 0 is the lowest.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&DerivedSample> {
        self.levels.get(idx)
    }

    /// Iterate over the levels, bottom up.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DerivedSample> {
        self.levels.iter()
    }

    /// Number of levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// This is never true for a successfully constructed profile.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The grid spacing.
    #[inline]
    pub fn sample_step(&self) -> Meters {
        SAMPLE_STEP
    }

    /// Height of the lowest level.
    #[inline]
    pub fn min_height(&self) -> Meters {
        self.levels.first().map(|lvl| lvl.height()).unwrap_or(Meters(0.0))
    }

    /// Height of the highest level.
    #[inline]
    pub fn max_height(&self) -> Meters {
        self.levels.last().map(|lvl| lvl.height()).unwrap_or(Meters(0.0))
    }

    /// The level nearest to `height`, that is the highest level at or below it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::Meters;
    /// use sounding_convection::DerivedProfile;
    /// # use sounding_convection::doctest::make_test_profile;
    ///
    /// let derived = DerivedProfile::new(&make_test_profile()).unwrap();
    ///
    /// assert_eq!(derived.level_at_height(Meters(1234.5)).unwrap().height(), Meters(1230.0));
    /// assert!(derived.level_at_height(Meters(50.0)).is_err());
    /// ```
    pub fn level_at_height(&self, height: Meters) -> Result<&DerivedSample> {
        find_by_height(&self.levels, height)
    }

    /// The level nearest to `pressure`, that is the lowest level at or above it.
    pub fn level_at_pressure(&self, pressure: HectoPascal) -> Result<&DerivedSample> {
        find_by_pressure(&self.levels, pressure)
    }

    /// The levels found while lifting the parcel.
    #[inline]
    pub fn convective_levels(&self) -> &ConvectiveLevels {
        &self.convective
    }

    /// The stability indexes.
    #[inline]
    pub fn stability_indexes(&self) -> &StabilityIndexes {
        &self.indexes
    }

    level_getter!(
        /// Lifting condensation level height.
        lcl_height,
        Meters
    );
    level_getter!(
        /// Lifting condensation level pressure.
        lcl_pressure,
        HectoPascal
    );
    level_getter!(
        /// Environment temperature at the LCL.
        lcl_temperature,
        Celsius
    );
    level_getter!(
        /// Convective condensation level height.
        ccl_height,
        Meters
    );
    level_getter!(
        /// Convective condensation level pressure.
        ccl_pressure,
        HectoPascal
    );
    level_getter!(
        /// Temperature the boundary layer must reach to convect to the CCL.
        convective_temperature,
        Celsius
    );
    level_getter!(
        /// Warming needed to reach the convective temperature.
        convective_temperature_rise,
        CelsiusDiff
    );
    level_getter!(
        /// Level of free convection height.
        lfc_height,
        Meters
    );
    level_getter!(
        /// Level of free convection pressure.
        lfc_pressure,
        HectoPascal
    );
    level_getter!(
        /// Equilibrium level height.
        el_height,
        Meters
    );
    level_getter!(
        /// Convective available potential energy, `None` without an LFC.
        cape,
        JpKg
    );

    index_getter!(
        /// Lifted index.
        lifted_index
    );
    index_getter!(
        /// K-index.
        k_index
    );
    index_getter!(
        /// Cross totals.
        cross_totals
    );
    index_getter!(
        /// Vertical totals.
        vertical_totals
    );
    index_getter!(
        /// Total totals.
        total_totals
    );
    index_getter!(
        /// Severe weather threat index.
        sweat
    );
    index_getter!(
        /// Bulk Richardson number.
        bulk_richardson_number
    );

    /// Get any of the scalar values by key, unpacked to a plain `f64` in the units of the
    /// specific getter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_convection::{DerivedProfile, IndexKey};
    /// use strum::IntoEnumIterator;
    /// # use sounding_convection::doctest::make_test_profile;
    ///
    /// let derived = DerivedProfile::new(&make_test_profile()).unwrap();
    ///
    /// for key in IndexKey::iter() {
    ///     println!("{}: {:?}", key.name(), derived.get_index(key));
    /// }
    /// ```
    pub fn get_index(&self, key: IndexKey) -> Option<f64> {
        use IndexKey::*;

        match key {
            LCLHeight => self.lcl_height().map(Quantity::unpack),
            LCLPressure => self.lcl_pressure().map(Quantity::unpack),
            LCLTemperature => self.lcl_temperature().map(Quantity::unpack),
            CCLHeight => self.ccl_height().map(Quantity::unpack),
            CCLPressure => self.ccl_pressure().map(Quantity::unpack),
            ConvectiveT => self.convective_temperature().map(Quantity::unpack),
            ConvectiveTRise => self.convective_temperature_rise().map(Quantity::unpack),
            LFCHeight => self.lfc_height().map(Quantity::unpack),
            LFCPressure => self.lfc_pressure().map(Quantity::unpack),
            ELHeight => self.el_height().map(Quantity::unpack),
            CAPE => self.cape().map(Quantity::unpack),
            LI => self.lifted_index(),
            K => self.k_index(),
            CrossTotals => self.cross_totals(),
            VerticalTotals => self.vertical_totals(),
            TotalTotals => self.total_totals(),
            SWeT => self.sweat(),
            BulkRichardson => self.bulk_richardson_number(),
        }
    }
}

impl fmt::Display for DerivedProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let show = |val: Option<f64>| match val {
            Some(val) => format!("{:.1}", val),
            None => "none".to_owned(),
        };

        writeln!(f, "Derived profile for: {}", self.profile.station_info().label())?;
        writeln!(
            f,
            "CCL: {} m, {} hPa",
            show(self.get_index(IndexKey::CCLHeight)),
            show(self.get_index(IndexKey::CCLPressure))
        )?;
        writeln!(
            f,
            "CT: {} C, rise {} C",
            show(self.get_index(IndexKey::ConvectiveT)),
            show(self.get_index(IndexKey::ConvectiveTRise))
        )?;
        writeln!(
            f,
            "LCL: {} m, {} hPa, {} C",
            show(self.get_index(IndexKey::LCLHeight)),
            show(self.get_index(IndexKey::LCLPressure)),
            show(self.get_index(IndexKey::LCLTemperature))
        )?;
        writeln!(
            f,
            "LFC: {} m, {} hPa",
            show(self.get_index(IndexKey::LFCHeight)),
            show(self.get_index(IndexKey::LFCPressure))
        )
    }
}

impl<'a> IntoIterator for &'a DerivedProfile {
    type Item = &'a DerivedSample;
    type IntoIter = std::slice::Iter<'a, DerivedSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

mod level;
