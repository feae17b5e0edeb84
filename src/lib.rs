#![warn(missing_docs)]
//! Functions and data types for the convective analysis of an atmospheric sounding.
//!
//! A [`Profile`](struct.Profile.html) of observed samples is resampled every 10 meters into a
//! [`DerivedProfile`](struct.DerivedProfile.html) while a parcel averaged from the boundary layer
//! is lifted through it. Along the way the condensation and convection levels, CAPE, and a set of
//! stability indexes are found.
//!
//! # Examples
//!
//! ```rust
//! use sounding_convection::{DerivedProfile, IndexKey};
//! # use sounding_convection::doctest::make_test_profile;
//!
//! let prof = make_test_profile();
//! let derived = DerivedProfile::new(&prof).unwrap();
//!
//! println!("{}", derived);
//! println!("{:?}", derived.get_index(IndexKey::LCLHeight));
//! ```

//
// API
//
pub use crate::{
    derived::{DerivedProfile, DerivedSample, SAMPLE_STEP, STRATUS_RH_THRESHOLD},
    error::{AnalysisError, Result},
    indexes::{StabilityIndexes, LOW_LAYER_DEPTH},
    interpolation::value_at,
    keys::IndexKey,
    parcel::{pbl_parcel, Parcel, PBL_DEPTH},
    parcel_profile::ConvectiveLevels,
    sounding::{doctest, Profile, Sample, StationInfo, UNKNOWN_STATION},
};

pub mod met_formulas;

//
// Internal use only
//

// Modules
mod derived;
mod error;
mod indexes;
mod interpolation;
mod keys;
mod parcel;
mod parcel_profile;
mod sounding;

#[cfg(test)]
mod test_data;
