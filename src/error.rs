//! Error types for the sounding-convection crate.
use metfor::Meters;
use thiserror::Error;

/// Error type for the crate.
#[derive(Clone, Copy, PartialEq, Debug, Error)]
pub enum AnalysisError {
    /// The profile handed over for analysis has no samples in it.
    #[error("Profile has no samples, cannot do analysis.")]
    EmptyProfile,
    /// The profile does not cover enough height to produce a single grid level.
    #[error("Not enough data available for analysis.")]
    NotEnoughData,
    /// The samples bracketing an interpolation target are at the same height.
    #[error("Samples bracketing the interpolation target share the height {0:?}.")]
    AmbiguousInterpolation(Meters),
    /// A height or pressure query fell outside of the range covered by the data.
    #[error("Query value {0} is outside the range covered by the data.")]
    OutOfRange(f64),
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, AnalysisError>;
