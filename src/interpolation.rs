//! Map an arbitrary height onto values interpolated from the original sounding.
use crate::{
    derived::DerivedSample,
    error::{AnalysisError, Result},
    sounding::{Profile, Sample},
};
use metfor::{Celsius, HectoPascal, Knots, Meters, Quantity};
use optional::{none, some, Optioned};

/// Interpolate values from the sounding using height as the vertical coordinate.
///
/// If the target height matches a sample exactly the values are copied from that sample,
/// otherwise the two samples bracketing it are linearly interpolated. Targets outside of the
/// profile are an error.
///
/// # Examples
///
/// ```rust
/// use metfor::{Celsius, Meters};
/// use sounding_convection::value_at;
/// # use sounding_convection::doctest::make_test_profile;
///
/// let prof = make_test_profile();
///
/// let lvl = value_at(&prof, Meters(760.0)).unwrap();
/// assert_eq!(lvl.temperature(), Celsius(16.0));
///
/// assert!(value_at(&prof, Meters(50.0)).is_err());
/// ```
pub fn value_at(profile: &Profile, target: Meters) -> Result<DerivedSample> {
    // What kind of bracket is this?
    enum BracketType<'a> {
        Bracket(&'a Sample, &'a Sample),
        Exact(&'a Sample),
    }

    let samples = profile.samples();
    if samples.is_empty() {
        return Err(AnalysisError::EmptyProfile);
    }

    // Index of the first sample at or above the target.
    let idx = samples.partition_point(|smpl| smpl.height < target);

    let bracket = match samples.get(idx) {
        Some(smpl) if smpl.height == target => BracketType::Exact(smpl),
        Some(above) if idx > 0 => BracketType::Bracket(&samples[idx - 1], above),
        _ => return Err(AnalysisError::OutOfRange(target.unpack())),
    };

    match bracket {
        BracketType::Exact(smpl) => Ok(DerivedSample::new(
            smpl.height,
            smpl.pressure,
            smpl.temperature,
            smpl.dew_point,
            smpl.wind_direction,
            smpl.wind_speed,
        )),
        BracketType::Bracket(below, above) => interpolate_between(below, above, target),
    }
}

/// Linearly interpolate between two samples with weights proportional to the height difference.
pub(crate) fn interpolate_between(
    below: &Sample,
    above: &Sample,
    target: Meters,
) -> Result<DerivedSample> {
    let run = (above.height.unpack() - below.height.unpack()).abs();
    if !(run > 0.0) {
        return Err(AnalysisError::AmbiguousInterpolation(below.height));
    }

    let w_below = 1.0 - (target.unpack() - below.height.unpack()).abs() / run;
    let w_above = 1.0 - w_below;

    let weighted = |val_below: f64, val_above: f64| w_below * val_below + w_above * val_above;

    let temperature = Celsius(weighted(
        below.temperature.unpack(),
        above.temperature.unpack(),
    ));
    let dew_point = Celsius(weighted(below.dew_point.unpack(), above.dew_point.unpack()));
    let pressure = HectoPascal(weighted(below.pressure.unpack(), above.pressure.unpack()));

    let wind_speed: Optioned<Knots> =
        match (below.wind_speed.into_option(), above.wind_speed.into_option()) {
            (Some(Knots(spd_below)), Some(Knots(spd_above))) => {
                some(Knots(weighted(spd_below, spd_above)))
            }
            _ => none(),
        };

    let wind_direction: Optioned<f64> = match (
        below.wind_direction.into_option(),
        above.wind_direction.into_option(),
    ) {
        (Some(dir_below), Some(dir_above)) => some(interpolate_direction(
            (dir_below, w_below),
            (dir_above, w_above),
        )),
        _ => none(),
    };

    Ok(DerivedSample::new(
        target,
        pressure,
        temperature,
        dew_point,
        wind_direction,
        wind_speed,
    ))
}

/// Interpolate a direction in degrees along the shorter arc between the two directions.
///
/// Each argument is a direction and its weight, the result is in the range [0, 360).
pub(crate) fn interpolate_direction(pnt_a: (f64, f64), pnt_b: (f64, f64)) -> f64 {
    let ((dir_a, w_a), (dir_b, w_b)) = (pnt_a, pnt_b);

    let (smallest, largest, small_weight) = if dir_a < dir_b {
        (dir_a, dir_b, w_a)
    } else {
        (dir_b, dir_a, w_b)
    };

    let mut cw_from_largest = smallest - largest;
    if cw_from_largest < 0.0 {
        cw_from_largest += 360.0;
    }
    let cw_from_smallest = largest - smallest;

    let direction = if cw_from_largest < cw_from_smallest {
        small_weight * cw_from_largest + largest
    } else {
        (1.0 - small_weight) * cw_from_smallest + smallest
    };

    direction.rem_euclid(360.0)
}
