//! Synthetic profiles used in tests.

use crate::sounding::{Profile, Sample, StationInfo};
use metfor::{Celsius, HectoPascal, Knots, Meters};

/// Pressure from a simple isothermal atmosphere with an 8 km scale height.
fn pressure_at(height: f64) -> HectoPascal {
    HectoPascal(1000.0 * (-height / 8000.0).exp())
}

fn make_profile<F>(top: u32, step: usize, make_sample: F) -> Profile
where
    F: Fn(f64) -> Sample,
{
    let samples = (0..=top)
        .step_by(step)
        .map(|h| make_sample(f64::from(h)))
        .collect();

    Profile::new()
        .with_station_info(StationInfo::new().with_name("Test".to_owned()))
        .with_samples(samples)
}

/// Two samples 100 m apart, the wind backs through north going up.
pub fn two_level_windy_profile() -> Profile {
    Profile::new().with_samples(vec![
        Sample::new(HectoPascal(1000.0), Meters(0.0), Celsius(20.0), Celsius(10.0))
            .with_wind(10.0, Knots(10.0)),
        Sample::new(HectoPascal(990.0), Meters(100.0), Celsius(16.0), Celsius(6.0))
            .with_wind(350.0, Knots(20.0)),
    ])
}

/// Every variable changes linearly with height from 0 to 1000 m.
pub fn linear_profile() -> Profile {
    Profile::new().with_samples(vec![
        Sample::new(HectoPascal(1000.0), Meters(0.0), Celsius(20.0), Celsius(10.0)),
        Sample::new(HectoPascal(900.0), Meters(1000.0), Celsius(10.0), Celsius(8.0)),
    ])
}

/// Shallower than the boundary layer, with the surface between grid levels.
pub fn shallow_profile() -> Profile {
    Profile::new().with_samples(vec![
        Sample::new(HectoPascal(1000.0), Meters(0.5), Celsius(20.0), Celsius(10.0)),
        Sample::new(HectoPascal(995.0), Meters(45.0), Celsius(19.6), Celsius(9.9)),
    ])
}

/// Not a single grid level fits in this profile.
pub fn single_sample_profile() -> Profile {
    Profile::new().with_sample(Sample::new(
        HectoPascal(990.0),
        Meters(100.5),
        Celsius(20.0),
        Celsius(10.0),
    ))
}

/// Cooling with height and very dry, nothing ever saturates. Only 3 km deep.
pub fn dry_profile() -> Profile {
    make_profile(3000, 250, |h| {
        Sample::new(
            pressure_at(h),
            Meters(h),
            Celsius(20.0 - 6.5 * h / 1000.0),
            Celsius(-40.0),
        )
        .with_wind(200.0 + h / 100.0, Knots(5.0 + h / 200.0))
    })
}

/// A warm, moist boundary layer under a steep lapse rate up to an isothermal layer at 10 km.
/// The wind veers and strengthens with height.
pub fn unstable_profile() -> Profile {
    make_profile(16_000, 250, |h| {
        let t = if h <= 10_000.0 {
            30.0 - 8.0 * h / 1000.0
        } else {
            -50.0
        };
        let td = (24.0 - 2.0 * h / 1000.0).min(t - 3.0);

        Sample::new(pressure_at(h), Meters(h), Celsius(t), Celsius(td))
            .with_wind(180.0 + 10.0 * h / 1000.0, Knots(10.0 + 4.0 * h / 1000.0))
    })
}

/// Isothermal and nearly saturated with a steady wind.
pub fn stable_profile() -> Profile {
    make_profile(12_000, 250, |h| {
        Sample::new(pressure_at(h), Meters(h), Celsius(20.0), Celsius(19.0))
            .with_wind(270.0, Knots(10.0))
    })
}
