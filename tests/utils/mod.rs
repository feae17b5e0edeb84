use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use metfor::{Celsius, HectoPascal, Knots, Meters};
use sounding_convection::{Profile, Sample, StationInfo};

pub mod derived_tests;

/// Keys every test file must have in its analysis section.
#[allow(dead_code)] // Only used by some of the test binaries.
pub const FVAL_KEYS: &[&str] = &[
    "num levels",
    "lcl height",
    "lcl pressure",
    "ccl height",
    "ccl pressure",
    "convective temperature",
    "lfc height",
    "el height",
    "cape",
    "lifted index",
    "kindex",
    "cross totals",
    "vertical totals",
    "total totals",
    "sweat",
    "brch",
];

#[allow(unused_macros)] // False alarm
macro_rules! test_file {
    ($test_mod_name:ident, $fname:expr) => {
        mod $test_mod_name {
            use std::collections::HashMap;

            use crate::utils::{self, derived_tests};
            use sounding_convection::{DerivedProfile, IndexKey, Profile};

            fn load_data() -> (Profile, DerivedProfile, HashMap<String, Vec<f64>>) {
                let (prof, fvals) = utils::load_test_file($fname);
                let derived = DerivedProfile::new(&prof).expect("Analysis failed.");
                (prof, derived, fvals)
            }

            #[test]
            fn grid() {
                let (prof, derived, fvals) = load_data();
                derived_tests::test_grid(&prof, &derived, &fvals);
            }

            #[test]
            fn lookups() {
                let (_, derived, _) = load_data();
                derived_tests::test_lookups(&derived);
            }

            #[test]
            fn parcel_temperatures() {
                let (_, derived, _) = load_data();
                derived_tests::test_parcel_temperatures(&derived);
            }

            #[test]
            fn convective_levels() {
                let (_, derived, fvals) = load_data();
                derived_tests::test_convective_levels(&derived, &fvals);
            }

            #[test]
            fn lcl() {
                let (_, derived, fvals) = load_data();
                derived_tests::test_value(&derived, &fvals, IndexKey::LCLHeight, "lcl height", 10.5);
                derived_tests::test_value(
                    &derived,
                    &fvals,
                    IndexKey::LCLPressure,
                    "lcl pressure",
                    1.5,
                );
            }

            #[test]
            fn ccl() {
                let (_, derived, fvals) = load_data();
                derived_tests::test_value(&derived, &fvals, IndexKey::CCLHeight, "ccl height", 10.5);
                derived_tests::test_value(
                    &derived,
                    &fvals,
                    IndexKey::CCLPressure,
                    "ccl pressure",
                    1.5,
                );
                derived_tests::test_value(
                    &derived,
                    &fvals,
                    IndexKey::ConvectiveT,
                    "convective temperature",
                    1.0,
                );
            }

            #[test]
            fn lfc_el_cape() {
                let (_, derived, fvals) = load_data();
                derived_tests::test_value(&derived, &fvals, IndexKey::LFCHeight, "lfc height", 10.5);
                derived_tests::test_value(&derived, &fvals, IndexKey::ELHeight, "el height", 10.5);
                derived_tests::test_value(&derived, &fvals, IndexKey::CAPE, "cape", 10.0);
            }

            #[test]
            fn lifted_index() {
                let (_, derived, fvals) = load_data();
                derived_tests::test_value(&derived, &fvals, IndexKey::LI, "lifted index", 0.5);
            }

            #[test]
            fn totals() {
                let (_, derived, fvals) = load_data();
                derived_tests::test_value(&derived, &fvals, IndexKey::K, "kindex", 0.5);
                derived_tests::test_value(
                    &derived,
                    &fvals,
                    IndexKey::CrossTotals,
                    "cross totals",
                    0.5,
                );
                derived_tests::test_value(
                    &derived,
                    &fvals,
                    IndexKey::VerticalTotals,
                    "vertical totals",
                    0.5,
                );
                derived_tests::test_value(
                    &derived,
                    &fvals,
                    IndexKey::TotalTotals,
                    "total totals",
                    0.5,
                );
                derived_tests::test_totals_consistent(&derived);
            }

            #[test]
            fn sweat() {
                let (_, derived, fvals) = load_data();
                derived_tests::test_value(&derived, &fvals, IndexKey::SWeT, "sweat", 2.0);
            }

            #[test]
            fn bulk_richardson_number() {
                let (_, derived, fvals) = load_data();
                derived_tests::test_value(&derived, &fvals, IndexKey::BulkRichardson, "brch", 5.0);
            }
        }
    };
}

pub fn load_test_file(fname: &str) -> (Profile, HashMap<String, Vec<f64>>) {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_csv_sounding(&test_path)
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn approx_equal(tgt: f64, guess: f64, tol: f64) -> bool {
    assert!(tol > 0.0);

    f64::abs(tgt - guess) <= tol
}

fn load_test_csv_sounding(location: &PathBuf) -> (Profile, HashMap<String, Vec<f64>>) {
    let mut f =
        File::open(location).unwrap_or_else(|_| panic!("Error opening file: {:#?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .unwrap_or_else(|_| panic!("Error reading file: {:#?}", location));

    let mut line_iter = contents.lines();

    //
    // Parse profile data
    //
    let mut samples: Vec<Sample> = vec![];
    for line in line_iter.by_ref() {
        if line.starts_with("### Analysis Float Section ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        if tokens.len() < 6 {
            continue;
        }

        let vals: Vec<Option<f64>> = tokens.iter().map(|t| f64::from_str(t).ok()).collect();
        let (hgt, t_c, dp_c, press_hpa) = match (vals[0], vals[1], vals[2], vals[3]) {
            (Some(hgt), Some(t_c), Some(dp_c), Some(press_hpa)) => (hgt, t_c, dp_c, press_hpa),
            // The header line
            _ => continue,
        };

        let mut sample = Sample::new(
            HectoPascal(press_hpa),
            Meters(hgt),
            Celsius(t_c),
            Celsius(dp_c),
        );
        if let (Some(spd), Some(dir)) = (vals[4], vals[5]) {
            sample = sample.with_wind(dir, Knots(spd));
        }

        samples.push(sample);
    }

    let prof = Profile::new()
        .with_station_info(StationInfo::new().with_name(location.to_string_lossy().into_owned()))
        .with_samples(samples);

    //
    // Float values.
    //
    let mut target_float_vals = HashMap::new();
    for line in line_iter {
        let tokens: Vec<&str> = line
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect();

        if tokens.is_empty() {
            continue;
        }

        let key = tokens[0].to_owned();
        let values: Vec<f64> = tokens[1..]
            .iter()
            .map(|v| f64::from_str(v).unwrap())
            .collect();

        target_float_vals.insert(key, values);
    }

    (prof, target_float_vals)
}
