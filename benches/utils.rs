use metfor::{Celsius, HectoPascal, Knots, Meters};
use sounding_convection::{Profile, Sample, StationInfo};
use std::{fs::File, io::Read, path::PathBuf, str::FromStr};

pub fn load_all_test_files() -> [Profile; 3] {
    let prof1 = load_test_file("standard.csv");
    let prof2 = load_test_file("dry_desert.csv");
    let prof3 = load_test_file("winter_inversion.csv");

    [prof1, prof2, prof3]
}

fn load_test_file(fname: &str) -> Profile {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_csv_sounding(&test_path)
}

fn load_test_csv_sounding(location: &PathBuf) -> Profile {
    let mut f =
        File::open(location).unwrap_or_else(|_| panic!("Error opening file: {:#?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .unwrap_or_else(|_| panic!("Error reading file: {:#?}", location));

    let samples: Vec<Sample> = contents
        .lines()
        .take_while(|line| !line.starts_with("### Analysis Float Section ###"))
        .map(|line| {
            line.split(',')
                .map(|tkn| f64::from_str(tkn.trim()).ok())
                .collect::<Vec<_>>()
        })
        .filter(|vals| vals.len() >= 6)
        .filter_map(|vals| {
            let smpl = Sample::new(
                HectoPascal(vals[3]?),
                Meters(vals[0]?),
                Celsius(vals[1]?),
                Celsius(vals[2]?),
            );

            match (vals[4], vals[5]) {
                (Some(spd), Some(dir)) => Some(smpl.with_wind(dir, Knots(spd))),
                _ => Some(smpl),
            }
        })
        .collect();

    Profile::new()
        .with_station_info(StationInfo::new().with_name(location.to_string_lossy().into_owned()))
        .with_samples(samples)
}
