use super::*;
use metfor::Quantity;
use sounding_convection::{DerivedProfile, IndexKey, SAMPLE_STEP};

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_grid(prof: &Profile, derived: &DerivedProfile, tgt_float_vals: &HashMap<String, Vec<f64>>) {
    let num_levels = tgt_float_vals["num levels"][0] as usize;
    assert_eq!(derived.len(), num_levels);

    let Meters(sfc) = prof.surface().unwrap().height;
    let top = prof.top().unwrap().height;

    assert_eq!(derived.min_height(), Meters(sfc.ceil()));
    assert!(derived.max_height() < top);
    assert!(derived.max_height() + SAMPLE_STEP >= top);

    for (i, lvl) in derived.iter().enumerate() {
        let expected = sfc.ceil() + i as f64 * SAMPLE_STEP.unpack();
        assert!(approx_equal(lvl.height().unpack(), expected, 1.0e-6));
        assert!(lvl.relative_humidity() <= 100.0 + 1.0e-9);
        assert_eq!(lvl.is_stratus(), lvl.relative_humidity() >= 99.0);
    }

    // Pressure never increases going up
    let levels = derived.levels();
    for (lower, upper) in levels.iter().zip(levels.iter().skip(1)) {
        assert!(lower.pressure() >= upper.pressure());
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_lookups(derived: &DerivedProfile) {
    for lvl in derived.iter().step_by(17) {
        assert_eq!(derived.level_at_height(lvl.height()).unwrap(), lvl);
        assert_eq!(
            derived
                .level_at_height(lvl.height() + Meters(5.0))
                .map(|found| found.height())
                .ok(),
            if lvl.height() + Meters(5.0) <= derived.max_height() {
                Some(lvl.height())
            } else {
                None
            }
        );
    }

    assert!(derived
        .level_at_height(derived.min_height() - Meters(1.0))
        .is_err());
    assert!(derived
        .level_at_height(derived.max_height() + Meters(1.0))
        .is_err());
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_parcel_temperatures(derived: &DerivedProfile) {
    match derived.lcl_height() {
        Some(lcl) => {
            for lvl in derived.iter() {
                assert_eq!(lvl.lifted_parcel_temperature().is_some(), lvl.height() >= lcl);
            }
        }
        None => assert!(derived
            .iter()
            .all(|lvl| lvl.lifted_parcel_temperature().is_none())),
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_convective_levels(
    derived: &DerivedProfile,
    tgt_float_vals: &HashMap<String, Vec<f64>>,
) {
    for key in FVAL_KEYS {
        assert!(tgt_float_vals.contains_key(*key), "missing {}", key);
    }

    if let Some(lfc) = derived.lfc_height() {
        let lcl = derived.lcl_height().unwrap();
        assert!(lfc >= lcl);
        assert!(derived.cape().unwrap().unpack() >= 0.0);

        if let Some(el) = derived.el_height() {
            assert!(el > lfc);
        }
    } else {
        assert!(derived.el_height().is_none());
        assert!(derived.cape().is_none());
    }

    if let Some(rise) = derived.convective_temperature_rise() {
        assert!(rise.unpack() >= 0.0);
        assert!(derived.ccl_height().is_some());
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_value(
    derived: &DerivedProfile,
    tgt_float_vals: &HashMap<String, Vec<f64>>,
    key: IndexKey,
    file_key: &str,
    tol: f64,
) {
    if let Some(target_vals) = tgt_float_vals.get(file_key) {
        let analysis = derived.get_index(key);

        match target_vals.get(0) {
            Some(&target_val) => {
                let analysis = analysis.unwrap_or_else(|| panic!("{} missing", key.name()));
                assert!(
                    approx_equal(analysis, target_val, tol),
                    "{}: {} != {}",
                    key.name(),
                    analysis,
                    target_val
                );
            }
            None => assert!(analysis.is_none(), "{}: {:?}", key.name(), analysis),
        }
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_totals_consistent(derived: &DerivedProfile) {
    if let (Some(ct), Some(vt), Some(tt)) = (
        derived.cross_totals(),
        derived.vertical_totals(),
        derived.total_totals(),
    ) {
        assert!(approx_equal(ct + vt, tt, 1.0e-9));
    }
}
