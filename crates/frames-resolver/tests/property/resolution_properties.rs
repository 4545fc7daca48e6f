//! Property-based tests for resolution guarantees.
//!
//! 1. Search order: night, then +1, -1, +2, -2, … up to the tolerance.
//! 2. Date windows: a date inside exactly one window selects that file.
//! 3. Exclusion holds at every searched night.
//! 4. Static files without windows do not depend on the date.

#[path = "../common/mod.rs"]
mod common;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use proptest::prelude::*;

use frames_core::types::{select_by_date, DatedFiles, ValidityWindow};
use frames_core::{ErrorKind, FramesSettings};
use frames_resolver::offset_sequence;
use frames_resolver::StaticCalibRegistry;

use common::{resolver, settings, static_dir, stored_record, MODE};

// =============================================================================
// Strategy helpers
// =============================================================================

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn reference_night() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}

fn shifted(offset: i64) -> NaiveDate {
    reference_night() + chrono::Duration::days(offset)
}

// =============================================================================
// Search order
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn offset_sequence_alternates_and_widens(n in 0u32..40) {
        let seq: Vec<i64> = offset_sequence(n).collect();
        prop_assert_eq!(seq.len(), 2 * n as usize);
        for (i, pair) in seq.chunks(2).enumerate() {
            let k = i as i64 + 1;
            prop_assert_eq!(pair, &[k, -k][..]);
        }
    }
}

// =============================================================================
// Date windows
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn date_inside_a_window_selects_its_file(
        bounds in prop::collection::btree_set(0i64..2000, 2..8),
        day in 0i64..2100,
    ) {
        let base = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
        let bounds: Vec<i64> = bounds.into_iter().collect();

        // Disjoint windows [b0, b1 - 1], [b1, b2 - 1], …
        let mut dated = DatedFiles::new();
        for (i, pair) in bounds.windows(2).enumerate() {
            let start = base + chrono::Duration::days(pair[0]);
            let end = base + chrono::Duration::days(pair[1] - 1);
            dated.push(format!("file_{i}.fits"), ValidityWindow::new(Some(start), Some(end)));
        }

        let date = base + chrono::Duration::days(day);
        let expected = bounds
            .windows(2)
            .position(|pair| pair[0] <= day && day < pair[1])
            .map(|i| format!("file_{i}.fits"));
        prop_assert_eq!(select_by_date(&dated, date).map(str::to_string), expected);
    }
}

// =============================================================================
// Exclusion through widening
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn excluded_records_are_never_selected(
        nights in prop::collection::btree_map(-4i64..=4, any::<bool>(), 0..9),
        tolerance in 0u32..=4,
    ) {
        let statics = static_dir(&[]);
        let reduced = tempfile::tempdir().unwrap();

        let mut records = Vec::new();
        let mut excluded = Vec::new();
        let mut by_offset: BTreeMap<i64, (String, bool)> = BTreeMap::new();
        for (&offset, &is_excluded) in &nights {
            let name = format!("MASTER_FLAT_{offset:+}");
            let night = shifted(offset).to_string();
            records.push(stored_record(reduced.path(), &name, "MASTER_FLAT", &night, 1));
            if is_excluded {
                excluded.push(name.clone());
            }
            by_offset.insert(offset, (name, is_excluded));
        }

        let mut s: FramesSettings = settings(statics.path());
        let yaml = format!("frames: {{exclude: {{MASTER_FLAT: {excluded:?}}}}}");
        s.frames = FramesSettings::from_yaml(&yaml).unwrap().frames;
        let r = resolver(&s, records);

        let expected = std::iter::once(0)
            .chain(offset_sequence(tolerance))
            .find_map(|off| match by_offset.get(&off) {
                Some((name, false)) => Some(name.clone()),
                _ => None,
            });

        match (r.find_calib("MASTER_FLAT", reference_night(), MODE, tolerance), expected) {
            (Ok(files), Some(name)) => {
                prop_assert_eq!(files.len(), 1);
                prop_assert!(files[0].starts_with(reduced.path().join(&name)));
                prop_assert!(!excluded.contains(&name));
            }
            (Err(err), None) => prop_assert_eq!(err.kind(), ErrorKind::NotFound),
            (got, want) => prop_assert!(false, "got {:?}, expected {:?}", got, want),
        }
    }
}

// =============================================================================
// Static invariance
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn static_lookup_ignores_the_date_without_windows(date in date_strategy()) {
        let dir = static_dir(&[
            ("raman_lines.fits", "RAMAN_LINES"),
            ("extinct_table.fits", "EXTINCT_TABLE"),
        ]);
        let reg = StaticCalibRegistry::new(dir.path(), BTreeMap::new());
        let undated = reg.get_static("RAMAN_LINES", None).unwrap();
        prop_assert_eq!(reg.get_static("RAMAN_LINES", Some(date)).unwrap(), undated);
    }
}
