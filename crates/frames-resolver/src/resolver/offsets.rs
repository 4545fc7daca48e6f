//! Step 2: day-offset tolerances and the widening search order.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use frames_core::constants::{DEFAULT_DAY_OFFSET, DEFAULT_DAY_OFFSETS};

/// Category → tolerance in days. Built-in table, then the requirement's
/// entries, then the run's; each layer replaces whole keys.
pub fn day_offsets(
    requirement: &BTreeMap<String, u32>,
    run: &BTreeMap<String, u32>,
) -> BTreeMap<String, u32> {
    let mut offsets: BTreeMap<String, u32> = DEFAULT_DAY_OFFSETS
        .iter()
        .map(|&(k, v)| (k.to_string(), v))
        .collect();
    offsets.extend(requirement.iter().map(|(k, v)| (k.clone(), *v)));
    offsets.extend(run.iter().map(|(k, v)| (k.clone(), *v)));
    offsets
}

pub fn tolerance(offsets: &BTreeMap<String, u32>, category: &str) -> u32 {
    offsets.get(category).copied().unwrap_or(DEFAULT_DAY_OFFSET)
}

/// Signed day offsets searched after the reference night:
/// `+1, -1, +2, -2, …, +n, -n`.
pub fn offset_sequence(n: u32) -> impl Iterator<Item = i64> {
    (1..=i64::from(n)).flat_map(|off| [off, -off])
}

/// `night` shifted by `offset` days, `None` past the calendar bounds.
pub fn shift_night(night: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset >= 0 {
        night.checked_add_days(days)
    } else {
        night.checked_sub_days(days)
    }
}
