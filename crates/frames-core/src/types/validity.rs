//! Validity windows and the date-match rule.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Inclusive `[start_date, end_date]` range. Missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidityWindow {
    #[serde(default, deserialize_with = "date_bound", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date_bound", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// A bound written as a `YYYY-MM-DD` string or as a native TOML date.
#[derive(Deserialize)]
#[serde(untagged)]
enum DateBound {
    Text(NaiveDate),
    Toml(toml::value::Datetime),
}

fn date_bound<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let bound = match Option::<DateBound>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(bound) => bound,
    };
    match bound {
        DateBound::Text(date) => Ok(Some(date)),
        DateBound::Toml(datetime) => {
            let date = datetime
                .date
                .ok_or_else(|| <D::Error as de::Error>::custom(format!("{datetime} has no date part")))?;
            NaiveDate::from_ymd_opt(i32::from(date.year), u32::from(date.month), u32::from(date.day))
                .map(Some)
                .ok_or_else(|| <D::Error as de::Error>::custom(format!("invalid date {datetime}")))
        }
    }
}

impl ValidityWindow {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self { start_date, end_date }
    }

    pub fn start(&self) -> NaiveDate {
        self.start_date.unwrap_or(NaiveDate::MIN)
    }

    pub fn end(&self) -> NaiveDate {
        self.end_date.unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start() <= date && date <= self.end()
    }
}

/// File names with their validity windows, in configuration order.
///
/// Order is significant: with no date the first entry wins, with a date the
/// first containing window wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatedFiles {
    entries: Vec<(String, ValidityWindow)>,
}

impl DatedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: impl Into<String>, window: ValidityWindow) {
        self.entries.push((file.into(), window));
    }

    pub fn with(mut self, file: impl Into<String>, window: ValidityWindow) -> Self {
        self.push(file, window);
        self
    }

    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(f, _)| f.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidityWindow)> {
        self.entries.iter().map(|(f, w)| (f.as_str(), w))
    }
}

/// First file whose window contains `date`, scanning in configuration order.
pub fn select_by_date(files: &DatedFiles, date: NaiveDate) -> Option<&str> {
    files
        .iter()
        .find(|(_, window)| window.contains(date))
        .map(|(file, _)| file)
}

// ─── Serde ───────────────────────────────────────────────────────────

impl Serialize for DatedFiles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (file, window) in &self.entries {
            map.serialize_entry(file, window)?;
        }
        map.end()
    }
}

struct DatedFilesVisitor;

impl<'de> Visitor<'de> for DatedFilesVisitor {
    type Value = DatedFiles;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of file names to {start_date, end_date}")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut files = DatedFiles::new();
        while let Some(file) = map.next_key::<String>()? {
            // `file.fits:` with no body means "always valid".
            let window = map.next_value::<Option<ValidityWindow>>()?.unwrap_or_default();
            files.push(file, window);
        }
        Ok(files)
    }
}

impl<'de> Deserialize<'de> for DatedFiles {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DatedFilesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn astrometry() -> DatedFiles {
        DatedFiles::new()
            .with(
                "astrometry_wcs_wfm_gto26.fits",
                ValidityWindow::new(Some(date(2018, 8, 11)), Some(date(2018, 8, 26))),
            )
            .with(
                "astrometry_wcs_wfm_gto27.fits",
                ValidityWindow::new(Some(date(2018, 9, 4)), Some(date(2018, 9, 15))),
            )
    }

    #[test]
    fn selects_window_containing_date() {
        let files = astrometry();
        assert_eq!(
            select_by_date(&files, date(2018, 8, 13)),
            Some("astrometry_wcs_wfm_gto26.fits")
        );
        assert_eq!(
            select_by_date(&files, date(2018, 9, 10)),
            Some("astrometry_wcs_wfm_gto27.fits")
        );
        assert_eq!(select_by_date(&files, date(2018, 1, 1)), None);
    }

    #[test]
    fn bounds_are_inclusive() {
        let files = astrometry();
        assert_eq!(
            select_by_date(&files, date(2018, 8, 26)),
            Some("astrometry_wcs_wfm_gto26.fits")
        );
        assert_eq!(
            select_by_date(&files, date(2018, 9, 4)),
            Some("astrometry_wcs_wfm_gto27.fits")
        );
    }

    #[test]
    fn open_window_matches_any_date() {
        let files = DatedFiles::new().with("any.fits", ValidityWindow::default());
        assert_eq!(select_by_date(&files, NaiveDate::MIN), Some("any.fits"));
        assert_eq!(select_by_date(&files, NaiveDate::MAX), Some("any.fits"));
    }

    #[test]
    fn toml_dates_may_be_native_or_quoted() {
        let files: DatedFiles = toml::from_str(
            r#"
"old.fits" = { end_date = 2016-12-31 }
"new.fits" = { start_date = "2017-01-01" }
"#,
        )
        .unwrap();
        assert_eq!(select_by_date(&files, date(2016, 12, 31)), Some("old.fits"));
        assert_eq!(select_by_date(&files, date(2017, 1, 1)), Some("new.fits"));
    }

    #[test]
    fn time_only_bound_is_rejected() {
        let res: Result<ValidityWindow, _> = toml::from_str("start_date = 10:00:00");
        assert!(res.is_err());
    }

    #[test]
    fn deserialization_keeps_document_order() {
        let yaml = "
zeta.fits:
  start_date: '2018-01-01'
alpha.fits:
  end_date: '2017-12-31'
middle.fits:
";
        let files: DatedFiles = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<&str> = files.iter().map(|(f, _)| f).collect();
        assert_eq!(names, ["zeta.fits", "alpha.fits", "middle.fits"]);
        assert_eq!(files.first(), Some("zeta.fits"));
        assert_eq!(files.iter().nth(2).map(|(_, w)| *w), Some(ValidityWindow::default()));
    }
}
