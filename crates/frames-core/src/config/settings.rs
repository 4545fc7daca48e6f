//! Process-wide settings: static registry and exclusion blocks.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::errors::FramesResult;
use crate::types::{CatalogQuery, CategoryTable, DatedFiles};

/// One line of an exclusion block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExcludeEntry {
    /// A record name, excluded verbatim.
    Name(String),
    /// Criteria expanded through the catalog; every match is excluded.
    Query(CatalogQuery),
    /// Any other shape. Rejected when the block is evaluated.
    Unsupported(IgnoredAny),
}

/// The `frames` section of the settings file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExclusionSettings {
    /// Category → names or criteria that must never be selected.
    pub exclude: BTreeMap<String, Vec<ExcludeEntry>>,
}

/// Settings shared by every resolution call of a process.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FramesSettings {
    /// Directory of the static calibration files.
    pub muse_calib_path: PathBuf,
    /// Category → file name → validity window.
    pub static_calib: BTreeMap<String, DatedFiles>,
    /// Categories to serve from the static registry on top of the built-in list.
    pub static_frames: Vec<String>,
    pub frames: ExclusionSettings,
}

impl FramesSettings {
    /// Load settings from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> FramesResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load settings from a YAML string.
    pub fn from_yaml(yaml_str: &str) -> FramesResult<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Category table with the configured static categories merged in.
    pub fn category_table(&self) -> FramesResult<CategoryTable> {
        CategoryTable::builtin().with_extra_static(&self.static_frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn empty_settings_are_default() {
        let settings = FramesSettings::from_yaml("{}").unwrap();
        assert!(settings.static_calib.is_empty());
        assert!(settings.frames.exclude.is_empty());
    }

    #[test]
    fn exclude_entries_are_names_or_queries() {
        let yaml = r#"
frames:
  exclude:
    MASTER_FLAT:
      - MASTER_FLAT_2018-09-08
      - {night: '2018-09-09', INS_MODE: WFM-NOAO-N}
      - 42
"#;
        let settings = FramesSettings::from_yaml(yaml).unwrap();
        let block = &settings.frames.exclude["MASTER_FLAT"];
        assert_eq!(block[0], ExcludeEntry::Name("MASTER_FLAT_2018-09-08".into()));
        assert_eq!(
            block[1],
            ExcludeEntry::Query(
                CatalogQuery::new()
                    .night(NaiveDate::from_ymd_opt(2018, 9, 9).unwrap())
                    .instrument_mode("WFM-NOAO-N")
            )
        );
        assert!(matches!(block[2], ExcludeEntry::Unsupported(_)));
    }

    #[test]
    fn static_calib_windows_from_toml() {
        let toml = r#"
muse_calib_path = "/data/static"

[static_calib.ASTROMETRY_WCS."astrometry_wcs_wfm_gto26.fits"]
start_date = "2018-08-11"
end_date = "2018-08-26"
"#;
        let settings = FramesSettings::from_toml(toml).unwrap();
        assert_eq!(settings.muse_calib_path, PathBuf::from("/data/static"));
        let files = &settings.static_calib["ASTROMETRY_WCS"];
        assert_eq!(files.first(), Some("astrometry_wcs_wfm_gto26.fits"));
    }

    #[test]
    fn configured_static_frames_extend_the_table() {
        let settings = FramesSettings::from_yaml("static_frames: [NONLINEARITY_GAIN]").unwrap();
        let table = settings.category_table().unwrap();
        assert!(table.is_static("NONLINEARITY_GAIN"));
    }
}
