//! Catalog records and find-by-criteria queries.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A previously produced file set, owned by the exposure catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Unique key.
    pub name: String,
    pub category: String,
    pub instrument_mode: Option<String>,
    /// Acquisition night.
    pub night: NaiveDate,
    /// Directory holding the payload files.
    pub path: PathBuf,
    pub object: Option<String>,
}

/// Exact-match criteria. `None` fields are unconstrained.
///
/// Field names follow the settings file, which also accepts the header
/// keyword spellings (`DPR_TYPE`, `INS_MODE`, `OBJECT`). Criteria are
/// limited to the columns a `CatalogRecord` carries; any other key fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "DPR_TYPE", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, alias = "INS_MODE", skip_serializing_if = "Option::is_none")]
    pub instrument_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub night: Option<NaiveDate>,
    #[serde(default, alias = "OBJECT", skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn instrument_mode(mut self, mode: impl Into<String>) -> Self {
        self.instrument_mode = Some(mode.into());
        self
    }

    pub fn night(mut self, night: NaiveDate) -> Self {
        self.night = Some(night);
        self
    }

    pub fn object(mut self, object: impl Into<String>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// True when no field is constrained.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Exact match on every supplied field.
    pub fn matches(&self, record: &CatalogRecord) -> bool {
        fn field_eq(want: &Option<String>, have: Option<&str>) -> bool {
            want.as_deref().map_or(true, |w| have == Some(w))
        }
        field_eq(&self.name, Some(&record.name))
            && field_eq(&self.category, Some(&record.category))
            && field_eq(&self.instrument_mode, record.instrument_mode.as_deref())
            && self.night.map_or(true, |n| n == record.night)
            && field_eq(&self.object, record.object.as_deref())
    }
}

impl fmt::Display for CatalogQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(v) = &self.name {
            parts.push(format!("name={v}"));
        }
        if let Some(v) = &self.category {
            parts.push(format!("category={v}"));
        }
        if let Some(v) = &self.instrument_mode {
            parts.push(format!("instrument_mode={v}"));
        }
        if let Some(v) = &self.night {
            parts.push(format!("night={v}"));
        }
        if let Some(v) = &self.object {
            parts.push(format!("object={v}"));
        }
        write!(f, "{{{}}}", parts.join(", "))
    }
}
