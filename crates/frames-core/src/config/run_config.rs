//! Per-run `frames` block.
//!
//! The block mixes reserved keys (`exclude`, `include`, `offsets`) with
//! per-category overrides. Entries are kept in document order because
//! `exclude`/`include` are applied in that order.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::constants::{KEY_EXCLUDE, KEY_INCLUDE, KEY_OFFSETS};
use crate::errors::FramesResult;
use crate::types::DatedFiles;

/// Value of a per-category override.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FrameValue {
    /// A path, a directory, or a glob pattern.
    Text(String),
    List(Vec<String>),
    /// File names keyed by validity window.
    Dated(DatedFiles),
    /// Any other shape. Rejected when the category is resolved.
    Unsupported(IgnoredAny),
}

impl FrameValue {
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::List(_) => "list",
            Self::Dated(_) => "mapping",
            Self::Unsupported(_) => "unsupported value",
        }
    }
}

/// One entry of the `frames` block.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameSetting {
    Exclude(Vec<String>),
    Include(Vec<String>),
    Offsets(BTreeMap<String, u32>),
    Override(FrameValue),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(v: OneOrMany) -> Self {
        match v {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

/// The `frames` block of a run configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunFramesConfig {
    entries: Vec<(String, FrameSetting)>,
}

impl RunFramesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = categories.into_iter().map(Into::into).collect();
        self.entries.push((KEY_EXCLUDE.to_string(), FrameSetting::Exclude(list)));
        self
    }

    pub fn include<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = categories.into_iter().map(Into::into).collect();
        self.entries.push((KEY_INCLUDE.to_string(), FrameSetting::Include(list)));
        self
    }

    pub fn offset(mut self, category: impl Into<String>, days: u32) -> Self {
        let offsets = BTreeMap::from([(category.into(), days)]);
        self.entries.push((KEY_OFFSETS.to_string(), FrameSetting::Offsets(offsets)));
        self
    }

    pub fn set(mut self, category: impl Into<String>, value: FrameValue) -> Self {
        self.entries.push((category.into(), FrameSetting::Override(value)));
        self
    }

    /// All entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FrameSetting)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Override for a category. The last occurrence wins.
    pub fn get(&self, category: &str) -> Option<&FrameValue> {
        self.entries.iter().rev().find_map(|(k, v)| match v {
            FrameSetting::Override(value) if k == category => Some(value),
            _ => None,
        })
    }

    pub fn contains(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    /// Offset overrides, later `offsets` entries replacing earlier keys.
    pub fn offsets(&self) -> BTreeMap<String, u32> {
        let mut merged = BTreeMap::new();
        for (_, setting) in &self.entries {
            if let FrameSetting::Offsets(offsets) = setting {
                merged.extend(offsets.iter().map(|(k, v)| (k.clone(), *v)));
            }
        }
        merged
    }
}

struct RunFramesVisitor;

impl<'de> Visitor<'de> for RunFramesVisitor {
    type Value = RunFramesConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a frames mapping")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            let setting = match key.as_str() {
                KEY_EXCLUDE => FrameSetting::Exclude(map.next_value::<OneOrMany>()?.into()),
                KEY_INCLUDE => FrameSetting::Include(map.next_value::<OneOrMany>()?.into()),
                KEY_OFFSETS => FrameSetting::Offsets(map.next_value()?),
                _ => FrameSetting::Override(map.next_value()?),
            };
            entries.push((key, setting));
        }
        Ok(RunFramesConfig { entries })
    }
}

impl<'de> Deserialize<'de> for RunFramesConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RunFramesVisitor)
    }
}

/// Settings of one processing step run. Only `frames` is read here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub frames: RunFramesConfig,
}

impl RunConfig {
    pub fn new(frames: RunFramesConfig) -> Self {
        Self { frames }
    }

    pub fn from_toml(toml_str: &str) -> FramesResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_yaml(yaml_str: &str) -> FramesResult<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    pub fn from_json_value(value: serde_json::Value) -> FramesResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
