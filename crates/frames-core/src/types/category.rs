//! Frame categories and their resolution kind.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{SPECIAL_FRAMES, STATIC_FRAMES};
use crate::errors::{FramesError, FramesResult};

/// An opaque category identifier, e.g. `MASTER_BIAS` or `GEOMETRY_TABLE`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameCategory(String);

impl FrameCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for FrameCategory {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FrameCategory {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FrameCategory {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// How a category is resolved. The three kinds never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Served by the static calibration registry.
    Static,
    /// Optional, set per run in the `frames` block.
    Special,
    /// Searched in the exposure catalog (unless overridden).
    Catalog,
}

/// Closed category table, built once from the built-in lists plus any
/// configured static categories.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    statics: BTreeSet<FrameCategory>,
    specials: BTreeSet<FrameCategory>,
}

impl CategoryTable {
    /// Table holding only the built-in static and special categories.
    pub fn builtin() -> Self {
        Self {
            statics: STATIC_FRAMES.iter().map(|&s| FrameCategory::from(s)).collect(),
            specials: SPECIAL_FRAMES.iter().map(|&s| FrameCategory::from(s)).collect(),
        }
    }

    /// Extend the static list. A name already registered as special is a
    /// configuration error.
    pub fn with_extra_static<I, S>(mut self, extra: I) -> FramesResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in extra {
            let name = name.as_ref();
            if self.specials.contains(name) {
                return Err(FramesError::Config(format!(
                    "{name} is a special frame and cannot be declared static"
                )));
            }
            self.statics.insert(FrameCategory::from(name));
        }
        Ok(self)
    }

    pub fn kind(&self, category: &str) -> CategoryKind {
        if self.statics.contains(category) {
            CategoryKind::Static
        } else if self.specials.contains(category) {
            CategoryKind::Special
        } else {
            CategoryKind::Catalog
        }
    }

    pub fn is_static(&self, category: &str) -> bool {
        self.kind(category) == CategoryKind::Static
    }

    pub fn is_special(&self, category: &str) -> bool {
        self.kind(category) == CategoryKind::Special
    }

    pub fn static_categories(&self) -> impl Iterator<Item = &FrameCategory> {
        self.statics.iter()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}
