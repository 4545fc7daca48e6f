//! The result of one resolution call.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::category::FrameCategory;

/// A resolved category: one path, or an ordered list of paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedFrame {
    Single(PathBuf),
    Many(Vec<PathBuf>),
}

impl ResolvedFrame {
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            Self::Single(p) => vec![p.as_path()],
            Self::Many(ps) => ps.iter().map(PathBuf::as_path).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(ps) => ps.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<PathBuf> for ResolvedFrame {
    fn from(p: PathBuf) -> Self {
        Self::Single(p)
    }
}

impl From<Vec<PathBuf>> for ResolvedFrame {
    fn from(ps: Vec<PathBuf>) -> Self {
        Self::Many(ps)
    }
}

/// Category → resolved frame, iterated in category name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedFrameMap {
    frames: BTreeMap<FrameCategory, ResolvedFrame>,
}

impl ResolvedFrameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: FrameCategory, frame: ResolvedFrame) -> Option<ResolvedFrame> {
        self.frames.insert(category, frame)
    }

    pub fn get(&self, category: &str) -> Option<&ResolvedFrame> {
        self.frames.get(category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.frames.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &FrameCategory> {
        self.frames.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FrameCategory, ResolvedFrame> {
        self.frames.iter()
    }

    pub fn into_inner(self) -> BTreeMap<FrameCategory, ResolvedFrame> {
        self.frames
    }
}

impl<'a> IntoIterator for &'a ResolvedFrameMap {
    type Item = (&'a FrameCategory, &'a ResolvedFrame);
    type IntoIter = btree_map::Iter<'a, FrameCategory, ResolvedFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
