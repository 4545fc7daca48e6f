//! `FrameRequirement` trait: what a processing step needs.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::constants::DEFAULT_EXCLUDED_FRAMES;
use crate::types::FrameCategory;

/// Declared by each processing-step definition.
pub trait FrameRequirement: Send + Sync {
    /// Categories the step consumes.
    fn required_categories(&self) -> Vec<FrameCategory>;

    /// Categories dropped unless a run config includes them again.
    fn default_excluded_categories(&self) -> Vec<FrameCategory>;

    /// Step-specific day-offset tolerances, applied over the built-in table.
    fn offsets(&self) -> BTreeMap<String, u32> {
        BTreeMap::new()
    }
}

impl<T: FrameRequirement + ?Sized> FrameRequirement for Arc<T> {
    fn required_categories(&self) -> Vec<FrameCategory> {
        (**self).required_categories()
    }
    fn default_excluded_categories(&self) -> Vec<FrameCategory> {
        (**self).default_excluded_categories()
    }
    fn offsets(&self) -> BTreeMap<String, u32> {
        (**self).offsets()
    }
}

/// Plain-data requirement.
#[derive(Debug, Clone, Default)]
pub struct StepRequirement {
    pub required: Vec<FrameCategory>,
    pub excluded: Vec<FrameCategory>,
    pub offsets: BTreeMap<String, u32>,
}

impl StepRequirement {
    /// Requirement with the default exclusions (`MASTER_DARK`, `NONLINEARITY_GAIN`).
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FrameCategory>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            excluded: DEFAULT_EXCLUDED_FRAMES.iter().map(|&s| s.into()).collect(),
            offsets: BTreeMap::new(),
        }
    }

    pub fn with_excluded<I, S>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FrameCategory>,
    {
        self.excluded = excluded.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_offset(mut self, category: impl Into<String>, days: u32) -> Self {
        self.offsets.insert(category.into(), days);
        self
    }
}

impl FrameRequirement for StepRequirement {
    fn required_categories(&self) -> Vec<FrameCategory> {
        self.required.clone()
    }
    fn default_excluded_categories(&self) -> Vec<FrameCategory> {
        self.excluded.clone()
    }
    fn offsets(&self) -> BTreeMap<String, u32> {
        self.offsets.clone()
    }
}
