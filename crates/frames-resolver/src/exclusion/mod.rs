//! `ExclusionRegistry`: record names that must never be selected.
//!
//! Built from the `frames.exclude` blocks of the settings: literal names
//! are taken verbatim, criteria objects are expanded through the catalog.
//! The `raw` block applies to every category.
//! Each set is computed once per category key and memoized.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use tracing::debug;

use frames_core::config::ExcludeEntry;
use frames_core::constants::RAW_BLOCK;
use frames_core::errors::{FramesError, FramesResult};
use frames_core::traits::IExposureCatalog;

/// Memo key: `None` is the aggregate over every block.
type ExclusionKey = Option<String>;

pub struct ExclusionRegistry {
    blocks: BTreeMap<String, Vec<ExcludeEntry>>,
    catalog: Arc<dyn IExposureCatalog>,
    cache: Mutex<BTreeMap<ExclusionKey, Arc<BTreeSet<String>>>>,
}

impl ExclusionRegistry {
    pub fn new(blocks: BTreeMap<String, Vec<ExcludeEntry>>, catalog: Arc<dyn IExposureCatalog>) -> Self {
        Self {
            blocks,
            catalog,
            cache: Mutex::new(BTreeMap::new()),
        }
    }

    /// Excluded names for `category`, or for every category when `None`.
    pub fn get_excludes(&self, category: Option<&str>) -> FramesResult<Arc<BTreeSet<String>>> {
        let key: ExclusionKey = category.map(str::to_string);
        let mut cache = self
            .cache
            .lock()
            .map_err(|e| FramesError::LockPoisoned(e.to_string()))?;
        if let Some(set) = cache.get(&key) {
            return Ok(Arc::clone(set));
        }

        let set = Arc::new(self.compute(category)?);
        debug!(category = category.unwrap_or("*"), count = set.len(), "Computed exclusion set");
        cache.insert(key, Arc::clone(&set));
        Ok(set)
    }

    fn compute(&self, category: Option<&str>) -> FramesResult<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        if let Some(entries) = self.blocks.get(RAW_BLOCK) {
            self.expand_block(RAW_BLOCK, entries, &mut names)?;
        }
        for (block, entries) in &self.blocks {
            if block == RAW_BLOCK || category.is_some_and(|c| c != block) {
                continue;
            }
            self.expand_block(block, entries, &mut names)?;
        }
        Ok(names)
    }

    fn expand_block(&self, block: &str, entries: &[ExcludeEntry], names: &mut BTreeSet<String>) -> FramesResult<()> {
        for entry in entries {
            match entry {
                ExcludeEntry::Name(name) => {
                    names.insert(name.clone());
                }
                ExcludeEntry::Query(query) => {
                    let records = self.catalog.find(query)?;
                    debug!(block, query = %query, matched = records.len(), "Expanded exclusion query");
                    names.extend(records.into_iter().map(|r| r.name));
                }
                ExcludeEntry::Unsupported(_) => {
                    return Err(FramesError::Config(format!(
                        "wrong format for {block} excludes: expected a name or a query mapping"
                    )));
                }
            }
        }
        Ok(())
    }

    /// True when `name` is not excluded for `category`.
    pub fn is_valid(&self, name: &str, category: Option<&str>) -> FramesResult<bool> {
        Ok(!self.get_excludes(category)?.contains(name))
    }

    /// `names` without the excluded ones, order preserved.
    pub fn filter_valid<I, S>(&self, names: I, category: Option<&str>) -> FramesResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let excluded = self.get_excludes(category)?;
        Ok(names
            .into_iter()
            .map(Into::into)
            .filter(|n| !excluded.contains(n))
            .collect())
    }

    /// Drop every memoized set.
    pub fn invalidate(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }
}
