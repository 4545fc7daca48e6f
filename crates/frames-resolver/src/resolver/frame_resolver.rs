//! `FrameResolver`: category → file(s) for one processing step.
//!
//! Each category is resolved by the first tier that applies:
//! static registry, special run-level value, explicit run override, then
//! the catalog search with day-offset widening. Any failure fails the
//! whole call.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, info_span, warn};

use frames_core::config::{FrameValue, FramesSettings, RunConfig, RunFramesConfig};
use frames_core::constants::{ALLOWED_FILE_COUNTS, OFFSET_LIST};
use frames_core::errors::{FramesError, FramesResult};
use frames_core::traits::{FrameRequirement, IExposureCatalog};
use frames_core::types::{
    select_by_date, CatalogQuery, CatalogRecord, CategoryKind, CategoryTable, ResolvedFrame,
    ResolvedFrameMap,
};

use super::expand::{expand_override, payload_files};
use super::offsets::{day_offsets, offset_sequence, shift_night, tolerance};
use super::summary::log_summary;
use super::working_set::build_working_set;
use crate::exclusion::ExclusionRegistry;
use crate::static_calib::StaticCalibRegistry;

pub struct FrameResolver {
    table: CategoryTable,
    statics: StaticCalibRegistry,
    exclusions: ExclusionRegistry,
    catalog: Arc<dyn IExposureCatalog>,
}

impl FrameResolver {
    /// Resolver over `catalog`, with registries built from `settings`.
    pub fn new(settings: &FramesSettings, catalog: Arc<dyn IExposureCatalog>) -> FramesResult<Self> {
        let table = settings.category_table()?;
        let statics = StaticCalibRegistry::new(&settings.muse_calib_path, settings.static_calib.clone());
        let exclusions = ExclusionRegistry::new(settings.frames.exclude.clone(), Arc::clone(&catalog));
        Ok(Self::from_parts(table, statics, exclusions, catalog))
    }

    pub fn from_parts(
        table: CategoryTable,
        statics: StaticCalibRegistry,
        exclusions: ExclusionRegistry,
        catalog: Arc<dyn IExposureCatalog>,
    ) -> Self {
        Self {
            table,
            statics,
            exclusions,
            catalog,
        }
    }

    pub fn category_table(&self) -> &CategoryTable {
        &self.table
    }

    pub fn static_registry(&self) -> &StaticCalibRegistry {
        &self.statics
    }

    pub fn exclusion_registry(&self) -> &ExclusionRegistry {
        &self.exclusions
    }

    /// Every frame `requirement` needs for `night`.
    ///
    /// `instrument_mode` is only needed when a category falls through to the
    /// catalog search. `object` narrows the `OFFSET_LIST` record lookup.
    pub fn get_frames(
        &self,
        requirement: &dyn FrameRequirement,
        night: NaiveDate,
        instrument_mode: Option<&str>,
        run: &RunConfig,
        object: Option<&str>,
    ) -> FramesResult<ResolvedFrameMap> {
        let span = info_span!("get_frames", night = %night, instrument_mode = instrument_mode.unwrap_or("-"));
        let _guard = span.enter();

        let frames = &run.frames;
        let working = build_working_set(requirement, frames);
        let offsets = day_offsets(&requirement.offsets(), &frames.offsets());

        let mut resolved = ResolvedFrameMap::new();
        for category in working {
            let name = category.as_str();
            let frame = match self.table.kind(name) {
                CategoryKind::Static => {
                    let path = self.statics.get_static(name, Some(night))?;
                    debug!(category = name, file = %path.display(), "Static frame");
                    Some(ResolvedFrame::Single(path))
                }
                CategoryKind::Special => self.resolve_special(name, night, frames, object)?,
                CategoryKind::Catalog => match frames.get(name) {
                    Some(value) => self.resolve_override(name, night, value)?,
                    None => {
                        let mode = instrument_mode.ok_or_else(|| {
                            FramesError::Config(format!(
                                "instrument mode must be specified to search {name} in the catalog"
                            ))
                        })?;
                        let files = self.find_calib(name, night, mode, tolerance(&offsets, name))?;
                        Some(ResolvedFrame::Many(files))
                    }
                },
            };
            if let Some(frame) = frame {
                resolved.insert(category, frame);
            }
        }

        log_summary(&resolved);
        Ok(resolved)
    }

    /// Payload files of the single catalog record for `category`.
    ///
    /// `night` is searched first, then `night+1, night-1, …` up to
    /// `tolerance` days, excluded records being dropped at every shifted night.
    pub fn find_calib(
        &self,
        category: &str,
        night: NaiveDate,
        instrument_mode: &str,
        tolerance: u32,
    ) -> FramesResult<Vec<PathBuf>> {
        let excludes = self.exclusions.get_excludes(Some(category))?;

        let mut found = self.candidates(category, night, instrument_mode, &excludes)?;
        if found.is_empty() {
            for offset in offset_sequence(tolerance) {
                let Some(shifted) = shift_night(night, offset) else {
                    continue;
                };
                found = self.candidates(category, shifted, instrument_mode, &excludes)?;
                if !found.is_empty() {
                    info!(category, night = %shifted, offset, "Using frame from another night");
                    break;
                }
            }
        }

        if found.len() > 1 {
            return Err(FramesError::Ambiguous {
                category: category.to_string(),
                night,
                candidates: found.into_keys().collect(),
            });
        }
        let record = found
            .into_values()
            .next()
            .ok_or_else(|| FramesError::CategoryNotFound {
                category: category.to_string(),
                night,
            })?;

        let files = payload_files(&record.path, category)?;
        if !ALLOWED_FILE_COUNTS.contains(&files.len()) {
            return Err(FramesError::UnexpectedFileCount {
                category: category.to_string(),
                path: record.path.display().to_string(),
                found: files.len(),
            });
        }
        debug!(category, record = %record.name, files = files.len(), "Catalog frame");
        Ok(files)
    }

    /// Records for one night keyed by name, excluded names removed.
    fn candidates(
        &self,
        category: &str,
        night: NaiveDate,
        instrument_mode: &str,
        excludes: &BTreeSet<String>,
    ) -> FramesResult<BTreeMap<String, CatalogRecord>> {
        let query = CatalogQuery::new()
            .category(category)
            .instrument_mode(instrument_mode)
            .night(night);
        let mut found: BTreeMap<String, CatalogRecord> = self
            .catalog
            .find(&query)?
            .into_iter()
            .map(|r| (r.name.clone(), r))
            .collect();

        let before = found.len();
        found.retain(|name, _| !excludes.contains(name));
        if found.len() < before {
            info!(category, night = %night, excluded = before - found.len(), "Excluded frames for night");
        }
        Ok(found)
    }

    fn resolve_special(
        &self,
        category: &str,
        night: NaiveDate,
        frames: &RunFramesConfig,
        object: Option<&str>,
    ) -> FramesResult<Option<ResolvedFrame>> {
        let Some(value) = frames.get(category) else {
            debug!(category, "Special frame not configured, skipped");
            return Ok(None);
        };

        let file = match value {
            FrameValue::Text(path) => Some(path.clone()),
            FrameValue::Dated(dated) => select_by_date(dated, night).map(str::to_string),
            FrameValue::List(_) | FrameValue::Unsupported(_) => {
                return Err(FramesError::Config(format!(
                    "unknown format for frame {category}: expected a string or a date mapping, got a {}",
                    value.shape()
                )))
            }
        };

        if category == OFFSET_LIST {
            let name = file.ok_or_else(|| FramesError::CategoryNotFound {
                category: category.to_string(),
                night,
            })?;
            return self.resolve_offset_list(&name, object).map(Some);
        }

        match file {
            Some(file) => {
                debug!(category, file = %file, "Special frame");
                Ok(Some(ResolvedFrame::Single(PathBuf::from(file))))
            }
            None => {
                debug!(category, night = %night, "No validity window matches, skipped");
                Ok(None)
            }
        }
    }

    /// An existing file is used as is, anything else names a catalog record.
    fn resolve_offset_list(&self, value: &str, object: Option<&str>) -> FramesResult<ResolvedFrame> {
        if Path::new(value).is_file() {
            return Ok(ResolvedFrame::Single(PathBuf::from(value)));
        }

        let mut query = CatalogQuery::new().category(OFFSET_LIST).name(value);
        if let Some(object) = object {
            query = query.object(object);
        }
        let record = self
            .catalog
            .find_one(&query)?
            .ok_or_else(|| FramesError::NamedFrameNotFound {
                category: OFFSET_LIST.to_string(),
                name: value.to_string(),
                object: object.map(str::to_string),
            })?;
        let path = record.path.join(format!("{OFFSET_LIST}.fits"));
        debug!(record = %record.name, file = %path.display(), "Offset list from catalog");
        Ok(ResolvedFrame::Single(path))
    }

    fn resolve_override(
        &self,
        category: &str,
        night: NaiveDate,
        value: &FrameValue,
    ) -> FramesResult<Option<ResolvedFrame>> {
        let files = match value {
            FrameValue::Text(text) => expand_override(text, category)?,
            FrameValue::List(items) => {
                let mut files = Vec::new();
                for item in items {
                    files.extend(expand_override(item, category)?);
                }
                files.sort();
                files.dedup();
                files
            }
            FrameValue::Dated(dated) => {
                return Ok(select_by_date(dated, night).map(|f| ResolvedFrame::Single(PathBuf::from(f))))
            }
            FrameValue::Unsupported(_) => {
                return Err(FramesError::Config(format!(
                    "wrong format for frame {category}: expected a path, a pattern, a list or a date mapping"
                )))
            }
        };

        if files.is_empty() {
            warn!(category, "Frame override matches no file");
        } else {
            debug!(category, files = files.len(), "Frame from run config");
        }
        Ok(Some(ResolvedFrame::Many(files)))
    }
}
