//! `StaticCalibRegistry`: picks the static file for a category.
//!
//! Configured validity windows are consulted first; otherwise the file is
//! taken from an index built by classifying every file in the directory.
//! The listing and the index are memoized until `invalidate()`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use tracing::{debug, warn};

use frames_core::errors::{FramesError, FramesResult};
use frames_core::traits::CategoryClassifier;
use frames_core::types::{select_by_date, DatedFiles};

use super::fits_header::FitsHeaderClassifier;

/// Category → file names, each list in directory listing order.
pub type CategoryIndex = BTreeMap<String, Vec<String>>;

pub struct StaticCalibRegistry {
    path: PathBuf,
    conf: BTreeMap<String, DatedFiles>,
    classifier: Arc<dyn CategoryClassifier>,
    files: Mutex<Option<Arc<BTreeSet<String>>>>,
    index: Mutex<Option<Arc<CategoryIndex>>>,
}

impl StaticCalibRegistry {
    /// Registry over `path`, classifying files by their FITS header.
    pub fn new(path: impl Into<PathBuf>, conf: BTreeMap<String, DatedFiles>) -> Self {
        Self::with_classifier(path, conf, Arc::new(FitsHeaderClassifier::new()))
    }

    pub fn with_classifier(
        path: impl Into<PathBuf>,
        conf: BTreeMap<String, DatedFiles>,
        classifier: Arc<dyn CategoryClassifier>,
    ) -> Self {
        Self {
            path: path.into(),
            conf,
            classifier,
            files: Mutex::new(None),
            index: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the files in the static directory, sorted.
    pub fn files(&self) -> FramesResult<Arc<BTreeSet<String>>> {
        let mut cached = self
            .files
            .lock()
            .map_err(|e| FramesError::LockPoisoned(e.to_string()))?;
        if let Some(files) = cached.as_ref() {
            return Ok(Arc::clone(files));
        }

        let mut files = BTreeSet::new();
        for entry in std::fs::read_dir(&self.path)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                files.insert(name.to_string());
            }
        }
        debug!(path = %self.path.display(), count = files.len(), "Listed static calibration directory");

        let files = Arc::new(files);
        *cached = Some(Arc::clone(&files));
        Ok(files)
    }

    /// Static files indexed by the category found in their metadata.
    pub fn by_category(&self) -> FramesResult<Arc<CategoryIndex>> {
        let mut cached = self
            .index
            .lock()
            .map_err(|e| FramesError::LockPoisoned(e.to_string()))?;
        if let Some(index) = cached.as_ref() {
            return Ok(Arc::clone(index));
        }

        let mut index = CategoryIndex::new();
        for name in self.files()?.iter() {
            if !self.classifier.accepts(name) {
                debug!(file = %name, "Skipping unclassifiable static file");
                continue;
            }
            match self.classifier.classify(&self.path.join(name))? {
                Some(category) => index.entry(category).or_default().push(name.clone()),
                None => debug!(file = %name, "Static file carries no category"),
            }
        }

        let index = Arc::new(index);
        *cached = Some(Arc::clone(&index));
        Ok(index)
    }

    /// Drop the memoized listing and index. The next lookup rescans.
    pub fn invalidate(&self) {
        if let Ok(mut files) = self.files.lock() {
            *files = None;
        }
        if let Ok(mut index) = self.index.lock() {
            *index = None;
        }
    }

    /// Path of the static file for `category`, valid on `date` if given.
    pub fn get_static(&self, category: &str, date: Option<NaiveDate>) -> FramesResult<PathBuf> {
        let mut file = self.conf.get(category).and_then(|dated| match date {
            None => dated.first(),
            Some(date) => select_by_date(dated, date),
        });

        let index;
        if file.is_none() {
            index = self.by_category()?;
            let candidates = index
                .get(category)
                .filter(|c| !c.is_empty())
                .ok_or_else(|| FramesError::NoStaticCandidate {
                    category: category.to_string(),
                })?;
            if candidates.len() > 1 {
                warn!(
                    category,
                    candidates = ?candidates,
                    "Multiple static files for category, using the first one"
                );
            }
            file = candidates.first().map(String::as_str);
        }

        let file = file.ok_or_else(|| FramesError::NoStaticCandidate {
            category: category.to_string(),
        })?;
        if !self.files()?.contains(file) {
            return Err(FramesError::StaticFileMissing {
                file: file.to_string(),
            });
        }
        Ok(self.path.join(file))
    }
}
