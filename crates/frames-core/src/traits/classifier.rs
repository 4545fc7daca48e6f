//! `CategoryClassifier` trait: reads the category embedded in a file.

use std::path::Path;
use std::sync::Arc;

use crate::errors::FramesResult;

/// Extracts the product category stored in a file's metadata.
pub trait CategoryClassifier: Send + Sync {
    /// Whether the registry should look at this file at all.
    fn accepts(&self, file_name: &str) -> bool;

    /// The category, or `None` when the file carries no category.
    fn classify(&self, path: &Path) -> FramesResult<Option<String>>;
}

impl<T: CategoryClassifier + ?Sized> CategoryClassifier for Arc<T> {
    fn accepts(&self, file_name: &str) -> bool {
        (**self).accepts(file_name)
    }
    fn classify(&self, path: &Path) -> FramesResult<Option<String>> {
        (**self).classify(path)
    }
}
