//! `IExposureCatalog` trait: find-by-criteria over produced files.

use std::sync::Arc;

use crate::errors::CatalogError;
use crate::types::{CatalogQuery, CatalogRecord};

/// Read-only access to the exposure catalog.
///
/// Result order is not part of the contract; callers that need determinism
/// sort or key the results themselves.
pub trait IExposureCatalog: Send + Sync {
    /// Records matching every field set in `query`.
    fn find(&self, query: &CatalogQuery) -> Result<Vec<CatalogRecord>, CatalogError>;

    /// First match by name order, if any.
    fn find_one(&self, query: &CatalogQuery) -> Result<Option<CatalogRecord>, CatalogError> {
        let mut records = self.find(query)?;
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records.into_iter().next())
    }
}

// ─── Arc blanket impl ───────────────────────────────────────────────

impl<T: IExposureCatalog + ?Sized> IExposureCatalog for Arc<T> {
    fn find(&self, query: &CatalogQuery) -> Result<Vec<CatalogRecord>, CatalogError> {
        (**self).find(query)
    }
    fn find_one(&self, query: &CatalogQuery) -> Result<Option<CatalogRecord>, CatalogError> {
        (**self).find_one(query)
    }
}
