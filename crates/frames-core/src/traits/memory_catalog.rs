//! `InMemoryCatalog`: vector-backed `IExposureCatalog`.
//!
//! Used by tests and by embedders that load the catalog up front.

use std::sync::Mutex;

use crate::errors::CatalogError;
use crate::types::{CatalogQuery, CatalogRecord};

use super::catalog::IExposureCatalog;

/// In-memory catalog. `find` scans every record.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    records: Mutex<Vec<CatalogRecord>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<CatalogRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn insert(&self, record: CatalogRecord) -> Result<(), CatalogError> {
        self.records
            .lock()
            .map_err(|_| CatalogError::LockPoisoned)?
            .push(record);
        Ok(())
    }

    pub fn extend(&self, records: impl IntoIterator<Item = CatalogRecord>) -> Result<(), CatalogError> {
        self.records
            .lock()
            .map_err(|_| CatalogError::LockPoisoned)?
            .extend(records);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IExposureCatalog for InMemoryCatalog {
    fn find(&self, query: &CatalogQuery) -> Result<Vec<CatalogRecord>, CatalogError> {
        let records = self.records.lock().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(records.iter().filter(|r| query.matches(r)).cloned().collect())
    }
}
