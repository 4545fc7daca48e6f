//! Errors raised by an `IExposureCatalog` implementation.

use super::error_code::{self, FramesErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Catalog query failed: {query}: {message}")]
    QueryFailed { query: String, message: String },

    #[error("Catalog lock poisoned")]
    LockPoisoned,
}

impl FramesErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
