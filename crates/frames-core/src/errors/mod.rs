//! Error types for frame resolution.
//!
//! `FramesError` covers resolution failures, `CatalogError` covers the
//! exposure catalog collaborator. Both carry a stable error code through
//! [`FramesErrorCode`].

pub mod catalog_error;
pub mod error_code;
pub mod frames_error;

pub use catalog_error::CatalogError;
pub use error_code::FramesErrorCode;
pub use frames_error::{ErrorKind, FramesError, FramesResult};
