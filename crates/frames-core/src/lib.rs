//! # frames-core
//!
//! Foundation crate for calibration frame resolution.
//! Defines the types, collaborator traits, errors, config, telemetry, and
//! constants shared with `frames-resolver`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{FramesSettings, RunConfig, RunFramesConfig};
pub use errors::{ErrorKind, FramesError, FramesErrorCode, FramesResult};
pub use traits::{CategoryClassifier, FrameRequirement, IExposureCatalog, InMemoryCatalog, StepRequirement};
pub use types::{
    CatalogQuery, CatalogRecord, CategoryKind, CategoryTable, DatedFiles, FrameCategory,
    ResolvedFrame, ResolvedFrameMap, ValidityWindow,
};
