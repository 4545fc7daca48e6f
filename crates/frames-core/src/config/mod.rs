//! Configuration consumed by the resolver.
//!
//! `FramesSettings` is process-wide (static registry root, validity windows,
//! exclusion blocks). `RunConfig` is supplied per resolution call.

pub mod run_config;
pub mod settings;

pub use run_config::{FrameSetting, FrameValue, RunConfig, RunFramesConfig};
pub use settings::{ExcludeEntry, ExclusionSettings, FramesSettings};
