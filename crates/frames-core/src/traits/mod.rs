//! Collaborator traits.
//!
//! The resolver reaches the outside world only through these seams. All
//! traits are object-safe, `Send + Sync`, and have blanket `Arc<T>` impls.

pub mod catalog;
pub mod classifier;
pub mod memory_catalog;
pub mod requirement;

pub use catalog::IExposureCatalog;
pub use classifier::CategoryClassifier;
pub use memory_catalog::InMemoryCatalog;
pub use requirement::{FrameRequirement, StepRequirement};
