//! Frame resolution: working set, offsets, expansion, and the resolver.

pub mod expand;
pub mod frame_resolver;
pub mod offsets;
pub mod summary;
pub mod working_set;

pub use frame_resolver::FrameResolver;
pub use offsets::{day_offsets, offset_sequence};
pub use working_set::build_working_set;
