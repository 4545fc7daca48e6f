//! Shared data types.

pub mod category;
pub mod dates;
pub mod frame_map;
pub mod record;
pub mod validity;

pub use category::{CategoryKind, CategoryTable, FrameCategory};
pub use dates::{parse_night, NIGHT_FORMAT};
pub use frame_map::{ResolvedFrame, ResolvedFrameMap};
pub use record::{CatalogQuery, CatalogRecord};
pub use validity::{select_by_date, DatedFiles, ValidityWindow};
