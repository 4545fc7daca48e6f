//! # frames-resolver
//!
//! Resolves the calibration frames a processing step needs for one night.
//!
//! Sources, in precedence order per category:
//! - `StaticCalibRegistry`: reference files in one directory, classified by
//!   their FITS header, optionally restricted by validity windows.
//! - Special run-level values (`OUTPUT_WCS`, `OFFSET_LIST`, `SKY_MASK`,
//!   `AUTOCAL_FACTORS`).
//! - Explicit run overrides: a path, a directory, a glob pattern, a list,
//!   or a date-keyed mapping.
//! - The exposure catalog, searched by night, instrument mode, and category,
//!   widening to adjacent nights and skipping `ExclusionRegistry` names.

pub mod exclusion;
pub mod resolver;
pub mod static_calib;

pub use exclusion::ExclusionRegistry;
pub use resolver::{build_working_set, day_offsets, offset_sequence, FrameResolver};
pub use static_calib::{read_header_value, FitsHeaderClassifier, StaticCalibRegistry};
