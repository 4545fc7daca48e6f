//! Static calibration registry: long-lived reference files in one directory.

pub mod fits_header;
pub mod registry;

pub use fits_header::{read_header_value, FitsHeaderClassifier};
pub use registry::StaticCalibRegistry;
