//! Stable error codes, independent of the Display text.

pub const NOT_FOUND: &str = "NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const AMBIGUOUS: &str = "AMBIGUOUS";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";

/// Maps an error to a machine-readable code.
pub trait FramesErrorCode {
    fn error_code(&self) -> &'static str;
}
