//! Night date parsing.

use chrono::NaiveDate;

use crate::errors::{FramesError, FramesResult};

/// Format of a night (the date the observing night started).
pub const NIGHT_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` night.
pub fn parse_night(s: &str) -> FramesResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), NIGHT_FORMAT)
        .map_err(|e| FramesError::Config(format!("invalid night '{s}': {e}")))
}
