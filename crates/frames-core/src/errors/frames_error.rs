//! Resolution errors.

use chrono::NaiveDate;

use super::catalog_error::CatalogError;
use super::error_code::{self, FramesErrorCode};

/// The failure families a caller of `get_frames` has to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Configuration,
    Ambiguity,
    Validation,
    Infrastructure,
}

#[derive(Debug, thiserror::Error)]
pub enum FramesError {
    #[error("Could not find {category} for night {night}")]
    CategoryNotFound { category: String, night: NaiveDate },

    #[error("Could not find static file {file}")]
    StaticFileMissing { file: String },

    #[error("No static calibration file for {category}")]
    NoStaticCandidate { category: String },

    #[error("{category} \"{name}\" not found (object: {object:?})")]
    NamedFrameNotFound {
        category: String,
        name: String,
        object: Option<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Ambiguous {category} for night {night}, candidates: {candidates:?}")]
    Ambiguous {
        category: String,
        night: NaiveDate,
        candidates: Vec<String>,
    },

    #[error("Found {found} {category} files in {path} instead of 1 or 24")]
    UnexpectedFileCount {
        category: String,
        path: String,
        found: usize,
    },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Cache lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FramesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CategoryNotFound { .. }
            | Self::StaticFileMissing { .. }
            | Self::NoStaticCandidate { .. }
            | Self::NamedFrameNotFound { .. } => ErrorKind::NotFound,
            Self::Config(_) | Self::Toml(_) | Self::Yaml(_) | Self::Json(_) => {
                ErrorKind::Configuration
            }
            Self::Ambiguous { .. } => ErrorKind::Ambiguity,
            Self::UnexpectedFileCount { .. } => ErrorKind::Validation,
            Self::Catalog(_) | Self::LockPoisoned(_) | Self::Io(_) | Self::Glob(_) => {
                ErrorKind::Infrastructure
            }
        }
    }
}

impl FramesErrorCode for FramesError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::Io(_) | Self::Glob(_) => error_code::IO_ERROR,
            _ => match self.kind() {
                ErrorKind::NotFound => error_code::NOT_FOUND,
                ErrorKind::Configuration => error_code::CONFIG_ERROR,
                ErrorKind::Ambiguity => error_code::AMBIGUOUS,
                ErrorKind::Validation => error_code::VALIDATION_ERROR,
                ErrorKind::Infrastructure => error_code::IO_ERROR,
            },
        }
    }
}

/// Convenience type alias.
pub type FramesResult<T> = Result<T, FramesError>;
