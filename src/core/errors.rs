//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Why a single rating cell could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    /// Not blank, not a label of the scale, not a finite number
    #[error("unrecognized rating {0:?}")]
    Unrecognized(String),

    /// Blank cell while blank ratings are rejected
    #[error("rating is missing")]
    Missing,
}

/// Main error type for assessmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A raw score cell of one option could not be normalized
    #[error("Invalid rating for option '{option}', criterion '{criterion}': {source}")]
    InvalidRating {
        option: String,
        criterion: String,
        #[source]
        source: RatingError,
    },

    /// Best-option selection on a result set without entries
    #[error("Cannot select the best option: the result set is empty")]
    EmptyResultSet,

    /// Framework definition violates a structural or weight invariant
    #[error("Invalid framework: {0}")]
    InvalidFramework(String),

    /// Option table holds more rows than the configured limit
    #[error("Too many options: {count} given, at most {limit} allowed")]
    TooManyOptions { count: usize, limit: usize },

    /// Malformed option table or criteria list
    #[error("Input error in {path}: {message}")]
    Input { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an input error with path context
    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a framework error
    pub fn framework(message: impl Into<String>) -> Self {
        Self::InvalidFramework(message.into())
    }

    /// Attach option and criterion context to a rating failure
    pub fn invalid_rating(
        option: impl Into<String>,
        criterion: impl Into<String>,
        source: RatingError,
    ) -> Self {
        Self::InvalidRating {
            option: option.into(),
            criterion: criterion.into(),
            source,
        }
    }

    /// Whether the user can fix the failure by editing their input
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::InvalidRating { .. }
                | Self::EmptyResultSet
                | Self::InvalidFramework(_)
                | Self::TooManyOptions { .. }
                | Self::Input { .. }
                | Self::Configuration(_)
                | Self::Csv(_)
                | Self::Toml(_)
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
