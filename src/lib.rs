// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod framework;
pub mod io;
pub mod ranking;
pub mod rating;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    ComponentScore, Error, OptionEntry, RatingError, RawScore, Result, ScoreBreakdown, ScoreScale,
};

pub use crate::framework::{
    Category, Criterion, Framework, FrameworkDefinition, FrameworkLayout, WeightCheck,
};

pub use crate::rating::{normalize, normalize_text, MissingPolicy, RatingScale, ScaleLabel};

pub use crate::scoring::{score, ScoringEngine, ScoringOptions};

pub use crate::ranking::{rank, ResultSet};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, ReportOptions};
