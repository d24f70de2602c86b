pub mod errors;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use errors::{Error, RatingError, Result};

/// A raw rating cell, resolved once from its text form at the input boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RawScore {
    #[default]
    Blank,
    Label(String),
    Number(f64),
}

impl RawScore {
    /// Classify cell text: blank after trimming, a finite number, or a label.
    ///
    /// Spellings such as `NaN` and `inf` parse as floats but are kept as labels,
    /// so they fail normalization instead of poisoning a total. `-0` reads as `0`.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Blank;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number(value + 0.0),
            _ => Self::Label(trimmed.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl From<&str> for RawScore {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<f64> for RawScore {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for RawScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Label(label) => f.write_str(label),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// One option (opportunity) with its raw ratings keyed by criterion name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionEntry {
    pub name: String,
    pub raw_scores: BTreeMap<String, RawScore>,
}

impl OptionEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_scores: BTreeMap::new(),
        }
    }

    /// Builder-style rating assignment
    pub fn with_score(mut self, criterion: impl Into<String>, raw: impl Into<RawScore>) -> Self {
        self.raw_scores.insert(criterion.into(), raw.into());
        self
    }

    pub fn set_score(&mut self, criterion: impl Into<String>, raw: RawScore) {
        self.raw_scores.insert(criterion.into(), raw);
    }

    /// Rating for a criterion; absent entries read as blank.
    pub fn raw_score(&self, criterion: &str) -> &RawScore {
        static BLANK: RawScore = RawScore::Blank;
        self.raw_scores.get(criterion).unwrap_or(&BLANK)
    }
}

/// Which range a total score lives on.
///
/// Category frameworks have weights summing to 1.0, so a total stays on the
/// rating scale. Flat frameworks use independent 1-10 weights and produce an
/// unbounded weighted sum that is not comparable with the former.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreScale {
    Normalized,
    Unbounded,
}

/// Contribution of one category (or one flat criterion) to an option's total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub name: String,
    /// Unweighted-by-component value: the category subtotal, or the normalized rating
    pub subtotal: f64,
    /// Value after applying the component weight; these sum to the total
    pub weighted: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub option_name: String,
    pub components: Vec<ComponentScore>,
    pub total_score: f64,
}

impl ScoreBreakdown {
    pub fn component(&self, name: &str) -> Option<&ComponentScore> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Weighted values keyed by component name
    pub fn category_scores(&self) -> BTreeMap<&str, f64> {
        self.components
            .iter()
            .map(|c| (c.name.as_str(), c.weighted))
            .collect()
    }
}

/// Split newline-delimited user text into trimmed, non-blank entries.
pub fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
