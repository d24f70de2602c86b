//! Rating scales and the normalizer that maps raw cells onto them.
//!
//! Every scale accepts plain numbers. A labeled scale additionally accepts its
//! labels, so one cell may hold either `"High"` or `"5"`. Numbers are taken
//! verbatim, without clamping to the scale range.

use crate::core::{RatingError, RawScore};
use serde::{Deserialize, Serialize};

/// One label of a qualitative scale and the integer it stands for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleLabel {
    pub label: String,
    pub value: u32,
}

impl ScaleLabel {
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatingScale {
    /// Ordered qualitative labels, lowest first
    Labels { labels: Vec<ScaleLabel> },
    /// Implicit numeric scale with no labels
    Numeric { min: u32, max: u32 },
}

impl Default for RatingScale {
    fn default() -> Self {
        Self::six_level()
    }
}

impl RatingScale {
    /// `Very Low` (1) through `Very High` (6)
    pub fn six_level() -> Self {
        Self::Labels {
            labels: vec![
                ScaleLabel::new("Very Low", 1),
                ScaleLabel::new("Low", 2),
                ScaleLabel::new("Medium", 3),
                ScaleLabel::new("Medium-high", 4),
                ScaleLabel::new("High", 5),
                ScaleLabel::new("Very High", 6),
            ],
        }
    }

    pub fn numeric(min: u32, max: u32) -> Self {
        Self::Numeric { min, max }
    }

    pub fn labels(&self) -> &[ScaleLabel] {
        match self {
            Self::Labels { labels } => labels,
            Self::Numeric { .. } => &[],
        }
    }

    /// Look up a label, ignoring surrounding whitespace and ASCII case.
    pub fn lookup(&self, label: &str) -> Option<u32> {
        let wanted = label.trim();
        self.labels()
            .iter()
            .find(|l| l.label.eq_ignore_ascii_case(wanted))
            .map(|l| l.value)
    }

    /// Lowest and highest value a well-formed rating can take.
    pub fn bounds(&self) -> (u32, u32) {
        match self {
            Self::Labels { labels } => {
                let min = labels.iter().map(|l| l.value).min().unwrap_or(0);
                let max = labels.iter().map(|l| l.value).max().unwrap_or(0);
                (min, max)
            }
            Self::Numeric { min, max } => (*min, *max),
        }
    }

    /// Middle entry of the scale, the value a fresh form starts at.
    pub fn default_label(&self) -> String {
        match self {
            Self::Labels { labels } if !labels.is_empty() => {
                labels[(labels.len() - 1) / 2].label.clone()
            }
            _ => {
                let (min, max) = self.bounds();
                (min + (max - min) / 2).to_string()
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Labels { labels } => labels
                .iter()
                .map(|l| format!("{}={}", l.label, l.value))
                .collect::<Vec<_>>()
                .join(", "),
            Self::Numeric { min, max } => format!("numeric {min}-{max}"),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        match self {
            Self::Labels { labels } => {
                if labels.is_empty() {
                    return Err("rating scale has no labels".into());
                }
                for (i, label) in labels.iter().enumerate() {
                    if label.label.trim().is_empty() {
                        return Err(format!("rating scale label #{} is blank", i + 1));
                    }
                    if label.label.trim().parse::<f64>().is_ok() {
                        return Err(format!(
                            "rating scale label '{}' is numeric and would shadow a number",
                            label.label
                        ));
                    }
                    let duplicate = labels[..i]
                        .iter()
                        .any(|prev| prev.label.eq_ignore_ascii_case(label.label.trim()));
                    if duplicate {
                        return Err(format!("duplicate rating scale label '{}'", label.label));
                    }
                }
                Ok(())
            }
            Self::Numeric { min, max } => {
                if min > max {
                    Err(format!("numeric scale minimum {min} exceeds maximum {max}"))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// What a blank rating turns into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Blank scores 0, below the lowest label. Compatible default.
    #[default]
    #[serde(rename = "zero", alias = "zero_default")]
    #[value(name = "zero", alias = "zero-default")]
    ZeroDefault,
    /// Blank is an error
    Reject,
}

/// Map a raw cell onto `scale`.
pub fn normalize(
    raw: &RawScore,
    scale: &RatingScale,
    on_missing: MissingPolicy,
) -> Result<f64, RatingError> {
    match raw {
        RawScore::Blank => match on_missing {
            MissingPolicy::ZeroDefault => Ok(0.0),
            MissingPolicy::Reject => Err(RatingError::Missing),
        },
        RawScore::Number(value) if value.is_finite() => Ok(*value),
        RawScore::Number(value) => Err(RatingError::Unrecognized(value.to_string())),
        RawScore::Label(label) => scale
            .lookup(label)
            .map(f64::from)
            .ok_or_else(|| RatingError::Unrecognized(label.clone())),
    }
}

/// Convenience for callers still holding cell text.
pub fn normalize_text(
    text: &str,
    scale: &RatingScale,
    on_missing: MissingPolicy,
) -> Result<f64, RatingError> {
    normalize(&RawScore::parse(text), scale, on_missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero(text: &str, scale: &RatingScale) -> Result<f64, RatingError> {
        normalize_text(text, scale, MissingPolicy::ZeroDefault)
    }

    #[test]
    fn test_blank_is_zero_on_any_scale() {
        assert_eq!(zero("", &RatingScale::six_level()), Ok(0.0));
        assert_eq!(zero("   ", &RatingScale::numeric(1, 5)), Ok(0.0));
    }

    #[test]
    fn test_blank_rejected_when_configured() {
        let result = normalize_text(" ", &RatingScale::six_level(), MissingPolicy::Reject);
        assert_eq!(result, Err(RatingError::Missing));
    }

    #[test]
    fn test_labels_map_to_values() {
        let scale = RatingScale::six_level();
        assert_eq!(zero("Very High", &scale), Ok(6.0));
        assert_eq!(zero("Very Low", &scale), Ok(1.0));
        assert_eq!(zero("medium-HIGH", &scale), Ok(4.0));
        assert_eq!(zero("  Low ", &scale), Ok(2.0));
    }

    #[test]
    fn test_numbers_pass_through_unclamped() {
        assert_eq!(zero("3", &RatingScale::six_level()), Ok(3.0));
        assert_eq!(zero("3", &RatingScale::numeric(1, 5)), Ok(3.0));
        assert_eq!(zero("99", &RatingScale::numeric(1, 5)), Ok(99.0));
        assert_eq!(zero("-2.5", &RatingScale::numeric(1, 6)), Ok(-2.5));
    }

    #[test]
    fn test_unknown_text_is_rejected() {
        assert_eq!(
            zero("banana", &RatingScale::six_level()),
            Err(RatingError::Unrecognized("banana".into()))
        );
        // numeric scales carry no labels at all
        assert!(zero("High", &RatingScale::numeric(1, 5)).is_err());
        assert!(zero("NaN", &RatingScale::numeric(1, 5)).is_err());
    }

    #[test]
    fn test_default_label_is_middle_entry() {
        assert_eq!(RatingScale::six_level().default_label(), "Medium");
        assert_eq!(RatingScale::numeric(1, 5).default_label(), "3");
    }

    #[test]
    fn test_scale_validation() {
        assert!(RatingScale::six_level().validate().is_ok());
        assert!(RatingScale::numeric(5, 1).validate().is_err());
        let shadowing = RatingScale::Labels {
            labels: vec![ScaleLabel::new("1", 1)],
        };
        assert!(shadowing.validate().is_err());
        let duplicate = RatingScale::Labels {
            labels: vec![ScaleLabel::new("Low", 1), ScaleLabel::new("low", 2)],
        };
        assert!(duplicate.validate().is_err());
    }

    #[test]
    fn test_missing_policy_config_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            on_missing: MissingPolicy,
        }
        let parse = |text: &str| toml::from_str::<Wrapper>(text).map(|w| w.on_missing);

        assert_eq!(parse("on_missing = \"zero\"").unwrap(), MissingPolicy::ZeroDefault);
        assert_eq!(parse("on_missing = \"zero_default\"").unwrap(), MissingPolicy::ZeroDefault);
        assert_eq!(parse("on_missing = \"reject\"").unwrap(), MissingPolicy::Reject);
        assert!(parse("on_missing = \"skip\"").is_err());
    }
}
