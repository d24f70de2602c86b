//! Built-in frameworks.

use super::{Category, Criterion, Framework, WeightCheck};
use crate::core::{Error, Result};
use crate::rating::RatingScale;

pub const DECISION_ASSESSMENT: &str = "decision-assessment";

/// Names accepted by [`builtin`].
pub const BUILTIN_NAMES: &[&str] = &[DECISION_ASSESSMENT];

/// Market attractiveness against strategic fit, equally weighted, rated on
/// the six-level scale.
pub fn decision_assessment() -> Result<Framework> {
    Framework::categorized(
        "Decision Assessment Framework",
        RatingScale::six_level(),
        vec![
            Category::new(
                "Market Attractiveness",
                0.5,
                vec![
                    Criterion::new("Market growth rate", 0.10),
                    Criterion::new("Market profitability", 0.25),
                    Criterion::new("Regulatory risks", 0.20),
                    Criterion::new("Competitive intensity", 0.15),
                    Criterion::new("Revenue/membership potential", 0.30),
                ],
            ),
            Category::new(
                "Strategic Fit",
                0.5,
                vec![
                    Criterion::new("Potential to provide competitive advantage", 0.20),
                    Criterion::new("Fit with strategy, vision, and purpose", 0.25),
                    Criterion::new("Channels to market", 0.15),
                    Criterion::new("Fit with strengths", 0.15),
                    Criterion::new("Ease of implementation", 0.25),
                ],
            ),
        ],
        WeightCheck::Strict,
    )
}

pub fn builtin(name: &str) -> Result<Framework> {
    match name {
        DECISION_ASSESSMENT => decision_assessment(),
        other => Err(Error::framework(format!(
            "unknown built-in framework '{}' (available: {})",
            other,
            BUILTIN_NAMES.join(", ")
        ))),
    }
}
