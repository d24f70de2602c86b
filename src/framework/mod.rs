//! Framework definitions: what gets rated and how much each rating counts.
//!
//! A framework is either a list of weighted categories, each holding weighted
//! sub-criteria, or a flat list of independently weighted criteria. Frameworks
//! are checked once at construction and are immutable afterwards.

pub mod definition;
pub mod presets;
mod validation;

use crate::core::{Result, ScoreScale};
use crate::rating::RatingScale;
use serde::{Deserialize, Serialize};

pub use definition::{parse_weight_override, FrameworkDefinition};
pub use validation::{WeightCheck, WEIGHT_SUM_TOLERANCE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
}

impl Criterion {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub weight: f64,
    pub subcriteria: Vec<Criterion>,
}

impl Category {
    pub fn new(name: impl Into<String>, weight: f64, subcriteria: Vec<Criterion>) -> Self {
        Self {
            name: name.into(),
            weight,
            subcriteria,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameworkLayout {
    Categories(Vec<Category>),
    Criteria(Vec<Criterion>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Framework {
    name: String,
    scale: RatingScale,
    layout: FrameworkLayout,
}

impl Framework {
    /// Validate and build a framework.
    pub fn new(
        name: impl Into<String>,
        scale: RatingScale,
        layout: FrameworkLayout,
        check: WeightCheck,
    ) -> Result<Self> {
        let framework = Self {
            name: name.into(),
            scale,
            layout,
        };
        validation::validate(&framework, check)?;
        Ok(framework)
    }

    pub fn categorized(
        name: impl Into<String>,
        scale: RatingScale,
        categories: Vec<Category>,
        check: WeightCheck,
    ) -> Result<Self> {
        Self::new(name, scale, FrameworkLayout::Categories(categories), check)
    }

    pub fn flat(
        name: impl Into<String>,
        scale: RatingScale,
        criteria: Vec<Criterion>,
        check: WeightCheck,
    ) -> Result<Self> {
        Self::new(name, scale, FrameworkLayout::Criteria(criteria), check)
    }

    /// Build a flat framework from newline-delimited criterion names.
    ///
    /// Blank lines are ignored and names are trimmed. Every criterion gets
    /// `default_weight` unless `overrides` names it.
    pub fn flat_from_lines(
        name: impl Into<String>,
        text: &str,
        default_weight: f64,
        overrides: &[(String, f64)],
        scale: RatingScale,
        check: WeightCheck,
    ) -> Result<Self> {
        let criteria = crate::core::non_blank_lines(text)
            .into_iter()
            .map(|line| {
                let weight = overrides
                    .iter()
                    .rev()
                    .find(|(n, _)| *n == line)
                    .map_or(default_weight, |(_, w)| *w);
                Criterion::new(line, weight)
            })
            .collect::<Vec<_>>();

        for (override_name, _) in overrides {
            if !criteria.iter().any(|c| &c.name == override_name) {
                return Err(crate::core::Error::framework(format!(
                    "weight given for unknown criterion '{override_name}'"
                )));
            }
        }

        Self::flat(name, scale, criteria, check)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scale(&self) -> &RatingScale {
        &self.scale
    }

    pub fn layout(&self) -> &FrameworkLayout {
        &self.layout
    }

    pub fn is_categorized(&self) -> bool {
        matches!(self.layout, FrameworkLayout::Categories(_))
    }

    pub fn score_scale(&self) -> ScoreScale {
        match self.layout {
            FrameworkLayout::Categories(_) => ScoreScale::Normalized,
            FrameworkLayout::Criteria(_) => ScoreScale::Unbounded,
        }
    }

    /// Names of the report columns: categories, or criteria for flat frameworks.
    pub fn component_names(&self) -> Vec<&str> {
        match &self.layout {
            FrameworkLayout::Categories(categories) => {
                categories.iter().map(|c| c.name.as_str()).collect()
            }
            FrameworkLayout::Criteria(criteria) => {
                criteria.iter().map(|c| c.name.as_str()).collect()
            }
        }
    }

    /// Every ratable criterion in declaration order.
    pub fn criteria(&self) -> Vec<&Criterion> {
        match &self.layout {
            FrameworkLayout::Categories(categories) => categories
                .iter()
                .flat_map(|c| c.subcriteria.iter())
                .collect(),
            FrameworkLayout::Criteria(criteria) => criteria.iter().collect(),
        }
    }

    pub fn criterion_names(&self) -> Vec<&str> {
        self.criteria().into_iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_criterion(&self, name: &str) -> bool {
        self.criteria().iter().any(|c| c.name == name)
    }

    /// Weight ranges and sums that a strict check would reject.
    ///
    /// Empty for any framework built with [`WeightCheck::Strict`].
    pub fn weight_problems(&self) -> Vec<String> {
        validation::collect_weight_problems(&self.layout)
    }
}
