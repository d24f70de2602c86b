//! TOML framework definition files.
//!
//! ```toml
//! name = "Vendor selection"
//!
//! [scale]
//! kind = "numeric"
//! min = 1
//! max = 5
//!
//! [[categories]]
//! name = "Cost"
//! weight = 0.4
//! subcriteria = [
//!     { name = "License", weight = 0.7 },
//!     { name = "Support", weight = 0.3 },
//! ]
//! ```
//!
//! A flat framework lists `[[criteria]]` with `name` and `weight` instead of
//! categories.

use super::{Category, Criterion, Framework, FrameworkLayout, WeightCheck};
use crate::core::{Error, Result};
use crate::rating::RatingScale;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkDefinition {
    #[serde(default = "default_framework_name")]
    pub name: String,

    #[serde(default)]
    pub scale: RatingScale,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub criteria: Vec<Criterion>,
}

fn default_framework_name() -> String {
    "Custom Framework".to_string()
}

impl FrameworkDefinition {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents).map_err(|e| {
            Error::framework(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn build(self, check: WeightCheck) -> Result<Framework> {
        let layout = match (self.categories.is_empty(), self.criteria.is_empty()) {
            (false, true) => FrameworkLayout::Categories(self.categories),
            (true, false) => FrameworkLayout::Criteria(self.criteria),
            (false, false) => {
                return Err(Error::framework(
                    "definition declares both categories and criteria",
                ))
            }
            (true, true) => {
                return Err(Error::framework(
                    "definition declares neither categories nor criteria",
                ))
            }
        };
        Framework::new(self.name, self.scale, layout, check)
    }
}

impl From<&Framework> for FrameworkDefinition {
    fn from(framework: &Framework) -> Self {
        let (categories, criteria) = match framework.layout() {
            FrameworkLayout::Categories(categories) => (categories.clone(), Vec::new()),
            FrameworkLayout::Criteria(criteria) => (Vec::new(), criteria.clone()),
        };
        Self {
            name: framework.name().to_string(),
            scale: framework.scale().clone(),
            categories,
            criteria,
        }
    }
}

/// Load and validate a framework definition file.
pub fn load_framework(path: &Path, check: WeightCheck) -> Result<Framework> {
    log::debug!("Loading framework from {}", path.display());
    FrameworkDefinition::from_path(path)?.build(check)
}

/// Parse a `NAME=WEIGHT` override; the last `=` separates the weight.
pub fn parse_weight_override(s: &str) -> std::result::Result<(String, f64), String> {
    let (name, weight) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=WEIGHT, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing criterion name in '{s}'"));
    }
    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid weight in '{s}'"))?;
    if !weight.is_finite() {
        return Err(format!("weight in '{s}' is not a finite number"));
    }
    Ok((name.to_string(), weight))
}
