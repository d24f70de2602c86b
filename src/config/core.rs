use crate::framework::WeightCheck;
use crate::io::output::OutputFormat;
use crate::rating::MissingPolicy;
use crate::scoring::ScoringOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for assessmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AssessConfig {
    /// Framework definition file used when no `--framework` is given
    #[serde(default)]
    pub framework: Option<PathBuf>,

    /// Rating interpretation and weight checking
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Input size limits
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Defaults for frameworks built from a criteria list
    #[serde(default)]
    pub flat: FlatConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScoringConfig {
    #[serde(default)]
    pub on_missing: MissingPolicy,

    #[serde(default)]
    pub weight_check: WeightCheck,
}

impl ScoringConfig {
    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            on_missing: self.on_missing,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Decimal places shown for scores
    #[serde(default = "default_decimals")]
    pub decimals: u32,

    /// Width of the longest bar in the terminal chart
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: None,
            decimals: default_decimals(),
            chart_width: default_chart_width(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LimitsConfig {
    #[serde(default = "default_max_options")]
    pub max_options: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_options: default_max_options(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FlatConfig {
    #[serde(default = "default_flat_weight")]
    pub default_weight: f64,
}

impl Default for FlatConfig {
    fn default() -> Self {
        Self {
            default_weight: default_flat_weight(),
        }
    }
}

pub fn default_decimals() -> u32 {
    2
}

pub fn default_chart_width() -> usize {
    40
}

pub fn default_max_options() -> usize {
    20
}

pub fn default_flat_weight() -> f64 {
    5.0
}

impl AssessConfig {
    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), String> {
        if self.output.decimals > 6 {
            return Err(format!(
                "output.decimals must be at most 6, got {}",
                self.output.decimals
            ));
        }
        if self.output.chart_width == 0 {
            return Err("output.chart_width must be positive".into());
        }
        if self.limits.max_options == 0 {
            return Err("limits.max_options must be positive".into());
        }
        let weight = self.flat.default_weight;
        if !(1.0..=10.0).contains(&weight) || weight.fract() != 0.0 {
            return Err(format!(
                "flat.default_weight must be a whole number from 1 to 10, got {weight}"
            ));
        }
        Ok(())
    }
}
