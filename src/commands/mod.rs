//! CLI command implementations.
//!
//! - **score**: rate a filled-in option table and report the ranking
//! - **template**: write a blank scoring sheet for a framework
//! - **framework**: show and validate a framework definition
//! - **init**: write a default `.assessmap.toml`

pub mod framework;
pub mod init;
pub mod score;
pub mod template;

pub use framework::{show_framework, FrameworkCommandConfig};
pub use init::{init_config, init_config_in};
pub use score::{score_options, ScoreConfig};
pub use template::{write_scoring_template, TemplateConfig};

use crate::config::{load_config, load_config_from_path, AssessConfig};
use crate::core::Error;
use crate::framework::{definition::load_framework, presets, Framework, WeightCheck};
use crate::rating::RatingScale;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where the framework for a command comes from, in priority order:
/// a criteria list, a definition file, a named built-in, the config file's
/// framework, and finally the built-in Decision Assessment Framework.
#[derive(Debug, Clone, Default)]
pub struct FrameworkSelection {
    pub framework: Option<PathBuf>,
    pub builtin: Option<String>,
    pub criteria: Option<PathBuf>,
    pub weights: Vec<(String, f64)>,
    /// Scale for criteria lists; numeric 1-5 when absent
    pub scale: Option<RatingScale>,
    pub lenient_weights: bool,
}

impl FrameworkSelection {
    pub fn weight_check(&self, config: &AssessConfig) -> WeightCheck {
        if self.lenient_weights {
            WeightCheck::Lenient
        } else {
            config.scoring.weight_check
        }
    }
}

pub fn resolve_framework(
    selection: &FrameworkSelection,
    config: &AssessConfig,
) -> Result<Framework> {
    let check = selection.weight_check(config);

    if let Some(criteria_path) = &selection.criteria {
        let text = crate::io::read_file(criteria_path)
            .map_err(|e| Error::input(criteria_path, format!("cannot read criteria list: {e}")))?;
        let scale = selection
            .scale
            .clone()
            .unwrap_or_else(|| RatingScale::numeric(1, 5));
        let name = criteria_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Custom Criteria".to_string());
        return Framework::flat_from_lines(
            name,
            &text,
            config.flat.default_weight,
            &selection.weights,
            scale,
            check,
        )
        .with_context(|| format!("Invalid criteria list {}", criteria_path.display()));
    }

    if !selection.weights.is_empty() {
        anyhow::bail!("--weight only applies to frameworks built from --criteria");
    }

    if let Some(path) = selection.framework.as_ref().or(config.framework.as_ref()) {
        if selection.builtin.is_none() || selection.framework.is_some() {
            return load_framework(path, check)
                .with_context(|| format!("Failed to load framework {}", path.display()));
        }
    }

    let name = selection
        .builtin
        .as_deref()
        .unwrap_or(presets::DECISION_ASSESSMENT);
    Ok(presets::builtin(name)?)
}

/// Explicit `--config` files must load; otherwise search as usual.
pub fn load_command_config(path: Option<&Path>) -> Result<AssessConfig> {
    match path {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}
