use super::{load_command_config, resolve_framework, FrameworkSelection};
use crate::core::Error;
use crate::formatting::{FormattingConfig, OutputFormatter};
use crate::framework::{Framework, FrameworkDefinition, FrameworkLayout, WeightCheck};
use anyhow::{Context, Result};
use std::fmt::{self, Write as _};
use std::path::PathBuf;

pub struct FrameworkCommandConfig {
    pub selection: FrameworkSelection,
    pub config: Option<PathBuf>,
    /// Write the resolved framework as a TOML definition
    pub export: Option<PathBuf>,
    pub plain: bool,
}

pub fn show_framework(config: FrameworkCommandConfig) -> Result<()> {
    let settings = load_command_config(config.config.as_deref())?;
    let check = config.selection.weight_check(&settings);

    // Load leniently so weight problems are listed instead of aborting.
    let selection = FrameworkSelection {
        lenient_weights: true,
        ..config.selection
    };
    let framework = resolve_framework(&selection, &settings)?;

    let formatting = if config.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    let formatter = formatting.formatter();
    let problems = framework.weight_problems();
    print!("{}", render_framework(&framework, &problems, formatter.as_ref()));

    if let Some(path) = &config.export {
        let definition = FrameworkDefinition::from(&framework);
        let toml = toml::to_string_pretty(&definition).context("Failed to serialize framework")?;
        crate::io::write_file(path, &toml)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Exported '{}' to {}", framework.name(), path.display());
    }

    if !problems.is_empty() && check == WeightCheck::Strict {
        let message = format!(
            "framework '{}' has {} weight problem(s)",
            framework.name(),
            problems.len()
        );
        return Err(Error::framework(message).into());
    }
    Ok(())
}

pub fn render_framework(
    framework: &Framework,
    problems: &[String],
    formatter: &dyn OutputFormatter,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    if write_framework(&mut out, framework, problems, formatter).is_err() {
        log::debug!("Framework rendering stopped early");
    }
    out
}

fn write_framework(
    out: &mut String,
    framework: &Framework,
    problems: &[String],
    formatter: &dyn OutputFormatter,
) -> fmt::Result {
    writeln!(out, "{}", formatter.header(framework.name()))?;
    writeln!(out, "Scale: {}", framework.scale().describe())?;
    writeln!(out)?;

    match framework.layout() {
        FrameworkLayout::Categories(categories) => {
            for category in categories {
                let name = formatter.bold(&category.name);
                writeln!(out, "{name} (weight {})", weight_percent(category.weight))?;
                for sub in &category.subcriteria {
                    writeln!(out, "  - {} (weight {})", sub.name, weight_percent(sub.weight))?;
                }
            }
        }
        FrameworkLayout::Criteria(criteria) => {
            writeln!(out, "{}", formatter.bold("Criteria"))?;
            for criterion in criteria {
                writeln!(out, "  - {} (weight {})", criterion.name, criterion.weight)?;
            }
            writeln!(out, "{}", formatter.dim("Totals are unnormalized weighted sums."))?;
        }
    }
    writeln!(out)?;

    if problems.is_empty() {
        writeln!(out, "{}", formatter.success("Weights are valid."))?;
    } else {
        writeln!(out, "Weight problems:")?;
        for problem in problems {
            writeln!(out, "  - {problem}")?;
        }
    }
    Ok(())
}

/// Unit weight shown as a percentage, e.g. `0.25` as `25%`.
pub fn weight_percent(weight: f64) -> String {
    let percent = weight * 100.0;
    if (percent - percent.round()).abs() < 1e-6 {
        format!("{percent:.0}%")
    } else {
        format!("{percent:.1}%")
    }
}
