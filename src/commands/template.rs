use super::{load_command_config, resolve_framework, FrameworkSelection};
use crate::core::OptionEntry;
use crate::io::{options_from_lines, read_file, write_template};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

pub struct TemplateConfig {
    pub selection: FrameworkSelection,
    pub config: Option<PathBuf>,
    /// Option names, one per line
    pub options: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Fill every cell with the scale's middle label
    pub prefill: bool,
}

pub fn write_scoring_template(config: TemplateConfig) -> Result<()> {
    let settings = load_command_config(config.config.as_deref())?;
    let framework = resolve_framework(&config.selection, &settings)?;

    let options: Vec<OptionEntry> = match &config.options {
        Some(path) => {
            let text = read_file(path)
                .with_context(|| format!("Failed to read option list {}", path.display()))?;
            options_from_lines(&text, settings.limits.max_options)?
        }
        None => Vec::new(),
    };

    let prefill = config.prefill.then(|| framework.scale().default_label());

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    write_template(sink, &framework, &options, prefill.as_deref())?;

    if let Some(path) = &config.output {
        log::info!(
            "Wrote scoring sheet for '{}' with {} options to {}",
            framework.name(),
            options.len(),
            path.display()
        );
    }
    Ok(())
}
