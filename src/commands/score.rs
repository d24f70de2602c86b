use super::{load_command_config, resolve_framework, FrameworkSelection};
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, load_option_table, OutputFormat, ReportOptions};
use crate::rating::MissingPolicy;
use crate::ranking::ResultSet;
use crate::scoring::ScoringEngine;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

pub struct ScoreConfig {
    pub table: PathBuf,
    pub selection: FrameworkSelection,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub on_missing: Option<MissingPolicy>,
    pub top: Option<usize>,
    pub plain: bool,
}

pub fn score_options(config: ScoreConfig) -> Result<()> {
    let settings = load_command_config(config.config.as_deref())?;
    let framework = resolve_framework(&config.selection, &settings)?;

    let options = load_option_table(&config.table, &framework, settings.limits.max_options)
        .with_context(|| format!("Failed to read option table {}", config.table.display()))?;

    let mut scoring = settings.scoring.scoring_options();
    if let Some(on_missing) = config.on_missing {
        scoring.on_missing = on_missing;
    }

    let mut results = ScoringEngine::new(&framework, scoring).rank(&options)?;
    if let Some(top) = config.top {
        results.truncate(top);
    }

    let format = config
        .format
        .or(settings.output.default_format)
        .unwrap_or(OutputFormat::Terminal);
    let formatting = if config.plain || config.output.is_some() {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    let report = ReportOptions {
        decimals: settings.output.decimals,
        chart_width: settings.output.chart_width,
        formatting,
    };

    write_report(&results, format, report, config.output)
}

fn write_report(
    results: &ResultSet,
    format: OutputFormat,
    report: ReportOptions,
    output: Option<PathBuf>,
) -> Result<()> {
    let sink: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    let mut writer = create_writer(format, sink, report);
    writer.write_results(results)?;

    if let Some(path) = output {
        log::info!("Wrote {} results to {}", results.len(), path.display());
    }
    Ok(())
}
