use crate::core::Result;
use crate::formatting::FormattingConfig;
use crate::io::writers::{CsvWriter, JsonWriter, MarkdownWriter, TerminalWriter};
use crate::ranking::ResultSet;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
    Csv,
}

/// Presentation settings shared by all writers.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub decimals: u32,
    pub chart_width: usize,
    pub formatting: FormattingConfig,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            decimals: crate::config::default_decimals(),
            chart_width: crate::config::default_chart_width(),
            formatting: FormattingConfig::plain(),
        }
    }
}

impl ReportOptions {
    /// Fixed-precision rendering used for every displayed score.
    pub fn fmt_score(&self, value: f64) -> String {
        format!("{:.*}", self.decimals as usize, value)
    }
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &ResultSet) -> Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    options: ReportOptions,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, options)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, options)),
        OutputFormat::Csv => Box::new(CsvWriter::new(writer, options)),
    }
}
