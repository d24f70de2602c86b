use crate::core::{Result, ScoreBreakdown, ScoreScale};
use crate::io::output::{OutputWriter, ReportOptions};
use crate::ranking::ResultSet;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: JsonMetadata<'a>,
    best: Option<&'a str>,
    results: &'a [ScoreBreakdown],
}

#[derive(Serialize)]
struct JsonMetadata<'a> {
    assessmap_version: &'static str,
    framework: &'a str,
    score_scale: ScoreScale,
    components: &'a [String],
    option_count: usize,
}

/// Scores are written at full precision; `decimals` only affects text formats.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, _options: ReportOptions) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &ResultSet) -> Result<()> {
        let report = JsonReport {
            metadata: JsonMetadata {
                assessmap_version: env!("CARGO_PKG_VERSION"),
                framework: &results.framework,
                score_scale: results.scale,
                components: &results.components,
                option_count: results.len(),
            },
            best: results.best().ok().map(|b| b.option_name.as_str()),
            results: &results.entries,
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}
