use crate::core::Result;
use crate::io::output::{OutputWriter, ReportOptions};
use crate::ranking::ResultSet;
use std::io::Write;

pub const OPTION_COLUMN: &str = "Opportunity";
pub const TOTAL_COLUMN: &str = "Total Score";

/// One row per option: name, each weighted component, total.
pub struct CsvWriter<W: Write> {
    writer: csv::Writer<W>,
    options: ReportOptions,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            options,
        }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_results(&mut self, results: &ResultSet) -> Result<()> {
        let header = std::iter::once(OPTION_COLUMN)
            .chain(results.components.iter().map(String::as_str))
            .chain(std::iter::once(TOTAL_COLUMN));
        self.writer.write_record(header)?;

        for entry in results {
            let mut record = Vec::with_capacity(results.components.len() + 2);
            record.push(entry.option_name.clone());
            for name in &results.components {
                let weighted = entry.component(name).map_or(0.0, |c| c.weighted);
                record.push(self.options.fmt_score(weighted));
            }
            record.push(self.options.fmt_score(entry.total_score));
            self.writer.write_record(&record)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
