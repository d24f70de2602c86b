//! Reading option tables and writing blank scoring sheets.
//!
//! The scoring sheet is a CSV file whose first column holds the option name and
//! whose remaining columns are criterion names:
//!
//! ```text
//! Opportunity,Market growth rate,Market profitability,...
//! Expand to EU,High,4,...
//! ```

use crate::core::{non_blank_lines, Error, OptionEntry, RawScore, Result};
use crate::framework::Framework;
use crate::io::writers::csv::OPTION_COLUMN;
use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;

/// Parse an option table, rejecting more than `limit` options.
///
/// Rows whose cells are all blank are skipped. Short rows read as blank cells.
/// Columns that name no framework criterion are ignored with a warning, and
/// criteria without a column score as blank.
pub fn parse_option_table<R: Read>(
    reader: R,
    source: &Path,
    framework: &Framework,
    limit: usize,
) -> Result<Vec<OptionEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Err(Error::input(source, "option table has no header row"));
    }
    let criteria: Vec<&str> = headers.iter().skip(1).collect();
    check_columns(&criteria, source, framework)?;

    let mut options = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = index + 2;
        let name = record.get(0).unwrap_or_default();
        if name.is_empty() {
            return Err(Error::input(
                source,
                format!("row {line} has ratings but no option name"),
            ));
        }
        if record.len() > headers.len() {
            return Err(Error::input(
                source,
                format!(
                    "row {line} has {} cells but the header has {}",
                    record.len(),
                    headers.len()
                ),
            ));
        }

        let mut option = OptionEntry::new(name);
        for (column, criterion) in criteria.iter().enumerate() {
            let cell = record.get(column + 1).unwrap_or_default();
            option.set_score(*criterion, RawScore::parse(cell));
        }
        options.push(option);
    }

    check_option_count(options.len(), limit)?;
    warn_on_duplicate_names(&options);
    log::info!("Read {} options from {}", options.len(), source.display());
    Ok(options)
}

/// Read an option table from disk.
pub fn load_option_table(
    path: &Path,
    framework: &Framework,
    limit: usize,
) -> Result<Vec<OptionEntry>> {
    let file = std::fs::File::open(path)
        .map_err(|e| Error::input(path, format!("cannot open option table: {e}")))?;
    parse_option_table(file, path, framework, limit)
}

fn check_columns(criteria: &[&str], source: &Path, framework: &Framework) -> Result<()> {
    let mut seen = HashSet::new();
    for column in criteria {
        if column.is_empty() {
            return Err(Error::input(source, "option table has a blank column header"));
        }
        if !seen.insert(*column) {
            return Err(Error::input(
                source,
                format!("column '{column}' appears more than once"),
            ));
        }
        if !framework.has_criterion(column) {
            log::warn!(
                "Column '{}' in {} is not a criterion of '{}' and will be ignored",
                column,
                source.display(),
                framework.name()
            );
        }
    }
    for criterion in framework.criterion_names() {
        if !seen.contains(criterion) {
            log::warn!(
                "Criterion '{}' has no column in {}; its ratings read as blank",
                criterion,
                source.display()
            );
        }
    }
    Ok(())
}

pub fn check_option_count(count: usize, limit: usize) -> Result<()> {
    if count > limit {
        Err(Error::TooManyOptions { count, limit })
    } else {
        Ok(())
    }
}

fn warn_on_duplicate_names(options: &[OptionEntry]) {
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.name.as_str()) {
            log::warn!("Option '{}' appears more than once", option.name);
        }
    }
}

/// Options named one per line, with no ratings yet.
pub fn options_from_lines(text: &str, limit: usize) -> Result<Vec<OptionEntry>> {
    let options: Vec<OptionEntry> = non_blank_lines(text)
        .into_iter()
        .map(OptionEntry::new)
        .collect();
    check_option_count(options.len(), limit)?;
    Ok(options)
}

/// Write a scoring sheet for `framework`, one row per option.
///
/// Cells hold `prefill` when given, and are blank otherwise.
pub fn write_template<W: Write>(
    writer: W,
    framework: &Framework,
    options: &[OptionEntry],
    prefill: Option<&str>,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let criteria = framework.criterion_names();

    csv_writer.write_record(std::iter::once(OPTION_COLUMN).chain(criteria.iter().copied()))?;
    for option in options {
        let cells = criteria.iter().map(|criterion| match option.raw_score(criterion) {
            RawScore::Blank => prefill.unwrap_or_default().to_string(),
            raw => raw.to_string(),
        });
        csv_writer.write_record(std::iter::once(option.name.clone()).chain(cells))?;
    }
    csv_writer.flush()?;
    Ok(())
}
