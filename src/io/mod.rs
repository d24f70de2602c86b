pub mod input;
pub mod output;
pub mod writers;

pub use input::{load_option_table, options_from_lines, parse_option_table, write_template};
pub use output::{create_writer, OutputFormat, OutputWriter, ReportOptions};

use crate::core::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
