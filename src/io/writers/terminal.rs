use crate::core::{Result, ScoreScale};
use crate::io::output::{OutputWriter, ReportOptions};
use crate::ranking::ResultSet;
use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;

/// Ranking table, a horizontal bar chart of totals, and the best option.
pub struct TerminalWriter<W: Write> {
    writer: W,
    options: ReportOptions,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self { writer, options }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &ResultSet) -> Result<()> {
        let formatter = self.options.formatting.formatter();

        writeln!(self.writer, "{}", formatter.header(&results.framework))?;
        writeln!(self.writer, "{}", "=".repeat(results.framework.chars().count()))?;

        if results.is_empty() {
            writeln!(self.writer, "{}", formatter.dim("No options to assess."))?;
            return Ok(());
        }

        writeln!(self.writer, "{}", self.ranking_table(results))?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", formatter.bold("Total Score"))?;
        let name_width = results
            .iter()
            .map(|e| e.option_name.chars().count())
            .max()
            .unwrap_or(0);
        for (name, cells, total) in bar_rows(results, self.options.chart_width) {
            writeln!(
                self.writer,
                "{:<width$}  {} {}",
                name,
                formatter.bar(cells),
                self.options.fmt_score(total),
                width = name_width
            )?;
        }
        writeln!(self.writer)?;

        if results.scale == ScoreScale::Unbounded {
            writeln!(
                self.writer,
                "{}",
                formatter.dim("Totals are unnormalized weighted sums of slider-weighted criteria.")
            )?;
        }

        let best = results.best()?;
        writeln!(
            self.writer,
            "Best option: {} ({})",
            formatter.success(&best.option_name),
            self.options.fmt_score(best.total_score)
        )?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn ranking_table(&self, results: &ResultSet) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.options.formatting.unicode {
                presets::UTF8_FULL
            } else {
                presets::ASCII_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .force_no_tty();

        let mut header = vec![Cell::new("Rank"), Cell::new("Opportunity")];
        header.extend(results.components.iter().map(Cell::new));
        header.push(Cell::new("Total Score"));
        table.set_header(header);

        for (rank, entry) in results.iter().enumerate() {
            let mut row = vec![
                Cell::new(rank + 1).set_alignment(CellAlignment::Right),
                Cell::new(&entry.option_name),
            ];
            for name in &results.components {
                let weighted = entry.component(name).map_or(0.0, |c| c.weighted);
                row.push(
                    Cell::new(self.options.fmt_score(weighted)).set_alignment(CellAlignment::Right),
                );
            }
            row.push(
                Cell::new(self.options.fmt_score(entry.total_score))
                    .set_alignment(CellAlignment::Right),
            );
            table.add_row(row);
        }
        table
    }
}

/// Bar lengths scaled so the highest positive total spans `width` cells.
pub fn bar_rows(results: &ResultSet, width: usize) -> Vec<(&str, usize, f64)> {
    let max = results
        .iter()
        .map(|e| e.total_score)
        .fold(0.0_f64, f64::max);

    results
        .chart_rows()
        .into_iter()
        .map(|(name, total)| {
            let cells = if max > 0.0 && total > 0.0 {
                ((total / max) * width as f64).round() as usize
            } else {
                0
            };
            (name, cells, total)
        })
        .collect()
}
