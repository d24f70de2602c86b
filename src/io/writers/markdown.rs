use crate::core::{Result, ScoreScale};
use crate::io::output::{OutputWriter, ReportOptions};
use crate::ranking::ResultSet;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
    options: ReportOptions,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self { writer, options }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &ResultSet) -> Result<()> {
        self.write_header(results)?;
        self.write_ranking(results)?;
        self.write_best(results)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, results: &ResultSet) -> Result<()> {
        writeln!(self.writer, "# {}", results.framework)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Options assessed: {}", results.len())?;
        if results.scale == ScoreScale::Unbounded {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "> Totals are unnormalized weighted sums of independently weighted criteria."
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_ranking(&mut self, results: &ResultSet) -> Result<()> {
        if results.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Ranking")?;
        writeln!(self.writer)?;

        let mut header = String::from("| Rank | Opportunity |");
        let mut divider = String::from("|------|-------------|");
        for name in &results.components {
            header.push_str(&format!(" {} |", escape_cell(name)));
            divider.push_str(&format!("{}|", "-".repeat(name.len().max(3) + 2)));
        }
        header.push_str(" Total Score |");
        divider.push_str("-------------|");
        writeln!(self.writer, "{header}")?;
        writeln!(self.writer, "{divider}")?;

        for (rank, entry) in results.iter().enumerate() {
            let mut row = format!("| {} | {} |", rank + 1, escape_cell(&entry.option_name));
            for name in &results.components {
                let weighted = entry.component(name).map_or(0.0, |c| c.weighted);
                row.push_str(&format!(" {} |", self.options.fmt_score(weighted)));
            }
            row.push_str(&format!(" {} |", self.options.fmt_score(entry.total_score)));
            writeln!(self.writer, "{row}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_best(&mut self, results: &ResultSet) -> Result<()> {
        if let Ok(best) = results.best() {
            writeln!(
                self.writer,
                "**Best option:** {} ({})",
                escape_cell(&best.option_name),
                self.options.fmt_score(best.total_score)
            )?;
        }
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionEntry;
    use crate::framework::{Criterion, Framework, WeightCheck};
    use crate::rating::RatingScale;
    use crate::ranking::rank;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_flat_report() {
        let framework = Framework::flat(
            "Laptops",
            RatingScale::numeric(1, 5),
            vec![Criterion::new("Price", 8.0), Criterion::new("Battery", 2.0)],
            WeightCheck::Strict,
        )
        .unwrap();
        let options = vec![
            OptionEntry::new("Model A")
                .with_score("Price", "3")
                .with_score("Battery", "5"),
            OptionEntry::new("Model|B")
                .with_score("Price", "4")
                .with_score("Battery", "3"),
        ];
        let results = rank(&options, &framework).unwrap();

        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer, ReportOptions::default())
            .write_results(&results)
            .unwrap();

        let expected = indoc! {r#"
            # Laptops

            Options assessed: 2

            > Totals are unnormalized weighted sums of independently weighted criteria.

            ## Ranking

            | Rank | Opportunity | Price | Battery | Total Score |
            |------|-------------|-------|---------|-------------|
            | 1 | Model\|B | 32.00 | 6.00 | 38.00 |
            | 2 | Model A | 24.00 | 10.00 | 34.00 |

            **Best option:** Model\|B (38.00)
        "#};
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }
}
