//! Ranking of scored options.

use crate::core::{Error, OptionEntry, Result, ScoreBreakdown, ScoreScale};
use crate::framework::Framework;
use crate::scoring::{ScoringEngine, ScoringOptions};
use serde::Serialize;
use std::cmp::Ordering;

/// Options scored and ordered by total score, highest first.
///
/// Equal totals keep their input order, so the earliest option wins a tie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    pub framework: String,
    pub scale: ScoreScale,
    pub components: Vec<String>,
    pub entries: Vec<ScoreBreakdown>,
}

impl ResultSet {
    /// Highest-ranked option.
    pub fn best(&self) -> Result<&ScoreBreakdown> {
        self.entries.first().ok_or(Error::EmptyResultSet)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreBreakdown> {
        self.entries.iter()
    }

    /// `(option, total)` pairs in rank order, for bar charts.
    pub fn chart_rows(&self) -> Vec<(&str, f64)> {
        self.entries
            .iter()
            .map(|e| (e.option_name.as_str(), e.total_score))
            .collect()
    }

    /// Keep only the first `n` entries.
    pub fn truncate(&mut self, n: usize) {
        self.entries.truncate(n);
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ScoreBreakdown;
    type IntoIter = std::slice::Iter<'a, ScoreBreakdown>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl ScoringEngine<'_> {
    /// Score every option, failing on the first bad one, then rank.
    pub fn rank(&self, options: &[OptionEntry]) -> Result<ResultSet> {
        let mut entries = options
            .iter()
            .map(|option| self.score(option))
            .collect::<Result<Vec<_>>>()?;

        sort_by_total_desc(&mut entries);
        log::info!(
            "Ranked {} options against '{}'",
            entries.len(),
            self.framework().name()
        );

        Ok(ResultSet {
            framework: self.framework().name().to_string(),
            scale: self.framework().score_scale(),
            components: self
                .framework()
                .component_names()
                .into_iter()
                .map(String::from)
                .collect(),
            entries,
        })
    }
}

// Stable sort: ties stay in input order, and -0.0 ties with 0.0
pub fn sort_by_total_desc(entries: &mut [ScoreBreakdown]) {
    entries.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
    });
}

/// Rank `options` with default scoring options.
pub fn rank(options: &[OptionEntry], framework: &Framework) -> Result<ResultSet> {
    ScoringEngine::new(framework, ScoringOptions::default()).rank(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{Category, Criterion, WeightCheck};
    use crate::rating::RatingScale;
    use pretty_assertions::assert_eq;

    fn two_category() -> Framework {
        Framework::categorized(
            "test",
            RatingScale::six_level(),
            vec![
                Category::new("A", 0.5, vec![Criterion::new("a1", 1.0)]),
                Category::new("B", 0.5, vec![Criterion::new("b1", 1.0)]),
            ],
            WeightCheck::Strict,
        )
        .unwrap()
    }

    fn option(name: &str, a1: &str, b1: &str) -> OptionEntry {
        OptionEntry::new(name).with_score("a1", a1).with_score("b1", b1)
    }

    #[test]
    fn test_rank_orders_descending_and_picks_best() {
        let options = vec![
            option("Y", "", "Very High"),
            option("X", "High", "Low"),
            option("W", "Very Low", "Very Low"),
        ];
        let results = rank(&options, &two_category()).unwrap();

        let order: Vec<&str> = results.iter().map(|e| e.option_name.as_str()).collect();
        assert_eq!(order, vec!["X", "Y", "W"]);
        assert_eq!(results.best().unwrap().option_name, "X");
        assert_eq!(results.components, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let options = vec![
            option("first", "High", "Low"),
            option("second", "Low", "High"),
            option("top", "Very High", "Very High"),
            option("third", "Medium", "Medium-high"),
        ];
        let results = rank(&options, &two_category()).unwrap();
        let order: Vec<&str> = results.iter().map(|e| e.option_name.as_str()).collect();
        assert_eq!(order, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_negative_zero_ties_with_blank() {
        let framework = Framework::flat(
            "flat",
            RatingScale::numeric(1, 5),
            vec![Criterion::new("Cost", 1.0)],
            WeightCheck::Strict,
        )
        .unwrap();
        let options = vec![
            OptionEntry::new("first").with_score("Cost", "-0"),
            OptionEntry::new("second").with_score("Cost", ""),
            OptionEntry::new("third").with_score("Cost", -0.0),
        ];
        let results = rank(&options, &framework).unwrap();
        let order: Vec<&str> = results.iter().map(|e| e.option_name.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_best_on_empty_fails() {
        let results = rank(&[], &two_category()).unwrap();
        assert!(results.is_empty());
        assert!(matches!(results.best(), Err(Error::EmptyResultSet)));
    }

    #[test]
    fn test_rank_fails_fast_on_bad_option() {
        let options = vec![option("ok", "High", "Low"), option("bad", "??", "Low")];
        let err = rank(&options, &two_category()).unwrap_err();
        assert!(matches!(err, Error::InvalidRating { ref option, .. } if option == "bad"));
    }

    #[test]
    fn test_chart_rows_follow_rank() {
        let options = vec![option("Y", "", "Very High"), option("X", "High", "Low")];
        let results = rank(&options, &two_category()).unwrap();
        assert_eq!(results.chart_rows(), vec![("X", 3.5), ("Y", 3.0)]);
    }
}
