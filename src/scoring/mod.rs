//! Weighted scoring of a single option.
//!
//! Category frameworks compute, per category, the weighted sum of the
//! normalized sub-criterion ratings, then weight that subtotal by the category
//! weight. Flat frameworks weight each normalized rating directly. Values keep
//! full precision; rounding is left to the writers.

use crate::core::{ComponentScore, Error, OptionEntry, Result, ScoreBreakdown};
use crate::framework::{Criterion, Framework, FrameworkLayout};
use crate::rating::{normalize, MissingPolicy};
use serde::{Deserialize, Serialize};

/// Knobs that change how raw ratings are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOptions {
    #[serde(default)]
    pub on_missing: MissingPolicy,
}

pub struct ScoringEngine<'a> {
    framework: &'a Framework,
    options: ScoringOptions,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(framework: &'a Framework, options: ScoringOptions) -> Self {
        Self { framework, options }
    }

    pub fn framework(&self) -> &Framework {
        self.framework
    }

    /// Score one option. Any unreadable rating fails the whole option.
    pub fn score(&self, option: &OptionEntry) -> Result<ScoreBreakdown> {
        self.log_unknown_criteria(option);

        let components = match self.framework.layout() {
            FrameworkLayout::Categories(categories) => categories
                .iter()
                .map(|category| {
                    let subtotal = self.weighted_sum(option, &category.subcriteria)?;
                    Ok(ComponentScore {
                        name: category.name.clone(),
                        subtotal,
                        weighted: subtotal * category.weight,
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            FrameworkLayout::Criteria(criteria) => criteria
                .iter()
                .map(|criterion| {
                    let rating = self.rating(option, criterion)?;
                    Ok(ComponentScore {
                        name: criterion.name.clone(),
                        subtotal: rating,
                        weighted: rating * criterion.weight,
                    })
                })
                .collect::<Result<Vec<_>>>()?,
        };

        let total_score = components.iter().map(|c| c.weighted).sum();
        log::trace!("Scored '{}': {:.4}", option.name, total_score);

        Ok(ScoreBreakdown {
            option_name: option.name.clone(),
            components,
            total_score,
        })
    }

    fn weighted_sum(&self, option: &OptionEntry, criteria: &[Criterion]) -> Result<f64> {
        criteria.iter().try_fold(0.0, |acc, criterion| {
            Ok(acc + self.rating(option, criterion)? * criterion.weight)
        })
    }

    fn rating(&self, option: &OptionEntry, criterion: &Criterion) -> Result<f64> {
        normalize(
            option.raw_score(&criterion.name),
            self.framework.scale(),
            self.options.on_missing,
        )
        .map_err(|source| Error::invalid_rating(&option.name, &criterion.name, source))
    }

    fn log_unknown_criteria(&self, option: &OptionEntry) {
        option
            .raw_scores
            .keys()
            .filter(|name| !self.framework.has_criterion(name))
            .for_each(|name| {
                log::debug!(
                    "Ignoring rating for unknown criterion '{}' on option '{}'",
                    name,
                    option.name
                )
            });
    }
}

/// Score `option` with default options (blank ratings count as 0).
pub fn score(option: &OptionEntry, framework: &Framework) -> Result<ScoreBreakdown> {
    ScoringEngine::new(framework, ScoringOptions::default()).score(option)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RatingError;
    use crate::framework::{Category, WeightCheck};
    use crate::rating::RatingScale;

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

    #[test]
    fn test_two_level_weighting() {
        let option = OptionEntry::new("X")
            .with_score("a1", "High")
            .with_score("b1", "Low");
        let breakdown = score(&option, &two_category()).unwrap();

        assert_eq!(breakdown.component("A").unwrap().weighted, 2.5);
        assert_eq!(breakdown.component("B").unwrap().weighted, 1.0);
        assert_eq!(
            breakdown.category_scores(),
            std::collections::BTreeMap::from([("A", 2.5), ("B", 1.0)])
        );
        assert_eq!(breakdown.total_score, 3.5);
    }

    #[test]
    fn test_blank_counts_as_zero() {
        let option = OptionEntry::new("Y")
            .with_score("a1", "")
            .with_score("b1", "Very High");
        let breakdown = score(&option, &two_category()).unwrap();

        assert_eq!(breakdown.component("A").unwrap().weighted, 0.0);
        assert_eq!(breakdown.component("B").unwrap().weighted, 3.0);
        assert_eq!(breakdown.total_score, 3.0);
    }

    #[test]
    fn test_blank_rejected_under_reject_policy() {
        let framework = two_category();
        let engine = ScoringEngine::new(
            &framework,
            ScoringOptions {
                on_missing: MissingPolicy::Reject,
            },
        );
        let option = OptionEntry::new("Y").with_score("a1", "High");

        match engine.score(&option) {
            Err(Error::InvalidRating {
                option,
                criterion,
                source: RatingError::Missing,
            }) => {
                assert_eq!(option, "Y");
                assert_eq!(criterion, "b1");
            }
            other => panic!("expected missing rating, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_cell_fails_whole_option() {
        let option = OptionEntry::new("Z")
            .with_score("a1", "banana")
            .with_score("b1", "High");
        let err = score(&option, &two_category()).unwrap_err();
        assert!(matches!(err, Error::InvalidRating { ref criterion, .. } if criterion == "a1"));
    }

    #[test]
    fn test_category_subtotal_uses_sub_weights() {
        let framework = Framework::categorized(
            "weights",
            RatingScale::numeric(1, 5),
            vec![
                Category::new(
                    "Cost",
                    0.4,
                    vec![Criterion::new("License", 0.7), Criterion::new("Support", 0.3)],
                ),
                Category::new("Fit", 0.6, vec![Criterion::new("Features", 1.0)]),
            ],
            WeightCheck::Strict,
        )
        .unwrap();
        let option = OptionEntry::new("V")
            .with_score("License", 5.0)
            .with_score("Support", 1.0)
            .with_score("Features", "4");

        let breakdown = score(&option, &framework).unwrap();
        let cost = breakdown.component("Cost").unwrap();
        assert!((cost.subtotal - 3.8).abs() < 1e-12);
        assert!((cost.weighted - 1.52).abs() < 1e-12);
        assert!((breakdown.total_score - (1.52 + 2.4)).abs() < 1e-12);
    }

    #[test]
    fn test_flat_weighting_is_unbounded() {
        let framework = Framework::flat(
            "flat",
            RatingScale::numeric(1, 5),
            vec![Criterion::new("Cost", 8.0), Criterion::new("Speed", 3.0)],
            WeightCheck::Strict,
        )
        .unwrap();
        let option = OptionEntry::new("F")
            .with_score("Cost", "4")
            .with_score("Speed", "5");

        let breakdown = score(&option, &framework).unwrap();
        assert_eq!(breakdown.component("Cost").unwrap().weighted, 32.0);
        assert_eq!(breakdown.component("Speed").unwrap().subtotal, 5.0);
        assert_eq!(breakdown.total_score, 47.0);
    }

    #[test]
    fn test_unknown_criteria_are_ignored() {
        let option = OptionEntry::new("X")
            .with_score("a1", "High")
            .with_score("b1", "Low")
            .with_score("not-a-criterion", "banana");
        assert_eq!(score(&option, &two_category()).unwrap().total_score, 3.5);
    }

    #[test]
    fn test_out_of_range_numbers_propagate() {
        let option = OptionEntry::new("X")
            .with_score("a1", "99")
            .with_score("b1", "0");
        assert_eq!(score(&option, &two_category()).unwrap().total_score, 49.5);
    }
}
