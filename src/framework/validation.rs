use super::{Category, Criterion, Framework, FrameworkLayout};
use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Allowed drift when checking that weights sum to 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// How weight problems are treated when a framework is built.
///
/// Structural problems (no criteria, blank or duplicate names, non-finite
/// weights, bad scale) are always errors. Only weight ranges and sums are
/// subject to this policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightCheck {
    #[default]
    Strict,
    /// Log weight problems and keep the weights as given
    Lenient,
}

pub(super) fn validate(framework: &Framework, check: WeightCheck) -> Result<()> {
    if framework.name.trim().is_empty() {
        return Err(Error::framework("framework name is blank"));
    }
    framework.scale.validate().map_err(Error::framework)?;
    validate_structure(&framework.layout)?;

    let weight_problems = collect_weight_problems(&framework.layout);
    if weight_problems.is_empty() {
        return Ok(());
    }
    match check {
        WeightCheck::Strict => Err(Error::framework(weight_problems.join("; "))),
        WeightCheck::Lenient => {
            for problem in &weight_problems {
                log::warn!("Framework '{}': {}", framework.name, problem);
            }
            Ok(())
        }
    }
}

fn validate_structure(layout: &FrameworkLayout) -> Result<()> {
    let mut seen = HashSet::new();
    match layout {
        FrameworkLayout::Categories(categories) => {
            if categories.is_empty() {
                return Err(Error::framework("framework has no categories"));
            }
            let mut category_names = HashSet::new();
            for category in categories {
                check_name(&category.name, "category")?;
                check_finite_weight(category.weight, &category.name)?;
                if !category_names.insert(category.name.as_str()) {
                    return Err(Error::framework(format!(
                        "duplicate category '{}'",
                        category.name
                    )));
                }
                if category.subcriteria.is_empty() {
                    return Err(Error::framework(format!(
                        "category '{}' has no sub-criteria",
                        category.name
                    )));
                }
                for sub in &category.subcriteria {
                    check_criterion_name(sub, &mut seen)?;
                }
            }
        }
        FrameworkLayout::Criteria(criteria) => {
            if criteria.is_empty() {
                return Err(Error::framework("framework has no criteria"));
            }
            for criterion in criteria {
                check_criterion_name(criterion, &mut seen)?;
            }
        }
    }
    Ok(())
}

fn check_name(name: &str, what: &str) -> Result<()> {
    if name.trim().is_empty() {
        Err(Error::framework(format!("{what} name is blank")))
    } else {
        Ok(())
    }
}

// NaN or infinite weights poison every total, whatever the policy.
fn check_finite_weight(weight: f64, name: &str) -> Result<()> {
    if weight.is_finite() {
        Ok(())
    } else {
        Err(Error::framework(format!("'{name}' weight {weight} is not a finite number")))
    }
}

// Ratings are keyed by criterion name, so names must be unique framework-wide.
fn check_criterion_name<'a>(criterion: &'a Criterion, seen: &mut HashSet<&'a str>) -> Result<()> {
    check_name(&criterion.name, "criterion")?;
    check_finite_weight(criterion.weight, &criterion.name)?;
    if seen.insert(criterion.name.as_str()) {
        Ok(())
    } else {
        Err(Error::framework(format!(
            "duplicate criterion '{}'",
            criterion.name
        )))
    }
}

pub(super) fn collect_weight_problems(layout: &FrameworkLayout) -> Vec<String> {
    match layout {
        FrameworkLayout::Categories(categories) => category_weight_problems(categories),
        FrameworkLayout::Criteria(criteria) => criteria
            .iter()
            .filter_map(|c| validate_slider_weight(c.weight, &c.name).err())
            .collect(),
    }
}

fn category_weight_problems(categories: &[Category]) -> Vec<String> {
    let mut problems = Vec::new();
    for category in categories {
        if let Err(e) = validate_unit_weight(category.weight, &category.name) {
            problems.push(e);
        }
        for sub in &category.subcriteria {
            if let Err(e) = validate_unit_weight(sub.weight, &sub.name) {
                problems.push(e);
            }
        }
        let sub_weights: Vec<f64> = category.subcriteria.iter().map(|s| s.weight).collect();
        let what = format!("sub-criteria of '{}'", category.name);
        if let Err(e) = validate_weights_sum(&sub_weights, &what) {
            problems.push(e);
        }
    }
    let category_weights: Vec<f64> = categories.iter().map(|c| c.weight).collect();
    if let Err(e) = validate_weights_sum(&category_weights, "category weights") {
        problems.push(e);
    }
    problems
}

// Pure function: Check if a weight is in (0, 1]
pub fn is_valid_unit_weight(weight: f64) -> bool {
    weight > 0.0 && weight <= 1.0
}

pub fn validate_unit_weight(weight: f64, name: &str) -> std::result::Result<(), String> {
    if is_valid_unit_weight(weight) {
        Ok(())
    } else {
        Err(format!("'{name}' weight {weight} must be in (0.0, 1.0]"))
    }
}

// Pure function: Flat criteria take whole slider values 1-10
pub fn validate_slider_weight(weight: f64, name: &str) -> std::result::Result<(), String> {
    if (1.0..=10.0).contains(&weight) && weight.fract() == 0.0 {
        Ok(())
    } else {
        Err(format!("'{name}' weight {weight} must be a whole number from 1 to 10"))
    }
}

pub fn validate_weights_sum(weights: &[f64], what: &str) -> std::result::Result<(), String> {
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        Err(format!("{what} must sum to 1.0, but sum to {sum:.3}"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::RatingScale;

    fn categories(a_weight: f64, a1_weight: f64) -> Vec<Category> {
        vec![
            Category::new("A", a_weight, vec![Criterion::new("a1", a1_weight)]),
            Category::new("B", 0.5, vec![Criterion::new("b1", 1.0)]),
        ]
    }

    fn build(layout: FrameworkLayout, check: WeightCheck) -> Result<Framework> {
        Framework::new("test", RatingScale::six_level(), layout, check)
    }

    #[test]
    fn test_valid_weights_pass() {
        let layout = FrameworkLayout::Categories(categories(0.5, 1.0));
        assert!(build(layout, WeightCheck::Strict).is_ok());
    }

    #[test]
    fn test_sub_weights_must_sum_to_one() {
        let err = build(FrameworkLayout::Categories(categories(0.5, 0.8)), WeightCheck::Strict)
            .unwrap_err();
        assert!(err.to_string().contains("sub-criteria of 'A'"));
    }

    #[test]
    fn test_category_weights_must_sum_to_one() {
        let err = build(FrameworkLayout::Categories(categories(0.4, 1.0)), WeightCheck::Strict)
            .unwrap_err();
        assert!(err.to_string().contains("category weights"));
    }

    #[test]
    fn test_lenient_keeps_bad_weights() {
        let layout = FrameworkLayout::Categories(categories(0.4, 0.8));
        let framework = build(layout, WeightCheck::Lenient).unwrap();
        assert_eq!(framework.criteria()[0].weight, 0.8);
    }

    #[test]
    fn test_structure_errors_ignore_policy() {
        let duplicate = vec![
            Category::new("A", 0.5, vec![Criterion::new("x", 1.0)]),
            Category::new("B", 0.5, vec![Criterion::new("x", 1.0)]),
        ];
        assert!(build(FrameworkLayout::Categories(duplicate), WeightCheck::Lenient).is_err());
        assert!(build(FrameworkLayout::Categories(vec![]), WeightCheck::Lenient).is_err());
        assert!(build(FrameworkLayout::Criteria(vec![]), WeightCheck::Lenient).is_err());
        let empty_category = vec![Category::new("A", 1.0, vec![])];
        assert!(build(FrameworkLayout::Categories(empty_category), WeightCheck::Lenient).is_err());
        let blank = vec![Criterion::new("  ", 3.0)];
        assert!(build(FrameworkLayout::Criteria(blank), WeightCheck::Lenient).is_err());
    }

    #[test]
    fn test_non_finite_weights_rejected_even_when_lenient() {
        let nan_category = FrameworkLayout::Categories(categories(f64::NAN, 1.0));
        assert!(matches!(
            build(nan_category, WeightCheck::Lenient),
            Err(Error::InvalidFramework(_))
        ));
        let inf_sub = FrameworkLayout::Categories(categories(0.5, f64::INFINITY));
        assert!(build(inf_sub, WeightCheck::Lenient).is_err());
        let nan_flat = FrameworkLayout::Criteria(vec![Criterion::new("Cost", f64::NAN)]);
        assert!(build(nan_flat, WeightCheck::Lenient).is_err());
    }

    #[test]
    fn test_slider_weights() {
        assert!(validate_slider_weight(1.0, "x").is_ok());
        assert!(validate_slider_weight(10.0, "x").is_ok());
        assert!(validate_slider_weight(0.0, "x").is_err());
        assert!(validate_slider_weight(11.0, "x").is_err());
        assert!(validate_slider_weight(2.5, "x").is_err());

        let flat = vec![Criterion::new("Cost", 12.0)];
        assert!(build(FrameworkLayout::Criteria(flat.clone()), WeightCheck::Strict).is_err());
        assert!(build(FrameworkLayout::Criteria(flat), WeightCheck::Lenient).is_ok());
    }

    #[test]
    fn test_unit_weight_bounds() {
        assert!(!is_valid_unit_weight(0.0));
        assert!(is_valid_unit_weight(1.0));
        assert!(!is_valid_unit_weight(1.01));
    }
}
