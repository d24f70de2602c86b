//! Benchmark for scoring and ranking a full option table against the built-in framework.

use assessmap::framework::presets::decision_assessment;
use assessmap::{OptionEntry, ScoringEngine, ScoringOptions};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const LABELS: [&str; 6] = ["Very Low", "Low", "Medium", "Medium-high", "High", "Very High"];

fn create_options(count: usize, criteria: &[&str]) -> Vec<OptionEntry> {
    (0..count)
        .map(|i| {
            criteria
                .iter()
                .enumerate()
                .fold(OptionEntry::new(format!("Option {i}")), |option, (j, c)| {
                    option.with_score(*c, LABELS[(i + j) % LABELS.len()])
                })
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let framework = decision_assessment().expect("built-in framework is valid");
    let criteria = framework.criterion_names();
    let engine = ScoringEngine::new(&framework, ScoringOptions::default());

    let mut group = c.benchmark_group("rank");
    for count in [1usize, 5, 20] {
        let options = create_options(count, &criteria);
        group.bench_with_input(BenchmarkId::from_parameter(count), &options, |b, options| {
            b.iter(|| engine.rank(black_box(options)).expect("ratings are valid"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
