use criterion::{criterion_group, criterion_main, Criterion};
use routine_planner::models::{DsDetail, ExerciseConfigItem, Measure, RpDetail, SetConfig};
use routine_planner::services::{is_ready_to_submit, TechniqueToggles};
use std::hint::black_box;

/// A heavy but realistic week: many exercises, every technique in use.
fn build_configuration(exercises: usize, sets: usize) -> Vec<ExerciseConfigItem> {
    (0..exercises)
        .map(|i| ExerciseConfigItem {
            exercise_id: i as u64 + 1,
            exercise_name: format!("Exercise {}", i),
            exercise_image: None,
            order_index: i as u32,
            sets_config: (0..sets)
                .map(|_| SetConfig {
                    reps: "10".to_string(),
                    weight: "60".to_string(),
                    rir: "2".to_string(),
                    rp: Some(vec![
                        RpDetail {
                            value: Some(Measure::from("4")),
                            time: Some(Measure::from(15)),
                        };
                        3
                    ]),
                    ds: Some(vec![
                        DsDetail {
                            reps: Some(Measure::from("6")),
                            weight: Some(Measure::from("40")),
                        };
                        2
                    ]),
                    partials: None,
                })
                .collect(),
            notes: String::new(),
        })
        .collect()
}

fn benchmark_validation(c: &mut Criterion) {
    let exercises = build_configuration(12, 6);
    let toggles = TechniqueToggles::derive(&exercises);

    let mut group = c.benchmark_group("configuration_validation");

    group.bench_function("derive_toggles", |b| {
        b.iter(|| TechniqueToggles::derive(black_box(&exercises)))
    });

    group.bench_function("ready_to_submit", |b| {
        b.iter(|| is_ready_to_submit(black_box(&exercises), black_box(&toggles)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_validation);
criterion_main!(benches);
