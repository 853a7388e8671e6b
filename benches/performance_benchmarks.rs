use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use fitcoach::{health, planner, progress, FitnessLevel, UserProfile, WorkoutType};

/// Performance benchmarks for the coaching rules
///
/// The engine is pure table lookups, so these mainly guard against
/// accidental allocation-heavy regressions in report construction.

fn create_benchmark_profiles(count: usize) -> Vec<UserProfile> {
    (0..count)
        .map(|i| {
            let level = FitnessLevel::ALL[i % FitnessLevel::ALL.len()];
            UserProfile::new(
                format!("User {}", i),
                18 + (i % 60) as u32,
                Decimal::from(50 + (i % 70) as u32),
                Decimal::from(150 + (i % 50) as u32),
                level,
            )
            .unwrap()
            .with_goals(["weight loss", "muscle building", "better sleep"])
            .with_available_time((i % 90) as u32)
        })
        .collect()
}

fn bench_health_analysis(c: &mut Criterion) {
    let analyzer = health::HealthAnalyzer::default();
    let mut group = c.benchmark_group("Health Analysis");

    for &size in &[1, 10, 100, 1000] {
        let profiles = create_benchmark_profiles(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("analyze", size), &profiles, |b, profiles| {
            b.iter(|| {
                for profile in profiles {
                    black_box(analyzer.analyze(profile));
                }
            });
        });
    }

    group.finish();
}

fn bench_workout_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("Workout Planning");

    for level in FitnessLevel::ALL {
        for kind in WorkoutType::ALL {
            group.bench_function(format!("{}_{}", level.label(), kind.label()), |b| {
                b.iter(|| planner::WorkoutPlanner::create_plan(black_box(level), black_box(kind), 45, &[]));
            });
        }
    }

    group.bench_function("from_labels_unknown", |b| {
        b.iter(|| planner::WorkoutPlanner::create_plan_from_labels(black_box("expert"), black_box("yoga"), 30, &[]));
    });

    group.finish();
}

fn bench_progress_tracking(c: &mut Criterion) {
    c.bench_function("progress_analyze", |b| {
        b.iter(|| {
            progress::ProgressTracker::analyze(
                black_box(dec!(79.5)),
                black_box(Some(dec!(80))),
                black_box(5),
                black_box(7),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_health_analysis,
    bench_workout_planning,
    bench_progress_tracking
);
criterion_main!(benches);
