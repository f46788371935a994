use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scorecast::config::{MODEL_FILE_NAME, PREPROCESSOR_FILE_NAME};
use scorecast::preprocessing::student_preprocessor;
use scorecast::prelude::*;
use std::path::Path;

const GENDERS: [&str; 2] = ["female", "male"];
const GROUPS: [&str; 5] = ["group A", "group B", "group C", "group D", "group E"];

fn create_records(n_rows: usize) -> Vec<StudentRecord> {
    (0..n_rows)
        .map(|i| {
            StudentRecord::new(
                GENDERS[i % GENDERS.len()],
                GROUPS[i % GROUPS.len()],
                "some college",
                "standard",
                if i % 3 == 0 { "completed" } else { "none" },
                40 + (i % 60) as i64,
                35 + (i % 65) as i64,
            )
        })
        .collect()
}

fn write_artifacts(dir: &Path) {
    let preprocessor = student_preprocessor([(69.2, 14.6), (68.1, 15.2)]);
    let coefficients: Vec<f64> = (0..preprocessor.n_features_out())
        .map(|i| 1.0 / (i + 1) as f64)
        .collect();
    save_object(dir.join(PREPROCESSOR_FILE_NAME), &preprocessor).unwrap();
    save_object(dir.join(MODEL_FILE_NAME), &LinearRegression::new(coefficients, 66.0)).unwrap();
}

fn bench_prediction(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(dir.path());

    let mut group = c.benchmark_group("prediction");

    for policy in [ArtifactPolicy::ReloadEveryCall, ArtifactPolicy::CacheUntilInvalidated] {
        let config = PipelineConfig::new()
            .with_artifact_dir(dir.path())
            .with_artifact_policy(policy);
        let pipeline = PredictPipeline::with_config(config);

        for n_rows in [1usize, 100, 10000].iter() {
            let table = build_table_from_records(&create_records(*n_rows)).unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", policy), n_rows),
                &table,
                |b, table| b.iter(|| pipeline.predict(black_box(table)).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_build_table(c: &mut Criterion) {
    let records = create_records(1000);

    c.bench_function("build_table_1000", |b| {
        b.iter(|| build_table_from_records(black_box(&records)).unwrap())
    });
}

criterion_group!(benches, bench_prediction, bench_build_table);
criterion_main!(benches);
