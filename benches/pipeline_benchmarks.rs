use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mention_graph::{Corpus, EntityCatalog, MentionExtractor, Pipeline, PipelineConfig};

const WORDS: [&str; 8] = ["portfolio", "programs", "federal", "support", "deliver", "with", "the", "and"];

fn identifier(i: usize) -> String {
    format!("ministry-of-department-{}-affairs-mandate-letter", i)
}

/// `size` documents, each naming a handful of other departments between filler words
fn synthetic_corpus(size: usize) -> Corpus {
    (0..size)
        .map(|i| {
            let mut text = String::new();
            for line in 0..20 {
                for w in 0..12 {
                    text.push_str(WORDS[(i + line + w) % WORDS.len()]);
                    text.push(' ');
                }
                let other = (i * 7 + line * 3) % size;
                text.push_str(&format!("Department {} Affairs.\n", other));
            }
            text.push_str("This is a shared priority for Department 0 Affairs.\n");
            (identifier(i), text)
        })
        .collect()
}

fn config(parallel: bool) -> PipelineConfig {
    PipelineConfig {
        boilerplate: vec!["shared priority".to_string()],
        parallel,
        ..PipelineConfig::default()
    }
}

/// Benchmark mention scanning of a single document
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for size in [10, 100, 1000].iter() {
        let corpus = synthetic_corpus(*size);
        let catalog = EntityCatalog::from_identifiers(corpus.ids(), &config(false).identifiers).unwrap();
        let extractor = MentionExtractor::new(&catalog).unwrap();
        let (_, text) = corpus.iter().next().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(extractor.mentions(text).count()));
        });
    }
    group.finish();
}

/// Benchmark end-to-end graph construction
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for size in [10, 100, 1000].iter() {
        let corpus = synthetic_corpus(*size);
        for parallel in [false, true] {
            let pipeline = Pipeline::from_corpus(config(parallel), &corpus).unwrap();
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, size), size, |b, _| {
                b.iter(|| criterion::black_box(pipeline.run(&corpus).unwrap()));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_extraction, bench_pipeline);
criterion_main!(benches);
