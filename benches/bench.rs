use criterion::{Criterion, black_box, criterion_group, criterion_main};
use falcata::prelude::*;

fn generate_candidates(count: usize) -> Vec<String> {
    let words = [
        "search", "source", "service", "server", "sorted", "special", "spell", "select",
        "station", "storage", "stream", "string", "struct", "signal", "simple", "single",
    ];
    (0..count)
        .map(|i| {
            let base = words[i % words.len()];
            if i % 3 == 0 {
                // Introduce a typo so the metric has real work to do.
                let mut chars: Vec<char> = base.chars().collect();
                let pos = i % chars.len();
                chars[pos] = 'x';
                chars.into_iter().collect()
            } else {
                base.to_string()
            }
        })
        .collect()
}

fn bench_metrics(c: &mut Criterion) {
    let candidates = generate_candidates(200);
    let target = "search";
    let threshold = Threshold::Distance(2);

    let metrics: Vec<Box<dyn DistanceMetric>> = vec![
        Box::new(Levenshtein::new()),
        Box::new(Levenshtein::with_transpositions()),
        Box::new(Hamming::new()),
        Box::new(KeyboardMetric::qwerty()),
    ];

    let mut group = c.benchmark_group("distance_metrics");
    for metric in &metrics {
        group.bench_function(metric.name(), |b| {
            b.iter(|| {
                for candidate in &candidates {
                    let _ = black_box(
                        metric
                            .measure(black_box(target), black_box(candidate), threshold)
                            .unwrap(),
                    );
                }
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let candidates = generate_candidates(1000);
    let searcher = FuzzySearcher::default();

    c.bench_function("fuzzy_search_1000", |b| {
        b.iter(|| {
            let hits = searcher
                .search(black_box(&candidates), black_box("serach"))
                .unwrap();
            black_box(hits)
        })
    });
}

criterion_group!(benches, bench_metrics, bench_search);
criterion_main!(benches);
