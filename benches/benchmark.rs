use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resume_ranker::{Document, Ranker, RankerConfig, TfIdfVectorizer};

const SKILLS: &[&str] = &[
    "python", "rust", "java", "kotlin", "go", "sql", "postgresql", "kubernetes", "docker",
    "terraform", "react", "typescript", "machine", "learning", "data-driven", "backend",
    "frontend", "cloud", "aws", "azure", "spark", "kafka", "graphql", "microservices",
];

// deterministic synthetic documents
fn synth_docs(prefix: &str, count: usize, len: usize, seed: u32) -> Vec<Document> {
    let mut state = seed;
    (0..count)
        .map(|i| {
            let words: Vec<&str> = (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    SKILLS[state as usize % SKILLS.len()]
                })
                .collect();
            Document::new(format!("{prefix}{i}.txt"), words.join(" "))
        })
        .collect()
}

fn ranking_benchmark(c: &mut Criterion) {
    let candidates = synth_docs("cv", 500, 300, 0x1234_5678);
    let requirements = synth_docs("job", 20, 120, 0x9abc_def0);
    let texts: Vec<&str> = candidates
        .iter()
        .chain(requirements.iter())
        .map(|d| d.text.as_str())
        .collect();

    c.bench_function("fit_transform", |b| {
        let vectorizer: TfIdfVectorizer = TfIdfVectorizer::default();
        b.iter(|| vectorizer.fit_transform(black_box(&texts)))
    });

    c.bench_function("rank_parallel", |b| {
        let ranker = Ranker::default();
        b.iter(|| ranker.rank(black_box(&candidates), black_box(&requirements)))
    });

    c.bench_function("rank_sequential", |b| {
        let ranker = Ranker::new(RankerConfig {
            parallel: false,
            ..Default::default()
        });
        b.iter(|| ranker.rank(black_box(&candidates), black_box(&requirements)))
    });
}

criterion_group!(benches, ranking_benchmark);
criterion_main!(benches);
