use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tf_idf_tagger::{PosCategory, Tagger, Vocabulary};

const PARAGRAPHS: [&str; 4] = [
    "Rust is a systems programming language focused on safety, speed, and concurrency. \
     It achieves memory safety without a garbage collector.",
    "The borrow checker validates references at compile time! Lifetimes describe how long \
     references stay valid. Ownership moves values between bindings.",
    "Cargo is the package manager. Cargo downloads dependencies, compiles crates, and runs tests? \
     Crates are published to a public registry.",
    "Presiden meresmikan jembatan baru di Surabaya. Jembatan tersebut menghubungkan dua kota besar. \
     Warga menyambut jembatan itu dengan gembira.",
];

fn build_text(repeat: usize) -> String {
    // vary each copy so sentence deduplication keeps them
    (0..repeat)
        .map(|i| {
            PARAGRAPHS
                .iter()
                .map(|p| format!("{p} section{i} note{}.", i % 7))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn tagging_benchmark(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt().with_max_level(tracing::Level::WARN).try_init();

    let text = build_text(200);
    let english = Tagger::new();

    let mut group = c.benchmark_group("get_tags_en");
    for workers in [1, 2, 4, 0] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.iter(|| english.get_tags_with_workers(&text, 10, workers).unwrap());
        });
    }
    group.finish();

    let mut vocabulary = Vocabulary::new();
    vocabulary
        .insert("jembatan", PosCategory::Noun)
        .insert("meresmikan", PosCategory::Verb)
        .insert("besar", PosCategory::Adjective);
    let mut indonesian = Tagger::new().with_vocabulary(vocabulary);
    indonesian.set_language("id").unwrap();
    c.bench_function("get_tags_id", |b| {
        b.iter(|| indonesian.get_tags(&text, 10).unwrap());
    });
}

criterion_group!(benches, tagging_benchmark);
criterion_main!(benches);
