use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use numnorm_core::TextNormalizer;
use text_normalizer::{Normalizer, num_to_words_ru, ordinal_to_words_ru};

const SAMPLES: &[(&str, &str)] = &[
    ("plain", "Привет, мир! Сегодня хорошая погода."),
    ("cardinals", "В 2024 году было 42 события и 1,234,567 зрителей."),
    ("currency", "Кофе стоит $3.50, чай ₽120, торт €12.01."),
    ("ordinals", "1-й этаж, 2-я комната, 21-го века, 2000-й год."),
];

fn bench_pipeline(c: &mut Criterion) {
    let normalizer = Normalizer::new();
    let mut group = c.benchmark_group("normalize");

    for (name, text) in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| normalizer.normalize(black_box(text)).unwrap())
        });
    }

    group.finish();
}

fn bench_numerals(c: &mut Criterion) {
    c.bench_function("cardinal_i64_max", |b| {
        b.iter(|| num_to_words_ru(black_box(i64::MAX)))
    });
    c.bench_function("ordinal_2024", |b| {
        b.iter(|| ordinal_to_words_ru(black_box(2024)))
    });
}

criterion_group!(benches, bench_pipeline, bench_numerals);
criterion_main!(benches);
