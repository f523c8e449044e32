use atfcorpus::{
    atf::Extractor, transformers::TranslationNormalizer, transliteration::Transliteration,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const LINES: [&str; 4] = [
    "5(disz) sila3 i3-gesz",
    "ki lugal-la-ta {d}en-lil2-la2",
    "1(u) 6(disz) erin2 a2 u4 2(u)-sze3",
    "mu an-na-ke4 ($ blank space $) [...] x",
];

pub fn transliteration(c: &mut Criterion) {
    let t = Transliteration::default();
    c.bench_function("normalize_transliteration", |b| {
        b.iter(|| {
            for line in LINES {
                black_box(t.normalize_line(black_box(line)));
            }
        })
    });
}

pub fn translation(c: &mut Criterion) {
    let n = TranslationNormalizer::default();
    let line = "16 labor-troops (at) 2 ban 1 sila each for 20 days 1st time,";
    c.bench_function("normalize_translation", |b| {
        b.iter(|| n.normalize(black_box(line)))
    });
}

pub fn extract(c: &mut Criterion) {
    let atf: String = (0..100)
        .map(|i| {
            format!(
                "&P{:06} = Pub {}\n1. lugal-e\n#tr.en: the king\n2. 1(disz) udu\n#tr.en: 1 sheep\n",
                i, i
            )
        })
        .collect();
    let e = Extractor::default();
    c.bench_function("extract_100_texts", |b| {
        b.iter(|| e.extract_str(black_box(&atf)))
    });
}

criterion_group!(benches, transliteration, translation, extract);
criterion_main!(benches);
