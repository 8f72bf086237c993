use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PROSE: &str = "According to the announcement at https://example.com/news/2024/launch, \
    the team can be reached at press@example.com or via the community's Matrix room. \
    See also (http://a.example.co.uk/docs#section-2) and ftp://files.example.org/archive.zip. \
    A quick localhost:8080/health check rounds things out. 😀🎉 visit 中国.cn for more.";

const PLAIN_PROSE: &str = "This paragraph has no links at all, just ordinary sentences \
    with punctuation, numbers like 42 and 3.14, emoji like 🎈, and nothing clickable here \
    whatsoever, repeated a few times for length padding purposes only.";

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    group.bench_function("prose_with_links", |b| {
        b.iter(|| hyperlex::tokenize(black_box(PROSE)))
    });
    group.bench_function("plain_prose", |b| {
        b.iter(|| hyperlex::tokenize(black_box(PLAIN_PROSE)))
    });
    group.bench_function("find_only", |b| {
        b.iter(|| hyperlex::find(black_box(PROSE), None))
    });
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let corpus: Vec<&str> = std::iter::repeat(PROSE).take(64).collect();
    let options = hyperlex::Options::default();
    c.bench_function("tokenize_batch_64", |b| {
        b.iter(|| hyperlex::tokenize_batch_with(black_box(&corpus), &options))
    });
}

criterion_group!(benches, bench_tokenize, bench_batch);
criterion_main!(benches);
