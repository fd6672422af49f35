use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stylecopy_parser::{parse, serialize};

fn card_list(count: usize) -> String {
    let mut source = String::from("<ul class=\"cards\">");
    for i in 0..count {
        source.push_str(&format!(
            "<li class=\"card\" data-index=\"{i}\"><h3>Card {i}</h3><p>Some &amp; text</p><img src=\"{i}.png\"></li>"
        ));
    }
    source.push_str("</ul>");
    source
}

fn parse_small_fragment(c: &mut Criterion) {
    let source = card_list(5);
    c.bench_function("parse_small_fragment", |b| {
        b.iter(|| parse(black_box(&source)))
    });
}

fn parse_large_fragment(c: &mut Criterion) {
    let source = card_list(500);
    c.bench_function("parse_large_fragment", |b| {
        b.iter(|| parse(black_box(&source)))
    });
}

fn serialize_large_fragment(c: &mut Criterion) {
    let source = card_list(500);
    let doc = parse(&source).expect("Failed to parse");
    let root = doc.first_root_element().expect("root");
    c.bench_function("serialize_large_fragment", |b| {
        b.iter(|| serialize(black_box(&doc), root))
    });
}

criterion_group!(
    benches,
    parse_small_fragment,
    parse_large_fragment,
    serialize_large_fragment
);
criterion_main!(benches);
