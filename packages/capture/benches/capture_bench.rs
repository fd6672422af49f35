use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stylecopy_capture::{capture, parse, CaptureOptions, NodeId};

fn card_list(count: usize) -> String {
    let mut html = String::from("<ul class=\"grid\">");
    for i in 0..count {
        html.push_str(&format!(
            "<li data-index=\"{i}\"><h3>Item {i}</h3><p>Description for item {i}.</p><a href=\"/items/{i}\">Open</a></li>"
        ));
    }
    html.push_str("</ul>");
    html
}

// Resolves a fixed style per tag so every element contributes declarations
fn resolve(tags: &[String], node: NodeId, property: &str) -> Option<String> {
    let tag = tags.get(node.index())?.as_str();
    let value = match (tag, property) {
        ("ul", "display") => "grid",
        ("ul", "grid-template-columns") => "repeat(3, minmax(0, 1fr))",
        ("ul", "gap") => "16px",
        ("li", "padding") => "16px",
        ("li", "border") => "1px solid rgb(229, 231, 235)",
        ("li", "border-radius") => "8px",
        ("h3", "font-size") => "18px",
        ("h3", "font-weight") => "600",
        ("p", "color") => "rgb(75, 85, 99)",
        ("a", "color") => "rgb(37, 99, 235)",
        _ => return None,
    };
    Some(value.to_string())
}

fn bench_capture(c: &mut Criterion, name: &str, count: usize) {
    let doc = parse(&card_list(count)).unwrap();
    let root = doc.first_root_element().unwrap();
    let tags: Vec<String> = (0..doc.len())
        .map(|index| doc.tag(NodeId(index)).unwrap_or_default().to_string())
        .collect();
    let resolver = |node: NodeId, property: &str| resolve(&tags, node, property);
    let options = CaptureOptions::default();

    c.bench_function(name, |b| {
        b.iter(|| capture(black_box(&doc), root, &resolver, &options))
    });
}

fn capture_small_list(c: &mut Criterion) {
    bench_capture(c, "capture_small_list", 5);
}

fn capture_large_list(c: &mut Criterion) {
    bench_capture(c, "capture_large_list", 200);
}

criterion_group!(benches, capture_small_list, capture_large_list);
criterion_main!(benches);
