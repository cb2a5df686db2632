//! Benchmarks for the conversion pipelines.
//!
//! Run with: cargo bench

use criterion::{criterion_group, criterion_main, Criterion};

use mdshift::{convert_to, strip, Platform};

/// A representative document exercising every construct the pipelines
/// rewrite: headings, emphasis, code, links, images, lists, and quotes.
fn sample_document() -> String {
    let section = "\
# Release 1.4

**Highlights**: a *faster* parser and ~~legacy~~ `new` internals.

See [the changelog](https://example.com/changelog) and
![the graph](https://example.com/graph.png) for details.

```rust
fn convert(input: &str) -> String {
    input.to_owned()
}
```

- escaped literals like \\* survive
- ordered rewrites stay ordered

> ship it
";
    section.repeat(20)
}

fn bench_convert_all_platforms(c: &mut Criterion) {
    let doc = sample_document();
    for platform in Platform::ALL {
        c.bench_function(&format!("convert_{platform}"), |b| {
            b.iter(|| convert_to(platform, &doc));
        });
    }
}

fn bench_strip(c: &mut Criterion) {
    let doc = sample_document();
    c.bench_function("strip", |b| {
        b.iter(|| strip(&doc));
    });
}

fn bench_escape_heavy(c: &mut Criterion) {
    // Worst case for the guard: every other character is escaped.
    let doc = "\\*x\\_y\\#z ".repeat(500);
    c.bench_function("convert_escape_heavy", |b| {
        b.iter(|| convert_to(Platform::WhatsApp, &doc));
    });
}

criterion_group!(
    benches,
    bench_convert_all_platforms,
    bench_strip,
    bench_escape_heavy
);
criterion_main!(benches);
