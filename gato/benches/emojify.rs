// ABOUTME: Benchmark for the emoji scanner over prose, token-heavy and colon-heavy lines
// ABOUTME: Uses a temporary glyph directory so resolved tokens hit the filesystem as in real use

use criterion::{criterion_group, criterion_main, Criterion};
use gato::emoji::{Emojifier, GlyphDirectory};
use gato::image_protocols::{KittyProtocol, Placement};
use std::hint::black_box;
use tempfile::TempDir;

const PROSE: &str = "The quick brown fox jumps over the lazy dog, and then it naps in the sun for a while.";
const TOKENS: &str = "ship it :rocket: :tada: looks good :thumbsup: but :missing: is not :here:";
const COLONS: &str = "time 10:30: ratio 3:2: note: see below :: a::b::c :x y:z";

fn bench_emojify(c: &mut Criterion) {
    let dir = TempDir::new().expect("Should create temp dir");
    for name in ["rocket", "tada", "thumbsup"] {
        std::fs::write(dir.path().join(format!("{}.png", name)), b"\x89PNG").unwrap();
    }
    let emojifier = Emojifier::new(
        GlyphDirectory::new(dir.path()),
        KittyProtocol,
        Placement::new(1, 2),
    );

    let mut group = c.benchmark_group("emojify");
    for (name, line) in [("prose", PROSE), ("tokens", TOKENS), ("colons", COLONS)] {
        group.bench_function(name, |b| {
            let mut out = Vec::with_capacity(1024);
            b.iter(|| {
                out.clear();
                emojifier.emojify(&mut out, black_box(line)).unwrap();
                black_box(out.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_emojify);
criterion_main!(benches);
