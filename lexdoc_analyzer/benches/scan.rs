use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexdoc_analyzer::analysis::Analyzer;
use lexdoc_analyzer::lexical::Tokenizer;
use lexdoc_analyzer::{DictionaryStore, Language};
use std::sync::Arc;

const SAMPLE: &str = r#"
import os
from typing import Dict, List


class Inventory:
    def __init__(self, items: Dict[str, int]):
        self.items = items

    def total(self) -> int:
        return sum(count * 2 for count in self.items.values())

    def report(self):
        for name, count in sorted(self.items.items()):
            if count <= 0:
                raise ValueError(f"bad count for {name}")
            print(name, count ** 2, sep=": ")
"#;

fn bench_scan(c: &mut Criterion) {
    let text = SAMPLE.repeat(50);
    let tokenizer = Tokenizer::new().unwrap();

    c.bench_function("tokenize", |b| {
        b.iter(|| tokenizer.tokenize(black_box(&text)).unwrap().len())
    });

    let store = Arc::new(DictionaryStore::builtin(Language::Python).unwrap());
    let analyzer = Analyzer::new(store).unwrap();

    c.bench_function("analyze", |b| {
        b.iter(|| analyzer.analyze(black_box(&text)).unwrap().len())
    });

    let offset = text.chars().count() / 2;
    c.bench_function("hover_middle", |b| {
        b.iter(|| analyzer.hover(black_box(&text), black_box(offset)).unwrap())
    });
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
