use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::PathBuf;

use intervue_core::parser::parse_catalog_str;

const CATALOG: &str = r#"
[catalog]
id = "bench"
name = "Bench Catalog"

[[questions]]
id = "beh-1"
text = "Tell me about yourself and your professional background."
kind = "voice"
stage = "behavioral"
time_limit_secs = 180
keywords = ["experience", "skills", "achievements", "education"]
difficulty = "easy"

[[questions]]
id = "tech-1"
text = "What is the time complexity of binary search?"
kind = "multiple-choice"
stage = "technical"
time_limit_secs = 60

[[questions.options]]
id = "a"
text = "O(n)"

[[questions.options]]
id = "b"
text = "O(log n)"
is_correct = true

[[challenges]]
id = "code-1"
title = "Reverse String"
description = "Write a function that reverses a string."
difficulty = "easy"
time_limit_secs = 600

[[challenges.test_cases]]
input = "['h','e','l','l','o']"
expected_output = "['o','l','l','e','h']"
description = "Basic string reversal"
"#;

fn bench_parse_catalog(c: &mut Criterion) {
    let path = PathBuf::from("bench.toml");
    c.bench_function("parse_catalog", |b| {
        b.iter(|| parse_catalog_str(black_box(CATALOG), &path).unwrap())
    });
}

criterion_group!(benches, bench_parse_catalog);
criterion_main!(benches);
