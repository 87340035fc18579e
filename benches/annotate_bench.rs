use bench_annotate::decoration::DecorationBuilder;
use bench_annotate::position::LineIndex;
use bench_annotate::search::{locate, IncludeDirective};
use bench_annotate::settings::AnnotatorOptions;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn setup_text(benchmarks: usize) -> (String, Vec<String>) {
    let mut text = String::from("#include <benchmark/benchmark.h>\n#include <C++>\n");
    let mut names = vec!["Noop".to_string()];
    for i in 0..benchmarks {
        let name = format!("BM_case_{i}");
        text.push_str(&format!(
            "\nstatic void {name}(benchmark::State& state) {{\n  for (auto _ : state) {{\n    benchmark::DoNotOptimize({i});\n  }}\n}}\nBENCHMARK({name});\n"
        ));
        names.push(name);
    }
    (text, names)
}

fn pattern_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_search");
    let (text, _) = setup_text(200);

    group.bench_function("locate_first", |b| {
        b.iter(|| black_box(locate(&text, "BM_case_0")))
    });

    group.bench_function("locate_last", |b| {
        b.iter(|| black_box(locate(&text, "BM_case_199")))
    });

    group.bench_function("locate_missing", |b| {
        b.iter(|| black_box(locate(&text, "BM_absent")))
    });

    group.bench_function("compile_include_pattern", |b| {
        b.iter(|| black_box(IncludeDirective::compile().is_ok()))
    });

    if let Ok(include) = IncludeDirective::compile() {
        group.bench_function("find_include_missing", |b| {
            b.iter(|| black_box(include.find(&text)))
        });
    }

    group.finish();
}

fn decoration_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoration_build");
    let options = AnnotatorOptions {
        max_buffer_len: usize::MAX,
        ..AnnotatorOptions::default()
    };

    for count in [4, 32, 200] {
        let (text, names) = setup_text(count);
        let builder = DecorationBuilder::new(&options).with_include_directive(true);
        group.bench_function(format!("build_{count}"), |b| {
            b.iter(|| black_box(builder.build(&text, &names)))
        });
    }

    let (text, _) = setup_text(200);
    group.bench_function("line_index", |b| {
        b.iter(|| black_box(LineIndex::new(&text).line_column(text.len() / 2)))
    });

    group.finish();
}

criterion_group!(benches, pattern_search, decoration_build);
criterion_main!(benches);
