use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sln_transform::path::{normalize, relative, FilePath};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("absolute_path", |b| {
        b.iter(|| normalize::normalize(black_box("C:\\work\\src\\App\\App.csproj")));
    });

    group.bench_function("forward_slashes", |b| {
        b.iter(|| normalize::normalize(black_box("C:/work/src/App/App.csproj")));
    });

    group.bench_function("with_dots", |b| {
        b.iter(|| normalize::normalize(black_box("C:\\a\\b\\..\\c\\.\\d")));
    });

    group.bench_function("leading_parents", |b| {
        b.iter(|| normalize::normalize(black_box("..\\..\\shared\\..\\lib\\Lib.csproj")));
    });

    group.finish();
}

fn bench_relative(c: &mut Criterion) {
    let mut group = c.benchmark_group("relative");

    for depth in [1usize, 4, 8] {
        let tail: Vec<String> = (0..depth).map(|i| format!("Dir{i}")).collect();
        let target = format!("C:\\work\\{}\\App.csproj", tail.join("\\"));
        group.bench_with_input(BenchmarkId::new("under_base", depth), &target, |b, target| {
            b.iter(|| relative::relative_segments(black_box(target), black_box("C:\\work")));
        });
    }

    group.bench_function("sibling", |b| {
        b.iter(|| {
            relative::relative_segments(black_box("C:\\work\\lib\\Lib.csproj"), black_box("C:\\work\\build"))
        });
    });

    group.finish();
}

fn bench_file_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_path");

    let solution = FilePath::new_file("C:\\work\\All.sln");
    let project = FilePath::new_file("C:\\work\\src\\App\\App.csproj");
    let stored = FilePath::new_file("src\\App\\App.csproj");

    group.bench_function("relative_to", |b| {
        b.iter(|| black_box(&project).relative_to(black_box(&solution)));
    });

    group.bench_function("to_absolute", |b| {
        b.iter(|| black_box(&stored).to_absolute(black_box(&solution)));
    });

    group.bench_function("eq_ignoring_case", |b| {
        let upper = FilePath::new_file("C:\\WORK\\SRC\\APP\\APP.CSPROJ");
        b.iter(|| black_box(&project) == black_box(&upper));
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_relative, bench_file_path);
criterion_main!(benches);
