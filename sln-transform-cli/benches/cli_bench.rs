use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

const PROJECTS: [&str; 3] = [
    "src/A/A.csproj",
    "src/B/B.csproj",
    "tests/A.Tests/A.Tests.csproj",
];

fn sample_solution() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../sln-transform/tests/fixtures/solutions/Sample.sln")
}

fn sample_workspace() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::copy(sample_solution(), dir.path().join("Sample.sln")).expect("failed to copy solution");
    for project in PROJECTS {
        let path = dir.path().join(project);
        fs::create_dir_all(path.parent().unwrap()).expect("failed to create project dir");
        fs::write(path, "<Project />").expect("failed to write project");
    }
    dir
}

fn command(workspace: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sln-transform").expect("failed to locate binary");
    cmd.current_dir(workspace)
        .arg("--user-dir")
        .arg(workspace.join("user"));
    cmd
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("sln-transform").expect("failed to locate binary");
            let output = cmd.arg("--version").output().expect("failed to run binary");
            black_box(output);
        });
    });
}

fn bench_cli_list(c: &mut Criterion) {
    let workspace = sample_workspace();
    c.bench_function("cli_list_json", |b| {
        b.iter(|| {
            let output = command(workspace.path())
                .args(["list", "Sample.sln", "--format", "json"])
                .output()
                .expect("failed to execute list");
            black_box(output);
        });
    });
}

fn bench_cli_remove(c: &mut Criterion) {
    c.bench_function("cli_remove", |b| {
        b.iter_batched(
            sample_workspace,
            |workspace| {
                let status = command(workspace.path())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .args(["remove", "Sample.sln", "B", "--suffix", "-Bench"])
                    .status()
                    .expect("failed to execute remove");
                black_box(status.success());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(cli_benches, bench_cli_startup, bench_cli_list, bench_cli_remove);
criterion_main!(cli_benches);
