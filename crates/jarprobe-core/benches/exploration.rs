//! Benchmarks for jarprobe-core exploration.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use jarprobe_core::DependencyId;
use jarprobe_core::ScanConfig;
use jarprobe_core::scan_archive;
use jarprobe_core::test_utils::JarBuilder;
use jarprobe_core::test_utils::nested_jar_chain;
use std::hint::black_box;
use tempfile::TempDir;

/// Creates a fat jar with `lib_count` bundled libraries of `files_per_lib`
/// entries each.
fn create_fat_jar(lib_count: usize, files_per_lib: usize) -> Vec<u8> {
    let mut outer = JarBuilder::new().add_directory("BOOT-INF/lib/");
    for lib in 0..lib_count {
        let mut inner = JarBuilder::new().add_pom(
            &format!("META-INF/maven/org.bench/lib{lib}/pom.xml"),
            "org.bench",
            &format!("lib{lib}"),
            "1.0.0",
        );
        for file in 0..files_per_lib {
            inner = inner
                .add_file(&format!("org/bench/lib{lib}/Type{file}.class"), b"\xCA\xFE\xBA\xBE")
                .add_file(&format!("org/bench/lib{lib}/res{file}.txt"), b"resource");
        }
        outer = outer.add_file(&format!("BOOT-INF/lib/lib{lib}-1.0.0.jar"), &inner.build());
    }
    outer.build()
}

fn bench_fat_jar(c: &mut Criterion) {
    let mut group = c.benchmark_group("fat_jar");
    let dependency = DependencyId::new("lib7").unwrap();
    let config = ScanConfig::default();

    for lib_count in [10usize, 50] {
        let jar_bytes = create_fat_jar(lib_count, 20);
        group.throughput(Throughput::Bytes(jar_bytes.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(lib_count),
            &jar_bytes,
            |b, bytes| {
                let temp = TempDir::new().unwrap();
                let jar = temp.path().join("app.jar");
                std::fs::write(&jar, bytes).unwrap();
                b.iter(|| black_box(scan_archive(&jar, &dependency, &config).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_nesting_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("nesting_depth");
    let dependency = DependencyId::new("needle").unwrap();
    let config = ScanConfig::default();

    for depth in [4usize, 16] {
        let jar_bytes = nested_jar_chain(depth, "needle");
        group.bench_with_input(BenchmarkId::from_parameter(depth), &jar_bytes, |b, bytes| {
            let temp = TempDir::new().unwrap();
            let jar = temp.path().join("level1.jar");
            std::fs::write(&jar, bytes).unwrap();
            b.iter(|| black_box(scan_archive(&jar, &dependency, &config).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fat_jar, bench_nesting_depth);
criterion_main!(benches);
