//! Benchmark for `.osu` file parsing and unparsing.

use criterion::{Criterion, Throughput};
use osu_rs::osu::{default_config, parse_osu_str};

struct OsuFile {
    name: String,
    source: String,
}

fn scan_osu_files() -> Vec<OsuFile> {
    let dir = "tests/osu/files";

    std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.to_string_lossy().ends_with(".osu"))
        .filter_map(|path| {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(String::from)?;

            let source = std::fs::read_to_string(&path).expect("Failed to load test file");

            Some(OsuFile { name, source })
        })
        .collect()
}

fn bench_parse_osu(c: &mut Criterion, files: &[OsuFile]) {
    let mut group = c.benchmark_group("parse_osu");

    for file in files {
        group.throughput(Throughput::Bytes(file.source.len() as u64));
        group.bench_function(&file.name, |b| {
            b.iter(|| {
                parse_osu_str(
                    std::hint::black_box(&file.source),
                    std::hint::black_box(default_config()),
                )
            });
        });
    }

    group.finish();
}

fn bench_unparse_osu(c: &mut Criterion, files: &[OsuFile]) {
    let mut group = c.benchmark_group("unparse_osu");

    for file in files {
        let Ok(beatmap) = parse_osu_str(&file.source, default_config()).beatmap else {
            continue;
        };
        group.bench_function(&file.name, |b| {
            b.iter(|| std::hint::black_box(&beatmap).to_osu_string());
        });
    }

    group.finish();
}

fn main() {
    let files = scan_osu_files();
    let mut criterion = Criterion::default();
    bench_parse_osu(&mut criterion, &files);
    bench_unparse_osu(&mut criterion, &files);
}
