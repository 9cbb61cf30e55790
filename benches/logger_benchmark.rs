use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jotter::{Level, Logger, LoggerConfig};

fn benchmark_counting_only(c: &mut Criterion) {
    let logger = Logger::new(Some(LoggerConfig::new().print_to_stdout(false)));

    c.bench_function("log_suppressed_message", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                logger
                    .log(black_box("benchmark message"), Level::Trace)
                    .unwrap();
            }
        })
    });
}

fn benchmark_file_sink(c: &mut Criterion) {
    let log_file_path = "bench_log.log";
    let logger = Logger::new(Some(
        LoggerConfig::new()
            .print_to_stdout(false)
            .print_to_file(true)
            .log_file_path(log_file_path),
    ));

    c.bench_function("log_to_file", |b| {
        b.iter(|| {
            logger
                .log(black_box("benchmark message"), Level::Info)
                .unwrap();
        })
    });

    let _ = std::fs::remove_file(log_file_path);
}

criterion_group!(benches, benchmark_counting_only, benchmark_file_sink);
criterion_main!(benches);
