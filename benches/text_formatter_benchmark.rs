use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use modlog::log::{
    LogAppender, LogFormatter, LogLevel, LogRecord, LoggerFactory, SharedLogState,
    TextFormatter, TextFormatterConfig,
};
use std::sync::Arc;

/// 丢弃所有输出，只测量过滤与格式化开销
struct NullAppender;

impl LogAppender for NullAppender {
    fn append(&self, formatted_message: &str) -> anyhow::Result<()> {
        black_box(formatted_message);
        Ok(())
    }
}

fn benchmark_formatter(c: &mut Criterion) {
    let state = Arc::new(SharedLogState::default());
    let formatter_colored =
        TextFormatter::new(TextFormatterConfig { colored: true }, Arc::clone(&state));
    let formatter_plain =
        TextFormatter::new(TextFormatterConfig { colored: false }, Arc::clone(&state));

    let basic_record = LogRecord::new(LogLevel::Info, "main.rs", "This is a test message");

    let record_with_code = LogRecord::new(LogLevel::Error, "db.rs", "connection refused")
        .with_code(Some("ECONNREFUSED".to_string()));

    let long_message = "A".repeat(1000);
    let record_with_long_message = LogRecord::new(LogLevel::Warn, "main.rs", long_message);

    let mut group = c.benchmark_group("formatter");

    let cases: [(&str, &LogRecord); 3] = [
        ("basic", &basic_record),
        ("with_code", &record_with_code),
        ("with_long_message", &record_with_long_message),
    ];

    for (name, record) in cases {
        group.bench_with_input(
            BenchmarkId::new("plain", name),
            record,
            |b, record: &LogRecord| {
                b.iter(|| black_box(formatter_plain.format(black_box(record)).unwrap()))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("colored", name),
            record,
            |b, record: &LogRecord| {
                b.iter(|| black_box(formatter_colored.format(black_box(record)).unwrap()))
            },
        );
    }

    state.set_date_format(Some("%d/%m/%Y %H:%M:%S")).unwrap();
    group.bench_function("custom_date_format", |b| {
        b.iter(|| black_box(formatter_plain.format(black_box(&basic_record)).unwrap()))
    });

    group.finish();
}

fn benchmark_logger(c: &mut Criterion) {
    let factory = LoggerFactory::builder()
        .general(Arc::new(NullAppender))
        .build();
    let logger = factory.create_logger("bench/logger.rs");

    let mut group = c.benchmark_group("logger");

    group.bench_function("info_accepted", |b| {
        b.iter(|| logger.info(black_box("request handled")))
    });

    logger.set_level(LogLevel::Error);
    group.bench_function("info_filtered", |b| {
        b.iter(|| logger.info(black_box("request handled")))
    });

    group.finish();
}

criterion_group!(benches, benchmark_formatter, benchmark_logger);
criterion_main!(benches);
