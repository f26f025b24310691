use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mathlang_scanner::{NumericMode, ScanOptions, Scanner};

fn scanner_benchmark(c: &mut Criterion) {
    let source = r#"
        note "compute totals";
        x = 4;
        y = x + 2;
        total = x + y - 1;
        print "total = " total;
    "#
    .repeat(50);

    c.bench_function("tokenize program", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(source.as_str()));
            scanner.scan_tokens().unwrap()
        })
    });

    c.bench_function("tokenize program (extended numbers)", |b| {
        let options = ScanOptions::default().with_numeric_mode(NumericMode::Extended);
        b.iter(|| {
            let mut scanner = Scanner::with_options(black_box(source.as_str()), options.clone());
            scanner.scan_tokens().unwrap()
        })
    });
}

criterion_group!(benches, scanner_benchmark);
criterion_main!(benches);
