use civiltime::{CalendarDate, CalendarDateTime, EpochTime};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(1));
    group.bench_function("date", |b| {
        b.iter(|| CalendarDate::parse(black_box("2026-02-07")))
    });
    group.bench_function("datetime", |b| {
        b.iter(|| CalendarDateTime::parse(black_box("2026-02-07T10:30:15.123456789Z")))
    });
    group.finish();
}

fn convert(c: &mut Criterion) {
    let date = CalendarDate::parse("2026-02-07");
    let dt = CalendarDateTime::parse("2026-02-07T10:30:15.123456789Z");
    let ts = dt.to_epoch_utc();

    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Elements(1));
    group.bench_function("date/to_epoch_utc", |b| {
        b.iter(|| black_box(date).to_epoch_utc())
    });
    group.bench_function("datetime/to_epoch_utc", |b| {
        b.iter(|| black_box(dt).to_epoch_utc())
    });
    group.bench_function("datetime/from_epoch_utc", |b| {
        b.iter(|| CalendarDateTime::from_epoch_utc(black_box(ts)))
    });
    group.bench_function("datetime/to_string", |b| {
        b.iter(|| black_box(dt).to_string())
    });
    group.finish();
}

fn clock(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock");
    group.throughput(Throughput::Elements(1));
    group.bench_function("epoch_time/now", |b| b.iter(EpochTime::now));
    group.bench_function("instant/now", |b| b.iter(civiltime::Instant::now));
    group.finish();
}

criterion_group!(benches, parse, convert, clock);
criterion_main!(benches);
