use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flatwire::{calc_size, write, SliceSink};

struct Reading {
    value: u64,
}

flatwire::record!(Reading { value: u64 });

struct Point {
    x: i32,
    y: i32,
}

flatwire::record!(Point { x: i32, y: i32 });

fn make_readings(count: usize) -> Vec<Reading> {
    (1..=count as u64).map(|value| Reading { value }).collect()
}

fn make_points(count: usize) -> Vec<Point> {
    (0..count as i32).map(|i| Point { x: i, y: -i }).collect()
}

// Bulk fast path: Vec of packed single-scalar records, one memcpy per write
fn bench_bulk_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_array");

    for count in [1_000usize, 100_000, 1_000_000].iter() {
        let data = make_readings(*count);
        group.throughput(Throughput::Bytes((count * 8) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            let mut out = Vec::with_capacity(calc_size(&data));
            b.iter(|| {
                out.clear();
                write(&mut out, black_box(&data)).expect("vec sink cannot fail");
            });
        });
    }

    group.finish();
}

// General path: two-field records fail the padding-free predicate and are
// encoded field by field
fn bench_field_wise_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_wise_array");

    for count in [1_000usize, 100_000].iter() {
        let data = make_points(*count);
        group.throughput(Throughput::Bytes((count * 8) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            let mut out = Vec::with_capacity(calc_size(&data));
            b.iter(|| {
                out.clear();
                write(&mut out, black_box(&data)).expect("vec sink cannot fail");
            });
        });
    }

    group.finish();
}

fn bench_fixed_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_window");

    let data = make_readings(100_000);
    let needed = calc_size(&data);
    let mut buf = vec![0u8; needed];
    group.throughput(Throughput::Bytes(needed as u64));

    group.bench_function("readings_100k", |b| {
        b.iter(|| {
            let mut sink = SliceSink::new(&mut buf);
            write(&mut sink, black_box(&data)).expect("window sized to fit");
        });
    });

    group.finish();
}

fn bench_size_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("calc_size");

    let strings: Vec<String> = (0..10_000).map(|i| format!("entry-{i}")).collect();
    group.bench_function("strings_10k", |b| {
        b.iter(|| black_box(calc_size(black_box(&strings))));
    });

    let readings = make_readings(1_000_000);
    group.bench_function("readings_1m", |b| {
        b.iter(|| black_box(calc_size(black_box(&readings))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_bulk_array,
    bench_field_wise_array,
    bench_fixed_window,
    bench_size_calculation
);
criterion_main!(benches);
