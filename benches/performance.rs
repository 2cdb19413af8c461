use criterion::{criterion_group, criterion_main, Criterion};
use arbitrage::prelude::*;

fn make_frame(rows: usize) -> Frame {
    let mut groups = Vec::with_capacity(rows);
    let mut sexes = Vec::with_capacity(rows);
    let mut values = Vec::with_capacity(rows);
    for i in 0..rows {
        groups.push(Scalar::Str(format!("group-{}", i % 16)));
        sexes.push(Scalar::Str(if i % 3 == 0 { "F" } else { "M" }.into()));
        values.push(Scalar::F64((i % 10) as f64));
    }
    Frame::new(
        vec![
            Column::new("group", groups),
            Column::new("sex", sexes),
            Column::new("value", values),
        ],
        None,
    )
    .expect("bench frame")
}

fn bench_partition(c: &mut Criterion) {
    let frame = make_frame(10_000);
    let key = frame.column("group").expect("group").values.clone();
    c.bench_function("partition_frame", |b| {
        b.iter(|| {
            let _ = partition(&frame, &key).unwrap();
        })
    });
}

fn bench_tapply(c: &mut Criterion) {
    let frame = make_frame(10_000);
    let key = frame.column("group").expect("group").values.clone();
    let values = frame.column("value").expect("value").values.clone();
    c.bench_function("tapply_sum", |b| {
        b.iter(|| {
            let _ = tapply(&values, &key, |g| sum(g)).unwrap();
        })
    });
}

fn bench_table2(c: &mut Criterion) {
    let frame = make_frame(10_000);
    let group = frame.column("group").expect("group").values.clone();
    let sex = frame.column("sex").expect("sex").values.clone();
    c.bench_function("table2", |b| {
        b.iter(|| {
            let _ = table2(&group, &sex).unwrap();
        })
    });
}

fn bench_recycle(c: &mut Criterion) {
    let long = ints(0..10_000);
    c.bench_function("recycle", |b| {
        b.iter(|| {
            let _ = recycle(values![&long, ints([1, 2, 3]), 7]).unwrap();
        })
    });
}

criterion_group!(grouping, bench_partition, bench_tapply, bench_table2, bench_recycle);
criterion_main!(grouping);
