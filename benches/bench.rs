use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use snowid::{Snowflake, SnowflakeLayout, SnowflakeParts};

const TOTAL_IDS: usize = 4096;

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("from_parts/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for i in 0..TOTAL_IDS as u64 {
                let id = Snowflake::from_parts(
                    SnowflakeLayout::DISCORD,
                    SnowflakeParts {
                        timestamp: Some(i),
                        worker_id: Some(3),
                        process_id: Some(7),
                        increment: Some(i),
                    },
                );
                black_box(id);
            }
        })
    });

    group.bench_function(format!("from_raw/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for i in 0..TOTAL_IDS as u64 {
                black_box(Snowflake::from_raw(SnowflakeLayout::TWITTER, i));
            }
        })
    });

    group.finish();
}

fn bench_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    let id = Snowflake::from_raw(SnowflakeLayout::DISCORD, 175928847299117063);
    group.bench_function(format!("fields/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(id.timestamp());
                black_box(id.worker_id());
                black_box(id.process_id());
                black_box(id.increment());
            }
        })
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let id = Snowflake::from_raw(SnowflakeLayout::TWITTER, 175928847299117063);
    for radix in [2, 10, 16, 36] {
        group.bench_function(format!("to_string_radix/{radix}"), |b| {
            b.iter(|| black_box(id.to_string_radix(black_box(radix)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack, bench_unpack, bench_format);
criterion_main!(benches);
