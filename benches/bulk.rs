use criterion::{criterion_group, Criterion};
use longmap::LongMap;

fn populated(entries: i64) -> LongMap<i64> {
    let mut map = LongMap::with_capacity(entries * 2).unwrap();
    for key in 0..entries {
        map.insert(key, key * 3);
    }
    map
}

pub fn scans(c: &mut Criterion) {
    c.bench_function("keys_10k", |b| {
        let map = populated(10_000);
        b.iter(|| map.keys())
    });
    c.bench_function("values_10k", |b| {
        let map = populated(10_000);
        b.iter(|| map.values().map(|v| v.len()))
    });
    c.bench_function("contains_value_worst_case", |b| {
        // Missing value, so every chain gets scanned.
        let map = populated(10_000);
        b.iter(|| map.contains_value(&-1))
    });
}

pub fn clears(c: &mut Criterion) {
    c.bench_function("clear_refill_1k", |b| {
        let mut map = LongMap::with_capacity(2048).unwrap();
        b.iter(|| {
            for key in 0..1_000i64 {
                map.insert(key, key);
            }
            map.clear();
            map.len()
        })
    });
}

criterion_group!(bulk, scans, clears);
