// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use formstory_range::{
    HandleId, InitialValues, RangeConfig, RangeDomain, RangeModel, RangeSlider,
};

/// Deterministic pointer sweep across (and past) the domain.
fn sweep(len: usize) -> Vec<(HandleId, f64)> {
    (0..len)
        .map(|i| {
            let handle = if i % 2 == 0 {
                HandleId::Lower
            } else {
                HandleId::Upper
            };
            let raw = ((i * 7_919) % 1_200) as f64 - 100.0;
            (handle, raw)
        })
        .collect()
}

fn bench_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("range/transition");

    // Fractional steps exercise the epsilon-tolerant grid paths.
    for step in [1.0_f64, 0.1] {
        let model = RangeModel::new(
            RangeConfig::new(RangeDomain::new(0.0, 1_000.0, step))
                .separation_limit(25.0)
                .initial_values((100.0, 900.0)),
        )
        .unwrap();
        let moves = sweep(4_096);
        group.throughput(Throughput::Elements(moves.len() as u64));

        group.bench_with_input(BenchmarkId::new("pure", step), &moves, |b, moves| {
            b.iter(|| {
                let mut state = model.initialize();
                for &(handle, raw) in moves {
                    state = model.transition(&state, handle, black_box(raw));
                }
                black_box(state)
            });
        });

        group.bench_with_input(BenchmarkId::new("slider", step), &moves, |b, moves| {
            let mut slider = RangeSlider::from_model(model).with_on_value_changed(|value, _| {
                black_box(value);
            });
            b.iter(|| {
                for &(handle, raw) in moves {
                    slider.input(handle, black_box(raw));
                }
            });
        });
    }

    group.finish();
}

fn bench_sync_external(c: &mut Criterion) {
    let mut group = c.benchmark_group("range/sync_external");
    let model = RangeModel::new(
        RangeConfig::new(RangeDomain::new(0.0, 1_000.0, 1.0))
            .separation_limit(50.0)
            .initial_values((0.0, 1_000.0)),
    )
    .unwrap();
    let values: Vec<InitialValues> = sweep(1_024)
        .chunks(2)
        .map(|pair| InitialValues::Pair(pair[0].1, pair[1].1))
        .collect();
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("pair", |b| {
        b.iter(|| {
            let mut state = model.initialize();
            for &value in &values {
                state = model.sync_external(&state, black_box(value));
            }
            black_box(state)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_transition, bench_sync_external);
criterion_main!(benches);
