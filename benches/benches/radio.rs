// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use formstory_radio::{RadioGroup, RadioOption};

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("radio/select");

    // `checked_index` is a linear scan over the option list.
    for len in [4usize, 32, 256] {
        let options: Vec<RadioOption<u32>> = (0..len as u32)
            .map(|value| RadioOption::new("option", value))
            .collect();
        let mut radio = RadioGroup::new("bench").with_options(options);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("cycle", len), &len, |b, &len| {
            b.iter(|| {
                for value in 0..len as u32 {
                    radio.select(black_box(value));
                    black_box(radio.checked_index());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
