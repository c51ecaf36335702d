// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for buffer allocation and element access.

use buffer_core::Buffer2D;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_allocation(c: &mut Criterion) {
    c.bench_function("allocate_256x256", |b| {
        b.iter(|| Buffer2D::new(black_box(256), black_box(256)).unwrap());
    });
}

fn bench_element_access(c: &mut Criterion) {
    let mut buf = Buffer2D::new(256, 256).unwrap();
    c.bench_function("set_get_row_sweep", |b| {
        b.iter(|| {
            for x in 0..buf.dim_y() {
                for y in 0..buf.dim_x() {
                    buf.set(x, y, (x + y) as f32);
                }
            }
            let mut acc = 0.0f32;
            for x in 0..buf.dim_y() {
                for y in 0..buf.dim_x() {
                    acc += buf.get(x, y);
                }
            }
            black_box(acc)
        });
    });
}

fn bench_bulk_fill(c: &mut Criterion) {
    let mut buf = Buffer2D::new(256, 256).unwrap();
    c.bench_function("fill_via_slice", |b| {
        b.iter(|| {
            buf.as_mut_slice().fill(black_box(1.0));
        });
    });
}

criterion_group!(benches, bench_allocation, bench_element_access, bench_bulk_fill);
criterion_main!(benches);
