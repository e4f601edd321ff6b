// Copyright (c) 2025 the Concierge authors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use concierge_model::{hotel::Hotel, occupancy::randomize_occupancy};
use concierge_select::selector::OptimalSelector;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Standard hotel with a fixed, reproducible occupancy pattern.
fn hotel_with_occupancy(fraction: f64) -> Hotel {
    let mut hotel = Hotel::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    randomize_occupancy(&mut hotel, fraction, &mut rng);
    hotel
}

fn bench_select_by_block_size(c: &mut Criterion) {
    // 60% booked leaves 39 available rooms, a realistic busy pool.
    let hotel = hotel_with_occupancy(0.6);
    let selector = OptimalSelector::new();

    let mut group = c.benchmark_group("select/busy_pool");
    for requested in [2usize, 3, 4] {
        group.bench_with_input(
            BenchmarkId::from_parameter(requested),
            &requested,
            |b, &requested| {
                b.iter(|| {
                    let outcome = selector.select::<i64>(black_box(&hotel), black_box(requested));
                    black_box(outcome)
                });
            },
        );
    }
    group.finish();
}

fn bench_select_by_occupancy(c: &mut Criterion) {
    let selector = OptimalSelector::new();

    let mut group = c.benchmark_group("select/k3_by_occupancy");
    for percent in [80u32, 60, 40] {
        let hotel = hotel_with_occupancy(percent as f64 / 100.0);
        group.bench_with_input(
            BenchmarkId::new("booked_pct", percent),
            &hotel,
            |b, hotel| {
                b.iter(|| {
                    let outcome = selector.select::<i64>(black_box(hotel), black_box(3));
                    black_box(outcome)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_select_by_block_size,
    bench_select_by_occupancy
);
criterion_main!(benches);
