// Copyright (c) 2025 Felix Kahle.
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

use bracket_core::boundary::BoundaryPolicy;
use bracket_core::range::Range;
use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn ranges(n: i64) -> Vec<Range<i64>> {
    (0..n)
        .map(|i| {
            let policy = BoundaryPolicy::ALL[(i % 4) as usize];
            Range::new(i * 3, Some(i * 3 + 5), policy)
        })
        .collect()
}

fn bench_overlaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlaps");
    for n in [64i64, 512] {
        let data = ranges(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| {
                let mut hits = 0usize;
                for a in data {
                    for other in data {
                        if black_box(a).overlaps(black_box(other)) {
                            hits += 1;
                        }
                    }
                }
                hits
            })
        });
    }
    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    let integers = Range::half_open_right(0i64, Some(100_000));
    group.throughput(Throughput::Elements(integers.count()));
    group.bench_function("integers", |b| {
        b.iter(|| black_box(integers).iter().fold(0i64, |acc, x| acc.wrapping_add(x)))
    });

    let start = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2100, 1, 1).expect("valid date");
    let days = Range::half_open_right(start, Some(end));
    group.throughput(Throughput::Elements(days.count()));
    group.bench_function("dates", |b| b.iter(|| black_box(days).iter().count()));

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let literals: Vec<String> = ranges(256).iter().map(ToString::to_string).collect();
    c.bench_function("parse", |b| {
        b.iter(|| {
            literals
                .iter()
                .map(|s| s.parse::<Range<i64>>().expect("canonical literal"))
                .count()
        })
    });
}

criterion_group!(benches, bench_overlaps, bench_iterate, bench_parse);
criterion_main!(benches);
