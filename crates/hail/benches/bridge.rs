// Copyright (c) The Hail Project Authors.
// Licensed under the MIT License.

#![allow(
    missing_docs,
    clippy::unwrap_used,
    reason = "Benchmarks don't require documentation and should fail fast on errors"
)]

use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use hail::{
    AsyncAdapter, AsyncGreeter, BlockingAdapter, CancellationToken, Greeter, LocalGreeter,
    TaskGreeter,
};

fn entry(c: &mut Criterion) {
    let mut group = c.benchmark_group("bridge");

    // Zero delay so the adapters' plumbing is what gets measured.
    let rt = tokio::runtime::Runtime::new().unwrap();

    let direct = LocalGreeter::new(Duration::ZERO);
    group.bench_function("blocking_direct", |b| {
        b.iter(|| direct.say_locale_hello("Alice", "hu").unwrap());
    });

    let tasked = TaskGreeter::new(Duration::ZERO);
    group.bench_function("async_direct", |b| {
        b.iter(|| {
            rt.block_on(async {
                let cancel = CancellationToken::new();
                let (msg_rx, _err_rx) = tasked.say_locale_hello(&cancel, "Alice", "hu");
                msg_rx.recv().await.unwrap()
            })
        });
    });

    let wrapped = AsyncAdapter::new(LocalGreeter::new(Duration::ZERO));
    group.bench_function("blocking_via_async_adapter", |b| {
        b.iter(|| {
            rt.block_on(async {
                let cancel = CancellationToken::new();
                let (msg_rx, _err_rx) = wrapped.say_locale_hello(&cancel, "Alice", "hu");
                msg_rx.recv().await.unwrap()
            })
        });
    });

    group.bench_function("round_trip_both_adapters", |b| {
        b.iter(|| {
            rt.block_on(async {
                let round_trip = BlockingAdapter::new(
                    AsyncAdapter::new(LocalGreeter::new(Duration::ZERO)),
                    CancellationToken::new(),
                );
                tokio::task::spawn_blocking(move || {
                    round_trip.say_locale_hello("Alice", "hu").unwrap()
                })
                .await
                .unwrap()
            })
        });
    });

    group.finish();
}

criterion_group!(benches, entry);
criterion_main!(benches);
