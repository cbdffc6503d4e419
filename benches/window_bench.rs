// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Lotto Lapping contributors

//! Benchmarks for window construction.
//!
//! Measures partition + sort + window throughput over snapshots spanning
//! multiple games, including the presorted fast path (repositories usually
//! return draws already ordered by date).
#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lapping::common::draw::Draw;
use lapping::window::WindowBuilder;
use std::hint::black_box;

fn make_snapshot(num_draws: usize, num_games: usize, presorted: bool) -> Vec<Draw> {
    (0..num_draws)
        .map(|i| {
            let day = if presorted {
                (num_draws - i) as i32
            } else {
                ((i * 17) % num_draws) as i32
            };
            Draw {
                id: i as i64,
                game_id: (i % num_games) as i64,
                game_name: format!("Game {}", i % num_games),
                game_type_id: 1,
                draw_date: chrono::NaiveDate::from_num_days_from_ce_opt(738_000 + day).unwrap(),
                draw_number: None,
                numbers: vec![5, 12, 23, 27, 39, 42],
            }
        })
        .collect()
}

fn bench_window_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_build");

    for &(num_draws, num_games) in &[(1_000, 1), (10_000, 10), (100_000, 50)] {
        group.throughput(Throughput::Elements(num_draws as u64));

        group.bench_with_input(
            BenchmarkId::new(format!("unsorted_games={num_games}"), num_draws),
            &(num_draws, num_games),
            |b, &(num_draws, num_games)| {
                let snapshot = make_snapshot(num_draws, num_games, false);
                b.iter(|| {
                    let windows = WindowBuilder::two_row().build(black_box(snapshot.clone()));
                    windows.window_count()
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new(format!("presorted_games={num_games}"), num_draws),
            &(num_draws, num_games),
            |b, &(num_draws, num_games)| {
                let snapshot = make_snapshot(num_draws, num_games, true);
                b.iter(|| {
                    let windows = WindowBuilder::two_row().build(black_box(snapshot.clone()));
                    windows.window_count()
                });
            },
        );
    }

    group.finish();
}

fn bench_window_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_iteration");

    for &size in &[2usize, 3] {
        let windows = WindowBuilder::with_size(size).build(make_snapshot(10_000, 10, true));
        group.throughput(Throughput::Elements(windows.window_count() as u64));
        group.bench_with_input(BenchmarkId::new("iterate", size), &windows, |b, windows| {
            b.iter(|| windows.iter().map(|w| black_box(w.newest().id)).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_window_build, bench_window_iteration);
criterion_main!(benches);
