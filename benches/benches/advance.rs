//! Benchmark suite for animator tick processing
//!
//! This benchmark measures the fixed-timestep accumulator under realistic
//! and pathological tick schedules, and the frame-index-to-rectangle math.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use flipbook_benches::{bench_clip, jittered_ticks, ticks_with_suspensions};
use flipbook_types::prelude::*;
use std::hint::black_box;

/// Benchmark advance() over display-refresh-like schedules
fn bench_advance_jittered(c: &mut Criterion) {
	let mut group = c.benchmark_group("advance_jittered");

	// (name, tick interval, jitter) - 60 Hz and 30 Hz hosts
	let schedules = vec![
		("60hz", 16.6, 2.0),
		("30hz", 33.3, 5.0),
	];

	for (name, tick_ms, jitter_ms) in schedules {
		let ticks = jittered_ticks(10_000, tick_ms, jitter_ms, 0x5EED);
		let clip = bench_clip(8, 12.0);

		group.throughput(Throughput::Elements(ticks.len() as u64));
		group.bench_with_input(BenchmarkId::new("drain", name), &ticks, |b, ticks| {
			b.iter(|| {
				let mut animator = Animator::new(clip.clone(), true);
				let mut steps = 0u32;
				for &elapsed in ticks {
					steps += animator.advance(black_box(elapsed));
				}
				black_box(steps)
			});
		});
	}

	group.finish();
}

/// Benchmark the suspension-guard path mixed into a normal schedule
fn bench_advance_suspensions(c: &mut Criterion) {
	let ticks = ticks_with_suspensions(10_000, 16.6, 0x5EED);
	let clip = bench_clip(8, 12.0);

	let mut group = c.benchmark_group("advance_suspensions");
	group.throughput(Throughput::Elements(ticks.len() as u64));
	group.bench_function("drain", |b| {
		b.iter(|| {
			let mut animator = Animator::new(clip.clone(), true);
			for &elapsed in &ticks {
				animator.advance(black_box(elapsed));
			}
			black_box(animator.frame_offset())
		});
	});
	group.finish();
}

/// Benchmark source rectangle mapping separately
fn bench_source_rect(c: &mut Criterion) {
	let layout = SheetLayout::new(64, 64, 4).expect("valid layout");

	let mut group = c.benchmark_group("source_rect");
	group.throughput(Throughput::Elements(1024));
	group.bench_function("map_1k_indices", |b| {
		b.iter(|| {
			let mut acc = 0u32;
			for index in 0..1024u32 {
				acc = acc.wrapping_add(layout.source_rect(black_box(index)).x);
			}
			black_box(acc)
		});
	});
	group.finish();
}

criterion_group!(
	benches,
	bench_advance_jittered,
	bench_advance_suspensions,
	bench_source_rect
);
criterion_main!(benches);
