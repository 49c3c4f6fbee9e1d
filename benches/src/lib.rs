//! Benchmark helper utilities for flipbook-rs
//!
//! This module provides generators for the synthetic tick schedules the
//! benchmark suite feeds the animator. Schedules are seeded so runs stay
//! comparable across machines and checkouts.

use flipbook_types::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Builds a clip spanning `frames` sheet frames at the given rate.
///
/// # Panics
///
/// Panics on a zero frame count or a non-positive rate; benchmark inputs
/// are hard-coded, so this only trips on a broken benchmark.
pub fn bench_clip(frames: u32, fps: f64) -> Clip {
	Clip::new("bench", 0, frames - 1, fps).expect("benchmark clip parameters are valid")
}

/// Generates `count` tick deltas around `tick_ms` with up to `jitter_ms` of
/// uniform noise.
pub fn jittered_ticks(count: usize, tick_ms: f64, jitter_ms: f64, seed: u64) -> Vec<f64> {
	let mut rng = SmallRng::seed_from_u64(seed);
	(0..count)
		.map(|_| tick_ms + rng.random_range(-jitter_ms..=jitter_ms))
		.collect()
}

/// Generates a schedule mixing normal ticks with occasional suspension gaps
/// above the drop ceiling, exercising the guard path.
pub fn ticks_with_suspensions(count: usize, tick_ms: f64, seed: u64) -> Vec<f64> {
	let mut rng = SmallRng::seed_from_u64(seed);
	(0..count)
		.map(|i| {
			if i % 97 == 0 {
				rng.random_range(1500.0..30_000.0)
			} else {
				tick_ms
			}
		})
		.collect()
}
