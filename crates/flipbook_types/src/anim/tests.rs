//! Unit tests for animation playback behavior

use super::*;

fn walk_clip() -> Clip {
	// 12 fps -> one frame lasts 1000/12 ≈ 83.33 ms, full cycle ≈ 333.33 ms
	Clip::new("walk", 4, 7, 12.0).unwrap()
}

fn layout_64() -> SheetLayout {
	SheetLayout::new(64, 64, 4).unwrap()
}

#[test]
fn test_full_cycle_returns_to_start() {
	// Tick sequence summing to exactly one cycle of a 4-frame 10 fps clip
	// (400 ms) must land back on frame offset 0 with an empty bank.
	let mut animator = Animator::new(Clip::new("spin", 0, 3, 10.0).unwrap(), true);

	for elapsed in [40.0, 60.0, 100.0, 100.0, 100.0] {
		animator.advance(elapsed);
	}

	assert_eq!(animator.frame_offset(), 0);
	assert!(animator.accumulated_ms().abs() < 1e-9);
}

#[test]
fn test_full_cycle_preserves_nonzero_bank() {
	// Same property with a partially filled bank: one cycle's worth of
	// elapsed time returns the bank to its starting value.
	let mut animator = Animator::new(Clip::new("spin", 0, 3, 10.0).unwrap(), true);
	animator.advance(30.0);
	let banked = animator.accumulated_ms();
	assert_eq!(banked, 30.0);

	for _ in 0..4 {
		animator.advance(100.0);
	}

	assert_eq!(animator.frame_offset(), 0);
	assert!((animator.accumulated_ms() - banked).abs() < 1e-9);
}

#[test]
fn test_zero_elapsed_is_idempotent() {
	let mut animator = Animator::new(walk_clip(), true);
	animator.advance(100.0);
	let offset = animator.frame_offset();
	let banked = animator.accumulated_ms();

	for _ in 0..100 {
		assert_eq!(animator.advance(0.0), 0);
	}

	assert_eq!(animator.frame_offset(), offset);
	assert_eq!(animator.accumulated_ms(), banked);
}

#[test]
fn test_wrap_after_one_cycle() {
	// 4 frames at 12 fps: 4 ticks of 83.34 ms each step exactly one frame
	// and wrap back to offset 0.
	let mut animator = Animator::new(walk_clip(), true);

	for step in 1..=4u32 {
		assert_eq!(animator.advance(83.34), 1);
		assert_eq!(animator.frame_offset(), step % 4);
	}

	assert_eq!(animator.frame_offset(), 0);
}

#[test]
fn test_pause_freezes_state() {
	let mut animator = Animator::new(walk_clip(), true);
	animator.advance(100.0);
	let offset = animator.frame_offset();
	let banked = animator.accumulated_ms();

	animator.toggle_play();
	assert_eq!(animator.advance(5000.0), 0);
	assert_eq!(animator.advance(500.0), 0);

	assert_eq!(animator.frame_offset(), offset);
	assert_eq!(animator.accumulated_ms(), banked);
}

#[test]
fn test_pause_preserves_phase_across_resume() {
	let mut animator = Animator::new(walk_clip(), true);
	animator.advance(50.0);

	animator.toggle_play();
	animator.advance(400.0);
	animator.toggle_play();

	// 50 ms were banked before the pause; 34 more complete the first frame
	assert_eq!(animator.advance(34.0), 1);
}

#[test_log::test]
fn test_large_gap_is_dropped() {
	// A tick above the 1000 ms ceiling (suspended host) must not touch
	// playback state at all.
	let mut animator = Animator::new(walk_clip(), true);
	animator.advance(100.0);
	let offset = animator.frame_offset();
	let banked = animator.accumulated_ms();

	assert_eq!(animator.advance(2000.0), 0);
	assert_eq!(animator.frame_offset(), offset);
	assert_eq!(animator.accumulated_ms(), banked);

	// Exactly at the ceiling the tick still counts
	assert!(animator.advance(1000.0) > 0);
}

#[test_log::test]
fn test_backwards_clock_is_dropped() {
	let mut animator = Animator::new(walk_clip(), true);
	animator.advance(100.0);
	let banked = animator.accumulated_ms();

	assert_eq!(animator.advance(-16.0), 0);
	assert_eq!(animator.advance(f64::NAN), 0);
	assert_eq!(animator.accumulated_ms(), banked);
}

#[test]
fn test_slow_tick_steps_multiple_frames() {
	// One 250 ms tick at 12 fps covers exactly three 83.33 ms frames; the
	// accumulator must step all three and keep only the sub-frame remainder.
	let mut animator = Animator::new(walk_clip(), true);

	assert_eq!(animator.advance(250.0), 3);
	assert_eq!(animator.frame_offset(), 3);
	assert!(animator.accumulated_ms() < animator.frame_duration_ms());
}

#[test]
fn test_no_phase_drift_under_jitter() {
	// Alternating short and long ticks summing to N cycles must produce
	// exactly N * clip_len frame steps.
	let mut animator = Animator::new(Clip::new("spin", 0, 3, 10.0).unwrap(), true);

	let mut total_steps = 0;
	// 10 cycles of 400 ms as repeating (30, 70, 100, 100, 100) ms ticks
	for _ in 0..10 {
		for elapsed in [30.0, 70.0, 100.0, 100.0, 100.0] {
			total_steps += animator.advance(elapsed);
		}
	}

	assert_eq!(total_steps, 40);
	assert_eq!(animator.frame_offset(), 0);
}

#[test_log::test]
fn test_set_clip_resets_phase() {
	let mut animator = Animator::new(walk_clip(), true);
	animator.advance(300.0);
	assert_ne!(animator.frame_offset(), 0);

	animator.set_clip(Clip::new("idle", 0, 3, 8.0).unwrap());
	assert_eq!(animator.frame_offset(), 0);
	assert_eq!(animator.accumulated_ms(), 0.0);
	assert_eq!(animator.clip().name(), "idle");
	// Play state carries over the switch
	assert!(animator.is_playing());
}

#[test]
fn test_source_rect_follows_playback() {
	// walk covers sheet frames 4..=7 -> row 1 of a 4-column layout
	let layout = layout_64();
	let mut animator = Animator::new(walk_clip(), true);

	assert_eq!(animator.current_frame_index(), 4);
	assert_eq!(animator.source_rect(&layout), SourceRect {
		x: 0,
		y: 64,
		w: 64,
		h: 64,
	});

	animator.advance(84.0);
	assert_eq!(animator.current_frame_index(), 5);
	assert_eq!(animator.source_rect(&layout).x, 64);
}

#[test]
fn test_rate_changes_playback_speed() {
	// At rate 2.0 a 12 fps clip plays at 24 fps: 250 ms covers 6 frames
	let mut animator = Animator::new(walk_clip(), true);
	animator.set_rate(2.0);

	assert_eq!(animator.advance(250.0), 6);
	// 6 steps around a 4-frame clip -> offset 2
	assert_eq!(animator.frame_offset(), 2);
}

#[test]
fn test_manifest_to_playback_pipeline() {
	let json = r#"{
		"frame_width": 64,
		"frame_height": 64,
		"columns": 4,
		"rows": 2,
		"clips": [
			{ "name": "idle", "start_frame": 0, "end_frame": 3, "frames_per_second": 8.0 },
			{ "name": "walk", "start_frame": 4, "end_frame": 7, "frames_per_second": 12.0 }
		],
		"initial_clip": "walk",
		"scale": 2.0
	}"#;

	let manifest = SheetManifest::from_json_str(json).unwrap();
	let (library, mut animator) = manifest.build().unwrap();
	let layout = *library.layout();

	// Drive one simulated second at a 16 ms tick
	let mut rects = Vec::new();
	for _ in 0..62 {
		animator.advance(16.0);
		rects.push(animator.source_rect(&layout));
	}

	// Every produced rect stays inside the walk row of the sheet
	assert!(rects.iter().all(|rect| rect.y == 64 && rect.x <= 192));

	// Select-clip control: cycle to the next registered clip
	let next = library.next_after(animator.clip().name()).unwrap().clone();
	animator.set_clip(next);
	assert_eq!(animator.clip().name(), "idle");
	assert_eq!(animator.source_rect(&layout).y, 0);
}
