//! Playback state machine.
//!
//! The [`Animator`] is fed elapsed-millisecond ticks by the host's
//! display-refresh scheduler and banks them in a fixed-timestep accumulator.
//! Frames only step when a whole frame duration has been banked, so the
//! frame count over any interval is exact regardless of tick jitter, and a
//! slow tick steps several frames at once without drifting the phase.

use super::clip::Clip;
use super::constants;
use super::layout::{SheetLayout, SourceRect};

/// Sprite-sheet playback state for one animated entity.
///
/// Holds the active [`Clip`], the zero-based frame offset within it, the
/// banked fractional-frame time, the play/pause flag, and a playback-rate
/// multiplier. The host owns the single instance and drives it from one
/// thread: the per-frame callback calls [`advance`](Self::advance) then
/// [`source_rect`](Self::source_rect) then blits, and discrete control
/// events (toggle play, speed steps, clip switch) each map to one method
/// call in between ticks.
///
/// Invariant: `frame_offset < clip.len()` at all times.
///
/// # Examples
///
/// ```
/// use flipbook_types::anim::{Animator, Clip, SheetLayout};
///
/// # fn main() -> Result<(), flipbook_types::anim::AnimError> {
/// let layout = SheetLayout::new(64, 64, 4)?;
/// let mut animator = Animator::new(Clip::new("walk", 4, 7, 12.0)?, true);
///
/// // 12 fps -> one frame lasts ~83.33 ms
/// assert_eq!(animator.advance(84.0), 1);
/// assert_eq!(animator.current_frame_index(), 5);
/// assert_eq!(animator.source_rect(&layout).x, 64);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Animator {
	clip: Clip,
	frame_offset: u32,
	accumulated_ms: f64,
	playing: bool,
	rate: f64,
}

impl Animator {
	/// Creates an animator positioned at the first frame of `clip`.
	pub fn new(clip: Clip, playing: bool) -> Self {
		Self {
			clip,
			frame_offset: 0,
			accumulated_ms: 0.0,
			playing,
			rate: 1.0,
		}
	}

	/// Advances playback by `elapsed_ms` of host time.
	///
	/// Banks the elapsed time, then steps the frame offset once per whole
	/// frame duration in the bank, wrapping to the clip start. Returns the
	/// number of frames stepped so hosts can observe wraps.
	///
	/// Ticks are dropped without touching state when:
	/// - the animator is paused,
	/// - `elapsed_ms` exceeds [`constants::MAX_TICK_MS`] (host was suspended;
	///   resuming must not fast-forward the animation),
	/// - `elapsed_ms` is negative or not a number (host clock misbehaved).
	pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
		if !self.playing {
			return 0;
		}
		if !(0.0..=constants::MAX_TICK_MS).contains(&elapsed_ms) {
			log::debug!(
				"dropping {elapsed_ms}ms tick for clip '{}' (ceiling {}ms)",
				self.clip.name(),
				constants::MAX_TICK_MS
			);
			return 0;
		}

		self.accumulated_ms += elapsed_ms;

		let frame_duration = self.frame_duration_ms();
		let clip_len = self.clip.len();
		let mut stepped = 0;
		while self.accumulated_ms >= frame_duration {
			self.accumulated_ms -= frame_duration;
			self.frame_offset = (self.frame_offset + 1) % clip_len;
			stepped += 1;
		}
		stepped
	}

	/// Switches to `clip`, restarting playback from its first frame.
	///
	/// The frame offset and the time bank are both reset; there is no
	/// blending between the outgoing and incoming clips. The play/pause
	/// flag and the rate multiplier carry over.
	pub fn set_clip(&mut self, clip: Clip) {
		log::debug!("switching clip '{}' -> '{}'", self.clip.name(), clip.name());
		self.clip = clip;
		self.frame_offset = 0;
		self.accumulated_ms = 0.0;
	}

	/// Flips between playing and paused, returning the new playing state.
	///
	/// Pausing keeps the banked time, so resuming continues mid-frame
	/// exactly where playback stopped.
	pub fn toggle_play(&mut self) -> bool {
		self.playing = !self.playing;
		self.playing
	}

	/// Raises the playback-rate multiplier by one step.
	///
	/// Returns the new rate, clamped to [`constants::MAX_RATE`].
	pub fn speed_up(&mut self) -> f64 {
		self.set_rate(self.rate * constants::RATE_STEP)
	}

	/// Lowers the playback-rate multiplier by one step.
	///
	/// Returns the new rate, clamped to [`constants::MIN_RATE`].
	pub fn slow_down(&mut self) -> f64 {
		self.set_rate(self.rate / constants::RATE_STEP)
	}

	/// Sets the playback-rate multiplier, clamped to the
	/// [`MIN_RATE`](constants::MIN_RATE)..=[`MAX_RATE`](constants::MAX_RATE)
	/// window. Non-finite values are ignored. Returns the rate in effect.
	pub fn set_rate(&mut self, rate: f64) -> f64 {
		if rate.is_finite() {
			self.rate = rate.clamp(constants::MIN_RATE, constants::MAX_RATE);
		}
		self.rate
	}

	/// Returns the active clip.
	#[inline]
	pub fn clip(&self) -> &Clip {
		&self.clip
	}

	/// Returns the zero-based frame offset within the active clip.
	#[inline]
	pub fn frame_offset(&self) -> u32 {
		self.frame_offset
	}

	/// Returns the banked milliseconds not yet converted into frame steps.
	#[inline]
	pub fn accumulated_ms(&self) -> f64 {
		self.accumulated_ms
	}

	/// Returns `true` while playback is running.
	#[inline]
	pub fn is_playing(&self) -> bool {
		self.playing
	}

	/// Returns the playback-rate multiplier.
	#[inline]
	pub fn rate(&self) -> f64 {
		self.rate
	}

	/// Returns the frame rate actually driving playback: the clip rate times
	/// the multiplier, clamped to the
	/// [`MIN_EFFECTIVE_FPS`](constants::MIN_EFFECTIVE_FPS)..=[`MAX_EFFECTIVE_FPS`](constants::MAX_EFFECTIVE_FPS)
	/// window.
	pub fn effective_fps(&self) -> f64 {
		(self.clip.frames_per_second() * self.rate)
			.clamp(constants::MIN_EFFECTIVE_FPS, constants::MAX_EFFECTIVE_FPS)
	}

	/// Returns the duration of one frame in milliseconds at the effective
	/// rate.
	#[inline]
	pub fn frame_duration_ms(&self) -> f64 {
		1000.0 / self.effective_fps()
	}

	/// Returns the linear sheet index of the frame currently displayed.
	#[inline]
	pub fn current_frame_index(&self) -> u32 {
		self.clip.start_frame() + self.frame_offset
	}

	/// Returns the sheet pixel rectangle of the current frame.
	///
	/// Total over well-formed state: bounds were checked when the clip was
	/// registered, so no validation happens here.
	#[inline]
	pub fn source_rect(&self, layout: &SheetLayout) -> SourceRect {
		layout.source_rect(self.current_frame_index())
	}
}

impl std::fmt::Display for Animator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} frame {}/{}{}",
			self.clip.name(),
			self.frame_offset,
			self.clip.len(),
			if self.playing {
				""
			} else {
				" (paused)"
			}
		)
	}
}
