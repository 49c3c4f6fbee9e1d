//! Animation playback constants.
//!
//! This module contains the tuning values shared by the playback state
//! machine: the suspension guard ceiling, the playback-rate window, and the
//! effective frame-rate clamp.

/// Longest tick (in milliseconds) the animator will accept.
///
/// A host that was suspended or backgrounded reports one huge delta on
/// resume; stepping through all of it at once would jump the animation far
/// ahead of where the viewer left it. Ticks above this ceiling are dropped
/// without touching playback state.
pub const MAX_TICK_MS: f64 = 1000.0;

/// Lowest playback-rate multiplier reachable through [`Animator::slow_down`].
///
/// [`Animator::slow_down`]: super::Animator::slow_down
pub const MIN_RATE: f64 = 0.25;

/// Highest playback-rate multiplier reachable through [`Animator::speed_up`].
///
/// [`Animator::speed_up`]: super::Animator::speed_up
pub const MAX_RATE: f64 = 4.0;

/// Geometric step applied by one speed-up or slow-down control event.
pub const RATE_STEP: f64 = 1.25;

/// Lowest effective frame rate used when computing frame durations.
pub const MIN_EFFECTIVE_FPS: f64 = 1.0;

/// Highest effective frame rate used when computing frame durations.
pub const MAX_EFFECTIVE_FPS: f64 = 60.0;
