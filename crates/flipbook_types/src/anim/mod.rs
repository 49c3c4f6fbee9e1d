//! Sprite-sheet animation playback support for the `flipbook-rs` project.
//!
//! This module formalizes the animation loop every sprite demo reinvents:
//! slice a sheet image into fixed-size frames, advance a frame index on a
//! timer, and hand the renderer a source rectangle. The moving parts:
//!
//! - [`SheetLayout`] — how a linear frame index maps to pixel offsets in the
//!   sheet (column = index mod columns, row = index / columns).
//! - [`Clip`] — a named contiguous frame range played at its own rate.
//! - [`ClipLibrary`] — clip registry; frame ranges are bounds-checked against
//!   the sheet when a clip is registered, never at draw time.
//! - [`Animator`] — the playback state machine. Fed elapsed-millisecond ticks
//!   by the host scheduler, it banks time in a fixed-timestep accumulator and
//!   steps whole frames only when a full frame duration has accumulated, so
//!   frame cadence is exact regardless of tick jitter.
//! - [`SheetManifest`] — startup configuration (geometry, clips, initial
//!   state) loaded from JSON and validated into the types above.
//!
//! # Tick Accumulator
//!
//! The state machine keeps two registers per animator: the frame offset
//! within the active clip and the milliseconds banked since the last frame
//! step. Each tick:
//!
//! - elapsed time is added to the bank (only while playing),
//! - whole frame durations are drained from the bank, stepping and wrapping
//!   the frame offset once per drain,
//! - a tick longer than [`constants::MAX_TICK_MS`] is dropped entirely — a
//!   suspended or backgrounded host must not fast-forward the animation on
//!   resume.
//!
//! # Examples
//!
//! ```
//! use flipbook_types::anim::{Animator, Clip, ClipLibrary, SheetLayout};
//!
//! # fn main() -> Result<(), flipbook_types::anim::AnimError> {
//! let layout = SheetLayout::new(64, 64, 4)?;
//! let mut library = ClipLibrary::new(layout, 8);
//! library.register(Clip::new("walk", 4, 7, 12.0)?)?;
//!
//! let mut animator = Animator::new(library.require("walk")?.clone(), true);
//!
//! // One 12 fps frame lasts ~83.33 ms; a 100 ms tick steps one frame
//! // and banks the remainder.
//! let stepped = animator.advance(100.0);
//! assert_eq!(stepped, 1);
//!
//! let rect = animator.source_rect(&layout);
//! assert_eq!((rect.x, rect.y), (64, 64)); // frame 5 -> col 1, row 1
//! # Ok(())
//! # }
//! ```

mod error;

pub mod animator;
pub mod clip;
pub mod constants;
pub mod layout;
pub mod library;
pub mod manifest;

#[cfg(test)]
mod tests;

// Re-export unified error types
pub use error::{AnimError, ManifestError};

// Re-export main animation types
pub use animator::Animator;
pub use clip::Clip;
pub use layout::{DestRect, Facing, SheetLayout, SourceRect};
pub use library::ClipLibrary;
pub use manifest::{ManifestClip, SheetManifest};
