//! Clip registry with registration-time bounds validation.
//!
//! Playback never checks bounds — by the time a frame is drawn, every index
//! a clip can produce has already been proven to lie inside the sheet. This
//! module is where that proof happens.

use std::fmt;

use super::clip::Clip;
use super::error::AnimError;
use super::layout::SheetLayout;

/// Registry of clips sharing one sheet.
///
/// Owns the [`SheetLayout`] and the total number of frames the sheet can
/// address, and validates every clip against that capacity as it is
/// registered. Registration order is preserved so hosts can cycle through
/// clips with a select-clip control.
///
/// # Examples
///
/// ```
/// use flipbook_types::anim::{Clip, ClipLibrary, SheetLayout};
///
/// # fn main() -> Result<(), flipbook_types::anim::AnimError> {
/// let layout = SheetLayout::new(64, 64, 4)?;
/// let mut library = ClipLibrary::new(layout, 8);
///
/// library.register(Clip::new("idle", 0, 3, 8.0)?)?;
/// library.register(Clip::new("walk", 4, 7, 12.0)?)?;
///
/// // Frame 8 does not exist in an 8-frame sheet
/// let err = library.register(Clip::new("broken", 6, 8, 12.0)?);
/// assert!(err.is_err());
///
/// assert_eq!(library.len(), 2);
/// assert_eq!(library.require("walk")?.start_frame(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClipLibrary {
	layout: SheetLayout,
	frame_capacity: u32,
	clips: Vec<Clip>,
}

impl ClipLibrary {
	/// Creates an empty library for a sheet holding `frame_capacity` frames
	/// under `layout`.
	///
	/// Use [`SheetLayout::frame_capacity`] to derive the capacity from real
	/// image dimensions, or [`SheetLayout::capacity_for_rows`] when the grid
	/// is declared directly.
	pub fn new(layout: SheetLayout, frame_capacity: u32) -> Self {
		Self {
			layout,
			frame_capacity,
			clips: Vec::new(),
		}
	}

	/// Registers a clip, validating its frame range against the sheet.
	///
	/// # Errors
	///
	/// Returns an error if the clip's range reaches past the sheet's frame
	/// capacity, or if a clip with the same name is already registered.
	pub fn register(&mut self, clip: Clip) -> Result<(), AnimError> {
		if clip.end_frame() >= self.frame_capacity {
			return Err(AnimError::ClipOutOfBounds {
				name: clip.name().to_string(),
				start: clip.start_frame(),
				end: clip.end_frame(),
				capacity: self.frame_capacity,
			});
		}
		if self.get(clip.name()).is_some() {
			return Err(AnimError::DuplicateClip(clip.name().to_string()));
		}

		self.clips.push(clip);
		Ok(())
	}

	/// Looks up a clip by name.
	pub fn get(&self, name: &str) -> Option<&Clip> {
		self.clips.iter().find(|clip| clip.name() == name)
	}

	/// Looks up a clip by name, failing with [`AnimError::UnknownClip`].
	pub fn require(&self, name: &str) -> Result<&Clip, AnimError> {
		self.get(name).ok_or_else(|| AnimError::UnknownClip(name.to_string()))
	}

	/// Returns the clip registered after `name`, wrapping to the first.
	///
	/// This is the select-clip control: each event moves playback to the
	/// next registered clip in order. Returns `None` when `name` is unknown
	/// or the library is empty.
	pub fn next_after(&self, name: &str) -> Option<&Clip> {
		let position = self.clips.iter().position(|clip| clip.name() == name)?;
		self.clips.get((position + 1) % self.clips.len())
	}

	/// Returns all registered clips in registration order.
	#[inline]
	pub fn clips(&self) -> &[Clip] {
		&self.clips
	}

	/// Returns an iterator over registered clip names in order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.clips.iter().map(Clip::name)
	}

	/// Returns `true` if a clip with the given name is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Returns the number of registered clips.
	#[inline]
	pub fn len(&self) -> usize {
		self.clips.len()
	}

	/// Returns `true` if no clips are registered.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.clips.is_empty()
	}

	/// Returns the sheet layout shared by all registered clips.
	#[inline]
	pub fn layout(&self) -> &SheetLayout {
		&self.layout
	}

	/// Returns the total number of frames the sheet can address.
	#[inline]
	pub fn frame_capacity(&self) -> u32 {
		self.frame_capacity
	}
}

impl fmt::Display for ClipLibrary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"ClipLibrary({} clips, {} frames, {})",
			self.clips.len(),
			self.frame_capacity,
			self.layout
		)
	}
}
