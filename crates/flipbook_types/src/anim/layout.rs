//! Sheet geometry and rectangle mapping.
//!
//! This module owns the pixel math: how a linear frame index maps into a
//! sheet image, and where a scaled frame lands in a host viewport.

use std::fmt;

use super::error::AnimError;

/// Grid geometry of a sprite sheet.
///
/// Frames are fixed-size cells laid out row-major: index 0 is the top-left
/// cell, indices increase left to right, then wrap to the next row after
/// `columns` cells. For index `i`:
///
/// ```text
/// col = i % columns          source_x = col * frame_width
/// row = i / columns          source_y = row * frame_height
/// ```
///
/// # Examples
///
/// ```
/// use flipbook_types::anim::SheetLayout;
///
/// let layout = SheetLayout::new(64, 64, 4).unwrap();
/// let rect = layout.source_rect(5);
/// assert_eq!((rect.x, rect.y), (64, 64)); // col 1, row 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
	frame_width: u32,
	frame_height: u32,
	columns: u32,
}

impl SheetLayout {
	/// Creates a new sheet layout.
	///
	/// # Arguments
	///
	/// * `frame_width` - Cell width in pixels
	/// * `frame_height` - Cell height in pixels
	/// * `columns` - Cells per row
	///
	/// # Errors
	///
	/// Returns an error if any dimension is zero.
	pub fn new(frame_width: u32, frame_height: u32, columns: u32) -> Result<Self, AnimError> {
		if frame_width == 0 {
			return Err(AnimError::ZeroLayoutDimension {
				field: "frame_width",
			});
		}
		if frame_height == 0 {
			return Err(AnimError::ZeroLayoutDimension {
				field: "frame_height",
			});
		}
		if columns == 0 {
			return Err(AnimError::ZeroLayoutDimension {
				field: "columns",
			});
		}

		Ok(Self {
			frame_width,
			frame_height,
			columns,
		})
	}

	/// Returns the cell width in pixels.
	#[inline]
	pub fn frame_width(&self) -> u32 {
		self.frame_width
	}

	/// Returns the cell height in pixels.
	#[inline]
	pub fn frame_height(&self) -> u32 {
		self.frame_height
	}

	/// Returns the number of cells per row.
	#[inline]
	pub fn columns(&self) -> u32 {
		self.columns
	}

	/// Maps a linear frame index to its pixel rectangle in the sheet.
	///
	/// Pure grid math; whether the index actually lies inside a given image
	/// is a registration-time concern (see
	/// [`ClipLibrary::register`](super::ClipLibrary::register)).
	pub fn source_rect(&self, index: u32) -> SourceRect {
		let col = index % self.columns;
		let row = index / self.columns;
		SourceRect {
			x: col * self.frame_width,
			y: row * self.frame_height,
			w: self.frame_width,
			h: self.frame_height,
		}
	}

	/// Returns how many whole frames a sheet image of the given pixel size
	/// can address under this layout.
	///
	/// Only fully covered cells count: a sheet narrower than `columns` full
	/// cells contributes its truncated column count per row, and partial
	/// rows or columns at the image edge are ignored. A clip referencing a
	/// clipped cell should fail registration rather than blit a truncated
	/// rectangle.
	pub fn frame_capacity(&self, image_width: u32, image_height: u32) -> u32 {
		let cols = (image_width / self.frame_width).min(self.columns);
		let rows = image_height / self.frame_height;
		cols * rows
	}

	/// Returns the capacity of a full grid with the given number of rows.
	///
	/// Convenience for manifests that declare the grid directly instead of
	/// deriving it from image dimensions.
	#[inline]
	pub fn capacity_for_rows(&self, rows: u32) -> u32 {
		self.columns * rows
	}
}

impl fmt::Display for SheetLayout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}×{} cells, {} per row",
			self.frame_width, self.frame_height, self.columns
		)
	}
}

/// Pixel rectangle into the sheet image, one frame's worth of source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
	/// Left edge in sheet pixels
	pub x: u32,
	/// Top edge in sheet pixels
	pub y: u32,
	/// Rectangle width in pixels
	pub w: u32,
	/// Rectangle height in pixels
	pub h: u32,
}

impl fmt::Display for SourceRect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{} @ ({}, {})", self.w, self.h, self.x, self.y)
	}
}

/// Horizontal facing of a blitted frame.
///
/// Sheets store frames facing one way; the host renders the opposite facing
/// by mirroring the destination transform. The animator itself is
/// facing-agnostic — this type only travels alongside [`DestRect`] so hosts
/// agree on which way is flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
	/// As stored in the sheet
	#[default]
	Right,
	/// Mirrored horizontally at draw time
	Left,
}

impl Facing {
	/// Returns `true` if the host should mirror the destination transform.
	#[inline]
	pub fn is_mirrored(self) -> bool {
		matches!(self, Self::Left)
	}
}

/// Destination rectangle in viewport coordinates.
///
/// The animator only dictates the source rectangle; where the frame lands is
/// the caller's choice. This helper covers the common case of drawing the
/// frame centered in a viewport at a display scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestRect {
	/// Left edge in viewport coordinates
	pub x: f64,
	/// Top edge in viewport coordinates
	pub y: f64,
	/// Scaled width
	pub w: f64,
	/// Scaled height
	pub h: f64,
}

impl DestRect {
	/// Centers one frame of `layout`, scaled by `scale`, in a viewport of
	/// the given size.
	///
	/// # Examples
	///
	/// ```
	/// use flipbook_types::anim::{DestRect, SheetLayout};
	///
	/// let layout = SheetLayout::new(64, 64, 4).unwrap();
	/// let dest = DestRect::centered(&layout, 256.0, 256.0, 2.0);
	/// assert_eq!((dest.x, dest.y, dest.w, dest.h), (64.0, 64.0, 128.0, 128.0));
	/// ```
	pub fn centered(layout: &SheetLayout, viewport_w: f64, viewport_h: f64, scale: f64) -> Self {
		let w = f64::from(layout.frame_width()) * scale;
		let h = f64::from(layout.frame_height()) * scale;
		Self {
			x: (viewport_w - w) / 2.0,
			y: (viewport_h - h) / 2.0,
			w,
			h,
		}
	}
}

impl fmt::Display for DestRect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{} @ ({}, {})", self.w, self.h, self.x, self.y)
	}
}
