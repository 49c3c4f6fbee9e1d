//! Error types for animation configuration and playback setup.

use thiserror::Error;

/// Errors that can occur when validating clips, layouts, or registrations
#[derive(Debug, Error)]
pub enum AnimError {
	/// Clip frame range is reversed
	#[error("Clip '{name}': end frame {end} precedes start frame {start}")]
	ReversedFrameRange {
		/// Clip name
		name: String,
		/// First frame of the clip
		start: u32,
		/// Last frame of the clip
		end: u32,
	},

	/// Clip frame rate is not a positive finite number
	#[error("Clip '{name}': frame rate {fps} is not positive and finite")]
	InvalidFrameRate {
		/// Clip name
		name: String,
		/// Rejected frames-per-second value
		fps: f64,
	},

	/// Clip name is empty
	#[error("Clip name must not be empty")]
	EmptyClipName,

	/// Layout dimension is zero
	#[error("Sheet layout dimension '{field}' must be greater than zero")]
	ZeroLayoutDimension {
		/// Name of the offending layout field
		field: &'static str,
	},

	/// Clip references frames beyond the sheet
	#[error(
		"Clip '{name}': frames {start}..={end} exceed sheet capacity of {capacity} frames"
	)]
	ClipOutOfBounds {
		/// Clip name
		name: String,
		/// First frame of the clip
		start: u32,
		/// Last frame of the clip
		end: u32,
		/// Total frames addressable in the sheet
		capacity: u32,
	},

	/// A clip with the same name is already registered
	#[error("Clip '{0}' is already registered")]
	DuplicateClip(String),

	/// No registered clip has the requested name
	#[error("Unknown clip '{0}'")]
	UnknownClip(String),
}

/// Errors that can occur when loading a sheet manifest
#[derive(Debug, Error)]
pub enum ManifestError {
	/// Manifest declares no clips
	#[error("Manifest declares no clips")]
	NoClips,

	/// Manifest declares a frame grid with no capacity
	#[error("Manifest grid of {columns} columns x {rows} rows holds no frames")]
	EmptyGrid {
		/// Declared column count
		columns: u32,
		/// Declared row count
		rows: u32,
	},

	/// Initial clip name does not match any declared clip
	#[error("Initial clip '{0}' is not declared in the manifest")]
	UnknownInitialClip(String),

	/// Display scale is not a positive finite number
	#[error("Display scale {0} is not positive and finite")]
	InvalidScale(f64),

	/// Clip or layout validation failed
	#[error(transparent)]
	Anim(#[from] AnimError),

	/// Manifest is not valid JSON
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
