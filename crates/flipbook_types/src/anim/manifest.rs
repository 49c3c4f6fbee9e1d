//! Sheet manifest loading and validation.
//!
//! A manifest is the startup configuration for one sprite sheet: the frame
//! grid geometry, the named clips, and the initial playback state. It is the
//! boundary where untrusted configuration becomes validated types — a
//! manifest that loads successfully can no longer produce an out-of-bounds
//! frame at draw time.
//!
//! # Format
//!
//! ```json
//! {
//!   "image": "pal_test.png",
//!   "frame_width": 64,
//!   "frame_height": 64,
//!   "columns": 4,
//!   "rows": 2,
//!   "clips": [
//!     { "name": "idle", "start_frame": 0, "end_frame": 3, "frames_per_second": 8.0 },
//!     { "name": "walk", "start_frame": 4, "end_frame": 7, "frames_per_second": 12.0 }
//!   ],
//!   "initial_clip": "idle",
//!   "autoplay": true,
//!   "scale": 2.0
//! }
//! ```
//!
//! `rows` defaults to 1, `autoplay` to true, `scale` to 1.0; `image` and
//! `initial_clip` are optional (the first declared clip plays by default).
//! Unrecognized keys are rejected.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::animator::Animator;
use super::clip::Clip;
use super::error::ManifestError;
use super::layout::SheetLayout;
use super::library::ClipLibrary;

/// One clip declaration inside a manifest.
///
/// Plain data as deserialized; converted into a validated [`Clip`] during
/// [`SheetManifest::build`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestClip {
	/// Clip name, used for lookup and the `initial_clip` reference
	pub name: String,
	/// First sheet frame of the clip (inclusive)
	pub start_frame: u32,
	/// Last sheet frame of the clip (inclusive)
	pub end_frame: u32,
	/// Playback rate in frames per second
	pub frames_per_second: f64,
}

/// Startup configuration for one sprite sheet.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetManifest {
	/// Path to the sheet image, relative to the manifest file.
	///
	/// The core library never reads it — playback does not depend on pixel
	/// data — but tooling can use it to cross-check the declared grid
	/// against real image dimensions.
	#[serde(default)]
	pub image: Option<PathBuf>,

	/// Frame cell width in pixels
	pub frame_width: u32,

	/// Frame cell height in pixels
	pub frame_height: u32,

	/// Frame cells per sheet row
	pub columns: u32,

	/// Number of frame rows in the sheet
	#[serde(default = "default_rows")]
	pub rows: u32,

	/// Declared clips, in presentation order
	pub clips: Vec<ManifestClip>,

	/// Name of the clip to play first; defaults to the first declared clip
	#[serde(default)]
	pub initial_clip: Option<String>,

	/// Whether playback starts running
	#[serde(default = "default_autoplay")]
	pub autoplay: bool,

	/// Display scale factor for the host's destination rectangle
	#[serde(default = "default_scale")]
	pub scale: f64,
}

fn default_rows() -> u32 {
	1
}

fn default_autoplay() -> bool {
	true
}

fn default_scale() -> f64 {
	1.0
}

impl SheetManifest {
	/// Parses a manifest from a JSON string.
	///
	/// Syntax only; call [`build`](Self::build) to validate the contents.
	///
	/// # Errors
	///
	/// Returns an error if the string is not valid JSON for this schema.
	pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Loads a manifest from a JSON file.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or is not valid JSON for
	/// this schema.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
		let path = path.as_ref();
		let manifest = Self::from_json_str(&fs::read_to_string(path)?)?;
		log::debug!(
			"loaded manifest {} ({} clips, {}x{} grid)",
			path.display(),
			manifest.clips.len(),
			manifest.columns,
			manifest.rows
		);
		Ok(manifest)
	}

	/// Returns the sheet layout declared by this manifest.
	///
	/// # Errors
	///
	/// Returns an error if any geometry field is zero.
	pub fn layout(&self) -> Result<SheetLayout, ManifestError> {
		Ok(SheetLayout::new(self.frame_width, self.frame_height, self.columns)?)
	}

	/// Returns the name of the clip playback starts on.
	pub fn initial_clip_name(&self) -> Option<&str> {
		self.initial_clip
			.as_deref()
			.or_else(|| self.clips.first().map(|clip| clip.name.as_str()))
	}

	/// Validates the manifest into a ready-to-play library and animator.
	///
	/// Every configuration error surfaces here, before playback can start:
	/// bad geometry, an empty grid, no clips, a clip falling outside the
	/// declared grid, duplicate or unknown clip names, a non-positive
	/// display scale.
	///
	/// # Errors
	///
	/// Returns the first validation failure encountered.
	pub fn build(&self) -> Result<(ClipLibrary, Animator), ManifestError> {
		let layout = self.layout()?;
		if self.rows == 0 {
			return Err(ManifestError::EmptyGrid {
				columns: self.columns,
				rows: self.rows,
			});
		}
		if self.clips.is_empty() {
			return Err(ManifestError::NoClips);
		}
		if !(self.scale.is_finite() && self.scale > 0.0) {
			return Err(ManifestError::InvalidScale(self.scale));
		}

		let mut library = ClipLibrary::new(layout, layout.capacity_for_rows(self.rows));
		for declared in &self.clips {
			let clip = Clip::new(
				declared.name.clone(),
				declared.start_frame,
				declared.end_frame,
				declared.frames_per_second,
			)?;
			library.register(clip)?;
		}

		let initial = match &self.initial_clip {
			Some(name) => library
				.get(name)
				.ok_or_else(|| ManifestError::UnknownInitialClip(name.clone()))?,
			// clips is non-empty, checked above
			None => &library.clips()[0],
		};

		let animator = Animator::new(initial.clone(), self.autoplay);
		Ok((library, animator))
	}
}
