//! Prelude module for `flipbook_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```
//! use flipbook_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let layout = SheetLayout::new(64, 64, 4).unwrap();
//! let clip = Clip::new("idle", 0, 3, 8.0).unwrap();
//! ```

// Animation module types
#[doc(inline)]
pub use crate::anim::{
	// Errors
	AnimError,

	// Playback
	Animator,

	// Data model
	Clip,
	ClipLibrary,
	DestRect,
	Facing,

	// Configuration
	ManifestClip,
	ManifestError,
	SheetLayout,

	SheetManifest,
	SourceRect,
};

// Re-export the anim module for advanced usage
#[doc(inline)]
pub use crate::anim;
