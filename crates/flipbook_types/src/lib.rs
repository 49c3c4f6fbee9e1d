//! This crate provides the core animation types for the `flipbook-rs` project.
//!
//! A sprite sheet is a single image holding many fixed-size frames in a grid.
//! This crate owns everything that is *not* rendering: describing the grid
//! ([`anim::SheetLayout`]), naming contiguous frame ranges with their playback
//! rates ([`anim::Clip`]), registering them with bounds validation
//! ([`anim::ClipLibrary`]), and advancing playback from elapsed-time ticks
//! ([`anim::Animator`]). Each tick the animator hands the host a source
//! rectangle to blit; what the host blits it *onto* stays the host's business.
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use flipbook_types::prelude::*;
//!
//! # fn main() -> Result<(), AnimError> {
//! let layout = SheetLayout::new(64, 64, 4)?;
//! let mut library = ClipLibrary::new(layout, 8);
//! library.register(Clip::new("walk", 0, 3, 12.0)?)?;
//!
//! let mut animator = Animator::new(library.require("walk")?.clone(), true);
//! animator.advance(84.0);
//! let rect = animator.source_rect(&layout);
//! assert_eq!((rect.x, rect.y), (64, 0));
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use flipbook_types::anim::{Clip, SheetLayout};
//!
//! let clip = Clip::new("idle", 0, 0, 1.0);
//! assert!(clip.is_ok());
//! ```

pub mod anim;

/// `use flipbook_types::prelude::*;` to import commonly used items.
pub mod prelude;
