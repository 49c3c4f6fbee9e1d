//! `flipbook-rs` animates sprite sheets the boring, reliable way: a fixed
//! timestep accumulator steps a frame index through a named clip, and every
//! tick yields a source rectangle for the host to blit. Geometry and clips
//! are configuration, not code.
//!
//! The actual types live in [`flipbook_types`]; this crate re-exports them
//! and carries the demo tooling.

pub use flipbook_types::*;
