// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the coordinator's collaborators.
//!
//! This module defines abstract interfaces that platform adapters implement.
//! The coordinator is written against these traits only; vendor-specific
//! fallbacks (prefixed fullscreen APIs, pointer-event quirks) belong in the
//! adapters.
//!
//! # Available Ports
//!
//! - [`playback`]: The pre-existing media-playback primitive
//! - [`fullscreen`]: The host's fullscreen capability, possibly absent
//! - [`surface`]: The presentation surface receiving derived display state
//!
//! # Design Notes
//!
//! - All traits use domain types only (no platform handles)
//! - Methods on the playback port are infallible fire-and-forget requests;
//!   completion is observed through notification events, never awaited
//! - Fullscreen methods return `Result` because the host may deny or lack
//!   the capability; the coordinator swallows those errors at its boundary

pub mod fullscreen;
pub mod playback;
pub mod surface;

// Re-export main types for convenience
pub use fullscreen::{
    FullscreenControl, FullscreenError, FullscreenEvent, FullscreenTarget, UnsupportedFullscreen,
};
pub use playback::{PlaybackControl, PlaybackEvent};
pub use surface::{PresentationSurface, TrackBounds};
