// SPDX-License-Identifier: MPL-2.0
//! Semantic commands issued against the collaborators.
//!
//! Every raw input path resolves to at most one of these per user intent;
//! execution lives in [`Coordinator::execute`](super::Coordinator::execute).

use crate::domain::{PlaybackRate, SeekRatio, Volume};

/// A semantic command, the unit of user intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Resume if paused or ended, pause otherwise.
    TogglePlayback,
    /// Move the position by a signed offset in seconds, clamped to
    /// [0, duration] (unknown duration clamps to 0).
    Skip(f64),
    /// Jump to a fraction of the duration.
    SeekToRatio(SeekRatio),
    /// Set the volume; zero volume also sets the muted flag.
    SetVolume(Volume),
    /// Flip the muted flag, independent of the volume value.
    ToggleMute,
    /// Switch to an allowed playback-rate multiplier.
    SetRate(PlaybackRate),
    /// Enter fullscreen on the playback surface, or exit if active.
    ToggleFullscreen,
    /// Toggle the immersive cinema mode.
    ToggleCinemaMode,
}
