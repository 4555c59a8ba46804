// SPDX-License-Identifier: MPL-2.0
//! Derived display state for the control bar.
//!
//! `UiState` is fully recomputed from a [`PlaybackSnapshot`] and the
//! fullscreen capability's current state; it is never mutated
//! independently, so the presentation surface can apply it wholesale
//! without diffing against previous pushes.

use super::snapshot::PlaybackSnapshot;
use super::time_format::format_time;
use crate::config::defaults::SILENT_VOLUME_THRESHOLD;

/// Icon state for the play/pause button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPauseIcon {
    /// Media is advancing; the button offers "pause".
    Playing,
    /// Media is paused or ended; the button offers "play".
    Paused,
}

/// Icon state for the mute button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteIcon {
    Muted,
    Audible,
}

/// Icon state for the fullscreen button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenIcon {
    Entered,
    Exited,
}

/// Display state derived from the collaborators' authoritative state.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub play_pause: PlayPauseIcon,
    pub mute: MuteIcon,
    /// Fraction of the media already played, in [0.0, 1.0].
    pub progress_ratio: f64,
    /// Rounded percentage for accessibility value attributes.
    pub progress_percent: u8,
    /// Current position rendered as `m:ss`.
    pub position_label: String,
    /// Total duration rendered as `m:ss` (`0:00` while unknown).
    pub duration_label: String,
    pub fullscreen: FullscreenIcon,
}

impl UiState {
    /// Recomputes the whole display state.
    #[must_use]
    pub fn derive(snapshot: &PlaybackSnapshot, fullscreen_active: bool) -> Self {
        let progress_ratio = snapshot.progress_ratio();
        let duration_label = match snapshot.duration_secs {
            Some(d) => format_time(d),
            None => format_time(f64::NAN),
        };
        Self {
            play_pause: if !snapshot.is_paused && !snapshot.is_ended {
                PlayPauseIcon::Playing
            } else {
                PlayPauseIcon::Paused
            },
            mute: if snapshot.is_muted || snapshot.volume <= SILENT_VOLUME_THRESHOLD {
                MuteIcon::Muted
            } else {
                MuteIcon::Audible
            },
            progress_ratio,
            progress_percent: (progress_ratio * 100.0).round() as u8,
            position_label: format_time(snapshot.position_secs),
            duration_label,
            fullscreen: if fullscreen_active {
                FullscreenIcon::Entered
            } else {
                FullscreenIcon::Exited
            },
        }
    }
}
