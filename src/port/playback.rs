// SPDX-License-Identifier: MPL-2.0
//! Playback port definition.
//!
//! This module defines the [`PlaybackControl`] trait over the pre-existing
//! media-playback primitive, and the notifications it emits.
//!
//! # Design Notes
//!
//! - The primitive is **stateful** and authoritative - the coordinator reads
//!   its state, never shadows it
//! - Setters are fire-and-forget: a `play()` request may complete after the
//!   call returns; the coordinator reacts to [`PlaybackEvent`]s instead of
//!   blocking
//! - The duration is `None` until the primitive has read the media's
//!   metadata

use crate::domain::PlaybackSnapshot;

/// Port for controlling and observing the playback primitive.
///
/// # Example
///
/// ```ignore
/// use cinebar::port::playback::PlaybackControl;
///
/// fn rewind(playback: &mut impl PlaybackControl) {
///     playback.set_position_secs(0.0);
///     playback.play();
/// }
/// ```
pub trait PlaybackControl {
    /// Requests playback to start or resume.
    fn play(&mut self);

    /// Requests playback to pause at the current position.
    fn pause(&mut self);

    /// Current position in seconds.
    fn position_secs(&self) -> f64;

    /// Requests a jump to the given position in seconds.
    fn set_position_secs(&mut self, secs: f64);

    /// Total duration in seconds, `None` until metadata is known.
    fn duration_secs(&self) -> Option<f64>;

    /// Current volume in [0.0, 1.0].
    fn volume(&self) -> f32;

    /// Sets the volume.
    fn set_volume(&mut self, volume: f32);

    /// Whether audio is muted.
    fn is_muted(&self) -> bool;

    /// Sets the muted flag, independent of the volume value.
    fn set_muted(&mut self, muted: bool);

    /// Current playback-rate multiplier.
    fn playback_rate(&self) -> f64;

    /// Sets the playback-rate multiplier.
    fn set_playback_rate(&mut self, rate: f64);

    /// Whether playback is paused.
    fn is_paused(&self) -> bool;

    /// Whether playback has reached the end of the media.
    fn is_ended(&self) -> bool;

    /// Takes a point-in-time snapshot of the observable state.
    fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            position_secs: self.position_secs(),
            duration_secs: self.duration_secs(),
            is_paused: self.is_paused(),
            is_ended: self.is_ended(),
            volume: self.volume(),
            is_muted: self.is_muted(),
            playback_rate: self.playback_rate(),
        }
    }
}

/// Unsolicited notifications emitted by the playback primitive.
///
/// Every variant triggers a derived-state refresh in the coordinator,
/// whether or not the change originated from one of its own commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Playback started or resumed.
    Started,
    /// Playback paused.
    Paused,
    /// The position advanced during normal playback or after a seek.
    PositionChanged,
    /// Metadata (including the duration) became available.
    MetadataReady,
    /// Volume or muted flag changed through any path.
    VolumeChanged,
}
