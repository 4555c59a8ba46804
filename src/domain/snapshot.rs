// SPDX-License-Identifier: MPL-2.0
//! Read-model of the playback primitive's observable state.
//!
//! The snapshot is taken through the playback port whenever derived state is
//! recomputed. It normalizes the one awkward value an adapter may report:
//! a duration that is not yet known (metadata pending) or not representable
//! (non-finite), which all clamping logic treats as a zero upper bound.

/// Point-in-time view of the playback primitive.
///
/// Invariant: `position_secs <= duration_secs` once the duration is known;
/// the primitive owns that invariant, the snapshot only reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSnapshot {
    /// Current position in seconds, >= 0.
    pub position_secs: f64,
    /// Total duration in seconds, `None` until metadata is available.
    pub duration_secs: Option<f64>,
    /// Whether playback is paused.
    pub is_paused: bool,
    /// Whether playback has reached the end of the media.
    pub is_ended: bool,
    /// Current volume in [0.0, 1.0].
    pub volume: f32,
    /// Whether audio is muted (independent of the volume value).
    pub is_muted: bool,
    /// Current playback-rate multiplier.
    pub playback_rate: f64,
}

impl PlaybackSnapshot {
    /// Returns the duration usable as a clamping bound.
    ///
    /// Unknown, non-finite, or negative durations collapse to 0.0 rather
    /// than propagating an undefined value into seek arithmetic.
    #[must_use]
    pub fn known_duration(&self) -> f64 {
        match self.duration_secs {
            Some(d) if d.is_finite() && d > 0.0 => d,
            _ => 0.0,
        }
    }

    /// Returns true if the media should start playing on a toggle.
    #[must_use]
    pub fn should_resume(&self) -> bool {
        self.is_paused || self.is_ended
    }

    /// Fraction of the media already played, in [0.0, 1.0].
    ///
    /// Zero while the duration is unknown.
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        let duration = self.known_duration();
        if duration <= 0.0 {
            return 0.0;
        }
        (self.position_secs / duration).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn snapshot() -> PlaybackSnapshot {
        PlaybackSnapshot {
            position_secs: 5.0,
            duration_secs: Some(20.0),
            is_paused: false,
            is_ended: false,
            volume: 1.0,
            is_muted: false,
            playback_rate: 1.0,
        }
    }

    #[test]
    fn known_duration_passes_through_valid_values() {
        assert_abs_diff_eq!(snapshot().known_duration(), 20.0);
    }

    #[test]
    fn known_duration_collapses_unknown_to_zero() {
        let mut s = snapshot();
        s.duration_secs = None;
        assert_abs_diff_eq!(s.known_duration(), 0.0);

        s.duration_secs = Some(f64::NAN);
        assert_abs_diff_eq!(s.known_duration(), 0.0);

        s.duration_secs = Some(f64::INFINITY);
        assert_abs_diff_eq!(s.known_duration(), 0.0);

        s.duration_secs = Some(-3.0);
        assert_abs_diff_eq!(s.known_duration(), 0.0);
    }

    #[test]
    fn should_resume_when_paused_or_ended() {
        let mut s = snapshot();
        assert!(!s.should_resume());

        s.is_paused = true;
        assert!(s.should_resume());

        s.is_paused = false;
        s.is_ended = true;
        assert!(s.should_resume());
    }

    #[test]
    fn progress_ratio_is_position_over_duration() {
        assert_abs_diff_eq!(snapshot().progress_ratio(), 0.25);
    }

    #[test]
    fn progress_ratio_without_duration_is_zero() {
        let mut s = snapshot();
        s.duration_secs = None;
        assert_abs_diff_eq!(s.progress_ratio(), 0.0);
    }

    #[test]
    fn progress_ratio_clamps_overshoot() {
        let mut s = snapshot();
        s.position_secs = 25.0;
        assert_abs_diff_eq!(s.progress_ratio(), 1.0);
    }
}
