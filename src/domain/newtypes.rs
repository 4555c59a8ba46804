// SPDX-License-Identifier: MPL-2.0
//! Validated value types for playback control.
//!
//! These newtypes enforce validity at the type level: out-of-range numeric
//! input is clamped (or snapped, for rates) at construction and never
//! rejected, so a command carrying one of these values is always executable.

use crate::config::defaults::{
    DEFAULT_ARROW_SEEK_STEP_SECS, DEFAULT_PLAYBACK_RATE, DEFAULT_SKIP_STEP_SECS,
    DEFAULT_VOLUME, MAX_SEEK_STEP_SECS, MAX_VOLUME, MIN_SEEK_STEP_SECS, MIN_VOLUME,
    PLAYBACK_RATE_PRESETS, SILENT_VOLUME_THRESHOLD,
};

// =============================================================================
// Volume
// =============================================================================

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use cinebar::domain::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// let too_loud = Volume::new(2.0);
/// assert_eq!(too_loud.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(MIN_VOLUME);
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if this volume counts as silent.
    ///
    /// Dragging the volume slider to zero implies the muted micro-state.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 <= SILENT_VOLUME_THRESHOLD
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

// =============================================================================
// SeekRatio
// =============================================================================

/// Position on the seek track as a fraction of the duration, in [0.0, 1.0].
///
/// Derived from a pointer position relative to the track's bounding box,
/// or from Home/End keyboard seeking (0.0 and 1.0 exactly).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekRatio(f64);

impl SeekRatio {
    /// Creates a new seek ratio, clamping to [0.0, 1.0].
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        if ratio.is_nan() {
            return Self(0.0);
        }
        Self(ratio.clamp(0.0, 1.0))
    }

    /// Start of the track.
    pub const START: Self = Self(0.0);

    /// End of the track.
    pub const END: Self = Self(1.0);

    /// Returns the ratio as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback-rate multiplier, guaranteed to be one of the allowed presets.
///
/// Requested rates snap to the nearest preset; there is no smoothing or
/// interpolation between rates.
///
/// # Example
///
/// ```
/// use cinebar::domain::PlaybackRate;
///
/// assert_eq!(PlaybackRate::new(1.5).value(), 1.5);
/// // Off-preset values snap to the nearest allowed multiplier
/// assert_eq!(PlaybackRate::new(1.4).value(), 1.5);
/// assert_eq!(PlaybackRate::new(100.0).value(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a new playback rate, snapping to the nearest allowed preset.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if rate.is_nan() {
            return Self(DEFAULT_PLAYBACK_RATE);
        }
        let mut nearest = DEFAULT_PLAYBACK_RATE;
        let mut best_distance = f64::INFINITY;
        for &preset in PLAYBACK_RATE_PRESETS {
            let distance = (preset - rate).abs();
            if distance < best_distance {
                best_distance = distance;
                nearest = preset;
            }
        }
        Self(nearest)
    }

    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// The allowed multipliers, slowest to fastest.
    #[must_use]
    pub fn presets() -> &'static [f64] {
        PLAYBACK_RATE_PRESETS
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(DEFAULT_PLAYBACK_RATE)
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Seek step in seconds, guaranteed to be within valid range (0.5–60.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self(DEFAULT_SKIP_STEP_SECS);
        }
        Self(secs.clamp(MIN_SEEK_STEP_SECS, MAX_SEEK_STEP_SECS))
    }

    /// Default step for the skip buttons and the J/L keys.
    #[must_use]
    pub fn button_default() -> Self {
        Self(DEFAULT_SKIP_STEP_SECS)
    }

    /// Default step for arrow-key seeking.
    #[must_use]
    pub fn arrow_default() -> Self {
        Self(DEFAULT_ARROW_SEEK_STEP_SECS)
    }

    /// Returns the step in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn volume_clamps_to_valid_range() {
        assert_abs_diff_eq!(Volume::new(-0.5).value(), MIN_VOLUME);
        assert_abs_diff_eq!(Volume::new(1.5).value(), MAX_VOLUME);
        assert_abs_diff_eq!(Volume::new(0.5).value(), 0.5);
    }

    #[test]
    fn volume_nan_becomes_minimum() {
        assert_abs_diff_eq!(Volume::new(f32::NAN).value(), MIN_VOLUME);
    }

    #[test]
    fn volume_is_silent_detects_zero() {
        assert!(Volume::new(0.0).is_silent());
        assert!(Volume::new(0.0005).is_silent());
        assert!(!Volume::new(0.01).is_silent());
        assert!(!Volume::new(1.0).is_silent());
    }

    #[test]
    fn seek_ratio_clamps_to_unit_interval() {
        assert_abs_diff_eq!(SeekRatio::new(-0.2).value(), 0.0);
        assert_abs_diff_eq!(SeekRatio::new(1.7).value(), 1.0);
        assert_abs_diff_eq!(SeekRatio::new(0.25).value(), 0.25);
    }

    #[test]
    fn seek_ratio_endpoints_are_exact() {
        assert_eq!(SeekRatio::START.value(), 0.0);
        assert_eq!(SeekRatio::END.value(), 1.0);
    }

    #[test]
    fn seek_ratio_nan_becomes_start() {
        assert_eq!(SeekRatio::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn rate_keeps_exact_presets() {
        for &preset in PlaybackRate::presets() {
            assert_abs_diff_eq!(PlaybackRate::new(preset).value(), preset);
        }
    }

    #[test]
    fn rate_snaps_to_nearest_preset() {
        assert_abs_diff_eq!(PlaybackRate::new(0.9).value(), 1.0);
        assert_abs_diff_eq!(PlaybackRate::new(1.6).value(), 1.5);
        assert_abs_diff_eq!(PlaybackRate::new(0.0).value(), 0.25);
        assert_abs_diff_eq!(PlaybackRate::new(100.0).value(), 2.0);
    }

    #[test]
    fn rate_default_is_normal_speed() {
        assert_abs_diff_eq!(PlaybackRate::default().value(), 1.0);
    }

    #[test]
    fn skip_step_clamps_to_valid_range() {
        assert_abs_diff_eq!(SkipStep::new(0.0).value(), MIN_SEEK_STEP_SECS);
        assert_abs_diff_eq!(SkipStep::new(100.0).value(), MAX_SEEK_STEP_SECS);
        assert_abs_diff_eq!(SkipStep::new(5.0).value(), 5.0);
    }

    #[test]
    fn skip_step_defaults_match_config() {
        assert_abs_diff_eq!(SkipStep::button_default().value(), DEFAULT_SKIP_STEP_SECS);
        assert_abs_diff_eq!(SkipStep::arrow_default().value(), DEFAULT_ARROW_SEEK_STEP_SECS);
    }
}
