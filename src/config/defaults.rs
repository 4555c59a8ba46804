// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Skip**: Seek step bounds for skip buttons and keyboard seeking
//! - **Volume**: Playback volume bounds
//! - **Playback Rate**: Allowed playback-rate multipliers
//! - **Gesture**: Fixed suppression windows for input disambiguation

// ==========================================================================
// Skip / Seek Step Defaults
// ==========================================================================

/// Default skip step for the skip buttons and the J/L keys (in seconds).
pub const DEFAULT_SKIP_STEP_SECS: f64 = 10.0;

/// Default seek step for the arrow keys (in seconds).
pub const DEFAULT_ARROW_SEEK_STEP_SECS: f64 = 5.0;

/// Minimum allowed seek step in seconds.
pub const MIN_SEEK_STEP_SECS: f64 = 0.5;

/// Maximum allowed seek step in seconds.
pub const MAX_SEEK_STEP_SECS: f64 = 60.0;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level (1.0 = 100%).
pub const MAX_VOLUME: f32 = 1.0;

/// Default playback volume.
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Volume at or below this threshold counts as silent for the muted
/// micro-state (a slider dragged to zero implies "muted").
pub const SILENT_VOLUME_THRESHOLD: f32 = 0.001;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Default playback rate (1.0 = normal speed).
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// Allowed playback-rate multipliers for the speed selector.
/// Ordered from slowest to fastest; requested rates snap to the nearest entry.
pub const PLAYBACK_RATE_PRESETS: &[f64] = &[0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

// ==========================================================================
// Gesture Suppression Windows
// ==========================================================================

/// Cool-down after a double-click during which no event may toggle playback
/// (double-click is reserved for the fullscreen toggle).
pub const DOUBLE_CLICK_SUPPRESSION_MS: u64 = 300;

/// Lifetime of the lock armed by a pointer-initiated playback toggle.
/// Click-class events arriving inside it are redundant reports of the same
/// physical gesture and are discarded.
pub const POINTER_TOGGLE_SUPPRESSION_MS: u64 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Seek step validation
    assert!(MIN_SEEK_STEP_SECS > 0.0);
    assert!(MAX_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS <= MAX_SEEK_STEP_SECS);
    assert!(DEFAULT_ARROW_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_ARROW_SEEK_STEP_SECS <= MAX_SEEK_STEP_SECS);

    // Volume validation
    assert!(MIN_VOLUME == 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(SILENT_VOLUME_THRESHOLD > 0.0);
    assert!(SILENT_VOLUME_THRESHOLD < MAX_VOLUME);

    // Suppression windows validation
    assert!(DOUBLE_CLICK_SUPPRESSION_MS > 0);
    assert!(POINTER_TOGGLE_SUPPRESSION_MS > 0);
    assert!(POINTER_TOGGLE_SUPPRESSION_MS <= DOUBLE_CLICK_SUPPRESSION_MS);

    // Ensure presets array is not empty
    assert!(!PLAYBACK_RATE_PRESETS.is_empty());

    // Validate presets are positive and in ascending order
    let mut i = 0;
    while i < PLAYBACK_RATE_PRESETS.len() {
        assert!(PLAYBACK_RATE_PRESETS[i] > 0.0);
        if i > 0 {
            assert!(PLAYBACK_RATE_PRESETS[i] > PLAYBACK_RATE_PRESETS[i - 1]);
        }
        i += 1;
    }

    // Ensure the default rate (1.0) is in the presets
    let mut found_default = false;
    let mut j = 0;
    while j < PLAYBACK_RATE_PRESETS.len() {
        // Use integer comparison to avoid floating point issues
        if (PLAYBACK_RATE_PRESETS[j] * 100.0) as i32 == (DEFAULT_PLAYBACK_RATE * 100.0) as i32 {
            found_default = true;
        }
        j += 1;
    }
    assert!(found_default);
};
