// SPDX-License-Identifier: MPL-2.0
//! Domain types for the control surface.
//!
//! # Organization
//!
//! - [`newtypes`]: Validated value types (volume, seek ratio, playback rate, skip step)
//! - [`snapshot`]: Read-model of the playback primitive's observable state
//! - [`time_format`]: Time-label formatting
//! - [`ui_state`]: Derived display state pushed to the presentation surface

pub mod newtypes;
pub mod snapshot;
pub mod time_format;
pub mod ui_state;

pub use newtypes::{PlaybackRate, SeekRatio, SkipStep, Volume};
pub use snapshot::PlaybackSnapshot;
pub use ui_state::{FullscreenIcon, MuteIcon, PlayPauseIcon, UiState};
