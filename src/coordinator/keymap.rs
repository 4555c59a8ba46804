// SPDX-License-Identifier: MPL-2.0
//! Document-level keyboard shortcuts.
//!
//! The familiar streaming-player layout: Space/K toggle playback, arrows
//! seek by the small step, J/L by the large step, M mutes, F toggles
//! fullscreen, C toggles cinema mode. Events originating from a
//! text-entry context are ignored so typing never drives the player.

use super::{Command, ControlSettings};
use crate::input::{Key, KeyEvent};

/// Maps a keyboard event to a command, if any.
#[must_use]
pub fn command_for_key(event: KeyEvent, settings: &ControlSettings) -> Option<Command> {
    if event.from_text_entry {
        return None;
    }
    match event.key {
        Key::Space | Key::K => Some(Command::TogglePlayback),
        Key::ArrowLeft => Some(Command::Skip(-settings.arrow_seek_step.value())),
        Key::ArrowRight => Some(Command::Skip(settings.arrow_seek_step.value())),
        Key::J => Some(Command::Skip(-settings.skip_step.value())),
        Key::L => Some(Command::Skip(settings.skip_step.value())),
        Key::M => Some(Command::ToggleMute),
        Key::F => Some(Command::ToggleFullscreen),
        Key::C => Some(Command::ToggleCinemaMode),
        Key::Other => None,
    }
}
