// SPDX-License-Identifier: MPL-2.0
//! `cinebar` replaces a platform's native media-player chrome with a unified
//! set of controls (play/pause, seek, skip, volume/mute, playback speed,
//! fullscreen, and an immersive "cinema" mode) driven entirely by user input
//! events.
//!
//! The crate owns the mapping from raw, overlapping input events to semantic
//! commands and keeps derived display state consistent with the playback
//! primitive's authoritative state. Playback itself, the fullscreen
//! capability, and the presentation surface are external collaborators
//! reached through the traits in [`port`].

#![doc(html_root_url = "https://docs.rs/cinebar/0.1.0")]

pub mod config;
pub mod coordinator;
pub mod domain;
pub mod error;
pub mod input;
pub mod port;
pub mod test_utils;
