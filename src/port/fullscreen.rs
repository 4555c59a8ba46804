// SPDX-License-Identifier: MPL-2.0
//! Fullscreen port definition.
//!
//! This module defines the [`FullscreenControl`] trait over the host's
//! fullscreen capability. The capability must be treated as optionally
//! unsupported: on platforms without it, every call is a rejected request,
//! never a crash.
//!
//! # Design Notes
//!
//! - Vendor-prefixed API variants are an adapter concern; the coordinator
//!   sees one trait
//! - Requests may complete asynchronously on the host's side; the
//!   authoritative state is whatever [`current_target`] reports, refreshed
//!   on [`FullscreenEvent::Changed`] notifications
//!
//! [`current_target`]: FullscreenControl::current_target

use std::fmt;

/// What the host is asked to bring fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenTarget {
    /// The media element itself.
    PlaybackSurface,
    /// The page's root container, used by cinema mode so the whole
    /// page fills the screen.
    PageRoot,
}

/// Failure of a fullscreen request or exit.
///
/// These never escape the coordinator: they are swallowed at the boundary
/// where the call is made, degrading to best-effort UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullscreenError {
    /// The platform has no fullscreen capability.
    Unsupported,
    /// The host denied the request (e.g. not triggered by a user gesture).
    Denied(String),
}

impl fmt::Display for FullscreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FullscreenError::Unsupported => write!(f, "fullscreen capability unavailable"),
            FullscreenError::Denied(reason) => write!(f, "fullscreen request denied: {}", reason),
        }
    }
}

/// Port for the host's fullscreen capability.
pub trait FullscreenControl {
    /// Requests fullscreen on the given target.
    ///
    /// # Errors
    ///
    /// Returns a [`FullscreenError`] if the capability is absent or the
    /// host rejects the request.
    fn request(&mut self, target: FullscreenTarget) -> Result<(), FullscreenError>;

    /// Requests an exit from fullscreen.
    ///
    /// # Errors
    ///
    /// Returns a [`FullscreenError`] if the capability is absent or the
    /// host rejects the request.
    fn exit(&mut self) -> Result<(), FullscreenError>;

    /// The currently fullscreen target, or `None` when not fullscreen.
    fn current_target(&self) -> Option<FullscreenTarget>;

    /// Returns true if any target is currently fullscreen.
    fn is_active(&self) -> bool {
        self.current_target().is_some()
    }
}

/// Notification that the fullscreen state changed through any trigger,
/// including mechanisms outside the coordinator's control (an escape-style
/// dismissal, another component's request).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenEvent {
    Changed,
}

/// Canonical adapter for platforms without a fullscreen capability.
///
/// Every request fails with [`FullscreenError::Unsupported`] and no target
/// is ever active, so coordinator commands touching fullscreen degrade to
/// silent no-ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedFullscreen;

impl FullscreenControl for UnsupportedFullscreen {
    fn request(&mut self, _target: FullscreenTarget) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unsupported)
    }

    fn exit(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unsupported)
    }

    fn current_target(&self) -> Option<FullscreenTarget> {
        None
    }
}
