// SPDX-License-Identifier: MPL-2.0
//! The cinema (immersive) mode state machine.
//!
//! Cinema mode couples the page-wide immersive styling with the fullscreen
//! capability. The machine tracks whether entering the mode acquired
//! fullscreen itself, so leaving it knows whether to release fullscreen it
//! never owned. Capability errors are swallowed here: an unsupported or
//! denying host degrades to styling-only immersion, never a crash.

use crate::port::{FullscreenControl, FullscreenError, FullscreenTarget, PresentationSurface};

/// Immersive-mode state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CinemaMode {
    /// Immersive styling off.
    #[default]
    Off,
    /// Immersive styling on; fullscreen is not owned by the mode (the page
    /// was already fullscreen, or the mode's own request failed).
    OnStandalone,
    /// Immersive styling on and the mode's own fullscreen request
    /// succeeded, so leaving the mode releases fullscreen.
    OnFullscreenOwned,
}

impl CinemaMode {
    /// Returns true if immersive styling is active.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Returns true if the mode acquired fullscreen itself.
    #[must_use]
    pub fn owns_fullscreen(self) -> bool {
        matches!(self, Self::OnFullscreenOwned)
    }
}

/// Toggles cinema mode, returning the successor state.
///
/// Styling is applied before any fullscreen call so a denying host still
/// leaves the page visually immersed (best-effort).
pub fn toggle<F, S>(mode: CinemaMode, fullscreen: &mut F, surface: &mut S) -> CinemaMode
where
    F: FullscreenControl,
    S: PresentationSurface,
{
    match mode {
        CinemaMode::Off => {
            surface.set_immersive(true);
            match fullscreen.current_target() {
                None => match fullscreen.request(FullscreenTarget::PageRoot) {
                    Ok(()) => CinemaMode::OnFullscreenOwned,
                    Err(err) => {
                        warn_swallowed("cinema fullscreen request", &err);
                        CinemaMode::OnStandalone
                    }
                },
                Some(FullscreenTarget::PageRoot) => CinemaMode::OnStandalone,
                Some(FullscreenTarget::PlaybackSurface) => {
                    // Prefer page-root fullscreen for a consistent immersive
                    // layout; keep the degraded state if the host refuses.
                    if let Err(err) = fullscreen.exit() {
                        warn_swallowed("cinema fullscreen retarget exit", &err);
                    } else if let Err(err) = fullscreen.request(FullscreenTarget::PageRoot) {
                        warn_swallowed("cinema fullscreen retarget request", &err);
                    }
                    CinemaMode::OnStandalone
                }
            }
        }
        CinemaMode::OnStandalone => {
            surface.set_immersive(false);
            CinemaMode::Off
        }
        CinemaMode::OnFullscreenOwned => {
            surface.set_immersive(false);
            if fullscreen.is_active() {
                if let Err(err) = fullscreen.exit() {
                    warn_swallowed("cinema fullscreen release", &err);
                }
            }
            CinemaMode::Off
        }
    }
}

/// Reacts to a fullscreen exit triggered outside the coordinator.
///
/// A fullscreen-owned mode must fold back to `Off` so the immersive
/// styling cannot drift apart from the fullscreen state; a standalone mode
/// never owned fullscreen and survives.
pub fn on_external_fullscreen_exit<S>(mode: CinemaMode, surface: &mut S) -> CinemaMode
where
    S: PresentationSurface,
{
    match mode {
        CinemaMode::OnFullscreenOwned => {
            surface.set_immersive(false);
            CinemaMode::Off
        }
        other => other,
    }
}

fn warn_swallowed(context: &str, err: &FullscreenError) {
    tracing::warn!(%err, "{context} failed, continuing degraded");
}
