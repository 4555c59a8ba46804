// SPDX-License-Identifier: MPL-2.0
//! Disambiguation of overlapping playback-surface events.
//!
//! A single physical tap produces several redundant events (pointer-up,
//! mouse-up, click, touch-end), and a double-click is reserved for the
//! fullscreen toggle. The resolver turns that stream into at most one
//! semantic command per physical gesture using two fixed windows:
//!
//! - 300 ms after a double-click, no event may toggle playback.
//! - 250 ms after a pointer-initiated toggle, click-class events (mouse-up,
//!   click, touch-end) are discarded as redundant reports of the same
//!   gesture. Pointer-up itself is exempt from this lock, so a fast
//!   independent double mouse-up still re-toggles.
//!
//! Both windows are plain timestamp comparisons; nothing is cancelled, a
//! pending lock simply expires.

use super::Command;
use crate::config::defaults::{DOUBLE_CLICK_SUPPRESSION_MS, POINTER_TOGGLE_SUPPRESSION_MS};
use crate::input::{PointerButton, PointerDevice, SurfaceEvent, SurfaceEventKind};

/// Resolves playback-surface events into semantic commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureResolver {
    /// Timestamp of the most recent double-click-class event.
    last_double_click_ms: Option<u64>,
    /// Expiry of the lock armed by a pointer-initiated toggle.
    suppress_click_until_ms: Option<u64>,
}

impl GestureResolver {
    /// Creates a resolver with no pending windows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves one surface event.
    ///
    /// Returns `None` for events that are redundant reports of an earlier
    /// gesture or carry a non-primary button.
    pub fn resolve(&mut self, event: SurfaceEvent) -> Option<Command> {
        let now = event.timestamp_ms;
        match event.kind {
            SurfaceEventKind::DoubleClick => {
                self.last_double_click_ms = Some(now);
                Some(Command::ToggleFullscreen)
            }
            SurfaceEventKind::PointerUp { device, button } => {
                if self.within_double_click_window(now) {
                    return None;
                }
                // The lock never applies here: a second independent
                // pointer-up inside the window re-toggles.
                let primary = button == PointerButton::Primary
                    || matches!(device, PointerDevice::Touch | PointerDevice::Pen);
                if !primary {
                    return None;
                }
                self.arm_lock(now);
                Some(Command::TogglePlayback)
            }
            SurfaceEventKind::MouseUp { button } => {
                if self.within_double_click_window(now) || self.lock_active(now) {
                    return None;
                }
                if button != PointerButton::Primary {
                    return None;
                }
                self.arm_lock(now);
                Some(Command::TogglePlayback)
            }
            SurfaceEventKind::Click => {
                if self.within_double_click_window(now) || self.lock_active(now) {
                    tracing::debug!(timestamp_ms = now, "suppressed redundant click");
                    return None;
                }
                Some(Command::TogglePlayback)
            }
            SurfaceEventKind::TouchEnd => {
                if self.within_double_click_window(now) || self.lock_active(now) {
                    return None;
                }
                // Touch-end does not arm the lock; it is itself the
                // fallback for platforms without reliable pointer events.
                Some(Command::TogglePlayback)
            }
        }
    }

    fn within_double_click_window(&self, now_ms: u64) -> bool {
        self.last_double_click_ms
            .is_some_and(|at| now_ms.saturating_sub(at) < DOUBLE_CLICK_SUPPRESSION_MS)
    }

    fn lock_active(&self, now_ms: u64) -> bool {
        self.suppress_click_until_ms.is_some_and(|until| now_ms < until)
    }

    fn arm_lock(&mut self, now_ms: u64) {
        self.suppress_click_until_ms = Some(now_ms + POINTER_TOGGLE_SUPPRESSION_MS);
    }
}
