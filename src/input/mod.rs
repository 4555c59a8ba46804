// SPDX-License-Identifier: MPL-2.0
//! Raw input event model.
//!
//! These are plain data types carrying what the coordinator needs from the
//! platform's input system: a device/pointer classification, a button
//! identifier, a key identifier, and a millisecond timestamp. Keeping them
//! as data (rather than a callback interface) makes the disambiguation
//! logic testable with synthetic timestamped events.
//!
//! Events are grouped by where they originate: the playback surface (where
//! taps and double-clicks land), the seek track, the discrete control
//! widgets, and document-level keyboard input.

/// Pointer device classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDevice {
    Mouse,
    Touch,
    Pen,
}

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary button (usually left).
    Primary,
    Secondary,
    Auxiliary,
}

/// An input event on the playback surface.
///
/// A single physical gesture typically produces several of these: the
/// platform reports pointer-up, mouse-up, click, and touch-end variants of
/// the same tap. Disambiguating them is the coordinator's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceEvent {
    pub kind: SurfaceEventKind,
    /// Monotonic timestamp in milliseconds.
    pub timestamp_ms: u64,
}

/// Classification of a playback-surface event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEventKind {
    /// Unified pointer-up, with the originating device class.
    PointerUp {
        device: PointerDevice,
        button: PointerButton,
    },
    /// Legacy mouse-up, reported alongside pointer-up on most platforms.
    MouseUp { button: PointerButton },
    /// Generic click, synthesized by the platform after the up events.
    Click,
    /// Touch-end, for platforms where pointer events are unreliable.
    TouchEnd,
    /// Double-click-class event.
    DoubleClick,
}

impl SurfaceEvent {
    /// Convenience constructor.
    #[must_use]
    pub fn new(kind: SurfaceEventKind, timestamp_ms: u64) -> Self {
        Self { kind, timestamp_ms }
    }
}

/// An input event on the seek track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackEvent {
    /// Pointer pressed on the track; begins a drag-seek.
    Pressed { x: f64 },
    /// Pointer moved (delivered page-wide while a drag may be active).
    Moved { x: f64 },
    /// Pointer released anywhere; ends a drag-seek.
    Released,
    /// Click on the track.
    Clicked { x: f64 },
    /// Keyboard interaction while the track has focus.
    Key(TrackKey),
}

/// Keys handled by the focused seek track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

/// A discrete control-widget interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// Play/pause button pressed.
    PlayPausePressed,
    /// Skip-back button pressed.
    SkipBackPressed,
    /// Skip-forward button pressed.
    SkipForwardPressed,
    /// Mute button pressed.
    MutePressed,
    /// Volume slider moved to a new value.
    VolumeChanged(f32),
    /// A rate selected in the speed selector.
    RateSelected(f64),
    /// Fullscreen button pressed.
    FullscreenPressed,
    /// Cinema-mode button pressed.
    CinemaPressed,
}

/// A document-level keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// True when the event originated from a text-entry context
    /// (input field, editable area); such events are ignored.
    pub from_text_entry: bool,
}

impl KeyEvent {
    /// Convenience constructor for a non-text-entry key press.
    #[must_use]
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            from_text_entry: false,
        }
    }
}

/// Key identifier for the shortcuts the control surface understands.
///
/// Letter keys match case-insensitively at the adapter boundary; anything
/// not listed here arrives as [`Key::Other`] and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    K,
    J,
    L,
    M,
    F,
    C,
    ArrowLeft,
    ArrowRight,
    Other,
}
