// SPDX-License-Identifier: MPL-2.0
//! The input coordinator.
//!
//! One coordinator instance owns the mapping from raw input events to
//! semantic commands and keeps derived display state consistent with the
//! playback primitive. It is explicitly constructed with its three
//! collaborators and holds all transient control state (gesture windows,
//! cinema mode, drag flag) as plain fields, mutated only inside its
//! event-handling entry points. Everything runs on the caller's single
//! event-processing context; no entry point blocks.
//!
//! # Organization
//!
//! - [`command`]: The semantic command set
//! - [`gesture`]: Disambiguation of overlapping playback-surface events
//! - [`cinema`]: The immersive-mode state machine
//! - [`keymap`]: Document-level keyboard shortcuts

pub mod cinema;
pub mod command;
pub mod gesture;
pub mod keymap;

pub use cinema::CinemaMode;
pub use command::Command;
pub use gesture::GestureResolver;

use crate::config::Config;
use crate::domain::{PlaybackRate, SeekRatio, SkipStep, UiState, Volume};
use crate::input::{ControlEvent, KeyEvent, SurfaceEvent, TrackEvent, TrackKey};
use crate::port::{
    FullscreenControl, FullscreenEvent, FullscreenTarget, PlaybackControl, PlaybackEvent,
    PresentationSurface,
};

/// Tunable control parameters, resolved from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSettings {
    /// Step for the skip buttons and the J/L keys.
    pub skip_step: SkipStep,
    /// Step for arrow-key seeking.
    pub arrow_seek_step: SkipStep,
}

impl ControlSettings {
    /// Resolves settings from a loaded configuration, clamping
    /// out-of-range steps.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            skip_step: config
                .skip_step_secs
                .map(SkipStep::new)
                .unwrap_or_else(SkipStep::button_default),
            arrow_seek_step: config
                .arrow_seek_step_secs
                .map(SkipStep::new)
                .unwrap_or_else(SkipStep::arrow_default),
        }
    }
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            skip_step: SkipStep::button_default(),
            arrow_seek_step: SkipStep::arrow_default(),
        }
    }
}

/// Translates raw input into commands against the playback primitive and
/// the fullscreen capability, and keeps the presentation surface's derived
/// state in sync.
#[derive(Debug)]
pub struct Coordinator<P, F, S> {
    playback: P,
    fullscreen: F,
    surface: S,
    settings: ControlSettings,
    gesture: GestureResolver,
    cinema: CinemaMode,
    /// True while a drag-seek on the track is in progress.
    dragging: bool,
}

impl<P, F, S> Coordinator<P, F, S>
where
    P: PlaybackControl,
    F: FullscreenControl,
    S: PresentationSurface,
{
    /// Creates a coordinator and performs the initial display-state sync.
    pub fn new(playback: P, fullscreen: F, surface: S, settings: ControlSettings) -> Self {
        let mut coordinator = Self {
            playback,
            fullscreen,
            surface,
            settings,
            gesture: GestureResolver::new(),
            cinema: CinemaMode::Off,
            dragging: false,
        };
        coordinator.refresh();
        coordinator
    }

    /// Handles a raw event on the playback surface.
    pub fn handle_surface_event(&mut self, event: SurfaceEvent) {
        if let Some(command) = self.gesture.resolve(event) {
            self.execute(command);
        }
    }

    /// Handles a raw event on the seek track (or a page-wide pointer event
    /// relevant to an in-progress drag).
    pub fn handle_track_event(&mut self, event: TrackEvent) {
        match event {
            TrackEvent::Pressed { x } => {
                self.dragging = true;
                self.seek_to_track_x(x);
            }
            TrackEvent::Moved { x } => {
                if self.dragging {
                    self.seek_to_track_x(x);
                }
            }
            TrackEvent::Released => {
                self.dragging = false;
            }
            TrackEvent::Clicked { x } => self.seek_to_track_x(x),
            TrackEvent::Key(key) => {
                let command = match key {
                    TrackKey::ArrowLeft => Command::Skip(-self.settings.arrow_seek_step.value()),
                    TrackKey::ArrowRight => Command::Skip(self.settings.arrow_seek_step.value()),
                    TrackKey::Home => Command::SeekToRatio(SeekRatio::START),
                    TrackKey::End => Command::SeekToRatio(SeekRatio::END),
                };
                self.execute(command);
            }
        }
    }

    /// Handles a discrete control-widget interaction.
    pub fn handle_control_event(&mut self, event: ControlEvent) {
        let command = match event {
            ControlEvent::PlayPausePressed => Command::TogglePlayback,
            ControlEvent::SkipBackPressed => Command::Skip(-self.settings.skip_step.value()),
            ControlEvent::SkipForwardPressed => Command::Skip(self.settings.skip_step.value()),
            ControlEvent::MutePressed => Command::ToggleMute,
            ControlEvent::VolumeChanged(volume) => Command::SetVolume(Volume::new(volume)),
            ControlEvent::RateSelected(rate) => Command::SetRate(PlaybackRate::new(rate)),
            ControlEvent::FullscreenPressed => Command::ToggleFullscreen,
            ControlEvent::CinemaPressed => Command::ToggleCinemaMode,
        };
        self.execute(command);
    }

    /// Handles a document-level keyboard event.
    pub fn handle_key_event(&mut self, event: KeyEvent) {
        if let Some(command) = keymap::command_for_key(event, &self.settings) {
            self.execute(command);
        }
    }

    /// Reacts to a notification from the playback primitive.
    pub fn handle_playback_event(&mut self, _event: PlaybackEvent) {
        self.refresh();
    }

    /// Reacts to a fullscreen-state notification, whatever its trigger.
    pub fn handle_fullscreen_event(&mut self, _event: FullscreenEvent) {
        if !self.fullscreen.is_active() {
            self.cinema = cinema::on_external_fullscreen_exit(self.cinema, &mut self.surface);
        }
        self.refresh();
    }

    /// Executes one semantic command and refreshes derived state.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::TogglePlayback => {
                if self.playback.snapshot().should_resume() {
                    self.playback.play();
                } else {
                    self.playback.pause();
                }
            }
            Command::Skip(delta) => {
                let snapshot = self.playback.snapshot();
                let target = (snapshot.position_secs + delta).clamp(0.0, snapshot.known_duration());
                self.playback.set_position_secs(target);
            }
            Command::SeekToRatio(ratio) => {
                let duration = self.playback.snapshot().known_duration();
                self.playback.set_position_secs(ratio.value() * duration);
            }
            Command::SetVolume(volume) => {
                self.playback.set_volume(volume.value());
                if volume.is_silent() {
                    self.playback.set_muted(true);
                }
            }
            Command::ToggleMute => {
                let muted = self.playback.is_muted();
                self.playback.set_muted(!muted);
            }
            Command::SetRate(rate) => {
                self.playback.set_playback_rate(rate.value());
            }
            Command::ToggleFullscreen => self.toggle_fullscreen(),
            Command::ToggleCinemaMode => {
                self.cinema = cinema::toggle(self.cinema, &mut self.fullscreen, &mut self.surface);
            }
        }
        self.refresh();
    }

    /// Current cinema-mode state.
    #[must_use]
    pub fn cinema_mode(&self) -> CinemaMode {
        self.cinema
    }

    /// Resolved control settings.
    #[must_use]
    pub fn settings(&self) -> ControlSettings {
        self.settings
    }

    /// Read access to the playback collaborator.
    pub fn playback(&self) -> &P {
        &self.playback
    }

    /// Mutable access to the playback collaborator, for adapters that must
    /// reflect state changes originating outside the coordinator.
    pub fn playback_mut(&mut self) -> &mut P {
        &mut self.playback
    }

    /// Read access to the fullscreen collaborator.
    pub fn fullscreen(&self) -> &F {
        &self.fullscreen
    }

    /// Mutable access to the fullscreen collaborator, for adapters that
    /// must reflect state changes originating outside the coordinator.
    pub fn fullscreen_mut(&mut self) -> &mut F {
        &mut self.fullscreen
    }

    /// Read access to the presentation surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn toggle_fullscreen(&mut self) {
        let result = if self.fullscreen.is_active() {
            self.fullscreen.exit()
        } else {
            self.fullscreen.request(FullscreenTarget::PlaybackSurface)
        };
        if let Err(err) = result {
            tracing::warn!(%err, "fullscreen toggle failed, continuing degraded");
        }
    }

    fn seek_to_track_x(&mut self, x: f64) {
        let ratio = self.surface.seek_track_bounds().ratio_at(x);
        self.execute(Command::SeekToRatio(ratio));
    }

    /// Recomputes derived display state from the collaborators and pushes
    /// it to the presentation surface.
    fn refresh(&mut self) {
        let snapshot = self.playback.snapshot();
        let ui = UiState::derive(&snapshot, self.fullscreen.is_active());
        self.surface.apply_ui_state(&ui);
    }
}
