//! Macro record/playback engine.
//!
//! Captures timestamped key transitions while the record key (F13) is
//! held, and replays them with reproduced inter-event delays when the
//! playback key (F14) is toggled. Replay loops until toggled off.
//!
//! The engine is polled, not interrupt-driven: the firmware calls
//! [`MacroEngine::on_key_transition`] for every physical key transition
//! and [`MacroEngine::on_tick`] once per scan pass. Delay reproduction
//! compares elapsed time against the recorded delay on every tick, so
//! accuracy is bounded by the scan period.
//!
//! Two replay policies exist (see [`EngineConfig`]): full-fidelity
//! replay of individual press/release events, and tap replay of
//! recorded presses only, with a scripted substitution for Tab.

use tracing::debug;

use crate::host::{elapsed_ms, KeyboardHost};
use crate::keycode::{is_layer_control, kc, Keycode};

/// Maximum number of events in one recording session. Events beyond
/// this are silently dropped.
pub const BUFFER_CAPACITY: usize = 64;

// ---------------------------------------------------------------------------
// Data model
// ---------------------------------------------------------------------------

/// One captured key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedEvent {
    pub keycode: Keycode,
    pub pressed: bool,
    /// Delay since the previous recorded event (0 for the first event of
    /// a session).
    pub delay_ms: u16,
}

/// Engine mode. Recording and Playing are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Recording,
    Playing,
}

/// What to do with an incoming key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Hand the transition to normal firmware processing untouched.
    Forward,
    /// Swallow the transition without any state change.
    Suppress,
    /// Record key pressed: begin a recording session.
    StartRecording,
    /// Record key released: end the recording session.
    StopRecording,
    /// Capture into the recording buffer and also forward.
    Record,
    /// Playback key pressed: start or stop replay.
    TogglePlayback,
}

/// Replay and control-key policy.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Key that toggles recording while held.
    pub record_key: Keycode,
    /// Key that toggles playback on press.
    pub playback_key: Keycode,
    /// Capture releases as distinct events and replay press/release
    /// individually. When false, only presses are captured and replay
    /// taps each keycode.
    pub store_releases: bool,
    /// Replay a recorded Tab as the scripted Esc/Esc/Tab sequence
    /// instead of a plain tap. Only meaningful for tap replay.
    pub tab_substitution: bool,
    /// Drive the backlight as a recording/playback indicator.
    pub backlight_feedback: bool,
}

impl EngineConfig {
    /// Full-fidelity capture: press and release events with their own
    /// delays, backlight indicator, forced release of any key left
    /// pressed when playback stops.
    pub fn fidelity() -> Self {
        Self {
            record_key: kc::F13,
            playback_key: kc::F14,
            store_releases: true,
            tab_substitution: false,
            backlight_feedback: true,
        }
    }

    /// Press-only capture replayed as taps, with the scripted Tab
    /// substitution sequence.
    pub fn tap_replay() -> Self {
        Self {
            record_key: kc::F13,
            playback_key: kc::F14,
            store_releases: false,
            tab_substitution: true,
            backlight_feedback: false,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::fidelity()
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The record/playback state machine.
///
/// All state lives in this struct; the firmware instantiates one engine
/// at startup and routes its key-transition and scan-tick callbacks
/// through it. Single-threaded by construction — every method completes
/// within one callback invocation.
pub struct MacroEngine {
    config: EngineConfig,
    mode: Mode,
    buffer: [RecordedEvent; BUFFER_CAPACITY],
    len: usize,
    /// Clock reading of the previous recorded event; `None` until the
    /// first event of a session arrives.
    record_timer: Option<u16>,
    /// Clock reading of the last replayed event (or of playback start).
    playback_timer: u16,
    cursor: usize,
    /// Keycode left pressed by replay, released when playback stops.
    last_pressed: Keycode,
}

impl MacroEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            mode: Mode::Idle,
            buffer: [RecordedEvent {
                keycode: kc::NO,
                pressed: false,
                delay_ms: 0,
            }; BUFFER_CAPACITY],
            len: 0,
            record_timer: None,
            playback_timer: 0,
            cursor: 0,
            last_pressed: kc::NO,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Events captured in the most recent recording session.
    pub fn recorded(&self) -> &[RecordedEvent] {
        &self.buffer[..self.len]
    }

    /// Current playback position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    // -- Event classification --

    /// Decide the disposition of a key transition without applying it.
    pub fn classify(&self, keycode: Keycode, pressed: bool) -> Disposition {
        // Layer switching must keep working in every mode.
        if is_layer_control(keycode) {
            return Disposition::Forward;
        }

        if keycode == self.config.record_key {
            if self.mode == Mode::Playing {
                // Overlapping modes are forbidden; the record key does
                // nothing during playback.
                return Disposition::Suppress;
            }
            return if pressed {
                Disposition::StartRecording
            } else {
                Disposition::StopRecording
            };
        }

        // Inside a session every other key is an ordinary recordable
        // key, the playback key included.
        if self.mode == Mode::Recording {
            return Disposition::Record;
        }

        if keycode == self.config.playback_key && pressed {
            return Disposition::TogglePlayback;
        }

        Disposition::Forward
    }

    /// Handle a physical key transition.
    ///
    /// Returns `true` when the firmware should continue its normal
    /// processing of the key, `false` when the engine fully handled it.
    pub fn on_key_transition(
        &mut self,
        keycode: Keycode,
        pressed: bool,
        host: &mut impl KeyboardHost,
    ) -> bool {
        match self.classify(keycode, pressed) {
            Disposition::Forward => true,
            Disposition::Suppress => false,
            Disposition::StartRecording => {
                self.start_recording(host);
                false
            }
            Disposition::StopRecording => {
                self.stop_recording(host);
                false
            }
            Disposition::Record => {
                // Recording is observational: the key's normal action
                // still happens, so forward after capturing.
                self.record(keycode, pressed, host.now_ms());
                true
            }
            Disposition::TogglePlayback => {
                self.toggle_playback(host);
                false
            }
        }
    }

    // -- Recorder --

    fn start_recording(&mut self, host: &mut impl KeyboardHost) {
        debug!("recording started");
        self.mode = Mode::Recording;
        self.len = 0;
        self.record_timer = None;
        if self.config.backlight_feedback {
            host.set_backlight(1);
        }
    }

    fn stop_recording(&mut self, host: &mut impl KeyboardHost) {
        debug!(events = self.len, "recording stopped");
        self.mode = Mode::Idle;
        self.record_timer = None;
        if self.config.backlight_feedback {
            host.set_backlight(0);
        }
    }

    fn record(&mut self, keycode: Keycode, pressed: bool, now: u16) {
        if !self.config.store_releases && !pressed {
            // Press-only capture: releases are forwarded but not stored.
            return;
        }
        if self.len == BUFFER_CAPACITY {
            debug!(keycode, "recording buffer full, event dropped");
            return;
        }
        let delay_ms = match self.record_timer {
            Some(since) => elapsed_ms(now, since),
            None => 0,
        };
        self.buffer[self.len] = RecordedEvent {
            keycode,
            pressed,
            delay_ms,
        };
        self.len += 1;
        self.record_timer = Some(now);
        debug!(keycode, pressed, delay_ms, "recorded event");
    }

    // -- Player --

    fn toggle_playback(&mut self, host: &mut impl KeyboardHost) {
        if self.mode == Mode::Playing {
            debug!("playback stopped");
            self.mode = Mode::Idle;
            if self.last_pressed != kc::NO {
                // Never leave a key stuck down mid-replay.
                host.release(self.last_pressed);
                self.last_pressed = kc::NO;
            }
            if self.config.backlight_feedback {
                host.set_backlight(0);
            }
        } else {
            debug!(events = self.len, "playback started");
            self.mode = Mode::Playing;
            self.cursor = 0;
            self.playback_timer = host.now_ms();
            if self.config.backlight_feedback {
                host.set_backlight(1);
            }
        }
    }

    /// Advance playback by one scan tick.
    pub fn on_tick(&mut self, host: &mut impl KeyboardHost) {
        if self.mode != Mode::Playing {
            return;
        }
        // Nothing recorded: stay inert rather than spinning on an empty
        // buffer.
        if self.len == 0 {
            return;
        }
        if self.cursor >= self.len {
            self.cursor = 0;
        }

        let now = host.now_ms();
        if elapsed_ms(now, self.playback_timer) < self.buffer[self.cursor].delay_ms {
            return;
        }

        self.playback_timer = now;
        let event = self.buffer[self.cursor];
        self.cursor += 1;
        self.replay(event, host);
    }

    fn replay(&mut self, event: RecordedEvent, host: &mut impl KeyboardHost) {
        if self.config.tab_substitution && event.keycode == kc::TAB {
            // Scripted stand-in for a recorded Tab.
            host.tap_with_delay(kc::ESC, 10);
            host.tap_with_delay(kc::ESC, 100);
            host.tap_with_delay(kc::TAB, 10);
            return;
        }

        if self.config.store_releases {
            if event.pressed {
                host.press(event.keycode);
                self.last_pressed = event.keycode;
            } else {
                host.release(event.keycode);
                self.last_pressed = kc::NO;
            }
        } else {
            host.tap(event.keycode);
        }
    }
}

impl Default for MacroEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
