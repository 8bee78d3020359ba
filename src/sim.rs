//! Simulated scan loop and host.
//!
//! [`SimHost`] implements [`KeyboardHost`] over a virtual millisecond
//! clock and records every outbound action with its timestamp.
//! [`run_script`] reproduces the firmware's cooperative loop: advance
//! the clock one tick at a time, deliver any due key transitions to the
//! engine, then fire the scan tick.

use std::fmt;

use id80_engine::{keycode, KeyboardHost, Keycode, MacroEngine};

use crate::script::TimedTransition;

// ---------------------------------------------------------------------------
// SimHost
// ---------------------------------------------------------------------------

/// An outbound firmware action captured by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Press(Keycode),
    Release(Keycode),
    Tap(Keycode),
    TapWithDelay(Keycode, u16),
    Backlight(u8),
}

/// A host action with the virtual-clock timestamp it occurred at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggedAction {
    pub at_ms: u32,
    pub action: HostAction,
}

impl fmt::Display for LoggedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = |kc: Keycode| {
            keycode::name(kc)
                .map(String::from)
                .unwrap_or_else(|| format!("{kc:#06x}"))
        };
        match self.action {
            HostAction::Press(kc) => write!(f, "{:>8}ms  ↓ {}", self.at_ms, key(kc)),
            HostAction::Release(kc) => write!(f, "{:>8}ms  ↑ {}", self.at_ms, key(kc)),
            HostAction::Tap(kc) => write!(f, "{:>8}ms  ⇵ {}", self.at_ms, key(kc)),
            HostAction::TapWithDelay(kc, d) => {
                write!(f, "{:>8}ms  ⇵ {} (hold {}ms)", self.at_ms, key(kc), d)
            }
            HostAction::Backlight(level) => {
                write!(f, "{:>8}ms  backlight {}", self.at_ms, level)
            }
        }
    }
}

/// Virtual-clock host with an ordered action log.
#[derive(Default)]
pub struct SimHost {
    clock_ms: u32,
    actions: Vec<LoggedAction>,
}

impl SimHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the virtual clock.
    pub fn advance(&mut self, ms: u32) {
        self.clock_ms += ms;
    }

    pub fn clock_ms(&self) -> u32 {
        self.clock_ms
    }

    pub fn actions(&self) -> &[LoggedAction] {
        &self.actions
    }

    pub fn take_actions(&mut self) -> Vec<LoggedAction> {
        std::mem::take(&mut self.actions)
    }

    fn log(&mut self, action: HostAction) {
        self.actions.push(LoggedAction {
            at_ms: self.clock_ms,
            action,
        });
    }
}

impl KeyboardHost for SimHost {
    fn press(&mut self, keycode: Keycode) {
        self.log(HostAction::Press(keycode));
    }
    fn release(&mut self, keycode: Keycode) {
        self.log(HostAction::Release(keycode));
    }
    fn tap(&mut self, keycode: Keycode) {
        self.log(HostAction::Tap(keycode));
    }
    fn tap_with_delay(&mut self, keycode: Keycode, delay_ms: u16) {
        self.log(HostAction::TapWithDelay(keycode, delay_ms));
    }
    fn set_backlight(&mut self, level: u8) {
        self.log(HostAction::Backlight(level));
    }
    fn now_ms(&self) -> u16 {
        // Engine timers wrap at u16 like the firmware clock.
        self.clock_ms as u16
    }
}

// ---------------------------------------------------------------------------
// Scan loop
// ---------------------------------------------------------------------------

/// Scan-loop parameters.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Scan tick period in virtual milliseconds.
    pub tick_ms: u32,
    /// Total simulated duration.
    pub duration_ms: u32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            tick_ms: 1,
            duration_ms: 1000,
        }
    }
}

/// Drive `engine` through a scripted run and return the action log.
///
/// Transitions due at or before the current clock are delivered before
/// the tick fires, matching the firmware's matrix-scan-then-housekeeping
/// order. `transitions` must be sorted by `at_ms` (see
/// [`crate::script::Script::resolve`]).
pub fn run_script(
    engine: &mut MacroEngine,
    transitions: &[TimedTransition],
    opts: RunOptions,
) -> Vec<LoggedAction> {
    let tick_ms = opts.tick_ms.max(1);
    let mut host = SimHost::new();
    let mut next = 0usize;

    loop {
        while next < transitions.len() && transitions[next].at_ms <= host.clock_ms() {
            let t = transitions[next];
            engine.on_key_transition(t.keycode, t.pressed, &mut host);
            next += 1;
        }
        engine.on_tick(&mut host);

        if host.clock_ms() >= opts.duration_ms {
            break;
        }
        host.advance(tick_ms);
    }

    host.take_actions()
}
