//! Integration tests for the macro record/playback pipeline.
//!
//! These exercise the full public API: key transitions classified and
//! captured through `on_key_transition`, then replayed through a
//! scan-tick loop — the same polled shape the firmware drives, with a
//! millisecond tick and a manual clock.

use id80_engine::keycode::{kc, layer};
use id80_engine::{EngineConfig, KeyboardHost, Keycode, MacroEngine, Mode};

/// Host double: manual clock plus a timestamped action log.
#[derive(Default)]
struct ScanHost {
    clock: u16,
    actions: Vec<(u16, Action)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Press(Keycode),
    Release(Keycode),
    Tap(Keycode),
    TapHold(Keycode, u16),
}

impl KeyboardHost for ScanHost {
    fn press(&mut self, keycode: Keycode) {
        self.actions.push((self.clock, Action::Press(keycode)));
    }
    fn release(&mut self, keycode: Keycode) {
        self.actions.push((self.clock, Action::Release(keycode)));
    }
    fn tap(&mut self, keycode: Keycode) {
        self.actions.push((self.clock, Action::Tap(keycode)));
    }
    fn tap_with_delay(&mut self, keycode: Keycode, delay_ms: u16) {
        self.actions.push((self.clock, Action::TapHold(keycode, delay_ms)));
    }
    fn now_ms(&self) -> u16 {
        self.clock
    }
}

/// Run the scan loop for `duration_ms` with a 1 ms tick.
fn run_ticks(engine: &mut MacroEngine, host: &mut ScanHost, duration_ms: u16) {
    for _ in 0..duration_ms {
        host.clock = host.clock.wrapping_add(1);
        engine.on_tick(host);
    }
}

fn record(engine: &mut MacroEngine, host: &mut ScanHost, events: &[(Keycode, bool, u16)]) {
    engine.on_key_transition(kc::F13, true, host);
    for &(keycode, pressed, after_ms) in events {
        host.clock = host.clock.wrapping_add(after_ms);
        engine.on_key_transition(keycode, pressed, host);
    }
    engine.on_key_transition(kc::F13, false, host);
}

// ── Full-fidelity replay ──

#[test]
fn replay_reproduces_sequence_and_delays() {
    let mut engine = MacroEngine::new(EngineConfig::fidelity());
    let mut host = ScanHost::default();

    // A held for 50ms inside the session
    record(&mut engine, &mut host, &[(kc::A, true, 0), (kc::A, false, 50)]);

    engine.on_key_transition(kc::F14, true, &mut host);
    let start = host.clock;
    host.actions.clear();
    run_ticks(&mut engine, &mut host, 120);

    // press(A) on the first tick, release(A) ≈50ms later, then the loop
    // wraps: press(A) again immediately after the release
    let replayed: Vec<_> = host.actions.iter().take(3).copied().collect();
    assert_eq!(replayed[0].1, Action::Press(kc::A));
    assert!(replayed[0].0 - start <= 1, "press not fired on first tick");
    assert_eq!(replayed[1].1, Action::Release(kc::A));
    let gap = replayed[1].0 - replayed[0].0;
    assert!((49..=51).contains(&gap), "release gap {gap}ms, expected ≈50ms");
    assert_eq!(replayed[2].1, Action::Press(kc::A));
    assert!(replayed[2].0 - replayed[1].0 <= 1, "loop restart not immediate");
}

#[test]
fn replay_preserves_ordering_of_interleaved_keys() {
    let mut engine = MacroEngine::new(EngineConfig::fidelity());
    let mut host = ScanHost::default();

    record(
        &mut engine,
        &mut host,
        &[
            (kc::LSHIFT, true, 0),
            (kc::A, true, 10),
            (kc::A, false, 10),
            (kc::LSHIFT, false, 5),
            (kc::B, true, 20),
            (kc::B, false, 15),
        ],
    );

    engine.on_key_transition(kc::F14, true, &mut host);
    host.actions.clear();
    run_ticks(&mut engine, &mut host, 70);

    let one_pass: Vec<_> = host.actions.iter().map(|&(_, a)| a).take(6).collect();
    assert_eq!(
        one_pass,
        vec![
            Action::Press(kc::LSHIFT),
            Action::Press(kc::A),
            Action::Release(kc::A),
            Action::Release(kc::LSHIFT),
            Action::Press(kc::B),
            Action::Release(kc::B),
        ]
    );
}

#[test]
fn playback_loops_until_toggled_off() {
    let mut engine = MacroEngine::new(EngineConfig::fidelity());
    let mut host = ScanHost::default();

    record(&mut engine, &mut host, &[(kc::A, true, 0), (kc::A, false, 10)]);
    engine.on_key_transition(kc::F14, true, &mut host);
    host.actions.clear();

    run_ticks(&mut engine, &mut host, 100);
    let passes = host
        .actions
        .iter()
        .filter(|&&(_, a)| a == Action::Press(kc::A))
        .count();
    assert!(passes >= 5, "expected several loop passes, got {passes}");

    engine.on_key_transition(kc::F14, true, &mut host);
    assert_eq!(engine.mode(), Mode::Idle);
    let len = host.actions.len();
    run_ticks(&mut engine, &mut host, 50);
    assert_eq!(host.actions.len(), len, "actions emitted after stop");
}

// ── Capacity ──

#[test]
fn overflow_keeps_first_64_events() {
    let mut engine = MacroEngine::new(EngineConfig::fidelity());
    let mut host = ScanHost::default();

    engine.on_key_transition(kc::F13, true, &mut host);
    for i in 0..100u16 {
        host.clock = host.clock.wrapping_add(1);
        let keycode = kc::A + (i % 26);
        engine.on_key_transition(keycode, true, &mut host);
    }
    engine.on_key_transition(kc::F13, false, &mut host);

    let recorded = engine.recorded();
    assert_eq!(recorded.len(), 64);
    // The 65th and later presses never made it in
    assert_eq!(recorded[63].keycode, kc::A + 63 % 26);
}

// ── Tap replay with Tab substitution ──

#[test]
fn tab_replays_as_scripted_sequence() {
    let mut engine = MacroEngine::new(EngineConfig::tap_replay());
    let mut host = ScanHost::default();

    record(&mut engine, &mut host, &[(kc::TAB, true, 0), (kc::TAB, false, 10)]);
    engine.on_key_transition(kc::F14, true, &mut host);
    host.actions.clear();
    run_ticks(&mut engine, &mut host, 1);

    // One recorded press expands to: Esc (10ms hold), Esc (100ms hold),
    // Tab (10ms hold) — no plain Tab tap
    let actions: Vec<_> = host.actions.iter().map(|&(_, a)| a).collect();
    assert_eq!(
        actions,
        vec![
            Action::TapHold(kc::ESC, 10),
            Action::TapHold(kc::ESC, 100),
            Action::TapHold(kc::TAB, 10),
        ]
    );
}

#[test]
fn tap_replay_taps_ordinary_keys() {
    let mut engine = MacroEngine::new(EngineConfig::tap_replay());
    let mut host = ScanHost::default();

    record(
        &mut engine,
        &mut host,
        &[(kc::A, true, 0), (kc::A, false, 5), (kc::B, true, 20), (kc::B, false, 5)],
    );
    engine.on_key_transition(kc::F14, true, &mut host);
    host.actions.clear();
    run_ticks(&mut engine, &mut host, 30);

    let actions: Vec<_> = host.actions.iter().map(|&(_, a)| a).take(2).collect();
    assert_eq!(actions, vec![Action::Tap(kc::A), Action::Tap(kc::B)]);
    // The stored delay for B spans the unstored release of A
    let gap = host.actions[1].0 - host.actions[0].0;
    assert!((24..=26).contains(&gap), "tap gap {gap}ms, expected ≈25ms");
}

// ── Layer control ──

#[test]
fn layer_keys_never_enter_the_buffer() {
    let mut engine = MacroEngine::new(EngineConfig::fidelity());
    let mut host = ScanHost::default();

    engine.on_key_transition(kc::F13, true, &mut host);
    assert!(engine.on_key_transition(layer::momentary(1), true, &mut host));
    engine.on_key_transition(kc::A, true, &mut host);
    assert!(engine.on_key_transition(layer::momentary(1), false, &mut host));
    engine.on_key_transition(kc::A, false, &mut host);
    engine.on_key_transition(kc::F13, false, &mut host);

    assert!(engine
        .recorded()
        .iter()
        .all(|e| !id80_engine::is_layer_control(e.keycode)));
    assert_eq!(engine.recorded().len(), 2);
}

// ── Mode exclusion ──

#[test]
fn recording_cannot_start_during_playback() {
    let mut engine = MacroEngine::new(EngineConfig::fidelity());
    let mut host = ScanHost::default();

    record(&mut engine, &mut host, &[(kc::A, true, 0), (kc::A, false, 10)]);
    engine.on_key_transition(kc::F14, true, &mut host);

    engine.on_key_transition(kc::F13, true, &mut host);
    assert_eq!(engine.mode(), Mode::Playing);

    // Playback keeps running
    host.actions.clear();
    run_ticks(&mut engine, &mut host, 30);
    assert!(!host.actions.is_empty());
}
