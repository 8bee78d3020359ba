//! ID80 ANSI layout tables.
//!
//! Two layers in physical layout order (left to right, top to bottom).
//! Layer 1 is reached through the momentary key next to F12 and carries
//! the firmware-function keys plus the macro engine's record (F13) and
//! playback (F14) control keys.

use crate::keycode::{fw, kc, layer, Keycode};

/// Number of physical keys on the ID80 ANSI layout.
pub const KEY_COUNT: usize = 80;
/// Number of layers in the keymap.
pub const LAYER_COUNT: usize = 2;

const _______: Keycode = kc::TRANSPARENT;

#[rustfmt::skip]
static BASE_LAYER: [Keycode; KEY_COUNT] = [
    kc::ESC,    kc::F1,   kc::F2,   kc::F3,  kc::F4,  kc::F5,  kc::F6,    kc::F7,   kc::F8,    kc::F9,  kc::F10,   kc::F11,    kc::F12,   layer::momentary(1), kc::PRINT_SCREEN,
    kc::GRAVE,  kc::N1,   kc::N2,   kc::N3,  kc::N4,  kc::N5,  kc::N6,    kc::N7,   kc::N8,    kc::N9,  kc::N0,    kc::MINUS,  kc::EQUAL, kc::BACKSPACE,       kc::NUM_LOCK,
    kc::TAB,    kc::Q,    kc::W,    kc::E,   kc::R,   kc::T,   kc::Y,     kc::U,    kc::I,     kc::O,   kc::P,     kc::LBRACKET, kc::RBRACKET, kc::BACKSLASH,   kc::DELETE,
    kc::END,    kc::A,    kc::S,    kc::D,   kc::F,   kc::G,   kc::H,     kc::J,    kc::K,     kc::L,   kc::SEMICOLON, kc::QUOTE, kc::ENTER,
    kc::LSHIFT, kc::Z,    kc::X,    kc::C,   kc::V,   kc::B,   kc::N,     kc::M,    kc::COMMA, kc::DOT, kc::SLASH, kc::RSHIFT, kc::UP,
    kc::LCTRL,  kc::LGUI, kc::LALT, kc::SPACE, kc::RALT, kc::RCTRL, kc::LEFT, kc::DOWN, kc::RIGHT,
];

#[rustfmt::skip]
static FUNCTION_LAYER: [Keycode; KEY_COUNT] = [
    fw::BOOT, fw::MACRO_0,    fw::MACRO_1, fw::MACRO_2,      fw::MACRO_3,    _______,        _______,        _______,        _______,        fw::DYN_REC_1,  fw::DYN_REC_2, fw::DYN_PLAY_1, fw::DYN_PLAY_2, _______, kc::MUTE,
    _______,  kc::P1,         kc::P2,      kc::P3,           kc::P4,         kc::P5,         kc::P6,         kc::P7,         kc::P8,         kc::P9,         kc::P0,        _______,        _______,        _______, kc::F13,
    kc::F15,  fw::RGB_TOGGLE, fw::MS_UP,   fw::RGB_MODE_NEXT, fw::RGB_HUE_UP, fw::RGB_HUE_DOWN, fw::RGB_SAT_UP, fw::RGB_SAT_DOWN, fw::RGB_VAL_UP, fw::RGB_VAL_DOWN, _______,   fw::MS_BTN1,    fw::MS_BTN2,    _______, kc::F14,
    kc::END,  fw::MS_LEFT,    fw::MS_DOWN, fw::MS_RIGHT,     _______,        _______,        _______,        _______,        _______,        _______,        _______,       _______,        _______,
    _______,  fw::BL_ON,      fw::BL_OFF,  fw::BL_DOWN,      fw::BL_TOGGLE,  fw::BL_UP,      fw::NKRO_TOGGLE, _______,       _______,        _______,        _______,       _______,        fw::BL_UP,
    _______,  _______,        _______,     _______,          _______,        _______,        fw::BL_TOGGLE,  fw::BL_DOWN,    fw::BL_STEP,
];

/// The full keymap, one table per layer.
pub static KEYMAP: [&[Keycode; KEY_COUNT]; LAYER_COUNT] = [&BASE_LAYER, &FUNCTION_LAYER];

/// Raw keycode at a layout position. `None` when layer or index is out of
/// range.
pub fn keycode_at(layer: usize, index: usize) -> Option<Keycode> {
    KEYMAP.get(layer)?.get(index).copied()
}

/// Effective keycode at a layout position with `TRANSPARENT` fallthrough
/// to the base layer. Out-of-range positions resolve to `NO`.
pub fn resolve(active_layer: usize, index: usize) -> Keycode {
    match keycode_at(active_layer, index) {
        Some(kc::TRANSPARENT) => keycode_at(0, index).unwrap_or(kc::NO),
        Some(code) => code,
        None => kc::NO,
    }
}
