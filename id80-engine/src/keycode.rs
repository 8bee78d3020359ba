//! Logical keycode space for the ID80 keymap layer.
//!
//! Keycodes are 16-bit semantic values. The low range is aligned with the
//! USB HID usage table, so plain keys carry their HID usage ID directly.
//! Above that sit two reserved ranges: layer-control codes (momentary and
//! one-shot layer activation) and firmware-function codes (bootloader,
//! RGB/backlight adjustment, mouse keys, slot macros). Only the base range
//! ever reaches a HID report; the reserved ranges are consumed by the
//! firmware itself.

/// A 16-bit logical key identifier.
pub type Keycode = u16;

/// Base keycodes (HID-aligned) plus a few protocol markers.
pub mod kc {
    use super::Keycode;

    /// No key / "none" marker.
    pub const NO: Keycode = 0x0000;
    /// Transparent slot — falls through to the layer below.
    pub const TRANSPARENT: Keycode = 0x0001;

    // Letters
    pub const A: Keycode = 0x04;
    pub const B: Keycode = 0x05;
    pub const C: Keycode = 0x06;
    pub const D: Keycode = 0x07;
    pub const E: Keycode = 0x08;
    pub const F: Keycode = 0x09;
    pub const G: Keycode = 0x0A;
    pub const H: Keycode = 0x0B;
    pub const I: Keycode = 0x0C;
    pub const J: Keycode = 0x0D;
    pub const K: Keycode = 0x0E;
    pub const L: Keycode = 0x0F;
    pub const M: Keycode = 0x10;
    pub const N: Keycode = 0x11;
    pub const O: Keycode = 0x12;
    pub const P: Keycode = 0x13;
    pub const Q: Keycode = 0x14;
    pub const R: Keycode = 0x15;
    pub const S: Keycode = 0x16;
    pub const T: Keycode = 0x17;
    pub const U: Keycode = 0x18;
    pub const V: Keycode = 0x19;
    pub const W: Keycode = 0x1A;
    pub const X: Keycode = 0x1B;
    pub const Y: Keycode = 0x1C;
    pub const Z: Keycode = 0x1D;

    // Number row
    pub const N1: Keycode = 0x1E;
    pub const N2: Keycode = 0x1F;
    pub const N3: Keycode = 0x20;
    pub const N4: Keycode = 0x21;
    pub const N5: Keycode = 0x22;
    pub const N6: Keycode = 0x23;
    pub const N7: Keycode = 0x24;
    pub const N8: Keycode = 0x25;
    pub const N9: Keycode = 0x26;
    pub const N0: Keycode = 0x27;

    pub const ENTER: Keycode = 0x28;
    pub const ESC: Keycode = 0x29;
    pub const BACKSPACE: Keycode = 0x2A;
    pub const TAB: Keycode = 0x2B;
    pub const SPACE: Keycode = 0x2C;
    pub const MINUS: Keycode = 0x2D;
    pub const EQUAL: Keycode = 0x2E;
    pub const LBRACKET: Keycode = 0x2F;
    pub const RBRACKET: Keycode = 0x30;
    pub const BACKSLASH: Keycode = 0x31;
    pub const SEMICOLON: Keycode = 0x33;
    pub const QUOTE: Keycode = 0x34;
    pub const GRAVE: Keycode = 0x35;
    pub const COMMA: Keycode = 0x36;
    pub const DOT: Keycode = 0x37;
    pub const SLASH: Keycode = 0x38;
    pub const CAPS: Keycode = 0x39;

    // Function row
    pub const F1: Keycode = 0x3A;
    pub const F2: Keycode = 0x3B;
    pub const F3: Keycode = 0x3C;
    pub const F4: Keycode = 0x3D;
    pub const F5: Keycode = 0x3E;
    pub const F6: Keycode = 0x3F;
    pub const F7: Keycode = 0x40;
    pub const F8: Keycode = 0x41;
    pub const F9: Keycode = 0x42;
    pub const F10: Keycode = 0x43;
    pub const F11: Keycode = 0x44;
    pub const F12: Keycode = 0x45;

    pub const PRINT_SCREEN: Keycode = 0x46;
    pub const SCROLL_LOCK: Keycode = 0x47;
    pub const PAUSE: Keycode = 0x48;
    pub const INSERT: Keycode = 0x49;
    pub const HOME: Keycode = 0x4A;
    pub const PAGE_UP: Keycode = 0x4B;
    pub const DELETE: Keycode = 0x4C;
    pub const END: Keycode = 0x4D;
    pub const PAGE_DOWN: Keycode = 0x4E;
    pub const RIGHT: Keycode = 0x4F;
    pub const LEFT: Keycode = 0x50;
    pub const DOWN: Keycode = 0x51;
    pub const UP: Keycode = 0x52;
    pub const NUM_LOCK: Keycode = 0x53;

    // Keypad digits
    pub const P1: Keycode = 0x59;
    pub const P2: Keycode = 0x5A;
    pub const P3: Keycode = 0x5B;
    pub const P4: Keycode = 0x5C;
    pub const P5: Keycode = 0x5D;
    pub const P6: Keycode = 0x5E;
    pub const P7: Keycode = 0x5F;
    pub const P8: Keycode = 0x60;
    pub const P9: Keycode = 0x61;
    pub const P0: Keycode = 0x62;

    // Extended function keys — F13/F14 double as the macro engine's
    // record and playback control keys on layer 1.
    pub const F13: Keycode = 0x68;
    pub const F14: Keycode = 0x69;
    pub const F15: Keycode = 0x6A;

    pub const MUTE: Keycode = 0x7F;

    // Modifiers
    pub const LCTRL: Keycode = 0xE0;
    pub const LSHIFT: Keycode = 0xE1;
    pub const LALT: Keycode = 0xE2;
    pub const LGUI: Keycode = 0xE3;
    pub const RCTRL: Keycode = 0xE4;
    pub const RSHIFT: Keycode = 0xE5;
    pub const RALT: Keycode = 0xE6;
    pub const RGUI: Keycode = 0xE7;
}

/// Layer-control keycode range.
///
/// These codes activate layers while held (momentary) or for the next
/// keypress (one-shot). The macro engine passes the whole range through
/// untouched in every mode so layer switching is never captured or
/// blocked.
pub mod layer {
    use super::Keycode;

    /// First momentary-layer code. `momentary(n)` = `MOMENTARY_MIN + n`.
    pub const MOMENTARY_MIN: Keycode = 0x5220;
    /// Last momentary-layer code (32 layers).
    pub const MOMENTARY_MAX: Keycode = 0x523F;
    /// First one-shot-layer code.
    pub const ONE_SHOT_MIN: Keycode = 0x5280;

    /// Momentary layer activation (active while held).
    pub const fn momentary(n: u8) -> Keycode {
        MOMENTARY_MIN + (n as Keycode & 0x1F)
    }

    /// One-shot layer activation (active for the next keypress).
    pub const fn one_shot(n: u8) -> Keycode {
        ONE_SHOT_MIN + (n as Keycode & 0x1F)
    }
}

/// Whether a keycode belongs to the layer-control passthrough range.
///
/// The range is `[MOMENTARY_MIN, ONE_SHOT_MIN]` inclusive at both ends:
/// every momentary code plus the first one-shot code.
pub fn is_layer_control(keycode: Keycode) -> bool {
    (layer::MOMENTARY_MIN..=layer::ONE_SHOT_MIN).contains(&keycode)
}

/// Firmware-function keycodes.
///
/// Consumed by firmware subsystems (bootloader, RGB, backlight, mouse
/// keys, slot macros) rather than sent as HID usages. The numeric values
/// are internal to this keymap layer.
pub mod fw {
    use super::Keycode;

    const BASE: Keycode = 0x5C00;

    /// Jump to bootloader.
    pub const BOOT: Keycode = BASE;
    /// Toggle N-key rollover.
    pub const NKRO_TOGGLE: Keycode = BASE + 0x01;

    // RGB underglow
    pub const RGB_TOGGLE: Keycode = BASE + 0x10;
    pub const RGB_MODE_NEXT: Keycode = BASE + 0x11;
    pub const RGB_HUE_UP: Keycode = BASE + 0x12;
    pub const RGB_HUE_DOWN: Keycode = BASE + 0x13;
    pub const RGB_SAT_UP: Keycode = BASE + 0x14;
    pub const RGB_SAT_DOWN: Keycode = BASE + 0x15;
    pub const RGB_VAL_UP: Keycode = BASE + 0x16;
    pub const RGB_VAL_DOWN: Keycode = BASE + 0x17;

    // Backlight
    pub const BL_ON: Keycode = BASE + 0x20;
    pub const BL_OFF: Keycode = BASE + 0x21;
    pub const BL_TOGGLE: Keycode = BASE + 0x22;
    pub const BL_UP: Keycode = BASE + 0x23;
    pub const BL_DOWN: Keycode = BASE + 0x24;
    pub const BL_STEP: Keycode = BASE + 0x25;

    // Mouse keys
    pub const MS_UP: Keycode = BASE + 0x30;
    pub const MS_DOWN: Keycode = BASE + 0x31;
    pub const MS_LEFT: Keycode = BASE + 0x32;
    pub const MS_RIGHT: Keycode = BASE + 0x33;
    pub const MS_BTN1: Keycode = BASE + 0x34;
    pub const MS_BTN2: Keycode = BASE + 0x35;

    // Stored macro slots
    pub const MACRO_0: Keycode = BASE + 0x40;
    pub const MACRO_1: Keycode = BASE + 0x41;
    pub const MACRO_2: Keycode = BASE + 0x42;
    pub const MACRO_3: Keycode = BASE + 0x43;

    // Dynamic macro slots (firmware-native, distinct from this crate's
    // live recording engine)
    pub const DYN_REC_1: Keycode = BASE + 0x50;
    pub const DYN_REC_2: Keycode = BASE + 0x51;
    pub const DYN_PLAY_1: Keycode = BASE + 0x52;
    pub const DYN_PLAY_2: Keycode = BASE + 0x53;
}

// ---------------------------------------------------------------------------
// Name lookup
// ---------------------------------------------------------------------------

/// Canonical names for the keycodes used by the layout tables and the
/// simulator scripts. Not exhaustive over the HID table.
static NAMES: &[(&str, Keycode)] = &[
    ("No", kc::NO),
    ("Trans", kc::TRANSPARENT),
    ("A", kc::A),
    ("B", kc::B),
    ("C", kc::C),
    ("D", kc::D),
    ("E", kc::E),
    ("F", kc::F),
    ("G", kc::G),
    ("H", kc::H),
    ("I", kc::I),
    ("J", kc::J),
    ("K", kc::K),
    ("L", kc::L),
    ("M", kc::M),
    ("N", kc::N),
    ("O", kc::O),
    ("P", kc::P),
    ("Q", kc::Q),
    ("R", kc::R),
    ("S", kc::S),
    ("T", kc::T),
    ("U", kc::U),
    ("V", kc::V),
    ("W", kc::W),
    ("X", kc::X),
    ("Y", kc::Y),
    ("Z", kc::Z),
    ("1", kc::N1),
    ("2", kc::N2),
    ("3", kc::N3),
    ("4", kc::N4),
    ("5", kc::N5),
    ("6", kc::N6),
    ("7", kc::N7),
    ("8", kc::N8),
    ("9", kc::N9),
    ("0", kc::N0),
    ("Enter", kc::ENTER),
    ("Esc", kc::ESC),
    ("Bksp", kc::BACKSPACE),
    ("Tab", kc::TAB),
    ("Space", kc::SPACE),
    ("-", kc::MINUS),
    ("=", kc::EQUAL),
    ("[", kc::LBRACKET),
    ("]", kc::RBRACKET),
    ("\\", kc::BACKSLASH),
    (";", kc::SEMICOLON),
    ("'", kc::QUOTE),
    ("`", kc::GRAVE),
    (",", kc::COMMA),
    (".", kc::DOT),
    ("/", kc::SLASH),
    ("Caps", kc::CAPS),
    ("F1", kc::F1),
    ("F2", kc::F2),
    ("F3", kc::F3),
    ("F4", kc::F4),
    ("F5", kc::F5),
    ("F6", kc::F6),
    ("F7", kc::F7),
    ("F8", kc::F8),
    ("F9", kc::F9),
    ("F10", kc::F10),
    ("F11", kc::F11),
    ("F12", kc::F12),
    ("F13", kc::F13),
    ("F14", kc::F14),
    ("F15", kc::F15),
    ("PrtSc", kc::PRINT_SCREEN),
    ("ScrLk", kc::SCROLL_LOCK),
    ("Pause", kc::PAUSE),
    ("Ins", kc::INSERT),
    ("Home", kc::HOME),
    ("PgUp", kc::PAGE_UP),
    ("Del", kc::DELETE),
    ("End", kc::END),
    ("PgDn", kc::PAGE_DOWN),
    ("Right", kc::RIGHT),
    ("Left", kc::LEFT),
    ("Down", kc::DOWN),
    ("Up", kc::UP),
    ("NumLk", kc::NUM_LOCK),
    ("P1", kc::P1),
    ("P2", kc::P2),
    ("P3", kc::P3),
    ("P4", kc::P4),
    ("P5", kc::P5),
    ("P6", kc::P6),
    ("P7", kc::P7),
    ("P8", kc::P8),
    ("P9", kc::P9),
    ("P0", kc::P0),
    ("Mute", kc::MUTE),
    ("LCtl", kc::LCTRL),
    ("LShf", kc::LSHIFT),
    ("LAlt", kc::LALT),
    ("LGui", kc::LGUI),
    ("RCtl", kc::RCTRL),
    ("RShf", kc::RSHIFT),
    ("RAlt", kc::RALT),
    ("RGui", kc::RGUI),
    ("MO(1)", layer::momentary(1)),
    ("Boot", fw::BOOT),
    ("NkroTog", fw::NKRO_TOGGLE),
    ("RgbTog", fw::RGB_TOGGLE),
    ("RgbMode", fw::RGB_MODE_NEXT),
    ("RgbHueUp", fw::RGB_HUE_UP),
    ("RgbHueDn", fw::RGB_HUE_DOWN),
    ("RgbSatUp", fw::RGB_SAT_UP),
    ("RgbSatDn", fw::RGB_SAT_DOWN),
    ("RgbValUp", fw::RGB_VAL_UP),
    ("RgbValDn", fw::RGB_VAL_DOWN),
    ("BlOn", fw::BL_ON),
    ("BlOff", fw::BL_OFF),
    ("BlTog", fw::BL_TOGGLE),
    ("BlUp", fw::BL_UP),
    ("BlDn", fw::BL_DOWN),
    ("BlStep", fw::BL_STEP),
    ("MsUp", fw::MS_UP),
    ("MsDown", fw::MS_DOWN),
    ("MsLeft", fw::MS_LEFT),
    ("MsRight", fw::MS_RIGHT),
    ("MsBtn1", fw::MS_BTN1),
    ("MsBtn2", fw::MS_BTN2),
    ("Macro0", fw::MACRO_0),
    ("Macro1", fw::MACRO_1),
    ("Macro2", fw::MACRO_2),
    ("Macro3", fw::MACRO_3),
    ("DynRec1", fw::DYN_REC_1),
    ("DynRec2", fw::DYN_REC_2),
    ("DynPlay1", fw::DYN_PLAY_1),
    ("DynPlay2", fw::DYN_PLAY_2),
];

/// Canonical name for a keycode, if it has one.
pub fn name(keycode: Keycode) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|&&(_, code)| code == keycode)
        .map(|&(n, _)| n)
}

/// Resolve a key name (case-insensitive) or a raw `0x....` hex literal
/// into a keycode.
pub fn from_name(name: &str) -> Option<Keycode> {
    let name = name.trim();
    if let Some(hex) = name.strip_prefix("0x").or_else(|| name.strip_prefix("0X")) {
        return Keycode::from_str_radix(hex, 16).ok();
    }
    NAMES
        .iter()
        .find(|&&(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, code)| code)
}

/// All known key names, in table order. Used by the simulator's `keys`
/// listing.
pub fn known_names() -> impl Iterator<Item = (&'static str, Keycode)> {
    NAMES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_roundtrip() {
        for &(n, code) in NAMES {
            assert_eq!(from_name(n), Some(code), "lookup failed for {n}");
            // Codes may have a single canonical name only
            assert_eq!(name(code), Some(n));
        }
    }

    #[test]
    fn from_name_case_insensitive() {
        assert_eq!(from_name("tab"), Some(kc::TAB));
        assert_eq!(from_name("TAB"), Some(kc::TAB));
        assert_eq!(from_name("pgup"), Some(kc::PAGE_UP));
    }

    #[test]
    fn from_name_hex_literal() {
        assert_eq!(from_name("0x04"), Some(kc::A));
        assert_eq!(from_name("0x5220"), Some(layer::MOMENTARY_MIN));
        assert_eq!(from_name("0xZZ"), None);
    }

    #[test]
    fn layer_control_range_bounds() {
        assert!(!is_layer_control(layer::MOMENTARY_MIN - 1));
        assert!(is_layer_control(layer::MOMENTARY_MIN));
        assert!(is_layer_control(layer::momentary(1)));
        assert!(is_layer_control(layer::MOMENTARY_MAX));
        // Default-layer and toggle-layer codes sit between the two ranges
        // and pass through as well
        assert!(is_layer_control(0x5250));
        // Only the first one-shot code is inside the guard
        assert!(is_layer_control(layer::ONE_SHOT_MIN));
        assert!(!is_layer_control(layer::ONE_SHOT_MIN + 1));
    }

    #[test]
    fn layer_constructors() {
        assert_eq!(layer::momentary(0), 0x5220);
        assert_eq!(layer::momentary(31), 0x523F);
        assert_eq!(layer::one_shot(0), 0x5280);
    }

    #[test]
    fn plain_keys_are_not_layer_control() {
        assert!(!is_layer_control(kc::A));
        assert!(!is_layer_control(kc::F13));
        assert!(!is_layer_control(fw::BOOT));
    }
}
