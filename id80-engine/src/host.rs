//! Host abstraction between the keymap layer and the surrounding
//! firmware.
//!
//! The firmware owns the HID stack, the millisecond timer, and the
//! backlight driver; the engine only ever touches them through
//! [`KeyboardHost`]. Tests and the host-side simulator supply their own
//! implementations with a virtual clock and an action log.

use crate::keycode::Keycode;

/// Services the firmware provides to the keymap layer.
pub trait KeyboardHost {
    /// Register a keycode as pressed in the HID report.
    fn press(&mut self, keycode: Keycode);

    /// Release a previously pressed keycode.
    fn release(&mut self, keycode: Keycode);

    /// Press and immediately release a keycode.
    fn tap(&mut self, keycode: Keycode) {
        self.press(keycode);
        self.release(keycode);
    }

    /// Tap a keycode, holding it for `delay_ms` before the release.
    /// Implementations without a blocking wait may treat this as a plain
    /// tap.
    fn tap_with_delay(&mut self, keycode: Keycode, delay_ms: u16) {
        let _ = delay_ms;
        self.tap(keycode);
    }

    /// Set the backlight level (0 = off). Visual feedback only; default
    /// is a no-op for hosts without a backlight.
    fn set_backlight(&mut self, level: u8) {
        let _ = level;
    }

    /// Monotonic millisecond clock. Wraps at `u16::MAX` like the
    /// firmware timer; compare readings with [`elapsed_ms`].
    fn now_ms(&self) -> u16;
}

/// Milliseconds elapsed between two wrapping clock readings.
pub fn elapsed_ms(now: u16, since: u16) -> u16 {
    now.wrapping_sub(since)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_plain() {
        assert_eq!(elapsed_ms(150, 100), 50);
        assert_eq!(elapsed_ms(100, 100), 0);
    }

    #[test]
    fn elapsed_across_wraparound() {
        assert_eq!(elapsed_ms(10, u16::MAX - 9), 20);
    }
}
