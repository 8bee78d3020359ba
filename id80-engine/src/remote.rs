//! Raw-HID remote-control channel.
//!
//! A secondary vendor channel lets a host application inject synthetic
//! key press/release events, bypassing the physical matrix and the
//! macro engine. Report layout:
//!
//! - byte 0: command (`0x01` press, `0x02` release)
//! - bytes 1–2: keycode, big-endian
//!
//! Malformed reports are rejected by returning `false` without touching
//! any state.

use tracing::debug;

use crate::host::KeyboardHost;
use crate::keycode::{kc, Keycode};

/// Remote channel command bytes.
pub mod cmd {
    /// Press the keycode in bytes 1–2.
    pub const KEY_PRESS: u8 = 0x01;
    /// Release the keycode in bytes 1–2.
    pub const KEY_RELEASE: u8 = 0x02;
}

/// Handle one raw-HID report from the remote channel.
///
/// Returns `true` when the report was consumed, `false` when it was
/// rejected (too short, no-op keycode, unknown command).
pub fn handle_report(data: &[u8], host: &mut impl KeyboardHost) -> bool {
    if data.len() < 3 {
        return false;
    }

    let keycode = Keycode::from_be_bytes([data[1], data[2]]);
    if keycode == kc::NO || keycode == kc::TRANSPARENT {
        return false;
    }

    match data[0] {
        cmd::KEY_PRESS => {
            debug!(keycode, "remote press");
            host.press(keycode);
            true
        }
        cmd::KEY_RELEASE => {
            debug!(keycode, "remote release");
            host.release(keycode);
            true
        }
        command => {
            debug!(command, "unknown remote command");
            false
        }
    }
}
