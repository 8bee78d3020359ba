//! Per-keyboard customization layer for the IdoBao ID80: layout tables
//! plus a live macro record/playback engine.
//!
//! The surrounding firmware owns the scan matrix, HID stack, and timers;
//! this crate plugs into it through two callbacks
//! ([`MacroEngine::on_key_transition`] and [`MacroEngine::on_tick`]) and
//! calls back out through the [`KeyboardHost`] trait. That seam keeps
//! the whole crate runnable on a plain host for testing.

pub mod engine;
pub mod host;
pub mod keycode;
pub mod layout;
pub mod remote;

pub use engine::{Disposition, EngineConfig, MacroEngine, Mode, RecordedEvent, BUFFER_CAPACITY};
pub use host::{elapsed_ms, KeyboardHost};
pub use keycode::{is_layer_control, Keycode};
