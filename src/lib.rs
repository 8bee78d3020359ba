//! Host-side simulator for the ID80 macro keymap layer.
//!
//! Wraps [`id80_engine`] in a scripted scan loop so the record/playback
//! engine can be exercised (and debugged) without a keyboard: scripts
//! describe timed key transitions, the simulator drives the engine tick
//! by tick on a virtual clock, and every outbound host action is logged
//! with its timestamp.

pub mod script;
pub mod sim;
