//! Key-transition scripts for the simulator.
//!
//! A script is a JSON file describing physical key transitions on a
//! shared timeline:
//!
//! ```json
//! {
//!   "events": [
//!     { "at_ms": 0,   "key": "F13", "pressed": true  },
//!     { "at_ms": 10,  "key": "A",   "pressed": true  },
//!     { "at_ms": 60,  "key": "A",   "pressed": false },
//!     { "at_ms": 80,  "key": "F13", "pressed": false }
//!   ]
//! }
//! ```
//!
//! Key names resolve through [`id80_engine::keycode::from_name`]; raw
//! `0x....` keycodes are accepted too.

use std::path::Path;

use id80_engine::{keycode, Keycode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A timed sequence of key transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub events: Vec<ScriptEvent>,
}

/// One scripted key transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptEvent {
    /// Timestamp on the script's timeline, in milliseconds.
    pub at_ms: u32,
    /// Key name (see `id80_engine::keycode`) or `0x....` keycode.
    pub key: String,
    pub pressed: bool,
}

/// A script event with its key name resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedTransition {
    pub at_ms: u32,
    pub keycode: Keycode,
    pub pressed: bool,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid script JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown key name: \"{0}\"")]
    UnknownKey(String),

    #[error("script events out of order: {later}ms listed after {earlier}ms")]
    OutOfOrder { earlier: u32, later: u32 },
}

impl Script {
    /// Load a script from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Resolve key names and validate timeline ordering.
    pub fn resolve(&self) -> Result<Vec<TimedTransition>, ScriptError> {
        let mut transitions = Vec::with_capacity(self.events.len());
        let mut prev_ms = 0u32;
        for event in &self.events {
            if event.at_ms < prev_ms {
                return Err(ScriptError::OutOfOrder {
                    earlier: prev_ms,
                    later: event.at_ms,
                });
            }
            prev_ms = event.at_ms;

            let keycode = keycode::from_name(&event.key)
                .ok_or_else(|| ScriptError::UnknownKey(event.key.clone()))?;
            transitions.push(TimedTransition {
                at_ms: event.at_ms,
                keycode,
                pressed: event.pressed,
            });
        }
        Ok(transitions)
    }

    /// End of the script timeline (0 for an empty script).
    pub fn end_ms(&self) -> u32 {
        self.events.last().map_or(0, |e| e.at_ms)
    }
}
