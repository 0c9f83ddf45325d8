//! Action bindings: a condition plus its timing configuration.

use serde::{Deserialize, Serialize};

use crate::condition::Condition;

/// Binds a condition to an action id.
///
/// All timings are in milliseconds and default to zero, which makes the
/// corresponding phase an instant pass-through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionBinding {
    /// Unique key within an engine.
    pub action_id: String,

    pub condition: Condition,

    /// How long the condition must hold before `Started`.
    #[serde(default)]
    pub hold_time_ms: u64,

    /// How long after `Released` before the binding can re-arm.
    #[serde(default)]
    pub cooldown_ms: u64,

    /// Grace window for a momentary condition loss while active.
    #[serde(default)]
    pub debounce_ms: u64,

    /// Emit `Held` on every arrival while active.
    #[serde(default)]
    pub emit_held_events: bool,
}

impl ActionBinding {
    pub fn new(action_id: impl Into<String>, condition: Condition) -> Self {
        Self {
            action_id: action_id.into(),
            condition,
            hold_time_ms: 0,
            cooldown_ms: 0,
            debounce_ms: 0,
            emit_held_events: false,
        }
    }

    pub fn hold_time_ms(mut self, ms: u64) -> Self {
        self.hold_time_ms = ms;
        self
    }

    pub fn cooldown_ms(mut self, ms: u64) -> Self {
        self.cooldown_ms = ms;
        self
    }

    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    pub fn emit_held_events(mut self, emit: bool) -> Self {
        self.emit_held_events = emit;
        self
    }
}
