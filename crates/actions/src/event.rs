//! Discrete events emitted when bindings activate, persist, or deactivate.

use facelink_tracking_model::TimestampMs;
use serde::{Deserialize, Serialize};

/// An action event. Every variant carries the timestamp of the arrival
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionEvent {
    /// Hold time elapsed and the action became active.
    Started {
        action_id: String,
        timestamp_ms: TimestampMs,
    },

    /// The action is still active (opt-in per binding).
    Held {
        action_id: String,
        timestamp_ms: TimestampMs,
        /// Time since the `Started` event.
        duration_ms: i64,
    },

    /// The condition stayed lost past the debounce window.
    Released {
        action_id: String,
        timestamp_ms: TimestampMs,
        /// Time between `Started` and this event.
        total_duration_ms: i64,
    },
}

impl ActionEvent {
    pub fn action_id(&self) -> &str {
        match self {
            ActionEvent::Started { action_id, .. }
            | ActionEvent::Held { action_id, .. }
            | ActionEvent::Released { action_id, .. } => action_id,
        }
    }

    pub fn timestamp_ms(&self) -> TimestampMs {
        match self {
            ActionEvent::Started { timestamp_ms, .. }
            | ActionEvent::Held { timestamp_ms, .. }
            | ActionEvent::Released { timestamp_ms, .. } => *timestamp_ms,
        }
    }

    /// Short lowercase name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ActionEvent::Started { .. } => "started",
            ActionEvent::Held { .. } => "held",
            ActionEvent::Released { .. } => "released",
        }
    }
}

impl std::fmt::Display for ActionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionEvent::Started {
                action_id,
                timestamp_ms,
            } => write!(f, "[{timestamp_ms}ms] {action_id} started"),
            ActionEvent::Held {
                action_id,
                timestamp_ms,
                duration_ms,
            } => write!(f, "[{timestamp_ms}ms] {action_id} held ({duration_ms}ms)"),
            ActionEvent::Released {
                action_id,
                timestamp_ms,
                total_duration_ms,
            } => write!(
                f,
                "[{timestamp_ms}ms] {action_id} released after {total_duration_ms}ms"
            ),
        }
    }
}
