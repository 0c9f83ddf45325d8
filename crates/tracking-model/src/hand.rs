//! Hand gesture snapshots.

use serde::{Deserialize, Serialize};

use crate::face::TimestampMs;

/// Gesture classes reported by the hand classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandGesture {
    None,
    ClosedFist,
    OpenPalm,
    PointingUp,
    ThumbDown,
    ThumbUp,
    Victory,
    ILoveYou,
}

/// Which hand a detection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    Left,
    Right,
}

/// A single detected hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackedHand {
    pub handedness: Handedness,
    pub gesture: HandGesture,
    /// Classifier confidence for `gesture`, in `[0.0, 1.0]`.
    pub gesture_confidence: f32,
}

impl TrackedHand {
    pub fn new(handedness: Handedness, gesture: HandGesture, gesture_confidence: f32) -> Self {
        Self {
            handedness,
            gesture,
            gesture_confidence,
        }
    }
}

/// One hand-tracking result. Replaced wholesale on every arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandSnapshot {
    /// Detected hands in classifier order.
    #[serde(default)]
    pub hands: Vec<TrackedHand>,

    pub is_tracking: bool,

    pub timestamp_ms: TimestampMs,
}

impl HandSnapshot {
    pub fn new(hands: Vec<TrackedHand>, timestamp_ms: TimestampMs) -> Self {
        Self {
            hands,
            is_tracking: true,
            timestamp_ms,
        }
    }

    /// A snapshot reporting that no hands are being tracked.
    pub fn not_tracking(timestamp_ms: TimestampMs) -> Self {
        Self {
            hands: Vec::new(),
            is_tracking: false,
            timestamp_ms,
        }
    }
}
