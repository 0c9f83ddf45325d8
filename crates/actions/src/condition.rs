//! Trigger conditions: pure predicate trees over face and hand snapshots.

use facelink_tracking_model::{BlendShape, HandGesture, Handedness};
use serde::{Deserialize, Serialize};

/// Default threshold for [`Condition::Expression`].
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Default minimum confidence for [`Condition::Gesture`].
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// Which side of the threshold satisfies an expression condition.
///
/// Both directions include the threshold itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdDirection {
    /// `value >= threshold`
    #[default]
    Above,
    /// `value <= threshold`
    Below,
}

/// A condition tree. Owned by its binding and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// A blend-shape channel compared against a threshold.
    Expression {
        channel: BlendShape,
        #[serde(default = "default_threshold")]
        threshold: f32,
        #[serde(default)]
        direction: ThresholdDirection,
    },

    /// Any detected hand showing `gesture` with enough confidence,
    /// optionally restricted to one hand.
    Gesture {
        gesture: HandGesture,
        #[serde(default = "default_min_confidence")]
        min_confidence: f32,
        #[serde(default)]
        hand: Option<Handedness>,
    },

    /// Logical AND over all children. Children may nest.
    Combined { children: Vec<Condition> },
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

fn default_min_confidence() -> f32 {
    DEFAULT_MIN_CONFIDENCE
}

impl Condition {
    /// `channel >= threshold`.
    pub fn expression(channel: BlendShape, threshold: f32) -> Self {
        Self::Expression {
            channel,
            threshold,
            direction: ThresholdDirection::Above,
        }
    }

    /// `channel <= threshold`.
    pub fn expression_below(channel: BlendShape, threshold: f32) -> Self {
        Self::Expression {
            channel,
            threshold,
            direction: ThresholdDirection::Below,
        }
    }

    /// `gesture` on either hand.
    pub fn gesture(gesture: HandGesture, min_confidence: f32) -> Self {
        Self::Gesture {
            gesture,
            min_confidence,
            hand: None,
        }
    }

    /// `gesture` on a specific hand.
    pub fn gesture_with_hand(gesture: HandGesture, hand: Handedness, min_confidence: f32) -> Self {
        Self::Gesture {
            gesture,
            min_confidence,
            hand: Some(hand),
        }
    }

    /// AND of `children`.
    pub fn all(children: impl IntoIterator<Item = Condition>) -> Self {
        Self::Combined {
            children: children.into_iter().collect(),
        }
    }

    /// True when any leaf of the tree reads the face snapshot.
    pub fn uses_face(&self) -> bool {
        match self {
            Self::Expression { .. } => true,
            Self::Gesture { .. } => false,
            Self::Combined { children } => children.iter().any(Condition::uses_face),
        }
    }

    /// True when any leaf of the tree reads the hand snapshot.
    pub fn uses_hand(&self) -> bool {
        match self {
            Self::Expression { .. } => false,
            Self::Gesture { .. } => true,
            Self::Combined { children } => children.iter().any(Condition::uses_hand),
        }
    }

    /// Reject trees containing an empty `Combined` node. An empty AND is
    /// vacuously true and would fire on every arrival.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Combined { children } if children.is_empty() => {
                Err("combined condition has no children".to_string())
            }
            Self::Combined { children } => children.iter().try_for_each(Condition::validate),
            _ => Ok(()),
        }
    }
}
