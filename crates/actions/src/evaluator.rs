//! Stateless evaluation of condition trees.

use facelink_tracking_model::{FaceSnapshot, HandSnapshot};

use crate::condition::{Condition, ThresholdDirection};

/// Evaluate `condition` against the latest snapshot of each modality.
///
/// A missing or non-tracking snapshot makes every leaf that needs it false.
pub fn evaluate(
    condition: &Condition,
    face: Option<&FaceSnapshot>,
    hand: Option<&HandSnapshot>,
) -> bool {
    match condition {
        Condition::Expression {
            channel,
            threshold,
            direction,
        } => {
            let Some(face) = face.filter(|f| f.is_tracking) else {
                return false;
            };
            let value = face.value_of(*channel);
            match direction {
                ThresholdDirection::Above => value >= *threshold,
                ThresholdDirection::Below => value <= *threshold,
            }
        }
        Condition::Gesture {
            gesture,
            min_confidence,
            hand: required_hand,
        } => {
            let Some(snapshot) = hand.filter(|h| h.is_tracking) else {
                return false;
            };
            snapshot.hands.iter().any(|tracked| {
                tracked.gesture == *gesture
                    && tracked.gesture_confidence >= *min_confidence
                    && required_hand.map_or(true, |h| tracked.handedness == h)
            })
        }
        Condition::Combined { children } => {
            children.iter().all(|child| evaluate(child, face, hand))
        }
    }
}
