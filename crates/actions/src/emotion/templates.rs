//! Blend-shape activation patterns per emotion, derived from FACS action
//! unit mappings onto ARKit channels.

use facelink_tracking_model::BlendShape;
use serde::{Deserialize, Serialize};

use super::Emotion;

/// Expected activation per channel for one emotion. Channels not listed
/// do not take part in scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionTemplate {
    pub emotion: Emotion,
    pub weights: Vec<(BlendShape, f32)>,
}

impl EmotionTemplate {
    pub fn new(emotion: Emotion, weights: impl IntoIterator<Item = (BlendShape, f32)>) -> Self {
        Self {
            emotion,
            weights: weights.into_iter().collect(),
        }
    }
}

/// Built-in templates for the six non-neutral emotions.
pub fn default_templates() -> Vec<EmotionTemplate> {
    use BlendShape::*;

    vec![
        EmotionTemplate::new(
            Emotion::Happy,
            [
                (MouthSmileLeft, 0.7),
                (MouthSmileRight, 0.7),
                (CheekSquintLeft, 0.4),
                (CheekSquintRight, 0.4),
                (MouthDimpleLeft, 0.3),
                (MouthDimpleRight, 0.3),
            ],
        ),
        EmotionTemplate::new(
            Emotion::Sad,
            [
                (MouthFrownLeft, 0.5),
                (MouthFrownRight, 0.5),
                (BrowInnerUp, 0.5),
                (MouthPressLeft, 0.3),
                (MouthPressRight, 0.3),
                (MouthLowerDownLeft, 0.2),
                (MouthLowerDownRight, 0.2),
            ],
        ),
        EmotionTemplate::new(
            Emotion::Angry,
            [
                (BrowDownLeft, 0.7),
                (BrowDownRight, 0.7),
                (NoseSneerLeft, 0.4),
                (NoseSneerRight, 0.4),
                (MouthPressLeft, 0.4),
                (MouthPressRight, 0.4),
                (JawForward, 0.3),
            ],
        ),
        EmotionTemplate::new(
            Emotion::Surprised,
            [
                (EyeWideLeft, 0.7),
                (EyeWideRight, 0.7),
                (BrowInnerUp, 0.6),
                (BrowOuterUpLeft, 0.5),
                (BrowOuterUpRight, 0.5),
                (JawOpen, 0.5),
            ],
        ),
        EmotionTemplate::new(
            Emotion::Disgusted,
            [
                (NoseSneerLeft, 0.7),
                (NoseSneerRight, 0.7),
                (MouthUpperUpLeft, 0.5),
                (MouthUpperUpRight, 0.5),
                (MouthFrownLeft, 0.3),
                (MouthFrownRight, 0.3),
                (BrowDownLeft, 0.3),
                (BrowDownRight, 0.3),
            ],
        ),
        EmotionTemplate::new(
            Emotion::Fear,
            [
                (EyeWideLeft, 0.7),
                (EyeWideRight, 0.7),
                (BrowInnerUp, 0.6),
                (BrowDownLeft, 0.3),
                (BrowDownRight, 0.3),
                (MouthStretchLeft, 0.4),
                (MouthStretchRight, 0.4),
            ],
        ),
    ]
}
