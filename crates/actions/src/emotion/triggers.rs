//! Threshold-based conditions approximating each basic emotion.
//!
//! Cheaper and more predictable than [`EmotionClassifier`](super::EmotionClassifier)
//! for driving bindings, e.g.
//! `ActionBinding::new("happy", triggers::happy()).cooldown_ms(2000)`.

use facelink_tracking_model::BlendShape;

use crate::condition::Condition;

const HAPPY_THRESHOLD: f32 = 0.5;
const SAD_FROWN_THRESHOLD: f32 = 0.4;
const SAD_BROW_THRESHOLD: f32 = 0.3;
const ANGRY_BROW_THRESHOLD: f32 = 0.5;
const ANGRY_SNEER_THRESHOLD: f32 = 0.3;
const SURPRISED_EYE_THRESHOLD: f32 = 0.5;
const SURPRISED_BROW_THRESHOLD: f32 = 0.4;
const SURPRISED_JAW_THRESHOLD: f32 = 0.3;
const DISGUSTED_SNEER_THRESHOLD: f32 = 0.5;
const DISGUSTED_LIP_THRESHOLD: f32 = 0.3;
const FEAR_EYE_THRESHOLD: f32 = 0.5;
const FEAR_BROW_UP_THRESHOLD: f32 = 0.4;
const FEAR_BROW_DOWN_THRESHOLD: f32 = 0.2;
const FEAR_MOUTH_THRESHOLD: f32 = 0.3;

/// Both mouth corners smiling.
pub fn happy() -> Condition {
    happy_with(HAPPY_THRESHOLD)
}

pub fn happy_with(threshold: f32) -> Condition {
    Condition::all([
        Condition::expression(BlendShape::MouthSmileLeft, threshold),
        Condition::expression(BlendShape::MouthSmileRight, threshold),
    ])
}

/// Frown with inner brows raised.
pub fn sad() -> Condition {
    sad_with(SAD_FROWN_THRESHOLD, SAD_BROW_THRESHOLD)
}

pub fn sad_with(frown_threshold: f32, brow_threshold: f32) -> Condition {
    Condition::all([
        Condition::expression(BlendShape::MouthFrownLeft, frown_threshold),
        Condition::expression(BlendShape::MouthFrownRight, frown_threshold),
        Condition::expression(BlendShape::BrowInnerUp, brow_threshold),
    ])
}

/// Brows down with a nose sneer.
pub fn angry() -> Condition {
    angry_with(ANGRY_BROW_THRESHOLD, ANGRY_SNEER_THRESHOLD)
}

pub fn angry_with(brow_threshold: f32, sneer_threshold: f32) -> Condition {
    Condition::all([
        Condition::expression(BlendShape::BrowDownLeft, brow_threshold),
        Condition::expression(BlendShape::BrowDownRight, brow_threshold),
        Condition::expression(BlendShape::NoseSneerLeft, sneer_threshold),
    ])
}

/// Eyes wide, brows up, jaw open. Stricter than [`crate::builtin::surprised`].
pub fn surprised_emotion() -> Condition {
    surprised_emotion_with(
        SURPRISED_EYE_THRESHOLD,
        SURPRISED_BROW_THRESHOLD,
        SURPRISED_JAW_THRESHOLD,
    )
}

pub fn surprised_emotion_with(
    eye_threshold: f32,
    brow_threshold: f32,
    jaw_threshold: f32,
) -> Condition {
    Condition::all([
        Condition::expression(BlendShape::EyeWideLeft, eye_threshold),
        Condition::expression(BlendShape::EyeWideRight, eye_threshold),
        Condition::expression(BlendShape::BrowInnerUp, brow_threshold),
        Condition::expression(BlendShape::JawOpen, jaw_threshold),
    ])
}

/// Nose sneer with the upper lip raised.
pub fn disgusted() -> Condition {
    disgusted_with(DISGUSTED_SNEER_THRESHOLD, DISGUSTED_LIP_THRESHOLD)
}

pub fn disgusted_with(sneer_threshold: f32, lip_threshold: f32) -> Condition {
    Condition::all([
        Condition::expression(BlendShape::NoseSneerLeft, sneer_threshold),
        Condition::expression(BlendShape::NoseSneerRight, sneer_threshold),
        Condition::expression(BlendShape::MouthUpperUpLeft, lip_threshold),
    ])
}

/// Eyes wide, brows raised and drawn together, mouth stretched.
pub fn fear() -> Condition {
    fear_with(
        FEAR_EYE_THRESHOLD,
        FEAR_BROW_UP_THRESHOLD,
        FEAR_BROW_DOWN_THRESHOLD,
        FEAR_MOUTH_THRESHOLD,
    )
}

pub fn fear_with(
    eye_threshold: f32,
    brow_up_threshold: f32,
    brow_down_threshold: f32,
    mouth_threshold: f32,
) -> Condition {
    Condition::all([
        Condition::expression(BlendShape::EyeWideLeft, eye_threshold),
        Condition::expression(BlendShape::EyeWideRight, eye_threshold),
        Condition::expression(BlendShape::BrowInnerUp, brow_up_threshold),
        Condition::expression(BlendShape::BrowDownLeft, brow_down_threshold),
        Condition::expression(BlendShape::MouthStretchLeft, mouth_threshold),
    ])
}
