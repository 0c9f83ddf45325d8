//! Ready-made conditions for common expressions and gestures.

use facelink_tracking_model::{BlendShape, HandGesture};

use crate::condition::Condition;
use crate::emotion::triggers as emotion;

pub const DEFAULT_EXPRESSION_THRESHOLD: f32 = 0.6;
pub const DEFAULT_GESTURE_CONFIDENCE: f32 = 0.5;

/// The open eye of a wink must stay at or below this blink value.
pub const WINK_OPEN_EYE_THRESHOLD: f32 = 0.3;

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &[
    "wink_left",
    "wink_right",
    "smile",
    "tongue_out",
    "surprised",
    "thumbs_up",
    "victory",
    "open_palm",
    "closed_fist",
    "happy",
    "sad",
    "angry",
    "surprised_emotion",
    "disgusted",
    "fear",
];

/// Left eye closed, right eye open.
pub fn wink_left(blink_threshold: f32) -> Condition {
    Condition::all([
        Condition::expression(BlendShape::EyeBlinkLeft, blink_threshold),
        Condition::expression_below(BlendShape::EyeBlinkRight, WINK_OPEN_EYE_THRESHOLD),
    ])
}

/// Right eye closed, left eye open.
pub fn wink_right(blink_threshold: f32) -> Condition {
    Condition::all([
        Condition::expression(BlendShape::EyeBlinkRight, blink_threshold),
        Condition::expression_below(BlendShape::EyeBlinkLeft, WINK_OPEN_EYE_THRESHOLD),
    ])
}

/// Both mouth corners raised.
pub fn smile(threshold: f32) -> Condition {
    Condition::all([
        Condition::expression(BlendShape::MouthSmileLeft, threshold),
        Condition::expression(BlendShape::MouthSmileRight, threshold),
    ])
}

pub fn tongue_out(threshold: f32) -> Condition {
    Condition::expression(BlendShape::TongueOut, threshold)
}

/// Inner brows raised and both eyes wide.
pub fn surprised(threshold: f32) -> Condition {
    Condition::all([
        Condition::expression(BlendShape::BrowInnerUp, threshold),
        Condition::expression(BlendShape::EyeWideLeft, threshold),
        Condition::expression(BlendShape::EyeWideRight, threshold),
    ])
}

pub fn thumbs_up(min_confidence: f32) -> Condition {
    Condition::gesture(HandGesture::ThumbUp, min_confidence)
}

pub fn victory(min_confidence: f32) -> Condition {
    Condition::gesture(HandGesture::Victory, min_confidence)
}

pub fn open_palm(min_confidence: f32) -> Condition {
    Condition::gesture(HandGesture::OpenPalm, min_confidence)
}

pub fn closed_fist(min_confidence: f32) -> Condition {
    Condition::gesture(HandGesture::ClosedFist, min_confidence)
}

/// Look up a built-in by name.
///
/// `threshold` overrides the single threshold (or minimum confidence) of
/// the expression and gesture built-ins. Emotion built-ins combine several
/// thresholds and always use their defaults.
pub fn by_name(name: &str, threshold: Option<f32>) -> Option<Condition> {
    let expression = threshold.unwrap_or(DEFAULT_EXPRESSION_THRESHOLD);
    let confidence = threshold.unwrap_or(DEFAULT_GESTURE_CONFIDENCE);
    let condition = match name {
        "wink_left" => wink_left(expression),
        "wink_right" => wink_right(expression),
        "smile" => smile(expression),
        "tongue_out" => tongue_out(expression),
        "surprised" => surprised(expression),
        "thumbs_up" => thumbs_up(confidence),
        "victory" => victory(confidence),
        "open_palm" => open_palm(confidence),
        "closed_fist" => closed_fist(confidence),
        "happy" => emotion::happy(),
        "sad" => emotion::sad(),
        "angry" => emotion::angry(),
        "surprised_emotion" => emotion::surprised_emotion(),
        "disgusted" => emotion::disgusted(),
        "fear" => emotion::fear(),
        _ => return None,
    };
    Some(condition)
}
