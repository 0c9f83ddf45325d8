//! Face expression snapshots.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Millisecond timestamp attached to every snapshot.
pub type TimestampMs = i64;

/// ARKit-compatible expression channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendShape {
    EyeBlinkLeft,
    EyeLookDownLeft,
    EyeLookInLeft,
    EyeLookOutLeft,
    EyeLookUpLeft,
    EyeSquintLeft,
    EyeWideLeft,
    EyeBlinkRight,
    EyeLookDownRight,
    EyeLookInRight,
    EyeLookOutRight,
    EyeLookUpRight,
    EyeSquintRight,
    EyeWideRight,
    JawForward,
    JawLeft,
    JawRight,
    JawOpen,
    MouthClose,
    MouthFunnel,
    MouthPucker,
    MouthLeft,
    MouthRight,
    MouthSmileLeft,
    MouthSmileRight,
    MouthFrownLeft,
    MouthFrownRight,
    MouthDimpleLeft,
    MouthDimpleRight,
    MouthStretchLeft,
    MouthStretchRight,
    MouthRollLower,
    MouthRollUpper,
    MouthShrugLower,
    MouthShrugUpper,
    MouthPressLeft,
    MouthPressRight,
    MouthLowerDownLeft,
    MouthLowerDownRight,
    MouthUpperUpLeft,
    MouthUpperUpRight,
    BrowDownLeft,
    BrowDownRight,
    BrowInnerUp,
    BrowOuterUpLeft,
    BrowOuterUpRight,
    CheekPuff,
    CheekSquintLeft,
    CheekSquintRight,
    NoseSneerLeft,
    NoseSneerRight,
    TongueOut,
}

impl BlendShape {
    /// Every channel, in ARKit order.
    pub const ALL: [BlendShape; 52] = [
        BlendShape::EyeBlinkLeft,
        BlendShape::EyeLookDownLeft,
        BlendShape::EyeLookInLeft,
        BlendShape::EyeLookOutLeft,
        BlendShape::EyeLookUpLeft,
        BlendShape::EyeSquintLeft,
        BlendShape::EyeWideLeft,
        BlendShape::EyeBlinkRight,
        BlendShape::EyeLookDownRight,
        BlendShape::EyeLookInRight,
        BlendShape::EyeLookOutRight,
        BlendShape::EyeLookUpRight,
        BlendShape::EyeSquintRight,
        BlendShape::EyeWideRight,
        BlendShape::JawForward,
        BlendShape::JawLeft,
        BlendShape::JawRight,
        BlendShape::JawOpen,
        BlendShape::MouthClose,
        BlendShape::MouthFunnel,
        BlendShape::MouthPucker,
        BlendShape::MouthLeft,
        BlendShape::MouthRight,
        BlendShape::MouthSmileLeft,
        BlendShape::MouthSmileRight,
        BlendShape::MouthFrownLeft,
        BlendShape::MouthFrownRight,
        BlendShape::MouthDimpleLeft,
        BlendShape::MouthDimpleRight,
        BlendShape::MouthStretchLeft,
        BlendShape::MouthStretchRight,
        BlendShape::MouthRollLower,
        BlendShape::MouthRollUpper,
        BlendShape::MouthShrugLower,
        BlendShape::MouthShrugUpper,
        BlendShape::MouthPressLeft,
        BlendShape::MouthPressRight,
        BlendShape::MouthLowerDownLeft,
        BlendShape::MouthLowerDownRight,
        BlendShape::MouthUpperUpLeft,
        BlendShape::MouthUpperUpRight,
        BlendShape::BrowDownLeft,
        BlendShape::BrowDownRight,
        BlendShape::BrowInnerUp,
        BlendShape::BrowOuterUpLeft,
        BlendShape::BrowOuterUpRight,
        BlendShape::CheekPuff,
        BlendShape::CheekSquintLeft,
        BlendShape::CheekSquintRight,
        BlendShape::NoseSneerLeft,
        BlendShape::NoseSneerRight,
        BlendShape::TongueOut,
    ];
}

/// One face-tracking result. Replaced wholesale on every arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceSnapshot {
    /// Intensity per channel in `[0.0, 1.0]`. Absent channels read as 0.
    #[serde(default)]
    pub blend_shapes: HashMap<BlendShape, f32>,

    /// False when the tracker lost the face for this frame.
    pub is_tracking: bool,

    pub timestamp_ms: TimestampMs,
}

impl FaceSnapshot {
    /// A tracking snapshot with no channel values yet.
    pub fn new(timestamp_ms: TimestampMs) -> Self {
        Self {
            blend_shapes: HashMap::new(),
            is_tracking: true,
            timestamp_ms,
        }
    }

    /// A snapshot reporting the face as lost.
    pub fn not_tracking(timestamp_ms: TimestampMs) -> Self {
        Self {
            blend_shapes: HashMap::new(),
            is_tracking: false,
            timestamp_ms,
        }
    }

    /// Builder-style channel setter.
    pub fn with_value(mut self, channel: BlendShape, value: f32) -> Self {
        self.blend_shapes.insert(channel, value);
        self
    }

    /// Intensity of `channel`, or 0.0 when the tracker did not report it.
    pub fn value_of(&self, channel: BlendShape) -> f32 {
        self.blend_shapes.get(&channel).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_channel_reads_zero() {
        let face = FaceSnapshot::new(0).with_value(BlendShape::JawOpen, 0.7);
        assert_eq!(face.value_of(BlendShape::JawOpen), 0.7);
        assert_eq!(face.value_of(BlendShape::TongueOut), 0.0);
    }

    #[test]
    fn test_channel_names_are_snake_case() {
        let json = serde_json::to_string(&BlendShape::EyeBlinkLeft).unwrap();
        assert_eq!(json, "\"eye_blink_left\"");
    }

    #[test]
    fn test_all_channels_are_distinct() {
        let mut sorted = BlendShape::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 52);
    }

    #[test]
    fn test_snapshot_json_uses_channel_keys() {
        let face = FaceSnapshot::new(42).with_value(BlendShape::TongueOut, 0.5);
        let json = serde_json::to_string(&face).unwrap();
        assert!(json.contains("\"tongue_out\":0.5"));

        let parsed: FaceSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, face);
    }
}
