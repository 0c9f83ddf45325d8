//! Basic-emotion support: classification of face snapshots and emotion
//! trigger conditions.

pub mod classifier;
pub mod templates;
pub mod triggers;

use serde::{Deserialize, Serialize};

pub use classifier::{EmotionClassifier, EmotionResult};
pub use templates::{default_templates, EmotionTemplate};

/// Ekman's six basic emotions plus neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// Mouth corners raised, cheek squint.
    Happy,
    /// Frown, inner brow raised.
    Sad,
    /// Brows down, mouth press, nose sneer.
    Angry,
    /// Eyes wide, brows raised, jaw open.
    Surprised,
    /// Nose sneer, upper lip raised.
    Disgusted,
    /// Eyes wide, brows raised and drawn together, mouth stretch.
    Fear,
    /// No strong activation of any template.
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprised,
        Emotion::Disgusted,
        Emotion::Fear,
        Emotion::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprised => "surprised",
            Emotion::Disgusted => "disgusted",
            Emotion::Fear => "fear",
            Emotion::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
