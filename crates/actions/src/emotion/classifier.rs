//! Cosine-similarity emotion classifier.
//!
//! Each template is compared against the observed channel values using
//! only the channels the template lists. The best match wins unless it
//! scores below `neutral_threshold`. Neutral itself is scored as
//! `1 - best`, so a weak-but-above-threshold match can still lose to it.

use std::collections::BTreeMap;

use facelink_tracking_model::{BlendShape, FaceSnapshot, TimestampMs};
use serde::{Deserialize, Serialize};

use super::templates::{default_templates, EmotionTemplate};
use super::Emotion;

pub const DEFAULT_NEUTRAL_THRESHOLD: f32 = 0.15;

/// Classification of a single face snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub emotion: Emotion,
    /// Score of `emotion`, in `[0.0, 1.0]`.
    pub confidence: f32,
    /// Score of every emotion, neutral included.
    pub scores: BTreeMap<Emotion, f32>,
    pub timestamp_ms: TimestampMs,
}

pub struct EmotionClassifier {
    neutral_threshold: f32,
    templates: Vec<EmotionTemplate>,
}

impl EmotionClassifier {
    pub fn new(neutral_threshold: f32, templates: Vec<EmotionTemplate>) -> Self {
        Self {
            neutral_threshold,
            templates,
        }
    }

    /// Classifier with the built-in templates and neutral threshold.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_NEUTRAL_THRESHOLD, default_templates())
    }

    /// Classify one snapshot. A non-tracking snapshot is neutral with zero
    /// confidence.
    pub fn classify(&self, face: &FaceSnapshot) -> EmotionResult {
        if !face.is_tracking {
            return EmotionResult {
                emotion: Emotion::Neutral,
                confidence: 0.0,
                scores: Emotion::ALL.iter().map(|e| (*e, 0.0)).collect(),
                timestamp_ms: face.timestamp_ms,
            };
        }

        let mut scores = BTreeMap::new();
        let mut best: Option<(Emotion, f32)> = None;
        for template in &self.templates {
            let score = cosine_similarity(face, &template.weights);
            scores.insert(template.emotion, score);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((template.emotion, score));
            }
        }

        let max_score = best.map_or(0.0, |(_, s)| s);
        let neutral_score = (1.0 - max_score).clamp(0.0, 1.0);
        scores.insert(Emotion::Neutral, neutral_score);

        let (emotion, confidence) = match best {
            Some((emotion, score)) if max_score >= self.neutral_threshold => {
                if neutral_score > score {
                    (Emotion::Neutral, neutral_score)
                } else {
                    (emotion, score)
                }
            }
            _ => (Emotion::Neutral, neutral_score),
        };

        EmotionResult {
            emotion,
            confidence,
            scores,
            timestamp_ms: face.timestamp_ms,
        }
    }
}

impl Default for EmotionClassifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Cosine similarity over the template's channels, clamped to `[0, 1]`.
pub fn cosine_similarity(face: &FaceSnapshot, weights: &[(BlendShape, f32)]) -> f32 {
    if weights.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut observed_sq = 0.0f32;
    let mut template_sq = 0.0f32;
    for &(channel, weight) in weights {
        let observed = face.value_of(channel);
        dot += observed * weight;
        observed_sq += observed * observed;
        template_sq += weight * weight;
    }

    let denominator = observed_sq.sqrt() * template_sq.sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    (dot / denominator).clamp(0.0, 1.0)
}
