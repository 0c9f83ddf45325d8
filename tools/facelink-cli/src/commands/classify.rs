//! Classify the dominant emotion of each face frame in a capture.

use std::collections::BTreeMap;
use std::path::PathBuf;

use facelink_actions::emotion::{default_templates, EmotionClassifier};
use facelink_tracking_model::TrackingFrame;

pub fn run(path: PathBuf, neutral_threshold: f32) -> anyhow::Result<()> {
    let frames = super::load_frames(&path)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {e}", path.display()))?;
    let classifier = EmotionClassifier::new(neutral_threshold, default_templates());

    let mut counts = BTreeMap::new();
    for frame in &frames {
        let TrackingFrame::Face(face) = frame else {
            continue;
        };
        let result = classifier.classify(face);
        println!(
            "[{}ms] {} ({:.2})",
            result.timestamp_ms, result.emotion, result.confidence
        );
        *counts.entry(result.emotion).or_insert(0u64) += 1;
    }

    if counts.is_empty() {
        println!("No face frames in {}", path.display());
        return Ok(());
    }

    println!();
    println!("Summary:");
    for (emotion, count) in &counts {
        println!("  {emotion}: {count}");
    }
    Ok(())
}
