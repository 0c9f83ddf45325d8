pub mod builtins;
pub mod classify;
pub mod info;
pub mod replay;

use std::path::Path;

use facelink_common::error::FacelinkResult;
use facelink_tracking_model::TrackingFrame;

/// Read and parse a JSONL capture file.
pub fn load_frames(path: &Path) -> FacelinkResult<Vec<TrackingFrame>> {
    let content = std::fs::read_to_string(path)?;
    let frames = facelink_tracking_model::parse_frames(&content)?;
    tracing::debug!(frames = frames.len(), path = %path.display(), "Loaded capture");
    Ok(frames)
}
