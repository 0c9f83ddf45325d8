//! Mixed-modality frame streams.
//!
//! Capture files are JSONL: an optional `#`-prefixed header line carrying a
//! [`SessionHeader`], then one [`TrackingFrame`] per line in arrival order.

use serde::{Deserialize, Serialize};

use crate::face::{FaceSnapshot, TimestampMs};
use crate::hand::HandSnapshot;

/// Current capture file schema version.
pub const SCHEMA_VERSION: &str = "1.0";

/// A snapshot from either sensing pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackingFrame {
    Face(FaceSnapshot),
    Hand(HandSnapshot),
}

impl TrackingFrame {
    pub fn timestamp_ms(&self) -> TimestampMs {
        match self {
            TrackingFrame::Face(face) => face.timestamp_ms,
            TrackingFrame::Hand(hand) => hand.timestamp_ms,
        }
    }
}

impl From<FaceSnapshot> for TrackingFrame {
    fn from(face: FaceSnapshot) -> Self {
        TrackingFrame::Face(face)
    }
}

impl From<HandSnapshot> for TrackingFrame {
    fn from(hand: HandSnapshot) -> Self {
        TrackingFrame::Hand(hand)
    }
}

/// Metadata written as the leading comment line of a capture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionHeader {
    pub schema_version: String,

    /// Wall-clock time the capture began (RFC 3339).
    pub recorded_at: String,

    /// Free-form name of the producing pipeline.
    #[serde(default)]
    pub source: Option<String>,
}

impl SessionHeader {
    /// Header stamped with the current wall-clock time.
    pub fn now(source: Option<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            recorded_at: chrono::Utc::now().to_rfc3339(),
            source,
        }
    }

    /// Render as a `#` comment line (without trailing newline).
    pub fn to_comment_line(&self) -> Result<String, serde_json::Error> {
        Ok(format!("# {}", serde_json::to_string(self)?))
    }
}

/// Parse the header from the first line of a capture file, if present.
pub fn parse_header(jsonl: &str) -> Option<SessionHeader> {
    let first = jsonl.lines().map(str::trim).find(|line| !line.is_empty())?;
    let body = first.strip_prefix('#')?;
    serde_json::from_str(body.trim()).ok()
}

/// Parse frames from JSONL content (one JSON object per line).
pub fn parse_frames(jsonl: &str) -> Result<Vec<TrackingFrame>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize frames to JSONL format.
pub fn serialize_frames(frames: &[TrackingFrame]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}
