//! Async feed loops that drain sensing-pipeline channels into an engine.

use std::sync::Arc;

use facelink_tracking_model::{FaceSnapshot, HandSnapshot, TrackingFrame};
use tokio::sync::mpsc;

use crate::engine::ActionEngine;

/// Feed face snapshots until the channel closes or the engine is released.
/// Returns the number of snapshots processed.
pub async fn pump_faces(engine: Arc<ActionEngine>, mut rx: mpsc::Receiver<FaceSnapshot>) -> u64 {
    let mut processed = 0u64;
    while let Some(face) = rx.recv().await {
        if engine.is_released() {
            break;
        }
        engine.process_face(face);
        processed += 1;
    }
    tracing::debug!(processed, "Face pump stopped");
    processed
}

/// Feed hand snapshots until the channel closes or the engine is released.
pub async fn pump_hands(engine: Arc<ActionEngine>, mut rx: mpsc::Receiver<HandSnapshot>) -> u64 {
    let mut processed = 0u64;
    while let Some(hand) = rx.recv().await {
        if engine.is_released() {
            break;
        }
        engine.process_hand(hand);
        processed += 1;
    }
    tracing::debug!(processed, "Hand pump stopped");
    processed
}

/// Feed mixed frames, e.g. from a [`TrackingPlayer`](crate::record::TrackingPlayer).
pub async fn pump_frames(
    engine: Arc<ActionEngine>,
    mut rx: mpsc::Receiver<TrackingFrame>,
) -> u64 {
    let mut processed = 0u64;
    while let Some(frame) = rx.recv().await {
        if engine.is_released() {
            break;
        }
        engine.process_frame(frame);
        processed += 1;
    }
    tracing::debug!(processed, "Frame pump stopped");
    processed
}
