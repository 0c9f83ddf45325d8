//! In-memory recording and timed playback of tracking frames.
//!
//! Recorded sessions are useful for tuning binding timings: record once,
//! then replay the same frames through engines with different settings.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use facelink_tracking_model::{TimestampMs, TrackingFrame};
use tokio::sync::mpsc;

/// Recorded frames in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackingSession {
    pub frames: Vec<TrackingFrame>,
}

impl TrackingSession {
    pub fn new(frames: Vec<TrackingFrame>) -> Self {
        Self { frames }
    }

    /// Time between first and last frame.
    pub fn duration_ms(&self) -> i64 {
        match (self.frames.first(), self.frames.last()) {
            (Some(first), Some(last)) if self.frames.len() >= 2 => {
                last.timestamp_ms() - first.timestamp_ms()
            }
            _ => 0,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Timestamp of the first frame, or 0 when empty.
    pub fn start_timestamp_ms(&self) -> TimestampMs {
        self.frames.first().map_or(0, TrackingFrame::timestamp_ms)
    }

    /// Timestamp of the last frame, or 0 when empty.
    pub fn end_timestamp_ms(&self) -> TimestampMs {
        self.frames.last().map_or(0, TrackingFrame::timestamp_ms)
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame intervals per second, or 0 for sessions without duration.
    pub fn average_fps(&self) -> f32 {
        let duration = self.duration_ms();
        if duration <= 0 || self.frames.len() < 2 {
            return 0.0;
        }
        (self.frames.len() - 1) as f32 / (duration as f32 / 1000.0)
    }
}

#[derive(Default)]
struct RecorderInner {
    frames: Vec<TrackingFrame>,
    recording: bool,
}

/// Thread-safe recorder. Frames where the tracker lost its target are
/// skipped.
pub struct TrackingRecorder {
    /// 0 means unlimited.
    max_frames: usize,
    inner: Mutex<RecorderInner>,
}

impl TrackingRecorder {
    pub fn new(max_frames: usize) -> Self {
        Self {
            max_frames,
            inner: Mutex::new(RecorderInner::default()),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(0)
    }

    fn lock(&self) -> MutexGuard<'_, RecorderInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start recording, discarding anything recorded earlier.
    pub fn start(&self) {
        let mut inner = self.lock();
        inner.frames.clear();
        inner.recording = true;
    }

    /// Record one frame. Returns whether it was kept.
    pub fn record(&self, frame: &TrackingFrame) -> bool {
        let tracking = match frame {
            TrackingFrame::Face(face) => face.is_tracking,
            TrackingFrame::Hand(hand) => hand.is_tracking,
        };
        let mut inner = self.lock();
        if !inner.recording || !tracking {
            return false;
        }
        if self.max_frames > 0 && inner.frames.len() >= self.max_frames {
            return false;
        }
        inner.frames.push(frame.clone());
        true
    }

    /// Stop recording and return what was captured.
    pub fn stop(&self) -> TrackingSession {
        let mut inner = self.lock();
        inner.recording = false;
        TrackingSession::new(inner.frames.clone())
    }

    /// Drop recorded frames without stopping.
    pub fn clear(&self) {
        self.lock().frames.clear();
    }

    pub fn is_recording(&self) -> bool {
        self.lock().recording
    }

    pub fn frame_count(&self) -> usize {
        self.lock().frames.len()
    }
}

impl Default for TrackingRecorder {
    fn default() -> Self {
        Self::unlimited()
    }
}

/// Replays a session in real time (scaled by `speed`).
pub struct TrackingPlayer {
    session: TrackingSession,
    speed: f32,
    looped: bool,
}

impl TrackingPlayer {
    pub fn new(session: TrackingSession) -> Self {
        Self {
            session,
            speed: 1.0,
            looped: false,
        }
    }

    /// Playback speed multiplier. Non-positive values are ignored.
    pub fn speed(mut self, speed: f32) -> Self {
        if speed > 0.0 {
            self.speed = speed;
        }
        self
    }

    /// Restart from the first frame after the last one.
    pub fn looped(mut self, looped: bool) -> Self {
        self.looped = looped;
        self
    }

    fn delay_between(&self, previous: &TrackingFrame, next: &TrackingFrame) -> Option<Duration> {
        let interval = next.timestamp_ms() - previous.timestamp_ms();
        if interval <= 0 {
            return None;
        }
        let scaled = ((interval as f32 / self.speed) as u64).max(1);
        Some(Duration::from_millis(scaled))
    }

    /// Send every frame to `tx`, sleeping for the recorded intervals.
    ///
    /// Returns the number of frames sent. Stops early once the receiver is
    /// dropped; a looped player runs until then.
    pub async fn play(&self, tx: mpsc::Sender<TrackingFrame>) -> u64 {
        let frames = &self.session.frames;
        let mut sent = 0u64;
        if frames.is_empty() {
            return sent;
        }

        loop {
            for (index, frame) in frames.iter().enumerate() {
                if index > 0 {
                    if let Some(delay) = self.delay_between(&frames[index - 1], frame) {
                        tokio::time::sleep(delay).await;
                    }
                }
                if tx.send(frame.clone()).await.is_err() {
                    tracing::debug!(sent, "Playback receiver closed");
                    return sent;
                }
                sent += 1;
            }
            if !self.looped {
                return sent;
            }
        }
    }
}
