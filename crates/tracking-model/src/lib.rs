//! FaceLink Tracking Model
//!
//! Defines the data contracts produced by the sensing pipelines:
//! - **Face:** Per-frame blend-shape intensities with a tracking flag
//! - **Hand:** Per-frame hand detections with a classified gesture
//! - **Frames:** A tagged union of both, with a JSONL codec for capture files
//!
//! All intensities and confidences are in the `[0.0, 1.0]` range and all
//! timestamps are milliseconds on the producing pipeline's clock.

pub mod face;
pub mod frame;
pub mod hand;

pub use face::*;
pub use frame::*;
pub use hand::*;
