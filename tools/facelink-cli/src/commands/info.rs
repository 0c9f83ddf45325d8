//! Show capture information.

use std::path::PathBuf;

use facelink_actions::record::TrackingSession;
use facelink_tracking_model::TrackingFrame;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    let header = facelink_tracking_model::parse_header(&content);
    let frames = facelink_tracking_model::parse_frames(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", path.display()))?;

    let mut face = 0usize;
    let mut hand = 0usize;
    let mut lost = 0usize;
    for frame in &frames {
        match frame {
            TrackingFrame::Face(f) => {
                face += 1;
                lost += usize::from(!f.is_tracking);
            }
            TrackingFrame::Hand(h) => {
                hand += 1;
                lost += usize::from(!h.is_tracking);
            }
        }
    }

    println!("Capture: {}", path.display());
    if let Some(header) = header {
        println!("  Schema: {}", header.schema_version);
        println!("  Recorded: {}", header.recorded_at);
        if let Some(source) = header.source {
            println!("  Source: {source}");
        }
    }
    println!();

    let session = TrackingSession::new(frames);
    println!("Frames: {}", session.frame_count());
    println!("  Face: {face}");
    println!("  Hand: {hand}");
    println!("  Tracking lost: {lost}");
    println!(
        "  Span: {}ms .. {}ms ({}ms)",
        session.start_timestamp_ms(),
        session.end_timestamp_ms(),
        session.duration_ms()
    );
    println!("  Average rate: {:.1} fps", session.average_fps());

    Ok(())
}
