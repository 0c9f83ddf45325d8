use std::sync::Arc;

use facelink_actions::record::{TrackingPlayer, TrackingRecorder};
use facelink_actions::{builtin, pump, ActionBinding, ActionEngine, ActionEvent, Condition};
use facelink_common::config::EngineConfig;
use facelink_tracking_model::{
    BlendShape, FaceSnapshot, HandGesture, HandSnapshot, Handedness, TrackedHand, TrackingFrame,
};
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::mpsc;

fn smile(ts: i64, value: f32) -> FaceSnapshot {
    FaceSnapshot::new(ts)
        .with_value(BlendShape::MouthSmileLeft, value)
        .with_value(BlendShape::MouthSmileRight, value)
}

fn fist(ts: i64) -> HandSnapshot {
    HandSnapshot::new(
        vec![TrackedHand::new(Handedness::Left, HandGesture::ClosedFist, 0.9)],
        ts,
    )
}

#[tokio::test]
async fn broadcast_matches_returned_events() {
    let engine = ActionEngine::new();
    engine
        .register(ActionBinding::new("smile", builtin::smile(0.6)).emit_held_events(true))
        .unwrap();
    let mut first = engine.subscribe();
    let mut second = engine.subscribe();

    let mut returned = Vec::new();
    returned.extend(engine.process_face(smile(0, 0.9)));
    returned.extend(engine.process_face(smile(33, 0.9)));
    returned.extend(engine.process_face(smile(66, 0.0)));
    assert_eq!(returned.len(), 3);

    for rx in [&mut first, &mut second] {
        let mut streamed = Vec::new();
        while let Ok(event) = rx.try_recv() {
            streamed.push(event);
        }
        assert_eq!(streamed, returned);
    }
}

#[tokio::test]
async fn late_subscriber_sees_only_new_events() {
    let engine = ActionEngine::new();
    engine
        .register(ActionBinding::new("fist", builtin::closed_fist(0.5)))
        .unwrap();
    engine.process_hand(fist(0));

    let mut rx = engine.subscribe();
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

    engine.process_hand(HandSnapshot::not_tracking(10));
    assert!(matches!(
        rx.try_recv(),
        Ok(ActionEvent::Released { .. })
    ));
}

#[tokio::test]
async fn slow_subscriber_lags_without_blocking() {
    let engine = ActionEngine::with_config(&EngineConfig { event_capacity: 2 });
    engine
        .register(ActionBinding::new("smile", builtin::smile(0.6)).emit_held_events(true))
        .unwrap();
    let mut rx = engine.subscribe();

    for ts in 0..10 {
        let events = engine.process_face(smile(ts, 0.9));
        assert_eq!(events.len(), 1);
    }

    assert!(matches!(rx.recv().await, Err(RecvError::Lagged(_))));
    match rx.recv().await {
        Ok(ActionEvent::Held { timestamp_ms, .. }) => assert_eq!(timestamp_ms, 8),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn release_closes_stream_without_synthesizing_release() {
    let engine = ActionEngine::new();
    engine
        .register(ActionBinding::new("smile", builtin::smile(0.6)))
        .unwrap();
    let mut rx = engine.subscribe();
    engine.process_face(smile(0, 0.9));
    assert!(matches!(rx.recv().await, Ok(ActionEvent::Started { .. })));

    engine.release();
    assert!(matches!(rx.recv().await, Err(RecvError::Closed)));

    let mut late = engine.subscribe();
    assert!(matches!(late.recv().await, Err(RecvError::Closed)));
}

#[tokio::test]
async fn clear_does_not_synthesize_release() {
    let engine = ActionEngine::new();
    engine
        .register(ActionBinding::new("smile", builtin::smile(0.6)))
        .unwrap();
    let mut rx = engine.subscribe();
    assert_eq!(engine.process_face(smile(0, 0.9)).len(), 1);
    assert!(rx.try_recv().is_ok());

    engine.clear();
    assert!(engine.process_face(smile(10, 0.0)).is_empty());
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn concurrent_pipelines_keep_pairs_balanced() {
    let engine = Arc::new(ActionEngine::new());
    engine
        .register(
            ActionBinding::new(
                "combo",
                Condition::all([
                    builtin::smile(0.6),
                    Condition::gesture(HandGesture::ClosedFist, 0.5),
                ]),
            )
            .debounce_ms(5),
        )
        .unwrap();
    let mut rx = engine.subscribe();

    let face_engine = engine.clone();
    let faces = std::thread::spawn(move || {
        let mut events = Vec::new();
        for i in 0..200i64 {
            let value = if (i / 7) % 2 == 0 { 0.9 } else { 0.1 };
            events.extend(face_engine.process_face(smile(i * 2, value)));
        }
        events
    });

    let hand_engine = engine.clone();
    let hands = std::thread::spawn(move || {
        let mut events = Vec::new();
        for i in 0..200i64 {
            let frame = if (i / 11) % 2 == 0 {
                fist(i * 2 + 1)
            } else {
                HandSnapshot::not_tracking(i * 2 + 1)
            };
            events.extend(hand_engine.process_hand(frame));
        }
        events
    });

    let returned = faces.join().unwrap().len() + hands.join().unwrap().len();

    let mut streamed = Vec::new();
    while let Ok(event) = rx.try_recv() {
        streamed.push(event);
    }
    assert_eq!(streamed.len(), returned);

    // The stream is in processing order: Started and Released alternate.
    let mut active = false;
    for event in &streamed {
        match event {
            ActionEvent::Started { .. } => {
                assert!(!active);
                active = true;
            }
            ActionEvent::Released { .. } => {
                assert!(active);
                active = false;
            }
            ActionEvent::Held { .. } => unreachable!(),
        }
    }
}

#[tokio::test]
async fn recorded_session_replays_into_engine() {
    let recorder = TrackingRecorder::unlimited();
    recorder.start();
    for (ts, value) in [(0, 0.9), (20, 0.9), (40, 0.1), (60, 0.9)] {
        recorder.record(&TrackingFrame::from(smile(ts, value)));
    }
    recorder.record(&TrackingFrame::from(FaceSnapshot::not_tracking(70)));
    let session = recorder.stop();
    assert_eq!(session.frame_count(), 4);

    let engine = Arc::new(ActionEngine::new());
    engine
        .register(ActionBinding::new("smile", builtin::smile(0.6)))
        .unwrap();
    let mut rx = engine.subscribe();

    let (tx, frames) = mpsc::channel(4);
    let pump = tokio::spawn(pump::pump_frames(engine.clone(), frames));
    let sent = TrackingPlayer::new(session).speed(20.0).play(tx).await;
    assert_eq!(sent, 4);
    assert_eq!(pump.await.unwrap(), 4);

    let kinds: Vec<&'static str> = std::iter::from_fn(|| rx.try_recv().ok())
        .map(|e| e.kind())
        .collect();
    assert_eq!(kinds, vec!["started", "released", "started"]);
}
