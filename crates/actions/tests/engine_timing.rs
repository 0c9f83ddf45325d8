use facelink_actions::{ActionBinding, ActionEngine, ActionEvent, Condition, Phase};
use facelink_tracking_model::{
    BlendShape, FaceSnapshot, HandGesture, HandSnapshot, Handedness, TrackedHand,
};
use proptest::prelude::*;

fn tongue(ts: i64, value: f32) -> FaceSnapshot {
    FaceSnapshot::new(ts).with_value(BlendShape::TongueOut, value)
}

fn tongue_on(ts: i64) -> FaceSnapshot {
    tongue(ts, 0.8)
}

fn tongue_off(ts: i64) -> FaceSnapshot {
    tongue(ts, 0.1)
}

fn tongue_binding() -> ActionBinding {
    ActionBinding::new("tongue", Condition::expression(BlendShape::TongueOut, 0.5))
}

fn engine_with(binding: ActionBinding) -> ActionEngine {
    let engine = ActionEngine::new();
    engine.register(binding).expect("binding should register");
    engine
}

fn started(ts: i64) -> ActionEvent {
    ActionEvent::Started {
        action_id: "tongue".to_string(),
        timestamp_ms: ts,
    }
}

fn released(ts: i64, total: i64) -> ActionEvent {
    ActionEvent::Released {
        action_id: "tongue".to_string(),
        timestamp_ms: ts,
        total_duration_ms: total,
    }
}

#[test]
fn immediate_start_then_release() {
    let engine = engine_with(tongue_binding());
    assert_eq!(engine.process_face(tongue_on(100)), vec![started(100)]);
    assert_eq!(engine.process_face(tongue_off(200)), vec![released(200, 100)]);
}

#[test]
fn hold_time_delays_start() {
    let engine = engine_with(tongue_binding().hold_time_ms(500));
    assert!(engine.process_face(tongue_on(100)).is_empty());
    assert!(engine.process_face(tongue_on(400)).is_empty());
    assert_eq!(engine.process_face(tongue_on(600)), vec![started(600)]);
}

#[test]
fn hold_progress_is_discarded_on_loss() {
    let engine = engine_with(tongue_binding().hold_time_ms(300));
    assert!(engine.process_face(tongue_on(0)).is_empty());
    assert!(engine.process_face(tongue_on(250)).is_empty());
    assert!(engine.process_face(tongue_off(280)).is_empty());
    assert_eq!(engine.phase_of("tongue"), Some(Phase::Idle));

    assert!(engine.process_face(tongue_on(300)).is_empty());
    assert!(engine.process_face(tongue_on(550)).is_empty());
    assert_eq!(engine.process_face(tongue_on(600)), vec![started(600)]);
}

#[test]
fn cooldown_suppresses_reactivation() {
    let engine = engine_with(tongue_binding().cooldown_ms(1000));
    engine.process_face(tongue_on(0));
    assert_eq!(engine.process_face(tongue_off(100)), vec![released(100, 100)]);

    assert!(engine.process_face(tongue_on(200)).is_empty());
    assert!(engine.process_face(tongue_on(1099)).is_empty());
    assert_eq!(engine.phase_of("tongue"), Some(Phase::Cooldown));
    assert_eq!(engine.process_face(tongue_on(1100)), vec![started(1100)]);
}

#[test]
fn cooldown_then_hold_time() {
    let engine = engine_with(tongue_binding().cooldown_ms(500).hold_time_ms(200));
    engine.process_face(tongue_on(0));
    engine.process_face(tongue_on(200));
    engine.process_face(tongue_off(300));

    assert!(engine.process_face(tongue_on(800)).is_empty());
    assert_eq!(engine.phase_of("tongue"), Some(Phase::Pending));
    assert!(engine.process_face(tongue_on(900)).is_empty());
    assert_eq!(engine.process_face(tongue_on(1000)), vec![started(1000)]);
}

#[test]
fn debounce_absorbs_brief_loss() {
    let engine = engine_with(tongue_binding().debounce_ms(200));
    engine.process_face(tongue_on(0));
    assert!(engine.process_face(tongue_off(100)).is_empty());
    assert!(engine.process_face(tongue_off(250)).is_empty());
    assert!(engine.process_face(tongue_on(290)).is_empty());
    assert_eq!(engine.phase_of("tongue"), Some(Phase::Active));
}

#[test]
fn debounce_releases_after_sustained_loss() {
    let engine = engine_with(tongue_binding().debounce_ms(200));
    engine.process_face(tongue_on(0));
    assert!(engine.process_face(tongue_off(100)).is_empty());
    assert!(engine.process_face(tongue_off(200)).is_empty());
    assert_eq!(engine.process_face(tongue_off(300)), vec![released(300, 300)]);
    assert!(engine.process_face(tongue_off(400)).is_empty());
}

#[test]
fn held_events_every_arrival_while_active() {
    let engine = engine_with(tongue_binding().emit_held_events(true));
    assert_eq!(engine.process_face(tongue_on(100)), vec![started(100)]);

    for ts in [133, 166, 200] {
        assert_eq!(
            engine.process_face(tongue_on(ts)),
            vec![ActionEvent::Held {
                action_id: "tongue".to_string(),
                timestamp_ms: ts,
                duration_ms: ts - 100,
            }]
        );
    }
    assert_eq!(engine.process_face(tongue_off(250)), vec![released(250, 150)]);
}

#[test]
fn no_held_events_when_disabled() {
    let engine = engine_with(tongue_binding());
    engine.process_face(tongue_on(0));
    for ts in [10, 20, 30] {
        assert!(engine.process_face(tongue_on(ts)).is_empty());
    }
}

#[test]
fn losing_face_tracking_releases() {
    let engine = engine_with(tongue_binding());
    engine.process_face(tongue_on(0));
    assert_eq!(
        engine.process_face(FaceSnapshot::not_tracking(40)),
        vec![released(40, 40)]
    );
}

#[test]
fn combined_condition_completes_on_hand_arrival() {
    let engine = ActionEngine::new();
    engine
        .register(
            ActionBinding::new(
                "smile_peace",
                Condition::all([
                    Condition::expression(BlendShape::MouthSmileLeft, 0.5),
                    Condition::gesture_with_hand(HandGesture::Victory, Handedness::Right, 0.7),
                ]),
            )
            .hold_time_ms(100),
        )
        .unwrap();

    let smile = FaceSnapshot::new(0).with_value(BlendShape::MouthSmileLeft, 0.9);
    let peace = |ts| {
        HandSnapshot::new(
            vec![TrackedHand::new(Handedness::Right, HandGesture::Victory, 0.8)],
            ts,
        )
    };

    // No hand snapshot cached yet.
    assert!(engine.process_face(smile).is_empty());
    assert_eq!(engine.phase_of("smile_peace"), Some(Phase::Idle));

    // Hand arrival at 50 completes the AND and starts the hold.
    assert!(engine.process_hand(peace(50)).is_empty());
    assert_eq!(engine.phase_of("smile_peace"), Some(Phase::Pending));

    // A face arrival reuses the cached hand snapshot.
    let still_smiling = FaceSnapshot::new(150).with_value(BlendShape::MouthSmileLeft, 0.9);
    assert_eq!(
        engine.process_face(still_smiling),
        vec![ActionEvent::Started {
            action_id: "smile_peace".to_string(),
            timestamp_ms: 150,
        }]
    );

    // Losing the hand releases.
    let events = engine.process_hand(HandSnapshot::not_tracking(200));
    assert_eq!(
        events,
        vec![ActionEvent::Released {
            action_id: "smile_peace".to_string(),
            timestamp_ms: 200,
            total_duration_ms: 50,
        }]
    );
}

#[test]
fn independent_bindings_advance_together() {
    let engine = ActionEngine::new();
    engine.register(tongue_binding()).unwrap();
    engine
        .register(
            ActionBinding::new("jaw", Condition::expression(BlendShape::JawOpen, 0.5))
                .hold_time_ms(100),
        )
        .unwrap();

    let both = |ts| {
        FaceSnapshot::new(ts)
            .with_value(BlendShape::TongueOut, 0.9)
            .with_value(BlendShape::JawOpen, 0.9)
    };
    assert_eq!(engine.process_face(both(0)), vec![started(0)]);
    assert_eq!(
        engine.process_face(both(100)),
        vec![ActionEvent::Started {
            action_id: "jaw".to_string(),
            timestamp_ms: 100,
        }]
    );
}

proptest! {
    #[test]
    fn zero_timing_toggle_yields_one_event_per_edge(
        pattern in prop::collection::vec(any::<bool>(), 1..40),
        step in 1i64..100,
    ) {
        let engine = engine_with(tongue_binding());
        let mut previous = false;
        let mut started_at = None;

        for (i, &on) in pattern.iter().enumerate() {
            let ts = i as i64 * step;
            let events = engine.process_face(tongue(ts, if on { 0.9 } else { 0.0 }));
            match (previous, on) {
                (false, true) => {
                    prop_assert_eq!(events, vec![started(ts)]);
                    started_at = Some(ts);
                }
                (true, false) => {
                    let start = started_at.take().unwrap();
                    prop_assert_eq!(events, vec![released(ts, ts - start)]);
                }
                _ => prop_assert!(events.is_empty()),
            }
            previous = on;
        }
    }

    #[test]
    fn hold_time_starts_on_first_arrival_past_threshold(
        hold in 0u64..1000,
        gaps in prop::collection::vec(1i64..200, 1..30),
    ) {
        let engine = engine_with(tongue_binding().hold_time_ms(hold));
        let mut ts = 0i64;
        let mut fired = false;
        prop_assert_eq!(engine.process_face(tongue_on(ts)).len(), usize::from(hold == 0));
        fired |= hold == 0;

        for gap in gaps {
            ts += gap;
            let events = engine.process_face(tongue_on(ts));
            if !fired && ts >= hold as i64 {
                prop_assert_eq!(events, vec![started(ts)]);
                fired = true;
            } else {
                prop_assert!(events.is_empty());
            }
        }
    }
}
