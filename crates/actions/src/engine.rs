//! The action engine: binding registry, snapshot cache, and scheduler.
//!
//! Face and hand snapshots arrive independently. Each arrival replaces the
//! cached snapshot of its own modality, leaves the other one untouched, and
//! advances every binding once using the arrival's timestamp as "now".
//! Combined conditions spanning both modalities therefore evaluate against
//! whatever the other pipeline reported last, which may be stale.
//!
//! Everything mutable sits behind one mutex so a hand arrival never sees a
//! half-applied face arrival. Events are returned to the caller and also
//! published on a broadcast channel; publishing never blocks, and slow
//! subscribers lose the oldest events instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use facelink_common::config::EngineConfig;
use facelink_common::error::{FacelinkError, FacelinkResult};
use facelink_tracking_model::{FaceSnapshot, HandSnapshot, TimestampMs, TrackingFrame};
use tokio::sync::broadcast;

use crate::binding::ActionBinding;
use crate::evaluator::evaluate;
use crate::event::ActionEvent;
use crate::state::{Phase, TriggerState};

/// A registered binding and its state. Created and dropped together.
struct Slot {
    binding: ActionBinding,
    state: TriggerState,
}

struct EngineInner {
    /// Registration order.
    slots: Vec<Slot>,
    latest_face: Option<FaceSnapshot>,
    latest_hand: Option<HandSnapshot>,
    /// `None` once released, which closes every subscriber.
    events_tx: Option<broadcast::Sender<ActionEvent>>,
}

impl EngineInner {
    fn position(&self, action_id: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.binding.action_id == action_id)
    }

    fn advance_all(&mut self, now: TimestampMs) -> Vec<ActionEvent> {
        let face = self.latest_face.as_ref();
        let hand = self.latest_hand.as_ref();

        let mut events = Vec::new();
        for slot in &mut self.slots {
            let met = evaluate(&slot.binding.condition, face, hand);
            if let Some(event) = slot.state.step(&slot.binding, met, now) {
                tracing::debug!(
                    action = %slot.binding.action_id,
                    kind = event.kind(),
                    timestamp_ms = now,
                    "Action event"
                );
                events.push(event);
            }
        }

        if let Some(tx) = &self.events_tx {
            for event in &events {
                // Err only means nobody is subscribed right now.
                let _ = tx.send(event.clone());
            }
        }
        events
    }
}

/// Maps face and hand snapshots to debounced action events.
///
/// Safe to share between pipelines (`Arc<ActionEngine>`); all methods take
/// `&self`.
///
/// After [`release`](Self::release): `process_*` return no events,
/// `register` fails with [`FacelinkError::Released`], `unregister` returns
/// `false`, `clear` does nothing, and the event stream is closed. Neither
/// `clear` nor `release` synthesize `Released` events for active bindings.
pub struct ActionEngine {
    inner: Mutex<EngineInner>,
    released: AtomicBool,
}

impl ActionEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        let (events_tx, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            inner: Mutex::new(EngineInner {
                slots: Vec::new(),
                latest_face: None,
                latest_hand: None,
                events_tx: Some(events_tx),
            }),
            released: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, EngineInner> {
        // State is only mutated through total transition steps, so a
        // panic elsewhere cannot leave it half-updated.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a binding in the IDLE phase.
    pub fn register(&self, binding: ActionBinding) -> FacelinkResult<()> {
        let mut inner = self.lock();
        if self.is_released() {
            return Err(FacelinkError::Released);
        }
        binding
            .condition
            .validate()
            .map_err(|msg| FacelinkError::invalid_binding(format!("{}: {msg}", binding.action_id)))?;
        if inner.position(&binding.action_id).is_some() {
            tracing::warn!(action = %binding.action_id, "Rejected duplicate action registration");
            return Err(FacelinkError::duplicate_action(binding.action_id));
        }

        tracing::debug!(action = %binding.action_id, "Registered action");
        inner.slots.push(Slot {
            binding,
            state: TriggerState::new(),
        });
        Ok(())
    }

    /// Remove a binding and its state. Returns whether it was registered.
    pub fn unregister(&self, action_id: &str) -> bool {
        let mut inner = self.lock();
        match inner.position(action_id) {
            Some(index) => {
                inner.slots.remove(index);
                tracing::debug!(action = %action_id, "Unregistered action");
                true
            }
            None => false,
        }
    }

    /// Remove every binding and forget both cached snapshots.
    pub fn clear(&self) {
        let mut inner = self.lock();
        if self.is_released() {
            return;
        }
        inner.slots.clear();
        inner.latest_face = None;
        inner.latest_hand = None;
        tracing::debug!("Cleared all actions");
    }

    /// Stop all processing for good and close the event stream.
    ///
    /// Idempotent. Waits for any in-flight `process_*` call, so no state
    /// changes once this returns.
    pub fn release(&self) {
        let was_released = self.released.swap(true, Ordering::SeqCst);
        let mut inner = self.lock();
        if was_released {
            return;
        }
        inner.slots.clear();
        inner.latest_face = None;
        inner.latest_hand = None;
        inner.events_tx = None;
        tracing::info!("Action engine released");
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }

    /// Cache `snapshot` as the latest face data and advance every binding.
    pub fn process_face(&self, snapshot: FaceSnapshot) -> Vec<ActionEvent> {
        if self.is_released() {
            return Vec::new();
        }
        let mut inner = self.lock();
        if self.is_released() {
            return Vec::new();
        }
        let now = snapshot.timestamp_ms;
        tracing::trace!(timestamp_ms = now, tracking = snapshot.is_tracking, "Face arrival");
        inner.latest_face = Some(snapshot);
        inner.advance_all(now)
    }

    /// Cache `snapshot` as the latest hand data and advance every binding,
    /// including face-only ones.
    pub fn process_hand(&self, snapshot: HandSnapshot) -> Vec<ActionEvent> {
        if self.is_released() {
            return Vec::new();
        }
        let mut inner = self.lock();
        if self.is_released() {
            return Vec::new();
        }
        let now = snapshot.timestamp_ms;
        tracing::trace!(
            timestamp_ms = now,
            hands = snapshot.hands.len(),
            "Hand arrival"
        );
        inner.latest_hand = Some(snapshot);
        inner.advance_all(now)
    }

    /// Dispatch a frame of either modality.
    pub fn process_frame(&self, frame: TrackingFrame) -> Vec<ActionEvent> {
        match frame {
            TrackingFrame::Face(face) => self.process_face(face),
            TrackingFrame::Hand(hand) => self.process_hand(hand),
        }
    }

    /// Subscribe to the continuous event stream.
    ///
    /// Receivers see only events emitted after subscribing. After release
    /// the returned receiver is already closed.
    pub fn subscribe(&self) -> broadcast::Receiver<ActionEvent> {
        let inner = self.lock();
        match &inner.events_tx {
            Some(tx) => tx.subscribe(),
            None => broadcast::channel(1).1,
        }
    }

    /// Current phase of a binding.
    pub fn phase_of(&self, action_id: &str) -> Option<Phase> {
        let inner = self.lock();
        inner
            .position(action_id)
            .map(|index| inner.slots[index].state.phase())
    }

    /// Registered action ids in registration order.
    pub fn action_ids(&self) -> Vec<String> {
        self.lock()
            .slots
            .iter()
            .map(|slot| slot.binding.action_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().slots.is_empty()
    }
}

impl Default for ActionEngine {
    fn default() -> Self {
        Self::new()
    }
}
