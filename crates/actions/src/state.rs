//! Per-binding temporal state machine.
//!
//! ```text
//! IDLE ──met──▶ PENDING ──held ≥ hold_time──▶ ACTIVE ──lost ≥ debounce──▶ COOLDOWN
//!   ▲              │                           │  ▲                           │
//!   └──── lost ────┘                     lost  └──┘ met                        │
//!   ▲                                                                         │
//!   └──────────────────────── elapsed ≥ cooldown ─────────────────────────────┘
//! ```
//!
//! Hold time guards activation and has no grace period: losing the
//! condition while pending discards all progress. Debounce guards
//! deactivation: a loss while active opens a grace window and recovering
//! inside it is silent. Cooldown ignores the condition entirely. A zero
//! timing collapses its phase into a same-step pass-through.

use facelink_tracking_model::TimestampMs;
use serde::{Deserialize, Serialize};

use crate::binding::ActionBinding;
use crate::event::ActionEvent;

/// Phase of a binding's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    /// Condition observed, accumulating hold time.
    Pending,
    /// `Started` emitted, watching for loss.
    Active,
    /// Released, waiting to re-arm.
    Cooldown,
}

/// Mutable temporal record for one binding.
///
/// `condition_lost_at` is only ever set while `phase` is `Active`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerState {
    phase: Phase,
    phase_entered_at: TimestampMs,
    condition_lost_at: Option<TimestampMs>,
}

impl TriggerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_entered_at(&self) -> TimestampMs {
        self.phase_entered_at
    }

    pub fn condition_lost_at(&self) -> Option<TimestampMs> {
        self.condition_lost_at
    }

    /// Advance by one arrival at time `now` given whether the binding's
    /// condition is currently met. Returns the event this step produced.
    pub fn step(
        &mut self,
        binding: &ActionBinding,
        met: bool,
        now: TimestampMs,
    ) -> Option<ActionEvent> {
        match self.phase {
            Phase::Cooldown => {
                if !elapsed(now, self.phase_entered_at, binding.cooldown_ms) {
                    return None;
                }
                self.enter(Phase::Idle, now);
                self.step_idle(binding, met, now)
            }
            Phase::Idle => self.step_idle(binding, met, now),
            Phase::Pending => self.step_pending(binding, met, now),
            Phase::Active => self.step_active(binding, met, now),
        }
    }

    fn step_idle(
        &mut self,
        binding: &ActionBinding,
        met: bool,
        now: TimestampMs,
    ) -> Option<ActionEvent> {
        if !met {
            return None;
        }
        self.enter(Phase::Pending, now);
        // Zero elapsed time only satisfies a zero hold time.
        self.step_pending(binding, true, now)
    }

    fn step_pending(
        &mut self,
        binding: &ActionBinding,
        met: bool,
        now: TimestampMs,
    ) -> Option<ActionEvent> {
        if !met {
            self.enter(Phase::Idle, now);
            return None;
        }
        if !elapsed(now, self.phase_entered_at, binding.hold_time_ms) {
            return None;
        }
        self.enter(Phase::Active, now);
        Some(ActionEvent::Started {
            action_id: binding.action_id.clone(),
            timestamp_ms: now,
        })
    }

    fn step_active(
        &mut self,
        binding: &ActionBinding,
        met: bool,
        now: TimestampMs,
    ) -> Option<ActionEvent> {
        if met {
            self.condition_lost_at = None;
            return binding.emit_held_events.then(|| ActionEvent::Held {
                action_id: binding.action_id.clone(),
                timestamp_ms: now,
                duration_ms: duration(now, self.phase_entered_at),
            });
        }

        let lost_at = *self.condition_lost_at.get_or_insert(now);
        if !elapsed(now, lost_at, binding.debounce_ms) {
            return None;
        }

        let total_duration_ms = duration(now, self.phase_entered_at);
        self.enter(Phase::Cooldown, now);
        Some(ActionEvent::Released {
            action_id: binding.action_id.clone(),
            timestamp_ms: now,
            total_duration_ms,
        })
    }

    fn enter(&mut self, phase: Phase, now: TimestampMs) {
        self.phase = phase;
        self.phase_entered_at = now;
        self.condition_lost_at = None;
    }
}

/// Milliseconds from `since` to `now`. Never negative: an arrival stamped
/// before `since` counts as no time passing.
fn duration(now: TimestampMs, since: TimestampMs) -> i64 {
    now.saturating_sub(since).max(0)
}

/// Whether at least `span_ms` has passed between `since` and `now`.
fn elapsed(now: TimestampMs, since: TimestampMs, span_ms: u64) -> bool {
    duration(now, since) >= i64::try_from(span_ms).unwrap_or(i64::MAX)
}
