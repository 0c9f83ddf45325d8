//! FaceLink Actions
//!
//! Turns continuous face-expression and hand-gesture snapshots into
//! discrete, debounced action events:
//! - **Conditions:** Pure predicate trees over the latest snapshots
//! - **Bindings:** A condition plus hold, cooldown, and debounce timings
//! - **Engine:** Registry and scheduler advancing each binding's phase
//!   machine on every arrival, returning events and broadcasting them
//! - **Built-ins:** Ready-made conditions for common expressions, gestures,
//!   and emotions
//!
//! Everything except the pumps and the player is synchronous in-memory
//! computation.

pub mod binding;
pub mod builtin;
pub mod condition;
pub mod emotion;
pub mod engine;
pub mod evaluator;
pub mod event;
pub mod pump;
pub mod record;
pub mod state;

pub use binding::ActionBinding;
pub use condition::{Condition, ThresholdDirection};
pub use engine::ActionEngine;
pub use evaluator::evaluate;
pub use event::ActionEvent;
pub use state::{Phase, TriggerState};
