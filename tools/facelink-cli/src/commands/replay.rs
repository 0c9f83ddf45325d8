//! Replay a capture through a set of bindings and print the events.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use facelink_actions::{builtin, ActionBinding, ActionEngine, ActionEvent, Condition};
use facelink_common::config::EngineConfig;
use facelink_common::error::{FacelinkError, FacelinkResult};
use serde::Deserialize;
use tokio::sync::broadcast::{self, error::RecvError};

/// One entry of a bindings file.
///
/// Exactly one of `condition` (an inline condition tree) or `builtin`
/// (a catalog name) must be given. `threshold` only applies to `builtin`.
#[derive(Debug, Clone, Deserialize)]
pub struct BindingSpec {
    pub action_id: String,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub builtin: Option<String>,
    #[serde(default)]
    pub threshold: Option<f32>,
    #[serde(default)]
    pub hold_time_ms: u64,
    #[serde(default)]
    pub cooldown_ms: u64,
    #[serde(default)]
    pub debounce_ms: u64,
    #[serde(default)]
    pub emit_held_events: bool,
}

impl BindingSpec {
    pub fn into_binding(self) -> FacelinkResult<ActionBinding> {
        let condition = match (self.condition, self.builtin) {
            (Some(condition), None) => condition,
            (None, Some(name)) => builtin::by_name(&name, self.threshold).ok_or_else(|| {
                FacelinkError::invalid_binding(format!(
                    "{}: unknown built-in '{name}'",
                    self.action_id
                ))
            })?,
            (Some(_), Some(_)) => {
                return Err(FacelinkError::invalid_binding(format!(
                    "{}: give either 'condition' or 'builtin', not both",
                    self.action_id
                )))
            }
            (None, None) => {
                return Err(FacelinkError::invalid_binding(format!(
                    "{}: missing 'condition' or 'builtin'",
                    self.action_id
                )))
            }
        };

        Ok(ActionBinding::new(self.action_id, condition)
            .hold_time_ms(self.hold_time_ms)
            .cooldown_ms(self.cooldown_ms)
            .debounce_ms(self.debounce_ms)
            .emit_held_events(self.emit_held_events))
    }
}

/// Parse a JSON array of binding specs.
pub fn parse_bindings(json: &str) -> FacelinkResult<Vec<ActionBinding>> {
    let specs: Vec<BindingSpec> = serde_json::from_str(json)?;
    specs.into_iter().map(BindingSpec::into_binding).collect()
}

fn load_bindings(path: &Path) -> FacelinkResult<Vec<ActionBinding>> {
    let content = std::fs::read_to_string(path)?;
    parse_bindings(&content)
}

/// Per-kind event counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventTally {
    pub started: u64,
    pub held: u64,
    pub released: u64,
}

impl EventTally {
    pub fn add(&mut self, event: &ActionEvent) {
        match event {
            ActionEvent::Started { .. } => self.started += 1,
            ActionEvent::Held { .. } => self.held += 1,
            ActionEvent::Released { .. } => self.released += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.started + self.held + self.released
    }
}

/// Count streamed events until the stream closes. Also returns how many
/// events were skipped because the subscriber lagged.
async fn tally_stream(mut rx: broadcast::Receiver<ActionEvent>) -> (EventTally, u64) {
    let mut tally = EventTally::default();
    let mut skipped = 0u64;
    loop {
        match rx.recv().await {
            Ok(event) => tally.add(&event),
            Err(RecvError::Lagged(n)) => {
                tracing::warn!(skipped = n, "Event subscriber lagged");
                skipped += n;
            }
            Err(RecvError::Closed) => break,
        }
    }
    (tally, skipped)
}

pub async fn run(
    path: PathBuf,
    bindings_path: PathBuf,
    json: bool,
    config: &EngineConfig,
) -> anyhow::Result<()> {
    let frames = super::load_frames(&path)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {e}", path.display()))?;
    let bindings = load_bindings(&bindings_path).map_err(|e| {
        anyhow::anyhow!("Failed to load bindings {}: {e}", bindings_path.display())
    })?;

    let engine = Arc::new(ActionEngine::with_config(config));
    for binding in bindings {
        engine
            .register(binding)
            .map_err(|e| anyhow::anyhow!("Failed to register binding: {e}"))?;
    }
    tracing::info!(
        frames = frames.len(),
        actions = engine.len(),
        "Replaying capture"
    );

    let subscriber = tokio::spawn(tally_stream(engine.subscribe()));

    let mut returned = EventTally::default();
    for frame in frames {
        for event in engine.process_frame(frame) {
            returned.add(&event);
            if json {
                println!("{}", serde_json::to_string(&event)?);
            } else {
                println!("{event}");
            }
        }
        // Let the subscriber drain between frames.
        tokio::task::yield_now().await;
    }

    engine.release();
    let (streamed, skipped) = subscriber.await?;

    if streamed == returned {
        tracing::debug!("Streamed events match returned events");
    } else {
        tracing::warn!(
            ?streamed,
            ?returned,
            skipped,
            "Streamed events differ from returned events"
        );
    }

    if !json {
        println!();
        println!(
            "{} event(s): {} started, {} held, {} released",
            returned.total(),
            returned.started,
            returned.held,
            returned.released
        );
    }

    Ok(())
}
