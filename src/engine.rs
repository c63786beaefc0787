//! Engine facade: top-level API for the mindmend dialogue core.
//!
//! The `Engine` owns the intent catalogue, the session store, and the
//! response cascade, and exposes the one-utterance-in, one-decision-out
//! entry point. Crisis detection runs first for every utterance,
//! unconditionally, and short-circuits everything else.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::crisis::{detect_crisis, CrisisReply};
use crate::enrich::{Enricher, Extraction, NullEnricher};
use crate::error::{EngineError, MendResult};
use crate::intent::{IntentCatalogue, IntentSet};
use crate::respond::{Responder, ResponseDirective, TurnContext};
use crate::sentiment::SentimentScore;
use crate::session::{Session, SessionStore};

/// Configuration for the mindmend engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Turn count at which emotional tiers stop withholding resources
    /// (default: 3). Product policy, not a law of the domain.
    pub turn_gate: u32,
    /// Per-session turn-history cap (default: 100). Turn counting is not
    /// affected by the cap.
    pub max_history: usize,
    /// Seed for reply-variant selection. `None` draws from entropy; set it
    /// to pin deterministic wording in tests.
    pub rng_seed: Option<u64>,
    /// Idle horizon for `evict_idle_sessions`, in seconds. `None` disables
    /// eviction (sessions then live until explicit reset).
    pub session_idle_expiry_secs: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            turn_gate: 3,
            max_history: 100,
            rng_seed: None,
            session_idle_expiry_secs: None,
        }
    }
}

impl EngineConfig {
    /// Load a config from a TOML file; missing fields take defaults.
    pub fn from_toml_file(path: &Path) -> MendResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| EngineError::ConfigFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&text).map_err(|e| EngineError::ConfigFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(config)
    }
}

/// A non-crisis reply: the directive plus enrichment decoration.
#[derive(Debug, Clone, Serialize)]
pub struct DialogueReply {
    /// The selected directive (text, optional resource trigger).
    pub directive: ResponseDirective,
    /// Intents detected for this utterance, for the caller's telemetry.
    pub intents: IntentSet,
    /// Entities and noun phrases from the enrichment collaborator; empty
    /// when the collaborator is unavailable.
    pub extraction: Extraction,
}

/// The engine's decision for one utterance.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineReply {
    /// Crisis language detected: terminal escalation, nothing else ran.
    Crisis(CrisisReply),
    /// Normal dialogue flow.
    Dialogue(DialogueReply),
}

impl EngineReply {
    /// Whether this is the crisis escalation path.
    pub fn is_crisis(&self) -> bool {
        matches!(self, Self::Crisis(_))
    }

    /// The user-facing reply text.
    pub fn text(&self) -> &str {
        match self {
            Self::Crisis(reply) => &reply.message,
            Self::Dialogue(reply) => &reply.directive.text,
        }
    }
}

/// The mindmend dialogue decision engine.
///
/// One synchronous decision per utterance, no internal I/O. Sessions for
/// different users never contend; turns for the same user serialize on the
/// session lock so turn-gated decisions stay linearizable.
pub struct Engine {
    config: EngineConfig,
    intents: IntentCatalogue,
    responder: Responder,
    sessions: SessionStore,
    enricher: Box<dyn Enricher>,
    rng: Mutex<StdRng>,
}

impl Engine {
    /// Create a new engine with the given configuration.
    pub fn new(config: EngineConfig) -> MendResult<Self> {
        if config.turn_gate == 0 {
            return Err(EngineError::InvalidConfig {
                message: "turn_gate must be >= 1".into(),
            }
            .into());
        }
        if config.max_history == 0 {
            return Err(EngineError::InvalidConfig {
                message: "max_history must be >= 1".into(),
            }
            .into());
        }

        let intents = IntentCatalogue::new()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        tracing::info!(
            turn_gate = config.turn_gate,
            max_history = config.max_history,
            seeded = config.rng_seed.is_some(),
            "initializing mindmend engine"
        );

        Ok(Self {
            sessions: SessionStore::new(config.max_history),
            config,
            intents,
            responder: Responder::new(),
            enricher: Box::new(NullEnricher),
            rng: Mutex::new(rng),
        })
    }

    /// Replace the enrichment collaborator.
    pub fn with_enricher(mut self, enricher: Box<dyn Enricher>) -> Self {
        self.enricher = enricher;
        self
    }

    /// Process one utterance for one user and decide the reply.
    ///
    /// The caller supplies the sentiment score (substituting
    /// `SentimentScore::neutral()` if its scorer failed) and must not send
    /// empty input; a whitespace-only utterance is the one input error
    /// this method reports.
    pub fn process(
        &self,
        user_id: &str,
        utterance: &str,
        sentiment: SentimentScore,
    ) -> MendResult<EngineReply> {
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return Err(EngineError::EmptyUtterance {
                user_id: user_id.to_string(),
            }
            .into());
        }

        // Crisis scan runs for every utterance before anything else, and
        // never consults session state.
        if detect_crisis(utterance) {
            let reply = CrisisReply::standard();
            tracing::warn!(
                user_id,
                message = %truncate(utterance, 100),
                "crisis language detected, escalating"
            );
            log_turn(user_id, utterance, &sentiment, &reply.message, "crisis");
            return Ok(EngineReply::Crisis(reply));
        }

        let intents = self.intents.detect(utterance);
        let lower = utterance.to_lowercase();

        let handle = self.sessions.get_or_create(user_id);
        let selection = {
            let mut session = handle.lock().unwrap_or_else(PoisonError::into_inner);
            session.record_turn(utterance, sentiment);

            let ctx = TurnContext {
                intents: &intents,
                sentiment: &sentiment,
                turn_count: session.turn_count,
                turn_gate: self.config.turn_gate,
                utterance_lower: &lower,
            };
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            let selection = self.responder.select(&ctx, &mut *rng);

            if let Some(emotion) = selection.set_emotion {
                session.emotion_detected = Some(emotion);
            }
            if let Some(problem) = selection.set_problem {
                session.problem_identified = Some(problem);
            }
            selection
        };

        // Enrichment decorates the reply; it never affects routing.
        let extraction = if self.enricher.available() {
            self.enricher.extract(utterance)
        } else {
            Extraction::empty()
        };

        log_turn(
            user_id,
            utterance,
            &sentiment,
            &selection.directive.text,
            selection.rule,
        );

        Ok(EngineReply::Dialogue(DialogueReply {
            directive: selection.directive,
            intents,
            extraction,
        }))
    }

    /// Remove a user's session entirely. Returns whether one existed.
    pub fn reset(&self, user_id: &str) -> bool {
        let removed = self.sessions.reset(user_id);
        if removed {
            tracing::info!(user_id, "session reset");
        }
        removed
    }

    /// Sweep sessions idle past the configured expiry. No-op when no
    /// expiry is configured. Returns how many sessions were removed.
    pub fn evict_idle_sessions(&self) -> usize {
        match self.config.session_idle_expiry_secs {
            Some(secs) => {
                let removed = self.sessions.evict_idle(secs.saturating_mul(1000));
                if removed > 0 {
                    tracing::info!(removed, "evicted idle sessions");
                }
                removed
            }
            None => 0,
        }
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Snapshot a user's session state, if one exists. Never creates a
    /// session, so it cannot race a concurrent reset into resurrecting an
    /// empty one.
    pub fn session_snapshot(&self, user_id: &str) -> Option<Session> {
        let handle = self.sessions.get(user_id)?;
        let session = handle.lock().unwrap_or_else(PoisonError::into_inner);
        Some(session.clone())
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Emit the per-turn log record. Logging cannot abort a turn.
fn log_turn(user_id: &str, message: &str, sentiment: &SentimentScore, reply: &str, rule: &str) {
    tracing::info!(
        user_id,
        message = %truncate(message, 100),
        sentiment = %sentiment.tone,
        reply = %truncate(reply, 200),
        rule,
        "turn"
    );
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
