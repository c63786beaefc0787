//! Per-user conversation state and the process-wide session store.
//!
//! A `Session` is created lazily on first contact, mutated every turn, and
//! destroyed only by explicit reset — there is no implicit expiry. The store
//! hands out one lock per user identifier so concurrent turns for the same
//! user serialize (turn counting and history appends stay linearizable)
//! while different users never contend.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentScore;

/// A specific life-problem category identified during a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    Friends,
    Relationship,
    Family,
    Bullying,
    Exam,
    Work,
    Money,
    Health,
    SelfEsteem,
    Lonely,
}

impl Problem {
    /// Fixed tie-break order: when several problem intents co-occur, the
    /// first category in this list wins.
    pub const TIE_BREAK: &'static [Problem] = &[
        Problem::Friends,
        Problem::Relationship,
        Problem::Family,
        Problem::Bullying,
        Problem::Exam,
        Problem::Work,
        Problem::Money,
        Problem::Health,
        Problem::SelfEsteem,
        Problem::Lonely,
    ];

    /// Stable snake_case label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Friends => "friends",
            Self::Relationship => "relationship",
            Self::Family => "family",
            Self::Bullying => "bullying",
            Self::Exam => "exam",
            Self::Work => "work",
            Self::Money => "money",
            Self::Health => "health",
            Self::SelfEsteem => "self_esteem",
            Self::Lonely => "lonely",
        }
    }
}

/// The dominant emotion the cascade last classified for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionState {
    Crying,
    Stress,
    Anxiety,
    AnxietyStress,
    LowMood,
    Negative,
}

impl EmotionState {
    /// Stable snake_case label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Crying => "crying",
            Self::Stress => "stress",
            Self::Anxiety => "anxiety",
            Self::AnxietyStress => "anxiety_stress",
            Self::LowMood => "low_mood",
            Self::Negative => "negative",
        }
    }
}

/// One recorded user turn: utterance, its sentiment, and when it arrived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The raw user utterance.
    pub utterance: String,
    /// The collaborator-provided sentiment for this utterance.
    pub sentiment: SentimentScore,
    /// Milliseconds since epoch.
    pub timestamp_ms: u64,
}

/// Per-user conversation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Recent turns in arrival order, capped at `max_history`.
    history: VecDeque<TurnRecord>,
    /// Total processed utterances. Independent of the history cap; never
    /// resets except via store-level reset.
    pub turn_count: u32,
    /// Last-classified dominant emotion. Last write wins.
    pub emotion_detected: Option<EmotionState>,
    /// Last-identified problem category. Last write wins, never cleared
    /// within a session.
    pub problem_identified: Option<Problem>,
    /// Milliseconds since epoch of the most recent turn.
    pub last_interaction_ms: u64,
    max_history: usize,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

impl Session {
    /// Fresh session: empty history, turn_count 0, no emotion or problem.
    pub fn new(max_history: usize) -> Self {
        Self {
            history: VecDeque::new(),
            turn_count: 0,
            emotion_detected: None,
            problem_identified: None,
            last_interaction_ms: now_ms(),
            max_history,
        }
    }

    /// Append a turn: records the utterance, bumps the turn counter, and
    /// refreshes the interaction timestamp. Oldest history entries are
    /// evicted past the cap; `turn_count` keeps counting regardless.
    pub fn record_turn(&mut self, utterance: impl Into<String>, sentiment: SentimentScore) {
        let timestamp_ms = now_ms();
        self.history.push_back(TurnRecord {
            utterance: utterance.into(),
            sentiment,
            timestamp_ms,
        });
        while self.history.len() > self.max_history {
            self.history.pop_front();
        }
        self.turn_count += 1;
        self.last_interaction_ms = timestamp_ms;
    }

    /// Recorded turns, oldest first.
    pub fn history(&self) -> &VecDeque<TurnRecord> {
        &self.history
    }
}

/// Process-wide mapping from user identifier to session state.
///
/// DashMap shards the map across users; the per-entry `Mutex` serializes
/// turns for a single user. Entries grow until explicitly reset or swept
/// by `evict_idle`.
pub struct SessionStore {
    sessions: DashMap<String, Arc<Mutex<Session>>>,
    max_history: usize,
}

impl SessionStore {
    /// Create an empty store; sessions cap their history at `max_history`.
    pub fn new(max_history: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            max_history,
        }
    }

    /// Fetch the session for a user, creating a fresh one on first contact.
    pub fn get_or_create(&self, user_id: &str) -> Arc<Mutex<Session>> {
        self.sessions
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Session::new(self.max_history))))
            .value()
            .clone()
    }

    /// Fetch the session for a user without creating one.
    pub fn get(&self, user_id: &str) -> Option<Arc<Mutex<Session>>> {
        self.sessions.get(user_id).map(|entry| entry.value().clone())
    }

    /// Whether a session exists for the user.
    pub fn contains(&self, user_id: &str) -> bool {
        self.sessions.contains_key(user_id)
    }

    /// Remove a user's session entirely. The next utterance starts over at
    /// turn 1 with no remembered emotion or problem.
    pub fn reset(&self, user_id: &str) -> bool {
        self.sessions.remove(user_id).is_some()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sweep sessions idle for longer than `max_idle_ms`. Returns how many
    /// were removed. The caller owns the sweep cadence; the store never
    /// expires anything on its own.
    pub fn evict_idle(&self, max_idle_ms: u64) -> usize {
        let cutoff = now_ms().saturating_sub(max_idle_ms);
        let stale: Vec<String> = self
            .sessions
            .iter()
            .filter(|entry| {
                entry
                    .value()
                    .lock()
                    .map(|s| s.last_interaction_ms < cutoff)
                    .unwrap_or(false)
            })
            .map(|entry| entry.key().clone())
            .collect();
        let mut removed = 0;
        for user_id in stale {
            if self.sessions.remove(&user_id).is_some() {
                removed += 1;
            }
        }
        removed
    }
}
