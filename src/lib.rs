//! # mindmend
//!
//! A rule-driven conversational triage core for mental-health support
//! chat. Deterministic routing, randomized phrasing.
//!
//! ## Architecture
//!
//! - **Crisis detection** (`crisis`): phrase scan with absolute precedence
//! - **Intent detection** (`intent`): overlapping regex rules, all evaluated
//! - **Sentiment** (`sentiment`): pluggable scorer trait plus a keyword fallback
//! - **Sessions** (`session`): per-user state with lock-sharded concurrency
//! - **Response cascade** (`respond`): priority-ordered rule table, first match wins
//! - **Engine** (`engine`): the facade tying it all together
//!
//! ## Library usage
//!
//! ```no_run
//! use mindmend::engine::{Engine, EngineConfig};
//! use mindmend::sentiment::{KeywordScorer, SentimentScorer};
//!
//! let engine = Engine::new(EngineConfig::default()).unwrap();
//! let scorer = KeywordScorer::new();
//! let utterance = "im feeling sad because of my exams";
//! let reply = engine.process("user-1", utterance, scorer.score(utterance)).unwrap();
//! println!("{}", reply.text());
//! ```

pub mod crisis;
pub mod engine;
pub mod enrich;
pub mod error;
pub mod intent;
pub mod resource;
pub mod respond;
pub mod sentiment;
pub mod session;
