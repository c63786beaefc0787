//! Optional enrichment collaborator: named entities and noun phrases.
//!
//! Enrichment only decorates replies for downstream display — it never
//! drives branching. The collaborator is capability-checked: when the
//! backing model is missing or extraction fails, the result degrades to an
//! empty extraction instead of an error.

use serde::{Deserialize, Serialize};

/// A named entity found in an utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The matched text span.
    pub text: String,
    /// Entity class (e.g. PERSON, ORG, DATE).
    pub label: String,
}

/// Entities and noun phrases extracted from one utterance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub entities: Vec<Entity>,
    pub noun_phrases: Vec<String>,
}

impl Extraction {
    /// The degraded result: no entities, no phrases.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Capability-checked enrichment collaborator.
pub trait Enricher: Send + Sync {
    /// Whether the collaborator can actually extract anything.
    fn available(&self) -> bool;

    /// Extract entities and noun phrases. Implementations must return
    /// `Extraction::empty()` on any internal failure rather than panic or
    /// error — unavailability is a degraded mode, not a fault.
    fn extract(&self, text: &str) -> Extraction;
}

/// The always-unavailable enricher. Used when no NLP backend is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEnricher;

impl Enricher for NullEnricher {
    fn available(&self) -> bool {
        false
    }

    fn extract(&self, _text: &str) -> Extraction {
        Extraction::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_enricher_is_unavailable() {
        let enricher = NullEnricher;
        assert!(!enricher.available());
        assert_eq!(enricher.extract("my boss in london"), Extraction::empty());
    }

    #[test]
    fn extraction_default_is_empty() {
        let ex = Extraction::default();
        assert!(ex.entities.is_empty());
        assert!(ex.noun_phrases.is_empty());
    }
}
