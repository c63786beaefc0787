//! Crisis language detection and the escalation payload.
//!
//! A fixed-phrase substring scan with no negation handling and no context
//! window: any hit escalates. The scan is intentionally maximally sensitive
//! (false positives are acceptable, false negatives are not) and runs for
//! every utterance before any other dialogue logic, regardless of session
//! state.

use serde::{Deserialize, Serialize};

/// High-risk phrases that trigger mandatory escalation.
pub const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "want to die",
    "wanna die",
    "hurt myself",
    "harm myself",
    "end it all",
    "better off dead",
    "not worth living",
];

/// Scan an utterance for crisis phrases.
///
/// Case-insensitive substring match; stateless and session-independent.
pub fn detect_crisis(utterance: &str) -> bool {
    let lower = utterance.to_lowercase();
    CRISIS_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// One emergency contact channel surfaced with a crisis reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// Service name.
    pub service: String,
    /// Number to call or instruction to follow.
    pub contact: String,
    /// Availability window.
    pub availability: String,
}

/// The terminal crisis reply: fixed message plus emergency channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisReply {
    /// The escalation message shown to the user.
    pub message: String,
    /// Emergency contact channels, in display order.
    pub emergency_contacts: Vec<EmergencyContact>,
}

impl CrisisReply {
    /// The standard escalation payload.
    pub fn standard() -> Self {
        Self {
            message: "I'm very concerned about what you're sharing. Your life matters. \
                      Please reach out to a professional immediately. 🆘"
                .to_string(),
            emergency_contacts: vec![
                EmergencyContact {
                    service: "National Suicide Prevention Lifeline (US)".to_string(),
                    contact: "988".to_string(),
                    availability: "24/7".to_string(),
                },
                EmergencyContact {
                    service: "Crisis Text Line".to_string(),
                    contact: "Text HOME to 741741".to_string(),
                    availability: "24/7".to_string(),
                },
                EmergencyContact {
                    service: "Emergency Services".to_string(),
                    contact: "911".to_string(),
                    availability: "Call for immediate help".to_string(),
                },
            ],
        }
    }
}
