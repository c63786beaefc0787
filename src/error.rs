//! Rich diagnostic error types for the mindmend engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text. The dialogue core itself never fails on
//! well-formed input — errors here cover startup (bad patterns, bad config) and
//! caller-side input validation.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the mindmend engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum MendError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Intent(#[from] IntentError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Engine(#[from] EngineError),
}

// ---------------------------------------------------------------------------
// Intent errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum IntentError {
    #[error("invalid pattern for intent `{intent}`: {message}")]
    #[diagnostic(
        code(mindmend::intent::invalid_pattern),
        help(
            "A regex in the intent catalogue failed to compile. The catalogue \
             is static data, so this indicates a typo in the pattern table \
             rather than bad user input."
        )
    )]
    InvalidPattern { intent: &'static str, message: String },
}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum EngineError {
    #[error("empty utterance for user {user_id}")]
    #[diagnostic(
        code(mindmend::engine::empty_utterance),
        help(
            "The dialogue core assumes a non-empty trimmed utterance. Reject \
             empty or whitespace-only messages before calling `Engine::process`."
        )
    )]
    EmptyUtterance { user_id: String },

    #[error("invalid configuration: {message}")]
    #[diagnostic(
        code(mindmend::engine::invalid_config),
        help("Check the EngineConfig fields. {message}")
    )]
    InvalidConfig { message: String },

    #[error("failed to read config file {path}: {message}")]
    #[diagnostic(
        code(mindmend::engine::config_file),
        help("Ensure the file exists, is readable, and contains valid TOML.")
    )]
    ConfigFile { path: String, message: String },
}

/// Convenience alias for functions returning mindmend results.
pub type MendResult<T> = std::result::Result<T, MendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_error_converts_to_mend_error() {
        let err = IntentError::InvalidPattern {
            intent: "greeting",
            message: "unclosed group".into(),
        };
        let mend: MendError = err.into();
        assert!(matches!(mend, MendError::Intent(IntentError::InvalidPattern { .. })));
    }

    #[test]
    fn engine_error_converts_to_mend_error() {
        let err = EngineError::EmptyUtterance {
            user_id: "u-1".into(),
        };
        let mend: MendError = err.into();
        assert!(matches!(mend, MendError::Engine(EngineError::EmptyUtterance { .. })));
    }

    #[test]
    fn error_display_messages_are_descriptive() {
        let err = EngineError::InvalidConfig {
            message: "turn_gate must be >= 1".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("turn_gate"));
    }
}
