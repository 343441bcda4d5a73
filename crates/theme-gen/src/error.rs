//! Generation error taxonomy
//!
//! Configuration problems are fatal and surfaced before any network call.
//! Provider and reply errors are surfaced once with diagnostics attached;
//! the caller decides whether to retry with a fresh request. Field-level
//! problems inside an otherwise parseable reply are not errors at all —
//! normalization defaults them silently.

use thiserror::Error;

/// How much raw reply text an error carries for diagnostics
pub const MAX_RAW_DIAGNOSTIC: usize = 500;

/// Errors from the generation pipeline
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Missing or invalid provider credential; fatal, never retried
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network or model failure reported by the provider
    #[error("Provider error ({status}): {message}")]
    Provider {
        /// HTTP status (0 for transport failures)
        status: u16,
        /// Provider-supplied message
        message: String,
    },

    /// No JSON object could be located in the reply
    #[error("Malformed reply, no JSON object found: {raw}")]
    MalformedReply {
        /// Truncated raw reply text
        raw: String,
    },

    /// Every repair strategy failed on the located JSON
    #[error("Unrecoverable reply: {raw}")]
    UnrecoverableReply {
        /// Truncated raw reply text
        raw: String,
    },
}

impl GenerationError {
    /// Build a `MalformedReply` carrying truncated raw text
    pub fn malformed(raw: &str) -> Self {
        GenerationError::MalformedReply {
            raw: truncate_raw(raw),
        }
    }

    /// Build an `UnrecoverableReply` carrying truncated raw text
    pub fn unrecoverable(raw: &str) -> Self {
        GenerationError::UnrecoverableReply {
            raw: truncate_raw(raw),
        }
    }
}

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Clip raw reply text to a diagnosable size
///
/// Cuts on a char boundary so arbitrary model output never panics the
/// error path itself.
pub fn truncate_raw(raw: &str) -> String {
    if raw.len() <= MAX_RAW_DIAGNOSTIC {
        return raw.to_string();
    }

    let mut end = MAX_RAW_DIAGNOSTIC;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &raw[..end])
}
