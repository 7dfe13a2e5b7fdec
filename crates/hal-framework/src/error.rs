//! # Framework Errors
//!
//! This module defines the error type shared by the writer, the sinks and the
//! render service. Nothing in the framework recovers from these locally; they
//! travel up with `?` to whoever asked for the document.

use crate::engine::RenderKind;

/// Errors that can occur while rendering (or refusing to parse) a document.
#[derive(Debug, thiserror::Error)]
pub enum HalError {
    /// The requested direction is not implemented for this kind of value.
    #[error("Reading {0:?} from JSON is not supported")]
    Unsupported(RenderKind),

    /// A converter was handed a kind of value it does not write.
    #[error("Converter cannot write {0:?}")]
    Unhandled(RenderKind),

    /// The sink refused a write that would produce an invalid document.
    #[error("Token {token} in state {state} would result in an invalid JSON document")]
    InvalidToken {
        token: &'static str,
        state: &'static str,
    },

    /// The document was finished while containers were still open.
    #[error("Document incomplete: {open} container(s) still open")]
    Incomplete { open: usize },

    /// Resources were nested deeper than the configured guard allows.
    #[error("Resource nesting exceeds maximum depth of {max}")]
    DepthExceeded { max: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render actor closed")]
    ActorClosed,
    #[error("Render actor dropped response channel")]
    ActorDropped,
}
