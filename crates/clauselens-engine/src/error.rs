//! Error types for the analysis engine
//!
//! Only the transport boundary errors: the pure extraction layer is total
//! over its input and never raises.

use thiserror::Error;

/// Errors that can occur while driving an analysis
#[derive(Error, Debug)]
pub enum EngineError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Upstream rate limit; terminal for this request, retryable by the user
    #[error("Rate limit exceeded; wait a moment and try again")]
    RateLimited,

    /// Request timed out
    #[error("Analysis timeout")]
    Timeout,

    /// Input exceeds the configured maximum
    #[error("Contract text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
