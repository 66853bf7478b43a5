//! Trait definitions for external interactions
//!
//! These traits define the boundary between the extraction engine and the
//! transport infrastructure. Implementations live in other crates.

/// Trait for LLM completion calls
///
/// Implemented by the infrastructure layer (clauselens-llm). Providers take
/// their credentials and endpoint as explicit configuration; nothing behind
/// this trait reads ambient process state.
pub trait LlmProvider {
    /// Error type for transport operations
    type Error;

    /// Generate a completion for a system prompt and user prompt pair
    fn complete(&self, system: &str, prompt: &str) -> Result<String, Self::Error>;

    /// Whether an error represents upstream rate limiting
    ///
    /// Rate-limited requests are terminal but worth retrying manually; the
    /// caller surfaces them to the user distinctly from generic failures.
    fn is_rate_limited(_error: &Self::Error) -> bool {
        false
    }
}
