//! Core Analyzer implementation
//!
//! Drives one analysis: validates input, builds the prompt, calls the LLM
//! with a timeout, then hands the raw markdown to the pure extraction
//! pipeline. Transport failures surface here as typed errors; the
//! extraction itself never fails.

use crate::config::AnalyzerConfig;
use crate::error::EngineError;
use crate::parse::parse_analysis;
use crate::prompt::{self, ANALYSIS_SYSTEM_PROMPT, REWRITE_SYSTEM_PROMPT};
use crate::types::{AnalysisMetadata, AnalysisOutcome, AnalysisRequest};
use clauselens_domain::traits::LlmProvider;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::time::timeout;
use tracing::{debug, info};

/// The Analyzer converts a contract into a structured risk report
pub struct Analyzer<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    config: AnalyzerConfig,
    model_name: String,
}

impl<L> Analyzer<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display + Send,
{
    /// Create a new Analyzer
    pub fn new(provider: L, config: AnalyzerConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
            model_name: "llm".to_string(),
        }
    }

    /// Create a new Analyzer with a specific model name (metadata only)
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Analyze one contract
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisOutcome, EngineError> {
        if request.contract_text.len() > self.config.max_text_length {
            return Err(EngineError::TextTooLong(
                request.contract_text.len(),
                self.config.max_text_length,
            ));
        }

        info!(
            contract_type = %request.contract_type,
            jurisdiction = %request.jurisdiction,
            text_length = request.contract_text.len(),
            "Starting contract analysis"
        );

        let start_time = SystemTime::now();
        let user_prompt = prompt::analysis_prompt(&request);
        debug!("Prompt length: {} chars", user_prompt.len());

        let raw = timeout(
            self.config.request_timeout(),
            self.call_llm(ANALYSIS_SYSTEM_PROMPT, &user_prompt),
        )
        .await
        .map_err(|_| EngineError::Timeout)??;

        debug!("Model response length: {} chars", raw.len());

        let result = parse_analysis(&raw);

        let processing_time_ms = start_time
            .elapsed()
            .unwrap_or_default()
            .as_millis() as u64;

        info!(
            clauses = result.clauses.len(),
            risk_count = result.risk_count,
            processing_time_ms,
            "Analysis complete"
        );

        Ok(AnalysisOutcome {
            metadata: AnalysisMetadata {
                model_name: self.model_name.clone(),
                timestamp: SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_secs(),
                processing_time_ms,
                response_chars: raw.len(),
            },
            result,
        })
    }

    /// Rewrite one clause through the rewrite collaborator
    ///
    /// An isolated, stateless call: one block of clause text in, one
    /// rewritten clause out.
    pub async fn rewrite_clause(&self, clause_text: &str) -> Result<String, EngineError> {
        if clause_text.len() > self.config.max_clause_length {
            return Err(EngineError::TextTooLong(
                clause_text.len(),
                self.config.max_clause_length,
            ));
        }

        info!(clause_length = clause_text.len(), "Rewriting clause");

        let user_prompt = prompt::rewrite_prompt(clause_text);
        let raw = timeout(
            self.config.request_timeout(),
            self.call_llm(REWRITE_SYSTEM_PROMPT, &user_prompt),
        )
        .await
        .map_err(|_| EngineError::Timeout)??;

        Ok(raw.trim().to_string())
    }

    /// Call the LLM provider, mapping transport errors to engine errors
    async fn call_llm(&self, system: &str, user_prompt: &str) -> Result<String, EngineError> {
        let provider = Arc::clone(&self.provider);
        let system = system.to_string();
        let user_prompt = user_prompt.to_string();

        // The provider trait is blocking; run it off the async executor
        tokio::task::spawn_blocking(move || {
            provider.complete(&system, &user_prompt).map_err(|e| {
                if L::is_rate_limited(&e) {
                    EngineError::RateLimited
                } else {
                    EngineError::Llm(e.to_string())
                }
            })
        })
        .await
        .map_err(|e| EngineError::Llm(format!("Task join error: {}", e)))?
    }
}
