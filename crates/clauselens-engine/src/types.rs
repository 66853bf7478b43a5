//! Request and response types for analysis

use clauselens_domain::AnalysisResult;

/// Request to analyze one contract
///
/// The context fields flow into the prompt so the model can weigh risk from
/// the requesting party's perspective.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Plain text of the contract (conversion from PDF/DOCX happens upstream)
    pub contract_text: String,

    /// Contract type (e.g. "service agreement")
    pub contract_type: String,

    /// Governing jurisdiction (e.g. "Delaware, US")
    pub jurisdiction: String,

    /// Contractor type (e.g. "independent software contractor")
    pub contractor_type: String,

    /// Project type (e.g. "fixed-bid development")
    pub project_type: String,

    /// Role of the requesting user (e.g. "contractor", "client")
    pub user_role: String,
}

/// Result of one analysis run together with its metadata
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The structured extraction result
    pub result: AnalysisResult,

    /// Metadata about the run
    pub metadata: AnalysisMetadata,
}

/// Metadata about an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// Name of the model used
    pub model_name: String,

    /// Unix timestamp when the analysis completed
    pub timestamp: u64,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,

    /// Length of the raw model response in characters
    pub response_chars: usize,
}
