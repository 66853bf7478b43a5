//! Analysis result module - the complete output of one analysis run

use crate::record::ClauseRecord;
use crate::summary::SummaryCounts;
use serde::{Deserialize, Serialize};

/// The complete, immutable result of analyzing one contract
///
/// Built fresh per analysis request and never mutated after construction.
/// Invariant: `risk_count == summary.risk_total()` - the figure is derived
/// at assembly time, not read from the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The raw report with numeric count lines stripped from its summary span
    pub sanitized_markdown: String,

    /// Derived count of flagged clauses (high + moderate + needs-review)
    pub risk_count: u32,

    /// Parsed clause records, in document order
    pub clauses: Vec<ClauseRecord>,

    /// Numeric summary extracted from the executive summary span
    pub summary: SummaryCounts,
}
