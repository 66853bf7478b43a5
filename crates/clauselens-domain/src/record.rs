//! Clause record module - one structured unit of the analysis report

use crate::risk::RiskLevel;
use serde::{Deserialize, Serialize};

/// One parsed clause of the analysis report
///
/// Every field is always present. Absence of an optional narrative is
/// represented as an empty string, never a missing key, so the renderer
/// never branches on presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseRecord {
    /// Short label from the clause heading (may be empty)
    pub title: String,

    /// Exact quoted contract text for this unit
    pub original_text: String,

    /// Risk classification for this clause
    pub risk: RiskLevel,

    /// Narrative description of the risk or acceptability
    pub explanation: String,

    /// Proposed replacement text (empty for clauses that need none)
    pub safer_rewrite: String,

    /// Monetary/liability narrative (empty when not provided)
    pub financial_impact: String,

    /// Downstream consequences of leaving the clause as-is
    pub consequence_if_unchanged: String,

    /// Glossary-style explanation of legal terms used in the clause
    pub defined_terms: String,
}
