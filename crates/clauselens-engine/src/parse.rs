//! The full extraction pipeline and final assembly

use crate::{sanitize, segment, summary};
use clauselens_domain::{AnalysisResult, ClauseRecord, SummaryCounts};
use tracing::debug;

/// Assemble the final result object
///
/// `risk_count` is always derived from the counts (high + moderate +
/// needs-review), never read from the document - a deliberate cross-check
/// against whatever the raw text claims. Pure assembly, no failure modes.
pub fn aggregate(
    sanitized_markdown: String,
    clauses: Vec<ClauseRecord>,
    counts: SummaryCounts,
) -> AnalysisResult {
    AnalysisResult {
        risk_count: counts.risk_total(),
        sanitized_markdown,
        clauses,
        summary: counts,
    }
}

/// Run the full extraction pipeline over one raw report
///
/// Locates the executive summary, pulls the numeric counts, sanitizes the
/// display markdown, segments the clause blocks and assembles the result.
/// Total over its input: any text - including one with no recognizable
/// structure at all - yields a well-formed (if degraded) result.
pub fn parse_analysis(raw: &str) -> AnalysisResult {
    let span = summary::locate(raw);
    debug!(summary_found = span.is_some(), "Located executive summary");

    let counts = summary::counts(raw, span.as_ref());
    let sanitized = sanitize::sanitize(raw, span.as_ref());
    let clauses = segment::segment(raw);

    debug!(
        clauses = clauses.len(),
        risk_total = counts.risk_total(),
        "Extraction complete"
    );

    aggregate(sanitized, clauses, counts)
}
