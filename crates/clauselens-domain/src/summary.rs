//! Summary counts module - aggregate risk totals from the executive summary

use serde::{Deserialize, Serialize};

/// Aggregate risk counts extracted from the executive summary
///
/// Each count defaults independently to 0 when its label is absent from the
/// source text; a missing summary yields an all-zero value, never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCounts {
    /// Clauses rated High Risk
    pub high: u32,

    /// Clauses rated Moderate Risk
    pub moderate: u32,

    /// Clauses rated Needs Review
    pub needs_review: u32,

    /// Clauses rated Safe
    pub safe: u32,

    /// Total lines the model claims to have analyzed
    pub total_lines_analyzed: u32,
}

impl SummaryCounts {
    /// Number of flagged clauses: high + moderate + needs-review
    ///
    /// This is the derived figure the final result reports as `riskCount`;
    /// it is never sourced from the document independently. The counts come
    /// from untrusted model output, so the sum saturates rather than
    /// overflowing on absurd claimed figures.
    pub fn risk_total(&self) -> u32 {
        self.high
            .saturating_add(self.moderate)
            .saturating_add(self.needs_review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_total_excludes_safe() {
        let counts = SummaryCounts {
            high: 2,
            moderate: 1,
            needs_review: 3,
            safe: 10,
            total_lines_analyzed: 16,
        };
        assert_eq!(counts.risk_total(), 6);
    }

    #[test]
    fn test_risk_total_saturates_on_absurd_counts() {
        let counts = SummaryCounts {
            high: u32::MAX,
            moderate: 1,
            needs_review: 2,
            safe: 0,
            total_lines_analyzed: 0,
        };
        assert_eq!(counts.risk_total(), u32::MAX);
    }

    #[test]
    fn test_default_is_all_zero() {
        let counts = SummaryCounts::default();
        assert_eq!(counts.risk_total(), 0);
        assert_eq!(counts.safe, 0);
        assert_eq!(counts.total_lines_analyzed, 0);
    }
}
