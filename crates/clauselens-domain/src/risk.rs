//! Risk level module - the classification assigned to each analyzed clause

use serde::{Deserialize, Serialize};

/// Risk level assigned to a clause record
///
/// A closed, four-way classification ordered from most to least severe:
/// - High: the clause exposes the signer to serious risk
/// - Moderate: the clause is problematic and should be renegotiated
/// - NeedsReview: the clause is probably fine but deserves human attention
/// - Safe: the clause is acceptable as written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskLevel {
    /// Serious exposure, replacement language recommended
    High,

    /// Problematic, should be renegotiated
    Moderate,

    /// Probably acceptable, flag for human review
    NeedsReview,

    /// Acceptable as written
    Safe,
}

impl RiskLevel {
    /// Get the risk level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Moderate => "moderate",
            RiskLevel::NeedsReview => "needsReview",
            RiskLevel::Safe => "safe",
        }
    }

    /// Human-facing display label
    pub fn display_label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::NeedsReview => "Needs Review",
            RiskLevel::Safe => "Safe",
        }
    }

    /// Classify a free-text label, returning `None` when nothing matches
    ///
    /// Matching is case-insensitive substring search, checked in severity
    /// order. Labels may contain multiple level words (e.g. "High Risk -
    /// Needs Review"); the most severe match wins.
    pub fn try_classify(label: &str) -> Option<Self> {
        let lowered = label.to_ascii_lowercase();
        if lowered.contains("high") {
            Some(RiskLevel::High)
        } else if lowered.contains("moderate") {
            Some(RiskLevel::Moderate)
        } else if lowered.contains("review") {
            Some(RiskLevel::NeedsReview)
        } else if lowered.contains("safe") {
            Some(RiskLevel::Safe)
        } else {
            None
        }
    }

    /// Classify a free-text label
    ///
    /// Unrecognized text defaults to `Safe`. Total over all input; never fails.
    pub fn classify(label: &str) -> Self {
        Self::try_classify(label).unwrap_or(RiskLevel::Safe)
    }

    /// Whether this level counts toward the flagged-risk total
    ///
    /// High, Moderate and NeedsReview are flagged; Safe is not.
    pub fn is_flagged(&self) -> bool {
        !matches!(self, RiskLevel::Safe)
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_classify(s).ok_or_else(|| format!("Unrecognized risk label: {}", s))
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_canonical_labels() {
        assert_eq!(RiskLevel::classify("High Risk"), RiskLevel::High);
        assert_eq!(RiskLevel::classify("Moderate Risk"), RiskLevel::Moderate);
        assert_eq!(RiskLevel::classify("Needs Review"), RiskLevel::NeedsReview);
        assert_eq!(RiskLevel::classify("Safe"), RiskLevel::Safe);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(RiskLevel::classify("HIGH RISK"), RiskLevel::High);
        assert_eq!(RiskLevel::classify("moderate risk"), RiskLevel::Moderate);
        assert_eq!(RiskLevel::classify("nEeDs ReViEw"), RiskLevel::NeedsReview);
    }

    #[test]
    fn test_classify_priority_order() {
        // Multiple level words: the most severe one wins
        assert_eq!(
            RiskLevel::classify("High Risk - Needs Review"),
            RiskLevel::High
        );
        assert_eq!(
            RiskLevel::classify("Moderate Risk (safe after review)"),
            RiskLevel::Moderate
        );
        assert_eq!(
            RiskLevel::classify("safe, but needs review"),
            RiskLevel::NeedsReview
        );
    }

    #[test]
    fn test_classify_defaults_to_safe() {
        assert_eq!(RiskLevel::classify(""), RiskLevel::Safe);
        assert_eq!(RiskLevel::classify("unknown"), RiskLevel::Safe);
        assert_eq!(RiskLevel::try_classify("unknown"), None);
    }

    #[test]
    fn test_flagged_levels() {
        assert!(RiskLevel::High.is_flagged());
        assert!(RiskLevel::Moderate.is_flagged());
        assert!(RiskLevel::NeedsReview.is_flagged());
        assert!(!RiskLevel::Safe.is_flagged());
    }

    #[test]
    fn test_serde_names_match_renderer_contract() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::NeedsReview).unwrap(),
            "\"needsReview\""
        );
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
    }

    proptest! {
        #[test]
        fn classify_is_total(label in ".*") {
            // Never panics, always yields one of the four levels
            let _ = RiskLevel::classify(&label);
        }

        #[test]
        fn classify_ignores_ascii_case(label in "[ -~]{0,40}") {
            prop_assert_eq!(
                RiskLevel::classify(&label),
                RiskLevel::classify(&label.to_ascii_uppercase())
            );
        }
    }
}
