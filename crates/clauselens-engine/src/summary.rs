//! Executive summary location and tolerant count extraction

use clauselens_domain::SummaryCounts;

/// Labels whose counts are read from (and later stripped out of) the summary
pub(crate) const COUNT_LABELS: [&str; 5] = [
    "High Risk",
    "Moderate Risk",
    "Needs Review",
    "Safe",
    "Total lines analyzed",
];

/// Byte span of the executive summary block within the raw document
///
/// Starts at the summary heading line and runs to the next level-2 heading
/// or the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarySpan {
    /// Offset of the first byte of the summary heading line
    pub start: usize,

    /// Offset one past the last byte of the span
    pub end: usize,
}

/// Locate the executive summary span
///
/// Finds the first level-2 heading containing "executive summary"
/// (case-insensitive). Returns `None` when no such heading exists - a
/// missing summary is a legitimate, degraded outcome, not an error.
pub fn locate(raw: &str) -> Option<SummarySpan> {
    let mut start = None;
    for (offset, line) in lines_with_offsets(raw) {
        if !is_level2_heading(line) {
            continue;
        }
        match start {
            None => {
                if line.to_ascii_lowercase().contains("executive summary") {
                    start = Some(offset);
                }
            }
            Some(begin) => {
                return Some(SummarySpan {
                    start: begin,
                    end: offset,
                });
            }
        }
    }
    start.map(|begin| SummarySpan {
        start: begin,
        end: raw.len(),
    })
}

/// Extract the first numeric count for `label` within the span text
///
/// Tolerates leading bullets, dash/colon punctuation and arbitrary
/// whitespace: the only requirement is a digit run following the label on
/// the same line. An absent label (or one never followed by digits) yields
/// 0; this never fails.
pub fn extract_count(span_text: &str, label: &str) -> u32 {
    for line in span_text.lines() {
        let mut search_from = 0;
        while let Some(pos) = find_ignore_ascii_case(&line[search_from..], label) {
            let label_end = search_from + pos + label.len();
            if let Some(value) = first_digit_run(&line[label_end..]) {
                return value;
            }
            search_from = label_end;
        }
    }
    0
}

/// Extract all five counts from the located span
///
/// Each count defaults independently to 0; a missing span yields an
/// all-zero result.
pub fn counts(raw: &str, span: Option<&SummarySpan>) -> SummaryCounts {
    let Some(span) = span else {
        return SummaryCounts::default();
    };
    let text = &raw[span.start..span.end];
    SummaryCounts {
        high: extract_count(text, "High Risk"),
        moderate: extract_count(text, "Moderate Risk"),
        needs_review: extract_count(text, "Needs Review"),
        safe: extract_count(text, "Safe"),
        total_lines_analyzed: extract_count(text, "Total lines analyzed"),
    }
}

/// Iterate lines together with their byte offsets in the source
pub(crate) fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n').scan(0usize, |offset, chunk| {
        let start = *offset;
        *offset += chunk.len();
        Some((start, chunk.trim_end_matches(['\n', '\r'])))
    })
}

/// A `##` heading, but not `###` or deeper
pub(crate) fn is_level2_heading(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("##") && !trimmed.starts_with("###")
}

/// Case-insensitive substring search (ASCII labels only)
///
/// ASCII lowercasing is byte-for-byte, so the returned offset is valid in
/// the original string.
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

/// First run of ASCII digits in `text`, parsed
fn first_digit_run(text: &str) -> Option<u32> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;
    let end = bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |n| start + n);
    text[start..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
### Line 1: Payment\n\n\
**Original Text:** Net 90.\n\n\
**Risk Level:** Moderate Risk\n\n\
## EXECUTIVE SUMMARY\n\n\
Overall the contract is workable.\n\n\
- High Risk: 2\n\
- Moderate Risk: 1\n\
- Needs Review: 0\n\
- Safe: 4\n\
- Total lines analyzed: 7\n\n\
## Appendix\n\nNotes.\n";

    #[test]
    fn test_locate_finds_summary_span() {
        let span = locate(REPORT).unwrap();
        let text = &REPORT[span.start..span.end];
        assert!(text.starts_with("## EXECUTIVE SUMMARY"));
        assert!(text.contains("Total lines analyzed"));
        assert!(!text.contains("Appendix"));
    }

    #[test]
    fn test_locate_is_case_insensitive() {
        let raw = "intro\n## Executive Summary\nbody\n";
        let span = locate(raw).unwrap();
        assert!(raw[span.start..span.end].starts_with("## Executive Summary"));
        assert_eq!(span.end, raw.len());
    }

    #[test]
    fn test_locate_missing_summary() {
        assert_eq!(locate("no headings here"), None);
        assert_eq!(locate("### Line 1: x\ncontent\n"), None);
    }

    #[test]
    fn test_locate_ignores_level3_headings_as_boundaries() {
        let raw = "## Executive Summary\n\n### Sub-point\nmore\n";
        let span = locate(raw).unwrap();
        assert_eq!(span.end, raw.len());
    }

    #[test]
    fn test_counts_from_span() {
        let span = locate(REPORT).unwrap();
        let counts = counts(REPORT, Some(&span));
        assert_eq!(counts.high, 2);
        assert_eq!(counts.moderate, 1);
        assert_eq!(counts.needs_review, 0);
        assert_eq!(counts.safe, 4);
        assert_eq!(counts.total_lines_analyzed, 7);
    }

    #[test]
    fn test_counts_without_span_default_to_zero() {
        let counts = counts(REPORT, None);
        assert_eq!(counts, SummaryCounts::default());
    }

    #[test]
    fn test_extract_count_tolerates_punctuation_variants() {
        assert_eq!(extract_count("High Risk: 3", "High Risk"), 3);
        assert_eq!(extract_count("- High Risk - 3", "High Risk"), 3);
        assert_eq!(extract_count("* high risk   3 items", "High Risk"), 3);
        assert_eq!(extract_count("• High Risk lines: 12", "High Risk"), 12);
    }

    #[test]
    fn test_extract_count_requires_digits_on_same_line() {
        assert_eq!(extract_count("High Risk\n3", "High Risk"), 0);
        assert_eq!(extract_count("no label at all", "High Risk"), 0);
    }

    #[test]
    fn test_extract_count_skips_digitless_occurrence() {
        // The first mention has no digits; the later one does
        let text = "High Risk items follow\nHigh Risk: 5\n";
        assert_eq!(extract_count(text, "High Risk"), 5);
    }

    #[test]
    fn test_first_digit_run_parses_leading_run_only() {
        assert_eq!(first_digit_run(": 42 of 99"), Some(42));
        assert_eq!(first_digit_run("none"), None);
    }
}
