//! Clause segmentation - raw markdown to ordered `ClauseRecord`s
//!
//! The expected template presents each clause as a `### Line N: Title`
//! heading followed by bold-labeled fields, but the template is only a soft
//! contract. Segmentation is a line-oriented scanning state machine rather
//! than one monolithic pattern: a clause heading opens a draft, recognized
//! field labels switch the accumulator, an unrecognized label triggers a
//! recovery transition (its body is discarded), and any heading or the end
//! of input closes the draft. Drafts without a discoverable Original Text
//! or Risk Level label are dropped, not emitted as partial garbage.

use clauselens_domain::{ClauseRecord, RiskLevel};
use tracing::{debug, warn};

/// Split the raw report into one record per detected clause block
///
/// Pure and total: document order is preserved, malformed blocks are
/// skipped, and the same input always yields the same sequence.
pub fn segment(raw: &str) -> Vec<ClauseRecord> {
    let mut records = Vec::new();
    let mut state = State::AwaitingHeading;

    for line in raw.lines() {
        if let Some(title) = parse_clause_heading(line) {
            close_clause(&mut state, &mut records);
            state = State::InClause {
                draft: ClauseDraft::new(title),
                active: None,
            };
            continue;
        }

        if is_heading(line) {
            // Non-clause heading (e.g. the executive summary) ends any open block
            close_clause(&mut state, &mut records);
            continue;
        }

        if let State::InClause { draft, active } = &mut state {
            match split_field_line(line) {
                Some((label, first)) => match FieldKind::from_label(label) {
                    Some(kind) if draft.field(kind).is_none() => {
                        draft.start_field(kind, first);
                        *active = Some(kind);
                    }
                    Some(kind) => {
                        // Duplicate label: first occurrence wins, discard this body
                        debug!("Duplicate field label '{}', keeping first", kind.label());
                        *active = None;
                    }
                    None => {
                        // Recovery transition: unknown label ends accumulation
                        debug!("Unrecognized field label '{}'", label);
                        *active = None;
                    }
                },
                None => {
                    if let Some(kind) = *active {
                        draft.append(kind, line);
                    }
                }
            }
        }
    }

    close_clause(&mut state, &mut records);
    records
}

/// Scanner state: outside any clause, or accumulating one
enum State {
    AwaitingHeading,
    InClause {
        draft: ClauseDraft,
        active: Option<FieldKind>,
    },
}

/// Finalize an open draft, if any, and return to `AwaitingHeading`
fn close_clause(state: &mut State, records: &mut Vec<ClauseRecord>) {
    if let State::InClause { draft, .. } = std::mem::replace(state, State::AwaitingHeading) {
        match draft.finish() {
            Some(record) => records.push(record),
            None => warn!("Dropping clause block without Original Text or Risk Level"),
        }
    }
}

/// The recognized bold field labels, in template order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    OriginalText,
    RiskLevel,
    Description,
    BetterAlternative,
    FinancialImpact,
    RiskIfUnchanged,
    LegalWordsExplained,
}

impl FieldKind {
    const COUNT: usize = 7;

    fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "original text" => Some(FieldKind::OriginalText),
            "risk level" => Some(FieldKind::RiskLevel),
            "description" => Some(FieldKind::Description),
            "better alternative" => Some(FieldKind::BetterAlternative),
            "financial impact" => Some(FieldKind::FinancialImpact),
            "risk if unchanged" => Some(FieldKind::RiskIfUnchanged),
            "legal words explained" => Some(FieldKind::LegalWordsExplained),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FieldKind::OriginalText => "Original Text",
            FieldKind::RiskLevel => "Risk Level",
            FieldKind::Description => "Description",
            FieldKind::BetterAlternative => "Better Alternative",
            FieldKind::FinancialImpact => "Financial Impact",
            FieldKind::RiskIfUnchanged => "Risk if Unchanged",
            FieldKind::LegalWordsExplained => "Legal Words Explained",
        }
    }
}

/// Accumulator for one clause block
struct ClauseDraft {
    title: String,
    // Indexed by FieldKind; Some records that the label was seen, even if
    // its body turns out empty
    fields: [Option<String>; FieldKind::COUNT],
}

impl ClauseDraft {
    fn new(title: String) -> Self {
        Self {
            title,
            fields: Default::default(),
        }
    }

    fn field(&self, kind: FieldKind) -> Option<&String> {
        self.fields[kind as usize].as_ref()
    }

    fn start_field(&mut self, kind: FieldKind, first_line: &str) {
        self.fields[kind as usize] = Some(first_line.to_string());
    }

    fn append(&mut self, kind: FieldKind, line: &str) {
        if let Some(body) = &mut self.fields[kind as usize] {
            body.push('\n');
            body.push_str(line);
        }
    }

    /// Build the record, or `None` when the block lacks its anchors
    fn finish(mut self) -> Option<ClauseRecord> {
        // A clause without an original-text anchor cannot be displayed or
        // copied; a clause without a risk label cannot be classified
        let original_text = self.take(FieldKind::OriginalText)?;
        let risk_label = self.take(FieldKind::RiskLevel)?;

        let risk = RiskLevel::try_classify(&risk_label).unwrap_or_else(|| {
            if !risk_label.is_empty() {
                warn!("Unrecognized risk label '{}', defaulting to Safe", risk_label);
            }
            RiskLevel::Safe
        });

        Some(ClauseRecord {
            title: self.title.trim().to_string(),
            original_text,
            risk,
            explanation: self.take(FieldKind::Description).unwrap_or_default(),
            safer_rewrite: self.take(FieldKind::BetterAlternative).unwrap_or_default(),
            financial_impact: self.take(FieldKind::FinancialImpact).unwrap_or_default(),
            consequence_if_unchanged: self.take(FieldKind::RiskIfUnchanged).unwrap_or_default(),
            defined_terms: self.take(FieldKind::LegalWordsExplained).unwrap_or_default(),
        })
    }

    fn take(&mut self, kind: FieldKind) -> Option<String> {
        self.fields[kind as usize]
            .take()
            .map(|body| body.trim().to_string())
    }
}

/// Parse a `### Line N: Title` heading, returning the title
fn parse_clause_heading(line: &str) -> Option<String> {
    let rest = line.trim_start().strip_prefix("###")?;
    let rest = rest.trim_start();

    let after_line = strip_prefix_ignore_ascii_case(rest, "line")?;
    let after_ws = after_line.trim_start();

    // Require the line number so prose headings are not mistaken for clauses
    let digits = after_ws.len() - after_ws.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let title = after_ws[digits..].trim_start_matches(':').trim();
    Some(title.to_string())
}

/// Any markdown heading line (`#`, `##`, `###`, ...)
fn is_heading(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Split a `**Label:** rest` or `**Label**: rest` line
fn split_field_line(line: &str) -> Option<(&str, &str)> {
    let body = line.trim_start().strip_prefix("**")?;
    let close = body.find("**")?;
    let label = body[..close].trim().trim_end_matches(':').trim_end();
    let mut rest = &body[close + 2..];
    rest = rest.strip_prefix(':').unwrap_or(rest);
    Some((label, rest.trim()))
}

fn strip_prefix_ignore_ascii_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}
