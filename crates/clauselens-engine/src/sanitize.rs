//! Count-line removal from the human-facing markdown
//!
//! The numeric risk counts are reported separately in structured form, so
//! the rendered report should carry narrative text only. Stripping is
//! restricted to the located summary span: the same label text appearing as
//! prose elsewhere in the document is left alone.

use crate::summary::{SummarySpan, COUNT_LABELS};

/// Remove recognized count lines from the summary span
///
/// Every line of the form `<optional bullet><label><non-digits><digits>`
/// for one of the five count labels is deleted, and runs of three or more
/// consecutive newlines inside the span collapse to exactly two. Everything
/// outside the span is byte-identical. Idempotent, and never fails: with no
/// span the input is returned unchanged.
pub fn sanitize(raw: &str, span: Option<&SummarySpan>) -> String {
    let Some(span) = span else {
        return raw.to_string();
    };

    let region = &raw[span.start..span.end];
    let cleaned = strip_count_lines(region);
    let collapsed = collapse_newline_runs(&cleaned);

    let mut out = String::with_capacity(raw.len());
    out.push_str(&raw[..span.start]);
    out.push_str(&collapsed);
    out.push_str(&raw[span.end..]);
    out
}

/// Drop every count line from `region`, preserving all other lines
fn strip_count_lines(region: &str) -> String {
    let had_trailing_newline = region.ends_with('\n');
    let kept: Vec<&str> = region.lines().filter(|line| !is_count_line(line)).collect();

    let mut out = kept.join("\n");
    if had_trailing_newline && !out.is_empty() {
        out.push('\n');
    }
    out
}

/// A line carrying one of the recognized labels followed by a digit run
///
/// The label must sit at the start of the line, after optional whitespace
/// and at most one bullet marker. Anything non-numeric may separate the
/// label from the digits, but the digits must be on the same line - a prose
/// sentence mentioning "Safe" with no number survives.
fn is_count_line(line: &str) -> bool {
    let rest = line.trim_start();
    let rest = rest.strip_prefix(['-', '*', '•']).unwrap_or(rest);
    let rest = rest.trim_start();

    COUNT_LABELS.iter().any(|label| {
        matches_label_prefix(rest, label)
            .is_some_and(|after| after.bytes().any(|b| b.is_ascii_digit()))
    })
}

/// Case-insensitive prefix match; returns the remainder after the label
fn matches_label_prefix<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    let prefix = text.get(..label.len())?;
    prefix
        .eq_ignore_ascii_case(label)
        .then(|| &text[label.len()..])
}

/// Collapse runs of 3+ newlines to exactly 2 (one blank line)
fn collapse_newline_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            run += 1;
            continue;
        }
        push_newlines(&mut out, run);
        run = 0;
        out.push(ch);
    }
    push_newlines(&mut out, run);
    out
}

fn push_newlines(out: &mut String, run: usize) {
    let count = if run >= 3 { 2 } else { run };
    for _ in 0..count {
        out.push('\n');
    }
}
