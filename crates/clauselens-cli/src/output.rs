//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use clauselens_domain::{AnalysisResult, ClauseRecord, RiskLevel};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a complete analysis result.
    pub fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_result_json(result),
            OutputFormat::Table => Ok(self.format_result_table(result)),
            OutputFormat::Quiet => Ok(self.format_result_quiet(result)),
        }
    }

    /// Format a rewritten clause.
    pub fn format_rewrite(&self, rewritten: &str) -> String {
        match self.format {
            OutputFormat::Quiet | OutputFormat::Table => rewritten.to_string(),
            OutputFormat::Json => {
                serde_json::json!({ "rewrittenClause": rewritten }).to_string()
            }
        }
    }

    /// Pretty JSON for the downstream renderer contract.
    fn format_result_json(&self, result: &AnalysisResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    /// Summary header plus one table row per clause.
    fn format_result_table(&self, result: &AnalysisResult) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{}  high: {}  moderate: {}  needs review: {}  safe: {}  (lines analyzed: {})\n\n",
            self.colorize(&format!("{} flagged clauses", result.risk_count), "red"),
            result.summary.high,
            result.summary.moderate,
            result.summary.needs_review,
            result.summary.safe,
            result.summary.total_lines_analyzed,
        ));

        if result.clauses.is_empty() {
            out.push_str(&self.colorize("No clauses extracted.", "yellow"));
            return out;
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Risk", "Title", "Original Text"]);

        for (idx, clause) in result.clauses.iter().enumerate() {
            let number = (idx + 1).to_string();
            let risk = self.risk_label(clause);
            let text = truncate(&clause.original_text, 60);
            builder.push_record([number.as_str(), risk.as_str(), &clause.title, &text]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        out.push_str(&table.to_string());
        out
    }

    /// Quiet mode: the derived risk count only.
    fn format_result_quiet(&self, result: &AnalysisResult) -> String {
        result.risk_count.to_string()
    }

    fn risk_label(&self, clause: &ClauseRecord) -> String {
        let label = clause.risk.display_label();
        if !self.color_enabled {
            return label.to_string();
        }
        match clause.risk {
            RiskLevel::High => label.red().bold().to_string(),
            RiskLevel::Moderate => label.yellow().to_string(),
            RiskLevel::NeedsReview => label.blue().to_string(),
            RiskLevel::Safe => label.green().to_string(),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}
