//! ClauseLens Analysis Extraction Engine
//!
//! Converts the unstructured, model-generated markdown of a contract risk
//! report into a typed, aggregable data structure: per-clause risk records
//! plus a sanitized executive summary.
//!
//! # Overview
//!
//! The report format is a soft contract, not a grammar: headings, spacing
//! and field order can vary, fields can be duplicated or missing, and whole
//! blocks can be malformed. The extraction layer therefore degrades
//! gracefully instead of failing - every function in it is total over its
//! input and returns a best-effort structured result. Transport failures
//! are reported one layer out, by the [`Analyzer`].
//!
//! # Architecture
//!
//! ```text
//! Contract text → Analyzer → LLM → raw markdown
//!                                      │
//!              locate summary → counts → sanitize
//!                                      │
//!                  segment (state machine) → ClauseRecords
//!                                      │
//!                              aggregate → AnalysisResult
//! ```
//!
//! # Example Usage
//!
//! ```
//! use clauselens_engine::parse_analysis;
//!
//! let raw = "### Line 1: Payment\n\n\
//!            **Original Text:** Net 90 payment terms.\n\n\
//!            **Risk Level:** Moderate Risk\n\n\
//!            **Description:** Long payment window.\n";
//!
//! let result = parse_analysis(raw);
//! assert_eq!(result.clauses.len(), 1);
//! assert_eq!(result.clauses[0].title, "Payment");
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parse;
mod prompt;
mod sanitize;
mod segment;
mod summary;
mod types;

#[cfg(test)]
mod tests;

pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use error::EngineError;
pub use parse::{aggregate, parse_analysis};
pub use sanitize::sanitize;
pub use segment::segment;
pub use summary::{counts, extract_count, locate, SummarySpan};
pub use types::{AnalysisMetadata, AnalysisOutcome, AnalysisRequest};
