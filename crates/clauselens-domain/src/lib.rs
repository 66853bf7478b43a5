//! ClauseLens Domain Layer
//!
//! This crate contains the core data model for ClauseLens. It defines the
//! value objects produced by the analysis extraction engine and the trait
//! interfaces that the infrastructure layers implement.
//!
//! ## Key Concepts
//!
//! - **RiskLevel**: The closed four-way classification assigned to each clause
//! - **ClauseRecord**: One structured, per-line-item result of analysis
//! - **SummaryCounts**: Aggregate risk counts pulled from the executive summary
//! - **AnalysisResult**: The complete, immutable output of one analysis run
//!
//! ## Architecture
//!
//! - Carries serde only (the result types are handed to the report renderer
//!   serialized); no infrastructure dependencies
//! - Pure data and classification logic, nothing here performs I/O
//! - Trait definitions for the LLM transport seam live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod result;
pub mod risk;
pub mod summary;
pub mod traits;

// Re-exports for convenience
pub use record::ClauseRecord;
pub use result::AnalysisResult;
pub use risk::RiskLevel;
pub use summary::SummaryCounts;
