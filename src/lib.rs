//! # docsift
//!
//! Document outline extraction and persona-driven section ranking.
//!
//! Given pre-extracted text runs with font metrics, docsift detects
//! titled headings (H1-H3) per document, pools the discovered sections
//! across a collection, and ranks them against a persona-and-task query
//! with TF-IDF cosine similarity, producing a short JSON report of the
//! most pertinent sections with refined excerpts.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docsift::{extract_outline, model::DocumentRuns};
//!
//! fn main() -> docsift::Result<()> {
//!     let data = std::fs::read_to_string("handbook.json")?;
//!     let runs: DocumentRuns = serde_json::from_str(&data)?;
//!
//!     for heading in extract_outline(&runs) {
//!         println!("{} {} (p. {})", heading.level, heading.text, heading.page);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Document-relative thresholds**: heading cutoffs derived from each
//!   document's own font-size distribution
//! - **Rule-table classification**: an ordered, testable cascade of
//!   heading heuristics
//! - **Batch TF-IDF ranking**: one corpus per collection, stable
//!   ordering, stop-word filtering
//! - **Parallel processing**: Rayon across documents, with identical
//!   output to the sequential run
//! - **Lenient by design**: missing or malformed inputs degrade to empty
//!   contributions, never aborts

pub mod collection;
pub mod config;
pub mod error;
pub mod model;
pub mod outline;
pub mod rank;

// Re-export commonly used items
pub use collection::{analyze_collection, process_collection, process_collections};
pub use config::CollectionConfig;
pub use error::{Error, Result};
pub use model::{
    DocumentRuns, Heading, HeadingLevel, LogicalLine, RankedReport, Section, TextRun,
};
pub use outline::{extract_outline, FontThresholds};
pub use rank::{build_report, rank_sections};
