//! Evaluation helpers for generated candidate batches.
//!
//! Collects strength distributions into a machine-readable report and
//! renders the human-readable export format.

pub mod metrics;
pub mod model;
pub mod report;

pub use metrics::evaluate;
pub use model::{BatchReport, CandidateEntry, StrengthCounts, REPORT_VERSION};
pub use report::render_text_report;
