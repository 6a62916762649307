use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use passcraft_core::Strength;

/// Report contract version for batch evaluation artifacts.
pub const REPORT_VERSION: &str = "0.1";

/// Machine-readable summary of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub report_version: String,
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub counts: StrengthCounts,
    pub candidates: Vec<CandidateEntry>,
}

/// Candidate totals per strength label.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StrengthCounts {
    pub strong: usize,
    pub medium: usize,
    pub weak: usize,
}

impl StrengthCounts {
    pub fn record(&mut self, strength: Strength) {
        match strength {
            Strength::Strong => self.strong += 1,
            Strength::Medium => self.medium += 1,
            Strength::Weak => self.weak += 1,
        }
    }
}

/// One labeled candidate in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateEntry {
    pub value: String,
    pub strength: Strength,
}
