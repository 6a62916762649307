use chrono::Utc;

use passcraft_generate::Candidate;

use crate::model::{BatchReport, CandidateEntry, StrengthCounts, REPORT_VERSION};

/// Collects a batch of candidates into a [`BatchReport`].
pub fn evaluate(candidates: &[Candidate]) -> BatchReport {
    let mut counts = StrengthCounts::default();
    let mut entries = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        counts.record(candidate.strength);
        entries.push(CandidateEntry {
            value: candidate.value.clone(),
            strength: candidate.strength,
        });
    }

    BatchReport {
        report_version: REPORT_VERSION.to_string(),
        generated_at: Utc::now(),
        total: candidates.len(),
        counts,
        candidates: entries,
    }
}
