//! Human-readable report rendering.

use std::fmt::Write;

use passcraft_core::UserRecord;

use crate::model::BatchReport;

const BANNER: &str = "===========================================";

/// Renders the exportable text report for one generation run.
///
/// Layout follows the tool's download format: user information block,
/// generation details, the labeled candidate list, and the security
/// warning. Writing to `String` cannot fail, so the `write!` results are
/// discarded.
pub fn render_text_report(record: &UserRecord, report: &BatchReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "PASSCRAFT - GENERATED PASSWORDS");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out);

    let _ = writeln!(out, "USER INFORMATION:");
    let _ = writeln!(out, "-----------------");
    let fields = [
        ("First Name", "FirstName"),
        ("Last Name", "LastName"),
        ("Birth Year", "birthYear"),
        ("Pet Name", "PetName"),
        ("Favorite Number", "favoriteNumber"),
        ("Hobby", "Hobby"),
        ("City", "City"),
        ("Partner", "PartnerName"),
    ];
    for (label, key) in fields {
        if let Some(value) = record.placeholder(key) {
            let _ = writeln!(out, "{label}: {value}");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "GENERATION DETAILS:");
    let _ = writeln!(out, "-------------------");
    let _ = writeln!(out, "Date: {}", report.generated_at.format("%Y-%m-%d"));
    let _ = writeln!(out, "Time: {}", report.generated_at.format("%H:%M:%S UTC"));
    let _ = writeln!(out, "Total Passwords: {}", report.total);
    let _ = writeln!(
        out,
        "Strength: {} strong / {} medium / {} weak",
        report.counts.strong, report.counts.medium, report.counts.weak
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "GENERATED PASSWORDS:");
    let _ = writeln!(out, "--------------------");
    for (index, entry) in report.candidates.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} [{}]",
            index + 1,
            entry.value,
            entry.strength.to_string().to_uppercase()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "SECURITY WARNING:");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "These passwords are generated from personal information");
    let _ = writeln!(out, "and are easily guessable. DO NOT use them for actual accounts!");
    let _ = writeln!(out, "This tool is for educational purposes only.");
    let _ = writeln!(out, "{BANNER}");

    out
}
