//! Catalog integrity checks.

use passcraft_core::record::PLACEHOLDER_KEYS;

use crate::catalog::GROUPS;
use crate::model::SPECIAL_CHAR_KEY;

/// Scans the whole catalog for malformed patterns.
///
/// Returns one human-readable issue per unknown placeholder or unbalanced
/// brace; an empty list means the catalog is internally consistent.
pub fn catalog_issues() -> Vec<String> {
    let mut issues = Vec::new();

    for (group, patterns) in GROUPS {
        for pattern in *patterns {
            for name in pattern.placeholders() {
                if name != SPECIAL_CHAR_KEY && !PLACEHOLDER_KEYS.contains(&name) {
                    issues.push(format!(
                        "{group}: pattern '{}' references unknown field '{name}'",
                        pattern.as_str()
                    ));
                }
            }

            let opens = pattern.as_str().matches('{').count();
            let closes = pattern.as_str().matches('}').count();
            if opens != closes {
                issues.push(format!(
                    "{group}: pattern '{}' has unbalanced braces",
                    pattern.as_str()
                ));
            }
        }
    }

    issues
}
