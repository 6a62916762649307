//! Heuristic strength classification.
//!
//! The rubric is illustrative, not an entropy estimate: it exists so the
//! tool can show that even "strong"-looking personal-info passwords are
//! trivially guessable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-level strength label for a candidate string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        };
        f.write_str(label)
    }
}

/// Scores a password by summed character-class points.
///
/// Length >= 12 earns two points, length >= 8 one; lowercase, uppercase,
/// digit, and any non-alphanumeric character earn one point each. Five or
/// more points is strong, three or more medium, anything else weak.
pub fn score(password: &str) -> Strength {
    let mut points = 0u8;

    let length = password.chars().count();
    if length >= 12 {
        points += 2;
    } else if length >= 8 {
        points += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        points += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        points += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        points += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        points += 1;
    }

    if points >= 5 {
        Strength::Strong
    } else if points >= 3 {
        Strength::Medium
    } else {
        Strength::Weak
    }
}
