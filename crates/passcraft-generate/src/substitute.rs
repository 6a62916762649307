//! Single-pattern expansion.

use rand::seq::IndexedRandom;
use rand::Rng;

use passcraft_core::UserRecord;
use passcraft_patterns::{Pattern, SPECIAL_CHARACTERS, SPECIAL_CHAR_KEY};

/// Expands one pattern into a primary candidate plus decorations.
///
/// Every placeholder backed by a non-empty record field is replaced in all
/// its occurrences. A `{specialChar}` slot is filled with one uniformly
/// drawn special character when enabled, and left literal otherwise. The
/// primary candidate exists only when at least one substitution happened
/// and nothing unresolved remains; without a primary there is nothing to
/// decorate and the expansion is empty. With a primary, up to four
/// decorations follow: favorite number prepended and appended (the suffix
/// skipped when the primary already ends with it), and a fresh random
/// special character appended and prepended when enabled.
pub fn expand(
    pattern: Pattern,
    record: &UserRecord,
    include_special_chars: bool,
    rng: &mut impl Rng,
) -> Vec<String> {
    let mut resolved = pattern.as_str().to_string();

    for name in pattern.placeholders() {
        if name == SPECIAL_CHAR_KEY {
            continue;
        }
        if let Some(value) = record.placeholder(name) {
            resolved = resolved.replace(&format!("{{{name}}}"), value);
        }
    }

    if include_special_chars && pattern.wants_special_char() {
        let special = random_special(rng);
        resolved = resolved.replace("{specialChar}", &special.to_string());
    }

    // A pattern that substituted nothing, or that still carries an
    // unresolved slot, yields no output at all. The web original emitted
    // the half-filled string here; rejecting it keeps placeholders from
    // ever leaking into results.
    if resolved == pattern.as_str() || resolved.contains(['{', '}']) {
        return Vec::new();
    }

    let mut variations = vec![resolved.clone()];

    if let Some(number) = record.favorite_number() {
        variations.push(format!("{number}{resolved}"));
        if !resolved.ends_with(number) {
            variations.push(format!("{resolved}{number}"));
        }
    }

    if include_special_chars {
        variations.push(format!("{resolved}{}", random_special(rng)));
        variations.push(format!("{}{resolved}", random_special(rng)));
    }

    variations
}

/// One uniformly drawn special character.
pub(crate) fn random_special(rng: &mut impl Rng) -> char {
    SPECIAL_CHARACTERS.choose(rng).copied().unwrap_or('!')
}
