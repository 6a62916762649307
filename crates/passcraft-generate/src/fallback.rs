//! Fallback combinator for when the pattern catalog runs dry.

use rand::seq::SliceRandom;
use rand::Rng;

use passcraft_core::record::capitalize;
use passcraft_core::UserRecord;

use crate::substitute::random_special;

/// Probability of capitalizing a combined candidate.
const CAPITALIZE_P: f64 = 0.5;
/// Probability of decorating with a special character, when enabled.
const SPECIAL_P: f64 = 0.7;
/// Probability of appending a number, when enabled.
const NUMBER_P: f64 = 0.6;

/// Randomly combines 2-3 record fragments into extra candidates.
///
/// Returns up to `count` strings and never fails; a record without a
/// single non-empty fragment yields nothing regardless of `count`. Output
/// is not deduplicated here, and no minimum length applies: these strings
/// exist to let the caller reach its target count.
pub fn generate_extra(
    record: &UserRecord,
    count: usize,
    include_special_chars: bool,
    include_numbers: bool,
    rng: &mut impl Rng,
) -> Vec<String> {
    let mut pool = record.fragments();
    if pool.is_empty() {
        return Vec::new();
    }

    let mut extras = Vec::with_capacity(count);
    for _ in 0..count {
        pool.shuffle(rng);
        let take = rng.random_range(2..=3).min(pool.len());
        let mut candidate: String = pool[..take].concat();

        if rng.random_bool(CAPITALIZE_P) {
            candidate = capitalize(&candidate);
        }

        if include_special_chars && rng.random_bool(SPECIAL_P) {
            let special = random_special(rng);
            if rng.random_bool(0.5) {
                candidate.push(special);
            } else {
                candidate.insert(0, special);
            }
        }

        if include_numbers && rng.random_bool(NUMBER_P) {
            match record.favorite_number() {
                Some(number) => candidate.push_str(number),
                None => candidate.push_str(&rng.random_range(0..1000).to_string()),
            }
        }

        extras.push(candidate);
    }

    extras
}
