use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use passcraft_core::{score, GenerationOptions, Strength, UserRecord};
use passcraft_patterns::select_patterns;

use crate::fallback::generate_extra;
use crate::substitute::expand;

/// Minimum accepted candidate length, in characters.
///
/// Applies to pattern-derived candidates only; fallback output is accepted
/// unconditionally so the target count stays reachable.
pub const MIN_CANDIDATE_LEN: usize = 6;

/// A generated candidate with its strength label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub value: String,
    pub strength: Strength,
}

/// Entry point for generating candidates from a record + options.
#[derive(Debug, Clone)]
pub struct Generator {
    options: GenerationOptions,
}

impl Generator {
    pub fn new(options: GenerationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Runs one generation request to completion.
    ///
    /// Walks a shuffled permutation of the selected patterns, accepting
    /// each variation that is long enough and unseen, tops candidates up
    /// with the fallback combinator on shortfall, and returns at most
    /// `desired_count` strings in acceptance order, each labeled with its
    /// strength. An unusable record produces an empty list, which is a
    /// valid outcome rather than an error.
    pub fn generate(&self, record: &UserRecord, rng: &mut impl Rng) -> Vec<Candidate> {
        let mut patterns = select_patterns(&self.options);
        patterns.shuffle(rng);

        info!(
            patterns = patterns.len(),
            desired = self.options.desired_count,
            "generation started"
        );

        let mut accepted: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        'patterns: for pattern in patterns {
            if accepted.len() >= self.options.desired_count {
                break;
            }
            for variation in expand(
                pattern,
                record,
                self.options.include_special_chars,
                rng,
            ) {
                if accepted.len() >= self.options.desired_count {
                    break 'patterns;
                }
                self.accept(variation, record, &mut accepted, &mut seen, rng);
            }
        }

        if accepted.len() < self.options.desired_count {
            let shortfall = self.options.desired_count - accepted.len();
            debug!(shortfall, "patterns exhausted, topping up from fragments");
            let extras = generate_extra(
                record,
                shortfall,
                self.options.include_special_chars,
                self.options.include_numbers,
                rng,
            );
            for extra in extras {
                if accepted.len() >= self.options.desired_count {
                    break;
                }
                if seen.insert(extra.clone()) {
                    accepted.push(extra);
                }
            }
        }

        info!(produced = accepted.len(), "generation finished");

        accepted
            .into_iter()
            .map(|value| {
                let strength = score(&value);
                Candidate { value, strength }
            })
            .collect()
    }

    /// Filters one variation and stores it if it survives.
    ///
    /// The duplicate check runs against the raw variation first (matching
    /// the original tool), then the digit top-up is applied, and the final
    /// string is inserted through the set again so the no-duplicate
    /// invariant holds even when the top-up collides with an earlier
    /// acceptance.
    fn accept(
        &self,
        variation: String,
        record: &UserRecord,
        accepted: &mut Vec<String>,
        seen: &mut HashSet<String>,
        rng: &mut impl Rng,
    ) {
        if variation.chars().count() < MIN_CANDIDATE_LEN {
            return;
        }
        if seen.contains(&variation) {
            return;
        }

        let mut candidate = variation;
        if self.options.include_numbers && !candidate.chars().any(|c| c.is_ascii_digit()) {
            match record.favorite_number() {
                Some(number) => candidate.push_str(number),
                None => candidate.push_str(&rng.random_range(0..100).to_string()),
            }
        }

        if seen.insert(candidate.clone()) {
            accepted.push(candidate);
        }
    }
}
