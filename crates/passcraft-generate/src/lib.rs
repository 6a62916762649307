//! Pattern-driven candidate generation engine for passcraft.
//!
//! This crate consumes a normalized `UserRecord` plus `GenerationOptions`
//! and produces a deduplicated, strength-labeled list of candidate
//! passwords. All randomness flows through a caller-supplied `rand::Rng`,
//! so seeded runs are fully reproducible.

pub mod engine;
pub mod fallback;
pub mod substitute;

pub use engine::{Candidate, Generator, MIN_CANDIDATE_LEN};
pub use fallback::generate_extra;
pub use substitute::expand;
