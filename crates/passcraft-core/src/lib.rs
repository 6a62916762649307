//! Core contracts and helpers for passcraft.
//!
//! This crate defines the normalized user record, generation options, leet
//! transliteration, and the heuristic strength scorer shared across the
//! pattern catalog, the generation engine, and the CLI.

pub mod error;
pub mod leet;
pub mod options;
pub mod record;
pub mod strength;

pub use error::{Error, Result};
pub use leet::leet;
pub use options::GenerationOptions;
pub use record::{Profile, UserRecord};
pub use strength::{score, Strength};
