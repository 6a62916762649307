//! Pattern catalog for passcraft.
//!
//! Patterns are compile-time string templates with `{fieldName}`
//! placeholders resolved against a `UserRecord`, plus the `{specialChar}`
//! token filled with a random special character. The catalog groups them
//! by flavor and selects groups according to the generation options.

pub mod catalog;
pub mod model;
pub mod validate;

pub use catalog::{select_patterns, BASIC, COMPLEX, LEET_SPEAK, WITH_CAPS, WITH_SPECIAL_CHARS};
pub use model::{Pattern, SPECIAL_CHARACTERS, SPECIAL_CHAR_KEY};
pub use validate::catalog_issues;
