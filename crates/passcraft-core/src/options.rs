use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options for one generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Allow special characters in candidates.
    pub include_special_chars: bool,
    /// Guarantee at least one digit per candidate.
    pub include_numbers: bool,
    /// Include capitalized pattern variants.
    pub capitalize_first: bool,
    /// Number of candidates to produce.
    pub desired_count: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_special_chars: true,
            include_numbers: true,
            capitalize_first: true,
            desired_count: 10,
        }
    }
}

impl GenerationOptions {
    pub fn validate(&self) -> Result<()> {
        if self.desired_count == 0 {
            return Err(Error::InvalidOptions(
                "desired_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
