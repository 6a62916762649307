/// Special characters drawn for `{specialChar}` slots and decorations.
pub const SPECIAL_CHARACTERS: &[char] = &[
    '!', '@', '#', '$', '%', '&', '*', '_', '-', '.', '+', '=', '?',
];

/// Placeholder key reserved for the random special character.
pub const SPECIAL_CHAR_KEY: &str = "specialChar";

/// An immutable password template from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern(&'static str);

impl Pattern {
    pub const fn new(raw: &'static str) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Iterates the placeholder names between braces, left to right.
    pub fn placeholders(&self) -> Placeholders {
        Placeholders { rest: self.0 }
    }

    /// True when the pattern carries a `{specialChar}` slot.
    pub fn wants_special_char(&self) -> bool {
        self.placeholders().any(|name| name == SPECIAL_CHAR_KEY)
    }
}

/// Iterator over the placeholder names of a [`Pattern`].
#[derive(Debug, Clone)]
pub struct Placeholders {
    rest: &'static str,
}

impl Iterator for Placeholders {
    type Item = &'static str;

    fn next(&mut self) -> Option<&'static str> {
        loop {
            let open = self.rest.find('{')?;
            let after = &self.rest[open + 1..];
            let close = match after.find('}') {
                Some(close) => close,
                None => {
                    self.rest = "";
                    return None;
                }
            };
            let name = &after[..close];
            self.rest = &after[close + 1..];
            if !name.is_empty() {
                return Some(name);
            }
        }
    }
}
