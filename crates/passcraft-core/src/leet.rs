//! Leet-speak transliteration.

/// Replaces letters with look-alike digits, leaving everything else as is.
///
/// Both letter cases map to the same digit. The mapping is not invertible
/// and produces no characters that are themselves mapped, so applying the
/// function twice equals applying it once.
pub fn leet(text: &str) -> String {
    text.chars().map(leet_char).collect()
}

fn leet_char(c: char) -> char {
    match c.to_ascii_lowercase() {
        'a' => '4',
        'e' => '3',
        'i' => '1',
        'o' => '0',
        's' => '5',
        't' => '7',
        'b' => '8',
        'g' => '9',
        _ => c,
    }
}
