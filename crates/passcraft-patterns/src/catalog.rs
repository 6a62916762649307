//! The static pattern catalog, grouped by flavor.

use passcraft_core::GenerationOptions;

use crate::model::Pattern;

/// Plain field concatenations, always selected.
pub const BASIC: &[Pattern] = &[
    Pattern::new("{firstName}{birthYear}"),
    Pattern::new("{firstName}{favoriteNumber}"),
    Pattern::new("{firstName}{petName}"),
    Pattern::new("{firstName}{city}"),
    Pattern::new("{lastName}{birthYear}"),
    Pattern::new("{lastName}{favoriteNumber}"),
    Pattern::new("{petName}{birthYear}"),
    Pattern::new("{city}{birthYear}"),
    Pattern::new("{hobby}{birthYear}"),
    Pattern::new("{hobby}{favoriteNumber}"),
    Pattern::new("{partnerName}{birthYear}"),
    Pattern::new("{partnerName}{favoriteNumber}"),
];

/// Patterns with literal or random special characters.
pub const WITH_SPECIAL_CHARS: &[Pattern] = &[
    Pattern::new("{firstName}@{birthYear}"),
    Pattern::new("{firstName}#{favoriteNumber}"),
    Pattern::new("{firstName}_{petName}"),
    Pattern::new("{firstName}.{lastName}{birthYear}"),
    Pattern::new("{petName}!{birthYear}"),
    Pattern::new("{city}@{favoriteNumber}"),
    Pattern::new("{hobby}_{birthYear}"),
    Pattern::new("{firstName}{specialChar}{favoriteNumber}"),
    Pattern::new("{lastName}{specialChar}{birthYear}"),
    Pattern::new("{petName}{specialChar}{city}"),
    Pattern::new("{partnerName}{specialChar}{birthYear}"),
    Pattern::new("{firstName}{specialChar}{petName}"),
];

/// Capitalized field variants.
pub const WITH_CAPS: &[Pattern] = &[
    Pattern::new("{FirstName}{birthYear}"),
    Pattern::new("{FirstName}{PetName}"),
    Pattern::new("{FirstName}{City}{favoriteNumber}"),
    Pattern::new("{LastName}{birthYear}"),
    Pattern::new("{City}{birthYear}"),
    Pattern::new("{Hobby}{birthYear}"),
    Pattern::new("{FirstName}{LastName}{birthYear}"),
    Pattern::new("{PetName}{City}{favoriteNumber}"),
    Pattern::new("{PartnerName}{birthYear}"),
    Pattern::new("{FirstName}{Hobby}{favoriteNumber}"),
];

/// Longer multi-field combinations, always selected.
pub const COMPLEX: &[Pattern] = &[
    Pattern::new("{firstName}{birthDay}{birthMonth}"),
    Pattern::new("{lastName}{birthMonth}{birthYear}"),
    Pattern::new("{petName}{partnerName}{favoriteNumber}"),
    Pattern::new("{city}{hobby}{birthYear}"),
    Pattern::new("{firstName}{lastName}{city}{favoriteNumber}"),
    Pattern::new("{petName}{birthYear}{city}"),
    Pattern::new("{hobby}{partnerName}{birthYear}"),
    Pattern::new("{firstName}{specialChar}{petName}{favoriteNumber}"),
    Pattern::new("{lastName}{specialChar}{city}{birthYear}"),
    Pattern::new("{firstName}{lastName}{birthYear}{city}"),
];

/// Leet transliterations and meme-flavored suffixes.
pub const LEET_SPEAK: &[Pattern] = &[
    Pattern::new("{firstName}1337"),
    Pattern::new("{firstNameLeet}{birthYear}"),
    Pattern::new("{lastNameLeet}{favoriteNumber}"),
    Pattern::new("ILove{partnerName}{birthYear}"),
    Pattern::new("{hobby}4Life{birthYear}"),
    Pattern::new("{city}Dude{favoriteNumber}"),
    Pattern::new("{petName}Lover{birthYear}"),
    Pattern::new("{firstName}007{favoriteNumber}"),
];

/// All catalog groups in declaration order, with their names.
pub const GROUPS: &[(&str, &[Pattern])] = &[
    ("basic", BASIC),
    ("with_special_chars", WITH_SPECIAL_CHARS),
    ("with_caps", WITH_CAPS),
    ("complex", COMPLEX),
    ("leet_speak", LEET_SPEAK),
];

/// Unions catalog groups according to the options, in declaration order.
///
/// Basic and complex groups are always present; the rest join when their
/// option is set. No data-availability filtering happens here: a selected
/// pattern whose fields are missing simply expands to nothing downstream.
pub fn select_patterns(options: &GenerationOptions) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    patterns.extend_from_slice(BASIC);
    if options.include_special_chars {
        patterns.extend_from_slice(WITH_SPECIAL_CHARS);
    }
    if options.capitalize_first {
        patterns.extend_from_slice(WITH_CAPS);
    }
    patterns.extend_from_slice(COMPLEX);
    if options.include_numbers {
        patterns.extend_from_slice(LEET_SPEAK);
    }
    patterns
}
