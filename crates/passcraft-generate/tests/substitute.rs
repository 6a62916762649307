use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use passcraft_core::{Profile, UserRecord};
use passcraft_generate::expand;
use passcraft_patterns::{Pattern, SPECIAL_CHARACTERS};

fn record() -> UserRecord {
    UserRecord::from_profile(&Profile {
        first_name: Some("john".to_string()),
        last_name: Some("smith".to_string()),
        birth_date: Some("1990-05-15".to_string()),
        pet_name: Some("rex".to_string()),
        favorite_number: Some("7".to_string()),
        hobby: Some("chess".to_string()),
        city: Some("austin".to_string()),
        partner_name: None,
    })
    .expect("valid profile")
}

#[test]
fn full_substitution_yields_primary_plus_decorations() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let variations = expand(
        Pattern::new("{firstName}{birthYear}"),
        &record(),
        true,
        &mut rng,
    );

    assert_eq!(variations.len(), 5);
    assert_eq!(variations[0], "john1990");
    assert_eq!(variations[1], "7john1990");
    assert_eq!(variations[2], "john19907");
    // Decorations 3 and 4 wrap the primary in one special character each.
    for decorated in &variations[3..] {
        assert_eq!(decorated.chars().count(), "john1990".chars().count() + 1);
        assert!(decorated.contains("john1990"));
        let extra = decorated.chars().find(|c| SPECIAL_CHARACTERS.contains(c));
        assert!(extra.is_some(), "no special char in {decorated}");
    }
}

#[test]
fn number_suffix_is_skipped_when_primary_ends_with_it() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let variations = expand(
        Pattern::new("{firstName}{favoriteNumber}"),
        &record(),
        false,
        &mut rng,
    );

    assert_eq!(variations, vec!["john7".to_string(), "7john7".to_string()]);
}

// The web original would emit the half-filled string when one placeholder
// had no backing field; here any residual placeholder voids the whole
// expansion. Deliberate divergence.
#[test]
fn partially_resolved_pattern_is_rejected_entirely() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let variations = expand(
        Pattern::new("{firstName}{partnerName}{birthYear}"),
        &record(),
        true,
        &mut rng,
    );
    assert!(variations.is_empty());
}

#[test]
fn special_char_slot_without_special_chars_rejects_the_pattern() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let variations = expand(
        Pattern::new("{firstName}{specialChar}{petName}"),
        &record(),
        false,
        &mut rng,
    );
    assert!(variations.is_empty());
}

#[test]
fn special_char_slot_fills_with_one_catalog_character() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let variations = expand(
        Pattern::new("{firstName}{specialChar}{petName}"),
        &record(),
        true,
        &mut rng,
    );

    let primary = &variations[0];
    assert!(primary.starts_with("john"));
    assert!(primary.ends_with("rex"));
    let middle: Vec<char> = primary
        .chars()
        .skip("john".len())
        .take(primary.chars().count() - "johnrex".len())
        .collect();
    assert_eq!(middle.len(), 1);
    assert!(SPECIAL_CHARACTERS.contains(&middle[0]));
}

#[test]
fn record_without_referenced_fields_expands_to_nothing() {
    let empty = UserRecord::from_profile(&Profile::default()).expect("valid profile");
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let variations = expand(
        Pattern::new("{firstName}{birthYear}"),
        &empty,
        true,
        &mut rng,
    );
    assert!(variations.is_empty());
}

#[test]
fn no_variation_ever_leaks_braces() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let patterns = [
        Pattern::new("{firstName}{birthYear}"),
        Pattern::new("{firstName}{specialChar}{favoriteNumber}"),
        Pattern::new("ILove{partnerName}{birthYear}"),
        Pattern::new("{hobby}4Life{birthYear}"),
    ];
    for pattern in patterns {
        for variation in expand(pattern, &record(), true, &mut rng) {
            assert!(
                !variation.contains(['{', '}']),
                "placeholder leaked in {variation}"
            );
        }
    }
}
