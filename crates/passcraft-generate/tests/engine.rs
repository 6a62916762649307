use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use passcraft_core::{GenerationOptions, Profile, UserRecord};
use passcraft_generate::{generate_extra, Generator, MIN_CANDIDATE_LEN};

fn full_profile() -> Profile {
    Profile {
        first_name: Some("john".to_string()),
        last_name: Some("smith".to_string()),
        birth_date: Some("1990-05-15".to_string()),
        pet_name: Some("rex".to_string()),
        favorite_number: Some("7".to_string()),
        hobby: Some("chess".to_string()),
        city: Some("austin".to_string()),
        partner_name: Some("dana".to_string()),
    }
}

fn record(profile: &Profile) -> UserRecord {
    UserRecord::from_profile(profile).expect("valid profile")
}

fn options(special: bool, numbers: bool, caps: bool, count: usize) -> GenerationOptions {
    GenerationOptions {
        include_special_chars: special,
        include_numbers: numbers,
        capitalize_first: caps,
        desired_count: count,
    }
}

#[test]
fn output_is_unique_and_bounded() {
    let record = record(&full_profile());
    let generator = Generator::new(options(true, true, true, 25));
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let candidates = generator.generate(&record, &mut rng);

    assert!(candidates.len() <= 25);
    assert!(!candidates.is_empty());
    let unique: HashSet<_> = candidates.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(unique.len(), candidates.len(), "duplicate candidate emitted");
}

#[test]
fn output_never_contains_braces() {
    let record = record(&full_profile());
    let generator = Generator::new(options(true, true, true, 40));
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for candidate in generator.generate(&record, &mut rng) {
        assert!(
            !candidate.value.contains(['{', '}']),
            "placeholder leaked in {}",
            candidate.value
        );
    }
}

#[test]
fn include_numbers_guarantees_a_digit_everywhere() {
    let mut profile = full_profile();
    profile.favorite_number = None;
    let record = record(&profile);
    let generator = Generator::new(options(false, true, true, 20));
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let candidates = generator.generate(&record, &mut rng);
    assert!(!candidates.is_empty());
    for candidate in candidates {
        assert!(
            candidate.value.chars().any(|c| c.is_ascii_digit()),
            "no digit in {}",
            candidate.value
        );
    }
}

#[test]
fn sparse_record_candidates_all_trace_back_to_the_name() {
    let profile = Profile {
        first_name: Some("sam".to_string()),
        favorite_number: Some("7".to_string()),
        ..Profile::default()
    };
    let record = record(&profile);
    let generator = Generator::new(options(false, true, false, 3));
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    let candidates = generator.generate(&record, &mut rng);
    assert!(!candidates.is_empty());
    for candidate in candidates {
        let value = &candidate.value;
        assert!(
            value.contains("sam") || value.contains("Sam") || value.contains("54m"),
            "{value} does not mention the name"
        );
        assert!(
            value.chars().any(|c| c.is_ascii_digit()),
            "{value} has no digit"
        );
    }
}

#[test]
fn empty_record_produces_an_empty_list() {
    let record = record(&Profile::default());
    let generator = Generator::new(options(true, true, true, 15));
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    assert!(generator.generate(&record, &mut rng).is_empty());
}

#[test]
fn short_pattern_expansions_are_filtered_out() {
    // "al" + "7" style expansions all fall below the length floor, so the
    // only acceptable pattern output is longer material.
    let profile = Profile {
        first_name: Some("al".to_string()),
        last_name: Some("remington".to_string()),
        birth_date: Some("1990-05-15".to_string()),
        favorite_number: Some("7".to_string()),
        ..Profile::default()
    };
    let record = record(&profile);
    let generator = Generator::new(options(false, false, false, 5));
    let mut rng = ChaCha8Rng::seed_from_u64(13);

    let candidates = generator.generate(&record, &mut rng);
    assert!(!candidates.is_empty());
    for candidate in &candidates {
        assert!(
            candidate.value.chars().count() >= MIN_CANDIDATE_LEN,
            "{} is too short",
            candidate.value
        );
    }
    assert!(!candidates.iter().any(|c| c.value == "al7"));
}

#[test]
fn same_seed_reproduces_the_same_output() {
    let record = record(&full_profile());
    let generator = Generator::new(options(true, true, true, 20));

    let mut first_rng = ChaCha8Rng::seed_from_u64(77);
    let mut second_rng = ChaCha8Rng::seed_from_u64(77);

    let first = generator.generate(&record, &mut first_rng);
    let second = generator.generate(&record, &mut second_rng);
    assert_eq!(first, second);
}

#[test]
fn fallback_fills_when_patterns_cannot_reach_the_count() {
    // Two usable fields keep the pattern yield tiny, forcing a top-up.
    let profile = Profile {
        first_name: Some("amelia".to_string()),
        favorite_number: Some("42".to_string()),
        ..Profile::default()
    };
    let record = record(&profile);
    let generator = Generator::new(options(true, true, false, 30));
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let candidates = generator.generate(&record, &mut rng);
    assert!(candidates.len() > 5, "fallback did not top up");
    assert!(candidates.len() <= 30);
}

#[test]
fn fallback_with_no_fragments_returns_nothing() {
    let record = record(&Profile::default());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(generate_extra(&record, 50, true, true, &mut rng).is_empty());
}

#[test]
fn fallback_respects_the_requested_count() {
    let record = record(&full_profile());
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let extras = generate_extra(&record, 8, true, true, &mut rng);
    assert_eq!(extras.len(), 8);
    assert!(extras.iter().all(|extra| !extra.is_empty()));
}

#[test]
fn fallback_caps_fragment_take_at_pool_size() {
    let profile = Profile {
        first_name: Some("sam".to_string()),
        ..Profile::default()
    };
    let record = record(&profile);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let extras = generate_extra(&record, 10, false, false, &mut rng);
    assert_eq!(extras.len(), 10);
    for extra in extras {
        let lowered = extra.to_lowercase();
        assert_eq!(lowered, "sam", "unexpected combination {extra}");
    }
}

#[test]
fn strength_labels_match_the_standalone_scorer() {
    let record = record(&full_profile());
    let generator = Generator::new(options(true, true, true, 15));
    let mut rng = ChaCha8Rng::seed_from_u64(19);

    for candidate in generator.generate(&record, &mut rng) {
        assert_eq!(candidate.strength, passcraft_core::score(&candidate.value));
    }
}
