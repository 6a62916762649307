//! Generates a candidate list for a hardcoded profile and prints it.
//!
//! Run with `cargo run -p passcraft-generate --example generate_list`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use passcraft_core::{GenerationOptions, Profile, UserRecord};
use passcraft_generate::Generator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let profile = Profile {
        first_name: Some("john".to_string()),
        last_name: Some("smith".to_string()),
        birth_date: Some("1990-05-15".to_string()),
        pet_name: Some("rex".to_string()),
        favorite_number: Some("7".to_string()),
        hobby: Some("chess".to_string()),
        city: Some("austin".to_string()),
        partner_name: None,
    };
    let record = UserRecord::from_profile(&profile)?;

    let generator = Generator::new(GenerationOptions::default());
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for (index, candidate) in generator.generate(&record, &mut rng).iter().enumerate() {
        println!("{:2}. {} [{}]", index + 1, candidate.value, candidate.strength);
    }

    Ok(())
}
