mod logging;

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{info, warn};

use passcraft_core::{score, Error as CoreError, GenerationOptions, Profile, UserRecord};
use passcraft_eval::{evaluate, render_text_report};
use passcraft_generate::Generator;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile file: {0}")]
    ProfileFile(#[from] toml::de::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "passcraft",
    version,
    about = "Shows how guessable personal-info passwords are by generating them"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate candidate passwords from personal facts.
    Generate(GenerateArgs),
    /// Label strings with the heuristic strength scorer.
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// TOML profile file with the personal facts.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// First name (overrides the profile file).
    #[arg(long)]
    first_name: Option<String>,
    /// Last name (overrides the profile file).
    #[arg(long)]
    last_name: Option<String>,
    /// Birth date, e.g. 1990-05-15 (overrides the profile file).
    #[arg(long)]
    birth_date: Option<String>,
    /// Pet name (overrides the profile file).
    #[arg(long)]
    pet_name: Option<String>,
    /// Favorite number (overrides the profile file).
    #[arg(long)]
    favorite_number: Option<String>,
    /// Hobby (overrides the profile file).
    #[arg(long)]
    hobby: Option<String>,
    /// City (overrides the profile file).
    #[arg(long)]
    city: Option<String>,
    /// Partner name (overrides the profile file).
    #[arg(long)]
    partner_name: Option<String>,
    /// Number of candidates to produce.
    #[arg(long, default_value_t = 10)]
    count: usize,
    /// Skip special-character patterns and decorations.
    #[arg(long, default_value_t = false)]
    no_special: bool,
    /// Do not force a digit into every candidate.
    #[arg(long, default_value_t = false)]
    no_numbers: bool,
    /// Skip capitalized pattern variants.
    #[arg(long, default_value_t = false)]
    no_caps: bool,
    /// RNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Write the text report to this file.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// Stdout format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Strings to label.
    #[arg(value_name = "PASSWORD", required = true)]
    passwords: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<(), CliError> {
    logging::init().map_err(CliError::Logging)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Score(args) => run_score(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let profile = build_profile(&args)?;
    let record = UserRecord::from_profile(&profile)?;
    if record.is_empty() {
        warn!("profile has no usable fields, output will be empty");
    }

    let options = GenerationOptions {
        include_special_chars: !args.no_special,
        include_numbers: !args.no_numbers,
        capitalize_first: !args.no_caps,
        desired_count: args.count,
    };
    options.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    info!(seed, count = options.desired_count, "generating candidates");

    let generator = Generator::new(options);
    let candidates = generator.generate(&record, &mut rng);
    let report = evaluate(&candidates);

    match args.format {
        OutputFormat::Text => {
            if report.candidates.is_empty() {
                println!("No passwords could be generated with the provided information.");
                println!("Try adding more personal facts or adjusting the options.");
            } else {
                for (index, entry) in report.candidates.iter().enumerate() {
                    println!("{:2}. {} [{}]", index + 1, entry.value, entry.strength);
                }
                println!();
                println!(
                    "{} generated: {} strong, {} medium, {} weak",
                    report.total, report.counts.strong, report.counts.medium, report.counts.weak
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if let Some(path) = args.out {
        fs::write(&path, render_text_report(&record, &report))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    for password in &args.passwords {
        println!("{password} [{}]", score(password));
    }
    Ok(())
}

/// Loads the profile file (when given) and applies flag overrides.
fn build_profile(args: &GenerateArgs) -> Result<Profile, CliError> {
    let mut profile = match &args.input {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => Profile::default(),
    };

    if args.first_name.is_some() {
        profile.first_name = args.first_name.clone();
    }
    if args.last_name.is_some() {
        profile.last_name = args.last_name.clone();
    }
    if args.birth_date.is_some() {
        profile.birth_date = args.birth_date.clone();
    }
    if args.pet_name.is_some() {
        profile.pet_name = args.pet_name.clone();
    }
    if args.favorite_number.is_some() {
        profile.favorite_number = args.favorite_number.clone();
    }
    if args.hobby.is_some() {
        profile.hobby = args.hobby.clone();
    }
    if args.city.is_some() {
        profile.city = args.city.clone();
    }
    if args.partner_name.is_some() {
        profile.partner_name = args.partner_name.clone();
    }

    Ok(profile)
}
