use std::path::PathBuf;
use std::process;

use clap::Parser;
use console::style;
use log::warn;

use wordpass::{CapsMode, Config, Generator, Passphrase};

mod clipboard;
mod table;

/// Generate human-friendly passphrases: random words, separated by blocks of digits.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Number of words.
    #[arg(short = 'w', long = "words", default_value_t = 4)]
    word_count: usize,
    /// Number of separator blocks.
    #[arg(short = 's', long = "separators", default_value_t = 1)]
    separator_count: usize,
    /// Allowed separator characters (e.g. '+-_!'); empty selects '+-_!'.
    #[arg(long = "sep", default_value = "!")]
    separator_pool: String,
    /// Digit count per block (e.g. '4' or '3-6').
    #[arg(long = "d-range", default_value = "4")]
    digit_range: String,
    /// Probability (0.0-1.0) of a typo per word.
    #[arg(long, default_value_t = 0.33)]
    typo_rate: f64,
    /// Alternative wordlist file (ignores the built-in list).
    #[arg(long = "altlist")]
    alt_list: Option<String>,
    /// Additional wordlist file (merged with the built-in list).
    #[arg(long = "mergelist")]
    merge_list: Option<String>,
    /// Number of passphrases to generate.
    #[arg(short = 'n', long = "count", default_value_t = 1)]
    count: usize,
    /// Copy the first generated passphrase to the clipboard.
    #[arg(short = 'c', long = "copy")]
    copy: bool,
    /// Capitalization mode: camel, random, or none.
    #[arg(long, default_value_t = CapsMode::Camel)]
    caps: CapsMode,
    /// Verbose output.
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            word_count: self.word_count,
            separator_count: self.separator_count,
            separator_pool: self.separator_pool.clone(),
            digit_range: self.digit_range.clone(),
            typo_rate: self.typo_rate,
            alt_list: non_empty_path(self.alt_list.as_ref()),
            merge_list: non_empty_path(self.merge_list.as_ref()),
            caps: self.caps,
            verbose: self.verbose,
        }
    }
}

/// An empty `--altlist ''` means "no list", same as leaving the flag out.
fn non_empty_path(path: Option<&String>) -> Option<PathBuf> {
    path.filter(|p| !p.is_empty()).map(PathBuf::from)
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.config();
    let generator = Generator::new(config).map_err(ProgError::Init)?;

    if args.verbose {
        eprintln!("{}", style("Starting wordpass...").bold());
        table::display_settings(&generator, std::io::stderr())?;
        eprintln!("Loaded {} valid words.", generator.word_count());
        eprintln!("{}", table::RULE);
    }

    let mut first: Option<Passphrase> = None;
    for _ in 0..args.count.max(1) {
        let passphrase = generator.generate().map_err(ProgError::Generate)?;
        println!("{}", passphrase);
        first.get_or_insert(passphrase);
    }

    if args.verbose {
        eprintln!("{}", table::RULE);
    }

    if args.copy {
        if let Some(passphrase) = first {
            match clipboard::send_to_clipboard(passphrase.as_str().as_bytes()) {
                Ok(()) => eprintln!("Copied first passphrase to the clipboard."),
                Err(err) => warn!("failed to copy to the clipboard: {err:#}"),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err}", style("Error:").red().bold());
        process::exit(1);
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("failed to initialize the generator: {0}")]
    Init(#[source] wordpass::GeneratorError),
    #[error("failed to generate a passphrase: {0}")]
    Generate(#[source] wordpass::GeneratorError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}
