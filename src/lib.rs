//! Human-memorable passphrases: random dictionary words, joined by separator/digit blocks, with
//! configurable capitalization and a single transposition typo.

use std::io;
use std::path::PathBuf;

pub mod config;
pub mod password_generation;
pub mod wordlist;

pub use config::{CapsMode, Config, DigitRange, SeparatorPool};
pub use password_generation::{Generator, Passphrase};
pub use wordlist::{WordSet, WordSource};

/// The broad category of a [`GeneratorError`], for callers deciding whether to reconfigure and
/// retry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A configuration value was rejected.
    Validation,
    /// The prepared word set is smaller than the requested word count.
    InsufficientWords,
    /// A designated wordlist file could not be read.
    SourceUnavailable,
    /// The entropy source failed.
    RandomSource,
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct GeneratorError(GeneratorErrorRepr);

impl GeneratorError {
    pub fn kind(&self) -> ErrorKind {
        use GeneratorErrorRepr::*;

        match &self.0 {
            InvalidDigitCount(_)
            | InvalidDigitRangeFormat(_)
            | InvalidDigitRangeOrder { .. }
            | EmptySeparatorPool
            | InvalidWordCount(_)
            | InvalidTypoRate(_)
            | InvalidCapsMode(_) => ErrorKind::Validation,
            InsufficientWords { .. } => ErrorKind::InsufficientWords,
            SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            RandomSource(_) => ErrorKind::RandomSource,
        }
    }
}

impl From<GeneratorErrorRepr> for GeneratorError {
    fn from(err: GeneratorErrorRepr) -> GeneratorError {
        GeneratorError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum GeneratorErrorRepr {
    #[error("invalid digit count {0:?} (must be a whole number of at least 1)")]
    InvalidDigitCount(String),
    #[error("invalid digit range format {0:?}; use \"N\" or \"N-M\"")]
    InvalidDigitRangeFormat(String),
    #[error("invalid digit range {min}-{max} (min must be >= 1 and <= max)")]
    InvalidDigitRangeOrder { min: usize, max: usize },
    #[error("separator pool is empty")]
    EmptySeparatorPool,
    #[error("invalid word count {0} (must be at least 1)")]
    InvalidWordCount(usize),
    #[error("invalid typo rate {0} (must be between 0.0 and 1.0)")]
    InvalidTypoRate(f64),
    #[error("invalid capitalization mode {0:?}; use \"camel\", \"random\", or \"none\"")]
    InvalidCapsMode(String),
    #[error("not enough valid words found ({available}) to generate {requested} words")]
    InsufficientWords { available: usize, requested: usize },
    #[error("could not read wordlist {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("the random source failed: {0}")]
    RandomSource(#[source] rand::Error),
}
