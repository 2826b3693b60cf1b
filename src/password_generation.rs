//! Utilities for generating passphrases.

use std::fmt;

use log::debug;
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, Rng, SeedableRng};

use crate::config::{CapsMode, Config, DigitRange, SeparatorPool};
use crate::wordlist::{WordSet, WordSource};
use crate::{GeneratorError, GeneratorErrorRepr};

/// The most digits drawn as a single number; 10^18 still fits in a `u64`.
const DIGITS_PER_DRAW: usize = 18;

/// A generated passphrase. Its `Debug` output does not include the passphrase itself.
#[derive(Clone, Eq, PartialEq)]
pub struct Passphrase(String);

opaque_debug::implement!(Passphrase);

impl Passphrase {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates passphrases from a prepared word set.
///
/// A generator holds no state between calls beyond its words & configuration, so one generator can
/// produce any number of passphrases, from any number of threads.
#[derive(Debug)]
pub struct Generator {
    words: WordSet,
    config: Config,
}

impl Generator {
    /// Load the wordlists named by `config`, and prepare a generator from them.
    pub fn new(config: Config) -> Result<Generator, GeneratorError> {
        config.validate()?;
        let words = WordSet::from_sources(&WordSource::for_config(&config))?;
        Generator::with_words(config, words)
    }

    /// Create a generator from an already-prepared word set.
    ///
    /// Fails if there are fewer words than a single passphrase needs.
    pub fn with_words(config: Config, words: WordSet) -> Result<Generator, GeneratorError> {
        config.validate()?;
        if words.len() < config.word_count {
            return Err(GeneratorErrorRepr::InsufficientWords {
                available: words.len(),
                requested: config.word_count,
            }
            .into());
        }
        Ok(Generator { words, config })
    }

    /// The number of distinct words passphrases are drawn from.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a passphrase, using fresh entropy from the operating system.
    pub fn generate(&self) -> Result<Passphrase, GeneratorError> {
        let mut rng = StdRng::from_rng(OsRng).map_err(GeneratorErrorRepr::RandomSource)?;
        self.generate_with(&mut rng)
    }

    /// Generate a passphrase, drawing all randomness from `rng`.
    ///
    /// The digit range & separator pool are parsed here, so a bad value fails this call without
    /// affecting the generator.
    pub fn generate_with<R>(&self, rng: &mut R) -> Result<Passphrase, GeneratorError>
    where
        R: Rng + CryptoRng,
    {
        let digit_range = self.config.digit_range.parse::<DigitRange>()?;
        let separator_pool = SeparatorPool::parse(&self.config.separator_pool)?;

        let word_count = self.config.word_count;
        let mut chunks = Vec::with_capacity(word_count + self.config.separator_count);

        // At most one word gets a typo. If typos are enabled and none of the trials hit, the last
        // word gets one regardless.
        let mut typo_applied = false;
        for slot in 0..word_count {
            let mut word = self.random_word(rng).to_owned();
            if !typo_applied && self.config.typo_rate > 0.0 {
                let is_last = slot == word_count - 1;
                if rng.gen_bool(self.config.typo_rate) || is_last {
                    word = apply_typo_transposition(rng, &word);
                    typo_applied = true;
                }
            }
            chunks.push(apply_capitalization(rng, &word, self.config.caps));
        }

        for _ in 0..self.config.separator_count {
            let block = separator_block(rng, &separator_pool, digit_range);
            insert_chunk(rng, &mut chunks, block);
        }

        debug!(
            "generated a passphrase from {} words and {} separator blocks",
            word_count, self.config.separator_count,
        );
        Ok(Passphrase(chunks.concat()))
    }

    fn random_word<R: Rng>(&self, rng: &mut R) -> &str {
        // Construction guarantees at least `word_count` (>= 1) words.
        let index = rng.gen_range(0..self.words.len());
        self.words.get(index).unwrap_or_default()
    }
}

/// Swap two adjacent characters at a random position. Words shorter than two characters are
/// returned unchanged.
pub fn apply_typo_transposition<R: Rng>(rng: &mut R, word: &str) -> String {
    let mut chars = word.chars().collect::<Vec<_>>();
    if chars.len() < 2 {
        return word.to_owned();
    }
    let index = rng.gen_range(0..chars.len() - 1);
    chars.swap(index, index + 1);
    chars.into_iter().collect()
}

pub fn apply_capitalization<R: Rng>(rng: &mut R, word: &str, mode: CapsMode) -> String {
    match mode {
        CapsMode::Camel => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        CapsMode::Random => {
            let len = word.chars().count();
            if len == 0 {
                return String::new();
            }
            let target = rng.gen_range(0..len);
            let mut capitalized = String::with_capacity(word.len());
            for (index, ch) in word.chars().enumerate() {
                if index == target {
                    capitalized.extend(ch.to_uppercase());
                } else {
                    capitalized.push(ch);
                }
            }
            capitalized
        }
        CapsMode::None => word.to_owned(),
    }
}

/// Build one separator block: a separator, a zero-padded run of digits, and the same separator
/// again (e.g. `!0427!`).
pub fn separator_block<R: Rng>(rng: &mut R, pool: &SeparatorPool, digits: DigitRange) -> String {
    let separators = pool.chars();
    let separator = separators[rng.gen_range(0..separators.len())];
    let digit_count = if digits.min == digits.max {
        digits.min
    } else {
        rng.gen_range(digits.min..=digits.max)
    };
    let mut block = String::with_capacity(digit_count + 2 * separator.len_utf8());
    block.push(separator);
    block.push_str(&random_digits(rng, digit_count));
    block.push(separator);
    block
}

/// A number drawn uniformly from `0..10^count`, zero-padded to exactly `count` digits.
pub fn random_digits<R: Rng>(rng: &mut R, count: usize) -> String {
    let mut digits = String::with_capacity(count);
    let mut remaining = count;
    while remaining > 0 {
        let width = remaining.min(DIGITS_PER_DRAW);
        let value = rng.gen_range(0..10u64.pow(width as u32));
        digits.push_str(&format!("{value:0width$}"));
        remaining -= width;
    }
    digits
}

/// Insert `chunk` at a random position strictly between the first and last chunks, or at the end
/// if there is no such position.
fn insert_chunk<R: Rng>(rng: &mut R, chunks: &mut Vec<String>, chunk: String) {
    if chunks.len() < 2 {
        chunks.push(chunk);
        return;
    }
    let index = rng.gen_range(1..chunks.len());
    chunks.insert(index, chunk);
}
