//! Generator configuration, and parsing of the textual options it carries.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{GeneratorError, GeneratorErrorRepr};

/// Separators used when the configured pool string is empty.
pub static DEFAULT_SEPARATORS: &[char] = &['+', '-', '_', '!'];

/// Settings for a [`crate::Generator`].
///
/// The digit range and separator pool are kept as the text the user supplied; they are parsed on
/// every generation, so a malformed value fails that call rather than construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub word_count: usize,
    pub separator_count: usize,
    pub separator_pool: String,
    pub digit_range: String,
    /// Probability of a typo per word; `0.0` disables typos entirely.
    pub typo_rate: f64,
    /// Use only this wordlist, ignoring the embedded one and `merge_list`.
    pub alt_list: Option<PathBuf>,
    /// Add the words of this list to the embedded one.
    pub merge_list: Option<PathBuf>,
    pub caps: CapsMode,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            word_count: 4,
            separator_count: 1,
            separator_pool: String::from("!"),
            digit_range: String::from("4"),
            typo_rate: 0.33,
            alt_list: None,
            merge_list: None,
            caps: CapsMode::Camel,
            verbose: false,
        }
    }
}

impl Config {
    /// Check the values that must hold for the lifetime of a generator.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.word_count < 1 {
            return Err(GeneratorErrorRepr::InvalidWordCount(self.word_count).into());
        }
        if !(0.0..=1.0).contains(&self.typo_rate) {
            // Also rejects NaN.
            return Err(GeneratorErrorRepr::InvalidTypoRate(self.typo_rate).into());
        }
        Ok(())
    }
}

/// How each word of a passphrase is capitalized.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CapsMode {
    /// Uppercase the first character.
    #[default]
    Camel,
    /// Uppercase one character, chosen uniformly at random.
    Random,
    /// Leave words as they appear in the wordlist.
    None,
}

impl FromStr for CapsMode {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<CapsMode, GeneratorError> {
        match s.to_lowercase().as_str() {
            "camel" => Ok(CapsMode::Camel),
            "random" => Ok(CapsMode::Random),
            "none" => Ok(CapsMode::None),
            _ => Err(GeneratorErrorRepr::InvalidCapsMode(s.to_owned()).into()),
        }
    }
}

impl fmt::Display for CapsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CapsMode::Camel => "camel",
            CapsMode::Random => "random",
            CapsMode::None => "none",
        };
        f.write_str(name)
    }
}

/// An inclusive range for the number of digits in a separator block.
///
/// Parsed from `"N"` (exactly N digits) or `"N-M"` (between N and M digits).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitRange {
    pub min: usize,
    pub max: usize,
}

impl FromStr for DigitRange {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<DigitRange, GeneratorError> {
        let parts = s.split('-').collect::<Vec<_>>();
        match parts[..] {
            [exact] => {
                let count = exact
                    .parse::<usize>()
                    .map_err(|_| GeneratorErrorRepr::InvalidDigitCount(exact.to_owned()))?;
                if count < 1 {
                    return Err(GeneratorErrorRepr::InvalidDigitCount(exact.to_owned()).into());
                }
                Ok(DigitRange {
                    min: count,
                    max: count,
                })
            }
            [min, max] => {
                let (min, max) = match (min.parse::<usize>(), max.parse::<usize>()) {
                    (Ok(min), Ok(max)) => (min, max),
                    _ => {
                        return Err(GeneratorErrorRepr::InvalidDigitRangeFormat(s.to_owned()).into())
                    }
                };
                if min < 1 || min > max {
                    return Err(GeneratorErrorRepr::InvalidDigitRangeOrder { min, max }.into());
                }
                Ok(DigitRange { min, max })
            }
            _ => Err(GeneratorErrorRepr::InvalidDigitRangeFormat(s.to_owned()).into()),
        }
    }
}

impl fmt::Display for DigitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// The characters a separator block may be built from.
///
/// Repeated characters are kept, and are proportionally more likely to be drawn.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SeparatorPool(Vec<char>);

impl SeparatorPool {
    /// Split a pool string into its characters; an empty string selects [`DEFAULT_SEPARATORS`].
    pub fn parse(s: &str) -> Result<SeparatorPool, GeneratorError> {
        if s.is_empty() {
            SeparatorPool::from_chars(DEFAULT_SEPARATORS.to_vec())
        } else {
            SeparatorPool::from_chars(s.chars().collect())
        }
    }

    pub fn from_chars(chars: Vec<char>) -> Result<SeparatorPool, GeneratorError> {
        if chars.is_empty() {
            return Err(GeneratorErrorRepr::EmptySeparatorPool.into());
        }
        Ok(SeparatorPool(chars))
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }
}
