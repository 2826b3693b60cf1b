//! Loading, filtering, and de-duplicating the words passphrases are built from.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::config::Config;
use crate::{GeneratorError, GeneratorErrorRepr};

/// Characters which make a word unusable. Checked against the lowercased word.
///
/// `y` and `z` swap places between QWERTY and QWERTZ layouts; the rest are hard to type on many
/// keyboards.
pub static FORBIDDEN_CHARS: &[char] = &['y', 'z', 'ä', 'ö', 'ü', 'ß'];

static DEFAULT_WORDLIST: &str = include_str!("wordlist.txt");

/// Somewhere candidate words come from. Each source is plain text, one word per line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WordSource {
    /// The wordlist compiled into this crate.
    Embedded,
    Text(String),
    File(PathBuf),
}

impl WordSource {
    /// The sources a generator with this configuration draws from.
    ///
    /// An alternative list replaces everything else; otherwise the embedded list is used, plus the
    /// merge list if there is one.
    pub fn for_config(config: &Config) -> Vec<WordSource> {
        if let Some(alt_list) = config.alt_list.as_ref() {
            return vec![WordSource::File(alt_list.clone())];
        }
        let mut sources = vec![WordSource::Embedded];
        if let Some(merge_list) = config.merge_list.as_ref() {
            sources.push(WordSource::File(merge_list.clone()));
        }
        sources
    }

    /// Read the raw text of this source.
    pub fn load(&self) -> Result<String, GeneratorError> {
        match self {
            WordSource::Embedded => Ok(DEFAULT_WORDLIST.to_owned()),
            WordSource::Text(text) => Ok(text.clone()),
            WordSource::File(path) => fs::read_to_string(path).map_err(|source| {
                GeneratorErrorRepr::SourceUnavailable {
                    path: path.clone(),
                    source,
                }
                .into()
            }),
        }
    }
}

/// An immutable, de-duplicated set of candidate words.
///
/// Words keep their original casing. Two words are only duplicates if they are identical strings,
/// so `Haus` and `haus` are both kept.
#[derive(Clone, Debug)]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    /// Build a word set from raw wordlist texts.
    ///
    /// Every line of every text is a candidate; lines containing any of [`FORBIDDEN_CHARS`] (in
    /// either case) are dropped.
    pub fn prepare<S: AsRef<str>>(texts: &[S]) -> WordSet {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        let mut rejected = 0usize;
        let mut duplicates = 0usize;

        for text in texts {
            for line in text.as_ref().lines() {
                if line.to_lowercase().contains(FORBIDDEN_CHARS) {
                    rejected += 1;
                    continue;
                }
                if seen.insert(line) {
                    words.push(line.to_owned());
                } else {
                    duplicates += 1;
                }
            }
        }

        debug!(
            "prepared {} words ({} rejected for forbidden characters, {} duplicates)",
            words.len(),
            rejected,
            duplicates,
        );
        WordSet { words }
    }

    /// Load each source and prepare a word set from all of them.
    pub fn from_sources(sources: &[WordSource]) -> Result<WordSet, GeneratorError> {
        let texts = sources
            .iter()
            .map(WordSource::load)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(WordSet::prepare(&texts))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// The word at `index`. Indices are stable for the lifetime of the set, but carry no meaning
    /// beyond that.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn members(set: &WordSet) -> BTreeSet<&str> {
        set.iter().collect()
    }

    #[test]
    fn filters_and_deduplicates() {
        let texts = ["Haus\nBoot\nYacht\nZebra", "Auto\nÄpfel\nHaus"];
        let set = WordSet::prepare(&texts);
        assert_eq!(set.len(), 3);
        assert_eq!(members(&set), BTreeSet::from(["Auto", "Boot", "Haus"]));
    }

    #[test]
    fn deduplication_is_case_sensitive() {
        let set = WordSet::prepare(&["Haus\nhaus\nHaus"]);
        assert_eq!(members(&set), BTreeSet::from(["Haus", "haus"]));
    }

    #[test]
    fn forbidden_characters_anywhere_in_the_word() {
        let set = WordSet::prepare(&["Straße\nmaus\nkatze\nTYP\nGRÜN\nrot"]);
        assert_eq!(members(&set), BTreeSet::from(["maus", "rot"]));
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let set = WordSet::prepare(&["Haus\r\nBoot\r\n"]);
        assert_eq!(members(&set), BTreeSet::from(["Boot", "Haus"]));
        assert!(set.contains("Boot"));
        assert!(!set.contains("Boot\r"));
    }

    #[test]
    fn preparation_is_repeatable() {
        let texts = ["Haus\nBoot\nAuto", "Boot\nMond"];
        let first = WordSet::prepare(&texts);
        let second = WordSet::prepare(&texts);
        assert_eq!(members(&first), members(&second));
    }

    #[test]
    fn source_precedence() {
        let config = Config::default();
        assert_eq!(WordSource::for_config(&config), vec![WordSource::Embedded]);

        let config = Config {
            merge_list: Some(PathBuf::from("extra.txt")),
            ..Config::default()
        };
        assert_eq!(
            WordSource::for_config(&config),
            vec![
                WordSource::Embedded,
                WordSource::File(PathBuf::from("extra.txt"))
            ]
        );

        let config = Config {
            alt_list: Some(PathBuf::from("alt.txt")),
            merge_list: Some(PathBuf::from("extra.txt")),
            ..Config::default()
        };
        assert_eq!(
            WordSource::for_config(&config),
            vec![WordSource::File(PathBuf::from("alt.txt"))]
        );
    }

    #[test]
    fn embedded_list_is_clean() {
        let set = WordSet::from_sources(&[WordSource::Embedded]).unwrap();
        assert!(set.len() >= 100);
        let raw = WordSource::Embedded.load().unwrap();
        assert_eq!(set.len(), raw.lines().count());
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let sources = [WordSource::File(PathBuf::from(
            "/nonexistent/wordpass/wordlist.txt",
        ))];
        let err = WordSet::from_sources(&sources).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::SourceUnavailable);
        assert!(err.to_string().contains("/nonexistent/wordpass/wordlist.txt"));
    }
}
