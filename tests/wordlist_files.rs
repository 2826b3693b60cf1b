use std::io::Write;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

use wordpass::{CapsMode, Config, ErrorKind, Generator, WordSet, WordSource};

fn wordlist_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn words_only(word_count: usize) -> Config {
    Config {
        word_count,
        separator_count: 0,
        typo_rate: 0.0,
        caps: CapsMode::None,
        ..Config::default()
    }
}

#[test]
fn alt_list_replaces_the_builtin_list() {
    let file = wordlist_file("Haus\nBoot\nYacht\nZebra\nAuto\nÄpfel\nHaus\n");
    let config = Config {
        alt_list: Some(file.path().to_owned()),
        merge_list: Some(PathBuf::from("/nonexistent/merge.txt")),
        ..words_only(3)
    };
    let generator = Generator::new(config).unwrap();
    assert_eq!(generator.word_count(), 3);

    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let passphrase = generator.generate_with(&mut rng).unwrap();
        let mut rest = passphrase.as_str();
        while !rest.is_empty() {
            let word = ["Haus", "Boot", "Auto"]
                .into_iter()
                .find(|w| rest.starts_with(w))
                .unwrap_or_else(|| panic!("unexpected word in {}", passphrase.as_str()));
            rest = &rest[word.len()..];
        }
    }
}

#[test]
fn merge_list_adds_to_the_builtin_list() {
    let builtin = WordSet::from_sources(&[WordSource::Embedded]).unwrap();
    let file = wordlist_file("Quarkspeise\r\nMorgenrot\r\nzucker\r\n");
    let config = Config {
        merge_list: Some(file.path().to_owned()),
        ..words_only(4)
    };
    let generator = Generator::new(config).unwrap();
    assert_eq!(generator.word_count(), builtin.len() + 2);

    let merged = WordSet::from_sources(&WordSource::for_config(generator.config())).unwrap();
    assert!(merged.contains("Quarkspeise"));
    assert!(merged.contains("Morgenrot"));
    assert!(!merged.contains("zucker"));
}

#[test]
fn unreadable_list_fails_construction() {
    let config = Config {
        alt_list: Some(PathBuf::from("/nonexistent/wordpass/alt.txt")),
        ..Config::default()
    };
    let err = Generator::new(config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
}

#[test]
fn filtered_list_too_small_for_word_count() {
    let file = wordlist_file("Haus\nBoot\nYacht\nZebra\nAuto\nÄpfel\nHaus\n");
    let config = Config {
        alt_list: Some(file.path().to_owned()),
        ..words_only(10)
    };
    let err = Generator::new(config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InsufficientWords);
}

#[test]
fn generators_can_be_shared_between_threads() {
    let generator = Generator::new(Config::default()).unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..10 {
                    assert!(!generator.generate().unwrap().as_str().is_empty());
                }
            });
        }
    });
}
