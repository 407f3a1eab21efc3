#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! End-to-end scenarios for the public generator API.

use std::cell::RefCell;
use std::collections::HashMap;

use diceware_core::{
    json_table_values, parse_word_list, ErrorKind, GeneratorBuilder, GeneratorError, OsRandom,
    PassphraseGenerator, PassphraseOptions, PassphraseSeparator, ReplaySource, SharedRng,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Pool `red, green, blue` with indices `0, 2, 1, 0` yields three distinct words.
#[test]
fn three_colours_without_duplicates() {
    let rng = ReplaySource::new(&[0, 2, 1, 0]);
    let generator = PassphraseGenerator::new(["red", "green", "blue"], &rng).unwrap();
    assert_eq!(generator.next_words(3, false).unwrap(), ["red", "blue", "green"]);
}

/// A fourth distinct word cannot exist in a three-word pool.
#[test]
fn four_colours_without_duplicates_rejected() {
    let rng = ReplaySource::new(&[0, 2, 1, 0]);
    let generator = PassphraseGenerator::new(["red", "green", "blue"], &rng).unwrap();
    let err = generator.next_words(4, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

/// Single-word pool: repetition works, distinctness cannot.
#[test]
fn single_word_pool() {
    let generator = PassphraseGenerator::new(["a"], &OsRandom).unwrap();
    assert_eq!(generator.next_phrase(5).unwrap(), ["a"; 5]);
    let err = generator.next_words(2, false).unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::InsufficientWords {
            requested: 2,
            available: 1
        }
    ));
}

/// Mixed-case duplicates fold into a single lowercase entry.
#[test]
fn case_folding() {
    let generator = PassphraseGenerator::new(["Apple", "apple", "APPLE"], &OsRandom).unwrap();
    assert_eq!(generator.len(), 1);
    assert_eq!(generator.next_word(), "apple");
}

/// Absent collaborators are reported as null references.
#[test]
fn missing_collaborators() {
    let err = GeneratorBuilder::<OsRandom>::new().build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullReference);

    let err = GeneratorBuilder::<OsRandom>::new()
        .words(["x"])
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullReference);

    let err = GeneratorBuilder::new()
        .random_source(&OsRandom)
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullReference);
}

/// An empty collection is an invalid argument.
#[test]
fn empty_collection() {
    let err = PassphraseGenerator::new(Vec::<&str>::new(), &OsRandom).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

/// Single-threaded `RefCell` sources work through the same API.
#[test]
fn refcell_source() {
    let rng = RefCell::new(StdRng::seed_from_u64(2024));
    let generator = PassphraseGenerator::new(["one", "two", "three", "four"], &rng).unwrap();
    let words = generator.next_words(4, false).unwrap();
    let mut sorted = words.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, ["four", "one", "three", "two"]);
}

/// Word list text through to a rendered passphrase.
#[test]
fn word_list_to_passphrase() {
    let list = "11111\tAbacus\n11112\tabdomen\n11113\tabide,\n\n11114\tABACUS\n";
    let words = parse_word_list(list);
    let rng = ReplaySource::new(&[2, 0, 1, 3]);
    let generator = PassphraseGenerator::new(words, &rng).unwrap();
    assert_eq!(generator.len(), 3);

    let options = PassphraseOptions {
        word_count: 3,
        separator: PassphraseSeparator::Space,
        capitalize: true,
        append_digit: true,
        ..PassphraseOptions::default()
    };
    let passphrase = generator.generate(&options).unwrap();
    assert_eq!(passphrase.expose(), "Abide Abacus Abdomen3");
}

/// Options loaded from JSON drive generation.
#[test]
fn json_options_and_table() {
    let words = json_table_values(r#"{"k1": "North", "k2": "south", "k3": "east", "k4": "west"}"#)
        .unwrap();
    let rng = SharedRng::new(StdRng::seed_from_u64(8));
    let generator = PassphraseGenerator::new(words, &rng).unwrap();
    let options = PassphraseOptions::from_json(r#"{"wordCount": 4, "separator": "underscore"}"#)
        .unwrap();
    let passphrase = generator.generate(&options).unwrap();
    let mut parts: Vec<&str> = passphrase.expose().split('_').collect();
    parts.sort_unstable();
    assert_eq!(parts, ["east", "north", "south", "west"]);
}

/// Table-backed construction ignores keys.
#[test]
fn table_construction() {
    let table: HashMap<String, String> = [("greeting", "Hello"), ("farewell", "bye")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let generator = PassphraseGenerator::from_table(table, &OsRandom).unwrap();
    assert!(generator.contains("hello"));
    assert!(generator.contains("BYE"));
    assert!(!generator.contains("greeting"));
}

/// A generator over a `Sync` source can be shared between threads.
#[test]
fn concurrent_selection() {
    let rng = OsRandom;
    let generator = PassphraseGenerator::new(["a", "b", "c", "d", "e"], &rng).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| generator.next_words(5, false).unwrap().len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 5);
        }
    });
}
