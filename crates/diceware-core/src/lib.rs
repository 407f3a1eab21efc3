//! `diceware-core` — passphrase generation from a caller-supplied word pool.
//!
//! The crate owns no randomness and performs no I/O in its core: callers hand
//! a word collection and a [`RandomSource`] to [`PassphraseGenerator`], which
//! folds the words into a lowercase, duplicate-free pool and draws from it.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod random;

pub mod generator;

pub mod passphrase;

pub mod source;

pub use error::{ErrorKind, GeneratorError};
pub use generator::{GeneratorBuilder, PassphraseGenerator};
pub use passphrase::{Passphrase, PassphraseOptions, PassphraseSeparator, DEFAULT_WORD_COUNT};
pub use random::{OsRandom, RandomSource, ReplaySource, SharedRng};
pub use source::{json_table_values, parse_word_list, read_word_list, table_values};
