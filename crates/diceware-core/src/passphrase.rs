//! Passphrase assembly on top of [`PassphraseGenerator`].
//!
//! Selected words are joined with a [`PassphraseSeparator`], optionally
//! capitalized, and optionally followed by one random digit. The result is a
//! [`Passphrase`], which zeroizes its buffer on drop and never prints itself.

use std::fmt;
use std::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::GeneratorError;
use crate::generator::PassphraseGenerator;
use crate::random::RandomSource;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default number of words in a generated passphrase.
pub const DEFAULT_WORD_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// What goes between two words of a passphrase.
///
/// Serialized and parsed by its lowercase name (`"hyphen"`, `"none"`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassphraseSeparator {
    /// `-`
    #[default]
    Hyphen,
    /// ` `
    Space,
    /// `.`
    Dot,
    /// `_`
    Underscore,
    /// Words run together.
    None,
}

impl PassphraseSeparator {
    /// Every separator, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Hyphen,
        Self::Space,
        Self::Dot,
        Self::Underscore,
        Self::None,
    ];

    /// The character inserted between words, if any.
    #[must_use]
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Hyphen => Some('-'),
            Self::Space => Some(' '),
            Self::Dot => Some('.'),
            Self::Underscore => Some('_'),
            Self::None => None,
        }
    }

    /// Name accepted by [`FromStr`] and used in JSON options.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hyphen => "hyphen",
            Self::Space => "space",
            Self::Dot => "dot",
            Self::Underscore => "underscore",
            Self::None => "none",
        }
    }

    const fn encoded_len(self) -> usize {
        match self.as_char() {
            Some(c) => c.len_utf8(),
            None => 0,
        }
    }
}

impl fmt::Display for PassphraseSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PassphraseSeparator {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sep| sep.name() == s)
            .ok_or_else(|| GeneratorError::UnknownSeparator(s.to_string()))
    }
}

/// How a passphrase is selected and rendered.
///
/// Every field has a default, so a partial JSON document is enough.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassphraseOptions {
    /// Number of words to select.
    pub word_count: usize,
    /// Whether the same word may appear more than once.
    pub allow_duplicates: bool,
    /// Separator between words.
    pub separator: PassphraseSeparator,
    /// Capitalize the first letter of each word.
    pub capitalize: bool,
    /// Append a random digit (0-9) to the end.
    pub append_digit: bool,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            allow_duplicates: false,
            separator: PassphraseSeparator::default(),
            capitalize: false,
            append_digit: false,
        }
    }
}

impl PassphraseOptions {
    /// Parse options from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Options`] if `json` is malformed or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, GeneratorError> {
        serde_json::from_str(json).map_err(|e| GeneratorError::Options(e.to_string()))
    }
}

/// A rendered passphrase.
///
/// The buffer is zeroized on drop. `Debug` is masked to prevent accidental
/// logging.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Passphrase {
    value: String,
    word_count: usize,
}

impl Passphrase {
    /// Expose the passphrase text.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.value
    }

    /// Number of words the passphrase was assembled from.
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passphrase(***)")
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

impl<R: RandomSource + ?Sized> PassphraseGenerator<'_, R> {
    /// Select words per `options` and render them into a [`Passphrase`].
    ///
    /// The trailing digit, when requested, is drawn from the same randomness
    /// source as the words.
    ///
    /// # Errors
    ///
    /// Same as [`next_words`](Self::next_words).
    pub fn generate(&self, options: &PassphraseOptions) -> Result<Passphrase, GeneratorError> {
        let words = self.next_words(options.word_count, options.allow_duplicates)?;
        let separator = options.separator;

        // The buffer is sized exactly so that it never reallocates: a grown
        // String frees its old allocation without zeroizing it.
        let separators = words.len().saturating_sub(1);
        let capacity = words
            .iter()
            .map(|w| rendered_len(w, options.capitalize))
            .fold(usize::from(options.append_digit), usize::saturating_add)
            .saturating_add(separator.encoded_len().saturating_mul(separators));
        let mut value = String::with_capacity(capacity);

        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                if let Some(c) = separator.as_char() {
                    value.push(c);
                }
            }
            if options.capitalize {
                push_capitalized(&mut value, word);
            } else {
                value.push_str(word);
            }
        }

        if options.append_digit {
            let digit = self
                .random_source()
                .next_index(10)
                .checked_rem(10)
                .and_then(|d| u32::try_from(d).ok())
                .and_then(|d| char::from_digit(d, 10))
                .unwrap_or('0');
            value.push(digit);
        }

        Ok(Passphrase {
            value,
            word_count: words.len(),
        })
    }
}

/// Byte length of `word` once rendered, capitalization included.
///
/// Uppercasing can lengthen a character (`ŉ` becomes `ʼN`), so the first
/// character is measured after the mapping.
fn rendered_len(word: &str, capitalize: bool) -> usize {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if capitalize => first
            .to_uppercase()
            .map(char::len_utf8)
            .fold(chars.as_str().len(), usize::saturating_add),
        _ => word.len(),
    }
}

/// Push `word` with its first character uppercased.
fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
