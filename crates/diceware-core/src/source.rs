//! Word-list loading.
//!
//! Helpers that turn common word-list shapes into the plain word collection
//! [`PassphraseGenerator::new`] expects:
//! - [`parse_word_list`] — one word per line, diceware roll numbers and
//!   trailing punctuation stripped
//! - [`read_word_list`] — the same, from a file
//! - [`table_values`] / [`json_table_values`] — values of a key/value table,
//!   keys ignored

use std::fs;
use std::path::Path;

use crate::error::GeneratorError;
use crate::generator::PassphraseGenerator;
use crate::random::RandomSource;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns the last run of word characters on `line`, ignoring anything
/// non-word that trails it.
fn final_word(line: &str) -> Option<&str> {
    let trimmed = line.trim_end_matches(|c: char| !is_word_char(c));
    trimmed
        .rsplit(|c: char| !is_word_char(c))
        .next()
        .filter(|w| !w.is_empty())
}

/// Parse a word list with one entry per line.
///
/// Blank lines and lines without any word character are skipped. Of each
/// remaining line only the final word is kept, so `"11111\tabacus"` yields
/// `abacus` and `"apple,"` yields `apple`.
#[must_use]
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(final_word)
        .map(str::to_owned)
        .collect()
}

/// Read and parse a word list file.
///
/// # Errors
///
/// Returns [`GeneratorError::Io`] if the file cannot be read.
pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<String>, GeneratorError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words = parse_word_list(&text);
    tracing::debug!(path = %path.display(), words = words.len(), "word list read");
    Ok(words)
}

/// Collect the values of a key/value table. Keys are ignored.
#[must_use]
pub fn table_values<I, K, V>(table: I) -> Vec<String>
where
    I: IntoIterator<Item = (K, V)>,
    V: Into<String>,
{
    table.into_iter().map(|(_, value)| value.into()).collect()
}

/// Collect the values of a JSON object whose values are all strings.
///
/// # Errors
///
/// Returns [`GeneratorError::WordSource`] if `json` is not an object of
/// strings.
pub fn json_table_values(json: &str) -> Result<Vec<String>, GeneratorError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| GeneratorError::WordSource(e.to_string()))?;
    let serde_json::Value::Object(table) = value else {
        return Err(GeneratorError::WordSource(
            "expected a JSON object".to_string(),
        ));
    };
    table
        .into_iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(word) => Ok(word),
            _ => Err(GeneratorError::WordSource(format!(
                "value for key '{key}' is not a string"
            ))),
        })
        .collect()
}

impl<'r, R: RandomSource + ?Sized> PassphraseGenerator<'r, R> {
    /// Build a generator from a word list file.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::Io`] if the file cannot be read,
    /// [`GeneratorError::EmptyPool`] if it holds no words.
    pub fn from_path(path: impl AsRef<Path>, rng: &'r R) -> Result<Self, GeneratorError> {
        Self::new(read_word_list(path)?, rng)
    }

    /// Build a generator from the values of a key/value table.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::EmptyPool`] if the table is empty.
    pub fn from_table<I, K, V>(table: I, rng: &'r R) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = (K, V)>,
        V: Into<String>,
    {
        Self::new(table_values(table), rng)
    }
}
