//! Word-pool passphrase generator.
//!
//! [`PassphraseGenerator`] folds a caller-supplied word collection into a
//! lowercase, duplicate-free pool and draws words from it using a borrowed
//! [`RandomSource`].
//!
//! # Concurrency
//!
//! The pool is immutable after construction and the only state touched per
//! call is the randomness source. The generator therefore adds no locking of
//! its own: it is `Send + Sync` exactly when `R: Sync`. Share it across
//! threads with a thread-safe source such as [`OsRandom`](crate::OsRandom) or
//! [`SharedRng`](crate::SharedRng); a `RefCell`-backed source keeps it on one
//! thread.

use std::collections::HashSet;
use std::fmt;

use crate::error::GeneratorError;
use crate::random::RandomSource;

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Selects words and passphrases from a normalized word pool.
pub struct PassphraseGenerator<'r, R: RandomSource + ?Sized> {
    pool: Box<[String]>,
    rng: &'r R,
}

impl<'r, R: RandomSource + ?Sized> PassphraseGenerator<'r, R> {
    /// Build a generator from `words`, drawing randomness from `rng`.
    ///
    /// Every word is lowercased and only the first occurrence of each
    /// lowercased form is kept. The order of the resulting pool is not part
    /// of the contract.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyPool`] if `words` yields nothing.
    pub fn new<I, S>(words: I, rng: &'r R) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut pool: Vec<String> = Vec::new();
        let mut input_words: usize = 0;

        for word in words {
            input_words = input_words.saturating_add(1);
            let folded = word.as_ref().to_lowercase();
            if seen.insert(folded.clone()) {
                pool.push(folded);
            }
        }

        if input_words == 0 {
            return Err(GeneratorError::EmptyPool);
        }
        // Folding cannot empty a non-empty input, but the pool must never be
        // empty past this point.
        if pool.is_empty() {
            return Err(GeneratorError::EmptyPool);
        }

        tracing::debug!(input_words, pool_size = pool.len(), "word pool built");

        Ok(Self {
            pool: pool.into_boxed_slice(),
            rng,
        })
    }

    /// Start a [`GeneratorBuilder`].
    #[must_use]
    pub const fn builder() -> GeneratorBuilder<'r, R> {
        GeneratorBuilder::new()
    }

    /// Returns one word chosen uniformly from the pool.
    ///
    /// Consumes exactly one draw from the randomness source.
    #[must_use]
    pub fn next_word(&self) -> &str {
        let len = self.pool.len();
        // A source returning an out-of-range index is folded back into the
        // pool instead of panicking.
        let index = self.rng.next_index(len).checked_rem(len).unwrap_or_default();
        self.pool[index].as_str()
    }

    /// Returns `count` randomly selected words.
    ///
    /// With `allow_duplicates` set, every draw is accepted. Otherwise a draw
    /// is rejected and redrawn while it already appears in the selection, so
    /// the result holds `count` pairwise-distinct words. Words appear in the
    /// order they were accepted. Each attempt, rejected or not, consumes one
    /// draw from the randomness source.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::InvalidSize`] if `count` is negative or does not fit
    ///   in `usize`
    /// - [`GeneratorError::InsufficientWords`] if `allow_duplicates` is false
    ///   and `count` exceeds the pool size
    pub fn next_words<C>(
        &self,
        count: C,
        allow_duplicates: bool,
    ) -> Result<Vec<&str>, GeneratorError>
    where
        C: TryInto<usize>,
    {
        let count: usize = count.try_into().map_err(|_| GeneratorError::InvalidSize)?;
        if !allow_duplicates && count > self.pool.len() {
            return Err(GeneratorError::InsufficientWords {
                requested: count,
                available: self.pool.len(),
            });
        }

        let mut selection: Vec<&str> = Vec::new();
        let mut draws: usize = 0;
        while selection.len() < count {
            let pick = self.next_word();
            draws = draws.saturating_add(1);
            if allow_duplicates || !selection.contains(&pick) {
                selection.push(pick);
            }
        }

        tracing::trace!(count, draws, allow_duplicates, "words selected");
        Ok(selection)
    }

    /// Returns `count` randomly selected words, duplicates allowed.
    ///
    /// Same as `next_words(count, true)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidSize`] if `count` is negative.
    pub fn next_phrase<C>(&self, count: C) -> Result<Vec<&str>, GeneratorError>
    where
        C: TryInto<usize>,
    {
        self.next_words(count, true)
    }

    /// Number of distinct words in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Always `false`: a constructed generator has a non-empty pool.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Read-only view of the normalized pool.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.pool
    }

    /// Case-insensitive pool membership.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let folded = word.to_lowercase();
        self.pool.iter().any(|w| *w == folded)
    }

    pub(crate) const fn random_source(&self) -> &'r R {
        self.rng
    }
}

impl<R: RandomSource + ?Sized> fmt::Debug for PassphraseGenerator<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassphraseGenerator")
            .field("pool_size", &self.pool.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Step-wise construction of a [`PassphraseGenerator`].
///
/// Unlike [`PassphraseGenerator::new`], either collaborator may be left out;
/// [`build`](Self::build) then reports which one is missing.
pub struct GeneratorBuilder<'r, R: RandomSource + ?Sized> {
    words: Option<Vec<String>>,
    rng: Option<&'r R>,
}

impl<'r, R: RandomSource + ?Sized> GeneratorBuilder<'r, R> {
    /// Empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: None,
            rng: None,
        }
    }

    /// Set the word collection.
    #[must_use]
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words = Some(words.into_iter().map(|w| w.as_ref().to_owned()).collect());
        self
    }

    /// Set the randomness source.
    #[must_use]
    pub fn random_source(mut self, rng: &'r R) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Build the generator.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::MissingRandomSource`] if no source was set
    /// - [`GeneratorError::MissingWords`] if no word collection was set
    /// - [`GeneratorError::EmptyPool`] if the word collection is empty
    pub fn build(self) -> Result<PassphraseGenerator<'r, R>, GeneratorError> {
        let rng = self.rng.ok_or(GeneratorError::MissingRandomSource)?;
        let words = self.words.ok_or(GeneratorError::MissingWords)?;
        PassphraseGenerator::new(words, rng)
    }
}

impl<R: RandomSource + ?Sized> Default for GeneratorBuilder<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource + ?Sized> fmt::Debug for GeneratorBuilder<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorBuilder")
            .field("words", &self.words.as_ref().map(Vec::len))
            .field("random_source", &self.rng.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
