//! Randomness sources for word selection.
//!
//! The generator never owns or seeds its randomness. Callers hand it anything
//! implementing [`RandomSource`]; a few adapters over `rand` are provided:
//!
//! - [`OsRandom`] — stateless, backed by the OS CSPRNG, `Sync`
//! - [`SharedRng`] — any `RngCore` behind a `Mutex`, `Sync`
//! - `RefCell<R>` — any `RngCore`, single-threaded only
//! - [`ReplaySource`] — replays fixed indices, for deterministic tests

use std::cell::{Cell, RefCell};
use std::sync::{Mutex, PoisonError};

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

/// A source of uniformly distributed indices.
///
/// `next_index` takes `&self` so that a source which is safe for concurrent
/// use can be shared across threads through a plain reference. Sources with
/// internal state use interior mutability.
pub trait RandomSource {
    /// Returns an integer uniformly distributed over `[0, bound)`.
    ///
    /// Callers must pass `bound > 0`.
    fn next_index(&self, bound: usize) -> usize;
}

/// OS-backed CSPRNG source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_index(&self, bound: usize) -> usize {
        OsRng.gen_range(0..bound)
    }
}

/// Thread-safe wrapper around any [`RngCore`] generator.
///
/// Useful for seeded generators (`StdRng::seed_from_u64`) that must be shared
/// between threads.
#[derive(Debug, Default)]
pub struct SharedRng<R> {
    inner: Mutex<R>,
}

impl<R: RngCore> SharedRng<R> {
    /// Wrap `rng` for shared use.
    pub const fn new(rng: R) -> Self {
        Self {
            inner: Mutex::new(rng),
        }
    }

    /// Unwrap the inner generator.
    pub fn into_inner(self) -> R {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: RngCore> RandomSource for SharedRng<R> {
    fn next_index(&self, bound: usize) -> usize {
        // A panic while holding the lock cannot leave an RNG in a state that
        // matters to us, so poisoning is ignored.
        let mut rng = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..bound)
    }
}

impl<R: RngCore> RandomSource for RefCell<R> {
    fn next_index(&self, bound: usize) -> usize {
        self.borrow_mut().gen_range(0..bound)
    }
}

/// Replays a fixed index sequence, wrapping around at the end.
///
/// Not random at all: meant for reproducing a selection exactly. Indices are
/// returned as given, whatever `bound` is. An empty sequence always yields 0.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    indices: Vec<usize>,
    draws: Cell<usize>,
}

impl ReplaySource {
    /// Replay `indices` in order, forever.
    #[must_use]
    pub fn new(indices: &[usize]) -> Self {
        Self {
            indices: indices.to_vec(),
            draws: Cell::new(0),
        }
    }

    /// Number of indices handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws.get()
    }
}

impl RandomSource for ReplaySource {
    fn next_index(&self, _bound: usize) -> usize {
        let draw = self.draws.get();
        self.draws.set(draw.saturating_add(1));
        draw.checked_rem(self.indices.len())
            .and_then(|i| self.indices.get(i))
            .copied()
            .unwrap_or_default()
    }
}
