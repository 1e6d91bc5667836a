//! Uniform random sources.
//!
//! The sampler never reaches for a global generator: every call takes a
//! [`UniformSource`] that yields values in `[0, 1)`. Any [`rand::RngCore`]
//! generator is a source, [`SequenceSource`] replays a fixed script for
//! reproducible runs, and [`from_fn`] adapts a closure.

use rand::{Rng, RngCore};

/// Source of uniformly distributed values in `[0, 1)`.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> UniformSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed sequence of values, wrapping around at the end.
///
/// ```
/// use monte_carlo_pi::source::{SequenceSource, UniformSource};
///
/// let mut source = SequenceSource::new(vec![0.25, 0.5]);
/// assert_eq!(source.next_unit(), 0.25);
/// assert_eq!(source.next_unit(), 0.5);
/// assert_eq!(source.next_unit(), 0.25);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceSource {
    /// # Panics
    ///
    /// Panics if `values` is empty or any value lies outside `[0, 1)`.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "Sequence should not be empty");
        for (i, &v) in values.iter().enumerate() {
            assert!(
                (0.0..1.0).contains(&v),
                "Value #{} should be in [0, 1), got {}",
                i,
                v
            );
        }
        Self { values, pos: 0 }
    }

    /// Number of values drawn so far (including wrap-arounds).
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl UniformSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

/// Source backed by a closure.
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

/// Wraps a closure returning values in `[0, 1)` into a [`UniformSource`].
///
/// The range is the caller's responsibility; it is only checked in debug builds.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut() -> f64,
{
    FromFn(f)
}

impl<F> UniformSource for FromFn<F>
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        let v = (self.0)();
        debug_assert!((0.0..1.0).contains(&v), "Value should be in [0, 1), got {}", v);
        v
    }
}
