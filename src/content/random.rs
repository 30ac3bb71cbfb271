//! Random sources
//!
//! Every draw in the content model goes through [`RandomSource`], so the
//! browser can feed it `Math.random`, the server a thread-local generator,
//! and tests a fixed sequence.

use super::error::{ContentError, ContentResult};

/// A source of uniformly distributed values in `[0, 1)`
pub trait RandomSource {
    /// Next value in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Map one draw onto `0..len`.
///
/// Each index owns an equal slice of `[0, 1)`. Values outside that interval
/// are clamped so a misbehaving source cannot index out of bounds.
pub fn pick_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> ContentResult<usize> {
    if len == 0 {
        return Err(ContentError::EmptyPool);
    }

    let unit = rng.next_unit();
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
    let index = (unit * len as f64) as usize;

    Ok(index.min(len - 1))
}

/// Pick one element uniformly from a slice
pub fn pick<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> ContentResult<&'a T> {
    let index = pick_index(rng, items.len())?;
    Ok(&items[index])
}

/// Deterministic source that replays a fixed list of values
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// Replay `values` in order, wrapping around at the end
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// The midpoints of `buckets` equal slices of `[0, 1)`, in order.
    ///
    /// Drawing `buckets` times hits every bucket exactly once.
    pub fn stepping(buckets: usize) -> Self {
        let n = buckets.max(1) as f64;
        Self::new((0..buckets.max(1)).map(|i| (i as f64 + 0.5) / n).collect())
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

/// Thread-local generator backed by `rand`
#[cfg(feature = "server")]
pub struct ThreadRandom(rand::rngs::ThreadRng);

#[cfg(feature = "server")]
impl ThreadRandom {
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

#[cfg(feature = "server")]
impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "server")]
impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        use rand::Rng;
        self.0.random::<f64>()
    }
}
