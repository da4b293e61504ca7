use rand::Rng;

/// A trait for random sources used during identifier obfuscation.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// # Example
///
/// ```
/// use snipvault::RandSource;
///
/// struct FirstCandidate;
/// impl RandSource for FirstCandidate {
///     fn index(&self, _bound: usize) -> usize {
///         0
///     }
/// }
///
/// let rng = FirstCandidate;
/// assert_eq!(rng.index(5), 0);
/// ```
pub trait RandSource {
    /// Returns a uniformly distributed index in `0..bound`.
    ///
    /// Implementations may assume `bound` is nonzero.
    fn index(&self, bound: usize) -> usize;
}

/// A [`RandSource`] backed by the thread-local RNG (`rand::rng()`).
///
/// Fast, automatically reseeded, and contention-free: each call draws from the
/// calling thread's own generator, so no RNG state is shared across request
/// handlers.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn index(&self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}
