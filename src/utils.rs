//! Common utilities used across the crate.
//!
//! Provides the parallelism flag passed through prediction components and
//! a helper for running a closure inside a sized rayon thread pool.

use rayon::prelude::*;

// =============================================================================
// Parallelism Configuration
// =============================================================================

/// Whether parallel execution is allowed.
///
/// This is a simple boolean flag passed through prediction components.
/// When `Parallel`, components may use `rayon` parallel iterators.
/// When `Sequential`, components must use sequential iteration.
///
/// The actual thread pool is set up at the model API level via `n_threads`.
/// Components don't manage thread pools - they just respect this flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parallelism {
    Sequential,
    Parallel,
}

impl Parallelism {
    /// Create from thread count semantics.
    ///
    /// - 0 = auto (parallel if the rayon pool has multiple threads)
    /// - 1 = sequential
    /// - >1 = parallel
    #[inline]
    pub fn from_threads(n_threads: usize) -> Self {
        if n_threads == 1 || (n_threads == 0 && rayon::current_num_threads() == 1) {
            Parallelism::Sequential
        } else {
            Parallelism::Parallel
        }
    }

    /// Returns `true` if parallel execution is allowed.
    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(self, Parallelism::Parallel)
    }

    /// Run `f` over every item, in parallel when allowed.
    ///
    /// Results must be aggregated by position by the closure itself (e.g.
    /// writing through a per-item mutable reference); the sequential and
    /// parallel paths are then guaranteed to produce identical output.
    pub fn maybe_par_for_each<I, T, F>(self, items: I, f: F)
    where
        I: IntoIterator<Item = T> + IntoParallelIterator<Item = T>,
        T: Send,
        F: Fn(T) + Send + Sync,
    {
        match self {
            Parallelism::Sequential => items.into_iter().for_each(f),
            Parallelism::Parallel => items.into_par_iter().for_each(f),
        }
    }
}

/// Run a closure inside a rayon thread pool with `n_threads` threads.
///
/// - 0 = use the ambient pool (auto parallelism)
/// - 1 = run sequentially without a pool
/// - >1 = build a dedicated pool of that size
///
/// If a dedicated pool cannot be built, falls back to the ambient pool.
pub fn run_with_threads<R, F>(n_threads: usize, f: F) -> R
where
    F: FnOnce(Parallelism) -> R + Send,
    R: Send,
{
    match n_threads {
        0 => f(Parallelism::from_threads(0)),
        1 => f(Parallelism::Sequential),
        n => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(|| f(Parallelism::Parallel)),
            Err(_) => f(Parallelism::from_threads(0)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_threads_semantics() {
        assert_eq!(Parallelism::from_threads(1), Parallelism::Sequential);
        assert_eq!(Parallelism::from_threads(4), Parallelism::Parallel);
    }

    #[test]
    fn maybe_par_for_each_by_position() {
        let input: Vec<usize> = (0..64).collect();
        let mut sequential = vec![0usize; 64];
        let mut parallel = vec![0usize; 64];

        Parallelism::Sequential
            .maybe_par_for_each(sequential.iter_mut().zip(&input).collect::<Vec<_>>(), |(out, &x)| {
                *out = x * 2;
            });
        Parallelism::Parallel
            .maybe_par_for_each(parallel.iter_mut().zip(&input).collect::<Vec<_>>(), |(out, &x)| {
                *out = x * 2;
            });

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn run_with_threads_returns_closure_result() {
        let value = run_with_threads(2, |parallelism| {
            assert!(parallelism.is_parallel());
            42
        });
        assert_eq!(value, 42);
    }
}
