//! Tree induction: impurity, majority voting, split search, and the
//! depth-first tree builder.
//!
//! - [`binary_entropy`], [`ClassCounts`]: Shannon impurity over two classes
//! - [`majority_vote`], [`Majority`]: dominant label and its proportion
//! - [`find_best_split`], [`SplitCandidate`]: exhaustive threshold scan
//! - [`TreeBuilder`], [`TreeParams`]: depth-first greedy construction
//! - [`TrainingLogger`], [`Verbosity`]: structured training output

mod builder;
mod entropy;
mod logger;
mod majority;
mod split;

pub use builder::{TreeBuilder, TreeParams};
pub use entropy::{ClassCounts, binary_entropy};
pub use logger::{TrainingLogger, Verbosity};
pub use majority::{Majority, majority_vote};
pub use split::{SplitCandidate, find_best_split, partition};
