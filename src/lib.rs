//! Weighted Levenshtein distance
//!
//! This crate computes the minimum total cost of single-code-point
//! insertions, deletions, and substitutions needed to turn one string into
//! another, where every edit may carry its own cost.
//!
//! ## Core idea
//! 1. Costs come from an [`EditCosts`] model: [`UniformCosts`] for classic
//!    Levenshtein, or a [`CostTable`] keyed by ordered symbol pairs.
//! 2. The Wagner–Fischer recurrence is expressed as a [`RowProblem`].
//! 3. [`RowEngine`] evaluates it with two rolling rows, optionally stopping
//!    as soon as a row proves the distance has reached a caller's limit.
//!
//! Working memory is `O(min(m, n))` for operands of `m` and `n` code points.
//!
//! ## Quick start
//! ```
//! use weighted_levenshtein::{distance_uniform, distance_weighted, CostTable};
//!
//! assert_eq!(distance_uniform("kitten", "sitting"), 3.0);
//!
//! let costs = CostTable::builder()
//!     .insertion('Q', 2.0)
//!     .unwrap()
//!     .substitution('S', 'Q', 2.5)
//!     .unwrap()
//!     .build();
//! assert_eq!(distance_weighted("BANANAS", "BANANAQ", &costs), 2.5);
//! ```
//!
//! ## Bounded distance
//! [`distance_weighted_bounded`] returns `min(distance, limit)` and skips the
//! remaining rows once every cell of a row is at or above `limit`. It answers
//! "is the distance below this threshold" without paying for the full table.
//!
//! Cost tables can be read from tab-separated frequency files with
//! [`loader::load_cost_table`].

pub mod builder;
pub mod costs;
pub mod distance;
pub mod engine;
pub mod loader;
pub mod problems;
pub mod traits;
pub mod utils;

pub use crate::builder::RowEngineBuilder;
pub use crate::costs::{
    CostError, CostTable, CostTableBuilder, Symbol, UniformCosts, ZeroCost, DEFAULT_WEIGHT,
};
pub use crate::distance::{
    distance_report, distance_uniform, distance_weighted, distance_weighted_bounded,
    DistanceReport,
};
pub use crate::engine::{RowEngine, RowOutcome};
pub use crate::loader::{load_cost_table, try_load_cost_table};
pub use crate::traits::{EditCosts, RowProblem};
