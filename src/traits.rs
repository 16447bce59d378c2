//! Core trait definitions for rolling-row edit-distance programs.
//!
//! Two seams separate the pieces of the crate:
//! - [`EditCosts`] is the read-only cost model consulted by the recurrence.
//! - [`RowProblem`] describes a layered DP whose frontier is a single row of
//!   `f64` values; [`RowEngine`](crate::engine::RowEngine) drives it while
//!   keeping only two rows alive.
//!
//! Keeping the recurrence behind [`RowProblem`] lets the engine own buffer
//! management and early termination, while problem instances only describe
//! how row `i + 1` follows from row `i`.

/// Per-code-point edit costs.
///
/// Implementations must be pure lookups: the engine may call them any number
/// of times, in any order, and several computations may share one model.
/// All returned costs must be finite and non-negative.
pub trait EditCosts {
    /// Cost of inserting `c` into the source.
    fn insertion_cost(&self, c: char) -> f64;

    /// Cost of deleting `c` from the source.
    fn deletion_cost(&self, c: char) -> f64;

    /// Cost of replacing `from` with `to`.
    ///
    /// Never called with `from == to`; a match is always free.
    fn substitution_cost(&self, from: char, to: char) -> f64;
}

impl<C: EditCosts + ?Sized> EditCosts for &C {
    #[inline]
    fn insertion_cost(&self, c: char) -> f64 {
        (**self).insertion_cost(c)
    }

    #[inline]
    fn deletion_cost(&self, c: char) -> f64 {
        (**self).deletion_cost(c)
    }

    #[inline]
    fn substitution_cost(&self, from: char, to: char) -> f64 {
        (**self).substitution_cost(from, to)
    }
}

/// A layered dynamic program with a one-row frontier.
///
/// Semantics:
/// - There are `T = num_layers()` steps.
/// - Row 0 is written by [`init_row`](RowProblem::init_row).
/// - `forward_step(i, prev, next)` writes row `i + 1` into `next` using only
///   `prev` (row `i`) and fixed problem data.
/// - After `T` steps the answer is read from the last row with
///   [`extract_cost`](RowProblem::extract_cost).
///
/// Every row has exactly `row_len()` cells and every cell is non-negative,
/// and no cell of row `i + 1` is smaller than the minimum of row `i`. The
/// engine relies on the latter to stop early once a bound is crossed.
pub trait RowProblem {
    /// Number of DP layers `T`.
    fn num_layers(&self) -> usize;

    /// Width of every row.
    fn row_len(&self) -> usize;

    /// Write row 0 into `row` (which has `row_len()` cells).
    fn init_row(&self, row: &mut [f64]);

    /// Compute row `layer + 1` from row `layer`.
    ///
    /// `prev` and `next` never alias; `next` holds stale values from an
    /// earlier layer and must be fully overwritten.
    fn forward_step(&self, layer: usize, prev: &[f64], next: &mut [f64]);

    /// Read the objective from the final row.
    fn extract_cost(&self, row: &[f64]) -> f64;
}
