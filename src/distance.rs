//! Public distance entry points.
//!
//! All functions decode their inputs into code points, take the fast paths
//! for equal or empty operands, and otherwise hand an
//! [`EditDistanceProblem`] to the [`RowEngine`](crate::engine::RowEngine)
//! through [`RowEngineBuilder`]. The shorter operand is
//! always placed on the row axis, reading the costs through [`Transposed`]
//! when that requires swapping the operands, so working memory stays at
//! `O(min(m, n))`.

use std::time::Instant;

use crate::builder::RowEngineBuilder;
use crate::costs::{Transposed, UniformCosts};
use crate::engine::RowOutcome;
use crate::problems::edit_distance::EditDistanceProblem;
use crate::traits::EditCosts;
use crate::utils::decode;

/// Distance plus the bookkeeping of how it was obtained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceReport {
    /// `min(true_distance, limit)`, or the true distance without a limit.
    pub distance: f64,
    /// Code points in the source.
    pub source_len: usize,
    /// Code points in the target.
    pub target_len: usize,
    /// DP rows computed; zero when a fast path answered.
    pub rows_evaluated: usize,
    /// True when the limit cut the row loop short.
    pub pruned: bool,
    /// True when the operands were swapped to iterate over the shorter one.
    pub transposed: bool,
}

/// Classic Levenshtein distance with unit costs.
///
/// ```
/// assert_eq!(weighted_levenshtein::distance_uniform("kitten", "sitting"), 3.0);
/// ```
pub fn distance_uniform(a: &str, b: &str) -> f64 {
    distance_report(a, b, &UniformCosts, None).distance
}

/// Minimum total cost to turn `a` into `b` under `costs`.
pub fn distance_weighted<C: EditCosts + ?Sized>(a: &str, b: &str, costs: &C) -> f64 {
    distance_report(a, b, costs, None).distance
}

/// Weighted distance capped at `limit`: returns `min(distance, limit)`.
///
/// Stops as soon as a DP row proves the distance cannot drop below `limit`.
/// Use [`distance_weighted`] when the exact value beyond the limit matters.
pub fn distance_weighted_bounded<C: EditCosts + ?Sized>(
    a: &str,
    b: &str,
    costs: &C,
    limit: f64,
) -> f64 {
    distance_report(a, b, costs, Some(limit)).distance
}

/// Compute a distance and describe how the engine got there.
pub fn distance_report<C: EditCosts + ?Sized>(
    a: &str,
    b: &str,
    costs: &C,
    limit: Option<f64>,
) -> DistanceReport {
    let start = Instant::now();
    let report = compute(a, b, costs, limit);
    tracing::debug!(
        distance = report.distance,
        source_len = report.source_len,
        target_len = report.target_len,
        rows = report.rows_evaluated,
        pruned = report.pruned,
        limit = ?limit,
        elapsed = ?start.elapsed(),
        "distance computed"
    );
    report
}

fn compute<C: EditCosts + ?Sized>(
    a: &str,
    b: &str,
    costs: &C,
    limit: Option<f64>,
) -> DistanceReport {
    let fast = |distance: f64, source_len: usize, target_len: usize| DistanceReport {
        distance: cap(distance, limit),
        source_len,
        target_len,
        rows_evaluated: 0,
        pruned: false,
        transposed: false,
    };

    if a == b {
        let len = a.chars().count();
        return fast(0.0, len, len);
    }
    if a.is_empty() {
        let (len, total) = sum_costs(b, |c| costs.insertion_cost(c));
        return fast(total, 0, len);
    }
    if b.is_empty() {
        let (len, total) = sum_costs(a, |c| costs.deletion_cost(c));
        return fast(total, len, 0);
    }

    let source = decode(a);
    let target = decode(b);
    let transposed = target.len() > source.len();
    let outcome = if transposed {
        run(
            EditDistanceProblem::new(&target, &source, Transposed(costs)),
            limit,
        )
    } else {
        run(EditDistanceProblem::new(&source, &target, costs), limit)
    };

    DistanceReport {
        distance: outcome.cost,
        source_len: source.len(),
        target_len: target.len(),
        rows_evaluated: outcome.rows_evaluated,
        pruned: outcome.pruned,
        transposed,
    }
}

fn run<C: EditCosts>(problem: EditDistanceProblem<'_, C>, limit: Option<f64>) -> RowOutcome {
    RowEngineBuilder::new(problem)
        .with_optional_limit(limit)
        .build()
        .run()
}

fn sum_costs(text: &str, cost: impl Fn(char) -> f64) -> (usize, f64) {
    text.chars()
        .fold((0, 0.0), |(len, total), c| (len + 1, total + cost(c)))
}

#[inline]
fn cap(distance: f64, limit: Option<f64>) -> f64 {
    match limit {
        Some(limit) => distance.min(limit),
        None => distance,
    }
}
