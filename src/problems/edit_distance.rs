//! Weighted Levenshtein distance as a rolling-row problem.
//!
//! This is the Wagner–Fischer recurrence with per-code-point costs:
//! - layer `i` consumes source code point `source[i]`,
//! - row cell `j` holds the cheapest way to turn `source[..i]` into
//!   `target[..j]`,
//! - each cell is the minimum of an insertion, a deletion, and a
//!   substitution (free on a match).

use crate::traits::{EditCosts, RowProblem};
use crate::utils::min3;

#[derive(Clone)]
pub struct EditDistanceProblem<'a, C> {
    pub source: &'a [char],
    pub target: &'a [char],
    pub costs: C,
}

impl<'a, C: EditCosts> EditDistanceProblem<'a, C> {
    pub fn new(source: &'a [char], target: &'a [char], costs: C) -> Self {
        Self {
            source,
            target,
            costs,
        }
    }

    fn m(&self) -> usize {
        self.source.len()
    }

    fn n(&self) -> usize {
        self.target.len()
    }

    #[inline]
    fn substitution(&self, a: char, b: char) -> f64 {
        if a == b {
            0.0
        } else {
            self.costs.substitution_cost(a, b)
        }
    }
}

impl<'a, C: EditCosts> RowProblem for EditDistanceProblem<'a, C> {
    fn num_layers(&self) -> usize {
        self.m()
    }

    fn row_len(&self) -> usize {
        self.n() + 1
    }

    fn init_row(&self, row: &mut [f64]) {
        // Row 0: build target[..j] from nothing.
        row[0] = 0.0;
        for (j, &c) in self.target.iter().enumerate() {
            row[j + 1] = row[j] + self.costs.insertion_cost(c);
        }
    }

    fn forward_step(&self, layer: usize, prev: &[f64], next: &mut [f64]) {
        let a = self.source[layer];
        let del = self.costs.deletion_cost(a);
        next[0] = prev[0] + del;

        for (j, &b) in self.target.iter().enumerate() {
            let ins = self.costs.insertion_cost(b);
            next[j + 1] = min3(
                next[j] + ins,
                prev[j + 1] + del,
                prev[j] + self.substitution(a, b),
            );
        }
    }

    fn extract_cost(&self, row: &[f64]) -> f64 {
        row.last().copied().unwrap_or(0.0)
    }
}

/// Full-table weighted edit distance.
///
/// Materializes the whole `(m+1) × (n+1)` matrix. Quadratic memory; meant as
/// a reference for checking the rolling-row engine on small inputs.
pub fn full_matrix_distance<C: EditCosts>(source: &[char], target: &[char], costs: &C) -> f64 {
    let m = source.len();
    let n = target.len();
    let mut dp = vec![vec![0.0f64; n + 1]; m + 1];

    for i in 1..=m {
        dp[i][0] = dp[i - 1][0] + costs.deletion_cost(source[i - 1]);
    }
    for j in 1..=n {
        dp[0][j] = dp[0][j - 1] + costs.insertion_cost(target[j - 1]);
    }
    for i in 1..=m {
        for j in 1..=n {
            let (a, b) = (source[i - 1], target[j - 1]);
            let sub = if a == b {
                0.0
            } else {
                costs.substitution_cost(a, b)
            };
            dp[i][j] = min3(
                dp[i][j - 1] + costs.insertion_cost(b),
                dp[i - 1][j] + costs.deletion_cost(a),
                dp[i - 1][j - 1] + sub,
            );
        }
    }
    dp[m][n]
}
