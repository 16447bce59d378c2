//! Generic rolling-row DP engine.
//!
//! The engine drives any [`RowProblem`] layer by layer while keeping exactly
//! two rows alive: the previous row and the row under construction. After
//! each layer the two buffers trade roles through [`std::mem::swap`], so no
//! row is allocated past the first two and no row is overwritten before its
//! successor has been fully computed.
//!
//! With a limit configured the engine also tracks each row's minimum. Costs
//! only grow along any path from the origin, so once a whole row sits at or
//! above the limit the final answer must too; the engine then stops and
//! reports the limit itself.

use crate::traits::RowProblem;
use crate::utils::row_min;

/// Result of one engine run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowOutcome {
    /// Final cost, already capped at the limit when one was set.
    pub cost: f64,
    /// Number of rows computed by `forward_step` (row 0 not included).
    pub rows_evaluated: usize,
    /// True when the run stopped before the last layer because of the limit.
    pub pruned: bool,
}

/// Rolling-row DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use weighted_levenshtein::costs::UniformCosts;
/// use weighted_levenshtein::problems::edit_distance::EditDistanceProblem;
/// use weighted_levenshtein::RowEngine;
///
/// let s: Vec<char> = "kitten".chars().collect();
/// let t: Vec<char> = "sitting".chars().collect();
/// let outcome = RowEngine::new(EditDistanceProblem::new(&s, &t, UniformCosts)).run();
/// assert_eq!(outcome.cost, 3.0);
/// assert_eq!(outcome.rows_evaluated, 6);
/// ```
pub struct RowEngine<P: RowProblem> {
    problem: P,
    limit: Option<f64>,
}

impl<P: RowProblem> RowEngine<P> {
    /// Create an engine without a limit.
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            limit: None,
        }
    }

    /// Create an engine that stops once the answer provably reaches `limit`.
    ///
    /// A NaN limit never triggers and behaves like no limit.
    pub fn with_limit(problem: P, limit: f64) -> Self {
        Self {
            problem,
            limit: Some(limit),
        }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Return the configured limit, if any.
    pub fn limit(&self) -> Option<f64> {
        self.limit
    }

    /// Run the recurrence to completion, or until the limit is crossed.
    pub fn run(&self) -> RowOutcome {
        match self.limit {
            Some(limit) => self.run_bounded(limit),
            None => self.run_unbounded(),
        }
    }

    fn run_unbounded(&self) -> RowOutcome {
        let span = tracing::trace_span!("row_engine", layers = self.problem.num_layers());
        let _enter = span.enter();

        let (mut prev, mut next) = self.alloc_rows();
        let layers = self.problem.num_layers();
        for layer in 0..layers {
            self.problem.forward_step(layer, &prev, &mut next);
            std::mem::swap(&mut prev, &mut next);
        }

        RowOutcome {
            cost: self.problem.extract_cost(&prev),
            rows_evaluated: layers,
            pruned: false,
        }
    }

    /// Run with early exit: the returned cost is `min(true_cost, limit)`.
    pub fn run_bounded(&self, limit: f64) -> RowOutcome {
        let span = tracing::trace_span!(
            "row_engine_bounded",
            layers = self.problem.num_layers(),
            limit
        );
        let _enter = span.enter();

        let (mut prev, mut next) = self.alloc_rows();
        let layers = self.problem.num_layers();
        for layer in 0..layers {
            self.problem.forward_step(layer, &prev, &mut next);
            let floor = row_min(&next);
            if floor >= limit {
                tracing::trace!(layer, floor, "row minimum reached limit");
                return RowOutcome {
                    cost: limit,
                    rows_evaluated: layer + 1,
                    pruned: layer + 1 < layers,
                };
            }
            std::mem::swap(&mut prev, &mut next);
        }

        RowOutcome {
            cost: self.problem.extract_cost(&prev).min(limit),
            rows_evaluated: layers,
            pruned: false,
        }
    }

    fn alloc_rows(&self) -> (Vec<f64>, Vec<f64>) {
        let width = self.problem.row_len();
        let mut prev = vec![0.0; width];
        self.problem.init_row(&mut prev);
        (prev, vec![0.0; width])
    }
}
