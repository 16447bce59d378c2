//! Cost models for weighted edit distance.
//!
//! A cost model answers three questions about code points: what it costs to
//! insert one, delete one, and replace one with another. Two models ship with
//! the crate:
//! - [`UniformCosts`]: every edit costs `1.0`, giving classic Levenshtein.
//! - [`CostTable`]: a flat map from an ordered [`Symbol`] pair to a cost, with a
//!   default weight for pairs that have no entry.
//!
//! Insertion and deletion are keyed with the [`Symbol::Empty`] marker:
//! inserting `c` is `(Empty, c)` and deleting `c` is `(c, Empty)`.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::traits::EditCosts;

/// Weight returned for any pair without an explicit entry.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// One side of a cost key: a code point or the empty marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Empty,
    Char(char),
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Empty => f.write_str("ε"),
            Symbol::Char(c) => write!(f, "{c:?}"),
        }
    }
}

/// Ordered `(from, to)` pair addressing one entry of a [`CostTable`].
pub type CostKey = (Symbol, Symbol);

#[derive(Debug, Error, PartialEq)]
pub enum CostError {
    #[error("cost for ({}, {}) must be finite and non-negative, got {cost}", .key.0, .key.1)]
    InvalidCost { key: CostKey, cost: f64 },

    #[error("default weight must be finite and non-negative, got {0}")]
    InvalidDefault(f64),

    #[error("a cost key needs at least one code point")]
    EmptyPair,
}

/// How a stored cost of exactly zero is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroCost {
    /// A zero entry is a free edit.
    #[default]
    Free,
    /// A zero entry is treated as missing and falls back to the default weight.
    ///
    /// Matches frequency tables where `0` was written for "no data".
    Unset,
}

/// Unit costs for every edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformCosts;

impl EditCosts for UniformCosts {
    #[inline]
    fn insertion_cost(&self, _c: char) -> f64 {
        1.0
    }

    #[inline]
    fn deletion_cost(&self, _c: char) -> f64 {
        1.0
    }

    #[inline]
    fn substitution_cost(&self, _from: char, _to: char) -> f64 {
        1.0
    }
}

/// Immutable table of per-symbol-pair costs with a default fallback.
///
/// Built once (by hand through [`CostTableBuilder`] or from a file through
/// [`crate::loader`]) and then only read, so a single table can back any
/// number of concurrent distance computations.
#[derive(Clone, Debug, PartialEq)]
pub struct CostTable {
    entries: HashMap<CostKey, f64>,
    default_weight: f64,
    zero_cost: ZeroCost,
}

impl Default for CostTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl CostTable {
    /// Table with no entries; every lookup returns [`DEFAULT_WEIGHT`].
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            default_weight: DEFAULT_WEIGHT,
            zero_cost: ZeroCost::Free,
        }
    }

    pub fn builder() -> CostTableBuilder {
        CostTableBuilder::new()
    }

    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    pub fn zero_cost(&self) -> ZeroCost {
        self.zero_cost
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw stored entry, without any fallback applied.
    pub fn get(&self, key: &CostKey) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Effective cost for `key`: the stored entry, or the default weight when
    /// there is none (or when it is zero under [`ZeroCost::Unset`]).
    pub fn cost(&self, key: &CostKey) -> f64 {
        match (self.entries.get(key), self.zero_cost) {
            (Some(&c), ZeroCost::Unset) if c == 0.0 => self.default_weight,
            (Some(&c), _) => c,
            (None, _) => self.default_weight,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CostKey, &f64)> {
        self.entries.iter()
    }
}

impl EditCosts for CostTable {
    #[inline]
    fn insertion_cost(&self, c: char) -> f64 {
        self.cost(&(Symbol::Empty, Symbol::Char(c)))
    }

    #[inline]
    fn deletion_cost(&self, c: char) -> f64 {
        self.cost(&(Symbol::Char(c), Symbol::Empty))
    }

    #[inline]
    fn substitution_cost(&self, from: char, to: char) -> f64 {
        self.cost(&(Symbol::Char(from), Symbol::Char(to)))
    }
}

/// Incremental construction of a [`CostTable`].
///
/// Setters validate eagerly; a later entry for the same key replaces the
/// earlier one.
#[derive(Clone, Debug)]
pub struct CostTableBuilder {
    entries: HashMap<CostKey, f64>,
    default_weight: f64,
    zero_cost: ZeroCost,
}

impl Default for CostTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CostTableBuilder {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            default_weight: DEFAULT_WEIGHT,
            zero_cost: ZeroCost::Free,
        }
    }

    pub fn default_weight(mut self, weight: f64) -> Result<Self, CostError> {
        if !is_valid_cost(weight) {
            return Err(CostError::InvalidDefault(weight));
        }
        self.default_weight = weight;
        Ok(self)
    }

    pub fn zero_cost(mut self, zero_cost: ZeroCost) -> Self {
        self.zero_cost = zero_cost;
        self
    }

    pub fn insertion(self, c: char, cost: f64) -> Result<Self, CostError> {
        self.entry((Symbol::Empty, Symbol::Char(c)), cost)
    }

    pub fn deletion(self, c: char, cost: f64) -> Result<Self, CostError> {
        self.entry((Symbol::Char(c), Symbol::Empty), cost)
    }

    pub fn substitution(self, from: char, to: char, cost: f64) -> Result<Self, CostError> {
        self.entry((Symbol::Char(from), Symbol::Char(to)), cost)
    }

    pub fn entry(mut self, key: CostKey, cost: f64) -> Result<Self, CostError> {
        self.set(key, cost)?;
        Ok(self)
    }

    /// In-place variant of [`entry`](Self::entry), for loops.
    pub fn set(&mut self, key: CostKey, cost: f64) -> Result<(), CostError> {
        if key == (Symbol::Empty, Symbol::Empty) {
            return Err(CostError::EmptyPair);
        }
        if !is_valid_cost(cost) {
            return Err(CostError::InvalidCost { key, cost });
        }
        self.entries.insert(key, cost);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> CostTable {
        CostTable {
            entries: self.entries,
            default_weight: self.default_weight,
            zero_cost: self.zero_cost,
        }
    }
}

#[inline]
fn is_valid_cost(cost: f64) -> bool {
    cost.is_finite() && cost >= 0.0
}

/// View of a cost model for the reversed edit direction.
///
/// Distance from `b` to `a` under `Transposed(costs)` equals the distance from
/// `a` to `b` under `costs`: every insertion becomes a deletion of the same
/// code point and every substitution `x -> y` becomes `y -> x`. The engine
/// uses this to put the shorter operand on the row axis without changing the
/// answer for asymmetric tables.
#[derive(Clone, Copy, Debug)]
pub struct Transposed<C>(pub C);

impl<C: EditCosts> EditCosts for Transposed<C> {
    #[inline]
    fn insertion_cost(&self, c: char) -> f64 {
        self.0.deletion_cost(c)
    }

    #[inline]
    fn deletion_cost(&self, c: char) -> f64 {
        self.0.insertion_cost(c)
    }

    #[inline]
    fn substitution_cost(&self, from: char, to: char) -> f64 {
        self.0.substitution_cost(to, from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_falls_back_to_default_weight() {
        let table = CostTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.insertion_cost('a'), 1.0);
        assert_eq!(table.deletion_cost('a'), 1.0);
        assert_eq!(table.substitution_cost('a', 'b'), 1.0);
    }

    #[test]
    fn lookups_use_empty_marker_for_insert_and_delete() {
        let table = CostTable::builder()
            .insertion('x', 2.0)
            .unwrap()
            .deletion('x', 0.5)
            .unwrap()
            .substitution('x', 'y', 3.0)
            .unwrap()
            .build();
        assert_eq!(table.len(), 3);
        assert_eq!(table.insertion_cost('x'), 2.0);
        assert_eq!(table.deletion_cost('x'), 0.5);
        assert_eq!(table.substitution_cost('x', 'y'), 3.0);
        // ordered pair: reverse direction is unset
        assert_eq!(table.substitution_cost('y', 'x'), 1.0);
        assert_eq!(table.get(&(Symbol::Empty, Symbol::Char('x'))), Some(2.0));
    }

    #[test]
    fn stored_zero_is_free_unless_marked_unset() {
        let free = CostTable::builder().deletion('q', 0.0).unwrap().build();
        assert_eq!(free.deletion_cost('q'), 0.0);

        let legacy = CostTable::builder()
            .zero_cost(ZeroCost::Unset)
            .deletion('q', 0.0)
            .unwrap()
            .build();
        assert_eq!(legacy.deletion_cost('q'), 1.0);
    }

    #[test]
    fn iter_lists_raw_entries_and_zero_policy_is_kept() {
        let table = CostTable::builder()
            .zero_cost(ZeroCost::Unset)
            .insertion('a', 0.0)
            .unwrap()
            .substitution('a', 'b', 2.0)
            .unwrap()
            .build();
        assert_eq!(table.zero_cost(), ZeroCost::Unset);
        assert_eq!(CostTable::empty().zero_cost(), ZeroCost::Free);

        let mut entries: Vec<(CostKey, f64)> = table.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            entries,
            vec![
                ((Symbol::Empty, Symbol::Char('a')), 0.0),
                ((Symbol::Char('a'), Symbol::Char('b')), 2.0),
            ]
        );
    }

    #[test]
    fn custom_default_weight() {
        let table = CostTable::builder().default_weight(0.25).unwrap().build();
        assert_eq!(table.default_weight(), 0.25);
        assert_eq!(table.insertion_cost('z'), 0.25);
    }

    #[test]
    fn rejects_invalid_costs() {
        let err = CostTable::builder().insertion('a', -1.0).unwrap_err();
        assert!(matches!(err, CostError::InvalidCost { cost, .. } if cost == -1.0));
        assert!(CostTable::builder().insertion('a', f64::NAN).is_err());
        assert!(CostTable::builder().deletion('a', f64::INFINITY).is_err());
        assert_eq!(
            CostTable::builder()
                .entry((Symbol::Empty, Symbol::Empty), 1.0)
                .unwrap_err(),
            CostError::EmptyPair
        );
        assert_eq!(
            CostTable::builder().default_weight(-0.5).unwrap_err(),
            CostError::InvalidDefault(-0.5)
        );
    }

    #[test]
    fn later_entry_replaces_earlier() {
        let mut builder = CostTableBuilder::new();
        builder.set(('a'.into(), 'b'.into()), 2.0).unwrap();
        builder.set(('a'.into(), 'b'.into()), 4.0).unwrap();
        assert_eq!(builder.len(), 1);
        assert_eq!(builder.build().substitution_cost('a', 'b'), 4.0);
    }

    #[test]
    fn transposed_swaps_roles() {
        let table = CostTable::builder()
            .insertion('a', 2.0)
            .unwrap()
            .deletion('a', 5.0)
            .unwrap()
            .substitution('a', 'b', 7.0)
            .unwrap()
            .build();
        let t = Transposed(&table);
        assert_eq!(t.insertion_cost('a'), 5.0);
        assert_eq!(t.deletion_cost('a'), 2.0);
        assert_eq!(t.substitution_cost('b', 'a'), 7.0);
    }

    #[test]
    fn error_messages_name_the_key() {
        let err = CostTable::builder().substitution('a', 'b', -2.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cost for ('a', 'b') must be finite and non-negative, got -2"
        );
    }
}
