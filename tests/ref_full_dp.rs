use proptest::prelude::*;
use weighted_levenshtein::problems::edit_distance::full_matrix_distance;
use weighted_levenshtein::{
    distance_uniform, distance_weighted, CostTable, CostTableBuilder, Symbol, UniformCosts,
};

const ALPHABET: [char; 3] = ['a', 'b', 'c'];

fn symbol(idx: usize) -> Symbol {
    ALPHABET.get(idx).map_or(Symbol::Empty, |&c| Symbol::Char(c))
}

fn table_from(entries: &[(usize, usize, f64)], default_weight: f64) -> CostTable {
    let mut builder = CostTableBuilder::new().default_weight(default_weight).unwrap();
    for &(from, to, cost) in entries {
        // (Empty, Empty) is rejected; skipping it is fine here
        let _ = builder.set((symbol(from), symbol(to)), cost);
    }
    builder.build()
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn uniform_matches_full_dp(a in "[abc]{0,10}", b in "[abc]{0,10}") {
        let expected = full_matrix_distance(&chars(&a), &chars(&b), &UniformCosts);
        prop_assert_eq!(distance_uniform(&a, &b), expected);
    }

    #[test]
    fn uniform_is_symmetric(a in "\\PC{0,8}", b in "\\PC{0,8}") {
        prop_assert_eq!(distance_uniform(&a, &b), distance_uniform(&b, &a));
    }

    #[test]
    fn self_distance_is_zero(a in "\\PC{0,16}", entries in proptest::collection::vec((0usize..4, 0usize..4, 0.0f64..5.0), 0..12)) {
        let table = table_from(&entries, 1.0);
        prop_assert_eq!(distance_uniform(&a, &a), 0.0);
        prop_assert_eq!(distance_weighted(&a, &a, &table), 0.0);
    }

    #[test]
    fn empty_source_is_code_point_count(b in "\\PC{0,16}") {
        let count = b.chars().count() as f64;
        prop_assert_eq!(distance_uniform("", &b), count);
        prop_assert_eq!(distance_uniform(&b, ""), count);
    }

    #[test]
    fn weighted_matches_full_dp(
        a in "[abc]{0,9}",
        b in "[abc]{0,9}",
        entries in proptest::collection::vec((0usize..4, 0usize..4, 0.0f64..5.0), 0..12),
        default_weight in 0.0f64..3.0,
    ) {
        let table = table_from(&entries, default_weight);
        let expected = full_matrix_distance(&chars(&a), &chars(&b), &table);
        let got = distance_weighted(&a, &b, &table);
        prop_assert!(close(got, expected), "{} -> {}: got {}, expected {}", a, b, got, expected);
    }

    #[test]
    fn empty_table_matches_uniform(a in "[a-e]{0,10}", b in "[a-e]{0,10}") {
        prop_assert_eq!(distance_weighted(&a, &b, &CostTable::empty()), distance_uniform(&a, &b));
    }

    #[test]
    fn triangle_inequality_uniform(a in "[ab]{0,6}", b in "[ab]{0,6}", c in "[ab]{0,6}") {
        let ab = distance_uniform(&a, &b);
        let bc = distance_uniform(&b, &c);
        let ac = distance_uniform(&a, &c);
        prop_assert!(ac <= ab + bc);
    }
}
