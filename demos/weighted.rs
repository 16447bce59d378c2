//! Example: weighted and bounded distance with a hand-built cost table.
//!
//! Run with:
//! `cargo run --example weighted`

use weighted_levenshtein::{distance_report, distance_weighted, CostTable, CostError};

fn main() -> Result<(), CostError> {
    // Inserting is expensive, deleting cheap, substituting in between.
    let mut builder = CostTable::builder();
    for c in "ABNQS".chars() {
        builder = builder.insertion(c, 2.0)?.deletion(c, 1.0)?;
        for d in "ABNQS".chars().filter(|&d| d != c) {
            builder = builder.substitution(c, d, 2.5)?;
        }
    }
    let costs = builder.build();

    println!(
        "BANANAS -> BANANAQ: {}",
        distance_weighted("BANANAS", "BANANAQ", &costs)
    );

    let report = distance_report("BANANAS", "QQQQQQQ", &costs, Some(4.0));
    println!(
        "BANANAS -> QQQQQQQ (limit 4): {} after {} rows, pruned={}",
        report.distance, report.rows_evaluated, report.pruned
    );
    Ok(())
}
