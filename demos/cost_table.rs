//! Example: load a cost table from a tab-separated file.
//!
//! Run with:
//! `cargo run --example cost_table -- <path/to/table.tsv> <source> <target>`
//!
//! Lines are `char<TAB>cost` (insertion) or `from<TAB>to<TAB>cost`, where a
//! lone space stands for the empty symbol. A missing file falls back to unit
//! costs.

use std::env;

use weighted_levenshtein::{distance_weighted, load_cost_table};

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [path, source, target] = args.as_slice() else {
        eprintln!("usage: cost_table <table.tsv> <source> <target>");
        std::process::exit(2);
    };

    let table = load_cost_table(path);
    println!(
        "{} entries (default weight {}, zero cost {:?})",
        table.len(),
        table.default_weight(),
        table.zero_cost()
    );
    let mut entries: Vec<_> = table.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for ((from, to), cost) in entries {
        println!("  {from} -> {to}: {cost}");
    }
    println!(
        "{source:?} -> {target:?}: {}",
        distance_weighted(source, target, &table)
    );
}
