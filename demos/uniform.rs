//! Example: classic Levenshtein distance.
//!
//! Run with:
//! `cargo run --example uniform`

use weighted_levenshtein::distance_uniform;

fn main() {
    for (a, b) in [
        ("kitten", "sitting"),
        ("BANANAS", "BANANAS"),
        ("", "аэропорт"),
        ("аэрапор внук", "аэропорт внук"),
    ] {
        println!("{a:?} -> {b:?}: {}", distance_uniform(a, b));
    }
}
