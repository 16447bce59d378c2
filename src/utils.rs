//! Assorted utilities shared by the engine and problem instances.

/// Minimum of three costs.
#[inline]
pub fn min3(a: f64, b: f64, c: f64) -> f64 {
    let ab = if a < b { a } else { b };
    if ab < c {
        ab
    } else {
        c
    }
}

/// Smallest value in a row, or `+inf` for an empty row.
#[inline]
pub fn row_min(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Decode a string into its Unicode scalar values.
#[inline]
pub fn decode(text: &str) -> Vec<char> {
    text.chars().collect()
}
