//! Problem instances for the rolling-row engine.
//!
//! - [`edit_distance`] : weighted Levenshtein distance over code points,
//!   plus a full-matrix reference used for verification.

pub mod edit_distance;
