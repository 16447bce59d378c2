//! Cost table loading from tab-separated frequency files.
//!
//! Each line holds two or three tab-separated fields:
//! - `c<TAB>cost`: insertion cost of `c`.
//! - `from<TAB>to<TAB>cost`: cost for the `(from, to)` pair. A field that
//!   starts with a space stands for the empty symbol, so `c<TAB> <TAB>cost`
//!   is a deletion and ` <TAB>c<TAB>cost` another way to write an insertion.
//!
//! Only the first code point of a symbol field is used. Lines that do not
//! fit (wrong field count, empty symbol field, bad number, negative cost,
//! an empty-to-empty pair) are skipped and counted, never reported one by one.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::costs::{CostKey, CostTable, CostTableBuilder, Symbol};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cost table {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read cost table {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counters from one parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines stored in the table.
    pub records: usize,
    /// Non-blank lines dropped as malformed.
    pub skipped: usize,
}

/// Parse records from `reader` into `builder`.
///
/// Lines are read as raw bytes; a line that is not valid UTF-8 is counted in
/// [`LoadStats::skipped`] like any other malformed record. Fails only when the
/// reader itself fails, in which case `builder` keeps every record stored
/// before the failure.
pub fn parse_cost_table<R: BufRead>(
    mut reader: R,
    builder: &mut CostTableBuilder,
) -> io::Result<LoadStats> {
    let mut stats = LoadStats::default();
    let mut buf = Vec::new();
    let mut lineno = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;
        let Ok(line) = std::str::from_utf8(&buf) else {
            tracing::trace!(line = lineno, "skipping cost record with invalid UTF-8");
            stats.skipped += 1;
            continue;
        };
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        if line.trim().is_empty() {
            continue;
        }
        let stored =
            parse_record(line).is_some_and(|(key, cost)| builder.set(key, cost).is_ok());
        if stored {
            stats.records += 1;
        } else {
            tracing::trace!(line = lineno, "skipping malformed cost record");
            stats.skipped += 1;
        }
    }
    Ok(stats)
}

/// Load a cost table, reporting failures as errors.
pub fn try_load_cost_table(path: impl AsRef<Path>) -> Result<(CostTable, LoadStats), LoadError> {
    let mut builder = CostTableBuilder::new();
    let stats = load_into(path.as_ref(), &mut builder)?;
    Ok((builder.build(), stats))
}

/// Load a cost table, never failing.
///
/// A missing file is logged and yields an empty table, in which every lookup
/// returns the default weight. A read error part way through is logged and
/// the records parsed before it are kept.
pub fn load_cost_table(path: impl AsRef<Path>) -> CostTable {
    let mut builder = CostTableBuilder::new();
    if let Err(err) = load_into(path.as_ref(), &mut builder) {
        tracing::warn!(
            error = %err,
            records = builder.len(),
            "cost table incomplete, continuing with parsed records"
        );
    }
    builder.build()
}

fn load_into(path: &Path, builder: &mut CostTableBuilder) -> Result<LoadStats, LoadError> {
    let io_error = |source: io::Error| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    };
    let file = File::open(path).map_err(io_error)?;
    let stats = parse_cost_table(BufReader::new(file), builder).map_err(io_error)?;

    tracing::debug!(
        path = %path.display(),
        records = stats.records,
        skipped = stats.skipped,
        "loaded cost table"
    );
    Ok(stats)
}

fn parse_record(line: &str) -> Option<(CostKey, f64)> {
    let fields: Vec<&str> = line.split('\t').collect();
    let (key, cost) = match fields.as_slice() {
        [c, cost] => ((Symbol::Empty, Symbol::Char(first_char(c)?)), cost),
        [from, to, cost] => ((parse_symbol(from)?, parse_symbol(to)?), cost),
        _ => return None,
    };
    let cost: f64 = cost.trim().parse().ok()?;
    Some((key, cost))
}

fn parse_symbol(field: &str) -> Option<Symbol> {
    match first_char(field)? {
        ' ' => Some(Symbol::Empty),
        c => Some(Symbol::Char(c)),
    }
}

fn first_char(field: &str) -> Option<char> {
    field.chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::EditCosts;

    fn parse(text: &str) -> (CostTable, LoadStats) {
        let mut builder = CostTableBuilder::new();
        let stats = parse_cost_table(text.as_bytes(), &mut builder).unwrap();
        (builder.build(), stats)
    }

    #[test]
    fn two_and_three_field_records() {
        let (table, stats) = parse("a\tb\t3.0\nc\t5.0\n");
        assert_eq!(stats, LoadStats { records: 2, skipped: 0 });
        assert_eq!(table.substitution_cost('a', 'b'), 3.0);
        assert_eq!(table.insertion_cost('c'), 5.0);
    }

    #[test]
    fn space_field_is_the_empty_symbol() {
        let (table, _) = parse("d\t \t0.5\n \te\t7\n");
        assert_eq!(table.deletion_cost('d'), 0.5);
        assert_eq!(table.insertion_cost('e'), 7.0);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let text = "a\tb\tc\t1.0\nx\tnope\n\t2.0\n \t \t1.0\ny\t-1\nz\t2\n\n";
        let (table, stats) = parse(text);
        assert_eq!(stats, LoadStats { records: 1, skipped: 5 });
        assert_eq!(table.len(), 1);
        assert_eq!(table.insertion_cost('z'), 2.0);
    }

    #[test]
    fn first_code_point_of_long_fields_and_crlf() {
        let (table, stats) = parse("аэ\tпо\t0.3\r\n");
        assert_eq!(stats.records, 1);
        assert_eq!(table.substitution_cost('а', 'п'), 0.3);
    }

    #[test]
    fn invalid_utf8_line_is_skipped_not_fatal() {
        let mut builder = CostTableBuilder::new();
        let bytes: &[u8] = b"a\tb\t3.0\n\xff\tz\t2.0\nc\t5.0";
        let stats = parse_cost_table(bytes, &mut builder).unwrap();
        assert_eq!(stats, LoadStats { records: 2, skipped: 1 });
        let table = builder.build();
        assert_eq!(table.substitution_cost('a', 'b'), 3.0);
        assert_eq!(table.insertion_cost('c'), 5.0);
    }

    struct BrokenPipe;

    impl io::Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn read_error_keeps_records_parsed_before_it() {
        let mut builder = CostTableBuilder::new();
        let reader = BufReader::new(io::Read::chain(&b"a\tb\t3.0\nc\t5.0\n"[..], BrokenPipe));
        let err = parse_cost_table(reader, &mut builder).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        let table = builder.build();
        assert_eq!(table.len(), 2);
        assert_eq!(table.substitution_cost('a', 'b'), 3.0);
    }

    #[test]
    fn missing_file_is_an_error_or_an_empty_table() {
        let path = std::env::temp_dir().join("weighted-levenshtein-missing-table.tsv");
        assert!(matches!(
            try_load_cost_table(&path),
            Err(LoadError::NotFound(p)) if p == path
        ));
        assert_eq!(load_cost_table(&path), CostTable::empty());
    }
}
