use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use tracing_subscriber::EnvFilter;

use weighted_levenshtein::problems::edit_distance::full_matrix_distance;
use weighted_levenshtein::{
    distance_report, load_cost_table, try_load_cost_table, CostTable, DistanceReport,
    UniformCosts,
};

#[derive(Debug, Parser)]
#[command(name = "wlev", about = "Weighted Levenshtein distance")]
struct Cli {
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute the distance between two strings.
    Distance {
        source: String,
        target: String,
        /// Tab-separated cost table; unit costs when omitted.
        #[arg(long)]
        costs: Option<PathBuf>,
        /// Fail instead of falling back to an empty table when `--costs` cannot be read.
        #[arg(long, requires = "costs")]
        strict: bool,
        /// Stop early and report this value once the distance reaches it.
        #[arg(long)]
        limit: Option<f64>,
        #[arg(long, value_enum, default_value_t = DistanceFormat::Text)]
        format: DistanceFormat,
    },
    /// Time the engine over growing inputs and check it against the full table.
    Probe {
        #[arg(long, value_enum, default_value_t = ProbeFormat::Csv)]
        format: ProbeFormat,
        /// Maximum input length verified against the full-matrix baseline.
        #[arg(long, default_value_t = 512)]
        verify_limit: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DistanceFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProbeFormat {
    Csv,
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Distance {
            source,
            target,
            costs,
            strict,
            limit,
            format,
        } => run_distance(&source, &target, costs, strict, limit, format),
        Commands::Probe {
            format,
            verify_limit,
        } => run_probe(format, verify_limit),
    }
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "weighted_levenshtein=debug,wlev=debug",
        _ => "weighted_levenshtein=trace,wlev=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Serialize)]
struct DistanceOutput<'a> {
    source: &'a str,
    target: &'a str,
    distance: f64,
    limit: Option<f64>,
    rows_evaluated: usize,
    pruned: bool,
}

fn run_distance(
    source: &str,
    target: &str,
    costs: Option<PathBuf>,
    strict: bool,
    limit: Option<f64>,
    format: DistanceFormat,
) -> Result<()> {
    if let Some(limit) = limit {
        if limit.is_nan() || limit < 0.0 {
            bail!("--limit must be a non-negative number, got {limit}");
        }
    }

    let report = match costs {
        Some(path) if strict => {
            let (table, stats) = try_load_cost_table(&path)
                .with_context(|| format!("loading cost table {}", path.display()))?;
            tracing::info!(records = stats.records, skipped = stats.skipped, "cost table ready");
            distance_report(source, target, &table, limit)
        }
        Some(path) => distance_report(source, target, &load_cost_table(&path), limit),
        None => distance_report(source, target, &UniformCosts, limit),
    };

    match format {
        DistanceFormat::Text => println!("{}", report.distance),
        DistanceFormat::Json => {
            let out = DistanceOutput {
                source,
                target,
                distance: report.distance,
                limit,
                rows_evaluated: report.rows_evaluated,
                pruned: report.pruned,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

#[derive(Clone, Serialize)]
struct Measurement {
    scenario: &'static str,
    size: usize,
    distance: f64,
    rows_evaluated: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

const SIZES: &[usize] = &[256, 512, 1024, 2048, 4096, 8192];
const BOUNDED_LIMIT: f64 = 8.0;

fn run_probe(format: ProbeFormat, verify_limit: usize) -> Result<()> {
    let mut sys = System::new();
    let table = probe_table()?;
    let mut measurements = Vec::new();

    eprintln!("[1/3] Uniform costs, rolling rows");
    for &len in SIZES {
        let (a, b) = (cyclic("ACGT", len, 0), cyclic("ACGT", len, 1));
        measurements.push(measure("uniform", len, &mut sys, || {
            let report = distance_report(&a, &b, &UniformCosts, None);
            let expected = (len <= verify_limit)
                .then(|| full_matrix_distance(&chars(&a), &chars(&b), &UniformCosts));
            (report, expected)
        }));
    }

    eprintln!("[2/3] Weighted table, rolling rows");
    for &len in SIZES {
        let (a, b) = (cyclic("аэропорт", len, 0), cyclic("аэрапор", len, 2));
        measurements.push(measure("weighted", len, &mut sys, || {
            let report = distance_report(&a, &b, &table, None);
            let expected =
                (len <= verify_limit).then(|| full_matrix_distance(&chars(&a), &chars(&b), &table));
            (report, expected)
        }));
    }

    eprintln!("[3/3] Weighted table, bounded at {BOUNDED_LIMIT}");
    for &len in SIZES {
        let (a, b) = (cyclic("abcd", len, 0), cyclic("wxyz", len, 0));
        measurements.push(measure("bounded", len, &mut sys, || {
            let report = distance_report(&a, &b, &table, Some(BOUNDED_LIMIT));
            let expected = (len <= verify_limit).then(|| {
                full_matrix_distance(&chars(&a), &chars(&b), &table).min(BOUNDED_LIMIT)
            });
            (report, expected)
        }));
    }

    let failed = measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
        .count();
    eprintln!(
        "{} of {} runs verified, {} failed",
        measurements
            .iter()
            .filter(|m| m.status == VerificationStatus::Passed)
            .count(),
        measurements.len(),
        failed
    );

    match format {
        ProbeFormat::Csv => write_csv(&measurements),
        ProbeFormat::Table => write_table(&measurements),
        ProbeFormat::Json => println!("{}", serde_json::to_string_pretty(&measurements)?),
    }

    if failed > 0 {
        bail!("{failed} probe run(s) disagreed with the full-matrix baseline");
    }
    Ok(())
}

fn probe_table() -> Result<CostTable> {
    let table = CostTable::builder()
        .substitution('а', 'о', 0.2)?
        .substitution('о', 'а', 0.2)?
        .insertion('т', 0.5)?
        .deletion('т', 0.5)?
        .default_weight(1.5)?
        .build();
    Ok(table)
}

fn measure<F>(scenario: &'static str, size: usize, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (DistanceReport, Option<f64>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (report, expected) = compute();
    let wall_s = start.elapsed().as_secs_f64();
    let after = rss_kib(sys);

    let (status, detail) = match expected {
        None => (VerificationStatus::NotChecked, None),
        Some(e) if (e - report.distance).abs() <= 1e-9 * e.max(1.0) => {
            (VerificationStatus::Passed, None)
        }
        Some(e) => (
            VerificationStatus::Failed,
            Some(format!("expected {e}, got {}", report.distance)),
        ),
    };
    eprintln!(
        "      {} {scenario} len={size} distance={} rows={} time={wall_s:.3}s",
        status.icon(),
        report.distance,
        report.rows_evaluated
    );

    Measurement {
        scenario,
        size,
        distance: report.distance,
        rows_evaluated: report.rows_evaluated,
        wall_s,
        rss_delta_kib: after.saturating_sub(before),
        status,
        detail,
    }
}

fn write_csv(measurements: &[Measurement]) {
    println!("scenario,size,distance,rows_evaluated,wall_s,rss_delta_kib,status,detail");
    for m in measurements {
        println!(
            "{},{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size,
            m.distance,
            m.rows_evaluated,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or("").replace('"', "'")
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .chain(["scenario".len()])
        .max()
        .unwrap_or(0);
    println!(
        "{:<col1$}  {:>6}  {:>12}  {:>8}  {:>10}  {:>14}  {:>12}  detail",
        "scenario", "size", "distance", "rows", "wall_s", "rss_delta_kib", "status"
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>6}  {:>12.3}  {:>8}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size,
            m.distance,
            m.rows_evaluated,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or("")
        );
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map(|process| process.memory() / 1024)
        .unwrap_or(0)
}

/// `len` code points cycling through `alphabet`, starting at `offset`.
fn cyclic(alphabet: &str, len: usize, offset: usize) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    (0..len)
        .map(|i| symbols[(i + offset) % symbols.len()])
        .collect()
}

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}
