//! Purpose: `rowscan` CLI entry point.
//! Role: Binary crate root; parses args, runs one loading strategy, reports rows.
//! Invariants: Stdout carries only the row report (human line or JSON).
//! Invariants: Diagnostics go to stderr; the exit code is derived from
//! `to_exit_code`.
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::{error::ErrorKind as ClapErrorKind, ArgGroup, Parser, ValueHint};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use rowscan::core::error::{to_exit_code, Error, ErrorKind};
use rowscan::core::loader::{load_rows, Strategy};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            eprintln!("rowscan: {err}");
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message(err.to_string().trim_end().to_string()));
            }
        },
    };

    init_tracing();

    let strategy = if cli.direct {
        Strategy::Direct
    } else {
        Strategy::Formatted
    };

    let start = Instant::now();
    let rows = load_rows(&cli.path, strategy)?;
    let elapsed = start.elapsed();
    tracing::debug!(rows, ?elapsed, strategy = strategy.as_str(), "load finished");

    if cli.json {
        println!("{}", summary_json(rows, strategy, &cli.path, elapsed));
    } else {
        println!("Read {rows} rows");
    }
    Ok(RunOutcome::ok())
}

#[derive(Parser)]
#[command(
    name = "rowscan",
    version,
    about = "Benchmark two parsing strategies for whitespace-separated numeric text files",
    long_about = r#"Reads a text file of whitespace-separated floating-point numbers and
reports how many rows were consumed.

Strategies:
  --direct  hand-rolled scanner over buffered line bytes
  --printf  formatted five-field reads via the standard float parser"#,
    after_help = r#"EXAMPLES
  $ rowscan --direct data.txt
  $ rowscan --printf data.txt
  $ rowscan --direct --json data.txt

NOTES
  - The printf strategy assumes five numbers per line and counts its final
    end-of-file read attempt, so it reports one row more than --direct."#,
    group(ArgGroup::new("strategy").required(true).multiple(false)),
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        group = "strategy",
        help = "Parse with the hand-rolled line scanner"
    )]
    direct: bool,
    #[arg(
        long,
        group = "strategy",
        help = "Parse with formatted five-field reads"
    )]
    printf: bool,
    #[arg(long, help = "Emit a JSON summary instead of the human-readable line")]
    json: bool,
    #[arg(help = "Input file path", value_hint = ValueHint::FilePath)]
    path: PathBuf,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn summary_json(rows: u64, strategy: Strategy, path: &Path, elapsed: Duration) -> String {
    let duration_ms = elapsed.as_secs_f64() * 1000.0;
    let secs = elapsed.as_secs_f64().max(1e-9);
    let value = json!({
        "name": "rowscan",
        "version": env!("CARGO_PKG_VERSION"),
        "ts": rfc3339_now(SystemTime::now()),
        "rows": rows,
        "strategy": strategy.as_str(),
        "path": path.display().to_string(),
        "duration_ms": duration_ms,
        "rows_per_sec": rows as f64 / secs,
        "debug_build": cfg!(debug_assertions),
    });
    serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
}

fn rfc3339_now(ts: SystemTime) -> String {
    let dur = ts.duration_since(UNIX_EPOCH).unwrap_or_default();
    let secs = dur.as_secs() as i64;
    let nsec = dur.subsec_nanos();
    let tm = time::OffsetDateTime::from_unix_timestamp(secs)
        .unwrap_or_else(|_| time::OffsetDateTime::UNIX_EPOCH);
    let tm = tm.replace_nanosecond(nsec).unwrap_or(tm);
    tm.format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
