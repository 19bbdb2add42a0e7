//! CLI entry point for the student record keeper.
//!
//! With no subcommand it runs the interactive menu; the subcommands run a
//! single operation against the same record file and exit.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use student_records::config::{STORE_PATH_ENV, Settings};
use student_records::console::Console;
use student_records::output::{
    RecordView, print_json, print_records, print_summary, print_top,
};
use student_records::parser::{parse_age, parse_grade};
use student_records::record::{GRADE_COUNT, StudentRecord};
use student_records::report::{summarize, top_by_average};
use student_records::store::{FileStore, RecordStore};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "student_records")]
#[command(about = "Keep student names, ages, and grades in a plain text file", long_about = None)]
struct Cli {
    /// Record file to read and append to (defaults to estudiantes.txt)
    #[arg(short, long, global = true, env = STORE_PATH_ENV, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (the default)
    Menu,
    /// Add one student record
    Add {
        /// Student name; trimmed and title-cased before saving
        #[arg(long)]
        name: String,

        /// Age in whole years
        #[arg(long, allow_hyphen_values = true)]
        age: String,

        /// The three grades
        #[arg(long, num_args = GRADE_COUNT, value_names = ["G1", "G2", "G3"], allow_hyphen_values = true)]
        grades: Vec<String>,
    },
    /// List every stored record
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the record with the highest average
    Top {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show class-wide statistics over all averages
    Summary {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::from_env(cli.file);
    let _log_guard = init_logging(&settings);

    let store = FileStore::new(&settings.store_path);
    info!(path = %store.path().display(), "Using record file");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Console::new(&store, stdin.lock(), stdout.lock())
                .run()
                .context("console input/output failed")?;
        }
        Commands::Add { name, age, grades } => {
            let record = build_record(&name, &age, &grades)?;
            store
                .append(&record)
                .context("failed to add student record")?;
            println!("Student added successfully.");
        }
        Commands::List { json } => {
            let records = store.read_all().context("failed to read records")?;
            let mut out = io::stdout().lock();
            if json {
                let views: Vec<RecordView> = records.iter().map(RecordView::from).collect();
                print_json(&mut out, &views)?;
            } else {
                print_records(&mut out, &records)?;
            }
        }
        Commands::Top { json } => {
            let records = store.read_all().context("failed to read records")?;
            let mut out = io::stdout().lock();
            if json {
                let top = top_by_average(&records).map(RecordView::from);
                print_json(&mut out, &top)?;
            } else {
                print_top(&mut out, &records)?;
            }
        }
        Commands::Summary { json } => {
            let records = store.read_all().context("failed to read records")?;
            let summary = summarize(&records);
            let mut out = io::stdout().lock();
            if json {
                print_json(&mut out, &summary)?;
            } else {
                print_summary(&mut out, &summary)?;
            }
        }
    }

    Ok(())
}

/// Coerces command-line values the same way the interactive menu does.
fn build_record(name: &str, age: &str, grades: &[String]) -> Result<StudentRecord> {
    let age = parse_age(age)?;
    let parsed = grades
        .iter()
        .map(|g| parse_grade(g))
        .collect::<Result<Vec<f64>, _>>()?;
    let grades: [f64; GRADE_COUNT] = parsed
        .try_into()
        .map_err(|v: Vec<f64>| anyhow::anyhow!("expected {GRADE_COUNT} grades, got {}", v.len()))?;

    Ok(StudentRecord::new(name, age, grades))
}

/// Opens the daily-rolling JSON log file, creating its directory.
///
/// Returns `None` when the directory or file cannot be created.
fn log_file_appender(log_file: &Path) -> Option<RollingFileAppender> {
    let log_dir = log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = log_file
        .file_name()
        .unwrap_or(OsStr::new("student_records.log"))
        .to_string_lossy()
        .into_owned();

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .build(log_dir)
        .ok()
}

/// Logging setup: stderr for warnings, JSON rolling log file for detail.
///
/// The stderr layer defaults to `warn` so the interactive menu stays readable;
/// `RUST_LOG` and `RUST_LOG_JSON` override the two layers independently. When
/// the log file cannot be opened only the stderr layer is installed.
fn init_logging(settings: &Settings) -> Option<WorkerGuard> {
    let appender = log_file_appender(&settings.log_file);
    let file_missing = appender.is_none();

    let (json_layer, guard) = match appender {
        Some(appender) => {
            let (non_blocking_file, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::try_from_env("RUST_LOG_JSON")
                        .unwrap_or_else(|_| EnvFilter::new("debug")),
                );
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    if file_missing {
        warn!(path = %settings.log_file.display(), "Cannot open log file, logging to stderr only");
    }

    guard
}
