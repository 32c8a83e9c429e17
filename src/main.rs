//! Mauka word frequency counter - Main entrypoint.
//!
//! Reads words from stdin into a fixed-size probing hash table, then prints
//! each word with its frequency, or a report of how collisions grew as the
//! table filled.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use mauka_wordfreq_lib::config::report::ReportFormat;
use mauka_wordfreq_lib::config::{ConfigLoader, LogConfig, MaukaConfig, Validate, ENV_PREFIX};
use mauka_wordfreq_lib::data_structures::{NaluProbingTable, ProbingMethod};
use mauka_wordfreq_lib::error::{
    report_error, set_error_reporter, ErrorContext, MaukaError, MaukaResult, TracingErrorReporter,
};
use mauka_wordfreq_lib::pipeline::{count_words, write_output, OutputOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Count word frequencies read from stdin using an open-addressing hash table.
///
/// By default, words are read from stdin and added to the hash table, before
/// being printed out alongside their frequencies to stdout.
#[derive(Parser, Debug)]
#[clap(name = "mauka_wordfreq", version, author, about)]
struct Args {
    /// Use double hashing (linear probing is the default)
    #[clap(short = 'd', long = "double-hashing")]
    double_hashing: bool,

    /// Display entire contents of hash table on stderr
    #[clap(short = 'e', long = "entire-table")]
    print_table: bool,

    /// Print stats info instead of frequencies & words
    #[clap(short = 'p', long = "stats")]
    print_stats: bool,

    /// Show SNAPSHOTS stats snapshots (if -p is used)
    #[clap(
        short = 's',
        long,
        value_name = "SNAPSHOTS",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    snapshots: Option<usize>,

    /// Use the first prime >= TABLESIZE as htable size
    #[clap(
        short = 't',
        long = "table-size",
        value_name = "TABLESIZE",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    table_size: Option<usize>,

    /// Print stats snapshots as JSON (if -p is used)
    #[clap(long)]
    json: bool,

    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to stderr so stdout stays
/// reserved for report output.
fn init_logging(log: &LogConfig) -> MaukaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_line_number(true)
        .with_file(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| MaukaError::Custom(format!("Failed to set global tracing subscriber: {e}")))?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    Ok(())
}

/// Applies command-line flags on top of the loaded configuration.
fn apply_overrides(config: &mut MaukaConfig, args: &Args) {
    if args.double_hashing {
        config.table.method = ProbingMethod::Double;
    }
    if let Some(table_size) = args.table_size {
        config.table.capacity = table_size;
    }
    if let Some(snapshots) = args.snapshots {
        config.report.snapshots = snapshots;
    }
    if args.json {
        config.report.format = ReportFormat::Json;
    }
}

/// Counts the words on stdin and prints the requested output.
fn count(args: &Args, mut config: MaukaConfig) -> MaukaResult<()> {
    apply_overrides(&mut config, args);
    config.validate()?;

    let table_config = config.table.to_table_config()?;
    let mut table = NaluProbingTable::with_config(&table_config)?;
    info!(
        capacity = table.capacity(),
        method = %table.method(),
        "Counting words from stdin"
    );

    count_words(&mut table, io::stdin().lock())?;

    let options = OutputOptions {
        print_table: args.print_table,
        print_stats: args.print_stats,
        ..OutputOptions::from_config(&config)
    };
    let mut out = BufWriter::new(io::stdout().lock());
    let mut diag = io::stderr().lock();
    write_output(&table, &options, &mut out, &mut diag)
}

fn run(args: Args) -> MaukaResult<()> {
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match &args.command {
        None => {
            let config = config_loader.load()?;
            init_logging(&config.log)?;
            count(&args, config)
        }
        Some(Command::Validate) => {
            let config = config_loader.load()?;
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Some(Command::GenConfig { output }) => {
            let default_config = MaukaConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| MaukaError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(output, toml)?;

            eprintln!("Default configuration written to {}", output.display());
            Ok(())
        }
    }
}

/// Describes the inputs of a run, attached to fatal error reports.
fn run_details(args: &Args) -> String {
    let config = args
        .config
        .as_ref()
        .map_or_else(|| "defaults".to_string(), |path| path.display().to_string());
    match args.table_size {
        Some(size) => format!("config {config}, table size {size}"),
        None => format!("config {config}"),
    }
}

fn main() {
    let args = Args::parse();
    let details = run_details(&args);

    if let Err(e) = run(args) {
        report_error(ErrorContext::new(e, "mauka_wordfreq").with_details(details));
        process::exit(1);
    }
}
