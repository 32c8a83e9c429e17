//! Word counting pipeline driven by the binary.
//!
//! Reads words from a stream into a [`NaluProbingTable`] and writes the
//! requested reports. Kept in the library so the whole run can be exercised
//! against in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::config::report::ReportFormat;
use crate::config::MaukaConfig;
use crate::data_structures::NaluProbingTable;
use crate::error::MaukaResult;
use crate::utils::WordReader;

/// What to print once all words are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Dump every slot to the diagnostic sink before the main output
    pub print_table: bool,

    /// Print load-factor statistics instead of words and frequencies
    pub print_stats: bool,

    /// Number of statistics snapshots
    pub snapshots: usize,

    /// Statistics output format
    pub format: ReportFormat,
}

impl OutputOptions {
    /// Output options taken from configuration, printing frequencies only.
    pub fn from_config(config: &MaukaConfig) -> Self {
        Self {
            print_table: false,
            print_stats: false,
            snapshots: config.report.snapshots,
            format: config.report.format,
        }
    }
}

/// Totals from one counting run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSummary {
    /// Words read from the input
    pub words: usize,

    /// Words not counted because their key did not fit in the table
    pub dropped: usize,
}

/// Inserts every word of `reader` into `table`.
///
/// Words that are new once the table is full are dropped and counted in the
/// summary; the run continues so repeated words are still counted.
pub fn count_words<R: BufRead>(table: &mut NaluProbingTable, reader: R) -> MaukaResult<CountSummary> {
    let mut summary = CountSummary::default();

    for word in WordReader::new(reader) {
        let word = word?;
        summary.words += 1;
        if table.insert(&word) == 0 {
            summary.dropped += 1;
        }
    }

    if summary.dropped > 0 {
        warn!(
            dropped = summary.dropped,
            capacity = table.capacity(),
            "Table full, some words were not counted"
        );
    }
    info!(
        words = summary.words,
        distinct = table.len(),
        load_factor = table.load_factor(),
        "Finished reading input"
    );

    Ok(summary)
}

/// Writes the reports selected by `options`.
///
/// The full table dump goes to `diag`; frequencies or statistics go to `out`.
pub fn write_output<O: Write, D: Write>(
    table: &NaluProbingTable,
    options: &OutputOptions,
    out: &mut O,
    diag: &mut D,
) -> MaukaResult<()> {
    if options.print_table {
        table.print_full(diag)?;
    }

    if options.print_stats {
        match options.format {
            ReportFormat::Table => table.print_stats(out, options.snapshots)?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &table.snapshots(options.snapshots))?;
                writeln!(out)?;
            }
        }
    } else {
        table.print_nonempty(out)?;
    }

    out.flush()?;
    Ok(())
}
