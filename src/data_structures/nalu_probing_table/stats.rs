// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Load-factor snapshots replayed from the collision history.
//!
//! Because the history is kept in insertion order, its first `n` entries
//! describe the table exactly as it was when it held `n` keys. A snapshot at
//! a given percentage full therefore needs no bookkeeping during insertion.

use std::io::{self, Write};

use serde::Serialize;

use crate::data_structures::nalu_probing_table::table::NaluProbingTable;

const RULE_WIDTH: usize = 54;

/// Placement statistics for the table at one fill level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    /// Fill level this snapshot describes, in percent of capacity
    pub percent_full: usize,

    /// Number of keys stored at that fill level
    pub current_entries: usize,

    /// Percentage of those keys placed in their home slot
    pub percent_at_home: f64,

    /// Mean collisions per key
    pub average_collisions: f64,

    /// Most collisions any single key hit
    pub max_collisions: usize,
}

impl NaluProbingTable {
    /// Computes up to `num_snapshots` evenly spaced snapshots.
    ///
    /// Snapshot `i` (from 1) describes the table at `100 * i / num_snapshots`
    /// percent full. Fill levels the table never reached, or that round down
    /// to zero entries, produce no snapshot.
    pub fn snapshots(&self, num_snapshots: usize) -> Vec<StatsSnapshot> {
        (1..=num_snapshots)
            .filter_map(|i| self.snapshot_at(100 * i / num_snapshots))
            .collect()
    }

    fn snapshot_at(&self, percent_full: usize) -> Option<StatsSnapshot> {
        let current_entries = self.capacity() * percent_full / 100;
        if current_entries == 0 || current_entries > self.len() {
            return None;
        }

        let history = &self.insertion_collisions()[..current_entries];
        let at_home = history.iter().filter(|&&c| c == 0).count();
        let total: usize = history.iter().sum();
        let max_collisions = history.iter().copied().max().unwrap_or(0);

        Some(StatsSnapshot {
            percent_full,
            current_entries,
            percent_at_home: at_home as f64 * 100.0 / current_entries as f64,
            average_collisions: total as f64 / current_entries as f64,
            max_collisions,
        })
    }

    /// Writes the snapshot report headed by the probing method's name.
    pub fn print_stats<W: Write>(&self, sink: &mut W, num_snapshots: usize) -> io::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(sink, "\n{}\n", self.method().display_name())?;
        writeln!(sink, "Percent   Current    Percent    Average      Maximum")?;
        writeln!(sink, " Full     Entries    At Home   Collisions   Collisions")?;
        writeln!(sink, "{rule}")?;
        for snapshot in self.snapshots(num_snapshots) {
            writeln!(
                sink,
                "{:4} {:10} {:11.1} {:10.2} {:11}",
                snapshot.percent_full,
                snapshot.current_entries,
                snapshot.percent_at_home,
                snapshot.average_collisions,
                snapshot.max_collisions
            )?;
        }
        writeln!(sink, "{rule}\n")?;
        Ok(())
    }
}
