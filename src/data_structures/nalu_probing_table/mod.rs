// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Nalu Probing Table for word frequency counting.
//!
//! A fixed-capacity open-addressing hash table mapping string keys to
//! occurrence counts. Alongside the counts it records how many collisions
//! each distinct key hit when it was first placed, so the table can report
//! how probing behaved as it filled up.
//!
//! # Features
//!
//! - Linear probing or double hashing, chosen at construction.
//! - Fixed capacity: no resizing, no deletion. A full table rejects new keys
//!   instead of looping.
//! - Collision history in insertion order, replayed into load-factor
//!   snapshots by [`NaluProbingTable::print_stats`].
//! - Zero unsafe code.
//!
//! # Example
//!
//! ```
//! use mauka_wordfreq_lib::data_structures::nalu_probing_table::{
//!     NaluProbingTable, NaluProbingTableConfig, ProbingMethod,
//! };
//!
//! let config = NaluProbingTableConfig::new()
//!     .with_capacity(113)
//!     .with_method(ProbingMethod::Linear);
//! let mut table = NaluProbingTable::with_config(&config).unwrap();
//!
//! for word in "the quick brown fox jumps over the lazy dog".split(' ') {
//!     table.insert(word);
//! }
//!
//! assert_eq!(table.search("the"), 2);
//! assert_eq!(table.len(), 8);
//!
//! let mut report = Vec::new();
//! table.print_stats(&mut report, 10).unwrap();
//! ```
//!
//! # Full Tables
//!
//! [`NaluProbingTable::insert`] returns `0` when a new key cannot be placed.
//! [`NaluProbingTable::try_insert`] reports the same condition as
//! [`NaluProbingTableError::TableFull`]:
//!
//! ```
//! use mauka_wordfreq_lib::data_structures::nalu_probing_table::{
//!     NaluProbingTable, NaluProbingTableError, ProbingMethod,
//! };
//!
//! let mut table = NaluProbingTable::new(1, ProbingMethod::Linear).unwrap();
//! assert_eq!(table.try_insert("one"), Ok(1));
//! assert_eq!(table.try_insert("two"), Err(NaluProbingTableError::TableFull));
//! assert_eq!(table.try_insert("one"), Ok(2));
//! ```

// Module declarations
mod config;
mod error;
mod hash;
mod stats;
mod table;

// Re-exports
pub use config::{NaluProbingTableConfig, ProbingMethod};
pub use error::{NaluProbingTableError, Result};
pub use hash::{probe_step, word_hash, ProbeSequence};
pub use stats::StatsSnapshot;
pub use table::NaluProbingTable;
