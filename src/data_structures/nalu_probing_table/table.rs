// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the Nalu Probing Table.
//!
//! Slots live in one fixed allocation indexed by hash-derived position. The
//! collision history is a separate sequence indexed by insertion order: entry
//! `k` holds the number of collisions the `k`-th distinct key hit before it
//! was placed, wherever in the slot array that key landed.

use std::collections::TryReserveError;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::data_structures::nalu_probing_table::config::{NaluProbingTableConfig, ProbingMethod};
use crate::data_structures::nalu_probing_table::error::{NaluProbingTableError, Result};
use crate::data_structures::nalu_probing_table::hash::ProbeSequence;

/// An occupied slot.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    key: String,
    frequency: usize,
}

/// A fixed-capacity open-addressing table counting string occurrences.
///
/// Every distinct key is stored once with the number of times it was
/// inserted. The table never grows: once every slot is occupied, inserting a
/// new key fails while re-inserting a stored key still counts.
///
/// # Examples
///
/// ```
/// use mauka_wordfreq_lib::data_structures::nalu_probing_table::{NaluProbingTable, ProbingMethod};
///
/// let mut table = NaluProbingTable::new(7, ProbingMethod::Double).unwrap();
///
/// assert_eq!(table.insert("wave"), 1);
/// assert_eq!(table.insert("wave"), 2);
/// assert_eq!(table.search("wave"), 2);
/// assert_eq!(table.search("reef"), 0);
/// ```
#[derive(Debug, Clone)]
pub struct NaluProbingTable {
    /// Slot array, `capacity` long
    slots: Vec<Option<Slot>>,

    /// Collisions per distinct key, in insertion order
    insertion_collisions: Vec<usize>,

    /// Collision resolution strategy
    method: ProbingMethod,
}

impl NaluProbingTable {
    /// Creates an empty table with `capacity` slots.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of slots, fixed for the table's lifetime.
    /// * `method` - Collision resolution strategy.
    ///
    /// # Errors
    ///
    /// `InvalidCapacity` for a zero capacity, `AllocationFailure` if the
    /// slot storage cannot be reserved.
    pub fn new(capacity: usize, method: ProbingMethod) -> Result<Self> {
        if capacity == 0 {
            return Err(NaluProbingTableError::InvalidCapacity(capacity));
        }

        let alloc_err = |_: TryReserveError| NaluProbingTableError::AllocationFailure { capacity };

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(alloc_err)?;
        slots.resize(capacity, None);

        let mut insertion_collisions = Vec::new();
        insertion_collisions
            .try_reserve_exact(capacity)
            .map_err(alloc_err)?;

        debug!(capacity, method = %method, "Created probing table");

        Ok(Self {
            slots,
            insertion_collisions,
            method,
        })
    }

    /// Creates an empty table from a configuration.
    pub fn with_config(config: &NaluProbingTableConfig) -> Result<Self> {
        Self::new(config.capacity, config.method)
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Collision resolution strategy.
    pub fn method(&self) -> ProbingMethod {
        self.method
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.insertion_collisions.len()
    }

    /// Returns `true` if no key has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` once every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Fraction of slots occupied.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Collisions hit by each distinct key, in the order the keys were first
    /// inserted.
    pub fn insertion_collisions(&self) -> &[usize] {
        &self.insertion_collisions
    }

    /// Inserts one occurrence of `key`.
    ///
    /// # Returns
    ///
    /// The key's frequency after this insertion, or `0` if the key is new and
    /// the table is full. A full table is left unchanged.
    pub fn insert(&mut self, key: &str) -> usize {
        self.try_insert(key).unwrap_or(0)
    }

    /// Inserts one occurrence of `key`, reporting a full table as an error.
    ///
    /// A new key is placed in the first empty slot of its probe sequence and
    /// the number of occupied slots skipped on the way is appended to the
    /// collision history. A stored key only has its frequency incremented.
    ///
    /// # Errors
    ///
    /// `TableFull` if the key is new and every slot in its probe sequence
    /// holds another key.
    pub fn try_insert(&mut self, key: &str) -> Result<usize> {
        for (collisions, index) in ProbeSequence::new(key, self.method, self.capacity()) {
            match self.slots[index] {
                None => {
                    self.slots[index] = Some(Slot {
                        key: key.to_owned(),
                        frequency: 1,
                    });
                    self.insertion_collisions.push(collisions);
                    trace!(key, index, collisions, "Placed new key");
                    return Ok(1);
                }
                Some(ref mut slot) if slot.key == key => {
                    slot.frequency += 1;
                    return Ok(slot.frequency);
                }
                Some(_) => {}
            }
        }

        trace!(key, "No free slot in probe sequence");
        Err(NaluProbingTableError::TableFull)
    }

    /// Returns how many times `key` has been inserted, `0` if it is absent.
    pub fn search(&self, key: &str) -> usize {
        for (_, index) in ProbeSequence::new(key, self.method, self.capacity()) {
            match &self.slots[index] {
                None => return 0,
                Some(slot) if slot.key == key => return slot.frequency,
                Some(_) => {}
            }
        }
        0
    }

    /// Iterates over stored keys and their frequencies in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.slots
            .iter()
            .flatten()
            .map(|slot| (slot.key.as_str(), slot.frequency))
    }

    /// Writes one `"<frequency>    <key>"` line per occupied slot, in slot
    /// order.
    pub fn print_nonempty<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        for (key, frequency) in self.iter() {
            writeln!(sink, "{frequency}    {key}")?;
        }
        Ok(())
    }

    /// Writes every slot with its position, frequency and stats column.
    ///
    /// The stats column reads the collision history at the slot's position.
    /// The history is indexed by insertion order, so the value only belongs
    /// to the key on the same line when the two orders happen to agree.
    pub fn print_full<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "  Pos  Freq  Stats  Word")?;
        writeln!(sink, "{}", "-".repeat(40))?;

        for (pos, slot) in self.slots.iter().enumerate() {
            let stats = self.insertion_collisions.get(pos).copied().unwrap_or(0);
            match slot {
                Some(slot) => writeln!(
                    sink,
                    "{pos:5} {:5} {stats:5}   {}",
                    slot.frequency, slot.key
                )?,
                None => writeln!(sink, "{pos:5} {:5} {stats:5}", 0)?,
            }
        }
        Ok(())
    }
}
