// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hash and probe sequence functions for the Nalu Probing Table.
//!
//! Insert and search both walk a [`ProbeSequence`], so the order in which
//! slots are visited for a key is defined in exactly one place.

use crate::data_structures::nalu_probing_table::config::ProbingMethod;

/// Polynomial string hash: `acc = ord(c) + 31 * acc` over every character,
/// with 32-bit wrapping arithmetic.
pub fn word_hash(word: &str) -> u32 {
    word.chars()
        .fold(0u32, |acc, c| (c as u32).wrapping_add(acc.wrapping_mul(31)))
}

/// Computes the probe step for a raw (unreduced) hash value.
///
/// Double hashing yields a step in `[1, capacity - 1]`. A single-slot table
/// has no second slot to step to, so it uses a step of 1.
pub fn probe_step(method: ProbingMethod, raw_hash: u32, capacity: usize) -> usize {
    match method {
        ProbingMethod::Linear => 1,
        ProbingMethod::Double if capacity <= 1 => 1,
        ProbingMethod::Double => 1 + (raw_hash as usize % (capacity - 1)),
    }
}

/// The slots visited for one key, in probe order.
///
/// Yields `(collisions, index)` pairs: the home slot with zero collisions,
/// then one further slot per collision. The sequence ends after `capacity`
/// slots, which bounds every probe loop regardless of the step.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    home: usize,
    index: usize,
    step: usize,
    capacity: usize,
    collisions: usize,
}

impl ProbeSequence {
    /// Creates the probe sequence for `key` in a table of `capacity` slots.
    ///
    /// # Arguments
    ///
    /// * `key` - The key being inserted or searched for.
    /// * `method` - The table's collision resolution strategy.
    /// * `capacity` - The number of slots, at least one.
    pub fn new(key: &str, method: ProbingMethod, capacity: usize) -> Self {
        let raw_hash = word_hash(key);
        let home = raw_hash as usize % capacity;
        Self {
            home,
            index: home,
            step: probe_step(method, raw_hash, capacity),
            capacity,
            collisions: 0,
        }
    }

    /// The key's home slot.
    pub fn home_index(&self) -> usize {
        self.home
    }

    /// The step between consecutive probes.
    pub fn step(&self) -> usize {
        self.step
    }
}

impl Iterator for ProbeSequence {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.collisions >= self.capacity {
            return None;
        }
        let item = (self.collisions, self.index);
        self.collisions += 1;
        self.index = (self.index + self.step) % self.capacity;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity - self.collisions;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_word_hash_values() {
        assert_eq!(word_hash(""), 0);
        assert_eq!(word_hash("a"), 97);
        assert_eq!(word_hash("ab"), 98 + 31 * 97);
    }

    #[test]
    fn test_word_hash_wraps() {
        // Long enough to overflow 32 bits many times over.
        let long = "z".repeat(64);
        let expected = long
            .bytes()
            .fold(0u32, |acc, b| u32::from(b).wrapping_add(acc.wrapping_mul(31)));
        assert_eq!(word_hash(&long), expected);
    }

    #[test]
    fn test_double_step_range() {
        for raw in [0u32, 1, 12, 13, 97, u32::MAX] {
            let step = probe_step(ProbingMethod::Double, raw, 13);
            assert!((1..=12).contains(&step));
        }
        assert_eq!(probe_step(ProbingMethod::Double, 102, 5), 3);
        assert_eq!(probe_step(ProbingMethod::Double, 102, 1), 1);
        assert_eq!(probe_step(ProbingMethod::Linear, 102, 5), 1);
    }

    #[test]
    fn test_sequence_is_permutation() {
        for method in [ProbingMethod::Linear, ProbingMethod::Double] {
            let seq = ProbeSequence::new("collision", method, 11);
            let indices: HashSet<usize> = seq.map(|(_, index)| index).collect();
            assert_eq!(indices.len(), 11);
        }
    }

    #[test]
    fn test_sequence_counts_collisions() {
        let seq = ProbeSequence::new("a", ProbingMethod::Linear, 5);
        assert_eq!(seq.home_index(), 2);
        assert_eq!(seq.step(), 1);
        let visited: Vec<_> = seq.collect();
        assert_eq!(visited, vec![(0, 2), (1, 3), (2, 4), (3, 0), (4, 1)]);
    }
}
