// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Nalu Probing Table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Collision resolution strategy used when a key's home slot is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbingMethod {
    /// Probe the next slot each time (step of 1).
    #[default]
    Linear,

    /// Probe with a per-key step derived from a second hash computation.
    Double,
}

impl ProbingMethod {
    /// Human-readable name used in report headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Linear => "Linear Probing",
            Self::Double => "Double Hashing",
        }
    }
}

impl fmt::Display for ProbingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Configuration for the Nalu Probing Table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaluProbingTableConfig {
    /// Number of slots. Fixed for the lifetime of the table.
    /// A prime capacity keeps double hashing steps well distributed.
    pub capacity: usize,

    /// Collision resolution strategy.
    pub method: ProbingMethod,
}

impl NaluProbingTableConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of slots.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The fixed number of slots in the table.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the collision resolution strategy.
    ///
    /// # Arguments
    ///
    /// * `method` - Linear probing or double hashing.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_method(mut self, method: ProbingMethod) -> Self {
        self.method = method;
        self
    }
}

impl Default for NaluProbingTableConfig {
    fn default() -> Self {
        Self {
            capacity: 113, // prime
            method: ProbingMethod::Linear,
        }
    }
}
