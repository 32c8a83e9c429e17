// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Nalu Probing Table.

/// Error types for Nalu Probing Table operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NaluProbingTableError {
    /// Every slot holds a different key, so a new key cannot be placed
    #[error("Probing table is full, key could not be inserted")]
    TableFull,

    /// Slot or collision history storage could not be reserved
    #[error("Failed to allocate storage for a table of {capacity} slots")]
    AllocationFailure {
        /// The capacity that was requested
        capacity: usize,
    },

    /// Capacity must be at least one slot
    #[error("Invalid table capacity: {0}")]
    InvalidCapacity(usize),
}

/// Result type for Nalu Probing Table operations
pub type Result<T> = std::result::Result<T, NaluProbingTableError>;
