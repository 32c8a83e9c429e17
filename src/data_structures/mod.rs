//! Data structures for the Mauka word frequency counter.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Fixed, up-front allocations with explicit failure reporting
//! - Deterministic behavior suitable for reproducible reports

pub mod nalu_probing_table;

// Re-export common data structures
pub use nalu_probing_table::{
    NaluProbingTable, NaluProbingTableConfig, NaluProbingTableError, ProbingMethod, StatsSnapshot,
};
