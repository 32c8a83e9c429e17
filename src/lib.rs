//! Mauka Word Frequency Library
//!
//! This library contains the core components of the Mauka word frequency
//! counter: a fixed-capacity open-addressing hash table with collision
//! statistics, the configuration and error layers around it, and the
//! utilities that feed it words.
//!
//! # Architecture
//!
//! The library is designed with the following principles in mind:
//! - Strict component boundaries
//! - Fixed allocations sized once at startup
//! - Comprehensive error handling and propagation
//! - Byte-exact, reproducible report output

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod pipeline;
pub mod utils;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the Mauka word frequency counter.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
