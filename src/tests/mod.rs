//! Test modules for the Mauka word frequency counter.
//!
//! This module contains the crate-internal test suites:
//! - Unit tests for configuration and error handling
//! - Property-based tests for the probing table using proptest
//! - Test fixtures and utilities

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    any_key_strategy, key_sequence_strategy, key_strategy, method_strategy,
    prime_capacity_strategy, TestFixture,
};
