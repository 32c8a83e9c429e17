//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::NaluProbingTableError;
use crate::error::config::ConfigError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, MaukaError, MaukaResult,
    TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = MaukaError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let mauka_error = MaukaError::Io(io_error);

    let error_string = format!("{mauka_error}");
    assert!(error_string.contains("file not found"));
}

/// Test that component errors convert through `?`.
#[test]
fn test_error_conversions() {
    fn table_step() -> MaukaResult<()> {
        Err::<(), _>(NaluProbingTableError::AllocationFailure { capacity: 7 })?;
        Ok(())
    }
    fn config_step() -> MaukaResult<()> {
        Err::<(), _>(ConfigError::ValidationError("bad".to_string()))?;
        Ok(())
    }

    let table_error = table_step().unwrap_err();
    assert!(matches!(
        table_error,
        MaukaError::Table(NaluProbingTableError::AllocationFailure { capacity: 7 })
    ));
    assert_eq!(
        table_error.to_string(),
        "Table error: Failed to allocate storage for a table of 7 slots"
    );

    assert!(matches!(config_step(), Err(MaukaError::Config(_))));
}

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn new() -> Self {
        Self {
            reported_count: AtomicUsize::new(0),
        }
    }

    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::new());
    set_error_reporter(reporter.clone());

    report_error(ErrorContext::new(
        MaukaError::Custom("reported".to_string()),
        "error_tests",
    ));
    assert!(reporter.reported_count() >= 1);

    // Restore the default so other tests are unaffected.
    set_error_reporter(Arc::new(TracingErrorReporter));
}
