//! Error module for the Mauka word frequency counter.
//!
//! Each component defines its own error enum; this module gathers them into
//! [`MaukaError`] for the binary and provides a pluggable reporter that
//! routes fatal errors through `tracing`.

use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::data_structures::NaluProbingTableError;

pub mod config;

/// Result type alias used throughout the crate.
pub type MaukaResult<T> = Result<T, MaukaError>;

/// Core error enum for the Mauka word frequency counter.
#[derive(Error, Debug)]
pub enum MaukaError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the probing table.
    #[error("Table error: {0}")]
    Table(#[from] NaluProbingTableError),

    /// IO errors while reading words or writing reports.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors when emitting JSON reports.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// A fatal error together with where it surfaced and what the run was
/// working on at the time.
#[derive(Debug)]
pub struct ErrorContext {
    pub error: MaukaError,
    pub component: String,
    /// Run inputs (config source, table size) worth seeing next to the error
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new<S: Into<String>>(error: MaukaError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    pub fn with_details<S: Into<String>>(self, details: S) -> Self {
        Self {
            details: Some(details.into()),
            ..self
        }
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.component, self.error)?;
        match &self.details {
            Some(details) => write!(f, " ({details})"),
            None => Ok(()),
        }
    }
}

/// Destination for fatal errors.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    fn report(&self, context: ErrorContext);
}

/// Emits each report as an `error!` event.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        match context.details {
            Some(details) => tracing::error!(
                component = %context.component,
                details = %details,
                "{}",
                context.error
            ),
            None => tracing::error!(component = %context.component, "{}", context.error),
        }
    }
}

/// Holder for the process-wide reporter. Until one is installed, reports
/// are printed to stderr.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    pub fn set_reporter(&mut self, reporter: Arc<dyn ErrorReporter>) {
        self.reporter = Some(reporter);
    }

    pub fn report(&self, context: ErrorContext) {
        match &self.reporter {
            Some(reporter) => reporter.report(context),
            None => eprintln!("error: {context}"),
        }
    }
}

static ERROR_REPORTING: Lazy<RwLock<ErrorReporting>> =
    Lazy::new(|| RwLock::new(ErrorReporting::default()));

/// Installs `reporter` as the process-wide error reporter.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .set_reporter(reporter);
}

/// Sends `context` to the installed reporter.
pub fn report_error(context: ErrorContext) {
    ERROR_REPORTING
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .report(context);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display_with_details() {
        let context = ErrorContext::new(MaukaError::Custom("boom".to_string()), "main")
            .with_details("table size 7");
        assert_eq!(context.to_string(), "main: boom (table size 7)");

        let bare = ErrorContext::new(MaukaError::Custom("boom".to_string()), "main");
        assert_eq!(bare.to_string(), "main: boom");
    }
}
