//! Report configuration module.
//!
//! This module defines how the load-factor statistics report is produced.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Output format for the statistics report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Fixed-width text table
    #[default]
    Table,
    /// JSON array of snapshots
    Json,
}

/// Statistics report configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Number of load-factor snapshots to report
    pub snapshots: usize,

    /// Output format
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            snapshots: 10,
            format: ReportFormat::default(),
        }
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.snapshots == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "report.snapshots".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
