//! Hash table configuration module.
//!
//! This module defines the size and collision resolution strategy of the
//! word frequency table.

use super::{ConfigResult, Validate};
use crate::data_structures::{NaluProbingTableConfig, ProbingMethod};
use crate::error::config::ConfigError;
use crate::utils::next_prime;
use serde::{Deserialize, Serialize};

/// Hash table configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Requested number of slots; rounded up to the next prime
    pub capacity: usize,

    /// Collision resolution strategy (`linear` or `double`)
    pub method: ProbingMethod,
}

impl TableConfig {
    /// Builds the probing table configuration, rounding the capacity up to
    /// the smallest prime not below the requested size.
    pub fn to_table_config(&self) -> ConfigResult<NaluProbingTableConfig> {
        Ok(NaluProbingTableConfig::new()
            .with_capacity(self.prime_capacity()?)
            .with_method(self.method))
    }

    fn prime_capacity(&self) -> ConfigResult<usize> {
        next_prime(self.capacity).ok_or_else(|| ConfigError::ValueOutOfRange {
            key: "table.capacity".to_string(),
            message: format!("no prime table size at or above {}", self.capacity),
        })
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        let defaults = NaluProbingTableConfig::default();
        Self {
            capacity: defaults.capacity,
            method: defaults.method,
        }
    }
}

impl Validate for TableConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ValidationError(
                "table capacity must be greater than 0".to_string(),
            ));
        }
        self.prime_capacity().map(|_| ())
    }
}
