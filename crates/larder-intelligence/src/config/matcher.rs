// ABOUTME: Duplicate matcher configuration with environment overrides
// ABOUTME: Holds the token-overlap threshold that separates low-confidence matches from no match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use larder_core::constants::{defaults, env_keys};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Duplicate matcher configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum `|A ∩ B| / min(|A|, |B|)` over significant tokens for a low-confidence match (0.0-1.0]
    pub low_overlap_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            low_overlap_threshold: defaults::LOW_MATCH_TOKEN_OVERLAP,
        }
    }
}

impl MatcherConfig {
    /// Load configuration, applying `LARDER_LOW_MATCH_THRESHOLD` when set
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not a number in `(0, 1]`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        match env::var(env_keys::LOW_MATCH_THRESHOLD) {
            Ok(raw) => {
                config.low_overlap_threshold = raw.trim().parse::<f64>().map_err(|e| {
                    ConfigError::Parse(format!(
                        "{}={raw:?}: {e}",
                        env_keys::LOW_MATCH_THRESHOLD
                    ))
                })?;
            }
            Err(env::VarError::NotPresent) => {}
            Err(e) => return Err(e.into()),
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate value ranges
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is outside `(0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.low_overlap_threshold > 0.0 && self.low_overlap_threshold <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "low_overlap_threshold must be in (0, 1]",
            ));
        }
        Ok(())
    }
}
