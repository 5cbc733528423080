// ABOUTME: Environment configuration for the HTTP server and CLI
// ABOUTME: Reads the database URL, listen port, and matcher tuning with typed validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;

use larder_core::constants::{defaults, env_keys, ports};
use larder_core::errors::{AppError, AppResult};
use larder_intelligence::MatcherConfig;
use tracing::info;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `SQLx` connection URL
    pub database_url: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Duplicate matcher tuning
    pub matcher: MatcherConfig,
    /// Comma-separated CORS origins, or `*`
    pub cors_allowed_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: defaults::DEFAULT_DATABASE_URL.to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            matcher: MatcherConfig::default(),
            cors_allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set to a value that does not parse
    /// or is out of range
    pub fn from_env() -> AppResult<Self> {
        let database_url = env_var_or(env_keys::DATABASE_URL, defaults::DEFAULT_DATABASE_URL);
        if database_url.trim().is_empty() {
            return Err(AppError::config_invalid(format!(
                "{} must not be empty",
                env_keys::DATABASE_URL
            )));
        }

        let http_port = match env::var(env_keys::HTTP_PORT) {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => ports::DEFAULT_HTTP_PORT,
        };

        let matcher = MatcherConfig::from_env()?;

        let config = Self {
            database_url,
            http_port,
            matcher,
            cors_allowed_origins: env_var_or(
                env_keys::CORS_ALLOWED_ORIGINS,
                defaults::CORS_ALLOWED_ORIGINS,
            ),
        };
        info!(
            http_port = config.http_port,
            low_overlap_threshold = config.matcher.low_overlap_threshold,
            "Loaded configuration from environment"
        );
        Ok(config)
    }
}

/// Get environment variable with fallback
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_port(raw: &str) -> AppResult<u16> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(AppError::config_invalid(format!(
            "Invalid {} value: {raw}",
            env_keys::HTTP_PORT
        ))),
    }
}
