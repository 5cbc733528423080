// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for configuration defaults, env keys, and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
    /// Meal-plan week generation
    pub const GENERATE: &str = "/api/shopping-list/generate";
    /// Apply a reviewed selection
    pub const REVIEW: &str = "/api/shopping-list/review";
    /// List a user's items
    pub const ITEMS: &str = "/api/shopping-list/items";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Default configuration values
pub mod defaults {
    /// Default `SQLite` database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/larder.db";
    /// Default log level
    pub const DEFAULT_LOG_LEVEL: &str = "info";
    /// Share of significant tokens two names must have in common for a low-confidence match
    pub const LOW_MATCH_TOKEN_OVERLAP: f64 = 0.5;
    /// Allow any origin unless told otherwise
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Environment variable names
pub mod env_keys {
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Low-confidence token overlap threshold
    pub const LOW_MATCH_THRESHOLD: &str = "LARDER_LOW_MATCH_THRESHOLD";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the HTTP service
    pub const LARDER_SERVER: &str = "larder-server";
}

/// Domain limits
pub mod limits {
    /// Days in a meal-plan week, start day included
    pub const MEAL_PLAN_WEEK_DAYS: i64 = 7;
    /// Upper bound on ingredients accepted in a single review request
    pub const MAX_REVIEW_BATCH: usize = 500;
    /// Largest accepted request body
    pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
    /// Per-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}
