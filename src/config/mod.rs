// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Everything is read from environment variables at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Larder server
//!
//! - **Environment**: server configuration from environment variables
//! - **Matcher**: duplicate-matcher tuning, re-exported from `larder-intelligence`

/// Environment and server configuration
pub mod environment;

pub use environment::ServerConfig;
pub use larder_intelligence::MatcherConfig;
