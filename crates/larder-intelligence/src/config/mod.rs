// ABOUTME: Configuration module for larder-intelligence crate
// ABOUTME: Re-exports matcher configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Duplicate matcher tuning
pub mod matcher;

pub use error::ConfigError;
pub use matcher::MatcherConfig;
