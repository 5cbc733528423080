// ABOUTME: Ingredient intelligence for the Larder shopping-list engine
// ABOUTME: Line parsing, cross-recipe aggregation, and duplicate matching with no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder Intelligence
//!
//! Stateless algorithms that turn free-text recipe ingredients into shopping-list
//! suggestions. Extracted from the main crate so the persistence and HTTP layers
//! compile independently.
//!
//! ## Modules
//!
//! - **recipes**: unit vocabulary, line parser, aggregator, and duplicate matcher
//! - **config**: matcher tuning loaded from the environment

/// Matcher configuration and validation errors
pub mod config;

/// Ingredient parsing, aggregation, and matching
pub mod recipes;

pub use config::{ConfigError, MatcherConfig};
