// ABOUTME: Main library entry point for the Larder shopping-list engine
// ABOUTME: Turns meal-plan recipes into a de-duplicated shopping list over SQLite and HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder
//!
//! Generates shopping lists from a week of scheduled recipes. Raw ingredient
//! lines are parsed, aggregated across recipes, matched against the user's
//! current list, reviewed by the user, and finally written in one transaction.
//!
//! ## Architecture
//!
//! - **`larder-intelligence`**: pure parsing, aggregation, and matching
//! - **Database**: `SQLite` storage for recipes, meal plans, and list items
//! - **Services**: generation and review orchestration plus the List Mutator,
//!   the only code path that writes shopping-list rows
//! - **Routes**: thin `axum` handlers over the services
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use larder::config::environment::ServerConfig;
//! use larder::database::Database;
//! use larder::services::{GenerateRequest, ShoppingListService};
//! use larder_core::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database_url).await?;
//!     let service = ShoppingListService::new(database, config.matcher);
//!
//!     let week_start = chrono::NaiveDate::from_ymd_opt(2025, 3, 3).unwrap_or_default();
//!     let preview = service
//!         .generate(&GenerateRequest::preview(uuid::Uuid::new_v4(), week_start))
//!         .await?;
//!     println!("{} ingredients", preview.ingredients.len());
//!     Ok(())
//! }
//! ```

/// Server configuration from environment variables
pub mod config;

/// `SQLite` storage and transaction guard
pub mod database;

/// Structured logging setup
pub mod logging;

/// HTTP middleware configuration
pub mod middleware;

/// Shared resources handed to route handlers
pub mod resources;

/// HTTP routes
pub mod routes;

/// Domain services
pub mod services;
