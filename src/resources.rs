// ABOUTME: Centralized resource container shared by route handlers
// ABOUTME: Holds the database handle, the shopping list service, and loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once at startup and handed to the router as `Arc<ServerResources>`.

use std::sync::Arc;

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::services::ShoppingListService;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Storage handle, also used for readiness probes
    pub database: Database,
    /// Generation and review service
    pub shopping_list: ShoppingListService,
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire services over an open database
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            shopping_list: ShoppingListService::new(database.clone(), config.matcher),
            database,
            config: Arc::new(config),
        }
    }
}
