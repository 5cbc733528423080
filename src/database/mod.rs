// ABOUTME: SQLite persistence for recipes, meal plans, and shopping-list items
// ABOUTME: Opens the pool, runs idempotent migrations, and hands out transaction guards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Read-side queries are methods on [`Database`]. Shopping-list writes are free
//! functions taking a transaction connection so they can only run inside a
//! [`TransactionGuard`] opened by the List Mutator.

/// Meal-plan entries and week flags
pub mod meal_plans;
/// Recipe storage
pub mod recipes;
/// Shopping-list items
pub mod shopping_list;
/// RAII transaction guard
pub mod transactions;

pub use meal_plans::WeekRecipes;
pub use recipes::StoredRecipe;
pub use transactions::{SqliteTransactionGuard, TransactionGuard};

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use larder_core::errors::{AppResult, DatabaseError};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

/// Database manager for recipe, meal-plan, and shopping-list storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect and run migrations
    ///
    /// File databases are created on first use. In-memory databases are pinned
    /// to a single connection so every query sees the same database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let pool = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(database_url)
                .await
        } else {
            ensure_parent_directory(database_url).await?;
            // Ensure SQLite creates the database file if it doesn't exist
            let connection_options =
                if database_url.starts_with("sqlite:") && !database_url.contains('?') {
                    format!("{database_url}?mode=rwc")
                } else {
                    database_url.to_owned()
                };
            SqlitePoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(10))
                .connect(&connection_options)
                .await
        }
        .map_err(|e| DatabaseError::Connection(e.to_string()))?;

        let db = Self { pool };
        db.migrate().await?;
        info!(url = %database_url, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Open a transaction wrapped in a guard
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started
    pub async fn begin(&self) -> AppResult<SqliteTransactionGuard<'static>> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::transaction("begin", e))?;
        Ok(TransactionGuard::new(tx))
    }

    /// Verify the database answers queries
    ///
    /// # Errors
    ///
    /// Returns an error if the probe query fails
    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("health check", e))?;
        Ok(())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_recipes().await?;
        self.migrate_meal_plans().await?;
        self.migrate_shopping_list().await?;
        debug!("Migrations applied");
        Ok(())
    }

    async fn run_migration(&self, step: &'static str, statement: &str) -> AppResult<()> {
        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::Migration {
                step,
                reason: e.to_string(),
            })?;
        Ok(())
    }

    async fn migrate_recipes(&self) -> AppResult<()> {
        self.run_migration(
            "recipes",
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                ingredients TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
            )
            ",
        )
        .await?;
        self.run_migration(
            "recipes_user_index",
            "CREATE INDEX IF NOT EXISTS idx_recipes_user ON recipes(user_id)",
        )
        .await
    }

    async fn migrate_meal_plans(&self) -> AppResult<()> {
        // No foreign key on recipe_id: entries outlive deleted recipes and are
        // reported as omitted during generation
        self.run_migration(
            "meal_plan_entries",
            r"
            CREATE TABLE IF NOT EXISTS meal_plan_entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                recipe_id TEXT NOT NULL,
                planned_date TEXT NOT NULL,
                meal_type TEXT NOT NULL DEFAULT 'dinner'
            )
            ",
        )
        .await?;
        self.run_migration(
            "meal_plan_entries_index",
            "CREATE INDEX IF NOT EXISTS idx_meal_plan_entries_user_date ON meal_plan_entries(user_id, planned_date)",
        )
        .await?;
        self.run_migration(
            "meal_plan_weeks",
            r"
            CREATE TABLE IF NOT EXISTS meal_plan_weeks (
                user_id TEXT NOT NULL,
                week_start TEXT NOT NULL,
                added_to_shopping_list INTEGER NOT NULL DEFAULT 0,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (user_id, week_start)
            )
            ",
        )
        .await
    }

    async fn migrate_shopping_list(&self) -> AppResult<()> {
        self.run_migration(
            "shopping_list_items",
            r"
            CREATE TABLE IF NOT EXISTS shopping_list_items (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                checked INTEGER NOT NULL DEFAULT 0,
                recipe_id TEXT,
                from_meal_plan INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )
            ",
        )
        .await?;
        self.run_migration(
            "shopping_list_items_index",
            "CREATE INDEX IF NOT EXISTS idx_shopping_list_items_user ON shopping_list_items(user_id, created_at)",
        )
        .await
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

async fn ensure_parent_directory(database_url: &str) -> AppResult<()> {
    let Some(path) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    let path = path.trim_start_matches("//");
    let path = path.split('?').next().unwrap_or(path);
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DatabaseError::Connection(format!("cannot create {}: {e}", parent.display())))?;
    }
    Ok(())
}

// Column codecs: ids and timestamps are stored as TEXT

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(column: &'static str, raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            DatabaseError::InvalidData {
                column,
                reason: e.to_string(),
            }
            .into()
        })
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_date(column: &'static str, raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        DatabaseError::InvalidData {
            column,
            reason: e.to_string(),
        }
        .into()
    })
}

fn parse_uuid(column: &'static str, raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| {
        DatabaseError::InvalidData {
            column,
            reason: e.to_string(),
        }
        .into()
    })
}
