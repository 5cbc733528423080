// ABOUTME: Recipe rows holding newline-delimited raw ingredient text
// ABOUTME: Upstream fixture storage for hosts, tests, and the CLI plus existence checks for the mutator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use larder_core::errors::{AppResult, DatabaseError};
use larder_intelligence::recipes::RecipeIngredients;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};
use uuid::Uuid;

use super::{format_timestamp, parse_timestamp, parse_uuid, Database};

/// A persisted recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecipe {
    /// Recipe identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Raw ingredient lines, newline-delimited
    pub ingredients: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl StoredRecipe {
    /// Split the stored text into parser input
    #[must_use]
    pub fn to_ingredients(&self) -> RecipeIngredients {
        RecipeIngredients::from_text(self.id, self.name.clone(), &self.ingredients)
    }

    fn from_row(row: &SqliteRow) -> AppResult<Self> {
        let id: String = row.get("id");
        let user_id: String = row.get("user_id");
        let created_at: String = row.get("created_at");
        Ok(Self {
            id: parse_uuid("id", &id)?,
            user_id: parse_uuid("user_id", &user_id)?,
            name: row.get("name"),
            ingredients: row.get("ingredients"),
            created_at: parse_timestamp("created_at", &created_at)?,
        })
    }
}

impl Database {
    /// Store a recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_recipe(
        &self,
        user_id: Uuid,
        name: &str,
        ingredients: &str,
    ) -> AppResult<StoredRecipe> {
        let recipe = StoredRecipe {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_owned(),
            ingredients: ingredients.to_owned(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO recipes (id, user_id, name, ingredients, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(recipe.id.to_string())
        .bind(recipe.user_id.to_string())
        .bind(&recipe.name)
        .bind(&recipe.ingredients)
        .bind(format_timestamp(recipe.created_at))
        .execute(self.pool())
        .await
        .map_err(|e| DatabaseError::query("create recipe", e))?;

        Ok(recipe)
    }

    /// Fetch one recipe owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed
    pub async fn get_recipe(&self, user_id: Uuid, recipe_id: Uuid) -> AppResult<Option<StoredRecipe>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, name, ingredients, created_at
            FROM recipes
            WHERE user_id = $1 AND id = $2
            ",
        )
        .bind(user_id.to_string())
        .bind(recipe_id.to_string())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| DatabaseError::query("get recipe", e))?;

        row.as_ref().map(StoredRecipe::from_row).transpose()
    }

    /// List a user's recipes, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed
    pub async fn list_recipes(&self, user_id: Uuid) -> AppResult<Vec<StoredRecipe>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, name, ingredients, created_at
            FROM recipes
            WHERE user_id = $1
            ORDER BY created_at, rowid
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(self.pool())
        .await
        .map_err(|e| DatabaseError::query("list recipes", e))?;

        rows.iter().map(StoredRecipe::from_row).collect()
    }

    /// Delete a recipe; meal-plan entries that reference it are kept
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_recipe(&self, user_id: Uuid, recipe_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE user_id = $1 AND id = $2")
            .bind(user_id.to_string())
            .bind(recipe_id.to_string())
            .execute(self.pool())
            .await
            .map_err(|e| DatabaseError::query("delete recipe", e))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Whether a recipe still exists, checked inside the caller's transaction
///
/// # Errors
///
/// Returns an error if the query fails
pub async fn recipe_exists(
    conn: &mut SqliteConnection,
    user_id: Uuid,
    recipe_id: Uuid,
) -> AppResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes WHERE user_id = $1 AND id = $2")
        .bind(user_id.to_string())
        .bind(recipe_id.to_string())
        .fetch_one(conn)
        .await
        .map_err(|e| DatabaseError::query("check recipe exists", e))?;

    Ok(count > 0)
}
