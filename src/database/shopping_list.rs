// ABOUTME: Shopping-list item storage
// ABOUTME: Reads are pool-wide; writes take a transaction connection and belong to the List Mutator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder_core::errors::{AppResult, DatabaseError};
use larder_core::models::ShoppingListItem;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};
use uuid::Uuid;

use super::{format_timestamp, parse_timestamp, parse_uuid, Database};

const ITEM_COLUMNS: &str = "id, user_id, name, checked, recipe_id, from_meal_plan, created_at";

fn item_from_row(row: &SqliteRow) -> AppResult<ShoppingListItem> {
    let id: String = row.get("id");
    let user_id: String = row.get("user_id");
    let recipe_id: Option<String> = row.get("recipe_id");
    let created_at: String = row.get("created_at");
    Ok(ShoppingListItem {
        id: parse_uuid("id", &id)?,
        user_id: parse_uuid("user_id", &user_id)?,
        name: row.get("name"),
        checked: row.get("checked"),
        recipe_id: recipe_id
            .as_deref()
            .map(|raw| parse_uuid("recipe_id", raw))
            .transpose()?,
        from_meal_plan: row.get("from_meal_plan"),
        created_at: parse_timestamp("created_at", &created_at)?,
    })
}

impl Database {
    /// A user's shopping list in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed
    pub async fn list_shopping_items(
        &self,
        user_id: Uuid,
        unchecked_only: bool,
    ) -> AppResult<Vec<ShoppingListItem>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM shopping_list_items \
             WHERE user_id = $1 AND ($2 = 0 OR checked = 0) \
             ORDER BY created_at, rowid"
        );
        let rows = sqlx::query(&sql)
            .bind(user_id.to_string())
            .bind(unchecked_only)
            .fetch_all(self.pool())
            .await
            .map_err(|e| DatabaseError::query("list shopping items", e))?;

        rows.iter().map(item_from_row).collect()
    }
}

/// Insert a new item
///
/// # Errors
///
/// Returns an error if the insert fails
pub async fn insert_item(conn: &mut SqliteConnection, item: &ShoppingListItem) -> AppResult<()> {
    sqlx::query(
        r"
        INSERT INTO shopping_list_items (id, user_id, name, checked, recipe_id, from_meal_plan, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ",
    )
    .bind(item.id.to_string())
    .bind(item.user_id.to_string())
    .bind(&item.name)
    .bind(item.checked)
    .bind(item.recipe_id.map(|id| id.to_string()))
    .bind(item.from_meal_plan)
    .bind(format_timestamp(item.created_at))
    .execute(conn)
    .await
    .map_err(|e| DatabaseError::query("insert shopping item", e))?;

    Ok(())
}

/// Fetch one of the user's items
///
/// # Errors
///
/// Returns an error if the query fails or the row is malformed
pub async fn find_item(
    conn: &mut SqliteConnection,
    user_id: Uuid,
    item_id: Uuid,
) -> AppResult<Option<ShoppingListItem>> {
    let sql = format!("SELECT {ITEM_COLUMNS} FROM shopping_list_items WHERE user_id = $1 AND id = $2");
    let row = sqlx::query(&sql)
        .bind(user_id.to_string())
        .bind(item_id.to_string())
        .fetch_optional(conn)
        .await
        .map_err(|e| DatabaseError::query("find shopping item", e))?;

    row.as_ref().map(item_from_row).transpose()
}

/// Rename an item in place; returns whether the row existed
///
/// # Errors
///
/// Returns an error if the update fails
pub async fn update_item_name(
    conn: &mut SqliteConnection,
    user_id: Uuid,
    item_id: Uuid,
    name: &str,
) -> AppResult<bool> {
    let result = sqlx::query("UPDATE shopping_list_items SET name = $1 WHERE user_id = $2 AND id = $3")
        .bind(name)
        .bind(user_id.to_string())
        .bind(item_id.to_string())
        .execute(conn)
        .await
        .map_err(|e| DatabaseError::query("update shopping item", e))?;

    Ok(result.rows_affected() > 0)
}

/// Remove every item produced by meal-plan generation
///
/// # Errors
///
/// Returns an error if the delete fails
pub async fn delete_meal_plan_items(conn: &mut SqliteConnection, user_id: Uuid) -> AppResult<u64> {
    let result =
        sqlx::query("DELETE FROM shopping_list_items WHERE user_id = $1 AND from_meal_plan = 1")
            .bind(user_id.to_string())
            .execute(conn)
            .await
            .map_err(|e| DatabaseError::query("clear meal-plan items", e))?;

    Ok(result.rows_affected())
}
