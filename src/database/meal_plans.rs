// ABOUTME: Meal-plan entries and per-week "added to shopping list" flags
// ABOUTME: Resolves a week's scheduled recipes and reports entries whose recipe vanished
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Utc};
use larder_core::errors::{AppResult, DatabaseError};
use larder_core::models::{MealPlanEntry, MealType};
use larder_intelligence::recipes::RecipeIngredients;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};
use uuid::Uuid;

use super::{format_date, format_timestamp, parse_date, parse_uuid, Database};

/// Recipes scheduled in a date range, in meal-by-meal order
#[derive(Debug, Clone, Default)]
pub struct WeekRecipes {
    /// Ingredient text of each scheduled recipe, one per entry
    pub recipes: Vec<RecipeIngredients>,
    /// Entries whose recipe no longer exists
    pub missing: Vec<MealPlanEntry>,
}

fn entry_from_row(row: &SqliteRow) -> AppResult<MealPlanEntry> {
    let id: String = row.get("id");
    let user_id: String = row.get("user_id");
    let recipe_id: String = row.get("recipe_id");
    let planned_date: String = row.get("planned_date");
    let meal_type: String = row.get("meal_type");
    Ok(MealPlanEntry {
        id: parse_uuid("id", &id)?,
        user_id: parse_uuid("user_id", &user_id)?,
        recipe_id: parse_uuid("recipe_id", &recipe_id)?,
        planned_date: parse_date("planned_date", &planned_date)?,
        meal_type: MealType::from_str_lossy(&meal_type),
    })
}

impl Database {
    /// Schedule a recipe on a day
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn schedule_recipe(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        planned_date: NaiveDate,
        meal_type: MealType,
    ) -> AppResult<MealPlanEntry> {
        let entry = MealPlanEntry {
            id: Uuid::new_v4(),
            user_id,
            recipe_id,
            planned_date,
            meal_type,
        };

        sqlx::query(
            r"
            INSERT INTO meal_plan_entries (id, user_id, recipe_id, planned_date, meal_type)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(entry.id.to_string())
        .bind(user_id.to_string())
        .bind(recipe_id.to_string())
        .bind(format_date(planned_date))
        .bind(meal_type.as_str())
        .execute(self.pool())
        .await
        .map_err(|e| DatabaseError::query("schedule recipe", e))?;

        Ok(entry)
    }

    /// Recipes scheduled between `start` and `end`, both inclusive
    ///
    /// A recipe scheduled twice contributes twice. Entries whose recipe was
    /// deleted are returned in `missing` instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed
    pub async fn recipes_for_week(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<WeekRecipes> {
        let rows = sqlx::query(
            r"
            SELECT e.id, e.user_id, e.recipe_id, e.planned_date, e.meal_type,
                   r.name AS recipe_name, r.ingredients AS recipe_ingredients
            FROM meal_plan_entries e
            LEFT JOIN recipes r ON r.id = e.recipe_id AND r.user_id = e.user_id
            WHERE e.user_id = $1 AND e.planned_date >= $2 AND e.planned_date <= $3
            ORDER BY e.planned_date, e.rowid
            ",
        )
        .bind(user_id.to_string())
        .bind(format_date(start))
        .bind(format_date(end))
        .fetch_all(self.pool())
        .await
        .map_err(|e| DatabaseError::query("load meal plan week", e))?;

        let mut scheduled = Vec::with_capacity(rows.len());
        for row in &rows {
            let entry = entry_from_row(row)?;
            let name: Option<String> = row.get("recipe_name");
            let ingredients: Option<String> = row.get("recipe_ingredients");
            scheduled.push((entry, name.zip(ingredients)));
        }
        scheduled.sort_by_key(|(entry, _)| (entry.planned_date, entry.meal_type.day_order()));

        let mut week = WeekRecipes::default();
        for (entry, recipe) in scheduled {
            match recipe {
                Some((name, ingredients)) => week.recipes.push(RecipeIngredients::from_text(
                    entry.recipe_id,
                    name,
                    &ingredients,
                )),
                None => week.missing.push(entry),
            }
        }
        Ok(week)
    }

    /// Whether the week was already added to the shopping list
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn is_week_added(&self, user_id: Uuid, week_start: NaiveDate) -> AppResult<bool> {
        let added: Option<bool> = sqlx::query_scalar(
            r"
            SELECT added_to_shopping_list FROM meal_plan_weeks
            WHERE user_id = $1 AND week_start = $2
            ",
        )
        .bind(user_id.to_string())
        .bind(format_date(week_start))
        .fetch_optional(self.pool())
        .await
        .map_err(|e| DatabaseError::query("read week flag", e))?;

        Ok(added.unwrap_or(false))
    }
}

/// Flag a week as added to the shopping list inside the caller's transaction
///
/// # Errors
///
/// Returns an error if the upsert fails
pub async fn mark_week_added(
    conn: &mut SqliteConnection,
    user_id: Uuid,
    week_start: NaiveDate,
) -> AppResult<()> {
    sqlx::query(
        r"
        INSERT INTO meal_plan_weeks (user_id, week_start, added_to_shopping_list, updated_at)
        VALUES ($1, $2, 1, $3)
        ON CONFLICT (user_id, week_start)
        DO UPDATE SET added_to_shopping_list = 1, updated_at = excluded.updated_at
        ",
    )
    .bind(user_id.to_string())
    .bind(format_date(week_start))
    .bind(format_timestamp(Utc::now()))
    .execute(conn)
    .await
    .map_err(|e| DatabaseError::query("mark week added", e))?;

    Ok(())
}
