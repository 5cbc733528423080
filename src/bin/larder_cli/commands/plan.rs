// ABOUTME: Meal plan commands for larder-cli
// ABOUTME: Schedules stored recipes onto days of the week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use larder::database::Database;
use larder_core::errors::{AppError, AppResult};
use larder_core::models::MealType;
use uuid::Uuid;

use crate::helpers::display::print_json;

/// Schedule a recipe; the recipe must exist when scheduled
pub async fn add(
    database: &Database,
    user_id: Uuid,
    recipe_id: Uuid,
    date: NaiveDate,
    meal_type: MealType,
    json: bool,
) -> AppResult<()> {
    let recipe = database
        .get_recipe(user_id, recipe_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;

    let entry = database
        .schedule_recipe(user_id, recipe_id, date, meal_type)
        .await?;

    if json {
        print_json(&entry)
    } else {
        println!(
            "Scheduled '{}' for {} {} ({})",
            recipe.name,
            entry.planned_date,
            entry.meal_type.as_str(),
            entry.id
        );
        Ok(())
    }
}
