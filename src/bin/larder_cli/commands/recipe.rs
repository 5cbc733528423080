// ABOUTME: Recipe commands for larder-cli
// ABOUTME: Stores, lists, and deletes recipes whose ingredients feed generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use larder::database::Database;
use larder_core::errors::{AppError, AppResult};
use tracing::info;
use uuid::Uuid;

use crate::helpers::display::{display_recipes, print_json};

type Result<T> = AppResult<T>;

/// Store a recipe from a file or repeated `--ingredient` lines
pub async fn add(
    database: &Database,
    user_id: Uuid,
    name: &str,
    file: Option<&Path>,
    lines: &[String],
    json: bool,
) -> Result<()> {
    let ingredients = match file {
        Some(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
        })?,
        None => lines.join("\n"),
    };
    if ingredients.trim().is_empty() {
        return Err(AppError::missing_field("ingredients"));
    }

    let recipe = database.create_recipe(user_id, name, &ingredients).await?;
    info!(recipe_id = %recipe.id, "Recipe stored");

    if json {
        print_json(&recipe)
    } else {
        println!("Stored recipe '{}' ({})", recipe.name, recipe.id);
        Ok(())
    }
}

/// List a user's recipes
pub async fn list(database: &Database, user_id: Uuid, json: bool) -> Result<()> {
    let recipes = database.list_recipes(user_id).await?;
    if json {
        print_json(&recipes)
    } else {
        display_recipes(&recipes);
        Ok(())
    }
}

/// Delete a recipe
pub async fn delete(database: &Database, user_id: Uuid, recipe_id: Uuid) -> Result<()> {
    if !database.delete_recipe(user_id, recipe_id).await? {
        return Err(AppError::not_found(format!("Recipe {recipe_id}")));
    }
    println!("Deleted recipe {recipe_id}");
    Ok(())
}
