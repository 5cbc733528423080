// ABOUTME: Shopping list commands for larder-cli
// ABOUTME: Preview or generate a week, apply a reviewed selection, and list items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use larder::services::{GenerateRequest, ProcessedIngredient, ShoppingListService};
use larder_core::errors::{AppError, AppResult};
use uuid::Uuid;

use crate::helpers::display::{display_generation, display_items, display_outcome, print_json};

/// Run generation for a week
pub async fn generate(
    service: &ShoppingListService,
    request: &GenerateRequest,
    json: bool,
) -> AppResult<()> {
    let generation = service.generate(request).await?;

    if json {
        print_json(&generation)
    } else {
        display_generation(&generation);
        Ok(())
    }
}

/// Apply a reviewed selection read from `file`
pub async fn review(
    service: &ShoppingListService,
    user_id: Uuid,
    file: &Path,
    json: bool,
) -> AppResult<()> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .map_err(|e| AppError::invalid_input(format!("Cannot read {}: {e}", file.display())))?;
    let ingredients: Vec<ProcessedIngredient> = serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_input(format!("{} is not a reviewed ingredient list: {e}", file.display()))
    })?;

    let outcome = service.add_from_review(user_id, &ingredients).await?;

    if json {
        print_json(&outcome)
    } else {
        display_outcome(&outcome);
        Ok(())
    }
}

/// Print the shopping list
pub async fn list(
    service: &ShoppingListService,
    user_id: Uuid,
    unchecked_only: bool,
    json: bool,
) -> AppResult<()> {
    let items = service.list_items(user_id, unchecked_only).await?;
    if json {
        print_json(&items)
    } else {
        display_items(&items);
        Ok(())
    }
}
