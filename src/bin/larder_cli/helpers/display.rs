// ABOUTME: Output formatting helpers for larder-cli
// ABOUTME: Human-readable summaries of generations, outcomes, recipes, and list items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder::database::StoredRecipe;
use larder::services::{MutationOutcome, ShoppingListGeneration};
use larder_core::errors::AppResult;
use larder_core::models::ShoppingListItem;
use larder_intelligence::recipes::SuggestedAction;
use serde::Serialize;

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a generated week with each ingredient's suggested action
pub fn display_generation(generation: &ShoppingListGeneration) {
    println!(
        "\nWeek {} to {}{}",
        generation.week_start,
        generation.week_end,
        if generation.already_added {
            " (already added to shopping list)"
        } else {
            ""
        }
    );
    println!("{}", "=".repeat(60));

    for ingredient in &generation.ingredients {
        let marker = if ingredient.is_selected { "[x]" } else { "[ ]" };
        let action = match ingredient.suggested_action {
            SuggestedAction::Skip => "skip",
            SuggestedAction::Combine => "combine",
            SuggestedAction::AddSeparate => "add",
        };
        let name = ingredient
            .display_name()
            .unwrap_or_else(|_| format!("{} (invalid quantity)", ingredient.name));
        println!("{marker} {name:<40} {action}");
        for candidate in &ingredient.duplicate_matches {
            println!(
                "      ~ {} ({:?})",
                candidate.existing_item_name, candidate.match_confidence
            );
        }
    }

    for entry in &generation.omitted_entries {
        println!(
            "Omitted: {} {} references a deleted recipe",
            entry.planned_date,
            entry.meal_type.as_str()
        );
    }

    if !generation.added_items.is_empty() {
        println!("\nAdded {} items to the shopping list", generation.added_items.len());
    }
}

/// Display the result of applying a review
pub fn display_outcome(outcome: &MutationOutcome) {
    for item in &outcome.added_items {
        println!("+ {}", item.name);
    }
    for item in &outcome.updated_items {
        println!("~ {}", item.name);
    }
    for omitted in &outcome.omitted {
        println!("- {} ({:?})", omitted.name, omitted.reason);
    }
    println!(
        "\n{} added, {} updated, {} omitted",
        outcome.added_items.len(),
        outcome.updated_items.len(),
        outcome.omitted.len()
    );
}

/// Display stored recipes
pub fn display_recipes(recipes: &[StoredRecipe]) {
    if recipes.is_empty() {
        println!("No recipes");
        return;
    }
    for recipe in recipes {
        let lines = recipe.ingredients.lines().filter(|l| !l.trim().is_empty()).count();
        println!("{}  {} ({lines} ingredients)", recipe.id, recipe.name);
    }
}

/// Display shopping-list items
pub fn display_items(items: &[ShoppingListItem]) {
    if items.is_empty() {
        println!("Shopping list is empty");
        return;
    }
    for item in items {
        let marker = if item.checked { "[x]" } else { "[ ]" };
        let origin = if item.from_meal_plan { " (meal plan)" } else { "" };
        println!("{marker} {}{origin}", item.name);
    }
}
