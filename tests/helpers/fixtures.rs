// ABOUTME: Database fixtures for integration tests
// ABOUTME: In-memory databases plus recipe and meal-plan seeding shortcuts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use larder::database::{Database, StoredRecipe};
use larder_core::models::{MealType, ShoppingListItem};
use uuid::Uuid;

/// Fresh in-memory database with migrations applied
pub async fn test_database() -> Database {
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database")
}

/// Monday used as the week start throughout the tests
pub fn week_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid date")
}

/// Store a recipe and schedule it `day_offset` days into the test week
pub async fn plan_recipe(
    database: &Database,
    user_id: Uuid,
    name: &str,
    lines: &[&str],
    day_offset: u64,
) -> StoredRecipe {
    let recipe = database
        .create_recipe(user_id, name, &lines.join("\n"))
        .await
        .expect("Failed to create recipe");
    let date = week_start()
        .checked_add_days(chrono::Days::new(day_offset))
        .expect("valid date");
    database
        .schedule_recipe(user_id, recipe.id, date, MealType::Dinner)
        .await
        .expect("Failed to schedule recipe");
    recipe
}

/// Insert list items directly, bypassing the mutator
pub async fn seed_items(database: &Database, items: &[ShoppingListItem]) {
    let mut guard = database.begin().await.expect("Failed to begin");
    for item in items {
        larder::database::shopping_list::insert_item(guard.executor().expect("executor"), item)
            .await
            .expect("Failed to insert item");
    }
    guard.commit().await.expect("Failed to commit");
}

/// Names of a user's items in list order
pub async fn item_names(database: &Database, user_id: Uuid) -> Vec<String> {
    database
        .list_shopping_items(user_id, false)
        .await
        .expect("Failed to list items")
        .into_iter()
        .map(|item| item.name)
        .collect()
}
