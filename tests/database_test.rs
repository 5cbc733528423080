// ABOUTME: Storage tests for migrations, transaction guards, and week flags
// ABOUTME: Uses in-memory databases plus a temp-dir file database for on-disk behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::fixtures::{item_names, test_database, week_start};
use larder::database::{meal_plans, shopping_list, Database};
use larder_core::models::ShoppingListItem;
use tempfile::TempDir;
use uuid::Uuid;

#[tokio::test]
async fn test_dropped_guard_rolls_back() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();

    {
        let mut guard = database.begin().await.unwrap();
        shopping_list::insert_item(guard.executor().unwrap(), &ShoppingListItem::new(user_id, "milk"))
            .await
            .unwrap();
    }

    assert!(item_names(&database, user_id).await.is_empty());
}

#[tokio::test]
async fn test_explicit_rollback_discards_writes() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();

    let mut guard = database.begin().await.unwrap();
    shopping_list::insert_item(guard.executor().unwrap(), &ShoppingListItem::new(user_id, "eggs"))
        .await
        .unwrap();
    assert!(!guard.is_committed());
    guard.rollback().await.unwrap();

    assert!(item_names(&database, user_id).await.is_empty());
}

#[tokio::test]
async fn test_update_and_delete_are_scoped_to_user() {
    let database = test_database().await;
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let item = ShoppingListItem::new(owner, "2 onions").from_meal_plan(true);

    let mut guard = database.begin().await.unwrap();
    shopping_list::insert_item(guard.executor().unwrap(), &item)
        .await
        .unwrap();
    let renamed = shopping_list::update_item_name(guard.executor().unwrap(), stranger, item.id, "x")
        .await
        .unwrap();
    assert!(!renamed);
    assert!(shopping_list::find_item(guard.executor().unwrap(), stranger, item.id)
        .await
        .unwrap()
        .is_none());
    let deleted = shopping_list::delete_meal_plan_items(guard.executor().unwrap(), stranger)
        .await
        .unwrap();
    assert_eq!(deleted, 0);
    guard.commit().await.unwrap();

    assert_eq!(item_names(&database, owner).await, vec!["2 onions"]);
}

#[tokio::test]
async fn test_week_flag_upsert() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    assert!(!database.is_week_added(user_id, week_start()).await.unwrap());

    for _ in 0..2 {
        let mut guard = database.begin().await.unwrap();
        meal_plans::mark_week_added(guard.executor().unwrap(), user_id, week_start())
            .await
            .unwrap();
        guard.commit().await.unwrap();
    }

    assert!(database.is_week_added(user_id, week_start()).await.unwrap());
    assert!(!database
        .is_week_added(Uuid::new_v4(), week_start())
        .await
        .unwrap());
}

#[tokio::test]
async fn test_file_database_creates_parent_directory_and_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("larder.db");
    let url = format!("sqlite:{}", path.display());
    let user_id = Uuid::new_v4();

    {
        let database = Database::new(&url).await.unwrap();
        database
            .create_recipe(user_id, "Bread", "500 g flour\n1 tsp salt")
            .await
            .unwrap();
        database.pool().close().await;
    }

    assert!(path.exists());

    let reopened = Database::new(&url).await.unwrap();
    let recipes = reopened.list_recipes(user_id).await.unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].to_ingredients().lines.len(), 2);
    reopened.health_check().await.unwrap();
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let database = test_database().await;
    database.migrate().await.unwrap();
    database.migrate().await.unwrap();
    database.health_check().await.unwrap();
}
