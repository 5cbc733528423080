// ABOUTME: Integration tests for meal-plan week generation and review apply
// ABOUTME: Verifies preview purity, idempotent regeneration, omitted entries, and review round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use helpers::fixtures::{item_names, plan_recipe, seed_items, test_database, week_start};
use larder::database::Database;
use larder::services::{GenerateRequest, ShoppingListService};
use larder_core::errors::ErrorCode;
use larder_core::models::{MealType, ShoppingListItem};
use larder_intelligence::recipes::{IngredientUnit, MatchConfidence, SuggestedAction};
use larder_intelligence::MatcherConfig;
use uuid::Uuid;

fn service(database: &Database) -> ShoppingListService {
    ShoppingListService::new(database.clone(), MatcherConfig::default())
}

fn add_request(user_id: Uuid, clear_existing: bool) -> GenerateRequest {
    GenerateRequest {
        user_id,
        week_start: week_start(),
        add_to_list: true,
        clear_existing,
    }
}

async fn meal_plan_rows(database: &Database, user_id: Uuid) -> BTreeSet<String> {
    database
        .list_shopping_items(user_id, false)
        .await
        .unwrap()
        .into_iter()
        .filter(|item| item.from_meal_plan)
        .map(|item| item.name)
        .collect()
}

#[tokio::test]
async fn test_preview_aggregates_week_without_writing() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    plan_recipe(&database, user_id, "Pancakes", &["1 cup sugar", "2 eggs"], 0).await;
    plan_recipe(&database, user_id, "Cookies", &["1 cup sugar", "1 tsp vanilla"], 2).await;

    let generation = service(&database)
        .generate(&GenerateRequest::preview(user_id, week_start()))
        .await
        .unwrap();

    assert_eq!(generation.week_start, week_start());
    assert_eq!(
        generation.week_end,
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    );
    assert!(!generation.already_added);
    assert!(generation.added_items.is_empty());

    let names: Vec<&str> = generation
        .ingredients
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, vec!["sugar", "eggs", "vanilla"]);

    let sugar = &generation.ingredients[0];
    assert_eq!(sugar.id, "ingredient-0");
    assert_eq!(sugar.quantity, Some(2.0));
    assert_eq!(sugar.unit, Some(IngredientUnit::Cup));
    assert_eq!(sugar.source_recipes.len(), 2);
    assert!(sugar.is_selected);

    assert!(item_names(&database, user_id).await.is_empty());
    assert!(!database.is_week_added(user_id, week_start()).await.unwrap());
}

#[tokio::test]
async fn test_only_the_requested_week_is_aggregated() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    plan_recipe(&database, user_id, "Sunday roast", &["1 chicken"], 6).await;
    plan_recipe(&database, user_id, "Next Monday", &["1 lb pasta"], 7).await;

    let other_user = Uuid::new_v4();
    plan_recipe(&database, other_user, "Not mine", &["2 lemons"], 1).await;

    let generation = service(&database)
        .generate(&GenerateRequest::preview(user_id, week_start()))
        .await
        .unwrap();
    let names: Vec<&str> = generation
        .ingredients
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, vec!["chicken"]);
}

#[tokio::test]
async fn test_meals_on_one_day_follow_meal_order() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();

    let dinner = database
        .create_recipe(user_id, "Curry", "1 cup rice")
        .await
        .unwrap();
    let breakfast = database
        .create_recipe(user_id, "Porridge", "1 cup oats")
        .await
        .unwrap();
    database
        .schedule_recipe(user_id, dinner.id, week_start(), MealType::Dinner)
        .await
        .unwrap();
    database
        .schedule_recipe(user_id, breakfast.id, week_start(), MealType::Breakfast)
        .await
        .unwrap();

    let generation = service(&database)
        .generate(&GenerateRequest::preview(user_id, week_start()))
        .await
        .unwrap();
    let names: Vec<&str> = generation
        .ingredients
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, vec!["oats", "rice"]);
}

#[tokio::test]
async fn test_generation_matches_existing_list() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    plan_recipe(&database, user_id, "Soup", &["2 onions", "1 tbsp olive oil"], 1).await;
    let existing = ShoppingListItem::new(user_id, "3 onions");
    let checked = ShoppingListItem::new(user_id, "olive oil").with_checked(true);
    seed_items(&database, &[existing.clone(), checked]).await;

    let generation = service(&database)
        .generate(&GenerateRequest::preview(user_id, week_start()))
        .await
        .unwrap();

    let onions = &generation.ingredients[0];
    assert_eq!(onions.duplicate_matches.len(), 1);
    assert_eq!(
        onions.duplicate_matches[0].match_confidence,
        MatchConfidence::High
    );
    assert_eq!(onions.suggested_action, SuggestedAction::Skip);
    assert_eq!(onions.target_item_id, Some(existing.id));
    assert!(!onions.is_selected);

    let oil = &generation.ingredients[1];
    assert!(oil.duplicate_matches.is_empty());
    assert!(oil.is_selected);
}

#[tokio::test]
async fn test_generate_with_clear_existing_is_idempotent() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    plan_recipe(&database, user_id, "Tacos", &["1 lb ground beef", "8 tortillas"], 3).await;
    plan_recipe(&database, user_id, "Chili", &["1 lb ground beef", "1 can beans"], 4).await;
    seed_items(&database, &[ShoppingListItem::new(user_id, "coffee")]).await;

    let service = service(&database);
    let first = service.generate(&add_request(user_id, true)).await.unwrap();
    assert!(!first.already_added);
    assert_eq!(first.added_items.len(), 3);
    let after_first = meal_plan_rows(&database, user_id).await;

    let second = service.generate(&add_request(user_id, true)).await.unwrap();
    assert!(second.already_added);
    let after_second = meal_plan_rows(&database, user_id).await;

    assert_eq!(after_first, after_second);
    assert_eq!(
        after_first,
        BTreeSet::from([
            "2 lb ground beef".to_owned(),
            "8 tortillas".to_owned(),
            "1 can beans".to_owned(),
        ])
    );
    assert!(item_names(&database, user_id)
        .await
        .contains(&"coffee".to_owned()));
}

#[tokio::test]
async fn test_meal_plan_rows_do_not_attract_matches_when_clearing() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    plan_recipe(&database, user_id, "Salad", &["2 tomatoes"], 0).await;

    let service = service(&database);
    service.generate(&add_request(user_id, true)).await.unwrap();

    let regenerated = service.generate(&add_request(user_id, true)).await.unwrap();
    assert!(regenerated.ingredients[0].duplicate_matches.is_empty());

    let preview = service
        .generate(&GenerateRequest::preview(user_id, week_start()))
        .await
        .unwrap();
    assert_eq!(preview.ingredients[0].duplicate_matches.len(), 1);
}

#[tokio::test]
async fn test_generate_without_clear_duplicates_rows() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    plan_recipe(&database, user_id, "Toast", &["1 loaf bread"], 0).await;

    let service = service(&database);
    service.generate(&add_request(user_id, false)).await.unwrap();
    service.generate(&add_request(user_id, false)).await.unwrap();

    assert_eq!(item_names(&database, user_id).await.len(), 2);
}

#[tokio::test]
async fn test_clear_existing_requires_add_to_list() {
    let database = test_database().await;
    let request = GenerateRequest {
        user_id: Uuid::new_v4(),
        week_start: week_start(),
        add_to_list: false,
        clear_existing: true,
    };
    let err = service(&database).generate(&request).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_entries_for_deleted_recipes_are_reported() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    plan_recipe(&database, user_id, "Kept", &["1 cup rice"], 0).await;
    let deleted = plan_recipe(&database, user_id, "Gone", &["2 limes"], 1).await;
    assert!(database.delete_recipe(user_id, deleted.id).await.unwrap());

    let generation = service(&database)
        .generate(&GenerateRequest::preview(user_id, week_start()))
        .await
        .unwrap();

    assert_eq!(generation.ingredients.len(), 1);
    assert_eq!(generation.omitted_entries.len(), 1);
    assert_eq!(generation.omitted_entries[0].recipe_id, deleted.id);
    assert_eq!(
        generation.omitted_entries[0].planned_date,
        week_start().checked_add_days(Days::new(1)).unwrap()
    );
}

#[tokio::test]
async fn test_review_round_trip_applies_selected_entries() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    plan_recipe(&database, user_id, "Omelette", &["4 eggs", "50 g cheese", "1 tbsp butter"], 0).await;
    let eggs = ShoppingListItem::new(user_id, "2 eggs");
    seed_items(&database, &[eggs.clone()]).await;

    let service = service(&database);
    let mut ingredients = service
        .generate(&GenerateRequest::preview(user_id, week_start()))
        .await
        .unwrap()
        .ingredients;

    assert_eq!(ingredients[0].suggested_action, SuggestedAction::Combine);
    ingredients[1].edited_quantity = Some("100 g".to_owned());
    ingredients[2].is_selected = false;

    let outcome = service.add_from_review(user_id, &ingredients).await.unwrap();

    assert_eq!(outcome.updated_items.len(), 1);
    assert_eq!(outcome.updated_items[0].id, eggs.id);
    assert_eq!(outcome.added_items.len(), 1);
    assert!(outcome.omitted.is_empty());
    assert_eq!(
        item_names(&database, user_id).await,
        vec!["6 eggs", "100 g cheese"]
    );
}

#[tokio::test]
async fn test_review_with_nothing_selected_is_a_no_op() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    plan_recipe(&database, user_id, "Tea", &["1 lemon"], 0).await;

    let service = service(&database);
    let mut ingredients = service
        .generate(&GenerateRequest::preview(user_id, week_start()))
        .await
        .unwrap()
        .ingredients;
    for ingredient in &mut ingredients {
        ingredient.is_selected = false;
    }

    let outcome = service.add_from_review(user_id, &ingredients).await.unwrap();
    assert!(outcome.added_items.is_empty());
    assert!(outcome.updated_items.is_empty());
    assert!(item_names(&database, user_id).await.is_empty());
}
