// ABOUTME: HTTP tests for the shopping list and health routes
// ABOUTME: Drives the full router with oneshot requests and checks status codes and envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{plan_recipe, seed_items, test_database};
use larder::config::ServerConfig;
use larder::database::Database;
use larder::resources::ServerResources;
use larder::routes::build_router;
use larder_core::models::ShoppingListItem;
use serde_json::{json, Value};
use uuid::Uuid;

const GENERATE: &str = "/api/shopping-list/generate";
const REVIEW: &str = "/api/shopping-list/review";

fn router(database: &Database) -> Router {
    let resources = ServerResources::new(database.clone(), ServerConfig::default());
    build_router(Arc::new(resources))
}

fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().expect("error code present")
}

#[tokio::test]
async fn test_health_and_ready() {
    let database = test_database().await;

    let health: Value = AxumTestRequest::get("/health")
        .send(router(&database))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "larder-server");

    let ready: Value = AxumTestRequest::get("/ready")
        .send(router(&database))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(ready["status"], "ready");
}

#[tokio::test]
async fn test_generate_preview_returns_camel_case_payload() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    plan_recipe(&database, user_id, "Pancakes", &["1 cup sugar", "2 eggs"], 0).await;

    let body: Value = AxumTestRequest::post(GENERATE)
        .json(&json!({ "userId": user_id, "weekStart": "2025-03-03" }))
        .send(router(&database))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["weekStart"], "2025-03-03");
    assert_eq!(body["weekEnd"], "2025-03-09");
    assert_eq!(body["alreadyAdded"], false);
    assert_eq!(body["addedItems"], json!([]));

    let sugar = &body["ingredients"][0];
    assert_eq!(sugar["id"], "ingredient-0");
    assert_eq!(sugar["name"], "sugar");
    assert_eq!(sugar["quantity"], 1.0);
    assert_eq!(sugar["unit"], "cup");
    assert_eq!(sugar["isSelected"], true);
    assert_eq!(sugar["suggestedAction"], "add_separate");
    assert_eq!(sugar["sourceRecipes"][0]["recipeName"], "Pancakes");
}

#[tokio::test]
async fn test_generate_with_add_to_list_writes_rows() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    plan_recipe(&database, user_id, "Stir fry", &["2 carrots", "1 tbsp soy sauce"], 2).await;

    let body: Value = AxumTestRequest::post(GENERATE)
        .json(&json!({
            "userId": user_id,
            "weekStart": "2025-03-03",
            "addToList": true,
            "clearExisting": true
        }))
        .send(router(&database))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["addedItems"].as_array().unwrap().len(), 2);

    let items: Value = AxumTestRequest::get(&format!("/api/shopping-list/items?userId={user_id}"))
        .send(router(&database))
        .await
        .assert_status(StatusCode::OK)
        .json();
    let names: Vec<&str> = items["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["2 carrots", "1 tbsp soy sauce"]);
    assert_eq!(items["items"][0]["fromMealPlan"], true);
}

#[tokio::test]
async fn test_generate_requires_week_start() {
    let database = test_database().await;

    let body: Value = AxumTestRequest::post(GENERATE)
        .json(&json!({ "userId": Uuid::new_v4() }))
        .send(router(&database))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(error_code(&body), "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn test_generate_rejects_bad_dates() {
    let database = test_database().await;

    let body: Value = AxumTestRequest::post(GENERATE)
        .json(&json!({ "userId": Uuid::new_v4(), "weekStart": "03/03/2025" }))
        .send(router(&database))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(error_code(&body), "INVALID_FORMAT");
}

#[tokio::test]
async fn test_generate_rejects_non_boolean_flags() {
    let database = test_database().await;

    let body: Value = AxumTestRequest::post(GENERATE)
        .json(&json!({
            "userId": Uuid::new_v4(),
            "weekStart": "2025-03-03",
            "addToList": "yes"
        }))
        .send(router(&database))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(error_code(&body), "INVALID_INPUT");
}

#[tokio::test]
async fn test_generate_rejects_clear_without_add() {
    let database = test_database().await;

    let body: Value = AxumTestRequest::post(GENERATE)
        .json(&json!({
            "userId": Uuid::new_v4(),
            "weekStart": "2025-03-03",
            "clearExisting": true
        }))
        .send(router(&database))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(error_code(&body), "INVALID_INPUT");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let database = test_database().await;

    let body: Value = AxumTestRequest::post(GENERATE)
        .raw_json("{\"userId\": ")
        .send(router(&database))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(error_code(&body), "INVALID_INPUT");
}

#[tokio::test]
async fn test_review_with_no_ingredients_returns_empty_outcome() {
    let database = test_database().await;

    let body: Value = AxumTestRequest::post(REVIEW)
        .json(&json!({ "userId": Uuid::new_v4(), "ingredients": [] }))
        .send(router(&database))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["addedItems"], json!([]));
    assert_eq!(body["updatedItems"], json!([]));
    assert_eq!(body["omitted"], json!([]));
}

#[tokio::test]
async fn test_review_round_trip_over_http() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    plan_recipe(&database, user_id, "Chili", &["1 can beans", "1 onion"], 4).await;
    seed_items(&database, &[ShoppingListItem::new(user_id, "1 can beans")]).await;

    let generation: Value = AxumTestRequest::post(GENERATE)
        .json(&json!({ "userId": user_id, "weekStart": "2025-03-03" }))
        .send(router(&database))
        .await
        .assert_status(StatusCode::OK)
        .json();
    let ingredients = generation["ingredients"].clone();
    assert_eq!(ingredients[0]["suggestedAction"], "skip");
    assert_eq!(ingredients[0]["isSelected"], false);

    let outcome: Value = AxumTestRequest::post(REVIEW)
        .json(&json!({ "userId": user_id, "ingredients": ingredients }))
        .send(router(&database))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(outcome["addedItems"].as_array().unwrap().len(), 1);
    assert_eq!(outcome["addedItems"][0]["name"], "1 onion");
}

#[tokio::test]
async fn test_review_rejects_invalid_edit() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();

    let body: Value = AxumTestRequest::post(REVIEW)
        .json(&json!({
            "userId": user_id,
            "ingredients": [{
                "id": "ingredient-0",
                "name": "rice",
                "quantity": 1.0,
                "unit": "cup",
                "originalText": "1 cup rice",
                "isSelected": true,
                "editedQuantity": "lots",
                "suggestedAction": "add_separate",
                "targetItemId": null,
                "duplicateMatches": [],
                "sourceRecipes": []
            }]
        }))
        .send(router(&database))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(error_code(&body), "INVALID_INPUT");

    let items: Value = AxumTestRequest::get(&format!("/api/shopping-list/items?userId={user_id}"))
        .send(router(&database))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(items["items"], json!([]));
}

#[tokio::test]
async fn test_items_requires_user_id() {
    let database = test_database().await;

    let body: Value = AxumTestRequest::get("/api/shopping-list/items")
        .send(router(&database))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(error_code(&body), "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn test_items_can_hide_checked_rows() {
    let database = test_database().await;
    let user_id = Uuid::new_v4();
    seed_items(
        &database,
        &[
            ShoppingListItem::new(user_id, "milk"),
            ShoppingListItem::new(user_id, "bread").with_checked(true),
        ],
    )
    .await;

    let items: Value = AxumTestRequest::get(&format!(
        "/api/shopping-list/items?userId={user_id}&uncheckedOnly=true"
    ))
    .send(router(&database))
    .await
    .assert_status(StatusCode::OK)
    .json();
    let rows = items["items"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "milk");
}
