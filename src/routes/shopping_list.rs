// ABOUTME: Shopping list route handlers for generation, review apply, and listing
// ABOUTME: Thin handlers that validate request bodies and delegate to ShoppingListService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shopping list routes
//!
//! Body and query rejections are converted into [`AppError`] so every failure
//! renders the same error envelope.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use larder_core::constants::endpoints;
use larder_core::errors::{AppError, AppResult};
use serde::Deserialize;
use uuid::Uuid;

use crate::resources::ServerResources;
use crate::services::{GenerateRequest, ProcessedIngredient};

/// Body of `POST /api/shopping-list/generate`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody {
    user_id: Option<Uuid>,
    week_start: Option<String>,
    #[serde(default)]
    add_to_list: bool,
    #[serde(default)]
    clear_existing: bool,
}

impl TryFrom<GenerateBody> for GenerateRequest {
    type Error = AppError;

    fn try_from(body: GenerateBody) -> AppResult<Self> {
        let user_id = body.user_id.ok_or_else(|| AppError::missing_field("userId"))?;
        let raw = body
            .week_start
            .filter(|raw| !raw.trim().is_empty())
            .ok_or_else(|| AppError::missing_field("weekStart"))?;
        let week_start = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            AppError::invalid_format(format!("weekStart must be YYYY-MM-DD, got '{raw}'"))
        })?;
        Ok(Self {
            user_id,
            week_start,
            add_to_list: body.add_to_list,
            clear_existing: body.clear_existing,
        })
    }
}

/// Body of `POST /api/shopping-list/review`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewBody {
    user_id: Option<Uuid>,
    #[serde(default)]
    ingredients: Vec<ProcessedIngredient>,
}

/// Query of `GET /api/shopping-list/items`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemsQuery {
    user_id: Option<Uuid>,
    #[serde(default)]
    unchecked_only: bool,
}

/// Shopping list routes handler
pub struct ShoppingListRoutes;

impl ShoppingListRoutes {
    /// Create all shopping list routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::GENERATE, post(Self::handle_generate))
            .route(endpoints::REVIEW, post(Self::handle_review))
            .route(endpoints::ITEMS, get(Self::handle_list_items))
            .with_state(resources)
    }

    /// Handle POST /api/shopping-list/generate
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<GenerateBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(body) = body.map_err(rejected_body)?;
        let request = GenerateRequest::try_from(body)?;
        let generation = resources.shopping_list.generate(&request).await?;
        Ok((StatusCode::OK, Json(generation)).into_response())
    }

    /// Handle POST /api/shopping-list/review
    async fn handle_review(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<ReviewBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(body) = body.map_err(rejected_body)?;
        let user_id = body.user_id.ok_or_else(|| AppError::missing_field("userId"))?;
        let outcome = resources
            .shopping_list
            .add_from_review(user_id, &body.ingredients)
            .await?;
        Ok((StatusCode::OK, Json(outcome)).into_response())
    }

    /// Handle GET /api/shopping-list/items
    async fn handle_list_items(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<ItemsQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) =
            query.map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;
        let user_id = query.user_id.ok_or_else(|| AppError::missing_field("userId"))?;
        let items = resources
            .shopping_list
            .list_items(user_id, query.unchecked_only)
            .await?;
        Ok((StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response())
    }
}

fn rejected_body(rejection: JsonRejection) -> AppError {
    AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
}
