// ABOUTME: Route module organization for the Larder HTTP endpoints
// ABOUTME: Assembles domain routers and wraps them in tracing, CORS, timeout, and body-limit layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Larder server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// Shopping list generation and review routes
pub mod shopping_list;

pub use health::HealthRoutes;
pub use shopping_list::ShoppingListRoutes;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use larder_core::constants::limits;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::setup_cors;
use crate::resources::ServerResources;

/// Build the complete application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors_allowed_origins);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(ShoppingListRoutes::routes(resources))
        .layer(DefaultBodyLimit::max(limits::MAX_REQUEST_BODY_BYTES))
        .layer(TimeoutLayer::new(Duration::from_secs(
            limits::REQUEST_TIMEOUT_SECS,
        )))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
