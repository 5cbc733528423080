// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Provides protocol-agnostic services reusable across the REST surface and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! This module contains protocol-agnostic business logic extracted from route handlers.
//! The HTTP routes and the `larder-cli` binary both go through these services, so the
//! same validation and transaction rules apply regardless of the entry point.

/// Transactional writes of reviewed or generated ingredients
pub mod list_mutator;

/// Review-step ingredient records and quantity overrides
pub mod processed;

/// Meal-plan week generation and review orchestration
pub mod shopping_list;

pub use list_mutator::{ListMutator, MutationOutcome, OmissionReason, OmittedIngredient};
pub use processed::ProcessedIngredient;
pub use shopping_list::{GenerateRequest, ShoppingListGeneration, ShoppingListService};
