// ABOUTME: Shared domain models for shopping-list rows, meal plans, and recipe provenance
// ABOUTME: Used by the pure matching algorithms and by the persistence layer alike
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Scheduled meal-plan entries
pub mod meal_plan;

/// Shopping-list rows and recipe references
pub mod shopping;

pub use meal_plan::{MealPlanEntry, MealType};
pub use shopping::{ShoppingListItem, SourceRecipeRef};
