// ABOUTME: Shopping-list item and source-recipe reference models
// ABOUTME: ShoppingListItem is the only durable entity owned by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of a user's persisted shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    /// Unique item identifier
    pub id: Uuid,
    /// Owner of the list
    pub user_id: Uuid,
    /// Display text, e.g. "2 cup sugar"
    pub name: String,
    /// Whether the user already ticked this item off
    pub checked: bool,
    /// Recipe the item came from, if any
    pub recipe_id: Option<Uuid>,
    /// Created by meal-plan week generation
    pub from_meal_plan: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl ShoppingListItem {
    /// Create a new unchecked item owned by `user_id`
    #[must_use]
    pub fn new(user_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            checked: false,
            recipe_id: None,
            from_meal_plan: false,
            created_at: Utc::now(),
        }
    }

    /// Attach the originating recipe
    #[must_use]
    pub const fn with_recipe(mut self, recipe_id: Option<Uuid>) -> Self {
        self.recipe_id = recipe_id;
        self
    }

    /// Flag the item as produced by meal-plan generation
    #[must_use]
    pub const fn from_meal_plan(mut self, from_meal_plan: bool) -> Self {
        self.from_meal_plan = from_meal_plan;
        self
    }

    /// Set the checked state
    #[must_use]
    pub const fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// Provenance of an aggregated ingredient; never used for matching
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecipeRef {
    /// Recipe identifier
    pub recipe_id: Uuid,
    /// Recipe display name
    pub recipe_name: String,
}

impl SourceRecipeRef {
    /// Create a new reference
    #[must_use]
    pub fn new(recipe_id: Uuid, recipe_name: impl Into<String>) -> Self {
        Self {
            recipe_id,
            recipe_name: recipe_name.into(),
        }
    }
}
