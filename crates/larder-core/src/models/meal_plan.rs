// ABOUTME: Meal-plan models: scheduled recipe entries and meal slots
// ABOUTME: MealType ordering drives the meal-by-meal scan order of generated lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Meal slot of a scheduled recipe
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    #[default]
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }

    /// Stored and serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::Other => "other",
        }
    }

    /// Position within a day
    #[must_use]
    pub const fn day_order(&self) -> u8 {
        match self {
            Self::Breakfast => 0,
            Self::Lunch => 1,
            Self::Snack => 2,
            Self::Dinner => 3,
            Self::Other => 4,
        }
    }
}

/// A recipe scheduled on a day of a user's meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Owner of the plan
    pub user_id: Uuid,
    /// Scheduled recipe; the recipe row may have been deleted since
    pub recipe_id: Uuid,
    /// Day the recipe is planned for
    pub planned_date: NaiveDate,
    /// Meal slot
    pub meal_type: MealType,
}
