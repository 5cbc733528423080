// ABOUTME: Shopping list service orchestrating generation from a meal-plan week and review apply
// ABOUTME: Reads recipes, runs parse/aggregate/match, and delegates every write to the List Mutator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Duration, NaiveDate};
use larder_core::constants::limits::{MAX_REVIEW_BATCH, MEAL_PLAN_WEEK_DAYS};
use larder_core::errors::{AppError, AppResult};
use larder_core::models::{MealPlanEntry, ShoppingListItem};
use larder_intelligence::recipes::{aggregate_ingredients, find_duplicates};
use larder_intelligence::MatcherConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::list_mutator::{ListMutator, MutationOutcome};
use super::processed::ProcessedIngredient;
use crate::database::Database;

/// Parameters of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Owner of the meal plan and shopping list
    pub user_id: Uuid,
    /// First day of the week; the week spans seven days from here
    pub week_start: NaiveDate,
    /// Write the generated ingredients to the list
    pub add_to_list: bool,
    /// Replace meal-plan rows from earlier generations
    pub clear_existing: bool,
}

impl GenerateRequest {
    /// Preview-only request
    #[must_use]
    pub const fn preview(user_id: Uuid, week_start: NaiveDate) -> Self {
        Self {
            user_id,
            week_start,
            add_to_list: false,
            clear_existing: false,
        }
    }
}

/// Result of a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListGeneration {
    /// First day of the week
    pub week_start: NaiveDate,
    /// Last day of the week, inclusive
    pub week_end: NaiveDate,
    /// Whether the week had been added before this call
    pub already_added: bool,
    /// Aggregated ingredients with their duplicate candidates, ready for review
    pub ingredients: Vec<ProcessedIngredient>,
    /// Rows written when `add_to_list` was set
    pub added_items: Vec<ShoppingListItem>,
    /// Meal-plan entries whose recipe no longer exists
    pub omitted_entries: Vec<MealPlanEntry>,
}

/// Shopping list generation and review
#[derive(Clone)]
pub struct ShoppingListService {
    database: Database,
    mutator: ListMutator,
    matcher: MatcherConfig,
}

impl ShoppingListService {
    /// Create a service over `database`
    #[must_use]
    pub fn new(database: Database, matcher: MatcherConfig) -> Self {
        Self {
            mutator: ListMutator::new(database.clone()),
            database,
            matcher,
        }
    }

    /// Aggregate a week's recipes and match them against the current list
    ///
    /// Without `add_to_list` nothing is written. With it, every aggregated
    /// ingredient is inserted as a meal-plan row and the week is flagged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `clear_existing` is set without `add_to_list`, or a
    /// storage error from reading or applying
    pub async fn generate(&self, request: &GenerateRequest) -> AppResult<ShoppingListGeneration> {
        if request.clear_existing && !request.add_to_list {
            return Err(AppError::invalid_input(
                "clearExisting requires addToList",
            ));
        }

        let week_end = request
            .week_start
            .checked_add_signed(Duration::days(MEAL_PLAN_WEEK_DAYS - 1))
            .ok_or_else(|| AppError::invalid_input("weekStart is out of range"))?;

        let user_id = request.user_id;
        let already_added = self
            .database
            .is_week_added(user_id, request.week_start)
            .await?;
        let week = self
            .database
            .recipes_for_week(user_id, request.week_start, week_end)
            .await?;
        if !week.missing.is_empty() {
            warn!(
                user_id = %user_id,
                week_start = %request.week_start,
                missing = week.missing.len(),
                "Meal plan entries reference deleted recipes"
            );
        }

        let aggregated = aggregate_ingredients(&week.recipes);

        // Meal-plan rows are about to be replaced and must not attract matches
        let existing: Vec<ShoppingListItem> = self
            .database
            .list_shopping_items(user_id, true)
            .await?
            .into_iter()
            .filter(|item| !(request.clear_existing && item.from_meal_plan))
            .collect();
        let annotated = find_duplicates(aggregated, &existing, &self.matcher);

        let added_items = if request.add_to_list {
            self.mutator
                .apply_meal_plan(user_id, request.week_start, &annotated, request.clear_existing)
                .await?
                .added_items
        } else {
            Vec::new()
        };

        info!(
            user_id = %user_id,
            week_start = %request.week_start,
            recipes = week.recipes.len(),
            ingredients = annotated.len(),
            added = added_items.len(),
            "Generated shopping list"
        );

        Ok(ShoppingListGeneration {
            week_start: request.week_start,
            week_end,
            already_added,
            ingredients: annotated
                .into_iter()
                .enumerate()
                .map(|(index, ingredient)| ProcessedIngredient::from_aggregated(index, ingredient))
                .collect(),
            added_items,
            omitted_entries: week.missing,
        })
    }

    /// Apply the selected entries of a reviewed generation
    ///
    /// Selecting nothing performs no writes and returns an empty outcome.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for oversized batches or invalid entries, or a storage
    /// error after rolling back
    pub async fn add_from_review(
        &self,
        user_id: Uuid,
        ingredients: &[ProcessedIngredient],
    ) -> AppResult<MutationOutcome> {
        if ingredients.len() > MAX_REVIEW_BATCH {
            return Err(AppError::invalid_input(format!(
                "At most {MAX_REVIEW_BATCH} ingredients can be reviewed at once"
            )));
        }
        self.mutator.apply(user_id, ingredients).await
    }

    /// A user's shopping list
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_items(
        &self,
        user_id: Uuid,
        unchecked_only: bool,
    ) -> AppResult<Vec<ShoppingListItem>> {
        self.database
            .list_shopping_items(user_id, unchecked_only)
            .await
    }
}
