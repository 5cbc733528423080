// ABOUTME: List Mutator applying reviewed or generated ingredients to a shopping list
// ABOUTME: Each call is one transaction; any failure leaves the list exactly as it was
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # List Mutator
//!
//! The only writer of shopping-list rows. Two modes share one transaction
//! discipline:
//!
//! - [`ListMutator::apply`] writes user-reviewed [`ProcessedIngredient`]s, honoring
//!   the selected action per ingredient (skip, combine into an existing row, or
//!   insert a separate row)
//! - [`ListMutator::apply_meal_plan`] inserts a whole generated week, optionally
//!   replacing earlier meal-plan rows, and flags the week as added
//!
//! Validation happens before the transaction opens. Rows that disappear between
//! review and apply are reported in [`MutationOutcome::omitted`] instead of failing
//! the batch.

use chrono::NaiveDate;
use larder_core::errors::{AppError, AppResult};
use larder_core::models::{ShoppingListItem, SourceRecipeRef};
use larder_intelligence::recipes::{
    display_name, parse_ingredient_line, AggregatedIngredient, IngredientUnit, SuggestedAction,
};
use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use tracing::{debug, info};
use uuid::Uuid;

use super::processed::ProcessedIngredient;
use crate::database::{meal_plans, recipes, shopping_list, Database};

/// Why an ingredient was left out of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OmissionReason {
    /// The item chosen as combine target no longer exists
    TargetItemMissing,
    /// Every recipe the ingredient came from was deleted
    RecipeMissing,
}

/// An ingredient that was not written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OmittedIngredient {
    /// Review identifier, when the ingredient came from the review step
    pub ingredient_id: Option<String>,
    /// Ingredient name
    pub name: String,
    /// Cause
    pub reason: OmissionReason,
}

/// Rows touched by one mutator call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationOutcome {
    /// Newly inserted rows
    pub added_items: Vec<ShoppingListItem>,
    /// Existing rows whose name was rewritten by a combine
    pub updated_items: Vec<ShoppingListItem>,
    /// Ingredients skipped because something they referenced vanished
    pub omitted: Vec<OmittedIngredient>,
}

/// A selected ingredient after validation
struct PlannedWrite<'a> {
    ingredient: &'a ProcessedIngredient,
    display_name: String,
    quantity: Option<f64>,
    unit: Option<IngredientUnit>,
    action: PlannedAction,
}

enum PlannedAction {
    Insert,
    Combine(Uuid),
}

/// Transactional writer of shopping-list rows
#[derive(Clone)]
pub struct ListMutator {
    database: Database,
}

impl ListMutator {
    /// Create a mutator over `database`
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }

    /// Apply reviewed ingredients
    ///
    /// Only `is_selected` ingredients are considered and `Skip` writes nothing.
    /// An empty selection returns an empty outcome without opening a transaction.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if an edited quantity does not parse or a combine has
    /// no target, before anything is written. Storage failures roll back the batch.
    pub async fn apply(
        &self,
        user_id: Uuid,
        ingredients: &[ProcessedIngredient],
    ) -> AppResult<MutationOutcome> {
        let planned = plan_writes(ingredients)?;
        if planned.is_empty() {
            debug!(user_id = %user_id, "Nothing selected to apply");
            return Ok(MutationOutcome::default());
        }

        let mut guard = self.database.begin().await?;
        let mut outcome = MutationOutcome::default();

        for write in &planned {
            let conn = guard.executor()?;
            let Some(recipe_id) =
                resolve_source(conn, user_id, &write.ingredient.source_recipes).await?
            else {
                outcome.omitted.push(omitted(write.ingredient, OmissionReason::RecipeMissing));
                continue;
            };

            match write.action {
                PlannedAction::Insert => {
                    let item = insert(conn, user_id, write, recipe_id).await?;
                    outcome.added_items.push(item);
                }
                PlannedAction::Combine(target_id) => {
                    let Some(existing) = shopping_list::find_item(conn, user_id, target_id).await?
                    else {
                        outcome
                            .omitted
                            .push(omitted(write.ingredient, OmissionReason::TargetItemMissing));
                        continue;
                    };
                    match combined_name(&existing, write.quantity, write.unit) {
                        Some(name) => {
                            if !shopping_list::update_item_name(conn, user_id, existing.id, &name)
                                .await?
                            {
                                outcome.omitted.push(omitted(
                                    write.ingredient,
                                    OmissionReason::TargetItemMissing,
                                ));
                                continue;
                            }
                            outcome.updated_items.push(ShoppingListItem { name, ..existing });
                        }
                        None => {
                            debug!(
                                item_id = %existing.id,
                                ingredient = %write.ingredient.name,
                                "Units differ from combine target, inserting separately"
                            );
                            let item = insert(conn, user_id, write, recipe_id).await?;
                            outcome.added_items.push(item);
                        }
                    }
                }
            }
        }

        guard.commit().await?;
        info!(
            user_id = %user_id,
            added = outcome.added_items.len(),
            updated = outcome.updated_items.len(),
            omitted = outcome.omitted.len(),
            "Applied reviewed ingredients"
        );
        Ok(outcome)
    }

    /// Insert a generated week as meal-plan rows and flag the week as added
    ///
    /// With `clear_existing`, meal-plan rows from earlier generations are removed
    /// first so repeating the call converges on one copy of the week.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails; nothing is written in that case
    pub async fn apply_meal_plan(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
        ingredients: &[AggregatedIngredient],
        clear_existing: bool,
    ) -> AppResult<MutationOutcome> {
        let mut guard = self.database.begin().await?;

        let cleared = if clear_existing {
            shopping_list::delete_meal_plan_items(guard.executor()?, user_id).await?
        } else {
            0
        };

        let mut outcome = MutationOutcome::default();
        for ingredient in ingredients {
            let item = ShoppingListItem::new(user_id, ingredient.display_name())
                .with_recipe(ingredient.source_recipes.first().map(|r| r.recipe_id))
                .from_meal_plan(true);
            shopping_list::insert_item(guard.executor()?, &item).await?;
            outcome.added_items.push(item);
        }

        meal_plans::mark_week_added(guard.executor()?, user_id, week_start).await?;
        guard.commit().await?;

        info!(
            user_id = %user_id,
            week_start = %week_start,
            added = outcome.added_items.len(),
            cleared,
            "Added meal plan week to shopping list"
        );
        Ok(outcome)
    }
}

/// Validate every selected ingredient before any write
fn plan_writes(ingredients: &[ProcessedIngredient]) -> AppResult<Vec<PlannedWrite<'_>>> {
    let mut planned = Vec::new();
    for ingredient in ingredients.iter().filter(|i| i.is_selected) {
        let display_name = ingredient.display_name()?;
        let (quantity, unit) = ingredient.effective_quantity()?;
        let action = match ingredient.suggested_action {
            SuggestedAction::Skip => continue,
            SuggestedAction::AddSeparate => PlannedAction::Insert,
            SuggestedAction::Combine => {
                let target = ingredient.target_item_id.ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "Ingredient '{}' is set to combine but has no target item",
                        ingredient.name
                    ))
                    .with_resource_id(ingredient.id.clone())
                })?;
                PlannedAction::Combine(target)
            }
        };
        planned.push(PlannedWrite {
            ingredient,
            display_name,
            quantity,
            unit,
            action,
        });
    }
    Ok(planned)
}

/// Recipe to record on a new row
///
/// `Some(None)` means the ingredient has no recorded source. `None` means every
/// recorded source recipe was deleted.
async fn resolve_source(
    conn: &mut SqliteConnection,
    user_id: Uuid,
    sources: &[SourceRecipeRef],
) -> AppResult<Option<Option<Uuid>>> {
    if sources.is_empty() {
        return Ok(Some(None));
    }
    for source in sources {
        if recipes::recipe_exists(&mut *conn, user_id, source.recipe_id).await? {
            return Ok(Some(Some(source.recipe_id)));
        }
    }
    Ok(None)
}

async fn insert(
    conn: &mut SqliteConnection,
    user_id: Uuid,
    write: &PlannedWrite<'_>,
    recipe_id: Option<Uuid>,
) -> AppResult<ShoppingListItem> {
    let item = ShoppingListItem::new(user_id, write.display_name.clone()).with_recipe(recipe_id);
    shopping_list::insert_item(conn, &item).await?;
    Ok(item)
}

/// New display text for `existing` after adding `quantity` of `unit` to it
///
/// The existing row's own name is kept. Returns `None` when both sides carry a
/// quantity in different units.
fn combined_name(
    existing: &ShoppingListItem,
    quantity: Option<f64>,
    unit: Option<IngredientUnit>,
) -> Option<String> {
    let current = parse_ingredient_line(&existing.name);
    let (total, total_unit) = match (current.quantity, quantity) {
        (Some(have), Some(adding)) if current.unit == unit => (Some(have + adding), unit),
        (Some(_), Some(_)) => return None,
        (None, Some(adding)) => (Some(adding), unit),
        (have, None) => (have, current.unit),
    };
    Some(display_name(total, total_unit, &current.name))
}

fn omitted(ingredient: &ProcessedIngredient, reason: OmissionReason) -> OmittedIngredient {
    OmittedIngredient {
        ingredient_id: Some(ingredient.id.clone()),
        name: ingredient.name.clone(),
        reason,
    }
}
