// ABOUTME: Review-step ingredient record exchanged with clients between generation and apply
// ABOUTME: Carries the selection flag, an optional edited quantity, and the chosen action
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder_core::errors::{AppError, AppResult};
use larder_core::models::SourceRecipeRef;
use larder_intelligence::recipes::{
    parse_quantity_override, AggregatedIngredient, DuplicateMatch, IngredientUnit,
    SuggestedAction,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An aggregated ingredient as presented for review
///
/// Clients receive these from generation, toggle `is_selected`, optionally type an
/// `edited_quantity` or retarget a combine, and send them back to be applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedIngredient {
    /// Stable position-derived identifier within one generation
    pub id: String,
    /// Ingredient name without quantity or unit
    pub name: String,
    /// Aggregated quantity
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Aggregated unit
    #[serde(default)]
    pub unit: Option<IngredientUnit>,
    /// First contributing recipe line
    #[serde(default)]
    pub original_text: String,
    /// Whether the ingredient should be written
    pub is_selected: bool,
    /// User-typed replacement for the quantity ("3", "1 1/2 cups")
    #[serde(default)]
    pub edited_quantity: Option<String>,
    /// Action to take against the existing list
    #[serde(default)]
    pub suggested_action: SuggestedAction,
    /// Existing item to combine into
    #[serde(default)]
    pub target_item_id: Option<Uuid>,
    /// Candidate matches from generation
    #[serde(default)]
    pub duplicate_matches: Vec<DuplicateMatch>,
    /// Recipes that contributed the ingredient
    #[serde(default)]
    pub source_recipes: Vec<SourceRecipeRef>,
}

impl ProcessedIngredient {
    /// Build the review record for the `index`-th aggregated ingredient
    ///
    /// Ingredients whose best match says skip start unselected.
    #[must_use]
    pub fn from_aggregated(index: usize, ingredient: AggregatedIngredient) -> Self {
        let suggested_action = ingredient.suggested_action();
        let target_item_id = ingredient
            .duplicate_matches
            .first()
            .map(|m| m.existing_item_id);
        Self {
            id: format!("ingredient-{index}"),
            name: ingredient.name,
            quantity: ingredient.quantity,
            unit: ingredient.unit,
            original_text: ingredient.original_text,
            is_selected: suggested_action != SuggestedAction::Skip,
            edited_quantity: None,
            suggested_action,
            target_item_id,
            duplicate_matches: ingredient.duplicate_matches,
            source_recipes: ingredient.source_recipes,
        }
    }

    /// Quantity and unit to write, honoring a non-blank edited quantity
    ///
    /// An edited quantity without a unit keeps the aggregated unit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the edited quantity is not a number optionally
    /// followed by a known unit
    pub fn effective_quantity(&self) -> AppResult<(Option<f64>, Option<IngredientUnit>)> {
        let Some(edited) = self
            .edited_quantity
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
        else {
            return Ok((self.quantity, self.unit));
        };

        let parsed = parse_quantity_override(edited).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Invalid quantity '{edited}' for ingredient '{}'",
                self.name
            ))
            .with_resource_id(self.id.clone())
        })?;
        Ok((Some(parsed.quantity), parsed.unit.or(self.unit)))
    }

    /// Display text this ingredient would be written as
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the edited quantity does not parse
    pub fn display_name(&self) -> AppResult<String> {
        let (quantity, unit) = self.effective_quantity()?;
        Ok(larder_intelligence::recipes::display_name(
            quantity, unit, &self.name,
        ))
    }
}
