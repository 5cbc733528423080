// ABOUTME: Data models flowing through the parse, aggregate, and match pipeline
// ABOUTME: Defines ParsedIngredient, RecipeIngredients, AggregatedIngredient, and DuplicateMatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder_core::models::SourceRecipeRef;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::normalize::normalize_name;
use super::quantity::format_quantity;
use super::units::IngredientUnit;

/// One raw ingredient line broken into quantity, unit, and name
///
/// A quantity may exist without a unit ("2 eggs"). Lines that cannot be parsed
/// keep their whole trimmed text as the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIngredient {
    /// Leading amount, ranges collapsed to their lower bound
    pub quantity: Option<f64>,
    /// Canonical unit when one followed the quantity
    pub unit: Option<IngredientUnit>,
    /// Remaining text with source casing
    pub name: String,
    /// The line exactly as written
    pub original_text: String,
}

impl ParsedIngredient {
    /// Record with no quantity or unit; the trimmed line becomes the name
    #[must_use]
    pub fn name_only(line: &str) -> Self {
        Self {
            quantity: None,
            unit: None,
            name: line.trim().to_owned(),
            original_text: line.to_owned(),
        }
    }

    /// Key used for grouping and matching
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Raw ingredient text contributed by one scheduled recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredients {
    /// Recipe identifier
    pub recipe_id: Uuid,
    /// Recipe display name
    pub recipe_name: String,
    /// One entry per ingredient line
    pub lines: Vec<String>,
}

impl RecipeIngredients {
    /// Create from already split lines
    #[must_use]
    pub fn new(recipe_id: Uuid, recipe_name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            recipe_id,
            recipe_name: recipe_name.into(),
            lines,
        }
    }

    /// Create from newline-delimited ingredient text, skipping blank lines
    #[must_use]
    pub fn from_text(recipe_id: Uuid, recipe_name: impl Into<String>, text: &str) -> Self {
        let lines = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_owned)
            .collect();
        Self::new(recipe_id, recipe_name, lines)
    }

    /// Provenance reference for this recipe
    #[must_use]
    pub fn source_ref(&self) -> SourceRecipeRef {
        SourceRecipeRef::new(self.recipe_id, self.recipe_name.clone())
    }
}

/// How certain the matcher is that two names refer to the same grocery item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    /// Equal normalized names
    High,
    /// Containment or a known synonym
    Medium,
    /// Significant-token overlap only
    Low,
}

impl MatchConfidence {
    /// Sort rank, most confident first
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// What the review step is advised to do with a matched ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    /// The existing item already covers the need; write nothing
    Skip,
    /// Add the new quantity onto the existing item
    Combine,
    /// Insert a new item alongside the existing one
    #[default]
    AddSeparate,
}

/// A candidate existing shopping-list item for an aggregated ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateMatch {
    /// Matched shopping-list item
    pub existing_item_id: Uuid,
    /// Display text of the matched item
    pub existing_item_name: String,
    /// Confidence tier
    pub match_confidence: MatchConfidence,
    /// Advised action for this pairing
    pub suggested_action: SuggestedAction,
}

/// One entry per distinct ingredient and unit across all contributing recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedIngredient {
    /// Name of the first contributing line
    pub name: String,
    /// Sum of member quantities, `None` when any member is unquantified
    pub quantity: Option<f64>,
    /// Shared unit of the group
    pub unit: Option<IngredientUnit>,
    /// Text of the first contributing line
    pub original_text: String,
    /// De-duplicated recipes that contributed a line
    pub source_recipes: Vec<SourceRecipeRef>,
    /// Candidate matches, most confident first
    #[serde(default)]
    pub duplicate_matches: Vec<DuplicateMatch>,
}

impl AggregatedIngredient {
    /// Action of the best match, or `AddSeparate` when nothing matched
    #[must_use]
    pub fn suggested_action(&self) -> SuggestedAction {
        self.duplicate_matches
            .first()
            .map_or(SuggestedAction::AddSeparate, |m| m.suggested_action)
    }

    /// Display text for a shopping-list row
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(self.quantity, self.unit, &self.name)
    }
}

/// Render a shopping-list row name
///
/// Precedence: `"{quantity} {unit} {name}"`, then `"{quantity} {name}"`, then `"{name}"`.
#[must_use]
pub fn display_name(quantity: Option<f64>, unit: Option<IngredientUnit>, name: &str) -> String {
    match (quantity, unit) {
        (Some(quantity), Some(unit)) => format!(
            "{} {} {name}",
            format_quantity(quantity),
            unit.label_for(quantity)
        ),
        (Some(quantity), None) => format!("{} {name}", format_quantity(quantity)),
        (None, _) => name.to_owned(),
    }
}
