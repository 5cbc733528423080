// ABOUTME: Recipe ingredient pipeline: parse lines, aggregate across recipes, match against the list
// ABOUTME: Pure functions over explicit inputs with no shared state or caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Ingredient Intelligence
//!
//! Data flows leaf-first through this module:
//!
//! 1. [`parse_ingredient_line`] turns one raw line into a [`ParsedIngredient`]
//! 2. [`aggregate_ingredients`] folds the lines of many recipes into one
//!    [`AggregatedIngredient`] per normalized name and unit
//! 3. [`find_duplicates`] annotates each aggregate with confidence-scored
//!    [`DuplicateMatch`] candidates from the user's current shopping list
//!
//! Everything here is recomputed per request from current recipe text.

/// Cross-recipe aggregation
pub mod aggregator;
/// Confidence-scored duplicate detection
pub mod matcher;
/// Pipeline data models
pub mod models;
/// Name normalization and synonym canonicalization
pub mod normalize;
/// Ingredient line parser
pub mod parser;
/// Leading numeric expression scanning
pub mod quantity;
/// Unit vocabulary
pub mod units;

pub use aggregator::aggregate_ingredients;
pub use matcher::find_duplicates;
pub use models::{
    display_name, AggregatedIngredient, DuplicateMatch, MatchConfidence, ParsedIngredient,
    RecipeIngredients, SuggestedAction,
};
pub use normalize::normalize_name;
pub use parser::{parse_ingredient_line, parse_quantity_override, QuantityOverride};
pub use quantity::format_quantity;
pub use units::IngredientUnit;
