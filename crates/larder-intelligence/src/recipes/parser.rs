// ABOUTME: Ingredient line parser turning free text into quantity, unit, and name
// ABOUTME: Never fails; unrecognized lines degrade to name-only records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::models::ParsedIngredient;
use super::quantity::parse_leading_quantity;
use super::units::{IngredientUnit, MAX_SYNONYM_WORDS};

/// Quantity and optional unit typed by a user in place of the computed amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityOverride {
    /// Amount
    pub quantity: f64,
    /// Unit when the user typed one
    pub unit: Option<IngredientUnit>,
}

/// Split off the first `count` whitespace-separated words
///
/// Returns the words joined by single spaces and the text after the last word.
fn take_words(text: &str, count: usize) -> Option<(String, &str)> {
    let mut words = Vec::with_capacity(count);
    let mut rest = text;
    for _ in 0..count {
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            return None;
        }
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        words.push(&trimmed[..end]);
        rest = &trimmed[end..];
    }
    Some((words.join(" "), rest))
}

/// Longest unit synonym at the start of `text`, with the text that follows it
fn match_leading_unit(text: &str) -> Option<(IngredientUnit, &str)> {
    (1..=MAX_SYNONYM_WORDS).rev().find_map(|count| {
        let (candidate, rest) = take_words(text, count)?;
        IngredientUnit::from_synonym(&candidate).map(|unit| (unit, rest))
    })
}

/// Drop a connecting "of" ("2 cups of flour")
fn strip_connector(name: &str) -> &str {
    match name.split_once(char::is_whitespace) {
        Some((first, rest)) if first.eq_ignore_ascii_case("of") && !rest.trim().is_empty() => {
            rest.trim_start()
        }
        _ => name,
    }
}

/// Parse one raw ingredient line
///
/// Recognizes a leading numeric expression, then the longest unit synonym that
/// follows it. Whatever remains becomes the name; trailing preparation clauses
/// ("1 lemon, juiced") stay part of the name.
///
/// # Examples
///
/// ```
/// use larder_intelligence::recipes::{parse_ingredient_line, IngredientUnit};
///
/// let parsed = parse_ingredient_line("2 tablespoons olive oil");
/// assert_eq!(parsed.quantity, Some(2.0));
/// assert_eq!(parsed.unit, Some(IngredientUnit::Tablespoon));
/// assert_eq!(parsed.name, "olive oil");
/// ```
#[must_use]
pub fn parse_ingredient_line(line: &str) -> ParsedIngredient {
    let Some((quantity, after_quantity)) = parse_leading_quantity(line.trim()) else {
        return ParsedIngredient::name_only(line);
    };

    let remainder = after_quantity.trim();
    if remainder.is_empty() {
        return ParsedIngredient::name_only(line);
    }

    if let Some((unit, after_unit)) = match_leading_unit(remainder) {
        let name = strip_connector(after_unit.trim());
        if !name.is_empty() {
            return ParsedIngredient {
                quantity: Some(quantity),
                unit: Some(unit),
                name: name.to_owned(),
                original_text: line.to_owned(),
            };
        }
    }

    // No unit, or the unit word is the only word left ("3 cloves")
    ParsedIngredient {
        quantity: Some(quantity),
        unit: None,
        name: remainder.to_owned(),
        original_text: line.to_owned(),
    }
}

/// Parse a review-step quantity override such as `"3"` or `"1 1/2 cups"`
///
/// Returns `None` when the text is not a quantity optionally followed by a unit.
#[must_use]
pub fn parse_quantity_override(text: &str) -> Option<QuantityOverride> {
    let (quantity, rest) = parse_leading_quantity(text.trim())?;
    let rest = rest.trim();
    if rest.is_empty() {
        return Some(QuantityOverride {
            quantity,
            unit: None,
        });
    }
    IngredientUnit::from_synonym(rest).map(|unit| QuantityOverride {
        quantity,
        unit: Some(unit),
    })
}
