// ABOUTME: Duplicate matcher scoring aggregated ingredients against existing shopping-list items
// ABOUTME: Assigns high/medium/low confidence tiers and a suggested skip/combine/add_separate action
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder_core::models::ShoppingListItem;
use tracing::debug;

use super::models::{AggregatedIngredient, DuplicateMatch, MatchConfidence, SuggestedAction};
use super::normalize::{canonicalize, contains_words, normalize_name, significant_tokens};
use super::parser::parse_ingredient_line;
use super::units::IngredientUnit;
use crate::config::MatcherConfig;

/// Comparison keys derived from one name
struct NameKeys {
    normalized: String,
    canonical: String,
    tokens: Vec<String>,
}

impl NameKeys {
    fn new(name: &str) -> Self {
        let normalized = normalize_name(name);
        let canonical = canonicalize(&normalized);
        Self {
            tokens: significant_tokens(name),
            normalized,
            canonical,
        }
    }
}

/// An unchecked list item with its name parsed back into quantity, unit, and keys
struct Candidate<'a> {
    item: &'a ShoppingListItem,
    quantity: Option<f64>,
    unit: Option<IngredientUnit>,
    keys: NameKeys,
}

impl<'a> Candidate<'a> {
    fn new(item: &'a ShoppingListItem) -> Self {
        let parsed = parse_ingredient_line(&item.name);
        Self {
            item,
            quantity: parsed.quantity,
            unit: parsed.unit,
            keys: NameKeys::new(&parsed.name),
        }
    }
}

fn token_overlap(a: &[String], b: &[String]) -> f64 {
    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return 0.0;
    }
    let shared = a.iter().filter(|token| b.contains(token)).count();
    shared as f64 / smaller as f64
}

fn classify(new: &NameKeys, existing: &NameKeys, config: &MatcherConfig) -> Option<MatchConfidence> {
    if new.normalized.is_empty() || existing.normalized.is_empty() {
        return None;
    }
    if new.normalized == existing.normalized {
        return Some(MatchConfidence::High);
    }
    if new.canonical == existing.canonical
        || contains_words(&new.canonical, &existing.canonical)
        || contains_words(&existing.canonical, &new.canonical)
    {
        return Some(MatchConfidence::Medium);
    }
    (token_overlap(&new.tokens, &existing.tokens) >= config.low_overlap_threshold)
        .then_some(MatchConfidence::Low)
}

fn suggest_action(
    confidence: MatchConfidence,
    ingredient: &AggregatedIngredient,
    candidate: &Candidate<'_>,
) -> SuggestedAction {
    if ingredient.unit != candidate.unit {
        return SuggestedAction::AddSeparate;
    }
    match confidence {
        MatchConfidence::High => {
            let covered = match (candidate.quantity, ingredient.quantity) {
                (Some(existing), Some(needed)) => existing >= needed,
                (None, None) => true,
                _ => false,
            };
            if covered {
                SuggestedAction::Skip
            } else {
                SuggestedAction::Combine
            }
        }
        MatchConfidence::Medium => SuggestedAction::Combine,
        MatchConfidence::Low => SuggestedAction::AddSeparate,
    }
}

/// Annotate aggregated ingredients with candidate matches from the existing list
///
/// Checked items are ignored. Each ingredient's matches are ordered most confident
/// first, ties keeping the existing list's order.
#[must_use]
pub fn find_duplicates(
    aggregated: Vec<AggregatedIngredient>,
    existing: &[ShoppingListItem],
    config: &MatcherConfig,
) -> Vec<AggregatedIngredient> {
    let candidates: Vec<Candidate<'_>> = existing
        .iter()
        .filter(|item| !item.checked)
        .map(Candidate::new)
        .collect();

    let annotated: Vec<AggregatedIngredient> = aggregated
        .into_iter()
        .map(|mut ingredient| {
            let keys = NameKeys::new(&ingredient.name);
            let mut matches: Vec<DuplicateMatch> = candidates
                .iter()
                .filter_map(|candidate| {
                    let confidence = classify(&keys, &candidate.keys, config)?;
                    Some(DuplicateMatch {
                        existing_item_id: candidate.item.id,
                        existing_item_name: candidate.item.name.clone(),
                        match_confidence: confidence,
                        suggested_action: suggest_action(confidence, &ingredient, candidate),
                    })
                })
                .collect();
            matches.sort_by_key(|m| m.match_confidence.rank());
            ingredient.duplicate_matches = matches;
            ingredient
        })
        .collect();

    debug!(
        ingredients = annotated.len(),
        candidates = candidates.len(),
        matched = annotated
            .iter()
            .filter(|i| !i.duplicate_matches.is_empty())
            .count(),
        "Matched ingredients against shopping list"
    );

    annotated
}
