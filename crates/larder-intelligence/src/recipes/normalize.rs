// ABOUTME: Ingredient name normalization, significant-token extraction, and synonym canonicalization
// ABOUTME: Produces the comparison keys used by aggregation and duplicate matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::LazyLock;

/// Longest synonym phrase in words ("bicarbonate of soda")
const MAX_PHRASE_WORDS: usize = 3;

/// Words that describe preparation, size, or filler rather than the ingredient itself
const STOP_WORDS: &[&str] = &[
    "a", "about", "an", "and", "beaten", "chopped", "coarsely", "crushed", "cubed", "cut",
    "diced", "divided", "drained", "finely", "for", "fresh", "freshly", "grated", "ground",
    "halved", "into", "juiced", "large", "medium", "melted", "minced", "more", "of",
    "optional", "or", "packed", "peeled", "piece", "plus", "rinsed", "roughly", "room",
    "shredded", "sliced", "small", "softened", "taste", "temperature", "the", "thinly", "to",
    "trimmed", "whole",
];

/// Words whose trailing `s` is not a plural marker
const INVARIANT_WORDS: &[&str] = &["asparagus", "couscous", "grits", "hummus", "molasses", "swiss"];

/// Irregular plurals
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("halves", "half"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("loaves", "loaf"),
];

/// Groups of names for the same grocery item; the first entry is canonical
///
/// Entries are written in normalized form (lower-case, de-pluralized).
const SYNONYM_GROUPS: &[&[&str]] = &[
    &["scallion", "green onion", "spring onion"],
    &["cilantro", "coriander", "coriander leaf"],
    &["chickpea", "garbanzo bean", "garbanzo"],
    &["zucchini", "courgette"],
    &["eggplant", "aubergine"],
    &["arugula", "rocket"],
    &["bell pepper", "capsicum", "sweet pepper"],
    &["powdered sugar", "icing sugar", "confectioner sugar"],
    &["baking soda", "bicarbonate of soda", "bicarb soda"],
    &["heavy cream", "double cream", "heavy whipping cream"],
    &["shrimp", "prawn"],
    &["cornstarch", "cornflour", "corn starch"],
    &["green bean", "string bean", "french bean"],
    &["beet", "beetroot"],
    &["all-purpose flour", "all purpose flour", "plain flour"],
    &["ground beef", "minced beef", "beef mince"],
    &["superfine sugar", "caster sugar"],
];

static SYNONYM_INDEX: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    SYNONYM_GROUPS
        .iter()
        .flat_map(|group| {
            let canonical = group[0];
            group.iter().map(move |alias| (*alias, canonical))
        })
        .collect()
});

/// Reduce a plural word to its singular form
///
/// Handles the regular English patterns seen in ingredient lists. Short words and
/// words ending in `ss`, `us`, or `is` are returned unchanged.
#[must_use]
pub fn depluralize(word: &str) -> String {
    if word.len() <= 3
        || INVARIANT_WORDS.contains(&word)
        || word.ends_with("ss")
        || word.ends_with("us")
        || word.ends_with("is")
    {
        return word.to_owned();
    }

    if let Some((_, singular)) = IRREGULAR_PLURALS.iter().find(|(plural, _)| *plural == word) {
        return (*singular).to_owned();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }

    for suffix in ["oes", "ches", "shes", "xes", "zes", "sses"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_owned();
        }
    }

    word.strip_suffix('s').unwrap_or(word).to_owned()
}

/// Normalize an ingredient name into its comparison key
///
/// Lower-cases, strips punctuation surrounding each word, collapses whitespace, and
/// de-pluralizes each word. Internal punctuation ("all-purpose") is kept.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .map(|word| depluralize(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Distinct alphanumeric words of the normalized name, minus preparation and filler words
#[must_use]
pub fn significant_tokens(name: &str) -> Vec<String> {
    let normalized = normalize_name(name);
    let mut tokens: Vec<String> = Vec::new();
    for token in normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
    {
        let token = depluralize(token);
        if STOP_WORDS.contains(&token.as_str()) || tokens.contains(&token) {
            continue;
        }
        tokens.push(token);
    }
    tokens
}

/// Canonical form of a synonym phrase, if the phrase is in the synonym table
#[must_use]
pub fn canonical_synonym(normalized_phrase: &str) -> Option<&'static str> {
    SYNONYM_INDEX.get(normalized_phrase).copied()
}

/// Replace every known synonym phrase inside a normalized name with its canonical form
///
/// Longer phrases win over shorter ones starting at the same word.
#[must_use]
pub fn canonicalize(normalized: &str) -> String {
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let mut output: Vec<&str> = Vec::with_capacity(words.len());
    let mut index = 0;

    while index < words.len() {
        let longest = MAX_PHRASE_WORDS.min(words.len() - index);
        let replacement = (1..=longest).rev().find_map(|length| {
            canonical_synonym(&words[index..index + length].join(" "))
                .map(|canonical| (canonical, length))
        });

        if let Some((canonical, length)) = replacement {
            output.push(canonical);
            index += length;
        } else {
            output.push(words[index]);
            index += 1;
        }
    }

    output.join(" ")
}

/// Whether `needle`'s words appear as a contiguous run inside `haystack`'s words
///
/// Word-level containment keeps "pea" from matching "peach".
#[must_use]
pub fn contains_words(haystack: &str, needle: &str) -> bool {
    let haystack: Vec<&str> = haystack.split_whitespace().collect();
    let needle: Vec<&str> = needle.split_whitespace().collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window == needle.as_slice())
}
