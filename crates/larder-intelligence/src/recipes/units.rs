// ABOUTME: Fixed unit vocabulary mapping unit synonyms and abbreviations to canonical codes
// ABOUTME: Defines IngredientUnit and the synonym lookup used by the line parser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Canonical ingredient measurement unit
///
/// The snake_case serialization is the canonical unit code. No conversion
/// between units is ever attempted; two quantities are only summed when
/// their units are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientUnit {
    /// Teaspoon (tsp, t)
    Teaspoon,
    /// Tablespoon (tbsp, T)
    Tablespoon,
    /// Cup
    Cup,
    /// US fluid ounce
    FluidOunce,
    /// Pint
    Pint,
    /// Quart
    Quart,
    /// Gallon
    Gallon,
    /// Milliliter
    Milliliter,
    /// Liter
    Liter,
    /// Gram
    Gram,
    /// Kilogram
    Kilogram,
    /// Ounce (weight)
    Ounce,
    /// Pound
    Pound,
    /// Pinch
    Pinch,
    /// Dash
    Dash,
    /// Clove (garlic)
    Clove,
    /// Can or tin
    Can,
    /// Package or packet
    Package,
    /// Jar
    Jar,
    /// Bottle
    Bottle,
    /// Slice
    Slice,
    /// Stick (butter)
    Stick,
    /// Bunch
    Bunch,
    /// Head (lettuce, garlic)
    Head,
    /// Sprig
    Sprig,
    /// Generic piece
    Piece,
}

/// Longest synonym in the vocabulary, in words ("fluid ounces")
pub const MAX_SYNONYM_WORDS: usize = 2;

/// Synonym table; keys are lower-case with trailing periods removed
const UNIT_SYNONYMS: &[(&str, IngredientUnit)] = &[
    // === Volume ===
    ("teaspoon", IngredientUnit::Teaspoon),
    ("teaspoons", IngredientUnit::Teaspoon),
    ("tsp", IngredientUnit::Teaspoon),
    ("tsps", IngredientUnit::Teaspoon),
    ("tspn", IngredientUnit::Teaspoon),
    ("tablespoon", IngredientUnit::Tablespoon),
    ("tablespoons", IngredientUnit::Tablespoon),
    ("tbsp", IngredientUnit::Tablespoon),
    ("tbsps", IngredientUnit::Tablespoon),
    ("tbs", IngredientUnit::Tablespoon),
    ("tbl", IngredientUnit::Tablespoon),
    ("tbls", IngredientUnit::Tablespoon),
    ("tblsp", IngredientUnit::Tablespoon),
    ("cup", IngredientUnit::Cup),
    ("cups", IngredientUnit::Cup),
    ("c", IngredientUnit::Cup),
    ("fluid ounce", IngredientUnit::FluidOunce),
    ("fluid ounces", IngredientUnit::FluidOunce),
    ("fl oz", IngredientUnit::FluidOunce),
    ("floz", IngredientUnit::FluidOunce),
    ("pint", IngredientUnit::Pint),
    ("pints", IngredientUnit::Pint),
    ("pt", IngredientUnit::Pint),
    ("pts", IngredientUnit::Pint),
    ("quart", IngredientUnit::Quart),
    ("quarts", IngredientUnit::Quart),
    ("qt", IngredientUnit::Quart),
    ("qts", IngredientUnit::Quart),
    ("gallon", IngredientUnit::Gallon),
    ("gallons", IngredientUnit::Gallon),
    ("gal", IngredientUnit::Gallon),
    ("gals", IngredientUnit::Gallon),
    ("milliliter", IngredientUnit::Milliliter),
    ("milliliters", IngredientUnit::Milliliter),
    ("millilitre", IngredientUnit::Milliliter),
    ("millilitres", IngredientUnit::Milliliter),
    ("ml", IngredientUnit::Milliliter),
    ("mls", IngredientUnit::Milliliter),
    ("liter", IngredientUnit::Liter),
    ("liters", IngredientUnit::Liter),
    ("litre", IngredientUnit::Liter),
    ("litres", IngredientUnit::Liter),
    ("l", IngredientUnit::Liter),
    // === Weight ===
    ("gram", IngredientUnit::Gram),
    ("grams", IngredientUnit::Gram),
    ("gramme", IngredientUnit::Gram),
    ("grammes", IngredientUnit::Gram),
    ("g", IngredientUnit::Gram),
    ("kilogram", IngredientUnit::Kilogram),
    ("kilograms", IngredientUnit::Kilogram),
    ("kilo", IngredientUnit::Kilogram),
    ("kilos", IngredientUnit::Kilogram),
    ("kg", IngredientUnit::Kilogram),
    ("kgs", IngredientUnit::Kilogram),
    ("ounce", IngredientUnit::Ounce),
    ("ounces", IngredientUnit::Ounce),
    ("oz", IngredientUnit::Ounce),
    ("pound", IngredientUnit::Pound),
    ("pounds", IngredientUnit::Pound),
    ("lb", IngredientUnit::Pound),
    ("lbs", IngredientUnit::Pound),
    // === Small measures ===
    ("pinch", IngredientUnit::Pinch),
    ("pinches", IngredientUnit::Pinch),
    ("dash", IngredientUnit::Dash),
    ("dashes", IngredientUnit::Dash),
    // === Counts and containers ===
    ("clove", IngredientUnit::Clove),
    ("cloves", IngredientUnit::Clove),
    ("can", IngredientUnit::Can),
    ("cans", IngredientUnit::Can),
    ("tin", IngredientUnit::Can),
    ("tins", IngredientUnit::Can),
    ("package", IngredientUnit::Package),
    ("packages", IngredientUnit::Package),
    ("packet", IngredientUnit::Package),
    ("packets", IngredientUnit::Package),
    ("pkg", IngredientUnit::Package),
    ("pkgs", IngredientUnit::Package),
    ("jar", IngredientUnit::Jar),
    ("jars", IngredientUnit::Jar),
    ("bottle", IngredientUnit::Bottle),
    ("bottles", IngredientUnit::Bottle),
    ("slice", IngredientUnit::Slice),
    ("slices", IngredientUnit::Slice),
    ("stick", IngredientUnit::Stick),
    ("sticks", IngredientUnit::Stick),
    ("bunch", IngredientUnit::Bunch),
    ("bunches", IngredientUnit::Bunch),
    ("head", IngredientUnit::Head),
    ("heads", IngredientUnit::Head),
    ("sprig", IngredientUnit::Sprig),
    ("sprigs", IngredientUnit::Sprig),
    ("piece", IngredientUnit::Piece),
    ("pieces", IngredientUnit::Piece),
    ("pc", IngredientUnit::Piece),
    ("pcs", IngredientUnit::Piece),
];

static SYNONYM_INDEX: LazyLock<HashMap<&'static str, IngredientUnit>> =
    LazyLock::new(|| UNIT_SYNONYMS.iter().copied().collect());

impl IngredientUnit {
    /// Look up a unit by one of its synonyms
    ///
    /// Matching is case-insensitive except for the cookbook convention where a
    /// lone capital `T` means tablespoon and a lone lower-case `t` means teaspoon.
    /// Trailing periods are ignored ("Tbsp.", "fl. oz.").
    #[must_use]
    pub fn from_synonym(text: &str) -> Option<Self> {
        let cleaned: Vec<&str> = text
            .split_whitespace()
            .map(|word| word.trim_end_matches('.'))
            .collect();

        match cleaned.as_slice() {
            ["T"] => return Some(Self::Tablespoon),
            ["t"] => return Some(Self::Teaspoon),
            [] => return None,
            _ => {}
        }

        let key = cleaned.join(" ").to_lowercase();
        SYNONYM_INDEX.get(key.as_str()).copied()
    }

    /// Short label for display ("tbsp", "g", "cup")
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Teaspoon => "tsp",
            Self::Tablespoon => "tbsp",
            Self::Cup => "cup",
            Self::FluidOunce => "fl oz",
            Self::Pint => "pt",
            Self::Quart => "qt",
            Self::Gallon => "gal",
            Self::Milliliter => "ml",
            Self::Liter => "l",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Ounce => "oz",
            Self::Pound => "lb",
            Self::Pinch => "pinch",
            Self::Dash => "dash",
            Self::Clove => "clove",
            Self::Can => "can",
            Self::Package => "package",
            Self::Jar => "jar",
            Self::Bottle => "bottle",
            Self::Slice => "slice",
            Self::Stick => "stick",
            Self::Bunch => "bunch",
            Self::Head => "head",
            Self::Sprig => "sprig",
            Self::Piece => "piece",
        }
    }

    /// Label to print next to `quantity`, pluralizing word-style units
    ///
    /// Abbreviated units never take a plural. Every label produced here is
    /// itself a synonym, so display text parses back to the same unit.
    #[must_use]
    pub fn label_for(&self, quantity: f64) -> String {
        let abbreviation = self.abbreviation();
        if quantity <= 1.0 || !self.pluralizes() {
            return abbreviation.to_owned();
        }
        match self {
            Self::Pinch | Self::Dash | Self::Bunch => format!("{abbreviation}es"),
            _ => format!("{abbreviation}s"),
        }
    }

    const fn pluralizes(&self) -> bool {
        !matches!(
            self,
            Self::Teaspoon
                | Self::Tablespoon
                | Self::FluidOunce
                | Self::Pint
                | Self::Quart
                | Self::Gallon
                | Self::Milliliter
                | Self::Liter
                | Self::Gram
                | Self::Kilogram
                | Self::Ounce
                | Self::Pound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_share_one_code() {
        for synonym in ["tbsp", "Tbsp.", "TABLESPOON", "tablespoons", "tbs", "T"] {
            assert_eq!(
                IngredientUnit::from_synonym(synonym),
                Some(IngredientUnit::Tablespoon),
                "{synonym} should map to tablespoon"
            );
        }
        assert_eq!(
            IngredientUnit::from_synonym("t"),
            Some(IngredientUnit::Teaspoon)
        );
        assert_eq!(
            IngredientUnit::from_synonym("fl. oz."),
            Some(IngredientUnit::FluidOunce)
        );
    }

    #[test]
    fn test_unknown_words_are_not_units() {
        assert_eq!(IngredientUnit::from_synonym("large"), None);
        assert_eq!(IngredientUnit::from_synonym("onion"), None);
        assert_eq!(IngredientUnit::from_synonym(""), None);
    }

    #[test]
    fn test_labels_round_trip_through_synonyms() {
        for (_, unit) in UNIT_SYNONYMS {
            for quantity in [1.0, 2.0] {
                let label = unit.label_for(quantity);
                assert_eq!(
                    IngredientUnit::from_synonym(&label),
                    Some(*unit),
                    "label {label} must parse back"
                );
            }
        }
    }

    #[test]
    fn test_synonym_word_limit_covers_table() {
        let longest = UNIT_SYNONYMS
            .iter()
            .map(|(synonym, _)| synonym.split_whitespace().count())
            .max()
            .unwrap_or(0);
        assert_eq!(longest, MAX_SYNONYM_WORDS);
    }

    #[test]
    fn test_serialized_code() {
        let json = serde_json::to_string(&IngredientUnit::FluidOunce).unwrap();
        assert_eq!(json, "\"fluid_ounce\"");
    }
}
