// ABOUTME: Consolidates parsed ingredient lines from many recipes into one entry per ingredient and unit
// ABOUTME: Sums quantities within a group and degrades to an unspecified amount when any member lacks one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use larder_core::models::SourceRecipeRef;
use rayon::prelude::*;
use tracing::debug;

use super::models::{AggregatedIngredient, ParsedIngredient, RecipeIngredients};
use super::parser::parse_ingredient_line;
use super::units::IngredientUnit;

/// A line after parsing, tagged with the recipe that contributed it
struct ParsedLine<'a> {
    recipe: &'a RecipeIngredients,
    parsed: ParsedIngredient,
    key: String,
}

/// Member line indices of one group plus the group's unit
struct Group {
    unit: Option<IngredientUnit>,
    members: Vec<usize>,
}

/// Aggregate the ingredient lines of every recipe
///
/// Quantified lines group by normalized name and unit; units are never coerced.
/// A line without a quantity joins the earliest quantified group of the same
/// name, which turns that group's total into `None`; with no such group it forms
/// its own. Output follows the first appearance of each group.
#[must_use]
pub fn aggregate_ingredients(recipes: &[RecipeIngredients]) -> Vec<AggregatedIngredient> {
    let flattened: Vec<(&RecipeIngredients, &str)> = recipes
        .iter()
        .flat_map(|recipe| recipe.lines.iter().map(move |line| (recipe, line.as_str())))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    let lines: Vec<ParsedLine<'_>> = flattened
        .par_iter()
        .map(|&(recipe, line)| {
            let parsed = parse_ingredient_line(line);
            let key = parsed.normalized_name();
            ParsedLine {
                recipe,
                parsed,
                key,
            }
        })
        .collect();

    let groups = group_lines(&lines);
    let aggregated: Vec<AggregatedIngredient> = groups
        .iter()
        .map(|group| build_aggregate(&lines, group))
        .collect();

    debug!(
        recipes = recipes.len(),
        lines = lines.len(),
        groups = aggregated.len(),
        "Aggregated recipe ingredients"
    );

    aggregated
}

fn group_lines(lines: &[ParsedLine<'_>]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut by_name_and_unit: HashMap<(&str, Option<IngredientUnit>), usize> = HashMap::new();
    let mut first_quantified: HashMap<&str, usize> = HashMap::new();

    for (index, line) in lines.iter().enumerate() {
        if line.parsed.quantity.is_none() {
            continue;
        }
        let key = (line.key.as_str(), line.parsed.unit);
        let group_index = *by_name_and_unit.entry(key).or_insert_with(|| {
            groups.push(Group {
                unit: line.parsed.unit,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        first_quantified
            .entry(line.key.as_str())
            .or_insert(group_index);
        groups[group_index].members.push(index);
    }

    let mut unquantified: HashMap<&str, usize> = HashMap::new();
    for (index, line) in lines.iter().enumerate() {
        if line.parsed.quantity.is_some() {
            continue;
        }
        let name = line.key.as_str();
        let group_index = match first_quantified.get(name) {
            Some(group_index) => *group_index,
            None => *unquantified.entry(name).or_insert_with(|| {
                groups.push(Group {
                    unit: None,
                    members: Vec::new(),
                });
                groups.len() - 1
            }),
        };
        groups[group_index].members.push(index);
    }

    for group in &mut groups {
        group.members.sort_unstable();
    }
    groups.sort_by_key(|group| group.members.first().copied().unwrap_or(usize::MAX));
    groups
}

fn build_aggregate(lines: &[ParsedLine<'_>], group: &Group) -> AggregatedIngredient {
    let members: Vec<&ParsedLine<'_>> = group.members.iter().map(|&i| &lines[i]).collect();
    let first = members[0];

    let quantity = members
        .iter()
        .map(|line| line.parsed.quantity)
        .sum::<Option<f64>>();

    let mut source_recipes: Vec<SourceRecipeRef> = Vec::new();
    for line in &members {
        let source = line.recipe.source_ref();
        if !source_recipes.contains(&source) {
            source_recipes.push(source);
        }
    }

    AggregatedIngredient {
        name: first.parsed.name.clone(),
        quantity,
        unit: group.unit,
        original_text: first.parsed.original_text.clone(),
        source_recipes,
        duplicate_matches: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn recipe(name: &str, lines: &[&str]) -> RecipeIngredients {
        RecipeIngredients::new(
            Uuid::new_v4(),
            name,
            lines.iter().map(|line| (*line).to_owned()).collect(),
        )
    }

    #[test]
    fn test_same_line_from_two_recipes_sums() {
        let cake = recipe("Cake", &["1 cup sugar"]);
        let cookies = recipe("Cookies", &["1 cup sugar"]);

        let aggregated = aggregate_ingredients(&[cake.clone(), cookies.clone()]);

        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated[0].quantity, Some(2.0));
        assert_eq!(aggregated[0].unit, Some(IngredientUnit::Cup));
        assert_eq!(
            aggregated[0].source_recipes,
            vec![cake.source_ref(), cookies.source_ref()]
        );
    }

    #[test]
    fn test_unquantified_member_makes_total_unspecified() {
        let aggregated = aggregate_ingredients(&[
            recipe("Cake", &["1 cup sugar"]),
            recipe("Tea", &["sugar"]),
        ]);

        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated[0].quantity, None);
        assert_eq!(aggregated[0].unit, Some(IngredientUnit::Cup));
        assert_eq!(aggregated[0].source_recipes.len(), 2);
    }

    #[test]
    fn test_unquantified_line_first_still_joins_group() {
        let aggregated = aggregate_ingredients(&[
            recipe("Tea", &["Sugar"]),
            recipe("Cake", &["1 cup sugar"]),
        ]);

        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated[0].quantity, None);
        assert_eq!(aggregated[0].name, "Sugar");
        assert_eq!(aggregated[0].original_text, "Sugar");
    }

    #[test]
    fn test_units_are_never_coerced() {
        let aggregated = aggregate_ingredients(&[recipe(
            "Soup",
            &["1 cup milk", "2 tbsp milk", "1 tablespoon milk", "salt to taste"],
        )]);

        assert_eq!(aggregated.len(), 3);
        assert_eq!(aggregated[0].unit, Some(IngredientUnit::Cup));
        assert_eq!(aggregated[1].unit, Some(IngredientUnit::Tablespoon));
        assert_eq!(aggregated[1].quantity, Some(3.0));
        assert_eq!(aggregated[2].name, "salt to taste");
        assert_eq!(aggregated[2].quantity, None);
    }

    #[test]
    fn test_first_occurrence_order_and_plural_folding() {
        let aggregated = aggregate_ingredients(&[
            recipe("Monday", &["2 onions", "1 cup rice"]),
            recipe("Tuesday", &["3 carrots", "1 onion"]),
        ]);

        let names: Vec<&str> = aggregated.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["onions", "rice", "carrots"]);
        assert_eq!(aggregated[0].quantity, Some(3.0));
        assert_eq!(aggregated[0].original_text, "2 onions");
    }

    #[test]
    fn test_repeated_recipe_listed_once() {
        let stew = recipe("Stew", &["1 onion", "1 onion, diced"]);
        let aggregated = aggregate_ingredients(&[stew.clone(), stew.clone()]);

        let onion = aggregated
            .iter()
            .find(|a| a.name == "onion")
            .expect("onion group");
        assert_eq!(onion.quantity, Some(2.0));
        assert_eq!(onion.source_recipes, vec![stew.source_ref()]);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_ingredients(&[]).is_empty());
        assert!(aggregate_ingredients(&[recipe("Empty", &["", "   "])]).is_empty());
    }
}
