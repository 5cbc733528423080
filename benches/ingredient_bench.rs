// ABOUTME: Criterion benchmarks for the ingredient parse, aggregate, and match pipeline
// ABOUTME: Measures throughput over synthetic meal-plan weeks of increasing size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the ingredient pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use larder_core::models::ShoppingListItem;
use larder_intelligence::recipes::{
    aggregate_ingredients, find_duplicates, parse_ingredient_line, RecipeIngredients,
};
use larder_intelligence::MatcherConfig;
use uuid::Uuid;

const LINES: [&str; 12] = [
    "2 cups all-purpose flour",
    "1 1/2 tsp baking soda",
    "½ cup unsalted butter, melted",
    "3-4 cloves garlic, minced",
    "1 can chickpeas, drained",
    "200 g cheddar cheese",
    "2 large eggs",
    "1 tbsp. olive oil",
    "salt and pepper to taste",
    "4 scallions, sliced",
    "1 lb ground beef",
    "2 fl oz heavy cream",
];

fn synthetic_week(recipes: usize) -> Vec<RecipeIngredients> {
    (0..recipes)
        .map(|index| {
            let lines = LINES
                .iter()
                .cycle()
                .skip(index % LINES.len())
                .take(8)
                .map(|line| (*line).to_owned())
                .collect();
            RecipeIngredients::new(Uuid::new_v4(), format!("Recipe {index}"), lines)
        })
        .collect()
}

fn synthetic_list(items: usize) -> Vec<ShoppingListItem> {
    let user_id = Uuid::new_v4();
    ["2 onions", "milk", "1 cup flour", "green onions", "garlic", "rice"]
        .iter()
        .cycle()
        .take(items)
        .map(|name| ShoppingListItem::new(user_id, *name))
        .collect()
}

fn bench_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_ingredient_line");
    group.throughput(Throughput::Elements(LINES.len() as u64));
    group.bench_function("mixed_lines", |b| {
        b.iter(|| {
            for line in LINES {
                black_box(parse_ingredient_line(black_box(line)));
            }
        });
    });
    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_ingredients");
    for count in [7, 21, 100] {
        let week = synthetic_week(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("recipes", count), &week, |b, week| {
            b.iter(|| aggregate_ingredients(black_box(week)));
        });
    }
    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_duplicates");
    let aggregated = aggregate_ingredients(&synthetic_week(21));
    let config = MatcherConfig::default();
    for count in [10, 100, 500] {
        let existing = synthetic_list(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("existing_items", count),
            &existing,
            |b, existing| {
                b.iter(|| find_duplicates(black_box(aggregated.clone()), existing, &config));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse_line, bench_aggregate, bench_match);
criterion_main!(benches);
