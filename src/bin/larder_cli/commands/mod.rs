// ABOUTME: Re-exports command modules for larder-cli
// ABOUTME: Provides recipe, meal plan, and shopping list commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod plan;
pub mod recipe;
pub mod shopping;
