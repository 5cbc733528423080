// ABOUTME: Larder CLI for managing recipes and meal plans and driving shopping-list generation
// ABOUTME: Talks to the database directly through the same services the HTTP server uses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Store a recipe from a file of ingredient lines
//! larder-cli recipe add --user $USER_ID --name "Pancakes" --file pancakes.txt
//!
//! # Schedule it for Monday dinner
//! larder-cli plan add --user $USER_ID --recipe $RECIPE_ID --date 2025-03-03 --meal dinner
//!
//! # Preview the week without writing anything
//! larder-cli preview --user $USER_ID --week-start 2025-03-03
//!
//! # Write the week to the list, replacing earlier meal-plan rows
//! larder-cli generate --user $USER_ID --week-start 2025-03-03 --add --clear-existing
//!
//! # Apply a reviewed selection saved from `preview --json`
//! larder-cli review --user $USER_ID --file reviewed.json
//!
//! # Show the shopping list
//! larder-cli list --user $USER_ID --unchecked-only
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use larder::config::environment::ServerConfig;
use larder::database::Database;
use larder::services::{GenerateRequest, ShoppingListService};
use larder_core::errors::AppResult;
use larder_core::models::MealType;
use tracing::info;
use uuid::Uuid;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "larder-cli",
    about = "Larder shopping-list CLI",
    long_about = "Manage recipes and meal plans, preview generated shopping lists, and apply reviewed selections."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Print JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recipe management commands
    Recipe {
        #[command(subcommand)]
        action: RecipeCommand,
    },

    /// Meal plan commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Show the generated list for a week without writing
    Preview {
        /// Owner
        #[arg(long)]
        user: Uuid,

        /// First day of the week (YYYY-MM-DD)
        #[arg(long)]
        week_start: NaiveDate,
    },

    /// Generate the list for a week, optionally writing it
    Generate {
        /// Owner
        #[arg(long)]
        user: Uuid,

        /// First day of the week (YYYY-MM-DD)
        #[arg(long)]
        week_start: NaiveDate,

        /// Write the generated ingredients to the shopping list
        #[arg(long)]
        add: bool,

        /// Replace meal-plan rows from earlier generations (requires --add)
        #[arg(long)]
        clear_existing: bool,
    },

    /// Apply a reviewed ingredient selection from a JSON file
    Review {
        /// Owner
        #[arg(long)]
        user: Uuid,

        /// JSON array of reviewed ingredients
        #[arg(long)]
        file: PathBuf,
    },

    /// Show the shopping list
    List {
        /// Owner
        #[arg(long)]
        user: Uuid,

        /// Hide checked items
        #[arg(long)]
        unchecked_only: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecipeCommand {
    /// Store a recipe
    Add {
        /// Owner
        #[arg(long)]
        user: Uuid,

        /// Recipe name
        #[arg(long)]
        name: String,

        /// File with one ingredient per line
        #[arg(long, conflicts_with = "ingredient")]
        file: Option<PathBuf>,

        /// Ingredient line (repeatable)
        #[arg(long = "ingredient", short = 'i')]
        ingredient: Vec<String>,
    },

    /// List a user's recipes
    List {
        /// Owner
        #[arg(long)]
        user: Uuid,
    },

    /// Delete a recipe; its meal-plan entries are reported as omitted afterwards
    Delete {
        /// Owner
        #[arg(long)]
        user: Uuid,

        /// Recipe to delete
        recipe_id: Uuid,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Schedule a recipe on a day
    Add {
        /// Owner
        #[arg(long)]
        user: Uuid,

        /// Recipe to schedule
        #[arg(long)]
        recipe: Uuid,

        /// Day (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Meal slot (breakfast, lunch, dinner, snack)
        #[arg(long, default_value = "dinner")]
        meal: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ServerConfig::from_env()?;
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }

    info!("Connecting to database: {}", config.database_url);
    let database = Database::new(&config.database_url).await?;
    let service = ShoppingListService::new(database.clone(), config.matcher);
    let json = cli.json;

    match cli.command {
        Command::Recipe { action } => match action {
            RecipeCommand::Add {
                user,
                name,
                file,
                ingredient,
            } => {
                commands::recipe::add(&database, user, &name, file.as_deref(), &ingredient, json)
                    .await?;
            }
            RecipeCommand::List { user } => commands::recipe::list(&database, user, json).await?,
            RecipeCommand::Delete { user, recipe_id } => {
                commands::recipe::delete(&database, user, recipe_id).await?;
            }
        },
        Command::Plan { action } => match action {
            PlanCommand::Add {
                user,
                recipe,
                date,
                meal,
            } => {
                commands::plan::add(
                    &database,
                    user,
                    recipe,
                    date,
                    MealType::from_str_lossy(&meal),
                    json,
                )
                .await?;
            }
        },
        Command::Preview { user, week_start } => {
            let request = GenerateRequest::preview(user, week_start);
            commands::shopping::generate(&service, &request, json).await?;
        }
        Command::Generate {
            user,
            week_start,
            add,
            clear_existing,
        } => {
            let request = GenerateRequest {
                user_id: user,
                week_start,
                add_to_list: add,
                clear_existing,
            };
            commands::shopping::generate(&service, &request, json).await?;
        }
        Command::Review { user, file } => {
            commands::shopping::review(&service, user, &file, json).await?;
        }
        Command::List {
            user,
            unchecked_only,
        } => commands::shopping::list(&service, user, unchecked_only, json).await?,
    }

    Ok(())
}
