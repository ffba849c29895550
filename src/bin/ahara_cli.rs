// ABOUTME: Ahara CLI - generate a weekly Ayurvedic meal plan from a food catalog
// ABOUTME: Loads catalog/profile JSON, runs the planner, writes plan and totals tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs
//!
//! Usage:
//! ```bash
//! # Plan a week from a catalog and profile
//! ahara-cli --catalog foods.json --profile me.json
//!
//! # Reproduce a previous run
//! ahara-cli --catalog foods.json --profile me.json --seed 42
//!
//! # Use labels exported by an external classifier instead of heuristics
//! ahara-cli --catalog foods.json --profile me.json --labels labels.json
//!
//! # Plan a different cuisine over ten days
//! ahara-cli --catalog foods.json --profile me.json --cuisine thai --days 10
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ahara_core::models::MealSlot;
use ahara_intelligence::classifier::{DessertClassifier, HeuristicClassifier};
use ahara_intelligence::{MealPlanner, PlannerConfig};
use ahara_planner::{catalog, output};

#[derive(Parser)]
#[command(
    name = "ahara-cli",
    about = "Ayurvedic weekly meal plan generator",
    long_about = "Generates a non-repeating weekly meal plan from a food catalog, \
                  combining calorie/macro targets with constitutional (dosha) scoring."
)]
struct Cli {
    /// Path to the food catalog (JSON array of food records)
    #[arg(long)]
    catalog: PathBuf,

    /// Path to the person profile (JSON document)
    #[arg(long)]
    profile: PathBuf,

    /// Optional classifier label overlay (JSON array of {food_id, category})
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Cuisine to filter the catalog to
    #[arg(long, default_value = "indian")]
    cuisine: String,

    /// Number of days to plan
    #[arg(long, default_value_t = 7)]
    days: u32,

    /// Shuffle seed; a fresh one is drawn and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the plan table
    #[arg(long, default_value = "weekly_plan.json")]
    plan_out: PathBuf,

    /// Where to write the daily totals table
    #[arg(long, default_value = "weekly_totals.json")]
    totals_out: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let foods = catalog::load_catalog(&cli.catalog)
        .with_context(|| format!("loading catalog from {}", cli.catalog.display()))?;
    let profile = catalog::load_profile(&cli.profile)
        .with_context(|| format!("loading profile from {}", cli.profile.display()))?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "shuffle seed for this run");

    let mut config = PlannerConfig::with_seed(seed);
    config.cuisine = cli.cuisine;
    config.days = cli.days;
    let planner = MealPlanner::new(config);

    let overlay = cli
        .labels
        .as_deref()
        .map(catalog::load_labels)
        .transpose()
        .context("loading classifier labels")?;
    let heuristic = HeuristicClassifier::default();
    let classifier: &dyn DessertClassifier = match overlay.as_ref() {
        Some(c) => c,
        None => &heuristic,
    };

    let plan = planner.plan(&foods, &profile, classifier)?;

    output::write_plan(&plan, &cli.plan_out)?;
    output::write_totals(&plan, &cli.totals_out)?;

    info!(
        calories = format!("{:.0}", plan.target.calories),
        protein_g = format!("{:.1}", plan.target.protein_g),
        fat_g = format!("{:.1}", plan.target.fat_g),
        carbs_g = format!("{:.1}", plan.target.carbs_g),
        "daily target"
    );
    for (slot, portion) in [
        ("breakfast", &plan.portions.breakfast),
        ("lunch", &plan.portions.lunch),
        ("dinner", &plan.portions.dinner),
    ] {
        info!(
            slot,
            calories = format!("{:.0}", portion.calories),
            protein_g = format!("{:.1}", portion.protein_g),
            fat_g = format!("{:.1}", portion.fat_g),
            carbs_g = format!("{:.1}", portion.carbs_g),
            "recommended portion"
        );
    }

    let desserts = plan
        .entries
        .iter()
        .filter(|e| e.meal == MealSlot::Dessert)
        .count();
    info!(plan_id = %plan.plan_id, desserts, "weekly plan complete");

    Ok(())
}
