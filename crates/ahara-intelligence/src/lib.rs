// ABOUTME: Meal planning intelligence crate - the deterministic assignment pipeline
// ABOUTME: Nutrient targets, dosha scoring, food categorization, and weekly assignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

#![deny(unsafe_code)]

//! # Ahara Intelligence
//!
//! The meal planning engine: a single-threaded, synchronous pipeline turning
//! a scored, categorized food catalog plus a daily nutrient target into a
//! non-repeating weekly plan with per-day totals.
//!
//! Pipeline stages, leaf first:
//!
//! 1. [`targets`] - calorie/macro targets from body metrics (Mifflin-St Jeor)
//! 2. [`dosha`] - constitutional-fit scoring of individual foods
//! 3. [`classifier`] - dessert/non-dessert capability with swappable backends
//! 4. [`categorizer`] - breakfast/lunch/dinner/dessert pool building
//! 5. [`engine`] - greedy non-repeating assignment across the week
//! 6. [`aggregator`] - per-day nutrient totals
//!
//! [`planner::MealPlanner`] wires the stages into one pass per run.

/// Per-day nutrient totals over the flat plan table
pub mod aggregator;

/// Pool construction: cuisine filter output into four shuffled meal pools
pub mod categorizer;

/// Dessert classification capability and its reference implementations
pub mod classifier;

/// Planner configuration with tunable bucket and split thresholds
pub mod config;

/// Dosha penalty scoring and the constitutional pressure forecast
pub mod dosha;

/// Greedy weekly assignment over the four pools
pub mod engine;

/// End-to-end pipeline producing a `WeeklyPlan`
pub mod planner;

/// Daily calorie/macro targets and portion splits
pub mod targets;

pub use categorizer::{FoodCategorizer, MealPools, ScoredFood};
pub use classifier::{DessertClassifier, HeuristicClassifier, LabelOverlayClassifier};
pub use config::{CategorizerConfig, MealSplitConfig, PlannerConfig};
pub use engine::WeeklyAssignmentEngine;
pub use planner::MealPlanner;
