// ABOUTME: Planner configuration - cuisine, day count, seed, split fractions, lexicons
// ABOUTME: Defaults reproduce the reference planning behavior exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

//! Planner Configuration
//!
//! Groups every tunable of a planning run: the cuisine filter, the number
//! of days, the shuffle seed, per-meal split fractions, and the
//! categorizer's keyword lexicon and nutrient thresholds.

use ahara_core::constants::{lexicon, meal_buckets, meal_split, planning};
use serde::{Deserialize, Serialize};

/// Configuration for one planning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Cuisine the catalog is filtered to (case-insensitive match)
    pub cuisine: String,
    /// Number of days the plan covers
    pub days: u32,
    /// Seed for the one-time pool shuffle; same seed + same catalog
    /// reproduces the same plan
    pub seed: u64,
    /// Per-meal split fractions for the advisory portion breakdown
    pub split: MealSplitConfig,
    /// Pool-building thresholds and lexicon
    pub categorizer: CategorizerConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            cuisine: planning::DEFAULT_CUISINE.to_owned(),
            days: planning::DEFAULT_PLAN_DAYS,
            seed: 0,
            split: MealSplitConfig::default(),
            categorizer: CategorizerConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Default configuration with an explicit shuffle seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

/// Fractions of the daily target assigned to each meal slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MealSplitConfig {
    /// Breakfast fraction
    pub breakfast: f64,
    /// Lunch fraction
    pub lunch: f64,
    /// Dinner fraction
    pub dinner: f64,
}

impl Default for MealSplitConfig {
    fn default() -> Self {
        Self {
            breakfast: meal_split::BREAKFAST_FRACTION,
            lunch: meal_split::LUNCH_FRACTION,
            dinner: meal_split::DINNER_FRACTION,
        }
    }
}

/// Thresholds and lexicon for meal bucket assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorizerConfig {
    /// Dish names routed to the breakfast pool regardless of macros
    pub breakfast_keywords: Vec<String>,
    /// Calorie ceiling for the breakfast bucket rule
    pub breakfast_max_calories: f64,
    /// Protein floor for the dinner bucket rule
    pub dinner_min_protein_g: f64,
    /// Calorie floor for the dinner bucket rule
    pub dinner_min_calories: f64,
}

impl Default for CategorizerConfig {
    fn default() -> Self {
        Self {
            breakfast_keywords: lexicon::BREAKFAST_DISHES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            breakfast_max_calories: meal_buckets::BREAKFAST_MAX_CALORIES,
            dinner_min_protein_g: meal_buckets::DINNER_MIN_PROTEIN_G,
            dinner_min_calories: meal_buckets::DINNER_MIN_CALORIES,
        }
    }
}
