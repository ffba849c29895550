// ABOUTME: Plan entry, daily totals, dosha forecast, and the assembled weekly plan
// ABOUTME: PlanEntry carries a nutrient snapshot copied at selection time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::food::FoodCategory;
use super::nutrition::{NutrientTarget, PortionSplit};

/// Meal slot within a day, in fixed serving order
///
/// The derived ordering (breakfast < lunch < dinner < dessert) is the
/// output ordering of the plan table.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// First meal of the day
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Optional sweet course, at most one per day
    Dessert,
}

impl MealSlot {
    /// Lowercase label matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Dessert => "dessert",
        }
    }
}

/// One (day, meal, food) assignment with a nutrient snapshot
///
/// The snapshot is copied from the food record at selection time; later
/// catalog changes cannot affect an already-produced entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanEntry {
    /// Day index, 0-based
    pub day: u32,
    /// Slot the food was assigned to
    pub meal: MealSlot,
    /// Catalog identity of the assigned food
    pub food_id: u64,
    /// Dish name at selection time
    pub name: String,
    /// Energy snapshot
    pub calories_kcal: f64,
    /// Protein snapshot (grams)
    pub protein_g: f64,
    /// Fat snapshot (grams)
    pub fat_g: f64,
    /// Carbohydrate snapshot (grams)
    pub carbs_g: f64,
    /// Cuisine tag of the assigned food
    pub country: String,
    /// Classifier label the food carried into assignment
    pub category: FoodCategory,
}

/// Summed nutrients for one day of the plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyTotal {
    /// Day index, 0-based
    pub day: u32,
    /// Total energy across the day's filled slots
    pub calories: f64,
    /// Total protein (grams)
    pub protein_g: f64,
    /// Total fat (grams)
    pub fat_g: f64,
    /// Total carbohydrates (grams)
    pub carbs_g: f64,
}

impl DailyTotal {
    /// Zero-valued total for a day with no entries
    #[must_use]
    pub const fn empty(day: u32) -> Self {
        Self {
            day,
            calories: 0.0,
            protein_g: 0.0,
            fat_g: 0.0,
            carbs_g: 0.0,
        }
    }
}

/// Informational dosha imbalance forecast from age, season, and hour
///
/// Annotation only; the assignment engine never reads it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoshaAdjustment {
    /// Accumulated Vata pressure
    pub vata: i32,
    /// Accumulated Pitta pressure
    pub pitta: i32,
    /// Accumulated Kapha pressure
    pub kapha: i32,
}

/// Complete artifact of one planning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Unique id of this planning run
    pub plan_id: Uuid,
    /// When the plan was generated
    pub generated_at: DateTime<Utc>,
    /// Seed that drove the one-time pool shuffle
    pub seed: u64,
    /// Daily nutrient target the plan was built against
    pub target: NutrientTarget,
    /// Advisory per-meal portion split
    pub portions: PortionSplit,
    /// Flat plan table, day ascending then slot order
    pub entries: Vec<PlanEntry>,
    /// One row per day, zero-filled for empty days
    pub daily_totals: Vec<DailyTotal>,
    /// Constitutional pressure forecast for the run
    pub dosha_forecast: DoshaAdjustment,
}

impl WeeklyPlan {
    /// Entries assigned to the given day, in slot order
    pub fn day_entries(&self, day: u32) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(move |e| e.day == day)
    }
}
