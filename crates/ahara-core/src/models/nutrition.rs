// ABOUTME: Daily nutrient target and advisory per-meal portion split
// ABOUTME: Targets are derived once per run and never mutated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

use serde::{Deserialize, Serialize};

/// One person's daily nutrient need
///
/// `carbs_g` may come out negative when protein and fat already exceed the
/// calorie target; it is deliberately not clamped so an infeasible macro
/// split stays visible to the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutrientTarget {
    /// Daily energy target
    pub calories: f64,
    /// Daily protein target (grams)
    pub protein_g: f64,
    /// Daily fat target (grams)
    pub fat_g: f64,
    /// Daily carbohydrate target (grams)
    pub carbs_g: f64,
}

impl NutrientTarget {
    /// Scale every field by the given meal fraction
    #[must_use]
    pub fn scaled(&self, fraction: f64) -> Self {
        Self {
            calories: self.calories * fraction,
            protein_g: self.protein_g * fraction,
            fat_g: self.fat_g * fraction,
            carbs_g: self.carbs_g * fraction,
        }
    }
}

/// Advisory per-meal breakdown of the daily target
///
/// Returned alongside the plan for the caller's information; the
/// assignment engine never filters candidates against it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PortionSplit {
    /// Breakfast share of the daily target
    pub breakfast: NutrientTarget,
    /// Lunch share of the daily target
    pub lunch: NutrientTarget,
    /// Dinner share of the daily target
    pub dinner: NutrientTarget,
}
