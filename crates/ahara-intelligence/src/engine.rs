// ABOUTME: Greedy weekly assignment - first unused food per slot, no backtracking
// ABOUTME: The used-food set is the only mutable state and lives inside one call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

//! Weekly Assignment
//!
//! Draws non-repeating foods from the four pools across the plan's days.
//! Per day, in fixed order breakfast -> lunch -> dinner -> dessert, the
//! engine scans the corresponding pool in its shuffled order and takes the
//! first food whose id has not been used this run. An exhausted pool
//! leaves that slot empty for the day; the dessert slot is attempted only
//! when the dessert pool is non-empty, capping desserts at one per day.
//!
//! This is a greedy single-pass allocator, not an optimizer: it always
//! terminates after exactly `days` iterations and never backtracks.
//! Randomness enters only through the one-time pool shuffle upstream, so
//! a fixed seed and fixed pools give a fixed plan.

use std::collections::HashSet;

use tracing::debug;

use ahara_core::models::{MealSlot, PlanEntry};

use crate::categorizer::{MealPools, ScoredFood};

/// Greedy non-repeating allocator over the four meal pools
#[derive(Debug, Clone, Copy)]
pub struct WeeklyAssignmentEngine {
    days: u32,
}

impl WeeklyAssignmentEngine {
    /// Engine covering the given number of days
    #[must_use]
    pub const fn new(days: u32) -> Self {
        Self { days }
    }

    /// Assign foods to every slot of every day
    ///
    /// Returns the flat plan table ordered day ascending, then slot order.
    /// Days may have fewer than four entries when pools run out; that is a
    /// degraded-but-successful outcome, not an error.
    #[must_use]
    pub fn assign(&self, pools: &MealPools) -> Vec<PlanEntry> {
        let mut entries = Vec::new();
        let mut used: HashSet<u64> = HashSet::new();

        for day in 0..self.days {
            for (slot, pool) in [
                (MealSlot::Breakfast, &pools.breakfast),
                (MealSlot::Lunch, &pools.lunch),
                (MealSlot::Dinner, &pools.dinner),
                (MealSlot::Dessert, &pools.dessert),
            ] {
                match Self::take_first_unused(pool, &mut used) {
                    Some(scored) => entries.push(Self::entry(day, slot, scored)),
                    None => {
                        debug!(day, slot = slot.as_str(), "pool exhausted, slot left empty");
                    }
                }
            }
        }

        entries
    }

    /// First pool element not yet used this run; marks it used
    fn take_first_unused<'a>(
        pool: &'a [ScoredFood],
        used: &mut HashSet<u64>,
    ) -> Option<&'a ScoredFood> {
        let picked = pool.iter().find(|s| !used.contains(&s.food.food_id))?;
        used.insert(picked.food.food_id);
        Some(picked)
    }

    /// Plan entry with a nutrient snapshot copied at selection time
    fn entry(day: u32, meal: MealSlot, scored: &ScoredFood) -> PlanEntry {
        PlanEntry {
            day,
            meal,
            food_id: scored.food.food_id,
            name: scored.food.name.clone(),
            calories_kcal: scored.food.calories_kcal,
            protein_g: scored.food.protein_g,
            fat_g: scored.food.fat_g,
            carbs_g: scored.food.carbs_g,
            country: scored.food.country.clone(),
            category: scored.category,
        }
    }
}
