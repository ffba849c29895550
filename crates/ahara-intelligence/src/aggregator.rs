// ABOUTME: Per-day nutrient totals over the flat plan table
// ABOUTME: Every day gets a row; days with no entries are zero-filled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

use ahara_core::models::{DailyTotal, PlanEntry};

/// Sum each day's filled slots into one row per day
///
/// Totals are direct sums of the entry snapshots with no intermediate
/// rounding, so a day's calorie total is exactly the sum of its entries.
#[must_use]
pub fn daily_totals(entries: &[PlanEntry], days: u32) -> Vec<DailyTotal> {
    (0..days)
        .map(|day| {
            entries
                .iter()
                .filter(|e| e.day == day)
                .fold(DailyTotal::empty(day), |mut total, entry| {
                    total.calories += entry.calories_kcal;
                    total.protein_g += entry.protein_g;
                    total.fat_g += entry.fat_g;
                    total.carbs_g += entry.carbs_g;
                    total
                })
        })
        .collect()
}
