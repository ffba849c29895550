// ABOUTME: Daily calorie/macro targets via Mifflin-St Jeor and goal adjustments
// ABOUTME: Pure functions; the portion split is advisory metadata only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

//! Nutrient Target Calculation
//!
//! Derives one person's daily calorie and macro targets from body metrics:
//! basal metabolic rate via Mifflin-St Jeor, total daily energy expenditure
//! via the activity multiplier, then goal-specific calorie and protein
//! adjustments. Fat is a fixed share of calories and carbohydrates absorb
//! the remainder - which may come out negative when protein and fat already
//! exceed the calorie target, signaling an infeasible macro split.

use ahara_core::constants::{energy, goal_adjustments};
use ahara_core::models::{Gender, Goal, NutrientTarget, PersonProfile, PortionSplit};

use crate::config::MealSplitConfig;

/// Basal metabolic rate via the Mifflin-St Jeor formula
#[must_use]
pub fn basal_metabolic_rate(profile: &PersonProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Daily nutrient target for the given profile
#[must_use]
pub fn daily_target(profile: &PersonProfile) -> NutrientTarget {
    let tdee = basal_metabolic_rate(profile) * profile.activity_level.multiplier();

    let calories = match profile.goal {
        Goal::Loss => tdee - goal_adjustments::LOSS_CALORIE_DEFICIT,
        Goal::Gain => tdee + goal_adjustments::GAIN_CALORIE_SURPLUS,
        Goal::Maintain => tdee,
    };

    let protein_g = profile.weight_kg
        * match profile.goal {
            Goal::Loss => goal_adjustments::LOSS_PROTEIN_PER_KG,
            Goal::Gain => goal_adjustments::GAIN_PROTEIN_PER_KG,
            Goal::Maintain => goal_adjustments::MAINTAIN_PROTEIN_PER_KG,
        };

    let fat_g = energy::FAT_CALORIE_SHARE * calories / energy::FAT_KCAL_PER_G;

    // Remaining calories go to carbs; negative values are surfaced, not clamped.
    let carbs_g = (calories - (protein_g * energy::PROTEIN_KCAL_PER_G + fat_g * energy::FAT_KCAL_PER_G))
        / energy::CARB_KCAL_PER_G;

    NutrientTarget {
        calories,
        protein_g,
        fat_g,
        carbs_g,
    }
}

/// Advisory per-meal breakdown of a daily target
#[must_use]
pub fn portion_split(target: &NutrientTarget, split: &MealSplitConfig) -> PortionSplit {
    PortionSplit {
        breakfast: target.scaled(split.breakfast),
        lunch: target.scaled(split.lunch),
        dinner: target.scaled(split.dinner),
    }
}
