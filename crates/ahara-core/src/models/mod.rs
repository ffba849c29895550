// ABOUTME: Core data models for the Ahara meal planning engine
// ABOUTME: Food catalog records, person profiles, nutrition targets, and plan output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

/// Food catalog records and dosha effect annotations
pub mod food;

/// Nutrient targets and per-meal portion splits
pub mod nutrition;

/// Plan entries, daily totals, and the assembled weekly plan
pub mod plan;

/// Person profile with body metrics and constitutional fields
pub mod profile;

pub use food::{DoshaEffect, FoodCategory, FoodRecord};
pub use nutrition::{NutrientTarget, PortionSplit};
pub use plan::{DailyTotal, DoshaAdjustment, MealSlot, PlanEntry, WeeklyPlan};
pub use profile::{ActivityLevel, Dosha, Gender, Goal, PersonProfile, Season};
