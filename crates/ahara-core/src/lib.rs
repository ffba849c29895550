// ABOUTME: Core types and constants for the Ahara meal planning engine
// ABOUTME: Foundation crate with data models, error handling, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

#![deny(unsafe_code)]

//! # Ahara Core
//!
//! Foundation crate providing shared types and constants for the Ahara meal
//! planning engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Food catalog, person profile, nutrition, and plan models
//! - **errors**: Unified error handling with `PlannerError` and `ClassifierError`
//! - **constants**: Domain constants organized by concern

/// Unified error handling for planning runs and classifier calls
pub mod errors;

/// Domain constants (energy densities, penalties, heuristic thresholds)
pub mod constants;

/// Core data models (`FoodRecord`, `PersonProfile`, `WeeklyPlan`, etc.)
pub mod models;

pub use errors::{ClassifierError, PlannerError, PlannerResult};
pub use models::{
    ActivityLevel, DailyTotal, Dosha, DoshaAdjustment, DoshaEffect, FoodCategory, FoodRecord,
    Gender, Goal, MealSlot, NutrientTarget, PersonProfile, PlanEntry, PortionSplit, Season,
    WeeklyPlan,
};
