// ABOUTME: Person profile with body metrics, goal, and constitutional fields
// ABOUTME: Enum fields reject invalid values at the serde boundary, not in the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

use serde::{Deserialize, Serialize};

/// Biological gender used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male branch of Mifflin-St Jeor
    #[serde(alias = "Male")]
    Male,
    /// Female branch of Mifflin-St Jeor
    #[serde(alias = "Female")]
    Female,
}

/// Habitual activity level driving the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little to no exercise (also the multiplier floor)
    Sedentary,
    /// Exercise 1-3 days per week
    Light,
    /// Exercise 3-5 days per week
    Moderate,
    /// Exercise 6-7 days per week
    Active,
    /// Twice-daily training
    Athlete,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR. `Sedentary`'s 1.2 doubles as the
    /// floor value an unrecognized level would historically fall back to.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::Athlete => 1.9,
        }
    }
}

/// Weight goal shifting the calorie and protein targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Hold current weight
    Maintain,
    /// Cut: calorie deficit, higher protein
    Loss,
    /// Bulk: calorie surplus, highest protein
    Gain,
}

/// One of the three constitutional categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    /// Air/ether constitution
    #[serde(alias = "Vata")]
    Vata,
    /// Fire/water constitution
    #[serde(alias = "Pitta")]
    Pitta,
    /// Earth/water constitution
    #[serde(alias = "Kapha")]
    Kapha,
}

/// Season of the planning run, consumed by the dosha adjustment forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// Aggravates Pitta
    Summer,
    /// Aggravates Kapha
    Winter,
    /// Aggravates Vata
    Autumn,
    /// Aggravates Vata
    LateSummer,
    /// No seasonal adjustment
    Spring,
}

/// One person's input to a planning run; immutable for its duration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonProfile {
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Gender branch for the BMR formula
    pub gender: Gender,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: Goal,
    /// Baseline constitution, when assessed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prakriti: Option<Dosha>,
    /// Current constitutional imbalance, when assessed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vikriti: Option<Dosha>,
    /// Season at planning time (forecast input only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    /// Hour of day 0-23 at planning time (forecast input only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<u32>,
}
