// ABOUTME: Dessert classification capability with two swappable reference backends
// ABOUTME: Keyword/nutrient heuristic and a precomputed label overlay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

//! Dessert Classification
//!
//! The pipeline treats dessert detection as an external capability: a
//! synchronous, individually fallible call made once per food per run. A
//! failed call never aborts planning - the categorizer degrades the food to
//! `NonDessert` and continues.
//!
//! Two reference implementations are provided:
//! - [`HeuristicClassifier`] - keyword lexicon plus sugar/carb/protein
//!   thresholds; infallible.
//! - [`LabelOverlayClassifier`] - a precomputed `food_id -> category` map,
//!   the artifact shape a trained model export produces; unknown ids fail
//!   per-food with [`ClassifierError::MissingLabel`].

use std::collections::HashMap;

use ahara_core::constants::{dessert_detection, lexicon};
use ahara_core::models::{FoodCategory, FoodRecord};
use ahara_core::ClassifierError;

/// Capability interface for dessert detection
///
/// Implementations must be callable once per food per run and may fail per
/// call; callers treat a failure as `NonDessert`.
pub trait DessertClassifier {
    /// Label one food as dessert or non-dessert
    ///
    /// # Errors
    ///
    /// Returns a [`ClassifierError`] when the backend cannot produce a
    /// label for this food.
    fn classify(&self, food: &FoodRecord) -> Result<FoodCategory, ClassifierError>;
}

/// Rule-based dessert detector
///
/// Ordered rules, first match wins:
/// 1. dessert keyword in the dish name
/// 2. breakfast keyword in the dish name (forces non-dessert)
/// 3. high sugar or high carbs with low protein
/// 4. very low protein with moderate carbs
/// 5. default non-dessert
#[derive(Debug, Clone)]
pub struct HeuristicClassifier {
    dessert_keywords: Vec<String>,
    savory_keywords: Vec<String>,
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self {
            dessert_keywords: lexicon::DESSERT_DISHES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            savory_keywords: lexicon::BREAKFAST_DISHES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        }
    }
}

impl HeuristicClassifier {
    /// Classifier with custom lexicons
    #[must_use]
    pub const fn new(dessert_keywords: Vec<String>, savory_keywords: Vec<String>) -> Self {
        Self {
            dessert_keywords,
            savory_keywords,
        }
    }
}

impl DessertClassifier for HeuristicClassifier {
    fn classify(&self, food: &FoodRecord) -> Result<FoodCategory, ClassifierError> {
        let name = food.name.to_lowercase();

        if self.dessert_keywords.iter().any(|k| name.contains(k)) {
            return Ok(FoodCategory::Dessert);
        }
        if self.savory_keywords.iter().any(|k| name.contains(k)) {
            return Ok(FoodCategory::NonDessert);
        }

        let sweet_profile = (food.sugar_g > dessert_detection::HIGH_SUGAR_G
            || food.carbs_g > dessert_detection::HIGH_CARBS_G)
            && food.protein_g < dessert_detection::LOW_PROTEIN_G;
        if sweet_profile {
            return Ok(FoodCategory::Dessert);
        }

        if food.protein_g < dessert_detection::VERY_LOW_PROTEIN_G
            && food.carbs_g > dessert_detection::MODERATE_CARBS_G
        {
            return Ok(FoodCategory::Dessert);
        }

        Ok(FoodCategory::NonDessert)
    }
}

/// Classifier backed by externally produced labels
///
/// Wraps the export of a trained model (or any other labeling process) as
/// a plain `food_id -> category` map. Foods missing from the map fail
/// per-call, which the categorizer degrades to `NonDessert`.
#[derive(Debug, Clone, Default)]
pub struct LabelOverlayClassifier {
    labels: HashMap<u64, FoodCategory>,
}

impl LabelOverlayClassifier {
    /// Build from a label map
    #[must_use]
    pub const fn new(labels: HashMap<u64, FoodCategory>) -> Self {
        Self { labels }
    }

    /// Number of labeled foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the overlay holds no labels at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl DessertClassifier for LabelOverlayClassifier {
    fn classify(&self, food: &FoodRecord) -> Result<FoodCategory, ClassifierError> {
        self.labels
            .get(&food.food_id)
            .copied()
            .ok_or(ClassifierError::MissingLabel {
                food_id: food.food_id,
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn food(name: &str, calories: f64, protein: f64, carbs: f64, sugar: f64) -> FoodRecord {
        FoodRecord {
            food_id: 7,
            name: name.to_owned(),
            country: "Indian".to_owned(),
            calories_kcal: calories,
            protein_g: protein,
            fat_g: 5.0,
            carbs_g: carbs,
            sugar_g: sugar,
            vata_effect: ahara_core::models::DoshaEffect::Neutral,
            pitta_effect: ahara_core::models::DoshaEffect::Neutral,
            kapha_effect: ahara_core::models::DoshaEffect::Neutral,
        }
    }

    #[test]
    fn dessert_keyword_wins_regardless_of_macros() {
        let classifier = HeuristicClassifier::default();
        let f = food("Gulab Jamun", 300.0, 20.0, 10.0, 2.0);
        assert_eq!(classifier.classify(&f).unwrap(), FoodCategory::Dessert);
    }

    #[test]
    fn breakfast_keyword_blocks_the_nutrient_rules() {
        let classifier = HeuristicClassifier::default();
        // Sweet macro profile, but "dosa" is a savory dish name.
        let f = food("Sweet-ish Dosa Special", 200.0, 2.0, 45.0, 20.0);
        // "sweet" appears earlier in the dessert lexicon, so use a clean name.
        let f2 = food("Rava Dosa", 200.0, 2.0, 45.0, 20.0);
        assert_eq!(classifier.classify(&f).unwrap(), FoodCategory::Dessert);
        assert_eq!(classifier.classify(&f2).unwrap(), FoodCategory::NonDessert);
    }

    #[test]
    fn high_sugar_low_protein_is_dessert() {
        let classifier = HeuristicClassifier::default();
        let f = food("Mystery Dish", 250.0, 4.0, 20.0, 18.0);
        assert_eq!(classifier.classify(&f).unwrap(), FoodCategory::Dessert);
    }

    #[test]
    fn protein_dense_dish_is_not_dessert() {
        let classifier = HeuristicClassifier::default();
        let f = food("Paneer Curry", 350.0, 22.0, 12.0, 4.0);
        assert_eq!(classifier.classify(&f).unwrap(), FoodCategory::NonDessert);
    }

    #[test]
    fn overlay_returns_stored_label_and_fails_on_unknown_id() {
        let mut labels = HashMap::new();
        labels.insert(7, FoodCategory::Dessert);
        let classifier = LabelOverlayClassifier::new(labels);

        let known = food("Anything", 100.0, 1.0, 10.0, 5.0);
        assert_eq!(classifier.classify(&known).unwrap(), FoodCategory::Dessert);

        let unknown = FoodRecord {
            food_id: 99,
            ..known
        };
        assert!(matches!(
            classifier.classify(&unknown),
            Err(ClassifierError::MissingLabel { food_id: 99 })
        ));
    }
}
