// ABOUTME: Builds the four meal pools from the filtered catalog with seeded shuffling
// ABOUTME: Classifier failures degrade per-food; empty day pools fall back to all non-desserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

//! Food Categorization
//!
//! Partitions the cuisine-filtered catalog into four pools. Step one labels
//! every food dessert/non-dessert through the classifier capability; a
//! per-food classifier failure defaults that food to non-dessert and the
//! run continues. Step two buckets every non-dessert food into exactly one
//! of breakfast/lunch/dinner with ordered heuristics, first match wins:
//!
//! 1. dish name contains a breakfast keyword
//! 2. low-calorie foods go to breakfast
//! 3. protein-dense or calorie-dense foods go to dinner
//! 4. everything else is lunch
//!
//! A breakfast/lunch/dinner pool that comes out empty is replaced by the
//! entire non-dessert set so assignment degrades instead of starving; the
//! dessert pool has no such fallback and may legitimately stay empty.
//! Every pool is shuffled exactly once with a seeded RNG so the allocator
//! downstream stays deterministic.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, warn};

use ahara_core::models::{FoodCategory, FoodRecord, MealSlot};

use crate::classifier::DessertClassifier;
use crate::config::CategorizerConfig;

/// A catalog record annotated for one planning run
#[derive(Debug, Clone, Serialize)]
pub struct ScoredFood {
    /// The underlying catalog record
    pub food: FoodRecord,
    /// Constitutional-fit penalty; informational, never used for ranking
    pub dosha_score: f64,
    /// Label the classification step attached
    pub category: FoodCategory,
}

/// Category-specific candidate pools for one planning run
#[derive(Debug, Clone, Default)]
pub struct MealPools {
    /// Breakfast candidates in shuffled scan order
    pub breakfast: Vec<ScoredFood>,
    /// Lunch candidates in shuffled scan order
    pub lunch: Vec<ScoredFood>,
    /// Dinner candidates in shuffled scan order
    pub dinner: Vec<ScoredFood>,
    /// Dessert candidates; may be empty
    pub dessert: Vec<ScoredFood>,
}

/// Pool builder for one planning run
#[derive(Debug, Clone)]
pub struct FoodCategorizer {
    config: CategorizerConfig,
    seed: u64,
}

impl FoodCategorizer {
    /// Categorizer with the given heuristics and shuffle seed
    #[must_use]
    pub const fn new(config: CategorizerConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    /// Build the four shuffled pools from scored catalog records
    ///
    /// `foods` pairs each cuisine-filtered record with its dosha score.
    /// The classifier is called once per food; failures are logged and the
    /// food defaults to non-dessert.
    #[must_use]
    pub fn categorize(
        &self,
        foods: Vec<(FoodRecord, f64)>,
        classifier: &dyn DessertClassifier,
    ) -> MealPools {
        let mut desserts = Vec::new();
        let mut non_desserts = Vec::new();

        for (food, dosha_score) in foods {
            let category = match classifier.classify(&food) {
                Ok(category) => category,
                Err(err) => {
                    warn!(food_id = food.food_id, name = %food.name, error = %err,
                        "classification failed, defaulting to non-dessert");
                    FoodCategory::NonDessert
                }
            };
            let scored = ScoredFood {
                food,
                dosha_score,
                category,
            };
            match category {
                FoodCategory::Dessert => desserts.push(scored),
                FoodCategory::NonDessert => non_desserts.push(scored),
            }
        }

        let mut breakfast = Vec::new();
        let mut lunch = Vec::new();
        let mut dinner = Vec::new();
        for scored in &non_desserts {
            match self.meal_bucket(&scored.food) {
                MealSlot::Breakfast => breakfast.push(scored.clone()),
                MealSlot::Dinner => dinner.push(scored.clone()),
                _ => lunch.push(scored.clone()),
            }
        }

        // An empty day pool degrades to the whole non-dessert set rather
        // than starving that slot for the week.
        for (slot, pool) in [
            (MealSlot::Breakfast, &mut breakfast),
            (MealSlot::Lunch, &mut lunch),
            (MealSlot::Dinner, &mut dinner),
        ] {
            if pool.is_empty() {
                debug!(slot = slot.as_str(), "empty pool, substituting all non-dessert foods");
                pool.clone_from(&non_desserts);
            }
        }

        let mut pools = MealPools {
            breakfast,
            lunch,
            dinner,
            dessert: desserts,
        };
        self.shuffle(&mut pools);
        pools
    }

    /// Ordered bucket heuristics for one non-dessert food
    fn meal_bucket(&self, food: &FoodRecord) -> MealSlot {
        let name = food.name.to_lowercase();
        if self
            .config
            .breakfast_keywords
            .iter()
            .any(|k| name.contains(k))
            || food.calories_kcal <= self.config.breakfast_max_calories
        {
            MealSlot::Breakfast
        } else if food.protein_g >= self.config.dinner_min_protein_g
            || food.calories_kcal >= self.config.dinner_min_calories
        {
            MealSlot::Dinner
        } else {
            MealSlot::Lunch
        }
    }

    /// One-time seeded shuffle of every pool; the only source of
    /// randomness in a planning run
    fn shuffle(&self, pools: &mut MealPools) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        pools.breakfast.shuffle(&mut rng);
        pools.lunch.shuffle(&mut rng);
        pools.dinner.shuffle(&mut rng);
        pools.dessert.shuffle(&mut rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahara_core::models::DoshaEffect;
    use ahara_core::ClassifierError;

    fn food(id: u64, name: &str, calories: f64, protein: f64) -> FoodRecord {
        FoodRecord {
            food_id: id,
            name: name.to_owned(),
            country: "Indian".to_owned(),
            calories_kcal: calories,
            protein_g: protein,
            fat_g: 5.0,
            carbs_g: 20.0,
            sugar_g: 3.0,
            vata_effect: DoshaEffect::Neutral,
            pitta_effect: DoshaEffect::Neutral,
            kapha_effect: DoshaEffect::Neutral,
        }
    }

    struct AllNonDessert;
    impl DessertClassifier for AllNonDessert {
        fn classify(&self, _food: &FoodRecord) -> Result<FoodCategory, ClassifierError> {
            Ok(FoodCategory::NonDessert)
        }
    }

    struct AlwaysFails;
    impl DessertClassifier for AlwaysFails {
        fn classify(&self, _food: &FoodRecord) -> Result<FoodCategory, ClassifierError> {
            Err(ClassifierError::Failed {
                reason: "backend offline".to_owned(),
            })
        }
    }

    fn categorizer(seed: u64) -> FoodCategorizer {
        FoodCategorizer::new(CategorizerConfig::default(), seed)
    }

    fn ids(pool: &[ScoredFood]) -> Vec<u64> {
        pool.iter().map(|s| s.food.food_id).collect()
    }

    #[test]
    fn bucket_rules_apply_in_order() {
        let c = categorizer(0);
        // Keyword beats the calorie rules.
        assert_eq!(c.meal_bucket(&food(1, "Chicken Dosa", 500.0, 30.0)), MealSlot::Breakfast);
        // Low calorie without keyword.
        assert_eq!(c.meal_bucket(&food(2, "Steamed Greens", 120.0, 3.0)), MealSlot::Breakfast);
        // Protein-dense.
        assert_eq!(c.meal_bucket(&food(3, "Dal Tadka", 280.0, 16.0)), MealSlot::Dinner);
        // Calorie-dense.
        assert_eq!(c.meal_bucket(&food(4, "Biryani", 450.0, 10.0)), MealSlot::Dinner);
        // Neither: lunch.
        assert_eq!(c.meal_bucket(&food(5, "Veg Pulao", 270.0, 7.0)), MealSlot::Lunch);
    }

    #[test]
    fn classifier_failure_degrades_to_non_dessert() {
        let foods = vec![(food(1, "Kheer", 300.0, 4.0), 0.0)];
        let pools = categorizer(0).categorize(foods, &AlwaysFails);
        assert!(pools.dessert.is_empty());
        // The food lands in the dinner pool (300 kcal) and, via the
        // empty-pool fallback, in breakfast and lunch as well.
        assert_eq!(ids(&pools.dinner), vec![1]);
        assert_eq!(ids(&pools.breakfast), vec![1]);
        assert_eq!(ids(&pools.lunch), vec![1]);
    }

    #[test]
    fn empty_day_pool_falls_back_to_all_non_desserts() {
        // Two lunch-profile foods: breakfast and dinner pools come out
        // empty and are substituted with the whole non-dessert set.
        let foods = vec![
            (food(1, "Veg Pulao", 270.0, 7.0), 0.0),
            (food(2, "Lemon Rice", 260.0, 6.0), 0.0),
        ];
        let pools = categorizer(0).categorize(foods, &AllNonDessert);
        assert_eq!(pools.breakfast.len(), 2);
        assert_eq!(pools.lunch.len(), 2);
        assert_eq!(pools.dinner.len(), 2);
        assert!(pools.dessert.is_empty());
    }

    #[test]
    fn same_seed_same_order_different_seed_may_differ() {
        let foods: Vec<(FoodRecord, f64)> = (0..12)
            .map(|i| (food(i, &format!("Curry {i}"), 270.0, 7.0), 0.0))
            .collect();
        let a = categorizer(42).categorize(foods.clone(), &AllNonDessert);
        let b = categorizer(42).categorize(foods.clone(), &AllNonDessert);
        assert_eq!(ids(&a.lunch), ids(&b.lunch));

        let c = categorizer(43).categorize(foods, &AllNonDessert);
        // Equality here would be a (vanishingly unlikely) shuffle collision;
        // the important property is the seed-42 runs agree above.
        let _ = c;
    }
}
