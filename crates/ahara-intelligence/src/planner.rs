// ABOUTME: End-to-end planning pipeline - targets, scoring, pools, assignment, totals
// ABOUTME: One synchronous pass per run; only EmptyCatalog aborts, everything else degrades
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

//! Meal Planner Pipeline
//!
//! Wires the pipeline stages into one sequential pass per planning run:
//! nutrient targets from the profile, cuisine filtering (the single fatal
//! precondition), dosha scoring, classification and pool building, greedy
//! weekly assignment, and daily aggregation. Each run owns its pools and
//! used-food state, so independent runs never interfere.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use ahara_core::models::{FoodRecord, PersonProfile, WeeklyPlan};
use ahara_core::{PlannerError, PlannerResult};

use crate::aggregator;
use crate::categorizer::FoodCategorizer;
use crate::classifier::DessertClassifier;
use crate::config::PlannerConfig;
use crate::dosha;
use crate::engine::WeeklyAssignmentEngine;
use crate::targets;

/// Deterministic weekly meal planner
#[derive(Debug, Clone, Default)]
pub struct MealPlanner {
    config: PlannerConfig,
}

impl MealPlanner {
    /// Planner with the given run configuration
    #[must_use]
    pub const fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The configuration this planner runs with
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Produce a weekly plan for one person from the food catalog
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::EmptyCatalog`] when no catalog food matches
    /// the configured cuisine; no partial plan is produced. Every other
    /// irregularity (classifier failures, thin pools) degrades into plan
    /// gaps or default labels and the run completes.
    pub fn plan(
        &self,
        catalog: &[FoodRecord],
        profile: &PersonProfile,
        classifier: &dyn DessertClassifier,
    ) -> PlannerResult<WeeklyPlan> {
        let target = targets::daily_target(profile);
        let portions = targets::portion_split(&target, &self.config.split);

        let cuisine = self.config.cuisine.to_lowercase();
        let filtered: Vec<FoodRecord> = catalog
            .iter()
            .filter(|f| f.country.to_lowercase() == cuisine)
            .cloned()
            .collect();
        if filtered.is_empty() {
            return Err(PlannerError::empty_catalog(&self.config.cuisine));
        }
        info!(
            cuisine = %self.config.cuisine,
            candidates = filtered.len(),
            "catalog filtered"
        );

        let scored: Vec<(FoodRecord, f64)> = filtered
            .into_iter()
            .map(|food| {
                let score = dosha::penalty(&food, profile.vikriti, profile.prakriti);
                (food, score)
            })
            .collect();

        let categorizer = FoodCategorizer::new(self.config.categorizer.clone(), self.config.seed);
        let pools = categorizer.categorize(scored, classifier);
        info!(
            breakfast = pools.breakfast.len(),
            lunch = pools.lunch.len(),
            dinner = pools.dinner.len(),
            dessert = pools.dessert.len(),
            "pools built"
        );

        let entries = WeeklyAssignmentEngine::new(self.config.days).assign(&pools);
        let daily_totals = aggregator::daily_totals(&entries, self.config.days);

        let plan = WeeklyPlan {
            plan_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            seed: self.config.seed,
            target,
            portions,
            entries,
            daily_totals,
            dosha_forecast: dosha::adjustment_forecast(profile),
        };
        info!(
            plan_id = %plan.plan_id,
            entries = plan.entries.len(),
            days = self.config.days,
            "plan assembled"
        );
        Ok(plan)
    }
}
