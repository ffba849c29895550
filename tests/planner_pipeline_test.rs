// ABOUTME: End-to-end tests for the planning pipeline through the public API
// ABOUTME: Covers invariants, determinism, degraded pools, and classifier swapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::{HashMap, HashSet};

use ahara_core::models::{
    ActivityLevel, Dosha, DoshaEffect, FoodCategory, FoodRecord, Gender, Goal, MealSlot,
    PersonProfile,
};
use ahara_intelligence::{
    HeuristicClassifier, LabelOverlayClassifier, MealPlanner, PlannerConfig,
};

fn food(id: u64, name: &str, calories: f64, protein: f64, sugar: f64) -> FoodRecord {
    FoodRecord {
        food_id: id,
        name: name.to_owned(),
        country: "Indian".to_owned(),
        calories_kcal: calories,
        protein_g: protein,
        fat_g: 7.0,
        carbs_g: 32.0,
        sugar_g: sugar,
        vata_effect: DoshaEffect::Decrease,
        pitta_effect: DoshaEffect::Neutral,
        kapha_effect: DoshaEffect::Increase,
    }
}

/// Catalog with ten candidates per meal bucket and eight desserts,
/// comfortably above the 4 x 7 slots of a week.
fn wide_catalog() -> Vec<FoodRecord> {
    let mut foods = Vec::new();
    for i in 0..10 {
        foods.push(food(i, &format!("Poha Bowl {i}"), 190.0, 5.0, 3.0));
    }
    for i in 10..20 {
        foods.push(food(i, &format!("Veg Korma {i}"), 270.0, 7.0, 4.0));
    }
    for i in 20..30 {
        foods.push(food(i, &format!("Tandoori Platter {i}"), 400.0, 24.0, 2.0));
    }
    for i in 30..38 {
        foods.push(food(i, &format!("Jalebi Twist {i}"), 320.0, 3.0, 28.0));
    }
    foods
}

fn default_profile() -> PersonProfile {
    PersonProfile {
        age: 34,
        weight_kg: 68.0,
        height_cm: 172.0,
        gender: Gender::Female,
        activity_level: ActivityLevel::Light,
        goal: Goal::Maintain,
        prakriti: Some(Dosha::Vata),
        vikriti: Some(Dosha::Kapha),
        season: None,
        time_of_day: None,
    }
}

#[test]
fn week_has_unique_foods_and_bounded_days() {
    let planner = MealPlanner::new(PlannerConfig::with_seed(2024));
    let plan = planner
        .plan(&wide_catalog(), &default_profile(), &HeuristicClassifier::default())
        .unwrap();

    // 3 meals + 1 dessert per day for 7 days; pools are wide enough.
    assert_eq!(plan.entries.len(), 28);

    let unique: HashSet<u64> = plan.entries.iter().map(|e| e.food_id).collect();
    assert_eq!(unique.len(), plan.entries.len());

    for day in 0..7 {
        let day_entries: Vec<_> = plan.entries.iter().filter(|e| e.day == day).collect();
        assert!(day_entries.len() <= 4);
        let desserts = day_entries
            .iter()
            .filter(|e| e.meal == MealSlot::Dessert)
            .count();
        assert!(desserts <= 1);
    }
}

#[test]
fn plan_table_is_ordered_day_then_slot() {
    let planner = MealPlanner::new(PlannerConfig::with_seed(8));
    let plan = planner
        .plan(&wide_catalog(), &default_profile(), &HeuristicClassifier::default())
        .unwrap();
    let keys: Vec<(u32, MealSlot)> = plan.entries.iter().map(|e| (e.day, e.meal)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn identical_seeds_give_identical_plans_across_planner_instances() {
    let classifier = HeuristicClassifier::default();
    let a = MealPlanner::new(PlannerConfig::with_seed(77))
        .plan(&wide_catalog(), &default_profile(), &classifier)
        .unwrap();
    let b = MealPlanner::new(PlannerConfig::with_seed(77))
        .plan(&wide_catalog(), &default_profile(), &classifier)
        .unwrap();
    assert_eq!(a.entries, b.entries);
    assert_eq!(a.seed, b.seed);
}

#[test]
fn independent_runs_do_not_share_used_food_state() {
    // Two people planned back to back may legitimately receive the same
    // foods; the used set is scoped to one run.
    let planner = MealPlanner::new(PlannerConfig::with_seed(5));
    let classifier = HeuristicClassifier::default();
    let first = planner
        .plan(&wide_catalog(), &default_profile(), &classifier)
        .unwrap();
    let second = planner
        .plan(&wide_catalog(), &default_profile(), &classifier)
        .unwrap();
    assert_eq!(first.entries, second.entries);
}

#[test]
fn small_catalog_degrades_to_partial_days() {
    // Five non-dessert foods for a seven day plan: the week cannot be
    // filled, but the run must still complete without error.
    let foods: Vec<FoodRecord> = (0..5)
        .map(|i| food(i, &format!("Veg Korma {i}"), 270.0, 7.0, 4.0))
        .collect();
    let planner = MealPlanner::new(PlannerConfig::with_seed(1));
    let plan = planner
        .plan(&foods, &default_profile(), &HeuristicClassifier::default())
        .unwrap();
    assert_eq!(plan.entries.len(), 5);
    assert_eq!(plan.daily_totals.len(), 7);
    // Later days are empty and zero-filled in the totals.
    assert!(plan.daily_totals[6].calories.abs() < f64::EPSILON);
}

#[test]
fn label_overlay_overrides_the_heuristic_verdict() {
    // The overlay declares two savory-looking foods to be desserts and is
    // silent about the rest, which degrade to non-dessert.
    let mut labels = HashMap::new();
    labels.insert(10, FoodCategory::Dessert);
    labels.insert(11, FoodCategory::Dessert);
    let overlay = LabelOverlayClassifier::new(labels);

    let foods: Vec<FoodRecord> = (0..20)
        .map(|i| food(i, &format!("Veg Korma {i}"), 270.0, 7.0, 4.0))
        .collect();
    let planner = MealPlanner::new(PlannerConfig::with_seed(13));
    let plan = planner.plan(&foods, &default_profile(), &overlay).unwrap();

    let dessert_ids: HashSet<u64> = plan
        .entries
        .iter()
        .filter(|e| e.meal == MealSlot::Dessert)
        .map(|e| e.food_id)
        .collect();
    assert!(dessert_ids.is_subset(&HashSet::from([10, 11])));
    assert!(!dessert_ids.is_empty());
}

#[test]
fn dosha_scores_do_not_influence_selection() {
    // Two catalogs identical except for dosha effects must produce the
    // same assignment under the same seed: the score is informational.
    let base = wide_catalog();
    let flipped: Vec<FoodRecord> = base
        .iter()
        .cloned()
        .map(|mut f| {
            f.vata_effect = DoshaEffect::Increase;
            f.pitta_effect = DoshaEffect::Increase;
            f.kapha_effect = DoshaEffect::Increase;
            f
        })
        .collect();

    let classifier = HeuristicClassifier::default();
    let planner = MealPlanner::new(PlannerConfig::with_seed(21));
    let a = planner.plan(&base, &default_profile(), &classifier).unwrap();
    let b = planner.plan(&flipped, &default_profile(), &classifier).unwrap();

    let ids = |p: &ahara_core::models::WeeklyPlan| -> Vec<u64> {
        p.entries.iter().map(|e| e.food_id).collect()
    };
    assert_eq!(ids(&a), ids(&b));
}
