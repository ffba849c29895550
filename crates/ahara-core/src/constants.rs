// ABOUTME: Domain constants for nutrition math, dosha scoring, and food heuristics
// ABOUTME: Organized in nested modules by concern, consumed across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

/// Macronutrient energy densities (Atwater factors)
pub mod energy {
    /// Energy per gram of protein
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;

    /// Energy per gram of fat
    pub const FAT_KCAL_PER_G: f64 = 9.0;

    /// Energy per gram of carbohydrate
    pub const CARB_KCAL_PER_G: f64 = 4.0;

    /// Share of daily calories allocated to fat
    pub const FAT_CALORIE_SHARE: f64 = 0.25;
}

/// Calorie and protein adjustments per weight goal
pub mod goal_adjustments {
    /// Daily calorie deficit for weight loss
    pub const LOSS_CALORIE_DEFICIT: f64 = 500.0;

    /// Daily calorie surplus for weight gain
    pub const GAIN_CALORIE_SURPLUS: f64 = 300.0;

    /// Protein grams per kg of body weight during a cut
    pub const LOSS_PROTEIN_PER_KG: f64 = 2.0;

    /// Protein grams per kg of body weight during a bulk
    pub const GAIN_PROTEIN_PER_KG: f64 = 2.2;

    /// Protein grams per kg of body weight at maintenance
    pub const MAINTAIN_PROTEIN_PER_KG: f64 = 1.5;
}

/// Fractions of the daily target assigned to each meal slot
pub mod meal_split {
    /// Breakfast share of the daily target
    pub const BREAKFAST_FRACTION: f64 = 0.25;

    /// Lunch share of the daily target
    pub const LUNCH_FRACTION: f64 = 0.35;

    /// Dinner share of the daily target
    pub const DINNER_FRACTION: f64 = 0.40;
}

/// Dosha fit scoring weights (lower total = better fit)
pub mod dosha_scoring {
    /// Penalty when a food aggravates the person's current imbalance
    pub const VIKRITI_AGGRAVATING_PENALTY: f64 = 3.0;

    /// Credit when a food pacifies the person's current imbalance
    pub const VIKRITI_PACIFYING_CREDIT: f64 = -1.0;

    /// Credit when a food pacifies the person's baseline constitution
    pub const PRAKRITI_PACIFYING_CREDIT: f64 = -0.5;
}

/// Thresholds for assigning non-dessert foods to a meal bucket
pub mod meal_buckets {
    /// Foods at or below this energy land in the breakfast pool
    pub const BREAKFAST_MAX_CALORIES: f64 = 250.0;

    /// Protein-dense foods at or above this land in the dinner pool
    pub const DINNER_MIN_PROTEIN_G: f64 = 15.0;

    /// Energy-dense foods at or above this land in the dinner pool
    pub const DINNER_MIN_CALORIES: f64 = 300.0;
}

/// Nutrient thresholds for the heuristic dessert classifier
pub mod dessert_detection {
    /// Sugar above this suggests a dessert when protein is low
    pub const HIGH_SUGAR_G: f64 = 15.0;

    /// Carbs above this suggest a dessert when protein is low
    pub const HIGH_CARBS_G: f64 = 40.0;

    /// Protein below this keeps the high-sugar/high-carb dessert rule active
    pub const LOW_PROTEIN_G: f64 = 8.0;

    /// Protein below this triggers the moderate-carb dessert rule
    pub const VERY_LOW_PROTEIN_G: f64 = 5.0;

    /// Carbs above this trigger the moderate-carb dessert rule
    pub const MODERATE_CARBS_G: f64 = 25.0;
}

/// Dish-name lexicons for keyword matching (lowercase substrings)
pub mod lexicon {
    /// Names of dishes treated as breakfast food regardless of macros
    pub const BREAKFAST_DISHES: &[&str] = &[
        "dosa",
        "idli",
        "pancake",
        "pancakes",
        "upma",
        "poha",
        "porridge",
        "toast",
        "omelette",
        "masala",
        "masala dosa",
        "paratha",
        "pesarattu",
        "pongal",
        "appam",
        "uttapam",
        "vada",
        "sambar",
        "chutney",
    ];

    /// Names of dishes treated as desserts regardless of macros
    pub const DESSERT_DISHES: &[&str] = &[
        "gulab jamun",
        "rasgulla",
        "mysore pak",
        "jalebi",
        "kheer",
        "halwa",
        "barfi",
        "laddu",
        "rasmalai",
        "sandesh",
        "shrikhand",
        "kulfi",
        "payasam",
        "modak",
        "peda",
        "rabri",
        "gajar halwa",
        "sohan papdi",
        "malpua",
        "shahi tukda",
        "double ka meetha",
        "basundi",
        "mithai",
        "sweet",
        "dessert",
        "mitha",
        "meetha",
    ];
}

/// Defaults for a planning run
pub mod planning {
    /// Number of days covered by one plan
    pub const DEFAULT_PLAN_DAYS: u32 = 7;

    /// Cuisine the catalog is filtered to when none is configured
    pub const DEFAULT_CUISINE: &str = "indian";
}
