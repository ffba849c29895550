// ABOUTME: Food catalog record with nutrient facts and signed dosha effects
// ABOUTME: DoshaEffect round-trips the catalog's +/-/blank sign convention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Signed effect of a food on one dosha axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DoshaEffect {
    /// Aggravates the dosha (`+` in the catalog)
    Increase,
    /// No meaningful effect (blank in the catalog)
    #[default]
    Neutral,
    /// Pacifies the dosha (`-` in the catalog)
    Decrease,
}

impl DoshaEffect {
    /// Parse the catalog sign convention; anything but `+`/`-` is neutral
    #[must_use]
    pub fn from_sign(sign: Option<&str>) -> Self {
        match sign.map(str::trim) {
            Some("+") => Self::Increase,
            Some("-") => Self::Decrease,
            _ => Self::Neutral,
        }
    }

    /// Signed offset used by the scorer (+1, 0, -1)
    #[must_use]
    pub const fn offset(self) -> i8 {
        match self {
            Self::Increase => 1,
            Self::Neutral => 0,
            Self::Decrease => -1,
        }
    }

    const fn sign(self) -> &'static str {
        match self {
            Self::Increase => "+",
            Self::Neutral => "",
            Self::Decrease => "-",
        }
    }
}

impl Serialize for DoshaEffect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.sign())
    }
}

impl<'de> Deserialize<'de> for DoshaEffect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let sign = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_sign(sign.as_deref()))
    }
}

/// Dessert/non-dessert label attached by the classification step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Sweet course, eligible for the optional fourth slot of a day
    Dessert,
    /// Everything else; feeds the breakfast/lunch/dinner pools
    NonDessert,
}

/// Immutable catalog entry for one food
///
/// The engine never mutates catalog records; per-run annotations (dosha
/// score, category) are derived alongside and scoped to one planning run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRecord {
    /// Unique, stable catalog identity
    pub food_id: u64,
    /// Common dish name
    #[serde(alias = "name_common")]
    pub name: String,
    /// Cuisine/country tag used for catalog filtering
    pub country: String,
    /// Energy per serving
    #[serde(default)]
    pub calories_kcal: f64,
    /// Protein per serving (grams)
    #[serde(default)]
    pub protein_g: f64,
    /// Fat per serving (grams)
    #[serde(default)]
    pub fat_g: f64,
    /// Carbohydrates per serving (grams)
    #[serde(default)]
    pub carbs_g: f64,
    /// Sugar per serving (grams)
    #[serde(default)]
    pub sugar_g: f64,
    /// Effect on the Vata axis
    #[serde(default, alias = "Vata")]
    pub vata_effect: DoshaEffect,
    /// Effect on the Pitta axis
    #[serde(default, alias = "Pitta")]
    pub pitta_effect: DoshaEffect,
    /// Effect on the Kapha axis
    #[serde(default, alias = "Kapha")]
    pub kapha_effect: DoshaEffect,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sign_parsing_tolerates_junk() {
        assert_eq!(DoshaEffect::from_sign(Some("+")), DoshaEffect::Increase);
        assert_eq!(DoshaEffect::from_sign(Some(" - ")), DoshaEffect::Decrease);
        assert_eq!(DoshaEffect::from_sign(Some("")), DoshaEffect::Neutral);
        assert_eq!(DoshaEffect::from_sign(Some("++")), DoshaEffect::Neutral);
        assert_eq!(DoshaEffect::from_sign(None), DoshaEffect::Neutral);
    }

    #[test]
    fn record_accepts_catalog_column_names() {
        let raw = r#"{
            "food_id": 12,
            "name_common": "Masala Dosa",
            "country": "Indian",
            "calories_kcal": 210.0,
            "protein_g": 6.0,
            "fat_g": 8.0,
            "carbs_g": 28.0,
            "Vata": "-",
            "Pitta": "+",
            "Kapha": null
        }"#;
        let food: FoodRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(food.name, "Masala Dosa");
        assert_eq!(food.vata_effect, DoshaEffect::Decrease);
        assert_eq!(food.pitta_effect, DoshaEffect::Increase);
        assert_eq!(food.kapha_effect, DoshaEffect::Neutral);
        // sugar_g missing in the document defaults to zero
        assert!((food.sugar_g - 0.0).abs() < f64::EPSILON);
    }
}
