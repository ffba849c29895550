// ABOUTME: Constitutional-fit scoring of foods and the run-level imbalance forecast
// ABOUTME: Lower penalty = better fit; the score is an annotation, never a ranking key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

//! Dosha Scoring
//!
//! Computes a per-food penalty from the food's signed effects on the three
//! constitutional axes and the person's `vikriti` (current imbalance) and
//! `prakriti` (baseline). A food that aggravates the current imbalance is
//! penalized hard; one that pacifies it is credited. The resulting score is
//! attached to every pool entry as information for the caller - the
//! assignment engine itself is score-agnostic.
//!
//! Also provides the run-level [`adjustment_forecast`]: an informational
//! accumulation of constitutional pressure from age, hour of day, and
//! season.

use ahara_core::constants::dosha_scoring;
use ahara_core::models::{Dosha, DoshaAdjustment, DoshaEffect, FoodRecord, PersonProfile, Season};

const AXES: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

fn effect_on(food: &FoodRecord, axis: Dosha) -> DoshaEffect {
    match axis {
        Dosha::Vata => food.vata_effect,
        Dosha::Pitta => food.pitta_effect,
        Dosha::Kapha => food.kapha_effect,
    }
}

/// Constitutional-fit penalty for one food; lower is more suitable
///
/// Accumulated independently per axis: the `vikriti` axis contributes +3
/// for an aggravating effect and -1 for a pacifying one, the `prakriti`
/// axis contributes -0.5 for a pacifying effect, and all other axes
/// contribute nothing. Absent `vikriti`/`prakriti` means no contribution
/// from that branch.
#[must_use]
pub fn penalty(food: &FoodRecord, vikriti: Option<Dosha>, prakriti: Option<Dosha>) -> f64 {
    let mut total = 0.0;
    for axis in AXES {
        let effect = effect_on(food, axis);
        if vikriti == Some(axis) {
            match effect {
                DoshaEffect::Increase => total += dosha_scoring::VIKRITI_AGGRAVATING_PENALTY,
                DoshaEffect::Decrease => total += dosha_scoring::VIKRITI_PACIFYING_CREDIT,
                DoshaEffect::Neutral => {}
            }
        }
        if prakriti == Some(axis) && effect == DoshaEffect::Decrease {
            total += dosha_scoring::PRAKRITI_PACIFYING_CREDIT;
        }
    }
    total
}

/// Informational constitutional pressure forecast for a planning run
///
/// Age always contributes one count; hour of day and season contribute only
/// when present on the profile. Spring carries no seasonal pressure.
#[must_use]
pub fn adjustment_forecast(profile: &PersonProfile) -> DoshaAdjustment {
    let mut adj = DoshaAdjustment::default();

    if profile.age < 30 {
        adj.kapha += 1;
    } else if profile.age < 60 {
        adj.pitta += 1;
    } else {
        adj.vata += 1;
    }

    if let Some(hour) = profile.time_of_day {
        match hour % 24 {
            6..=9 | 18..=21 => adj.kapha += 1,
            10..=13 | 22..=23 | 0..=1 => adj.pitta += 1,
            _ => adj.vata += 1,
        }
    }

    match profile.season {
        Some(Season::Summer) => adj.pitta += 1,
        Some(Season::Winter) => adj.kapha += 1,
        Some(Season::Autumn | Season::LateSummer) => adj.vata += 1,
        Some(Season::Spring) | None => {}
    }

    adj
}
