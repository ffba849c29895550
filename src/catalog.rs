// ABOUTME: Input boundary - catalog, profile, and classifier label documents
// ABOUTME: Validation happens here; invalid enums and shapes never reach the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

//! Input Boundary
//!
//! Loads the three input documents from JSON files:
//! - the food catalog (array of records, tolerant of the legacy
//!   `name_common`/`Vata`/`Pitta`/`Kapha` column names and `+`/`-` signs)
//! - the person profile (enum fields validated here, not in the core)
//! - an optional label overlay (`food_id` -> category) exported by an
//!   external classification process

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use ahara_core::models::{FoodCategory, FoodRecord, PersonProfile};
use ahara_core::{PlannerError, PlannerResult};
use ahara_intelligence::LabelOverlayClassifier;

/// Load the food catalog from a JSON array
///
/// # Errors
///
/// Returns [`PlannerError::Io`] when the file cannot be read and
/// [`PlannerError::Malformed`] when the document does not parse as a
/// catalog.
pub fn load_catalog(path: &Path) -> PlannerResult<Vec<FoodRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let foods: Vec<FoodRecord> =
        serde_json::from_reader(reader).map_err(|e| PlannerError::malformed("catalog", e))?;
    info!(foods = foods.len(), path = %path.display(), "catalog loaded");
    Ok(foods)
}

/// Load a person profile from a JSON document
///
/// # Errors
///
/// Returns [`PlannerError::Io`] on read failure and
/// [`PlannerError::Malformed`] when a field is missing, non-numeric, or an
/// enum value is outside its option list.
pub fn load_profile(path: &Path) -> PlannerResult<PersonProfile> {
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(|e| PlannerError::malformed("profile", e))
}

#[derive(Debug, Deserialize)]
struct LabelRow {
    food_id: u64,
    category: FoodCategory,
}

/// Load an externally produced label overlay
///
/// The document is a JSON array of `{food_id, category}` rows, the export
/// shape of an external dessert-classification run.
///
/// # Errors
///
/// Returns [`PlannerError::Io`] on read failure and
/// [`PlannerError::Malformed`] when the document does not match the row
/// shape.
pub fn load_labels(path: &Path) -> PlannerResult<LabelOverlayClassifier> {
    let reader = BufReader::new(File::open(path)?);
    let rows: Vec<LabelRow> =
        serde_json::from_reader(reader).map_err(|e| PlannerError::malformed("labels", e))?;
    let labels: HashMap<u64, FoodCategory> =
        rows.into_iter().map(|r| (r.food_id, r.category)).collect();
    info!(labels = labels.len(), path = %path.display(), "label overlay loaded");
    Ok(LabelOverlayClassifier::new(labels))
}
