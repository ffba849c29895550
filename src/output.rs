// ABOUTME: Output boundary - plan entry and daily totals tables as JSON files
// ABOUTME: Plan rows ordered day ascending, then breakfast/lunch/dinner/dessert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

//! Output Boundary
//!
//! Persists the two tabular artifacts of a planning run. The plan table is
//! written in its canonical order (day ascending, then fixed slot order);
//! the totals table one row per day.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use ahara_core::models::{PlanEntry, WeeklyPlan};
use ahara_core::{PlannerError, PlannerResult};

/// Write the plan entry table to a JSON file
///
/// # Errors
///
/// Returns [`PlannerError::Io`] / [`PlannerError::Malformed`] on write or
/// serialization failure.
pub fn write_plan(plan: &WeeklyPlan, path: &Path) -> PlannerResult<()> {
    let mut entries: Vec<PlanEntry> = plan.entries.clone();
    entries.sort_by_key(|e| (e.day, e.meal));

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &entries)
        .map_err(|e| PlannerError::malformed("plan table", e))?;
    info!(rows = entries.len(), path = %path.display(), "plan table written");
    Ok(())
}

/// Write the daily totals table to a JSON file
///
/// # Errors
///
/// Returns [`PlannerError::Io`] / [`PlannerError::Malformed`] on write or
/// serialization failure.
pub fn write_totals(plan: &WeeklyPlan, path: &Path) -> PlannerResult<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &plan.daily_totals)
        .map_err(|e| PlannerError::malformed("totals table", e))?;
    info!(rows = plan.daily_totals.len(), path = %path.display(), "totals table written");
    Ok(())
}
