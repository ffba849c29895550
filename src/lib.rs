// ABOUTME: Ahara planner - boundary I/O around the meal planning engine
// ABOUTME: Catalog/profile/label loading and plan table persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

#![deny(unsafe_code)]

//! # Ahara Planner
//!
//! Top-level crate tying the workspace together: loads the food catalog,
//! person profile, and optional classifier labels from JSON documents,
//! runs the [`ahara_intelligence`] pipeline, and persists the two output
//! tables (plan entries and daily totals).
//!
//! The engine itself lives in [`ahara_intelligence`]; shared models and
//! errors in [`ahara_core`].

/// Catalog, profile, and label-overlay loading
pub mod catalog;

/// Plan and totals table persistence
pub mod output;

pub use ahara_core;
pub use ahara_intelligence;
