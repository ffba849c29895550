// ABOUTME: Unified error types for planning runs and dessert classification
// ABOUTME: PlannerError aborts a run; ClassifierError degrades to a safe default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Labs

//! # Error Types
//!
//! Two error families with different propagation policies:
//! - `PlannerError` - hard failures that terminate a planning run. The only
//!   variant raised by the core pipeline itself is `EmptyCatalog`; the I/O
//!   variants originate at the input/output boundary.
//! - `ClassifierError` - per-food classification failures. Callers degrade
//!   these to a `NonDessert` default and continue, so a single flaky
//!   classification never aborts a run.

/// Convenience alias used throughout the workspace
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Errors that terminate a planning run
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// The catalog holds no foods for the requested cuisine; no partial
    /// plan is produced.
    #[error("no foods available for the requested cuisine '{cuisine}'")]
    EmptyCatalog {
        /// Cuisine the catalog was filtered to
        cuisine: String,
    },

    /// A boundary file could not be read or written
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// A boundary document did not match the expected shape
    #[error("malformed {context} document: {source}")]
    Malformed {
        /// Which document failed to parse (catalog, profile, labels)
        context: &'static str,
        /// Underlying serde failure
        #[source]
        source: serde_json::Error,
    },
}

impl PlannerError {
    /// Create an empty-catalog error for the given cuisine
    #[must_use]
    pub fn empty_catalog(cuisine: impl Into<String>) -> Self {
        Self::EmptyCatalog {
            cuisine: cuisine.into(),
        }
    }

    /// Wrap a serde failure with the document it came from
    #[must_use]
    pub const fn malformed(context: &'static str, source: serde_json::Error) -> Self {
        Self::Malformed { context, source }
    }
}

/// Per-food classification failures; recoverable by design
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassifierError {
    /// The label overlay has no entry for this food
    #[error("no label available for food {food_id}")]
    MissingLabel {
        /// Catalog id of the unlabeled food
        food_id: u64,
    },

    /// The classifier backend failed for this food
    #[error("classification failed: {reason}")]
    Failed {
        /// Backend-supplied failure detail
        reason: String,
    },
}
