// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Preemption priority: lower means more preemptable.
//!
//! The source system's `setPreemptionPriority` takes a float but
//! `getPreemptionPriority` returns an int, and its equality check compares
//! one container's `getPreemptionPriority()` against a *different*
//! accessor (`getPriority()`) on a sibling type. Both are reproduced here
//! as a single type with two named accessors instead: [`Priority::as_float`]
//! returns the value exactly as set, [`Priority::floor`] returns the
//! truncated integer, and equality/ordering always compare the same stored
//! value on the same type.

use serde::{Deserialize, Serialize};

/// Numeric preemption priority. Lower values are more preemptable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Priority(f64);

impl Priority {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The value exactly as set.
    pub fn as_float(&self) -> f64 {
        self.0
    }

    /// Truncated integer form, matching the source's `getPreemptionPriority`
    /// return type. Named `floor` rather than the source's ambiguous
    /// `getPreemptionPriority` to surface the truncation in the API.
    pub fn floor(&self) -> i32 {
        self.0 as i32
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self(0.0)
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "priority_tests.rs"]
mod tests;
