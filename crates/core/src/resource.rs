// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource accounting: memory + vCores, with saturating arithmetic.
//!
//! Stands in for the protobuf-serialized `Resource` record the scheduler
//! passes across the wire — out of scope here (see crate docs), but the
//! shape below is what every transition handler actually needs: addition on
//! allocation, saturating subtraction on resume, and component-wise
//! comparison for the `preempted <= allocated` invariant.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Memory (in MB) and virtual cores promised to, or withheld from, a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resource {
    pub memory_mb: i64,
    pub vcores: i32,
}

impl Resource {
    pub const ZERO: Resource = Resource { memory_mb: 0, vcores: 0 };

    pub fn new(memory_mb: i64, vcores: i32) -> Self {
        Self { memory_mb, vcores }
    }

    pub fn is_zero(&self) -> bool {
        self.memory_mb == 0 && self.vcores == 0
    }

    /// Component-wise `<=`.
    pub fn le(&self, other: &Resource) -> bool {
        self.memory_mb <= other.memory_mb && self.vcores <= other.vcores
    }

    /// Saturating subtraction, clamped to zero per component.
    pub fn saturating_sub(&self, other: &Resource) -> Resource {
        Resource {
            memory_mb: (self.memory_mb - other.memory_mb).max(0),
            vcores: (self.vcores - other.vcores).max(0),
        }
    }

    /// Scale both components by an integer factor (used for the
    /// suspend-resume unit: `(memory, vcores) * pr_number`).
    pub fn scaled(&self, factor: u32) -> Resource {
        Resource { memory_mb: self.memory_mb * factor as i64, vcores: self.vcores * factor as i32 }
    }
}

impl Add for Resource {
    type Output = Resource;

    fn add(self, rhs: Resource) -> Resource {
        Resource { memory_mb: self.memory_mb + rhs.memory_mb, vcores: self.vcores + rhs.vcores }
    }
}

impl Sub for Resource {
    type Output = Resource;

    /// Plain (non-saturating) subtraction. Callers that must not go negative
    /// should use [`Resource::saturating_sub`] instead.
    fn sub(self, rhs: Resource) -> Resource {
        Resource { memory_mb: self.memory_mb - rhs.memory_mb, vcores: self.vcores - rhs.vcores }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<memory:{}, vCores:{}>", self.memory_mb, self.vcores)
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
