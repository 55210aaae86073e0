// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit status codes carried by FINISHED/SUSPEND events.
//!
//! Only one value is special-cased by the handlers in [`crate::handlers`]:
//! [`ExitStatus::PREEMPTED`]. Everything else flows through as an ordinary
//! finish.

use serde::{Deserialize, Serialize};

/// Integer exit code, as reported by the node manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitStatus(pub i32);

impl ExitStatus {
    /// Container was preempted rather than finishing or being killed for
    /// cause. Triggers `AttemptMetrics::update_preemption_info`.
    pub const PREEMPTED: ExitStatus = ExitStatus(-102);
    /// Ordinary successful completion.
    pub const SUCCESS: ExitStatus = ExitStatus(0);
    /// Killed by the resource manager (e.g. via an explicit KILL event).
    pub const ABORTED: ExitStatus = ExitStatus(-100);
    /// No exit status has been recorded yet.
    pub const INVALID: ExitStatus = ExitStatus(-1000);

    pub fn is_preempted(&self) -> bool {
        *self == Self::PREEMPTED
    }
}

impl Default for ExitStatus {
    fn default() -> Self {
        Self::INVALID
    }
}

impl std::fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "exit_status_tests.rs"]
mod tests;
