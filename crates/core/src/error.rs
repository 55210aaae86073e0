// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for the container lifecycle FSM.
//!
//! `LifecycleError` is never propagated out of [`crate::facade::ContainerHandle::handle`] —
//! it is logged and absorbed, per the source system's fire-and-forget event
//! handling contract. The type exists so that the taxonomy is nameable and
//! testable (see `error_tests.rs`) rather than expressed only as ad hoc log
//! lines.

use crate::fsm::{Event, State};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifecycleError {
    /// `event` has no transition defined for `state` in the table (§4.1).
    #[error("invalid transition: event {event:?} is not defined for state {state:?}")]
    InvalidTransition { state: State, event: Event },

    /// RECOVER carried a container-status that is neither RUNNING nor
    /// COMPLETE. The caller still gets a target state (defaults to
    /// RUNNING); this variant only documents why.
    #[error("recover carried unexpected state {carried:?}, defaulting to RUNNING")]
    RecoverUnexpectedState { carried: String },
}

impl LifecycleError {
    /// Convenience used by the facade to route through `tracing` at the
    /// level dictated by §7 without callers needing to match the variant.
    pub fn log(&self, container_id: &str) {
        match self {
            LifecycleError::InvalidTransition { state, event } => {
                tracing::error!(
                    container_id,
                    ?state,
                    ?event,
                    "invalid transition: event not defined for current state"
                );
            }
            LifecycleError::RecoverUnexpectedState { carried } => {
                tracing::warn!(
                    container_id,
                    carried,
                    "recover carried unexpected state, defaulting to RUNNING"
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
