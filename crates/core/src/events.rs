// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound events dispatched to the [`crate::collaborators::EventSink`]
//! during a transition (§4.4).
//!
//! These are distinct from [`crate::fsm::Event`] (the *inbound* events that
//! drive the state machine): an `OutboundEvent` is something this crate
//! tells the rest of the system, not something it reacts to.

use crate::exit_status::ExitStatus;
use crate::ids::{AppAttemptId, ContainerId};
use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// Events posted to the global event dispatcher (out of scope — see crate
/// docs) during a transition. Serializes with a `{"type": "..."}` tag,
/// matching the convention used for this crate's sibling event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutboundEvent {
    /// The application attempt has been allocated a container (ContainerStarted, §4.2).
    #[serde(rename = "attempt:container_allocated")]
    AttemptContainerAllocated { app_attempt_id: AppAttemptId },

    /// A container reached a terminal state (Finished, §4.2).
    #[serde(rename = "attempt:container_finished")]
    AttemptContainerFinished {
        app_attempt_id: AppAttemptId,
        status: ExitStatus,
        node_id: NodeId,
    },

    /// A container is now running (or recovered as running) on a node
    /// (Acquired / ContainerRecovered, §4.2).
    #[serde(rename = "app:running_on_node")]
    AppRunningOnNode { app_attempt_id: AppAttemptId, node_id: NodeId },

    /// Ask the node to clean up a container it no longer needs to track (Kill, §4.2).
    #[serde(rename = "node:clean_container")]
    NodeCleanContainer { node_id: NodeId, container_id: ContainerId },
}

impl OutboundEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OutboundEvent::AttemptContainerAllocated { .. } => "attempt:container_allocated",
            OutboundEvent::AttemptContainerFinished { .. } => "attempt:container_finished",
            OutboundEvent::AppRunningOnNode { .. } => "app:running_on_node",
            OutboundEvent::NodeCleanContainer { .. } => "node:clean_container",
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
