// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! container-lifecycle-core: the per-container lifecycle state machine at
//! the heart of a cluster resource manager.
//!
//! For each allocated compute container, [`facade::ContainerHandle`] tracks
//! state transitions (reserved → allocated → acquired → running, and
//! through suspension/resumption for preemption, to a terminal state),
//! accounts for preempted and resumed resources, records timing, and
//! dispatches lifecycle events to collaborating subsystems (application
//! attempt, node, history writer, metrics publisher, allocation expirer).
//!
//! Start at [`facade::ContainerHandle`] for the public API; [`fsm`] and
//! [`handlers`] hold the state machine itself.

pub mod macros;

pub mod clock;
pub mod collaborators;
pub mod config;
pub mod container;
pub mod error;
pub mod events;
pub mod exit_status;
pub mod facade;
pub mod fsm;
pub mod handlers;
pub mod id;
pub mod ids;
pub mod node;
pub mod priority;
pub mod resource;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use collaborators::{
    AllocationExpirer, AppRegistry, AttemptMetrics, Collaborators, EventSink, HistoryWriter,
    MetricsPublisher,
};
pub use config::{SuspendResumeConfig, DEFAULT_PR_NUMBER};
pub use container::{Container, ContainerInit, ContainerReport};
pub use error::LifecycleError;
pub use events::OutboundEvent;
pub use exit_status::ExitStatus;
pub use facade::{ContainerHandle, ContainerHandleInit};
pub use fsm::{Event, EventKind, RecoveredStatus, State};
pub use id::{short, IdBuf};
pub use ids::{AppAttemptId, ApplicationId, ContainerId};
pub use node::NodeId;
pub use priority::Priority;
pub use resource::Resource;
