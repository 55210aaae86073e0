// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator interfaces (§4.4).
//!
//! A container never owns the subsystems it reports to — it borrows them,
//! as `Arc<dyn Trait>` trait objects bundled into [`Collaborators`] and
//! handed to [`crate::container::Container::new`] at construction (§9,
//! "Cyclic references"). Every method here returns `()`: calls into these
//! collaborators are fire-and-forget per §7 ("Collaborator failures") — an
//! implementation that can fail must catch and log internally, since a
//! failure must never roll back an FSM transition.
//!
//! None of these traits are `async`: §5 requires that outbound events are
//! emitted *before* the write lock guarding a transition is released, and
//! that no operation inside the critical section suspends other than by
//! lock contention. A blocking or slow collaborator implementation must do
//! its own buffering (e.g. an internal channel) rather than making `handle`
//! synchronously wait on I/O.

use crate::ids::{AppAttemptId, ContainerId};
use crate::resource::Resource;
use std::fmt::Debug;

/// Accepts the four outbound event types described in §4.4.
pub trait EventSink: Debug + Send + Sync {
    fn handle(&self, event: crate::events::OutboundEvent);
}

/// Starts and cancels the allocation timeout for a container between
/// ALLOCATED and ACQUIRED/LAUNCHED.
pub trait AllocationExpirer: Debug + Send + Sync {
    fn register(&self, container_id: ContainerId);
    fn unregister(&self, container_id: ContainerId);
}

/// Durable history sink. Out of scope to implement (§1); this crate only
/// specifies the calls made to it.
pub trait HistoryWriter: Debug + Send + Sync {
    fn container_started(&self, report: &crate::container::ContainerReport);
    fn container_finished(&self, report: &crate::container::ContainerReport);
}

/// Metrics publication sink. Out of scope to implement (§1).
pub trait MetricsPublisher: Debug + Send + Sync {
    fn container_created(&self, report: &crate::container::ContainerReport, at_ms: u64);
    fn container_finished(&self, report: &crate::container::ContainerReport, at_ms: u64);
}

/// Per-application-attempt metrics, reached via [`AppRegistry`] the way the
/// source system chains `getApp(appId).getCurrentAppAttempt().getMetrics()`.
pub trait AttemptMetrics: Debug + Send + Sync {
    fn update_preemption_info(&self, preempted: Resource, container_id: ContainerId);
    fn update_aggregate_app_resource_usage(&self, memory_seconds: f64, vcore_seconds: f64);
}

/// Resolves an application attempt's metrics sink. A container looks this
/// up by id rather than holding a direct reference, so the registry (not
/// the container) owns the attempt graph.
pub trait AppRegistry: Debug + Send + Sync {
    fn attempt_metrics(&self, app_attempt_id: &AppAttemptId) -> Option<std::sync::Arc<dyn AttemptMetrics>>;
}

/// The bundle of collaborators a container borrows at construction.
///
/// Cloning a `Collaborators` bundle is cheap (each field is an `Arc`) and
/// is how multiple containers share the same event sink, expirer, history
/// writer, metrics publisher, and app registry without the container
/// owning any of them.
#[derive(Clone, Debug)]
pub struct Collaborators {
    pub event_sink: std::sync::Arc<dyn EventSink>,
    pub expirer: std::sync::Arc<dyn AllocationExpirer>,
    pub history: std::sync::Arc<dyn HistoryWriter>,
    pub metrics: std::sync::Arc<dyn MetricsPublisher>,
    pub app_registry: std::sync::Arc<dyn AppRegistry>,
}

#[cfg(test)]
#[path = "collaborators_tests.rs"]
mod tests;
