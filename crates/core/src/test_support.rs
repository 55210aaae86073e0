// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers: fake collaborators and container builders.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`, mirroring
//! how the rest of this codebase shares test tooling across crates.

use crate::clock::FakeClock;
use crate::collaborators::{
    AllocationExpirer, AppRegistry, AttemptMetrics, Collaborators, EventSink, HistoryWriter,
    MetricsPublisher,
};
use crate::config::SuspendResumeConfig;
use crate::container::{Container, ContainerInit, ContainerReport};
use crate::events::OutboundEvent;
use crate::facade::{ContainerHandle, ContainerHandleInit};
use crate::ids::{AppAttemptId, ContainerId};
use crate::node::NodeId;
use crate::priority::Priority;
use crate::resource::Resource;
use parking_lot::Mutex;
use std::sync::Arc;

/// Records every outbound event handed to it, in order.
#[derive(Debug, Default)]
pub struct FakeEventSink {
    pub events: Mutex<Vec<OutboundEvent>>,
}

impl EventSink for FakeEventSink {
    fn handle(&self, event: OutboundEvent) {
        self.events.lock().push(event);
    }
}

/// Records register/unregister calls, in order, by container id.
#[derive(Debug, Default)]
pub struct FakeAllocationExpirer {
    pub registered: Mutex<Vec<ContainerId>>,
    pub unregistered: Mutex<Vec<ContainerId>>,
}

impl AllocationExpirer for FakeAllocationExpirer {
    fn register(&self, container_id: ContainerId) {
        self.registered.lock().push(container_id);
    }

    fn unregister(&self, container_id: ContainerId) {
        self.unregistered.lock().push(container_id);
    }
}

impl FakeAllocationExpirer {
    /// True once a container has been registered and then unregistered
    /// with no further registration outstanding.
    pub fn is_clean(&self, container_id: ContainerId) -> bool {
        let registered = self.registered.lock().iter().filter(|id| **id == container_id).count();
        let unregistered =
            self.unregistered.lock().iter().filter(|id| **id == container_id).count();
        registered > 0 && registered == unregistered
    }
}

#[derive(Debug, Default)]
pub struct FakeHistoryWriter {
    pub started: Mutex<Vec<ContainerReport>>,
    pub finished: Mutex<Vec<ContainerReport>>,
}

impl HistoryWriter for FakeHistoryWriter {
    fn container_started(&self, report: &ContainerReport) {
        self.started.lock().push(report.clone());
    }

    fn container_finished(&self, report: &ContainerReport) {
        self.finished.lock().push(report.clone());
    }
}

#[derive(Debug, Default)]
pub struct FakeMetricsPublisher {
    pub created: Mutex<Vec<(ContainerReport, u64)>>,
    pub finished: Mutex<Vec<(ContainerReport, u64)>>,
}

impl MetricsPublisher for FakeMetricsPublisher {
    fn container_created(&self, report: &ContainerReport, at_ms: u64) {
        self.created.lock().push((report.clone(), at_ms));
    }

    fn container_finished(&self, report: &ContainerReport, at_ms: u64) {
        self.finished.lock().push((report.clone(), at_ms));
    }
}

/// Records preemption and aggregate-usage updates for a single attempt.
#[derive(Debug, Default)]
pub struct FakeAttemptMetrics {
    pub preemption_updates: Mutex<Vec<(Resource, ContainerId)>>,
    pub aggregate_updates: Mutex<Vec<(f64, f64)>>,
}

impl AttemptMetrics for FakeAttemptMetrics {
    fn update_preemption_info(&self, preempted: Resource, container_id: ContainerId) {
        self.preemption_updates.lock().push((preempted, container_id));
    }

    fn update_aggregate_app_resource_usage(&self, memory_seconds: f64, vcore_seconds: f64) {
        self.aggregate_updates.lock().push((memory_seconds, vcore_seconds));
    }
}

/// Always resolves every attempt id to the same shared [`FakeAttemptMetrics`].
#[derive(Debug)]
pub struct FakeAppRegistry {
    pub metrics: Arc<FakeAttemptMetrics>,
}

impl Default for FakeAppRegistry {
    fn default() -> Self {
        Self { metrics: Arc::new(FakeAttemptMetrics::default()) }
    }
}

impl AppRegistry for FakeAppRegistry {
    fn attempt_metrics(&self, _app_attempt_id: &AppAttemptId) -> Option<Arc<dyn AttemptMetrics>> {
        Some(self.metrics.clone() as Arc<dyn AttemptMetrics>)
    }
}

/// A bundle of fake collaborators plus handles to inspect what they recorded.
pub struct FakeCollaborators {
    pub collaborators: Collaborators,
    pub event_sink: Arc<FakeEventSink>,
    pub expirer: Arc<FakeAllocationExpirer>,
    pub history: Arc<FakeHistoryWriter>,
    pub metrics: Arc<FakeMetricsPublisher>,
    pub app_registry: Arc<FakeAppRegistry>,
}

pub fn fake_collaborators() -> FakeCollaborators {
    let event_sink = Arc::new(FakeEventSink::default());
    let expirer = Arc::new(FakeAllocationExpirer::default());
    let history = Arc::new(FakeHistoryWriter::default());
    let metrics = Arc::new(FakeMetricsPublisher::default());
    let app_registry = Arc::new(FakeAppRegistry::default());
    let collaborators = Collaborators {
        event_sink: event_sink.clone(),
        expirer: expirer.clone(),
        history: history.clone(),
        metrics: metrics.clone(),
        app_registry: app_registry.clone(),
    };
    FakeCollaborators { collaborators, event_sink, expirer, history, metrics, app_registry }
}

/// A `ContainerInit` with sensible defaults for tests: 1024MB/1vcore,
/// default `SuspendResumeConfig`, no reservation or pending requests.
pub fn test_init(collaborators: Collaborators) -> ContainerInit {
    ContainerInit {
        container_id: ContainerId::new(),
        app_attempt_id: AppAttemptId::new(),
        node_id: NodeId::new(),
        user: "alice".to_string(),
        allocated_resource: Resource::new(1024, 1),
        resource_requests: Some(vec![Resource::new(1024, 1)]),
        is_am_container: false,
        preemption_priority: Priority::default(),
        config: SuspendResumeConfig::default(),
        collaborators,
    }
}

/// Builds a bare [`Container`] in state `NEW` at a fixed creation time,
/// backed by fresh fake collaborators.
pub fn test_container() -> (Container, FakeCollaborators) {
    let fakes = fake_collaborators();
    let container = Container::new(test_init(fakes.collaborators.clone()), 1_000_000);
    (container, fakes)
}

/// Builds a [`ContainerHandle`] backed by a [`FakeClock`] (set to the same
/// fixed epoch as [`test_container`]) and fresh fake collaborators, for
/// exercising the facade's locking discipline end to end. Returns the
/// [`FakeClock`] alongside the handle (cloning it is cheap and shares the
/// same underlying time) so tests can advance time between events.
pub fn test_handle() -> (ContainerHandle<FakeClock>, FakeClock, FakeCollaborators) {
    let fakes = fake_collaborators();
    let clock = FakeClock::new();
    clock.set_epoch_ms(1_000_000);
    let init = test_init(fakes.collaborators.clone());
    let handle = ContainerHandle::new(
        ContainerHandleInit {
            container_id: init.container_id,
            app_attempt_id: init.app_attempt_id,
            node_id: init.node_id,
            user: init.user,
            allocated_resource: init.allocated_resource,
            resource_requests: init.resource_requests,
            is_am_container: init.is_am_container,
            preemption_priority: init.preemption_priority,
            config: init.config,
            collaborators: init.collaborators,
        },
        clock.clone(),
    );
    (handle, clock, fakes)
}

#[cfg(test)]
#[path = "test_support_tests.rs"]
mod tests;
