// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The lifecycle facade (§4.3): the public API of a container, and the
//! concurrency layer (§5) that serializes access to it.
//!
//! [`ContainerHandle`] is the single entry point external producers — the
//! allocator, the node heartbeat handler, the allocation expirer, the
//! application attempt — use to drive or observe a container. It owns one
//! `parking_lot::RwLock<Container>` per container (§5, "one read/write lock
//! per container") and is itself cheap to clone: cloning shares the same
//! lock and the same underlying record, the way `Arc<Mutex<_>>` handles are
//! shared elsewhere in this codebase.
//!
//! [`ContainerHandle::handle`] takes the write lock for the entire
//! transition, including outbound event emission, so that (1) all
//! transitions of a single container are totally ordered and (2) a
//! collaborator that posts back into this container during its own
//! notification observes the state the transition just reached (§5,
//! Ordering). Every read-only query takes the read lock. `add_preempted_resource`
//! and `add_resumed_resource` also take the write lock — the source system
//! took the read lock for these two calls, a concurrency bug this
//! reimplementation corrects (§5, §9).

use crate::clock::Clock;
use crate::collaborators::Collaborators;
use crate::config::SuspendResumeConfig;
use crate::container::{Container, ContainerInit, ContainerReport};
use crate::error::LifecycleError;
use crate::exit_status::ExitStatus;
use crate::fsm::{self, Event, State};
use crate::ids::{AppAttemptId, ContainerId};
use crate::node::NodeId;
use crate::priority::Priority;
use crate::resource::Resource;
use parking_lot::RwLock;
use std::sync::Arc;

/// Everything needed to allocate a new container: identity, initial
/// resources, collaborators, and the clock the handle will stamp
/// transitions with.
pub struct ContainerHandleInit {
    pub container_id: ContainerId,
    pub app_attempt_id: AppAttemptId,
    pub node_id: NodeId,
    pub user: String,
    pub allocated_resource: Resource,
    pub resource_requests: Option<Vec<Resource>>,
    pub is_am_container: bool,
    pub preemption_priority: Priority,
    pub config: SuspendResumeConfig,
    pub collaborators: Collaborators,
}

/// A thread-safe, cloneable reference to one container's lifecycle state.
///
/// Generic over `C: Clock` rather than always the system clock so that
/// tests can drive it with [`crate::clock::FakeClock`] — the same pattern
/// this crate already uses for time in its other modules.
#[derive(Clone)]
pub struct ContainerHandle<C: Clock> {
    inner: Arc<RwLock<Container>>,
    clock: C,
}

impl<C: Clock> ContainerHandle<C> {
    /// Allocates a new container in state `NEW` at the current clock time.
    pub fn new(init: ContainerHandleInit, clock: C) -> Self {
        let now_ms = clock.epoch_ms();
        let container = Container::new(
            ContainerInit {
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
            now_ms,
        );
        Self { inner: Arc::new(RwLock::new(container)), clock }
    }

    pub fn container_id(&self) -> ContainerId {
        self.inner.read().container_id()
    }

    /// §4.3 `handle(event)`: the single entry point for driving the FSM.
    ///
    /// Takes the write lock for the full transition. Looks up `(state,
    /// event.kind())` in the process-global table (§5, "Shared state"); an
    /// undefined pair logs [`LifecycleError::InvalidTransition`] at ERROR
    /// and leaves the state untouched (§7) rather than propagating an error
    /// to the caller — `handle` never throws outward.
    pub fn handle(&self, event: Event) {
        let mut container = self.inner.write();
        let state = container.state;
        match fsm::lookup(state, &event) {
            Some(handler) => {
                container.now_ms = self.clock.epoch_ms();
                let next = handler(&mut container, &event);
                container.state = next;
            }
            None => {
                LifecycleError::InvalidTransition { state, event }.log(container.container_id().as_str());
            }
        }
    }

    /// Routes a `RESOURCE_UPDATE` event directly to
    /// [`crate::handlers::resource_updated`] rather than through the
    /// transition table, since it never changes `state` (§4.1, §6).
    pub fn update_resource(&self, resource: Resource) {
        let mut container = self.inner.write();
        crate::handlers::resource_updated(&mut container, resource);
    }

    pub fn state(&self) -> State {
        self.inner.read().state()
    }

    pub fn finish_time_ms(&self) -> Option<u64> {
        self.inner.read().finish_time_ms
    }

    pub fn diagnostics_info(&self) -> String {
        self.inner.read().diagnostics_info.clone()
    }

    pub fn log_url(&self) -> Option<String> {
        self.inner.read().log_url.clone()
    }

    pub fn exit_status(&self) -> ExitStatus {
        self.inner.read().finished_status
    }

    pub fn is_am_container(&self) -> bool {
        self.inner.read().is_am_container
    }

    pub fn resource_requests(&self) -> Option<Vec<Resource>> {
        self.inner.read().resource_requests.clone()
    }

    pub fn allocated_resource(&self) -> Resource {
        self.inner.read().allocated_resource
    }

    pub fn preempted(&self) -> Resource {
        self.inner.read().preempted
    }

    /// §4.3 `getCurrentUsedResource()`.
    pub fn current_used_resource(&self) -> Resource {
        self.inner.read().current_used_resource()
    }

    pub fn is_suspending(&self) -> bool {
        self.inner.read().is_suspending()
    }

    pub fn preemption_priority(&self) -> Priority {
        self.inner.read().preemption_priority()
    }

    /// §4.3 `getSRResourceUnit()`.
    pub fn sr_resource_unit(&self) -> Resource {
        self.inner.read().sr_resource_unit()
    }

    /// §4.3 `addPreemptedResource(r)`. Takes the **write** lock (§5, §9 —
    /// corrected from the source system's read-lock bug).
    pub fn add_preempted_resource(&self, r: Resource) {
        self.inner.write().add_preempted_resource(r);
    }

    /// §4.3 `addResumedResource(r)`. Takes the **write** lock, same
    /// correction as [`Self::add_preempted_resource`].
    pub fn add_resumed_resource(&self, r: Resource) {
        self.inner.write().add_resumed_resource(r);
    }

    /// Ambient supplement (§4.3): appends a diagnostic line under the write
    /// lock, for external actors (e.g. the node heartbeat handler) that
    /// need to attach context without going through the FSM.
    pub fn append_diagnostics(&self, msg: impl Into<String>) {
        self.inner.write().append_diagnostics(msg);
    }

    /// Ambient supplement (§4.3): write-once `logURL` setter.
    pub fn set_log_url(&self, url: impl Into<String>) {
        self.inner.write().set_log_url(url);
    }

    /// Ambient supplement (§4.3): increments `resumeOpportunity` under the
    /// write lock.
    pub fn record_resume_opportunity(&self) {
        self.inner.write().record_resume_opportunity();
    }

    /// §4.3 `createContainerReport()`: a consistent snapshot taken under
    /// the read lock in one shot.
    pub fn create_container_report(&self) -> ContainerReport {
        self.inner.read().report()
    }
}

#[cfg(test)]
#[path = "facade_tests.rs"]
mod tests;
