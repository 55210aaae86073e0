// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The container record (§3): identity plus the mutable accounting fields
//! every transition handler reads and writes.
//!
//! `Container` is deliberately *not* generic over a clock implementation.
//! [`crate::fsm::Handler`] is a plain `fn` pointer so the transition table
//! (§4.1) can stay a `'static` lookup rather than a trait-object dispatch —
//! that rules out storing `Arc<dyn Clock>` here, since [`crate::clock::Clock`]
//! requires `Clone` and is therefore not object-safe. Instead,
//! [`crate::facade::ContainerHandle`] (which *is* generic over its clock)
//! stamps [`Container::now_ms`] with the current time immediately before
//! invoking a handler; handlers read `now_ms` rather than a clock.
//!
//! The container owns no collaborators (§9, "Cyclic references") — it
//! borrows them through the [`crate::collaborators::Collaborators`] bundle
//! passed in at construction, exactly as an `Arc<dyn Trait>` field, never
//! as an owning reference back into a global context.

use crate::collaborators::Collaborators;
use crate::config::SuspendResumeConfig;
use crate::exit_status::ExitStatus;
use crate::fsm::State;
use crate::ids::{AppAttemptId, ContainerId};
use crate::node::NodeId;
use crate::priority::Priority;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};

/// Identity and initial values supplied when a container is allocated.
///
/// Everything else in [`Container`] starts at its §3 default (zero
/// resources, empty histories, `NEW` state) and is only ever touched by
/// the FSM from then on.
#[derive(Debug, Clone)]
pub struct ContainerInit {
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

/// An owned, `Clone`-able snapshot of a container's state, returned by
/// [`crate::facade::ContainerHandle::create_container_report`]. This is the
/// reimplementation's answer to `createContainerReport()` (§4.3) — every
/// field a caller might want, taken under the read lock in one shot so the
/// caller never sees a torn view of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerReport {
    pub container_id: ContainerId,
    pub app_attempt_id: AppAttemptId,
    pub node_id: NodeId,
    pub user: String,
    pub creation_time_ms: u64,
    pub state: State,
    pub allocated_resource: Resource,
    pub preempted: Resource,
    pub last_preempted: Resource,
    pub last_resumed: Resource,
    pub reserved_resource: Option<Resource>,
    pub reserved_node: Option<NodeId>,
    pub reserved_priority: Option<Priority>,
    pub suspend_times_ms: Vec<u64>,
    pub resume_times_ms: Vec<u64>,
    pub is_suspending: bool,
    pub resume_opportunity: u32,
    pub utilization: f64,
    pub finish_time_ms: Option<u64>,
    pub finished_status: ExitStatus,
    pub is_am_container: bool,
    pub resource_requests: Option<Vec<Resource>>,
    pub preemption_priority: Priority,
    pub diagnostics_info: String,
    pub log_url: Option<String>,
}

/// The mutable container record (§3).
#[derive(Debug, Clone)]
pub struct Container {
    // -- identity: immutable after construction --
    pub(crate) container_id: ContainerId,
    pub(crate) app_attempt_id: AppAttemptId,
    pub(crate) node_id: NodeId,
    pub(crate) user: String,
    pub(crate) creation_time_ms: u64,

    // -- FSM --
    pub(crate) state: State,

    // -- accounting --
    pub(crate) allocated_resource: Resource,
    pub(crate) preempted: Resource,
    pub(crate) last_preempted: Resource,
    pub(crate) last_resumed: Resource,
    pub(crate) reserved_resource: Option<Resource>,
    pub(crate) reserved_node: Option<NodeId>,
    pub(crate) reserved_priority: Option<Priority>,
    pub(crate) suspend_times_ms: Vec<u64>,
    pub(crate) resume_times_ms: Vec<u64>,
    pub(crate) resume_opportunity: u32,
    pub(crate) utilization: f64,
    pub(crate) finish_time_ms: Option<u64>,
    pub(crate) finished_status: ExitStatus,
    pub(crate) is_am_container: bool,
    pub(crate) resource_requests: Option<Vec<Resource>>,
    pub(crate) preemption_priority: Priority,
    pub(crate) diagnostics_info: String,
    pub(crate) log_url: Option<String>,

    // -- ambient --
    pub(crate) config: SuspendResumeConfig,
    pub(crate) collaborators: Collaborators,
    /// Scratch field: the wall-clock time of the transition currently in
    /// progress, stamped by [`crate::facade::ContainerHandle`] right before
    /// a handler runs. See the module docs for why this replaces a stored
    /// clock reference.
    pub(crate) now_ms: u64,
}

impl Container {
    pub fn new(init: ContainerInit, now_ms: u64) -> Self {
        Self {
            container_id: init.container_id,
            app_attempt_id: init.app_attempt_id,
            node_id: init.node_id,
            user: init.user,
            creation_time_ms: now_ms,
            state: State::New,
            allocated_resource: init.allocated_resource,
            preempted: Resource::ZERO,
            last_preempted: Resource::ZERO,
            last_resumed: Resource::ZERO,
            reserved_resource: None,
            reserved_node: None,
            reserved_priority: None,
            suspend_times_ms: Vec::new(),
            resume_times_ms: Vec::new(),
            resume_opportunity: 0,
            utilization: 1.0,
            finish_time_ms: None,
            finished_status: ExitStatus::INVALID,
            is_am_container: init.is_am_container,
            resource_requests: init.resource_requests,
            preemption_priority: init.preemption_priority,
            diagnostics_info: String::new(),
            log_url: None,
            config: init.config,
            collaborators: init.collaborators,
            now_ms,
        }
    }

    pub fn container_id(&self) -> ContainerId {
        self.container_id
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// §4.3: `allocated - preempted` while suspending, else `allocated`.
    pub fn current_used_resource(&self) -> Resource {
        if self.is_suspending() {
            self.allocated_resource.saturating_sub(&self.preempted)
        } else {
            self.allocated_resource
        }
    }

    /// `isSuspending ⇔ preempted != 0` (§3 invariant) — computed, not
    /// cached, so the invariant cannot drift out of sync with `preempted`.
    pub fn is_suspending(&self) -> bool {
        !self.preempted.is_zero()
    }

    /// §4.3 `getSRResourceUnit()`: a resource of `(memory, 1 vcore)`,
    /// scaled by the configured suspend/resume granularity.
    pub fn sr_resource_unit(&self) -> Resource {
        Resource::new(self.allocated_resource.memory_mb, 1).scaled(self.config.pr_number)
    }

    pub fn preemption_priority(&self) -> Priority {
        self.preemption_priority
    }

    /// §4.3 `addPreemptedResource(r)`.
    pub fn add_preempted_resource(&mut self, r: Resource) {
        self.last_preempted = r;
        self.preempted = self.preempted + r;
    }

    /// §4.3 `addResumedResource(r)`: component-wise, clamped at zero.
    pub fn add_resumed_resource(&mut self, r: Resource) {
        self.last_resumed = r;
        self.preempted = self.preempted.saturating_sub(&r);
    }

    /// Appends a diagnostic line rather than replacing `diagnosticsInfo`
    /// (§3: "appended to, not replaced").
    pub fn append_diagnostics(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        if self.diagnostics_info.is_empty() {
            self.diagnostics_info = msg;
        } else {
            self.diagnostics_info.push('\n');
            self.diagnostics_info.push_str(&msg);
        }
    }

    /// Write-once `logURL` (§3). A second call is a no-op logged at DEBUG,
    /// mirroring the write-once discipline already used for `finishTime`.
    pub fn set_log_url(&mut self, url: impl Into<String>) {
        if self.log_url.is_some() {
            tracing::debug!(container_id = %self.container_id, "log url already set, ignoring");
            return;
        }
        self.log_url = Some(url.into());
    }

    pub fn record_resume_opportunity(&mut self) {
        self.resume_opportunity += 1;
    }

    /// Applies the finish-time / status / utilization bookkeeping shared by
    /// every path into a terminal state (§4.2, `Finished`). Returns `false`
    /// (and does nothing else) if `finishTime` was already set — a
    /// defensive backstop for invariant 4 (§8) on top of the FSM structure,
    /// which should never call this twice for one container.
    pub(crate) fn apply_finish(&mut self, status: ExitStatus) -> bool {
        if self.finish_time_ms.is_some() {
            return false;
        }
        self.finish_time_ms = Some(self.now_ms);
        self.finished_status = status;
        self.append_diagnostics(format!("container finished with exit status {status}"));

        let lifetime_ms = self.now_ms.saturating_sub(self.creation_time_ms);
        if !self.suspend_times_ms.is_empty() && self.suspend_times_ms.len() == self.resume_times_ms.len() {
            if lifetime_ms > 0 {
                let suspended_ms: i64 = self
                    .resume_times_ms
                    .iter()
                    .zip(self.suspend_times_ms.iter())
                    .map(|(resume, suspend)| *resume as i64 - *suspend as i64)
                    .sum();
                self.utilization = (suspended_ms as f64 / lifetime_ms as f64).clamp(0.0, 1.0);
            } else {
                self.utilization = 1.0;
            }
        }
        true
    }

    /// `memorySeconds`/`vcoreSeconds` as computed by the `Finished` handler
    /// contract (§4.2): `component * utilization * lifetime_ms / 1000`.
    pub(crate) fn resource_seconds(&self) -> (f64, f64) {
        let lifetime_ms = self.now_ms.saturating_sub(self.creation_time_ms) as f64;
        let memory_seconds = self.allocated_resource.memory_mb as f64 * self.utilization * lifetime_ms / 1000.0;
        let vcore_seconds = self.allocated_resource.vcores as f64 * self.utilization * lifetime_ms / 1000.0;
        (memory_seconds, vcore_seconds)
    }

    pub fn report(&self) -> ContainerReport {
        ContainerReport {
            container_id: self.container_id,
            app_attempt_id: self.app_attempt_id,
            node_id: self.node_id,
            user: self.user.clone(),
            creation_time_ms: self.creation_time_ms,
            state: self.state,
            allocated_resource: self.allocated_resource,
            preempted: self.preempted,
            last_preempted: self.last_preempted,
            last_resumed: self.last_resumed,
            reserved_resource: self.reserved_resource,
            reserved_node: self.reserved_node,
            reserved_priority: self.reserved_priority,
            suspend_times_ms: self.suspend_times_ms.clone(),
            resume_times_ms: self.resume_times_ms.clone(),
            is_suspending: self.is_suspending(),
            resume_opportunity: self.resume_opportunity,
            utilization: self.utilization,
            finish_time_ms: self.finish_time_ms,
            finished_status: self.finished_status,
            is_am_container: self.is_am_container,
            resource_requests: self.resource_requests.clone(),
            preemption_priority: self.preemption_priority,
            diagnostics_info: self.diagnostics_info.clone(),
            log_url: self.log_url.clone(),
        }
    }
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;
