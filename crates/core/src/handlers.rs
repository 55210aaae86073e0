// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transition handlers (§4.2) — one function per arc (or small family of
//! arcs) in the table built by [`crate::fsm::build_table`]. Each handler
//! mutates the [`Container`] passed to it and returns the state actually
//! reached; [`crate::facade::ContainerHandle::handle`] is the only caller
//! and is responsible for stamping `now_ms` beforehand and writing the
//! returned state back onto the record.
//!
//! `resource_updated` is the one function here that is *not* in the
//! table — `RESOURCE_UPDATE` never changes `state`, so the facade calls it
//! directly (§4.1).

use crate::container::Container;
use crate::events::OutboundEvent;
use crate::exit_status::ExitStatus;
use crate::fsm::{Event, EventKind, RecoveredStatus, State};
use crate::resource::Resource;

/// Runs the shared "reached a terminal state" bookkeeping (§4.2,
/// `Finished`): finish-time/status/utilization on the container, then the
/// attempt-metrics and `AttemptContainerFinished` notifications every
/// terminal path owes the rest of the system.
fn finish_and_notify(container: &mut Container, status: ExitStatus) {
    if !container.apply_finish(status) {
        return;
    }
    let (memory_seconds, vcore_seconds) = container.resource_seconds();
    if let Some(metrics) = container.collaborators.app_registry.attempt_metrics(&container.app_attempt_id)
    {
        if status.is_preempted() {
            metrics.update_preemption_info(container.allocated_resource, container.container_id);
        }
        metrics.update_aggregate_app_resource_usage(memory_seconds, vcore_seconds);
    }
    container.collaborators.event_sink.handle(OutboundEvent::AttemptContainerFinished {
        app_attempt_id: container.app_attempt_id,
        status,
        node_id: container.node_id,
    });
    let report = container.report();
    container.collaborators.history.container_finished(&report);
    container.collaborators.metrics.container_finished(&report, container.now_ms);
}

/// Maps the event that drove a `Finished`/`Kill`-family handler to the
/// terminal state it lands in — the same handler function serves several
/// table rows that differ only in which terminal state the event names
/// (§4.1: `ALLOCATED --EXPIRE--> EXPIRED`, `ALLOCATED --KILL--> KILLED`, …).
fn terminal_state_for(event: &Event) -> State {
    match event.kind() {
        EventKind::Finished => State::Completed,
        EventKind::Expire => State::Expired,
        EventKind::Released => State::Released,
        EventKind::Kill => State::Killed,
        other => unreachable!("terminal_state_for called with non-terminal event kind {other:?}"),
    }
}

/// §4.2 names this handler `ContainerStarted`, and the collaborator list
/// (§4.4) names `HistoryWriter::container_started` /
/// `MetricsPublisher::container_created` without pinning them to a
/// specific arc — this is the one point in the table whose handler name
/// matches those collaborator method names, so this is where they fire.
pub(crate) fn container_started(container: &mut Container, _event: &Event) -> State {
    container
        .collaborators
        .event_sink
        .handle(OutboundEvent::AttemptContainerAllocated { app_attempt_id: container.app_attempt_id });
    let report = container.report();
    container.collaborators.history.container_started(&report);
    container.collaborators.metrics.container_created(&report, container.now_ms);
    State::Allocated
}

pub(crate) fn container_reserved(container: &mut Container, event: &Event) -> State {
    if let Event::Reserved { resource, node, priority } = event {
        container.reserved_resource = Some(*resource);
        container.reserved_node = Some(*node);
        container.reserved_priority = Some(*priority);
    }
    State::Reserved
}

/// NEW/RESERVED `--KILL-->` KILLED with no handler in §4.1 ("—"): the
/// container never started, so there is nothing to unregister or notify —
/// but `finishTime` is still set exactly once (§3 invariant, §8 property 4
/// applies to every terminal entry, not just the ones with a named
/// handler).
pub(crate) fn to_killed_directly(container: &mut Container, _event: &Event) -> State {
    container.apply_finish(ExitStatus::ABORTED);
    State::Killed
}

/// RESERVED `--RELEASED-->` RELEASED, same reasoning as [`to_killed_directly`].
pub(crate) fn to_released_directly(container: &mut Container, _event: &Event) -> State {
    container.apply_finish(ExitStatus::ABORTED);
    State::Released
}

pub(crate) fn acquired(container: &mut Container, _event: &Event) -> State {
    container.resource_requests = None;
    container.collaborators.expirer.register(container.container_id);
    container.collaborators.event_sink.handle(OutboundEvent::AppRunningOnNode {
        app_attempt_id: container.app_attempt_id,
        node_id: container.node_id,
    });
    State::Acquired
}

pub(crate) fn launched(container: &mut Container, _event: &Event) -> State {
    container.collaborators.expirer.unregister(container.container_id);
    State::Running
}

pub(crate) fn container_suspend(container: &mut Container, event: &Event) -> State {
    container.suspend_times_ms.push(container.now_ms);
    if let Event::Suspend { status } = event {
        container.finished_status = *status;
        container.append_diagnostics(format!("suspended with exit status {status}"));
        if status.is_preempted() {
            if let Some(metrics) =
                container.collaborators.app_registry.attempt_metrics(&container.app_attempt_id)
            {
                metrics.update_preemption_info(container.last_preempted, container.container_id);
            }
        }
    }
    State::Dehydrated
}

/// The actual shrinking of `preempted` happens in the external
/// `addResumedResource` call before this fires (§4.1); this handler only
/// decides the target state from the resulting balance.
pub(crate) fn container_resume(container: &mut Container, _event: &Event) -> State {
    container.resume_times_ms.push(container.now_ms);
    if container.preempted.is_zero() {
        State::Running
    } else {
        State::Dehydrated
    }
}

pub(crate) fn finished(container: &mut Container, event: &Event) -> State {
    let status = match event {
        Event::Finished { status } => *status,
        _ => container.finished_status,
    };
    finish_and_notify(container, status);
    terminal_state_for(event)
}

pub(crate) fn finished_at_acquired(container: &mut Container, event: &Event) -> State {
    container.collaborators.expirer.unregister(container.container_id);
    finished(container, event)
}

pub(crate) fn kill(container: &mut Container, event: &Event) -> State {
    container.collaborators.expirer.unregister(container.container_id);
    container.collaborators.event_sink.handle(OutboundEvent::NodeCleanContainer {
        node_id: container.node_id,
        container_id: container.container_id,
    });
    let status = match event {
        Event::Finished { status } => *status,
        _ => ExitStatus::ABORTED,
    };
    finish_and_notify(container, status);
    terminal_state_for(event)
}

/// Terminal self-loops and RUNNING/DEHYDRATED `EXPIRE` (§4.2 edge case:
/// "an expiring container that already launched must be killed via KILL,
/// not EXPIRE") — absorbed with no side effect.
pub(crate) fn ignored(container: &mut Container, _event: &Event) -> State {
    container.state
}

pub(crate) fn container_recovered(container: &mut Container, event: &Event) -> State {
    let Event::Recover { carried } = event else { return container.state };
    match carried {
        RecoveredStatus::Complete => {
            finish_and_notify(container, container.finished_status);
            State::Completed
        }
        RecoveredStatus::Running => {
            emit_running_on_node(container);
            State::Running
        }
        RecoveredStatus::Other(raw) => {
            crate::error::LifecycleError::RecoverUnexpectedState { carried: raw.clone() }
                .log(container.container_id.as_str());
            emit_running_on_node(container);
            State::Running
        }
    }
}

fn emit_running_on_node(container: &Container) {
    container.collaborators.event_sink.handle(OutboundEvent::AppRunningOnNode {
        app_attempt_id: container.app_attempt_id,
        node_id: container.node_id,
    });
}

/// Ambient supplement (§4.1, §4.2): overwrites `allocatedResource` without
/// touching `state`. Routed directly by the facade rather than through the
/// transition table, logged at DEBUG rather than via a collaborator event.
pub(crate) fn resource_updated(container: &mut Container, resource: Resource) {
    tracing::debug!(
        container_id = %container.container_id,
        old = %container.allocated_resource,
        new = %resource,
        "allocated resource updated"
    );
    container.allocated_resource = resource;
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
