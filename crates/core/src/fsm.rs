// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The generic, table-driven state machine engine.
//!
//! The transition table (§4.1 of the design) is data, not a class
//! hierarchy: a process-global, immutable map from `(State, EventKind)` to
//! a [`Handler`] function pointer. `Handler` mutates the container record
//! and returns the state actually reached — which lets a single table
//! entry serve both fixed-target arcs (`RUNNING --FINISHED--> COMPLETED`)
//! and multi-target arcs (`DEHYDRATED --RESUME--> RUNNING | DEHYDRATED`)
//! without a separate "chooser" indirection: the handler *is* the chooser.
//!
//! Looking up an undefined `(State, EventKind)` pair returns `None`; the
//! facade turns that into [`crate::error::LifecycleError::InvalidTransition`]
//! and leaves the container's state untouched.

use crate::container::Container;
use crate::exit_status::ExitStatus;
use crate::node::NodeId;
use crate::priority::Priority;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// FSM states, per §4.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    New,
    Reserved,
    Allocated,
    Acquired,
    Running,
    /// Partially or fully preempted but still live.
    Dehydrated,
    Completed,
    Expired,
    Released,
    Killed,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Completed | State::Expired | State::Released | State::Killed)
    }
}

crate::simple_display! {
    State {
        New => "NEW",
        Reserved => "RESERVED",
        Allocated => "ALLOCATED",
        Acquired => "ACQUIRED",
        Running => "RUNNING",
        Dehydrated => "DEHYDRATED",
        Completed => "COMPLETED",
        Expired => "EXPIRED",
        Released => "RELEASED",
        Killed => "KILLED",
    }
}

/// Container-status value carried by a RECOVER event, as reported by the
/// node manager on resource-manager restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecoveredStatus {
    Running,
    Complete,
    /// Anything else is [`crate::error::LifecycleError::RecoverUnexpectedState`].
    Other(String),
}

/// Tag-only projection of [`Event`], used as the transition table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Start,
    Reserved,
    Acquired,
    Launched,
    Finished,
    Suspend,
    Resume,
    Expire,
    Released,
    Kill,
    Recover,
}

crate::simple_display! {
    EventKind {
        Start => "START",
        Reserved => "RESERVED",
        Acquired => "ACQUIRED",
        Launched => "LAUNCHED",
        Finished => "FINISHED",
        Suspend => "SUSPEND",
        Resume => "RESUME",
        Expire => "EXPIRE",
        Released => "RELEASED",
        Kill => "KILL",
        Recover => "RECOVER",
    }
}

/// An inbound lifecycle event, with its event-specific payload.
///
/// `ResourceUpdate` is intentionally absent: it never changes `state`, so
/// the facade routes it directly to [`crate::handlers::resource_updated`]
/// rather than through the transition table (§4.1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Start,
    Reserved { resource: Resource, node: NodeId, priority: Priority },
    Acquired,
    Launched,
    Finished { status: ExitStatus },
    Suspend { status: ExitStatus },
    Resume,
    Expire,
    Released,
    Kill,
    Recover { carried: RecoveredStatus },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Start => EventKind::Start,
            Event::Reserved { .. } => EventKind::Reserved,
            Event::Acquired => EventKind::Acquired,
            Event::Launched => EventKind::Launched,
            Event::Finished { .. } => EventKind::Finished,
            Event::Suspend { .. } => EventKind::Suspend,
            Event::Resume => EventKind::Resume,
            Event::Expire => EventKind::Expire,
            Event::Released => EventKind::Released,
            Event::Kill => EventKind::Kill,
            Event::Recover { .. } => EventKind::Recover,
        }
    }
}

/// A transition hook: mutates the container record (dispatching
/// collaborator events along the way) and returns the state actually
/// reached.
pub type Handler = fn(&mut Container, &Event) -> State;

/// `(from, event)` → handler. Absent entries are undefined transitions.
static TABLE: OnceLock<HashMap<(State, EventKind), Handler>> = OnceLock::new();

fn build_table() -> HashMap<(State, EventKind), Handler> {
    use crate::handlers as h;
    use EventKind::*;
    use State::*;

    let mut t: HashMap<(State, EventKind), Handler> = HashMap::new();
    let mut add = |from: State, event: EventKind, handler: Handler| {
        t.insert((from, event), handler);
    };

    add(New, Start, h::container_started);
    add(New, Reserved, h::container_reserved);
    add(New, Kill, h::to_killed_directly);
    add(New, Recover, h::container_recovered);

    add(Reserved, Reserved, h::container_reserved);
    add(Reserved, Start, h::container_started);
    add(Reserved, Kill, h::to_killed_directly);
    add(Reserved, Released, h::to_released_directly);

    add(Allocated, Acquired, h::acquired);
    add(Allocated, Expire, h::finished);
    add(Allocated, Kill, h::finished);

    add(Acquired, Launched, h::launched);
    add(Acquired, Finished, h::finished_at_acquired);
    add(Acquired, Released, h::kill);
    add(Acquired, Expire, h::kill);
    add(Acquired, Kill, h::kill);

    add(Running, Finished, h::finished);
    add(Running, Suspend, h::container_suspend);
    add(Running, Kill, h::kill);
    add(Running, Released, h::kill);
    add(Running, Expire, h::ignored);

    add(Dehydrated, Resume, h::container_resume);
    add(Dehydrated, Suspend, h::container_suspend);
    add(Dehydrated, Finished, h::finished);
    add(Dehydrated, Kill, h::kill);
    add(Dehydrated, Released, h::kill);
    add(Dehydrated, Expire, h::ignored);

    add(Completed, Expire, h::ignored);
    add(Completed, Released, h::ignored);
    add(Completed, Kill, h::ignored);

    add(Expired, Released, h::ignored);
    add(Expired, Kill, h::ignored);

    add(Released, Expire, h::ignored);
    add(Released, Released, h::ignored);
    add(Released, Kill, h::ignored);
    add(Released, Finished, h::ignored);

    add(Killed, Expire, h::ignored);
    add(Killed, Released, h::ignored);
    add(Killed, Kill, h::ignored);
    add(Killed, Finished, h::ignored);

    t
}

/// Look up the handler for `(state, event.kind())`. `None` means the event
/// is undefined for this state (`LifecycleError::InvalidTransition`).
pub fn lookup(state: State, event: &Event) -> Option<Handler> {
    TABLE.get_or_init(build_table).get(&(state, event.kind())).copied()
}

/// Every `(state, event_kind)` pair that has a table entry. Used by
/// property tests to check transition closure (§8, property 1) without
/// hand-maintaining a duplicate list of arcs.
pub fn defined_pairs() -> Vec<(State, EventKind)> {
    TABLE.get_or_init(build_table).keys().copied().collect()
}

#[cfg(test)]
#[path = "fsm_tests.rs"]
mod tests;
