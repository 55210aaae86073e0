use super::*;
use crate::exit_status::ExitStatus;
use crate::node::NodeId;
use crate::priority::Priority;
use crate::resource::Resource;
use crate::test_support::test_container;

#[test]
fn undefined_state_event_pair_has_no_handler() {
    assert!(lookup(State::New, &Event::Launched).is_none());
    assert!(lookup(State::Completed, &Event::Start).is_none());
}

#[test]
fn table_is_built_once_and_cached() {
    let first = defined_pairs().len();
    let second = defined_pairs().len();
    assert_eq!(first, second);
}

/// §8 property 1 (transition closure, the single-target half): every
/// fixed-target arc in §4.1 lands on exactly the tabled state. The two
/// multi-target arcs (RECOVER, RESUME) are exercised separately in
/// `handlers_tests.rs` and the facade scenario tests, since their target
/// depends on the event payload / accumulated `preempted`, not just
/// `(state, event)`.
#[yare::parameterized(
    new_start = { State::New, Event::Start, State::Allocated },
    new_reserved = { State::New, reserved_event(), State::Reserved },
    new_kill = { State::New, Event::Kill, State::Killed },
    reserved_reserved = { State::Reserved, reserved_event(), State::Reserved },
    reserved_start = { State::Reserved, Event::Start, State::Allocated },
    reserved_kill = { State::Reserved, Event::Kill, State::Killed },
    reserved_released = { State::Reserved, Event::Released, State::Released },
    allocated_acquired = { State::Allocated, Event::Acquired, State::Acquired },
    allocated_expire = { State::Allocated, Event::Expire, State::Expired },
    allocated_kill = { State::Allocated, Event::Kill, State::Killed },
    acquired_launched = { State::Acquired, Event::Launched, State::Running },
    acquired_finished = { State::Acquired, finished_event(), State::Completed },
    acquired_released = { State::Acquired, Event::Released, State::Released },
    acquired_expire = { State::Acquired, Event::Expire, State::Expired },
    acquired_kill = { State::Acquired, Event::Kill, State::Killed },
    running_finished = { State::Running, finished_event(), State::Completed },
    running_suspend = { State::Running, suspend_event(), State::Dehydrated },
    running_kill = { State::Running, Event::Kill, State::Killed },
    running_released = { State::Running, Event::Released, State::Released },
    running_expire_is_ignored = { State::Running, Event::Expire, State::Running },
    dehydrated_suspend = { State::Dehydrated, suspend_event(), State::Dehydrated },
    dehydrated_finished = { State::Dehydrated, finished_event(), State::Completed },
    dehydrated_kill = { State::Dehydrated, Event::Kill, State::Killed },
    dehydrated_released = { State::Dehydrated, Event::Released, State::Released },
    dehydrated_expire_is_ignored = { State::Dehydrated, Event::Expire, State::Dehydrated },
    completed_expire_is_idempotent = { State::Completed, Event::Expire, State::Completed },
    completed_released_is_idempotent = { State::Completed, Event::Released, State::Completed },
    completed_kill_is_idempotent = { State::Completed, Event::Kill, State::Completed },
    expired_released_is_idempotent = { State::Expired, Event::Released, State::Expired },
    expired_kill_is_idempotent = { State::Expired, Event::Kill, State::Expired },
    released_expire_is_idempotent = { State::Released, Event::Expire, State::Released },
    released_kill_is_idempotent = { State::Released, Event::Kill, State::Released },
    released_finished_is_idempotent = { State::Released, finished_event(), State::Released },
    killed_expire_is_idempotent = { State::Killed, Event::Expire, State::Killed },
    killed_released_is_idempotent = { State::Killed, Event::Released, State::Killed },
    killed_finished_is_idempotent = { State::Killed, finished_event(), State::Killed },
)]
fn transition_table_reaches_tabled_target(from: State, event: Event, expected: State) {
    let (mut container, _fakes) = test_container();
    container.state = from;
    let handler = lookup(from, &event).unwrap_or_else(|| panic!("no handler for {from:?}/{event:?}"));
    let next = handler(&mut container, &event);
    assert_eq!(next, expected);
}

fn reserved_event() -> Event {
    Event::Reserved { resource: Resource::new(1, 1), node: NodeId::new(), priority: Priority::new(1.0) }
}

fn finished_event() -> Event {
    Event::Finished { status: ExitStatus::SUCCESS }
}

fn suspend_event() -> Event {
    Event::Suspend { status: ExitStatus::PREEMPTED }
}

/// §8 property 1 (the undefined half): every `(state, event)` pair *not*
/// named in §4.1 has no table entry, so `handle` falls through to
/// `InvalidTransition` rather than silently picking a default.
#[test]
fn pairs_absent_from_4_1_have_no_table_entry() {
    assert!(lookup(State::New, &Event::Launched).is_none());
    assert!(lookup(State::New, &Event::Acquired).is_none());
    assert!(lookup(State::Allocated, &Event::Launched).is_none());
    assert!(lookup(State::Allocated, &Event::Start).is_none());
    assert!(lookup(State::Completed, &Event::Start).is_none());
    assert!(lookup(State::Completed, &Event::Acquired).is_none());
}

#[test]
fn event_kind_matches_its_own_variant() {
    assert_eq!(Event::Start.kind(), EventKind::Start);
    assert_eq!(Event::Acquired.kind(), EventKind::Acquired);
    assert_eq!(Event::Resume.kind(), EventKind::Resume);
}

#[test]
fn state_display_matches_upper_snake_names() {
    assert_eq!(State::New.to_string(), "NEW");
    assert_eq!(State::Dehydrated.to_string(), "DEHYDRATED");
}

#[test]
fn only_completed_expired_released_killed_are_terminal() {
    let terminal = [State::Completed, State::Expired, State::Released, State::Killed];
    let non_terminal =
        [State::New, State::Reserved, State::Allocated, State::Acquired, State::Running, State::Dehydrated];
    for s in terminal {
        assert!(s.is_terminal(), "{s:?} should be terminal");
    }
    for s in non_terminal {
        assert!(!s.is_terminal(), "{s:?} should not be terminal");
    }
}
