use super::*;
use crate::fsm::EventKind;

#[test]
fn invalid_transition_message_names_state_and_event() {
    let err = LifecycleError::InvalidTransition { state: State::Completed, event: Event::Resume };
    let msg = err.to_string();
    assert!(msg.contains("Resume"));
    assert!(msg.contains("Completed"));
}

#[test]
fn log_does_not_panic_for_either_variant() {
    LifecycleError::InvalidTransition { state: State::New, event: Event::Kill }.log("cnt-1");
    LifecycleError::RecoverUnexpectedState { carried: "BOGUS".into() }.log("cnt-1");
}

#[test]
fn invalid_transition_equality_compares_fields() {
    let a = LifecycleError::InvalidTransition { state: State::New, event: Event::Kill };
    let b = LifecycleError::InvalidTransition { state: State::New, event: Event::Kill };
    assert_eq!(a, b);
    let c = LifecycleError::InvalidTransition { state: State::Running, event: Event::Kill };
    assert_ne!(a, c);
}

#[test]
fn event_kind_is_not_involved_in_invalid_transition() {
    // sanity: InvalidTransition carries the full Event, not just its kind
    let err = LifecycleError::InvalidTransition { state: State::New, event: Event::Acquired };
    match err {
        LifecycleError::InvalidTransition { event, .. } => assert_eq!(event.kind(), EventKind::Acquired),
        _ => unreachable!(),
    }
}
