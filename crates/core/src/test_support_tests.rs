use super::*;

#[test]
fn test_container_starts_new_with_defaults() {
    let (container, _fakes) = test_container();
    assert_eq!(container.state(), crate::fsm::State::New);
    assert_eq!(container.creation_time_ms, 1_000_000);
    assert!(!container.is_suspending());
}

#[test]
fn fake_app_registry_always_resolves_same_metrics() {
    let fakes = fake_collaborators();
    let a = fakes.app_registry.attempt_metrics(&AppAttemptId::new()).unwrap();
    a.update_aggregate_app_resource_usage(1.0, 2.0);
    assert_eq!(fakes.metrics.aggregate_updates.lock().len(), 1);
}

#[test]
fn test_handle_starts_new_at_fixed_epoch() {
    let (handle, _clock, _fakes) = test_handle();
    assert_eq!(handle.state(), crate::fsm::State::New);
    assert_eq!(handle.create_container_report().creation_time_ms, 1_000_000);
}

#[test]
fn fake_expirer_is_clean_tracks_register_unregister_pairs() {
    let fakes = fake_collaborators();
    let id = ContainerId::new();
    assert!(!fakes.expirer.is_clean(id));
    fakes.expirer.register(id);
    assert!(!fakes.expirer.is_clean(id));
    fakes.expirer.unregister(id);
    assert!(fakes.expirer.is_clean(id));
}
