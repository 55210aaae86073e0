use super::*;

#[test]
fn container_id_has_expected_prefix() {
    let id = ContainerId::new();
    assert!(id.as_str().starts_with("cnt-"));
}

#[test]
fn app_attempt_id_roundtrips_through_string() {
    let id = AppAttemptId::from_string("att-abc123");
    assert_eq!(id.to_string(), "att-abc123");
}

#[test]
fn application_id_distinct_from_app_attempt_id() {
    // Different newtypes, same underlying buffer shape — just a sanity
    // check that the macro instantiation produced independent types.
    let app = ApplicationId::from_string("app-1");
    assert_eq!(app.as_str(), "app-1");
}

#[test]
fn ids_are_unique_across_calls() {
    assert_ne!(ContainerId::new(), ContainerId::new());
}
