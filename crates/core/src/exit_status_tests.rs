use super::*;

#[test]
fn is_preempted_only_true_for_preempted_code() {
    assert!(ExitStatus::PREEMPTED.is_preempted());
    assert!(!ExitStatus::SUCCESS.is_preempted());
    assert!(!ExitStatus::ABORTED.is_preempted());
}

#[test]
fn default_is_invalid() {
    assert_eq!(ExitStatus::default(), ExitStatus::INVALID);
}

#[test]
fn display_shows_raw_code() {
    assert_eq!(ExitStatus::SUCCESS.to_string(), "0");
    assert_eq!(ExitStatus(42).to_string(), "42");
}
