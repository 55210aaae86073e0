use super::*;

#[test]
fn name_matches_serde_tag() {
    let ev = OutboundEvent::AttemptContainerAllocated { app_attempt_id: AppAttemptId::new() };
    assert_eq!(ev.name(), "attempt:container_allocated");

    let ev = OutboundEvent::NodeCleanContainer {
        node_id: NodeId::new(),
        container_id: ContainerId::new(),
    };
    assert_eq!(ev.name(), "node:clean_container");
}

#[test]
fn serializes_with_type_tag() {
    let ev = OutboundEvent::AppRunningOnNode {
        app_attempt_id: AppAttemptId::from_string("att-1"),
        node_id: NodeId::from_string("nde-1"),
    };
    let json = serde_json::to_string(&ev).unwrap();
    assert!(json.contains("\"type\":\"app:running_on_node\""));
    let round_tripped: OutboundEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(round_tripped, ev);
}
