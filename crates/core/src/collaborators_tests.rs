use super::*;
use crate::events::OutboundEvent;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct RecordingSink {
    seen: Mutex<Vec<OutboundEvent>>,
}

impl EventSink for RecordingSink {
    fn handle(&self, event: OutboundEvent) {
        self.seen.lock().push(event);
    }
}

#[test]
fn event_sink_trait_object_is_callable() {
    let sink: Arc<dyn EventSink> = Arc::new(RecordingSink::default());
    sink.handle(OutboundEvent::NodeCleanContainer {
        node_id: crate::node::NodeId::new(),
        container_id: ContainerId::new(),
    });
}

#[test]
fn collaborators_bundle_clone_shares_the_same_sink() {
    let recording = Arc::new(RecordingSink::default());
    let sink: Arc<dyn EventSink> = recording.clone();

    #[derive(Debug, Default)]
    struct NoopExpirer;
    impl AllocationExpirer for NoopExpirer {
        fn register(&self, _container_id: ContainerId) {}
        fn unregister(&self, _container_id: ContainerId) {}
    }

    #[derive(Debug, Default)]
    struct NoopHistory;
    impl HistoryWriter for NoopHistory {
        fn container_started(&self, _report: &crate::container::ContainerReport) {}
        fn container_finished(&self, _report: &crate::container::ContainerReport) {}
    }

    #[derive(Debug, Default)]
    struct NoopMetrics;
    impl MetricsPublisher for NoopMetrics {
        fn container_created(&self, _report: &crate::container::ContainerReport, _at_ms: u64) {}
        fn container_finished(&self, _report: &crate::container::ContainerReport, _at_ms: u64) {}
    }

    #[derive(Debug, Default)]
    struct NoopRegistry;
    impl AppRegistry for NoopRegistry {
        fn attempt_metrics(&self, _app_attempt_id: &AppAttemptId) -> Option<Arc<dyn AttemptMetrics>> {
            None
        }
    }

    let bundle = Collaborators {
        event_sink: sink,
        expirer: Arc::new(NoopExpirer),
        history: Arc::new(NoopHistory),
        metrics: Arc::new(NoopMetrics),
        app_registry: Arc::new(NoopRegistry),
    };
    let cloned = bundle.clone();
    cloned.event_sink.handle(OutboundEvent::AttemptContainerAllocated {
        app_attempt_id: AppAttemptId::new(),
    });
    assert_eq!(recording.seen.lock().len(), 1);
}
