//! Tests for the batch engine.

use std::sync::{Arc, Mutex};

use super::*;
use crate::dispatch::{HandlerError, KindHandler};
use crate::manifest::{kinds, ResourceObject};
use crate::pipeline::report::MemorySink;

const DEPLOYMENT_YAML: &str = "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: web\nspec:\n  selector: {}\n  template:\n    spec:\n      containers: []\n";
const SERVICE_YAML: &str =
    "apiVersion: v1\nkind: Service\nmetadata:\n  name: web\nspec:\n  ports: []\n";
const CONFIGMAP_YAML: &str = "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: settings\n";
const BROKEN_YAML: &str = "apiVersion: v1\nkind: [unclosed\n";

#[derive(Clone, Default)]
struct RecordingHandler {
    calls: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl KindHandler for RecordingHandler {
    fn handle(&self, object: &ResourceObject) -> Result<(), HandlerError> {
        self.calls.lock().unwrap().push(object.kind().to_string());
        if self.fail {
            return Err(HandlerError::new(object.kind(), "handler exploded"));
        }
        Ok(())
    }
}

fn recording_engine(policy: ErrorPolicy) -> (Engine, Arc<Mutex<Vec<String>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut router = Router::new();
    for kind in kinds::HANDLED {
        router.register(kind, Box::new(RecordingHandler { calls: calls.clone(), fail: false }));
    }
    router
        .set_unknown_handler(Box::new(RecordingHandler { calls: calls.clone(), fail: false }));
    (Engine::new(AllowList::default_pattern(), router, policy), calls)
}

fn doc(source: &str, text: &str) -> ManifestDocument {
    ManifestDocument::new(source, text.as_bytes().to_vec())
}

#[test]
fn test_known_kind_routes_to_its_handler() {
    let (engine, calls) = recording_engine(ErrorPolicy::StopOnError);
    let batch = vec![doc("deploy.yaml", DEPLOYMENT_YAML)];
    let mut sink = MemorySink::new();

    let summary = engine.process(&batch, &mut sink).unwrap();

    assert_eq!(summary.routed, 1);
    assert_eq!(summary.admitted, 1);
    assert_eq!(*calls.lock().unwrap(), vec!["Deployment".to_string()]);
    assert!(matches!(sink.reports[0].outcome, Outcome::Routed { .. }));
}

#[test]
fn test_rejected_kind_never_reaches_a_handler() {
    let (engine, calls) = recording_engine(ErrorPolicy::StopOnError);
    let batch = vec![doc("cm.yaml", CONFIGMAP_YAML)];
    let mut sink = MemorySink::new();

    let summary = engine.process(&batch, &mut sink).unwrap();

    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.decoded, 1);
    assert_eq!(summary.admitted, 0);
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(
        sink.reports[0].outcome,
        Outcome::Rejected { kind: "ConfigMap".to_string() }
    );
}

#[test]
fn test_loosely_admitted_kind_routes_to_unknown_handler() {
    let (engine, calls) = recording_engine(ErrorPolicy::StopOnError);
    let batch = vec![doc(
        "sab.yaml",
        "apiVersion: example.io/v1\nkind: ServiceAccountBinding\nmetadata:\n  name: x\n",
    )];
    let mut sink = MemorySink::new();

    let summary = engine.process(&batch, &mut sink).unwrap();

    assert_eq!(summary.routed_unknown, 1);
    assert_eq!(summary.routed, 0);
    assert_eq!(*calls.lock().unwrap(), vec!["ServiceAccountBinding".to_string()]);
    assert!(matches!(sink.reports[0].outcome, Outcome::RoutedUnknown { .. }));
}

#[test]
fn test_exact_admission_rejects_substring_cousin() {
    let engine = Engine::new(
        AllowList::default_exact(),
        Router::with_trace_handlers(),
        ErrorPolicy::StopOnError,
    );
    let batch = vec![doc(
        "sab.yaml",
        "apiVersion: example.io/v1\nkind: ServiceAccountBinding\nmetadata:\n  name: x\n",
    )];
    let mut sink = MemorySink::new();

    let summary = engine.process(&batch, &mut sink).unwrap();
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.routed_unknown, 0);
}

#[test]
fn test_stop_on_error_halts_the_batch() {
    let (engine, calls) = recording_engine(ErrorPolicy::StopOnError);
    let batch = vec![
        doc("a-deploy.yaml", DEPLOYMENT_YAML),
        doc("b-broken.yaml", BROKEN_YAML),
        doc("c-service.yaml", SERVICE_YAML),
    ];
    let mut sink = MemorySink::new();

    let halted = engine.process(&batch, &mut sink).unwrap_err();

    assert!(halted.error.to_string().contains("b-broken.yaml"));
    assert_eq!(halted.summary.documents, 2);
    assert_eq!(halted.summary.routed, 1);
    assert_eq!(halted.summary.decode_failed, 1);

    // The failing document is recorded; the service is never processed.
    assert_eq!(sink.reports.len(), 2);
    assert!(sink.summary.is_none());
    assert_eq!(*calls.lock().unwrap(), vec!["Deployment".to_string()]);
}

#[test]
fn test_continue_on_error_processes_the_whole_batch() {
    let (engine, _) = recording_engine(ErrorPolicy::ContinueOnError);
    let batch = vec![
        doc("deploy.yaml", DEPLOYMENT_YAML),
        doc("cm.yaml", CONFIGMAP_YAML),
        doc("broken.yaml", BROKEN_YAML),
    ];
    let mut sink = MemorySink::new();

    let summary = engine.process(&batch, &mut sink).unwrap();

    assert_eq!(summary.documents, 3);
    assert_eq!(summary.routed, 1);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.decode_failed, 1);
    assert_eq!(sink.reports.len(), 3);
    assert_eq!(sink.summary, Some(summary));
}

#[test]
fn test_handler_failure_does_not_abort_the_batch() {
    let mut router = Router::new();
    router.register(
        kinds::DEPLOYMENT,
        Box::new(RecordingHandler { calls: Arc::new(Mutex::new(Vec::new())), fail: true }),
    );
    router.register(
        kinds::SERVICE,
        Box::new(RecordingHandler { calls: Arc::new(Mutex::new(Vec::new())), fail: false }),
    );
    let engine = Engine::new(AllowList::default_pattern(), router, ErrorPolicy::StopOnError);

    let batch = vec![doc("deploy.yaml", DEPLOYMENT_YAML), doc("svc.yaml", SERVICE_YAML)];
    let mut sink = MemorySink::new();

    let summary = engine.process(&batch, &mut sink).unwrap();

    assert_eq!(summary.handler_failed, 1);
    assert_eq!(summary.routed, 1);
    match &sink.reports[0].outcome {
        Outcome::HandlerFailed { kind, reason } => {
            assert_eq!(kind, "Deployment");
            assert!(reason.contains("exploded"));
        }
        other => panic!("expected HandlerFailed, got {:?}", other),
    }
}

#[test]
fn test_empty_batch_yields_zero_summary() {
    let engine = Engine::with_defaults();
    let mut sink = MemorySink::new();

    let summary = engine.process(&Vec::new(), &mut sink).unwrap();

    assert_eq!(summary, Summary::default());
    assert!(sink.reports.is_empty());
    assert_eq!(sink.summary, Some(Summary::default()));
}

#[test]
fn test_outcomes_arrive_in_batch_order() {
    let (engine, _) = recording_engine(ErrorPolicy::ContinueOnError);
    let batch = vec![
        doc("1.yaml", SERVICE_YAML),
        doc("2.yaml", CONFIGMAP_YAML),
        doc("3.yaml", DEPLOYMENT_YAML),
    ];
    let mut sink = MemorySink::new();

    engine.process(&batch, &mut sink).unwrap();

    let sources: Vec<&str> = sink.reports.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(sources, vec!["1.yaml", "2.yaml", "3.yaml"]);
}

#[test]
fn test_error_policy_parsing() {
    assert_eq!("stop".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::StopOnError);
    assert_eq!("continue".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::ContinueOnError);
    assert!("retry".parse::<ErrorPolicy>().is_err());
}
