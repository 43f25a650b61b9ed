use std::sync::{Arc, Mutex};

use specrun::{CodeLocation, Disposition, Failer, OutputBuffer, Spec, SuiteNode, SuiteNodeType};

use crate::fake_writer::FakeWriter;

/// Shared execution log: the order in which unit bodies actually ran.
pub type RunLog = Arc<Mutex<Vec<String>>>;

pub fn new_run_log() -> RunLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Build a spec whose body appends its label to the fake writer and the run
/// log, and raises the failure signal when `should_fail` is set.
pub fn tracking_spec(
    text: &str,
    disposition: Disposition,
    should_fail: bool,
    failer: &Arc<Failer>,
    writer: &Arc<FakeWriter>,
    log: &RunLog,
) -> Spec {
    let label = text.to_string();
    let body_label = label.clone();
    let body_failer = Arc::clone(failer);
    let body_writer = Arc::clone(writer);
    let body_log = Arc::clone(log);

    Spec::new(
        vec![label],
        vec![CodeLocation::here()],
        disposition,
        Arc::clone(failer),
        move || {
            body_writer.append(&body_label);
            body_log.lock().unwrap().push(body_label.clone());
            if should_fail {
                body_failer.fail(body_label.clone(), CodeLocation::here());
            }
        },
    )
}

/// Build a spec with a custom body.
pub fn spec_with_body(
    text: &str,
    failer: &Arc<Failer>,
    body: impl Fn() + Send + 'static,
) -> Spec {
    Spec::new(
        vec![text.to_string()],
        vec![CodeLocation::here()],
        Disposition::Normal,
        Arc::clone(failer),
        body,
    )
}

/// Build a before-/after-suite node mirroring [`tracking_spec`].
pub fn tracking_suite_node(
    node_type: SuiteNodeType,
    text: &str,
    should_fail: bool,
    failer: &Arc<Failer>,
    writer: &Arc<FakeWriter>,
    log: &RunLog,
) -> SuiteNode {
    let label = text.to_string();
    let body_failer = Arc::clone(failer);
    let body_writer = Arc::clone(writer);
    let body_log = Arc::clone(log);

    SuiteNode::new(
        node_type,
        CodeLocation::here(),
        Arc::clone(failer),
        move || {
            body_writer.append(&label);
            body_log.lock().unwrap().push(label.clone());
            if should_fail {
                body_failer.fail(label.clone(), CodeLocation::here());
            }
        },
    )
}
