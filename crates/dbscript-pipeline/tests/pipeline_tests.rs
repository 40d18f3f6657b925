//! End-to-end pipeline tests
//!
//! Drives both passes (generation and diagnostics) over fixture trees the
//! way a host build system would.

use dbscript_pipeline::{DiagnosticReporter, Pipeline, PipelineError};
use dbscript_syntax::{CancellationToken, Cancelled, Modifier};
use dbscript_test_utils::TreeFixture;
use pretty_assertions::assert_eq;
use std::sync::Once;

static TRACING: Once = Once::new();

fn token() -> CancellationToken {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
    CancellationToken::new()
}

#[test]
fn happy_path_produces_one_artifact_and_no_diagnostics() {
    let fixture = TreeFixture::annotated_method("init.sql");
    let pipeline = Pipeline::new().unwrap();

    let output = pipeline.run(fixture.tree(), &token()).unwrap();
    let diagnostics = DiagnosticReporter::new()
        .run(fixture.tree(), &token())
        .unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(output.len(), 1);

    let artifact = &output.artifacts()[0];
    assert!(artifact.hint_name().starts_with("Repository/LoadUser_"));
    assert!(artifact.content().contains("\"init.sql\""));
}

#[test]
fn non_extendable_method_warns_and_generates_nothing() {
    let fixture = TreeFixture::builder()
        .method_modifiers([Modifier::Public, Modifier::Static, Modifier::Partial])
        .build();
    let pipeline = Pipeline::new().unwrap();

    let output = pipeline.run(fixture.tree(), &token()).unwrap();
    let diagnostics = DiagnosticReporter::new()
        .run(fixture.tree(), &token())
        .unwrap();

    assert!(output.is_empty());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "DSR1001");
}

#[test]
fn missing_arguments_errors_but_still_generates() {
    // The missing-arguments error is informative only; the artifact is
    // produced with an empty script path and the problem surfaces at
    // runtime instead.
    let fixture = TreeFixture::builder().without_annotation_arguments().build();
    let pipeline = Pipeline::new().unwrap();

    let output = pipeline.run(fixture.tree(), &token()).unwrap();
    let diagnostics = DiagnosticReporter::new()
        .run(fixture.tree(), &token())
        .unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "DSR2002");
    assert_eq!(output.len(), 1);
    assert!(output.artifacts()[0].content().contains("ReadScript(this.GetDirectory(), )"));
}

#[test]
fn repeated_annotations_are_fully_silent() {
    let fixture = TreeFixture::builder().repeated_annotation().build();
    let pipeline = Pipeline::new().unwrap();

    let output = pipeline.run(fixture.tree(), &token()).unwrap();
    let diagnostics = DiagnosticReporter::new()
        .run(fixture.tree(), &token())
        .unwrap();

    assert!(output.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn each_annotated_sibling_gets_its_own_artifact() {
    let fixture = TreeFixture::builder()
        .sibling_method("LoadOrder", "order.sql")
        .sibling_method("LoadInvoice", "invoice.sql")
        .build();
    let pipeline = Pipeline::new().unwrap();

    let output = pipeline.run(fixture.tree(), &token()).unwrap();

    assert_eq!(output.len(), 3);
    let hints = output.hint_names();
    assert!(hints[0].starts_with("Repository/LoadUser_"));
    assert!(hints[1].starts_with("Repository/LoadOrder_"));
    assert!(hints[2].starts_with("Repository/LoadInvoice_"));
}

#[test]
fn reruns_are_content_identical_with_fresh_identities() {
    let fixture = TreeFixture::annotated_method("init.sql");
    let pipeline = Pipeline::new().unwrap();

    let first = pipeline.run(fixture.tree(), &token()).unwrap();
    let second = pipeline.run(fixture.tree(), &token()).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.artifacts().iter().zip(second.artifacts()) {
        assert_eq!(a.content(), b.content());
        assert_ne!(a.hint_name(), b.hint_name());
    }
}

#[test]
fn parallel_run_matches_sequential_run() {
    let fixture = TreeFixture::builder()
        .nesting_depth(3)
        .with_namespace("Data")
        .sibling_method("LoadOrder", "order.sql")
        .build();
    let pipeline = Pipeline::new().unwrap();

    let sequential = pipeline.run(fixture.tree(), &token()).unwrap();
    let parallel = pipeline.run_parallel(fixture.tree(), &token()).unwrap();

    assert_eq!(sequential.len(), parallel.len());
    for (a, b) in sequential.artifacts().iter().zip(parallel.artifacts()) {
        assert_eq!(a.content(), b.content());
    }
}

#[test]
fn cancelled_run_emits_nothing() {
    let fixture = TreeFixture::annotated_method("init.sql");
    let pipeline = Pipeline::new().unwrap();

    let cancelled = CancellationToken::new();
    cancelled.cancel();

    let result = pipeline.run(fixture.tree(), &cancelled);
    assert_eq!(result, Err(PipelineError::Cancelled(Cancelled)));

    let parallel = pipeline.run_parallel(fixture.tree(), &cancelled);
    assert_eq!(parallel, Err(PipelineError::Cancelled(Cancelled)));
}

#[test]
fn diagnostics_and_generation_stay_independent() {
    // An invalid return type produces an error diagnostic AND an artifact;
    // a non-extendable hierarchy produces a warning and no artifact. The
    // two passes never consult each other.
    let fixture = TreeFixture::builder().return_type_text("int").build();
    let pipeline = Pipeline::new().unwrap();

    let output = pipeline.run(fixture.tree(), &token()).unwrap();
    let diagnostics = DiagnosticReporter::new()
        .run(fixture.tree(), &token())
        .unwrap();

    assert_eq!(output.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "DSR2001");
}

#[test]
fn deep_nesting_round_trips_through_generation() {
    let fixture = TreeFixture::builder()
        .nesting_depth(4)
        .with_namespace("Data.Access")
        .build();
    let pipeline = Pipeline::new().unwrap();

    let output = pipeline.run(fixture.tree(), &token()).unwrap();
    assert_eq!(output.len(), 1);

    // Four classes plus the namespace: five wrappers open, five close.
    let content = output.artifacts()[0].content();
    assert!(content.contains("namespace Data.Access"));
    assert!(content.contains("class Wrapper0"));
    assert!(content.contains("class Wrapper2"));
    assert!(content.contains("class Repository"));
    assert!(content.ends_with("}}}}}\n") || content.ends_with("}}}}}"));
}
