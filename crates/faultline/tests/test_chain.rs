//! Integration tests for chain construction and inspection.
//!
//! These tests validate:
//! - Annotation message composition and absence propagation
//! - Deepest cause extraction through every wrapping kind
//! - Typed lookup through foreign errors
//! - Capability detection under further wrapping
//! - Backtrace frame collection
use pretty_assertions::assert_eq;

use faultline::{
    BoxError, Error, ErrorKind, Node, ResultExt, annotate, annotatef, backtrace, deepest_cause,
    direct_cause, fail, find, is_same, is_temporary, is_timeout, temporary, timeout, trace,
};

fn addr(node: &Node) -> *const () {
    node as *const Node as *const ()
}

// ============================================================================
// Annotation
// ============================================================================

#[test]
fn test_annotate_message_and_cause() {
    let cause: BoxError = Box::new(Error::new("connection refused"));
    let cause_addr = addr(&*cause);

    let err = annotate(Some(cause), "x").unwrap();
    assert_eq!(err.to_string(), "x: connection refused");
    assert_eq!(addr(direct_cause(&err).unwrap()), cause_addr);
}

#[test]
fn test_absence_propagates() {
    assert!(annotate(None::<Error>, "x").is_none());
    assert!(trace(None::<Error>).is_none());
    assert!(annotatef!(None::<Error>, "while user {}", 123).is_none());

    let ok: Result<u8, Error> = Ok(1);
    assert_eq!(ok.annotate("x").trace().unwrap(), 1);
}

#[test]
fn test_annotate_foreign_error() {
    let io = std::fs::File::open("/faultline/does/not/exist").unwrap_err();
    let err = annotate(Some(io), "opening config").unwrap();

    let found = find::<std::io::Error>(&err).unwrap();
    assert_eq!(found.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().starts_with("opening config: "));
}

// ============================================================================
// Deepest cause
// ============================================================================

#[test]
fn test_deepest_cause_through_all_wrappers() {
    let root: BoxError = Box::new(fail!("root failure"));
    let root_addr = addr(&*root);

    let err = Error::traced(root);
    let err = temporary(Some(err));
    let err = annotate(Some(err), "mid").unwrap();
    let err = timeout(Some(err));
    let err = annotatef!(Some(err), "top {}", 1).unwrap();

    let deepest = deepest_cause(&err);
    assert_eq!(addr(deepest), root_addr);
    assert!(is_same(&err, deepest));
    assert_eq!(
        deepest.downcast_ref::<Error>().unwrap().kind(),
        ErrorKind::Plain
    );
    assert_eq!(err.to_string(), "top 1: mid: root failure");
}

#[test]
fn test_deepest_cause_of_absent() {
    let absent: Option<&Error> = None;
    assert!(absent.map(|err| deepest_cause(err)).is_none());
}

// ============================================================================
// Capabilities
// ============================================================================

#[test]
fn test_temporary_for_any_input() {
    assert!(is_temporary(&temporary(None::<Error>)));
    assert!(is_temporary(&temporary(Some(Error::new("x")))));
    assert!(is_temporary(&temporary(Some("foreign"))));

    let err = annotate(Some(temporary(None::<Error>)), "ctx").unwrap();
    assert!(is_temporary(&err));
    assert!(!is_timeout(&err));
}

#[test]
fn test_capability_does_not_change_message() {
    let err = timeout(Some(temporary(Some(Error::new("slow")))));
    assert_eq!(err.to_string(), "slow");
    assert!(is_temporary(&err));
    assert!(is_timeout(&err));
}

// ============================================================================
// Backtrace
// ============================================================================

#[test]
fn test_backtrace_three_frames() {
    let root_line = line!() + 1;
    let err = fail!("no rows");
    let mid_line = line!() + 1;
    let err = annotate(Some(err), "querying").unwrap();
    let top_line = line!() + 1;
    let err = annotatef!(Some(err), "while user {}", 123).unwrap();

    let bt = backtrace(&err);
    let lines: Vec<u32> = bt.iter().map(|frame| frame.line()).collect();
    assert_eq!(lines, vec![top_line, mid_line, root_line]);
    assert_eq!(bt.to_string().matches('[').count(), 3);
}

#[test]
fn test_backtrace_skips_markers_without_stopping() {
    let err = annotate(Some(temporary(Some(Error::new("x")))), "ctx").unwrap();
    assert_eq!(backtrace(&err).len(), 2);
}
