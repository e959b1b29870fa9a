//! Display-string composition: message chaining, key/detail prefixes, and
//! duplicate suppression.

mod common;

use common::{Layered, Plain};
use errkind::{with_cause, Error, ErrorKind};

#[test]
fn composes_messages_outermost_first() {
    let cases: Vec<(Error, &str)> = vec![
        (Error::msg("standard error"), "standard error"),
        (
            Error::wrap(Plain("standard error"), "wrapped error"),
            "wrapped error: standard error",
        ),
        (
            Error::wrap(Plain("standard error"), "wrapped error").with_detail("Error Details"),
            "Error Details: wrapped error: standard error",
        ),
        (
            Error::wrap(
                ErrorKind::BadRequest.new_with_detail("standard error"),
                "wrapped error",
            )
            .with_detail("Error Details"),
            "Error Details: wrapped error: standard error",
        ),
        (
            Error::wrap(
                ErrorKind::BadRequest.new_with_detail("standard error"),
                "wrapped error",
            )
            .with_detail("Error Details")
            .with_key("ERR_KEY"),
            "ERR_KEY: Error Details: wrapped error: standard error",
        ),
        (
            Error::wrap(
                with_cause(
                    ErrorKind::BadRequest
                        .new_with_key_and_detail("ERR_SENTINEL", "Sentinel error detail"),
                    Plain("standard error cause"),
                ),
                "wrapped error",
            ),
            "wrapped error: ERR_SENTINEL: Sentinel error detail: standard error cause",
        ),
        (
            ErrorKind::BadRequest.new_with_key_and_detail("ERR_KEY", "Error Details"),
            "ERR_KEY: Error Details",
        ),
        (
            Error::wrap(
                Layered::new("wrapped transport error", Plain("fmt error")),
                "wrapped error",
            )
            .with_key_and_detail("ERR_KEY", "Error Details"),
            "ERR_KEY: Error Details: wrapped error: wrapped transport error: fmt error",
        ),
    ];

    for (err, want) in cases {
        assert_eq!(err.to_string(), want);
    }
}

#[test]
fn typed_rewrap_then_untyped_wrap_keeps_kind_context_and_message() {
    let err = Error::msg("an_error").with_context("field", "value");
    let err = ErrorKind::BadRequest.wrap(err, "error 1");
    let err = Error::wrap(err, "outer wrapped err 1");

    assert_eq!(err.to_string(), "outer wrapped err 1: error 1: an_error");
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    let context = err.context().cloned().unwrap_or_default();
    assert_eq!(context.len(), 1);
    assert_eq!(context.get("field").map(String::as_str), Some("value"));
}

#[test]
fn detail_recorded_by_the_constructor_is_never_shown_twice() {
    let err = ErrorKind::Public.new_with_detail("This is public error detail");
    let wrapped = Error::wrap(err, "wrapped error");

    assert_eq!(wrapped.kind(), ErrorKind::Public);
    assert_eq!(wrapped.detail(), Some("This is public error detail"));
    assert_eq!(
        wrapped.to_string(),
        "wrapped error: This is public error detail"
    );
}

#[test]
fn detail_already_contained_in_the_chain_is_dropped() {
    let err = Error::msg("x failed").with_detail("x");
    let wrapped = Error::wrap(err, "retrying x");

    // "x" appears in the wrap message and the leaf message only; the
    // detail entry adds no third copy.
    assert_eq!(wrapped.to_string(), "retrying x: x failed");
}

#[test]
fn key_and_detail_keep_their_order_when_both_survive() {
    let err = Error::wrap(Plain("io failure"), "saving draft")
        .with_key("ERR_DRAFT")
        .with_detail("Draft could not be saved");

    assert_eq!(
        err.to_string(),
        "ERR_DRAFT: Draft could not be saved: saving draft: io failure"
    );
}

#[test]
fn debug_output_carries_message_kind_and_context() {
    let err = ErrorKind::BadRequest
        .new("bad payload")
        .with_context("field", "amount");
    let debug = format!("{err:?}");

    assert!(debug.contains("bad payload"));
    assert!(debug.contains("kind: bad request"));
    assert!(debug.contains("field: amount"));
}

#[cfg(feature = "full-backtrace")]
#[test]
fn constructed_errors_capture_a_backtrace() {
    let err = Error::msg("traced");
    assert!(err.backtrace().is_some());

    // Attaching context to a foreign error records no new trace frame.
    let attached = Error::attach_context(Plain("foreign"), "field", "value");
    assert!(attached.backtrace().is_none());
}
