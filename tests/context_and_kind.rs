//! Context attachment, accessors, fixed-key helpers, and kind metadata.

mod common;

use std::collections::BTreeMap;

use common::Plain;
use errkind::{
    context_of, context_value_of, fail_fast_of, kind_of, Error, ErrorKind,
};

fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn attaching_context_accumulates_without_changing_the_message() {
    let err = ErrorKind::BadRequest.new("an_error");
    let with_context = err
        .with_context("field1", "the field is empty")
        .with_context("field2", "the field is empty");

    assert_eq!(with_context.kind(), ErrorKind::BadRequest);
    assert_eq!(
        with_context.context(),
        Some(&map(&[
            ("field1", "the field is empty"),
            ("field2", "the field is empty"),
        ]))
    );
    assert_eq!(with_context.to_string(), err.to_string());
    assert_eq!(
        with_context.context_value("field2"),
        Some("the field is empty")
    );
}

#[test]
fn later_writes_win_for_the_same_key() {
    let err = Error::msg("boom")
        .with_context("field", "first")
        .with_context("field", "second");

    assert_eq!(err.context_value("field"), Some("second"));
    assert_eq!(err.context().map(BTreeMap::len), Some(1));
}

#[test]
fn foreign_errors_gain_context_through_an_unclassified_node() {
    let err = Error::attach_context(
        Plain("this is a standard error"),
        "field1",
        "the field is empty",
    );
    let err = Error::attach_context(err, "field2", "the field is empty");

    assert_eq!(err.kind(), ErrorKind::Unspecified);
    assert_eq!(
        err.context(),
        Some(&map(&[
            ("field1", "the field is empty"),
            ("field2", "the field is empty"),
        ]))
    );
    assert_eq!(err.to_string(), "this is a standard error");
}

#[test]
fn accessors_return_absent_for_non_model_errors() {
    let foreign = Plain("this is a standard error");

    assert_eq!(context_of(&foreign), None);
    assert_eq!(context_value_of(&foreign, "field"), None);
    assert_eq!(kind_of(&foreign), ErrorKind::Unspecified);
    assert!(!fail_fast_of(&foreign));
}

#[test]
fn fixed_key_helpers_read_back() {
    let err = Error::attach_context(Plain("this is an error"), "pointer", "thefield");
    assert_eq!(err.pointer(), Some("thefield"));
    assert_eq!(err.detail(), None);

    let err = err.with_detail("the detail").with_key("ERROR_NAME");
    assert_eq!(err.detail(), Some("the detail"));
    assert_eq!(err.key(), Some("ERROR_NAME"));
    assert_eq!(context_value_of(&err, "pointer"), Some("thefield"));
}

#[test]
fn fail_fast_is_a_context_flag() {
    let err = Error::msg("transient?");
    assert!(!err.is_fail_fast());

    let err = err.fail_fast();
    assert!(err.is_fail_fast());
    assert_eq!(err.context_value("failfast"), Some("true"));
    assert!(fail_fast_of(&err));

    // The flag survives wrapping like any other entry.
    let wrapped = Error::wrap(err, "outer");
    assert!(wrapped.is_fail_fast());

    // Only the exact string "true" counts.
    let off = Error::msg("x").with_context("failfast", "yes");
    assert!(!off.is_fail_fast());
}

#[test]
fn context_round_trips_for_typed_and_foreign_starts() {
    let typed = ErrorKind::Unauthorized.new("denied");
    assert_eq!(
        typed.with_context("k", "v").context_value("k"),
        Some("v")
    );

    let foreign = Error::attach_context(Plain("denied"), "k", "v");
    assert_eq!(foreign.context_value("k"), Some("v"));
}

#[test]
fn kinds_serialize_as_snake_case() {
    let encoded = serde_json::to_string(&ErrorKind::BadRequest).unwrap();
    assert_eq!(encoded, "\"bad_request\"");

    let decoded: ErrorKind = serde_json::from_str("\"invalid_parameter\"").unwrap();
    assert_eq!(decoded, ErrorKind::InvalidParameter);

    assert_eq!(
        serde_json::to_string(&ErrorKind::default()).unwrap(),
        "\"unspecified\""
    );
}

#[test]
fn kinds_display_as_short_phrases() {
    assert_eq!(ErrorKind::NotFound.to_string(), "not found");
    assert_eq!(ErrorKind::MissingParameter.to_string(), "missing parameter");
    assert_eq!(ErrorKind::Unspecified.to_string(), "unspecified");
}
