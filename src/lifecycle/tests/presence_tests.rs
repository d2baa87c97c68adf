//! Unit tests for the tri-state [`Presence`] optional.

use crate::lifecycle::domain::Presence;
use rstest::rstest;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Doc {
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    label: Presence<String>,
}

// ── Serde mapping ──────────────────────────────────────────────────

#[rstest]
fn missing_key_deserialises_to_absent() {
    let doc: Doc = serde_json::from_value(json!({})).expect("valid document");
    assert_eq!(doc.label, Presence::Absent);
}

#[rstest]
fn explicit_null_deserialises_to_null() {
    let doc: Doc = serde_json::from_value(json!({ "label": null })).expect("valid document");
    assert_eq!(doc.label, Presence::Null);
}

#[rstest]
fn value_deserialises_to_value() {
    let doc: Doc = serde_json::from_value(json!({ "label": "lan" })).expect("valid document");
    assert_eq!(doc.label, Presence::Value("lan".to_owned()));
}

#[rstest]
fn absent_attribute_is_skipped_on_serialisation() {
    let rendered = serde_json::to_value(Doc::default()).expect("serialisable");
    assert_eq!(rendered, json!({}));
}

#[rstest]
fn null_attribute_serialises_as_null() {
    let doc = Doc {
        label: Presence::Null,
    };
    let rendered = serde_json::to_value(doc).expect("serialisable");
    assert_eq!(rendered, json!({ "label": null }));
}

// ── Accessors ──────────────────────────────────────────────────────

#[rstest]
#[case(Presence::Absent, false, None)]
#[case(Presence::Null, true, None)]
#[case(Presence::Value(7), true, Some(7))]
fn state_accessors(#[case] input: Presence<i32>, #[case] set: bool, #[case] value: Option<i32>) {
    assert_eq!(input.is_set(), set);
    assert_eq!(input.value().copied(), value);
    assert_eq!(input.into_value(), value);
}

// ── Delta application ──────────────────────────────────────────────

#[rstest]
#[case(Presence::Absent, Presence::Value(1), Presence::Value(1))]
#[case(Presence::Null, Presence::Value(1), Presence::Absent)]
#[case(Presence::Value(2), Presence::Value(1), Presence::Value(2))]
#[case(Presence::Value(2), Presence::Absent, Presence::Value(2))]
#[case(Presence::Null, Presence::Absent, Presence::Absent)]
fn apply_to_merges_field_level(
    #[case] delta: Presence<i32>,
    #[case] stored: Presence<i32>,
    #[case] expected: Presence<i32>,
) {
    let mut target = stored;
    delta.apply_to(&mut target);
    assert_eq!(target, expected);
}

#[rstest]
fn default_to_fills_absent_and_null_only() {
    let mut absent: Presence<bool> = Presence::Absent;
    absent.default_to(true);
    assert_eq!(absent, Presence::Value(true));

    let mut nulled: Presence<bool> = Presence::Null;
    nulled.default_to(true);
    assert_eq!(nulled, Presence::Value(true));

    let mut set = Presence::Value(false);
    set.default_to(true);
    assert_eq!(set, Presence::Value(false));
}
