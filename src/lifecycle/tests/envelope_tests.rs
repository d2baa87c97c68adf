//! Unit tests for the request envelope shapes.

use crate::lifecycle::domain::ResourceEnvelope;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn single_object_deserialises_to_singleton() {
    let envelope: ResourceEnvelope<u32> =
        serde_json::from_value(json!(5)).expect("valid envelope");
    assert!(envelope.is_singleton());
    assert_eq!(envelope.into_single(), Some(5));
}

#[rstest]
fn list_deserialises_to_bulk() {
    let envelope: ResourceEnvelope<u32> =
        serde_json::from_value(json!([5, 6])).expect("valid envelope");
    assert!(!envelope.is_singleton());
    assert_eq!(envelope.into_single(), None);
}

#[rstest]
#[case(ResourceEnvelope::Single(5), vec![5])]
#[case(ResourceEnvelope::Bulk(vec![5, 6]), vec![5, 6])]
fn items_are_shape_agnostic(#[case] envelope: ResourceEnvelope<u32>, #[case] expected: Vec<u32>) {
    assert_eq!(envelope.items(), expected.as_slice());
    assert_eq!(envelope.into_items(), expected);
}
