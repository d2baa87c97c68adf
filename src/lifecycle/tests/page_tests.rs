//! Unit tests for pagination slicing and navigation links.

use crate::lifecycle::domain::{LinkRel, PageError, PageRequest, Resource, paginate};
use rstest::rstest;

/// Minimal resource for exercising the pagination helper.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Item {
    id: Option<String>,
}

impl Item {
    fn new(id: &str) -> Self {
        Self {
            id: Some(id.to_owned()),
        }
    }
}

impl Resource for Item {
    type Filter = ();

    const COLLECTION: &'static str = "item";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn apply_defaults(&mut self) {}

    fn matches(&self, _filter: &()) -> bool {
        true
    }

    fn project(&self, _fields: &[String]) -> Self {
        self.clone()
    }

    fn has_field(&self, _field: &str) -> bool {
        false
    }
}

fn three_items() -> Vec<Item> {
    vec![Item::new("a"), Item::new("b"), Item::new("c")]
}

fn request(limit: usize, marker: Option<&str>, reverse: bool) -> PageRequest {
    PageRequest {
        limit,
        marker: marker.map(str::to_owned),
        reverse,
        base: "/v2/items".to_owned(),
    }
}

#[rstest]
fn limit_zero_returns_everything_unpaginated() {
    let page = paginate(three_items(), &request(0, None, false)).expect("pagination succeeds");
    assert_eq!(page.items.len(), 3);
    assert!(page.links.is_empty());
}

#[rstest]
fn first_page_of_three_with_limit_one() {
    let page = paginate(three_items(), &request(1, None, false)).expect("pagination succeeds");

    assert_eq!(page.items, vec![Item::new("a")]);
    assert_eq!(page.links.len(), 1);
    let next = page.links.first().expect("next link");
    assert_eq!(next.rel, LinkRel::Next);
    assert_eq!(next.marker, "b");
    assert_eq!(next.href, "/v2/items?limit=1&marker=b");
}

#[rstest]
fn middle_page_links_both_ways() {
    let page =
        paginate(three_items(), &request(1, Some("b"), false)).expect("pagination succeeds");

    assert_eq!(page.items, vec![Item::new("b")]);
    assert_eq!(page.links.len(), 2);
    let next = page.links.first().expect("next link");
    assert_eq!((next.rel, next.marker.as_str()), (LinkRel::Next, "c"));
    let previous = page.links.get(1).expect("previous link");
    assert_eq!(
        (previous.rel, previous.marker.as_str()),
        (LinkRel::Previous, "b")
    );
    assert_eq!(previous.href, "/v2/items?limit=1&marker=b&page_reverse=true");
}

#[rstest]
fn last_page_has_no_next_link() {
    let page =
        paginate(three_items(), &request(1, Some("c"), false)).expect("pagination succeeds");

    assert_eq!(page.items, vec![Item::new("c")]);
    assert_eq!(page.links.len(), 1);
    let previous = page.links.first().expect("previous link");
    assert_eq!(previous.rel, LinkRel::Previous);
}

#[rstest]
fn reverse_from_marker_returns_preceding_slice() {
    let page = paginate(three_items(), &request(1, Some("b"), true)).expect("pagination succeeds");
    assert_eq!(page.items, vec![Item::new("a")]);
}

#[rstest]
fn reverse_without_marker_returns_last_page() {
    let page = paginate(three_items(), &request(2, None, true)).expect("pagination succeeds");
    assert_eq!(page.items, vec![Item::new("b"), Item::new("c")]);
}

#[rstest]
fn unknown_marker_is_a_client_error() {
    let result = paginate(three_items(), &request(1, Some("zz"), false));
    assert!(matches!(result, Err(PageError::MarkerNotFound(marker)) if marker == "zz"));
}

#[rstest]
#[case(2, vec!["a", "b"])]
#[case(3, vec!["a", "b", "c"])]
#[case(9, vec!["a", "b", "c"])]
fn limit_bounds_the_first_page(#[case] limit: usize, #[case] expected: Vec<&str>) {
    let page = paginate(three_items(), &request(limit, None, false)).expect("pagination succeeds");
    let ids: Vec<_> = page.items.iter().filter_map(Resource::id).collect();
    assert_eq!(ids, expected);
}
