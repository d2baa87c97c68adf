//! Pagination of filtered result sets.
//!
//! A page is constructed per read request from the already-filtered
//! in-memory result list; nothing here is persisted. Markers are
//! resource identifiers: forwards, the marker names the first element of
//! the requested slice; backwards, it is the exclusive upper boundary.

use super::resource::Resource;
use serde::Serialize;
use thiserror::Error;

/// Client pagination parameters for a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of entries per page; `0` disables pagination.
    pub limit: usize,
    /// Identifier of the boundary element to resume from.
    pub marker: Option<String>,
    /// Walk backwards from the marker instead of forwards.
    pub reverse: bool,
    /// Base address used to construct navigation hrefs.
    pub base: String,
}

impl PageRequest {
    /// Creates a forward request for the first page of `limit` entries.
    #[must_use]
    pub fn first(limit: usize, base: impl Into<String>) -> Self {
        Self {
            limit,
            marker: None,
            reverse: false,
            base: base.into(),
        }
    }
}

/// Link relation carried on a navigation reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkRel {
    /// The page after this one.
    Next,
    /// The page before this one.
    Previous,
}

/// Navigation reference attached to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Link relation.
    pub rel: LinkRel,
    /// Address of the adjacent page.
    pub href: String,
    /// Marker identifying the adjacent page's boundary element.
    pub marker: String,
}

/// Bounded slice of a filtered result set plus navigation references.
///
/// Ephemeral: constructed per read request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Entries on this page.
    pub items: Vec<T>,
    /// Navigation links; empty when the result fits a single page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<PageLink>,
}

impl<T> Page<T> {
    /// Wraps a full result set as a single unpaginated page.
    #[must_use]
    pub const fn single(items: Vec<T>) -> Self {
        Self {
            items,
            links: Vec::new(),
        }
    }
}

/// Errors raised for malformed pagination requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    /// The resume marker does not identify any element of the result set.
    #[error("pagination marker '{0}' is not in the result set")]
    MarkerNotFound(String),
}

/// Slices `items` according to `request` and builds navigation links.
///
/// A `limit` of `0` returns the whole list as one page. The `next` link
/// carries the identifier of the first element beyond the page; the
/// `previous` link carries the identifier of the first element of the
/// page, to be followed with the reverse flag set.
///
/// # Errors
///
/// Returns [`PageError::MarkerNotFound`] when the marker names no
/// element of the result set.
pub fn paginate<T: Resource>(items: Vec<T>, request: &PageRequest) -> Result<Page<T>, PageError> {
    if request.limit == 0 {
        return Ok(Page::single(items));
    }

    let len = items.len();
    let (start, end) = match &request.marker {
        None if request.reverse => (len.saturating_sub(request.limit), len),
        None => (0, request.limit.min(len)),
        Some(marker) => {
            let anchor = items
                .iter()
                .position(|item| item.id() == Some(marker.as_str()))
                .ok_or_else(|| PageError::MarkerNotFound(marker.clone()))?;
            if request.reverse {
                (anchor.saturating_sub(request.limit), anchor)
            } else {
                (anchor, anchor.saturating_add(request.limit).min(len))
            }
        }
    };

    let mut links = Vec::new();
    if let Some(marker) = items.get(end).and_then(Resource::id) {
        links.push(PageLink {
            rel: LinkRel::Next,
            href: format!(
                "{}?limit={}&marker={marker}",
                request.base, request.limit
            ),
            marker: marker.to_owned(),
        });
    }
    if start > 0
        && let Some(marker) = items.get(start).and_then(Resource::id)
    {
        links.push(PageLink {
            rel: LinkRel::Previous,
            href: format!(
                "{}?limit={}&marker={marker}&page_reverse=true",
                request.base, request.limit
            ),
            marker: marker.to_owned(),
        });
    }

    let entries: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect();
    Ok(Page {
        items: entries,
        links,
    })
}
