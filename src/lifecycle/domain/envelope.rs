//! Request envelope carrying one resource or a bulk list.

use serde::{Deserialize, Serialize};

/// Payload of a create or update request.
///
/// The two shapes are mutually exclusive: a request is a singleton or a
/// bulk list, never both. Responses reuse the envelope so callers get
/// back the shape they sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceEnvelope<T> {
    /// A single resource payload.
    Single(T),
    /// A bulk list payload.
    Bulk(Vec<T>),
}

impl<T> ResourceEnvelope<T> {
    /// Reports whether the envelope carries a single resource.
    #[must_use]
    pub const fn is_singleton(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// Returns the singleton payload, or `None` for a bulk envelope.
    #[must_use]
    pub fn into_single(self) -> Option<T> {
        match self {
            Self::Single(item) => Some(item),
            Self::Bulk(_) => None,
        }
    }

    /// Consumes the envelope into its items regardless of shape.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Single(item) => vec![item],
            Self::Bulk(items) => items,
        }
    }

    /// Returns the carried items regardless of shape.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Single(item) => std::slice::from_ref(item),
            Self::Bulk(items) => items,
        }
    }
}
