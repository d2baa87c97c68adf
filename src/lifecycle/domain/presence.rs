//! Tri-state optional for attribute-bag resource models.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Optional attribute value distinguishing absence from explicit null.
///
/// REST payloads need three states: an attribute the client never
/// mentioned (`Absent`), an attribute explicitly cleared (`Null`), and an
/// attribute carrying a value (`Value`). A containing struct maps a
/// missing key to `Absent` with `#[serde(default)]`, JSON `null` to
/// `Null`, and anything else to `Value`; serialisation is the inverse
/// when the field is guarded with
/// `#[serde(skip_serializing_if = "Presence::is_absent")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence<T> {
    /// The attribute was not mentioned at all.
    Absent,
    /// The attribute was explicitly set to null.
    Null,
    /// The attribute carries a value.
    Value(T),
}

impl<T> Presence<T> {
    /// Reports whether the attribute was never mentioned.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Reports whether the attribute carries client-supplied state, a
    /// value or an explicit null.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        !self.is_absent()
    }

    /// Returns the carried value, when there is one.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Consumes the attribute, returning the carried value when present.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Fills the attribute with `value` unless it already carries one.
    ///
    /// Used on the create path: an attribute the client omitted, or
    /// explicitly nulled, takes the collection default.
    pub fn default_to(&mut self, value: T) {
        if self.value().is_none() {
            *self = Self::Value(value);
        }
    }

    /// Applies this instance as an update delta onto `target`.
    ///
    /// A `Value` overwrites, an explicit `Null` clears the stored
    /// attribute back to `Absent` (the stored model never carries
    /// nulls), and `Absent` leaves the stored attribute untouched.
    pub fn apply_to(self, target: &mut Self) {
        match self {
            Self::Absent => {}
            Self::Null => *target = Self::Absent,
            Self::Value(_) => *target = self,
        }
    }
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Presence<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Value)
    }
}

impl<T: Serialize> Serialize for Presence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => serializer.serialize_some(value),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Presence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Null, Self::Value))
    }
}
