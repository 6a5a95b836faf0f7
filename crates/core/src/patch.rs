//! Presence-aware optional field for partial updates.

use serde::{Deserialize, Deserializer};

/// One field of a partial update.
///
/// Distinguishes a key that was left out of the payload from one sent as
/// JSON `null`. Use with `#[serde(default)]` so absent keys become `Missing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPatch<T> {
    /// Key absent: keep the stored value.
    Missing,
    /// Key present with `null`.
    Null,
    /// Key present with a value.
    Value(T),
}

impl<T> FieldPatch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Missing | Self::Null => None,
        }
    }
}

impl<T> Default for FieldPatch<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T> From<T> for FieldPatch<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<'de, T> Deserialize<'de> for FieldPatch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Self::Value(v),
            None => Self::Null,
        })
    }
}
