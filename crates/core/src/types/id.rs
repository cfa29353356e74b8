//! Store identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A stable store identifier, unique within a catalog.
///
/// Identifiers are upstream slugs such as `"chanel-57th"` or
/// `"bergdorf-goodman"`. They are opaque to the type system but the
/// engine derives the daily sale assignment from their digits, so the
/// identifier must never change once a store is published.
///
/// ## Examples
///
/// ```
/// use gilded_avenue_core::StoreId;
///
/// let id = StoreId::new("chanel-57th");
/// assert_eq!(id.as_str(), "chanel-57th");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct StoreId(String);

impl StoreId {
    /// Create a new store identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `StoreId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StoreId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for StoreId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_serde_as_a_bare_string() {
        let id = StoreId::new("chanel-57th");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"chanel-57th\"");
        let back: StoreId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn displays_as_the_raw_slug() {
        assert_eq!(StoreId::new("gucci-5th").to_string(), "gucci-5th");
    }
}
