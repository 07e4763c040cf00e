//! Location identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An opaque delivery point or warehouse identifier.
///
/// The identifier is typically a postal code or address string. An optional
/// alias gives warehouses a display label in reports; equality and hashing
/// use the identifier only.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Location;
///
/// let aldi = Location::new("LA1 1UJ").with_alias("Aldi");
/// assert_eq!(aldi.id(), "LA1 1UJ");
/// assert_eq!(aldi.label(), "Aldi");
/// assert_eq!(aldi, Location::new("LA1 1UJ"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
}

impl Location {
    /// Creates a location from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            alias: None,
        }
    }

    /// Attaches a display alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The identifier passed to oracles.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display alias, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Alias when present, otherwise the identifier.
    pub fn label(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.id)
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<&str> for Location {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Location {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
