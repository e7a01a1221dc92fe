// models/src/keys.rs

use core::ops::Deref;
use std::{cmp::Ordering, convert::Infallible, fmt, str::FromStr};

use internment::Intern;
use serde::{Deserialize, Serialize};

/// A vertex key. Keys are interned strings that uniquely identify a
/// vertex within a graph; comparison is byte-wise and case-sensitive.
/// Interning keeps the key `Copy` and makes the repeated equality checks
/// of the adjacency index cheap.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VertexKey(pub Intern<String>);

impl VertexKey {
    /// Creates a new key. Any string is a valid key; uniqueness within a
    /// graph is the store's concern, not the key's.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Intern::new(value.into()))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for VertexKey {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for VertexKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl From<&str> for VertexKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VertexKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl FromStr for VertexKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<VertexKey> for String {
    fn from(value: VertexKey) -> Self {
        value.0.to_string()
    }
}

impl PartialOrd for VertexKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VertexKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.as_str().cmp(other.0.as_str())
    }
}
