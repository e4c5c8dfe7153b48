//! Application descriptors read from the app list.

use serde::Deserialize;
use serde_json::Value;

/// One application in the app list.
///
/// Both fields are optional. The position of the descriptor in the list
/// is its only identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppDescriptor {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Launch URL
    #[serde(default)]
    pub url: Option<String>,
}

impl AppDescriptor {
    #[cfg(test)]
    pub(crate) fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: Some(url.into()),
        }
    }

    /// Read a descriptor from an arbitrary JSON entry.
    ///
    /// Never fails: fields that are missing, empty or not strings are
    /// treated as absent, and non-object entries yield an empty descriptor.
    pub fn from_entry(entry: &Value) -> Self {
        let field = |key: &str| {
            entry
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            name: field("name"),
            url: field("url"),
        }
    }

    /// The name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// The URL, if present and non-empty.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|s| !s.is_empty())
    }
}
