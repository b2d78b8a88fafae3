//! Locale source-record metadata.

use serde::{Deserialize, Serialize};

/// Metadata attached to a locale source record. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Translators, in source order.
    #[serde(default)]
    pub translators: Vec<Translator>,

    /// Rights statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<String>,

    /// Last-updated timestamp, as written in the source record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// A translator descriptor: a name with an optional contact address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translator {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metadata_is_empty() {
        let metadata = Metadata::default();
        assert!(metadata.translators.is_empty());
        assert!(metadata.rights.is_none());
        assert!(metadata.updated.is_none());
    }
}
