//! Multilingual display names keyed by language tag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Language tag used when a `Name` element carries no `xml:lang` attribute.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Display names keyed by language tag (e.g. `"en"`, `"fr"`).
///
/// Keys are unique per language; inserting a name for a language that is
/// already present replaces the earlier value (last occurrence wins, matching
/// how repeated `Name` elements in a source document are merged). Backed by a
/// `BTreeMap` so iteration and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedNames(BTreeMap<String, String>);

impl LocalizedNames {
    /// Create an empty name map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name for a language, replacing any earlier value.
    pub fn insert(&mut self, language: impl Into<String>, name: impl Into<String>) {
        self.0.insert(language.into(), name.into());
    }

    /// Look up the name for a language tag.
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    /// Number of languages present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(language, name)` pairs in language-tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<L, N> FromIterator<(L, N)> for LocalizedNames
where
    L: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, N)>>(iter: I) -> Self {
        let mut names = Self::new();
        for (language, name) in iter {
            names.insert(language, name);
        }
        names
    }
}
