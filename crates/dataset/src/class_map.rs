use std::collections::HashMap;
use std::path::Path;

use lidarseg_core::ClassId;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name reported for ids missing from the map.
pub const UNKNOWN_CLASS: &str = "Unknown";

/// Class id → human-readable name, keyed by the id's decimal string as in
/// the dataset's `classes.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassMap {
    names: HashMap<String, String>,
}

impl ClassMap {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn insert(&mut self, id: ClassId, name: impl Into<String>) {
        self.names.insert(id.to_string(), name.into());
    }

    pub fn name(&self, id: ClassId) -> &str {
        self.names
            .get(&id.to_string())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_back_to_unknown() {
        let map = ClassMap::from_json_str(r#"{"1": "Smoke", "7": "Road"}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.name(7), "Road");
        assert_eq!(map.name(42), UNKNOWN_CLASS);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ClassMap::from_json_str("[1, 2]").is_err());
    }
}
