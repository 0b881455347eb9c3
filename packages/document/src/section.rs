use profilekit_catalog::SectionSeed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One placement of a component inside a document.
///
/// Every key in `values` is a field declared by the referenced component.
/// Fields without an entry take their default at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInstance {
    /// Unique within the document, never a catalog id
    pub id: String,

    pub component_id: String,

    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl SectionInstance {
    pub fn new(id: impl Into<String>, component_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_id: component_id.into(),
            values: BTreeMap::new(),
        }
    }

    /// Deep copy of a catalog seed under a fresh instance id
    pub fn from_seed(id: impl Into<String>, seed: &SectionSeed) -> Self {
        Self {
            id: id.into(),
            component_id: seed.component_id.clone(),
            values: seed.values.clone(),
        }
    }

    /// Explicitly set value for a field (defaults are not consulted)
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
