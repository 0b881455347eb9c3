//! Catalog shipped with the crate

use crate::catalog::Catalog;
use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

impl Catalog {
    /// Load the built-in catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }
}
