//! Saving and loading documents as JSON files.
//!
//! Files wrap the document in a small envelope carrying a format version and
//! the time it was written. Loading rejects files whose section ids collide
//! and moves the id counter past every id already in use.

use crate::errors::EditorError;
use chrono::{DateTime, Utc};
use profilekit_document::Document;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current document file format version
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDocument {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub document: Document,
}

impl SavedDocument {
    pub fn new(document: Document) -> Self {
        Self {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            document,
        }
    }
}

pub fn save_document(path: &Path, document: &Document) -> Result<(), EditorError> {
    let saved = SavedDocument::new(document.clone());
    let json = serde_json::to_string_pretty(&saved)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, json)?;

    tracing::debug!(path = %path.display(), sections = document.len(), "Document saved");
    Ok(())
}

pub fn load_document(path: &Path) -> Result<Document, EditorError> {
    let source = std::fs::read_to_string(path)?;
    let saved: SavedDocument = serde_json::from_str(&source)?;

    if saved.version != FORMAT_VERSION {
        return Err(EditorError::UnsupportedVersion(saved.version));
    }

    if let Some(id) = saved.document.duplicate_section_id() {
        return Err(EditorError::DuplicateSection(id.to_string()));
    }

    Ok(saved.document.with_synced_ids())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::{add_section, initialize};
    use profilekit_catalog::Catalog;
    use std::collections::HashSet;

    fn write_tampered(path: &Path, doc: &Document, edit: impl FnOnce(&mut serde_json::Value)) {
        let mut value = serde_json::to_value(SavedDocument::new(doc.clone())).unwrap();
        edit(&mut value);
        std::fs::write(path, serde_json::to_string(&value).unwrap()).unwrap();
    }

    #[test]
    fn test_save_and_load() {
        let catalog = Catalog::builtin().unwrap();
        let doc = initialize(&catalog, "builder", Some("rust-systems-engineer")).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("profile.json");

        save_document(&path, &doc).unwrap();
        let loaded = load_document(&path).unwrap();

        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let catalog = Catalog::builtin().unwrap();
        let doc = initialize(&catalog, "minimalist", None).unwrap();

        let mut saved = SavedDocument::new(doc);
        saved.version = 99;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, serde_json::to_string(&saved).unwrap()).unwrap();

        assert!(matches!(
            load_document(&path),
            Err(EditorError::UnsupportedVersion(99))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_document(&dir.path().join("absent.json")),
            Err(EditorError::Io(_))
        ));
    }

    #[test]
    fn test_stale_id_counter_is_moved_past_existing_ids() {
        let catalog = Catalog::builtin().unwrap();
        let doc = initialize(&catalog, "builder", None).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        write_tampered(&path, &doc, |value| {
            value["document"]["ids"]["count"] = serde_json::json!(0);
        });

        let loaded = load_document(&path).unwrap();
        let next = add_section(&loaded, &catalog, "quote", loaded.len()).unwrap();

        assert_eq!(next.len(), doc.len() + 1);
        let unique: HashSet<&str> = next.section_ids().into_iter().collect();
        assert_eq!(unique.len(), next.len());
    }

    #[test]
    fn test_rejects_duplicate_section_ids() {
        let catalog = Catalog::builtin().unwrap();
        let doc = initialize(&catalog, "builder", None).unwrap();
        let first = doc.sections()[0].id.clone();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        write_tampered(&path, &doc, |value| {
            value["document"]["sections"][1]["id"] = serde_json::json!(first);
        });

        assert!(matches!(
            load_document(&path),
            Err(EditorError::DuplicateSection(id)) if id == first
        ));
    }
}
