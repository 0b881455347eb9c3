//! # Edit Session
//!
//! One user's editing session: the catalog, the document history, the
//! profile variables and a cached live preview.
//!
//! ```text
//! mutation ─→ History ─→ current Document ─→ render ─→ preview
//!                ↑ undo / redo                  ↑ skipped when the
//!                                                 document is unchanged
//! ```

use crate::composer::initialize;
use crate::errors::EditorError;
use crate::history::History;
use crate::mutations::Mutation;
use crate::storage;
use profilekit_catalog::Catalog;
use profilekit_document::Document;
use profilekit_renderer::{render, ProfileVariables, RenderOutput};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Single editing session over one document
pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    catalog: Arc<Catalog>,

    history: History,

    variables: ProfileVariables,

    /// Last rendered document and its output
    preview: Option<(Document, RenderOutput)>,
}

impl EditSession {
    /// Create a session over an existing document
    pub fn new(id: impl Into<String>, catalog: Arc<Catalog>, document: Document) -> Self {
        Self {
            id: id.into(),
            catalog,
            history: History::new(document),
            variables: ProfileVariables::new(),
            preview: None,
        }
    }

    /// Start a session from an archetype (and optional template)
    pub fn start(
        id: impl Into<String>,
        catalog: Arc<Catalog>,
        archetype_id: &str,
        template_id: Option<&str>,
    ) -> Result<Self, EditorError> {
        let document = initialize(catalog.as_ref(), archetype_id, template_id)?;
        Ok(Self::new(id, catalog, document))
    }

    /// Resume a session from a saved document file
    pub fn open(
        id: impl Into<String>,
        catalog: Arc<Catalog>,
        path: &Path,
    ) -> Result<Self, EditorError> {
        let document = storage::load_document(path)?;
        Ok(Self::new(id, catalog, document))
    }

    /// Limit the number of undo levels (0 = unlimited); drops existing history
    pub fn with_history_limit(mut self, max_levels: usize) -> Self {
        let document = self.history.current().clone();
        self.history = History::with_max_levels(document, max_levels);
        self
    }

    pub fn with_variables(mut self, variables: ProfileVariables) -> Self {
        self.set_variables(variables);
        self
    }

    pub fn document(&self) -> &Document {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn variables(&self) -> &ProfileVariables {
        &self.variables
    }

    pub fn set_variables(&mut self, variables: ProfileVariables) {
        self.variables = variables;
        self.preview = None;
    }

    /// Apply a mutation and record it for undo
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn apply(&mut self, mutation: &Mutation) -> Result<&Document, EditorError> {
        let doc = self.history.apply(mutation, self.catalog.as_ref())?;
        debug!(sections = doc.len(), "Mutation applied");
        Ok(doc)
    }

    pub fn undo(&mut self) -> Result<&Document, EditorError> {
        Ok(self.history.undo()?)
    }

    pub fn redo(&mut self) -> Result<&Document, EditorError> {
        Ok(self.history.redo()?)
    }

    /// Start over from an archetype (and optional template); clears history
    pub fn reset(&mut self, archetype_id: &str, template_id: Option<&str>) -> Result<(), EditorError> {
        let document = initialize(self.catalog.as_ref(), archetype_id, template_id)?;
        self.history.reset(document);
        Ok(())
    }

    /// Rendered output for the current document.
    ///
    /// Re-renders only when the document changed since the last call.
    pub fn preview(&mut self) -> &RenderOutput {
        let current = self.history.current();
        if let Some((rendered, _)) = &self.preview {
            if !rendered.is_same(current) {
                self.preview = None;
            }
        }

        let (_, output) = self.preview.get_or_insert_with(|| {
            debug!(session = %self.id, "Re-rendering preview");
            let output = render(current, self.catalog.as_ref(), &self.variables);
            (current.clone(), output)
        });
        output
    }

    /// Save the current document to disk
    pub fn save(&self, path: &Path) -> Result<(), EditorError> {
        storage::save_document(path, self.history.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditSession {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        EditSession::start("client-1", catalog, "minimalist", None).unwrap()
    }

    #[test]
    fn test_session_creation() {
        let session = session();
        assert_eq!(session.id, "client-1");
        assert_eq!(session.document().archetype_id, "minimalist");
        assert!(!session.history().can_undo());
    }

    #[test]
    fn test_preview_tracks_edits() {
        let mut session = session()
            .with_variables(ProfileVariables::new().with("name", "Ada"));
        assert!(session.preview().text.starts_with("# Ada\n"));

        let header = session.document().sections()[0].id.clone();
        session
            .apply(&Mutation::UpdateFieldValue {
                section_id: header,
                field: "title".to_string(),
                value: "Lovelace".to_string(),
            })
            .unwrap();
        assert!(session.preview().text.starts_with("# Lovelace\n"));

        session.undo().unwrap();
        assert!(session.preview().text.starts_with("# Ada\n"));
    }

    #[test]
    fn test_variables_invalidate_preview() {
        let mut session = session();
        assert!(session.preview().text.starts_with("# {{name}}"));

        session.set_variables(ProfileVariables::new().with("name", "Grace"));
        assert!(session.preview().text.starts_with("# Grace"));
    }

    #[test]
    fn test_reset_starts_over() {
        let mut session = session();
        session
            .apply(&Mutation::AddSection {
                component_id: "quote".to_string(),
                position: 0,
            })
            .unwrap();

        session.reset("builder", Some("rust-systems-engineer")).unwrap();
        assert_eq!(session.document().template_id.as_deref(), Some("rust-systems-engineer"));
        assert!(!session.history().can_undo());
    }

    #[test]
    fn test_undo_on_fresh_session_fails() {
        let mut session = session();
        assert!(matches!(
            session.undo(),
            Err(EditorError::History(crate::HistoryError::NothingToUndo))
        ));
    }
}
