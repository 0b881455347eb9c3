//! # Profilekit Editor
//!
//! Core document editing engine for profilekit.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: components, archetypes, templates  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Initialize from archetype / template     │
//! │  - Apply mutations with validation          │
//! │  - Undo / redo over document snapshots      │
//! │  - Coordinate mutate → render pipeline      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: Document → text                   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Documents are values**: every mutation returns a new document
//! 2. **Ids, not references**: sections point at catalog entries by id
//! 3. **Single writer**: one session owns one document; no internal locking
//! 4. **Errors are values**: nothing here panics on bad input
//!
//! ## Usage
//!
//! ```rust,ignore
//! use profilekit_editor::{EditSession, Mutation};
//!
//! let catalog = Arc::new(Catalog::builtin()?);
//! let mut session = EditSession::start("local", catalog, "builder", None)?;
//!
//! session.apply(&Mutation::AddSection {
//!     component_id: "quote".to_string(),
//!     position: 0,
//! })?;
//! session.undo()?;
//!
//! println!("{}", session.preview().text);
//! ```

mod composer;
mod errors;
mod history;
mod mutations;
mod session;
mod storage;

pub use composer::{
    add_section, initialize, remove_section, reorder_sections, replace_component,
    update_field_value,
};
pub use errors::EditorError;
pub use history::{History, HistoryError, Snapshot};
pub use mutations::{Mutation, MutationError};
pub use session::EditSession;
pub use storage::{load_document, save_document, SavedDocument, FORMAT_VERSION};

// Re-export common types for convenience
pub use profilekit_document::{Document, SectionInstance};
pub use profilekit_renderer::{effective_values, render, ProfileVariables, RenderDiagnostic, RenderOutput};
