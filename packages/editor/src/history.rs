//! # Undo/Redo History
//!
//! Tracks document versions and enables undo/redo.
//!
//! ## Design
//!
//! - History owns the current document plus two stacks of snapshots
//! - Each successful mutation pushes the pre-mutation document onto the
//!   undo stack and clears the redo stack
//! - Undo pops the undo stack and pushes the current document onto the redo
//!   stack; redo is the mirror
//! - Snapshots are whole `Document` values. Documents are never modified in
//!   place, so a snapshot costs one `Arc` clone
//! - Batches group several mutations into one undo step
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(initialize(&catalog, "builder", None)?);
//!
//! history.apply(&mutation, &catalog)?;
//! history.undo()?;
//! history.redo()?;
//! ```

use crate::mutations::{Mutation, MutationError};
use profilekit_catalog::ComponentLookup;
use profilekit_document::Document;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,
}

/// A stored document version and the label of the step that left it
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub document: Document,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
struct Batch {
    start: Document,
    description: Option<String>,
    dirty: bool,
}

/// Undo/redo history for one document
#[derive(Debug, Clone)]
pub struct History {
    current: Document,

    /// Earlier versions (most recent last)
    past: Vec<Snapshot>,

    /// Undone versions (most recent last)
    future: Vec<Snapshot>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    batch: Option<Batch>,
}

impl History {
    /// Create a history with no limit on undo levels
    pub fn new(document: Document) -> Self {
        Self::with_max_levels(document, 0)
    }

    pub fn with_max_levels(document: Document, max_levels: usize) -> Self {
        Self {
            current: document,
            past: Vec::new(),
            future: Vec::new(),
            max_levels,
            batch: None,
        }
    }

    pub fn current(&self) -> &Document {
        &self.current
    }

    /// Apply a mutation to the current document and record it
    pub fn apply<C>(&mut self, mutation: &Mutation, components: &C) -> Result<&Document, MutationError>
    where
        C: ComponentLookup + ?Sized,
    {
        let next = mutation.apply(&self.current, components)?;
        self.commit(next, Some(mutation.describe()));
        Ok(&self.current)
    }

    /// Record `next` as the new current document
    pub fn commit(&mut self, next: Document, description: Option<String>) {
        let previous = std::mem::replace(&mut self.current, next);
        self.future.clear();

        match &mut self.batch {
            Some(batch) => batch.dirty = true,
            None => self.push_past(Snapshot {
                document: previous,
                description,
            }),
        }
    }

    /// Start a batch of mutations (undone/redone together)
    pub fn begin_batch(&mut self, description: Option<String>) {
        if self.batch.is_none() {
            self.batch = Some(Batch {
                start: self.current.clone(),
                description,
                dirty: false,
            });
        }
    }

    /// End the current batch and push it to the undo stack
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.batch.take() {
            if batch.dirty {
                self.push_past(Snapshot {
                    document: batch.start,
                    description: batch.description,
                });
            }
        }
    }

    pub fn is_batching(&self) -> bool {
        self.batch.is_some()
    }

    fn push_past(&mut self, snapshot: Snapshot) {
        self.past.push(snapshot);

        if self.max_levels > 0 && self.past.len() > self.max_levels {
            self.past.remove(0);
        }
    }

    /// Restore the previous version
    pub fn undo(&mut self) -> Result<&Document, HistoryError> {
        self.end_batch();

        let snapshot = self.past.pop().ok_or(HistoryError::NothingToUndo)?;
        let undone = std::mem::replace(&mut self.current, snapshot.document);
        self.future.push(Snapshot {
            document: undone,
            description: snapshot.description,
        });

        Ok(&self.current)
    }

    /// Re-apply the most recently undone version
    pub fn redo(&mut self) -> Result<&Document, HistoryError> {
        self.end_batch();

        let snapshot = self.future.pop().ok_or(HistoryError::NothingToRedo)?;
        let redone = std::mem::replace(&mut self.current, snapshot.document);
        self.past.push(Snapshot {
            document: redone,
            description: snapshot.description,
        });

        Ok(&self.current)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    /// Label of the step the next undo would revert
    pub fn undo_description(&self) -> Option<&str> {
        self.past.last().and_then(|s| s.description.as_deref())
    }

    /// Label of the step the next redo would re-apply
    pub fn redo_description(&self) -> Option<&str> {
        self.future.last().and_then(|s| s.description.as_deref())
    }

    /// Clear all undo/redo history, keeping the current document
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.batch = None;
    }

    /// Replace the current document and drop all history
    pub fn reset(&mut self, document: Document) {
        self.current = document;
        self.clear();
    }
}
