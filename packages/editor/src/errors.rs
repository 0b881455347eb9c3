//! Error types for the editor

use crate::history::HistoryError;
use crate::mutations::MutationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported document file version {0}")]
    UnsupportedVersion(u32),
    #[error("Duplicate section id '{0}' in document file")]
    DuplicateSection(String),
}
