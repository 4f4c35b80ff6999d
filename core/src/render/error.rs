//! Error types for grid rendering

use thiserror::Error;

/// A document operation failed while building the grid.
///
/// `reason` carries whatever the host reported; for the browser that is the
/// stringified JS exception.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create <{tag}> element: {reason}")]
    CreateElement { tag: String, reason: String },

    #[error("failed to append child element: {reason}")]
    AppendChild { reason: String },

    #[error("failed to register click listener: {reason}")]
    AddListener { reason: String },
}
