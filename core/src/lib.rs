//! Letter dataset and grid renderer for Alifba
//!
//! - [`alphabet`]: the letter dataset, loaded from TOML and checked for
//!   inconsistencies
//! - [`audio`]: the injectable playback capability
//! - [`render`]: builds the clickable letter grid on top of any [`Document`]

pub mod alphabet;
pub mod audio;
pub mod render;

// Re-exports for convenience
pub use alifba_types::{AudioLayout, ClipKind, FormPosition, GridConfig, Letter};
pub use alphabet::{Alphabet, AlphabetError, DatasetIssue};
pub use audio::{Player, RecordingPlayer, SilentPlayer};
pub use render::{
    ClickEvent, ClickListener, Document, MemoryDocument, NodeId, RenderError, mount, render,
};
