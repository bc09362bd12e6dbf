//! Error types for overlay construction.

use crate::event::{ArtistId, FrameId};
use thiserror::Error;

/// Errors raised while constructing a draggable.
///
/// Event handling never produces these: a press, motion or release that
/// cannot be acted on is a no-op.
#[derive(Debug, Error)]
pub enum DragError {
    #[error("Unsupported orientation '{0}': expected 'horizontal' or 'vertical'")]
    InvalidOrientation(String),
    #[error("Frame not found: {0}")]
    UnknownFrame(FrameId),
    #[error("Artist not found: {0}")]
    UnknownArtist(ArtistId),
    #[error("Artist is not a patch: {0}")]
    NotAPatch(ArtistId),
}

/// Result type for overlay construction.
pub type DragResult<T> = Result<T, DragError>;
