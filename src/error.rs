//! Structured error types for gridstore.
//!
//! Every fallible operation in the crate reports through [`GridError`];
//! failures are programmer errors from the caller's side, never transient
//! conditions, so there is no retry or recovery path.

use crate::types::{Frame, Point};

/// All errors that can occur when addressing or bulk-transferring grid data.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A serialized location was neither a point, a coordinate pair, nor a
    /// parseable cell reference.
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// A read, or a bulk load's computed region, falls outside the declared
    /// bounds.
    #[error("Location {point} is outside the grid bounds {bounds}")]
    OutOfBounds { point: Point, bounds: Frame },

    /// A supplied frame is not contained within the store's bounds.
    #[error("Frame {frame} is not contained in the grid bounds {bounds}")]
    NotContained { frame: Frame, bounds: Frame },

    /// A frame was constructed with its corner above or left of its origin.
    #[error("Invalid frame bounds: corner {corner} precedes origin {origin}")]
    InvalidBounds { origin: Point, corner: Point },

    /// An extent derivation was attempted on a store with no entries.
    #[error("Store has no entries to derive an extent from")]
    EmptyStore,

    /// A bulk load's input rows have unequal lengths.
    #[error("Ragged input: row {row} has {len} values, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Catch-all for string errors at the outer surfaces.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
