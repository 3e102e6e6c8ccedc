//! JSON structure reading.
//!
//! Parses JSON text into a loosely-shaped [`Structure`], e.g. `[["region", "sales"],
//! ["North", 1000]]`, whose shape can then be inspected or converted into a typed
//! [`crate::types::DataFrame`] / [`crate::types::Dataset`].

use std::path::Path;

use crate::error::{DfrError, DfrResult};
use crate::types::Structure;

/// Parse a JSON document into a [`Structure`].
pub fn read_structure_from_str(text: &str) -> DfrResult<Structure> {
    let value = serde_json::from_str::<serde_json::Value>(text)?;
    Ok(Structure::from(value))
}

/// Read and parse a JSON file into a [`Structure`].
pub fn read_structure_from_path(path: impl AsRef<Path>) -> DfrResult<Structure> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DfrError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    read_structure_from_str(&text)
}
