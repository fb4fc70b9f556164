//! Structured error types for gridview.

/// All errors that can occur while rendering rows or handling clipboard intents.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Copy or paste was requested with neither a selection nor a focused cell.
    ///
    /// This is a caller precondition violation: the grid must have a focus
    /// before clipboard intents are dispatched.
    #[error("no selection and no focused cell")]
    NoFocus,

    /// The focused row key does not resolve to a row in the data model.
    #[error("row not found: {0}")]
    RowNotFound(String),

    /// A column name is not present in the column model.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Paste text decoded to zero cells.
    #[error("clipboard text contains no cells")]
    EmptyPaste,

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
