use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("Directory traversal failed: {0}")]
    TraversalError(String),

    #[error("Serialization failed: {0}")]
    SerializationError(String),

    #[error("Could not read file list: {0}")]
    InputListError(String),
}

impl From<serde_json::Error> for ClipboardError {
    fn from(err: serde_json::Error) -> Self {
        ClipboardError::SerializationError(err.to_string())
    }
}

impl From<csv::Error> for ClipboardError {
    fn from(err: csv::Error) -> Self {
        ClipboardError::InputListError(err.to_string())
    }
}
