use thiserror::Error;
use todo_store::StoreError;

/// Why an invocation could not produce a response.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The object could not be read from storage
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The object is not UTF-8 text
    #[error("object is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// The object text is not a JSON document
    #[error("object is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
