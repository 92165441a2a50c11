use thiserror::Error;

/// Error type for record store operations.
#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),
    #[error("store initialization error: {0}")]
    Initialization(String),
    #[error("query error: {0}")]
    Query(String),
    #[error("insert error: {0}")]
    Insert(String),
    #[error("identifier collision, could not generate a fresh id")]
    Duplicate,
    #[error("close error: {0}")]
    Close(String),
}
