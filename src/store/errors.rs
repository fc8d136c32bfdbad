//! # Store Errors
//!
//! Error types for product store operations.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Product store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Referenced id is absent from the collection
    #[error("Product not found")]
    NotFound,

    /// The store lock was poisoned by a panicking writer
    #[error("Product store lock poisoned")]
    Poisoned,
}
