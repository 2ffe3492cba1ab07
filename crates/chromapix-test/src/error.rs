//! Error types for the test harness

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build an in-memory image
    #[error("failed to build image '{name}': {message}")]
    ImageBuild { name: String, message: String },

    /// Failed to encode an image
    #[error("failed to encode image '{name}': {message}")]
    ImageEncode { name: String, message: String },
}

/// Result type for harness operations
pub type TestResult<T> = Result<T, TestError>;
