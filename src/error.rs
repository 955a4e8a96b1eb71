// SPDX-License-Identifier: MIT
//! Error types for emitter construction and lifecycle.

use thiserror::Error;

/// Errors surfaced by the emitter facade.
///
/// Emission itself is fire-and-forget; failures happen while building the
/// provider (configuration, exporter construction), while encoding a
/// serializable payload, or while flushing/shutting the pipeline down.
#[derive(Debug, Error)]
pub enum EmitterError {
    /// Collector address or service identity is empty or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The OTLP exporter could not be constructed.
    #[error("connection error: {0}")]
    Connection(String),

    /// A serializable payload could not be encoded to JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The export pipeline failed to flush pending records.
    #[error("flush error: {0}")]
    Flush(String),

    /// The export pipeline failed to shut down cleanly.
    #[error("shutdown error: {0}")]
    Shutdown(String),
}

pub type Result<T> = std::result::Result<T, EmitterError>;
