// SPDX-License-Identifier: MIT
//! Emitter configuration.
//!
//! Values are sourced from environment variables when available:
//! * `OTEL_EXPORTER_OTLP_ENDPOINT` – collector endpoint (e.g. `http://localhost:4317`).
//! * `OTEL_SERVICE_NAME` – service name resource attribute.
//!
//! Defaults are used when variables are absent. All fields are owned strings
//! to simplify passing across threads.

use crate::error::{EmitterError, Result};

/// Configuration used when constructing an [`EmitterProvider`].
///
/// [`EmitterProvider`]: crate::provider::EmitterProvider
#[derive(Clone, Debug)]
pub struct EmitterConfig {
    /// Collector OTLP/gRPC endpoint. Example: `http://localhost:4317`.
    pub endpoint: String,
    /// Service name reported in resource attributes (`service.name`).
    pub service_name: String,
    /// Service version reported in resource attributes (`service.version`).
    pub service_version: String,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            endpoint: std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:4317".to_string()),
            service_name: std::env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| "sample-emitter".to_string()),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl EmitterConfig {
    /// Check that the collector address and service identity are usable.
    ///
    /// The tonic transport needs a scheme-qualified URI, so a bare
    /// `host:port` is rejected here rather than failing later inside the
    /// exporter with a less useful message.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(EmitterError::Configuration(
                "collector endpoint is empty".to_string(),
            ));
        }

        let host = self
            .endpoint
            .strip_prefix("http://")
            .or_else(|| self.endpoint.strip_prefix("https://"))
            .ok_or_else(|| {
                EmitterError::Configuration(format!(
                    "collector endpoint {:?} must start with http:// or https://",
                    self.endpoint
                ))
            })?;
        if host.is_empty() || host.starts_with('/') {
            return Err(EmitterError::Configuration(format!(
                "collector endpoint {:?} has no host",
                self.endpoint
            )));
        }

        if self.service_name.is_empty() {
            return Err(EmitterError::Configuration(
                "service name is empty".to_string(),
            ));
        }

        Ok(())
    }
}
