// SPDX-License-Identifier: MIT
//! Provider construction and lifecycle.
//!
//! The public API is intentionally minimal:
//!
//! * [`EmitterProvider::new`] – builds a batching OTLP/gRPC log pipeline bound
//!   to the configured service identity.
//! * [`EmitterProvider::emitter`] – derives a named [`SampleEmitter`] handle.
//! * [`EmitterProvider::shutdown`] – explicit synchronous shutdown/flush.
//!
//! # Example
//! ```no_run
//! use sample_emitter::{EmitterConfig, EmitterProvider, Sample};
//! fn main() -> anyhow::Result<()> {
//!     let provider = EmitterProvider::new(&EmitterConfig::default())?;
//!     let emitter = provider.emitter("checkout");
//!     emitter.emit(Sample::json(r#"{"order": 7}"#));
//!     provider.shutdown()?; // ensure final batches exported
//!     Ok(())
//! }
//! ```
//!
//! # Shutdown
//! Call [`EmitterProvider::shutdown`] before exiting to flush any remaining
//! batches. Dropping the provider without it may lose the final batch.
//!
//! # Threading Model
//! The batch processor runs on its own worker thread; the gRPC exporter needs
//! a Tokio runtime to be current when the provider is constructed.

use opentelemetry::logs::LoggerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::{LogExporter as OtlpLogExporter, WithExportConfig};
use opentelemetry_sdk::logs::{LogExporter, SdkLoggerProvider};
use opentelemetry_sdk::Resource;
use tracing::debug;

use crate::config::EmitterConfig;
use crate::emitter::SampleEmitter;
use crate::error::{EmitterError, Result};

/// Owns the OTLP export pipeline and hands out named emitter handles.
#[derive(Debug)]
pub struct EmitterProvider {
    provider: SdkLoggerProvider,
}

impl EmitterProvider {
    /// Build a provider exporting to the configured collector over gRPC.
    ///
    /// # Errors
    /// [`EmitterError::Configuration`] if the endpoint or service identity is
    /// empty or malformed, [`EmitterError::Connection`] if the exporter
    /// cannot be constructed.
    pub fn new(cfg: &EmitterConfig) -> Result<Self> {
        cfg.validate()?;

        let exporter = OtlpLogExporter::builder()
            .with_tonic()
            .with_endpoint(cfg.endpoint.clone())
            .build()
            .map_err(|e| EmitterError::Connection(e.to_string()))?;

        let provider = SdkLoggerProvider::builder()
            .with_batch_exporter(exporter)
            .with_resource(Self::resource(cfg))
            .build();
        debug!(endpoint = %cfg.endpoint, service = %cfg.service_name, "emitter provider ready");

        Ok(Self { provider })
    }

    /// Build a provider around a caller-supplied exporter.
    ///
    /// Records pass through a simple synchronous processor instead of the
    /// batching pipeline. The test suite pairs this with the SDK's in-memory
    /// exporter to inspect emitted records.
    pub fn with_log_exporter<E>(exporter: E, cfg: &EmitterConfig) -> Self
    where
        E: LogExporter + 'static,
    {
        let provider = SdkLoggerProvider::builder()
            .with_simple_exporter(exporter)
            .with_resource(Self::resource(cfg))
            .build();

        Self { provider }
    }

    /// Derive a named emitter handle. Side-effect-free beyond allocation;
    /// the name becomes the instrumentation scope of emitted records.
    pub fn emitter(&self, name: impl Into<std::borrow::Cow<'static, str>>) -> SampleEmitter {
        SampleEmitter::new(self.provider.logger(name))
    }

    /// Flush pending records without shutting the pipeline down.
    pub fn force_flush(&self) -> Result<()> {
        self.provider
            .force_flush()
            .map_err(|e| EmitterError::Flush(e.to_string()))
    }

    /// Flush and shut down the export pipeline.
    pub fn shutdown(&self) -> Result<()> {
        self.provider
            .shutdown()
            .map_err(|e| EmitterError::Shutdown(e.to_string()))
    }

    fn resource(cfg: &EmitterConfig) -> Resource {
        Resource::builder()
            .with_service_name(cfg.service_name.clone())
            .with_attributes([KeyValue::new(
                "service.version",
                cfg.service_version.clone(),
            )])
            .build()
    }
}

#[cfg(test)]
mod tests {
    use opentelemetry_sdk::logs::InMemoryLogExporter;

    use super::*;
    use crate::sample::Sample;

    fn config() -> EmitterConfig {
        EmitterConfig {
            endpoint: "http://localhost:4317".to_string(),
            service_name: "checkout".to_string(),
            service_version: "0.0.1".to_string(),
        }
    }

    #[test]
    fn rejects_malformed_endpoint() {
        let cfg = EmitterConfig {
            endpoint: "otelcol:4317".to_string(),
            ..config()
        };
        assert!(matches!(
            EmitterProvider::new(&cfg).unwrap_err(),
            EmitterError::Configuration(_)
        ));
    }

    #[tokio::test]
    async fn builds_grpc_pipeline_and_emits() {
        // No collector is listening; emission is fire-and-forget so the
        // handle must still accept records.
        let provider = EmitterProvider::new(&config()).expect("provider init");
        let emitter = provider.emitter("smoke");
        emitter.emit(Sample::json("{}"));
        // Shutdown outcome depends on the absent collector; not asserted.
        let _ = provider.shutdown();
    }

    #[test]
    fn flush_and_shutdown_succeed_with_injected_exporter() {
        let exporter = InMemoryLogExporter::default();
        let provider = EmitterProvider::with_log_exporter(exporter.clone(), &config());
        provider.emitter("lifecycle").emit(Sample::json("{}"));
        provider.force_flush().expect("flush");
        provider.shutdown().expect("shutdown");
        assert_eq!(exporter.get_emitted_logs().unwrap().len(), 1);
    }
}
