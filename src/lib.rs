// SPDX-License-Identifier: MIT
//! Emit structured data samples to an OpenTelemetry collector as OTLP log
//! records over gRPC.
//!
//! The crate exposes a small facade:
//! * [`EmitterConfig`] – collector endpoint & service identity, sourced from
//!   the environment.
//! * [`EmitterProvider`] – owns the export pipeline; derives named handles.
//! * [`SampleEmitter`] – emits [`Sample`]s tagged with a fixed attribute
//!   schema (`sample.type`, `sample.key`, `sample.encoding`, `stream.names`).
//!
//! Batching, retries and transport handling belong to the OpenTelemetry SDK;
//! this crate only shapes records and manages the pipeline lifecycle.
//!
//! # Quick Start
//! ```no_run
//! use sample_emitter::{EmitterConfig, EmitterProvider, Sample};
//! fn main() -> anyhow::Result<()> {
//!     let provider = EmitterProvider::new(&EmitterConfig::default())?;
//!     let emitter = provider.emitter("checkout");
//!     emitter.emit(Sample::json(r#"{"foo": 1, "bar": "baz"}"#));
//!     provider.shutdown()?;
//!     Ok(())
//! }
//! ```
pub mod config;
pub mod emitter;
pub mod error;
pub mod provider;
pub mod sample;

pub use config::EmitterConfig;
pub use emitter::SampleEmitter;
pub use error::{EmitterError, Result};
pub use provider::EmitterProvider;
pub use sample::{Encoding, Sample, SampleType};
