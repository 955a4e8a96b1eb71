// SPDX-License-Identifier: MIT
//! Named emitter handle: turns a [`Sample`] into an OTLP log record and
//! submits it to the export pipeline.

use std::time::SystemTime;

use opentelemetry::logs::{AnyValue, LogRecord as _, Logger as _, Severity};
use opentelemetry_sdk::logs::SdkLogger;

use crate::sample::{
    Sample, SAMPLE_ENCODING_KEY, SAMPLE_KEY_KEY, SAMPLE_TYPE_KEY, STREAM_NAMES_KEY,
};

/// Handle obtained from [`EmitterProvider::emitter`].
///
/// Usually created once per logical source; the handle name tags every
/// record it emits via the instrumentation scope.
///
/// [`EmitterProvider::emitter`]: crate::provider::EmitterProvider::emitter
pub struct SampleEmitter {
    logger: SdkLogger,
}

impl SampleEmitter {
    pub(crate) fn new(logger: SdkLogger) -> Self {
        Self { logger }
    }

    /// Submit one sample for export.
    ///
    /// Timestamps are assigned here; the record is handed to the provider's
    /// processor and not retained. The call may suspend briefly while the
    /// export pipeline applies backpressure, a policy owned by the SDK.
    pub fn emit(&self, sample: Sample) {
        let now = SystemTime::now();
        let mut record = self.logger.create_log_record();
        record.set_timestamp(now);
        record.set_observed_timestamp(now);
        record.set_severity_number(Severity::Info);
        record.set_severity_text("INFO");

        record.add_attribute(SAMPLE_TYPE_KEY, sample.sample_type.as_str());
        record.add_attribute(SAMPLE_ENCODING_KEY, sample.encoding.as_str());
        record.add_attribute(SAMPLE_KEY_KEY, sample.key);
        let streams: Vec<AnyValue> = sample.streams.into_iter().map(AnyValue::from).collect();
        record.add_attribute(STREAM_NAMES_KEY, AnyValue::ListAny(Box::new(streams)));
        for (key, value) in sample.metadata {
            record.add_attribute(key, value);
        }
        record.set_body(AnyValue::from(sample.body));

        self.logger.emit(record);
    }

    /// Emit a raw JSON payload with the default key and streams.
    pub fn emit_json(&self, payload: impl Into<String>) {
        self.emit(Sample::json(payload));
    }
}
