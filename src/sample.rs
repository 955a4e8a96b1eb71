// SPDX-License-Identifier: MIT
//! Data-sample model: payload, classification tags, and the attribute schema
//! stamped onto every exported log record.

use serde::Serialize;

use crate::error::Result;

/// Log record attribute holding the list of stream names a sample belongs to.
pub const STREAM_NAMES_KEY: &str = "stream.names";
/// Log record attribute holding the sample classification tag.
pub const SAMPLE_TYPE_KEY: &str = "sample.type";
/// Log record attribute holding the sample partition key.
pub const SAMPLE_KEY_KEY: &str = "sample.key";
/// Log record attribute holding the payload encoding tag.
pub const SAMPLE_ENCODING_KEY: &str = "sample.encoding";

/// Stream every sample belongs to unless the caller narrows it.
pub const DEFAULT_STREAM: &str = "all";

/// Classification tag carried in the `sample.type` attribute.
///
/// The facade emits `Raw` samples; the remaining tags classify records
/// produced elsewhere in the pipeline (digests, rule events, config
/// snapshots) so consumers can parse them symmetrically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SampleType {
    #[default]
    Unknown,
    Raw,
    StructDigest,
    ValueDigest,
    Event,
    Config,
}

impl SampleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleType::Unknown => "unknown",
            SampleType::Raw => "raw",
            SampleType::StructDigest => "struct-digest",
            SampleType::ValueDigest => "value-digest",
            SampleType::Event => "event",
            SampleType::Config => "config",
        }
    }

    pub fn parse(tag: &str) -> SampleType {
        match tag {
            "raw" => SampleType::Raw,
            "struct-digest" => SampleType::StructDigest,
            "value-digest" => SampleType::ValueDigest,
            "event" => SampleType::Event,
            "config" => SampleType::Config,
            _ => SampleType::Unknown,
        }
    }
}

/// Payload encoding tag carried in the `sample.encoding` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    #[default]
    Unknown,
    Json,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Unknown => "unknown",
            Encoding::Json => "json",
        }
    }

    pub fn parse(tag: &str) -> Encoding {
        match tag {
            "json" => Encoding::Json,
            _ => Encoding::Unknown,
        }
    }
}

/// A data sample about to be exported as one OTLP log record.
///
/// Samples are built immediately before emission and are not retained by the
/// emitting process. Defaults follow the fixed schema: `raw` type, `json`
/// encoding, empty key, streams `["all"]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub(crate) body: String,
    pub(crate) sample_type: SampleType,
    pub(crate) encoding: Encoding,
    pub(crate) key: String,
    pub(crate) streams: Vec<String>,
    pub(crate) metadata: Vec<(String, String)>,
}

impl Sample {
    /// Create a raw sample from a payload already encoded as JSON text.
    ///
    /// The text must be a valid JSON document; it is forwarded verbatim as
    /// the record body.
    pub fn json(payload: impl Into<String>) -> Self {
        Self {
            body: payload.into(),
            sample_type: SampleType::Raw,
            encoding: Encoding::Json,
            key: String::new(),
            streams: vec![DEFAULT_STREAM.to_string()],
            metadata: Vec::new(),
        }
    }

    /// Create a raw sample from any serializable value, encoding it to JSON.
    pub fn serializable<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self::json(serde_json::to_string(value)?))
    }

    /// Set the partition key (`sample.key`).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Replace the stream names (`stream.names`).
    pub fn with_streams<I, S>(mut self, streams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.streams = streams.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a free-form metadata attribute to the record.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn sample_type(&self) -> SampleType {
        self.sample_type
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn streams(&self) -> &[String] {
        &self.streams
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_sample_defaults_match_fixed_schema() {
        let sample = Sample::json(r#"{"foo": 1}"#);
        assert_eq!(sample.sample_type(), SampleType::Raw);
        assert_eq!(sample.encoding(), Encoding::Json);
        assert_eq!(sample.key(), "");
        assert_eq!(sample.streams(), [DEFAULT_STREAM.to_string()]);
        assert_eq!(sample.body(), r#"{"foo": 1}"#);
    }

    #[test]
    fn serializable_sample_encodes_to_json() {
        #[derive(Serialize)]
        struct Order {
            id: u32,
            item: &'static str,
        }

        let sample = Sample::serializable(&Order {
            id: 7,
            item: "book",
        })
        .unwrap();
        assert_eq!(sample.body(), r#"{"id":7,"item":"book"}"#);
        assert_eq!(sample.encoding(), Encoding::Json);
    }

    #[test]
    fn serializable_sample_surfaces_encoding_failure() {
        use std::collections::HashMap;

        use crate::error::EmitterError;

        // JSON object keys must be strings; a sequence key cannot encode.
        let mut value: HashMap<Vec<u8>, u32> = HashMap::new();
        value.insert(vec![1, 2], 3);

        let err = Sample::serializable(&value).unwrap_err();
        assert!(matches!(err, EmitterError::Serialization(_)));
    }

    #[test]
    fn builders_override_key_and_streams() {
        let sample = Sample::json("{}")
            .with_key("order-7")
            .with_streams(["checkout", "errors"]);
        assert_eq!(sample.key(), "order-7");
        assert_eq!(
            sample.streams(),
            ["checkout".to_string(), "errors".to_string()]
        );
    }

    #[test]
    fn type_tags_round_trip() {
        for tag in [
            SampleType::Unknown,
            SampleType::Raw,
            SampleType::StructDigest,
            SampleType::ValueDigest,
            SampleType::Event,
            SampleType::Config,
        ] {
            assert_eq!(SampleType::parse(tag.as_str()), tag);
        }
        assert_eq!(SampleType::parse("bogus"), SampleType::Unknown);
    }

    #[test]
    fn encoding_tags_round_trip() {
        assert_eq!(Encoding::parse("json"), Encoding::Json);
        assert_eq!(Encoding::parse("protobuf"), Encoding::Unknown);
        assert_eq!(Encoding::Json.as_str(), "json");
    }
}
