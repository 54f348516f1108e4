//! GELF message representation.
//!
//! Carriers never look inside a message: they only ask it for its field map
//! and hand that map to an encoder. [`GelfMessage`] is the record type the
//! crate ships with; any other type can take part by implementing
//! [`Message`].

use chrono::{DateTime, Utc};
use log::warn;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::level::GelfLevel;

/// Ordered mapping of field name to scalar value.
///
/// Insertion order is preserved so encoded output follows the order in
/// which fields were added.
pub type FieldMap = Map<String, Value>;

/// GELF specification version written by [`GelfMessage`].
pub const GELF_VERSION: &str = "1.1";

/// A value that can be reduced to a GELF field map.
pub trait Message {
    fn to_fields(&self) -> FieldMap;
}

impl Message for FieldMap {
    fn to_fields(&self) -> FieldMap {
        self.clone()
    }
}

/// A GELF log record.
#[derive(Clone, Debug, Serialize)]
pub struct GelfMessage {
    version: &'static str,
    host: String,
    short_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_message: Option<String>,
    timestamp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<GelfLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    facility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    #[serde(flatten)]
    additional: FieldMap,
}

impl GelfMessage {
    /// Construct a message stamped with the current time.
    pub fn new(host: impl Into<String>, short_message: impl Into<String>) -> Self {
        Self {
            version: GELF_VERSION,
            host: host.into(),
            short_message: short_message.into(),
            full_message: None,
            timestamp: timestamp_secs(Utc::now()),
            level: None,
            facility: None,
            file: None,
            line: None,
            additional: FieldMap::new(),
        }
    }

    pub fn with_full_message(mut self, full_message: impl Into<String>) -> Self {
        self.full_message = Some(full_message.into());
        self
    }

    pub fn with_level(mut self, level: GelfLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_facility(mut self, facility: impl Into<String>) -> Self {
        self.facility = Some(facility.into());
        self
    }

    /// Record the source location of the event.
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    /// Override the creation time.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp_secs(timestamp);
        self
    }

    /// Attach an additional field.
    ///
    /// GELF requires additional field names to start with an underscore;
    /// one is prepended when missing.
    pub fn with_additional(mut self, key: &str, value: impl Into<Value>) -> Self {
        let key = if key.starts_with('_') {
            key.to_owned()
        } else {
            format!("_{key}")
        };
        self.additional.insert(key, value.into());
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn short_message(&self) -> &str {
        &self.short_message
    }

    pub fn level(&self) -> Option<GelfLevel> {
        self.level
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn additional(&self, key: &str) -> Option<&Value> {
        self.additional.get(key)
    }
}

impl Message for GelfMessage {
    fn to_fields(&self) -> FieldMap {
        object_fields(serde_json::to_value(self))
    }
}

fn object_fields(value: serde_json::Result<Value>) -> FieldMap {
    match value {
        Ok(Value::Object(map)) => map,
        // Every field is a string, number, or plain map, so serialisation
        // always yields an object.
        Ok(other) => {
            warn!("GelfMessage serialised to non-object {other}; sending no fields");
            FieldMap::new()
        }
        Err(err) => {
            warn!("GelfMessage failed to serialise: {err}; sending no fields");
            FieldMap::new()
        }
    }
}

fn timestamp_secs(at: DateTime<Utc>) -> f64 {
    at.timestamp_micros() as f64 / 1_000_000.0
}
