//! Structured log entries

use crate::logging::LogLevel;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// A structured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    /// Usually the module path
    pub target: String,
    /// Static context plus any per-entry fields, sorted by key
    pub fields: BTreeMap<String, String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            target: target.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn from_record(record: &log::Record, context: &BTreeMap<String, String>) -> Self {
        let mut entry =
            Self::new(record.level().into(), record.args().to_string(), record.target());
        entry.fields.extend(context.iter().map(|(k, v)| (k.clone(), v.clone())));
        entry
    }

    pub fn with_field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }
}
