//! Log formatting options for different output styles

use crate::logging::LogEntry;
use anyhow::bail;

/// How logs should be formatted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured JSON
    /// Example:
    /// `{"timestamp":"2024-01-15T10:30:00Z","level":"INFO","target":"bizdesk_core::store",...}`
    Json,

    /// Human-readable (default)
    /// Example: 2024-01-15 10:30:00.000 INFO  [bizdesk_core::store] Ability store now Resolved
    Human,

    /// Logfmt (key=value pairs)
    Logfmt,
}

impl LogFormat {
    pub fn format_entry(&self, entry: &LogEntry) -> String {
        match self {
            LogFormat::Json => format_json(entry),
            LogFormat::Human => format_human(entry),
            LogFormat::Logfmt => format_logfmt(entry),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        Ok(match value.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "human" | "text" => LogFormat::Human,
            "logfmt" => LogFormat::Logfmt,
            _ => bail!("Unknown log format: {}", value),
        })
    }
}

fn format_json(entry: &LogEntry) -> String {
    let mut json = serde_json::Map::new();
    json.insert("timestamp".into(), entry.timestamp.to_rfc3339().into());
    json.insert("level".into(), entry.level.as_str().into());
    json.insert("target".into(), entry.target.clone().into());
    json.insert("message".into(), entry.message.clone().into());
    for (key, value) in &entry.fields {
        json.insert(key.clone(), value.clone().into());
    }

    serde_json::Value::Object(json).to_string()
}

fn format_human(entry: &LogEntry) -> String {
    let timestamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
    let mut message =
        format!("{} {:5} [{}] {}", timestamp, entry.level.as_str(), entry.target, entry.message);

    for (key, value) in &entry.fields {
        message.push_str(&format!(" {}={}", key, value));
    }

    message
}

fn format_logfmt(entry: &LogEntry) -> String {
    let quote = |s: &str| format!("\"{}\"", s.replace('"', "\\\""));

    let mut parts = vec![
        format!("timestamp={}", entry.timestamp.to_rfc3339()),
        format!("level={}", entry.level.as_str()),
        format!("target={}", entry.target),
        format!("message={}", quote(&entry.message)),
    ];
    for (key, value) in &entry.fields {
        parts.push(format!("{}={}", key, quote(value)));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    #[test]
    fn test_json_format() {
        let entry = LogEntry::new(LogLevel::Info, "Ability recompiled", "bizdesk_core::store");
        let formatted = LogFormat::Json.format_entry(&entry);

        let parsed: serde_json::Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(parsed["message"], "Ability recompiled");
        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["target"], "bizdesk_core::store");
    }

    #[test]
    fn test_human_format() {
        let entry = LogEntry::new(LogLevel::Error, "Ability context missing", "bizdesk_core::store")
            .with_field("service", "console");

        let formatted = LogFormat::Human.format_entry(&entry);

        assert!(formatted.contains("ERROR"));
        assert!(formatted.contains("[bizdesk_core::store]"));
        assert!(formatted.contains("service=console"));
    }

    #[test]
    fn test_logfmt_format() {
        let entry = LogEntry::new(LogLevel::Warn, "Redirecting \"guest\"", "bizdesk_core::guard");
        let formatted = LogFormat::Logfmt.format_entry(&entry);

        assert!(formatted.contains("level=WARN"));
        assert!(formatted.contains("target=bizdesk_core::guard"));
        assert!(formatted.contains(r#"message="Redirecting \"guest\"""#));
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
