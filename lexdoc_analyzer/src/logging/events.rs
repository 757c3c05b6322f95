//! Log events for the analyzer

use super::codes::Code;
use crate::config::compile_time::logging::{MAX_CONTEXT_ENTRIES, MAX_LOG_MESSAGE_LENGTH};
use crate::utils::Span;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn to_log_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        }
    }
}

/// Core log event structure
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    pub span: Option<Span>,
    pub context: BTreeMap<String, String>,
}

impl LogEvent {
    fn new(level: LogLevel, code: Code, message: &str) -> Self {
        let message = if message.len() > MAX_LOG_MESSAGE_LENGTH {
            let mut cut = MAX_LOG_MESSAGE_LENGTH;
            while !message.is_char_boundary(cut) {
                cut -= 1;
            }
            format!("{}...", &message[..cut])
        } else {
            message.to_string()
        };

        Self {
            timestamp: Utc::now(),
            level,
            code,
            message,
            span: None,
            context: BTreeMap::new(),
        }
    }

    pub fn error(error_code: Code, message: &str) -> Self {
        Self::new(LogLevel::Error, error_code, message)
    }

    /// Warnings without a specific code use W000
    pub fn warning(message: &str) -> Self {
        Self::new(LogLevel::Warning, Code::new("W000"), message)
    }

    pub fn warning_with_code(warning_code: Code, message: &str) -> Self {
        Self::new(LogLevel::Warning, warning_code, message)
    }

    pub fn info(message: &str) -> Self {
        Self::new(LogLevel::Info, Code::new("I000"), message)
    }

    /// Info event carrying a success code
    pub fn success(success_code: Code, message: &str) -> Self {
        Self::new(LogLevel::Info, success_code, message)
    }

    pub fn debug(message: &str) -> Self {
        Self::new(LogLevel::Debug, Code::new("D000"), message)
    }

    pub fn debug_with_code(debug_code: Code, message: &str) -> Self {
        Self::new(LogLevel::Debug, debug_code, message)
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add context data; entries past the configured cap are dropped
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        if self.context.len() < MAX_CONTEXT_ENTRIES || self.context.contains_key(key) {
            self.context.insert(key.to_string(), value.to_string());
        }
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    pub fn category(&self) -> &'static str {
        super::codes::get_category(self.code.as_str())
    }

    pub fn severity(&self) -> &'static str {
        super::codes::get_severity(self.code.as_str()).as_str()
    }

    /// Format for display
    pub fn format(&self) -> String {
        let span_str = self
            .span
            .as_ref()
            .map(|s| format!(" at {}", s.start()))
            .unwrap_or_default();

        let mut output = format!(
            "[{}] {} - {}{}",
            self.level.as_str(),
            self.code.as_str(),
            self.message,
            span_str
        );

        for (key, value) in &self.context {
            output.push_str(&format!(" {}={}", key, value));
        }

        output
    }

    /// Format as JSON for structured logging
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::json!({
            "timestamp": self.timestamp.to_rfc3339(),
            "level": self.level.as_str(),
            "code": self.code.as_str(),
            "message": self.message,
            "category": self.category(),
            "severity": self.severity(),
        });

        if let Some(span) = &self.span {
            json["span"] = serde_json::json!({
                "start_line": span.start().line,
                "start_column": span.start().column,
                "end_line": span.end().line,
                "end_column": span.end().column,
            });
        }

        if !self.context.is_empty() {
            json["context"] = serde_json::Value::Object(
                self.context
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            );
        }

        serde_json::to_string(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;
    use crate::utils::Position;

    #[test]
    fn test_error_event_creation() {
        let event = LogEvent::error(codes::source::FILE_NOT_FOUND, "File not found");

        assert!(event.is_error());
        assert_eq!(event.code.as_str(), "E005");
        assert_eq!(event.category(), "Source");
    }

    #[test]
    fn test_event_formatting_includes_context_in_key_order() {
        let event = LogEvent::success(codes::success::ANALYSIS_COMPLETE, "done")
            .with_context("tokens", "12")
            .with_context("file", "a.py");

        assert_eq!(event.format(), "[INFO] I030 - done file=a.py tokens=12");
    }

    #[test]
    fn test_span_is_rendered() {
        let span = Span::new(Position::new(4, 2, 1), Position::new(7, 2, 4));
        let event = LogEvent::error(codes::lexical::TOO_MANY_TOKENS, "limit").with_span(span);

        assert!(event.format().ends_with("at 2:1"));
    }

    #[test]
    fn test_json_formatting() {
        let event = LogEvent::error(codes::dictionary::MISSING_DESCRIPTION, "no description")
            .with_context("token", "print");

        let json: serde_json::Value = serde_json::from_str(&event.format_json().unwrap()).unwrap();
        assert_eq!(json["level"], "ERROR");
        assert_eq!(json["code"], "E062");
        assert_eq!(json["context"]["token"], "print");
        assert_eq!(json["severity"], "Critical");
    }

    #[test]
    fn test_long_message_is_truncated() {
        let long = "x".repeat(MAX_LOG_MESSAGE_LENGTH + 10);
        let event = LogEvent::info(&long);
        assert_eq!(event.message.len(), MAX_LOG_MESSAGE_LENGTH + 3);
        assert!(event.message.ends_with("..."));
    }

    #[test]
    fn test_context_is_capped() {
        let mut event = LogEvent::debug("many");
        for i in 0..(MAX_CONTEXT_ENTRIES + 5) {
            event = event.with_context(&format!("k{:03}", i), "v");
        }
        assert_eq!(event.context.len(), MAX_CONTEXT_ENTRIES);
    }
}
