//! Code-based logging for lexdoc
//!
//! Events carry a registered [`Code`] and key/value context, are rendered as
//! text or JSON, and are handed to the `log` facade under the `lexdoc` target.
//! Binaries choose the backend (the CLI installs `env_logger`).

pub mod codes;
pub mod events;
pub mod macros;

use crate::config::runtime::LogFormat;
use std::sync::OnceLock;

pub use codes::Code;
pub use events::{LogEvent, LogLevel};

/// `log` target used for every analyzer event
pub const TARGET: &str = "lexdoc";

static LOG_FORMAT: OnceLock<LogFormat> = OnceLock::new();

/// Fix the event rendering format; returns false if it was already set
pub fn set_log_format(format: LogFormat) -> bool {
    LOG_FORMAT.set(format).is_ok()
}

/// Current rendering format (falls back to `LEXDOC_LOG_FORMAT`)
pub fn log_format() -> LogFormat {
    *LOG_FORMAT.get_or_init(LogFormat::from_env)
}

/// Check whether the backend would record an event at this level
pub fn enabled(level: LogLevel) -> bool {
    log::log_enabled!(target: TARGET, level.to_log_level())
}

/// Render and forward an event to the `log` facade
pub fn emit(event: &LogEvent) {
    let level = event.level.to_log_level();
    if !log::log_enabled!(target: TARGET, level) {
        return;
    }

    let rendered = match log_format() {
        LogFormat::Json => event.format_json().unwrap_or_else(|_| event.format()),
        LogFormat::Text => event.format(),
    };
    log::log!(target: TARGET, level, "{}", rendered);
}

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(
    code: Code,
    message: &str,
    span: Option<crate::utils::Span>,
    context: Vec<(&str, &str)>,
) {
    let mut event = LogEvent::error(code, message);
    if let Some(s) = span {
        event = event.with_span(s);
    }
    for (key, value) in context {
        event = event.with_context(key, value);
    }
    emit(&event);
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::success(code, message);
    for (key, value) in context {
        event = event.with_context(key, value);
    }
    emit(&event);
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::info(message);
    for (key, value) in context {
        event = event.with_context(key, value);
    }
    emit(&event);
}

/// Log warning with context (used by log_warning! macro)
pub fn log_warning_with_context(code: Option<Code>, message: &str, context: Vec<(&str, &str)>) {
    let mut event = match code {
        Some(code) => LogEvent::warning_with_code(code, message),
        None => LogEvent::warning(message),
    };
    for (key, value) in context {
        event = event.with_context(key, value);
    }
    emit(&event);
}

/// Log debug with context (used by log_debug! macro)
pub fn log_debug_with_context(code: Option<Code>, message: &str, context: Vec<(&str, &str)>) {
    let mut event = match code {
        Some(code) => LogEvent::debug_with_code(code, message),
        None => LogEvent::debug(message),
    };
    for (key, value) in context {
        event = event.with_context(key, value);
    }
    emit(&event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_backend_is_noop() {
        // No logger installed in unit tests; must not panic
        emit(&LogEvent::error(codes::system::INTERNAL_ERROR, "boom"));
        crate::log_debug!("debug line", "answer" => 42);
        crate::log_error!(codes::system::INTERNAL_ERROR, "with context", "k" => "v");
        crate::log_success!(codes::success::ANALYSIS_COMPLETE, "ok");
        crate::log_warning!("warned");
        crate::log_info!("info", "n" => 1);
    }

    #[test]
    fn test_log_format_is_stable() {
        let first = log_format();
        assert_eq!(log_format(), first);
        assert!(!set_log_format(first) || log_format() == first);
    }
}
