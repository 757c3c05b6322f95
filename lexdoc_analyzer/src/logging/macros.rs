//! Logging macros taking a Code plus `"key" => value` context pairs
//!
//! Context values only need `Display`. Nothing is formatted unless the
//! backend has the level enabled.

/// Log error with Code type
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        $crate::logging::log_error_with_context($code, $message, None, vec![])
    };

    ($code:expr, $message:expr, span = $span:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::enabled($crate::logging::LogLevel::Error) {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_error_with_context($code, $message, Some($span), context_refs)
        }
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::enabled($crate::logging::LogLevel::Error) {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_error_with_context($code, $message, None, context_refs)
        }
    };
}

/// Log success with Code type
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        $crate::logging::log_success_with_context($code, $message, vec![])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::enabled($crate::logging::LogLevel::Info) {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_success_with_context($code, $message, context_refs)
        }
    };
}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::log_info_with_context($message, vec![])
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::enabled($crate::logging::LogLevel::Info) {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_info_with_context($message, context_refs)
        }
    };
}

/// Log warning message, optionally with a code
#[macro_export]
macro_rules! log_warning {
    ($message:expr) => {
        $crate::logging::log_warning_with_context(None, $message, vec![])
    };

    (code = $code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::enabled($crate::logging::LogLevel::Warning) {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_warning_with_context(Some($code), $message, context_refs)
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::enabled($crate::logging::LogLevel::Warning) {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_warning_with_context(None, $message, context_refs)
        }
    };
}

/// Log debug message, optionally with a code
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        if $crate::logging::enabled($crate::logging::LogLevel::Debug) {
            $crate::logging::log_debug_with_context(None, $message, vec![])
        }
    };

    (code = $code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::enabled($crate::logging::LogLevel::Debug) {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_debug_with_context(Some($code), $message, context_refs)
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::enabled($crate::logging::LogLevel::Debug) {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_debug_with_context(None, $message, context_refs)
        }
    };
}
