#![warn(clippy::all, rust_2018_idioms)]

/// Tracing macros that prefix every message with `[file:module:line]`.
/// Output example:
///   [src/app/waf_importer/normalizers/waf.rs:wafimporter::app::waf_importer::normalizers::waf:24] Normalized aws_waf_rule ...
#[macro_export]
macro_rules! trace_trace {
    ($($arg:tt)*) => {
        tracing::trace!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_info {
    ($($arg:tt)*) => {
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_error {
    ($($arg:tt)*) => {
        tracing::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

/*
Log level guidelines:

TRACE: individual resource processing inside a lister
DEBUG: SDK client setup, list call start, config file resolution
INFO:  per-lister counts, run summary, region overrides
WARN:  recoverable problems (log file not writable, config fallbacks)
ERROR: failed list calls

stdout carries the resource collection, so never print diagnostics there.
*/
