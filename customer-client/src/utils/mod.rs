//! Utility modules.

/// Log sanitization: password redaction and truncation.
pub mod log_sanitizer;
