//! Log sanitization utilities
//!
//! Customer bodies carry a `password` field; it must never reach a log file.
//! Bodies are also capped in length so a large list response does not flood
//! the log.

use serde_json::Value;

/// Maximum number of bytes of a body kept in log output.
const TRUNCATE_LIMIT: usize = 512;

const REDACTED: &str = "***";

/// Redact passwords and truncate a request/response body for logging.
///
/// Non-JSON text is only truncated.
pub fn sanitize_for_log(body: &str) -> String {
    let text = match serde_json::from_str::<Value>(body) {
        Ok(mut value) => {
            redact_passwords(&mut value);
            value.to_string()
        }
        Err(_) => body.to_string(),
    };
    truncate(&text)
}

fn redact_passwords(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map.iter_mut() {
                if key == "password" {
                    *v = Value::String(REDACTED.to_string());
                } else {
                    redact_passwords(v);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_passwords),
        _ => {}
    }
}

fn truncate(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut cut = TRUNCATE_LIMIT;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}... [{} bytes]", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_redacted_in_object() {
        let out = sanitize_for_log(r#"{"username":"alice","password":"hunter2"}"#);
        assert!(!out.contains("hunter2"));
        assert!(out.contains("alice"));
    }

    #[test]
    fn password_is_redacted_in_list() {
        let out = sanitize_for_log(r#"[{"id":1,"password":"a"},{"id":2,"password":"b"}]"#);
        assert!(!out.contains("\"a\""));
        assert!(!out.contains("\"b\""));
        assert_eq!(out.matches(REDACTED).count(), 2);
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(sanitize_for_log("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn long_body_is_truncated_on_char_boundary() {
        let s = "é".repeat(TRUNCATE_LIMIT);
        let out = sanitize_for_log(&s);
        assert!(out.ends_with(&format!("[{} bytes]", s.len())));
    }
}
