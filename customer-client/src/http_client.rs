//! Generic HTTP request handling
//!
//! Every endpoint goes through the same flow: send, log, read the body, then
//! split success from failure by status code. Error bodies are probed for the
//! service's `{ "message": ... }` object.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::types::ErrorBody;
use crate::utils::log_sanitizer::sanitize_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and return `(status_code, response_text)`.
    ///
    /// Only transport failures are errors here; any HTTP status is returned as-is.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("{method_name} {url} -> {status_code}");

        let response_text = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", sanitize_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Return the body for 2xx statuses, otherwise map to a [`ClientError`].
    pub fn ensure_success(status_code: u16, response_text: String) -> Result<String> {
        if (200..300).contains(&status_code) {
            return Ok(response_text);
        }

        let message = serde_json::from_str::<ErrorBody>(&response_text)
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty());

        let err = match message {
            Some(message) => ClientError::Service {
                status: status_code,
                message,
            },
            None => ClientError::Http {
                status: status_code,
            },
        };

        if err.is_expected() {
            log::warn!("Request rejected: {err}");
        } else {
            log::error!("Request failed: {err}");
        }
        Err(err)
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", sanitize_for_log(response_text));
            ClientError::Parse {
                detail: e.to_string(),
            }
        })
    }
}
