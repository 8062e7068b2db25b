use thiserror::Error;

/// Unified error type for all customer service operations.
///
/// # Classification
///
/// - [`Service`](Self::Service): the service answered with an error status and a
///   structured body carrying a human-readable `message` (validation, not found,
///   conflict). The message is meant to be shown verbatim.
/// - [`Http`](Self::Http): error status without a usable message.
/// - [`Network`](Self::Network) / [`Timeout`](Self::Timeout): no response at all.
/// - [`Parse`](Self::Parse) / [`Serialization`](Self::Serialization): the
///   exchange happened but a body could not be (de)serialized.
/// - [`Config`](Self::Config): the client could not be built; no request was sent.
///
/// No variant is retried; every failure is terminal for the call that produced it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Error response with a service-supplied message.
    #[error("HTTP {status}: {message}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Message taken from the error body.
        message: String,
    },

    /// Error response without a structured message.
    #[error("HTTP {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// Connection-level failure (DNS, refused, reset, ...).
    #[error("Network error: {detail}")]
    Network { detail: String },

    /// The request did not complete within the configured timeout.
    #[error("Request timeout: {detail}")]
    Timeout { detail: String },

    /// A success response body could not be decoded.
    #[error("Parse error: {detail}")]
    Parse { detail: String },

    /// A request body could not be encoded.
    #[error("Serialization error: {detail}")]
    Serialization { detail: String },

    /// The client could not be constructed from its configuration.
    #[error("Invalid client configuration: {detail}")]
    Config { detail: String },
}

impl ClientError {
    /// Message supplied by the service, if this error carries one.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Service { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } | Self::Http { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure is expected behaviour (bad input, missing record).
    ///
    /// `true` is logged at `warn`, `false` at `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
