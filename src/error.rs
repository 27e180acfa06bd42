//! Error types for the Mailchimp API client.
//!
//! Every fallible operation in this crate returns [`Error`]. The variants
//! separate local precondition failures (which never touch the network)
//! from transport failures, remote API failures and decode failures, so
//! callers can dispatch on the kind of failure instead of parsing messages.

use serde::Deserialize;
use thiserror::Error;

/// A specialized `Result` type for Mailchimp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Mailchimp API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A batch call was given more members than the API accepts in one request.
    ///
    /// Raised before any request is issued.
    #[error("batch operation only allows for a maximum of {max} members, got {count}")]
    TooManyMembers {
        /// Number of members passed in
        count: usize,
        /// Maximum accepted by the API
        max: usize,
    },

    /// A request body could not be serialized to JSON.
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// HTTP request failed (DNS, connection refused, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx response with a structured error payload.
    #[error("request was not successful '{detail}', status: {status}")]
    Api {
        /// Status reported by the error payload (falls back to the HTTP status)
        status: u16,
        /// Human-readable explanation of the failure
        detail: String,
        /// Short title of the error class
        title: Option<String>,
        /// URL of the error documentation page
        error_type: Option<String>,
        /// Instance identifier of the failed request, useful for support
        instance: Option<String>,
    },

    /// API returned a non-2xx response whose body was not an error payload.
    #[error("could not parse error response from Mailchimp API, status: {status}")]
    UnparseableErrorResponse {
        /// HTTP status code of the response
        status: u16,
    },

    /// A successful response body could not be decoded into the expected type.
    #[error("could not decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The health check answered with something other than the expected greeting.
    #[error("unexpected pong response from Mailchimp API: {0:?}")]
    UnexpectedPing(String),

    /// A builder was asked to build a value with required fields unset.
    #[error("could not build {entity} due to invalid parameters [{}]", .fields.join(", "))]
    Validation {
        /// Kind of value being built (`list`, `member`, ...)
        entity: &'static str,
        /// Every required field that was left unset
        fields: Vec<String>,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the status code carried by API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::UnparseableErrorResponse { status } => {
                Some(*status)
            }
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the API rejected the request with a 4xx status.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Returns `true` if the API failed with a 5xx status.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }

    /// Returns `true` if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if this error was raised locally, without a request
    /// being sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::TooManyMembers { .. }
                | Error::Encode(_)
                | Error::Validation { .. }
                | Error::InvalidInput(_)
                | Error::Config(_)
        )
    }

    /// Map a non-2xx response body to an error.
    ///
    /// `http_status` is used when the payload omits its own status.
    pub(crate) fn from_api_response(http_status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(payload) => Error::Api {
                status: payload.status.unwrap_or(http_status),
                detail: payload.detail.unwrap_or_default(),
                title: payload.title,
                error_type: payload.error_type,
                instance: payload.instance,
            },
            Err(_) => Error::UnparseableErrorResponse {
                status: http_status,
            },
        }
    }
}

/// Error document returned by the Mailchimp API on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub instance: Option<String>,
}
