//! Error types for the dispatch API client.
//!
//! # Design
//! Three kinds of failure reach the caller, and none are retried:
//! - `Validation`: the model was rejected locally, either by a field setter
//!   or by the serialization gate. Nothing was sent.
//! - `Connector`: the request never produced an interpretable HTTP exchange
//!   (refused connection, timeout, unreadable or malformed response, or no
//!   response at all).
//! - `Api`: the server answered outside the 2xx range. The status code is the
//!   discriminator callers branch on (401 bad token, 422 bad payload, ...).
//!
//! `Serialization` and `Config` cover local setup problems that happen before
//! any request exists.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// A record was rejected before anything went over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("state must be at most {max} characters once whitespace is removed, got [{value}]")]
    StateTooLong { value: String, max: usize },

    #[error("zip code must be at most {max} characters once whitespace is removed, got [{value}]")]
    ZipCodeTooLong { value: String, max: usize },

    #[error("{0} is not a valid payment method")]
    InvalidPaymentMethod(i64),

    /// Required fields were absent when the record was serialized. Field
    /// names are the wire (snake_case) names.
    #[error("{record} is missing required fields: {}", .fields.join(", "))]
    MissingFields {
        record: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("either a pickup address or a delivery address is required")]
    NoAddress,

    /// `NaN` or an infinity, which JSON cannot carry as a number.
    #[error("{field} must be a finite amount")]
    NonFiniteAmount { field: &'static str },
}

/// Any failure surfaced by the client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("connector error: {message}")]
    Connector { message: String },

    /// Non-2xx response. `body` keeps the raw response text, when there was
    /// one, for diagnostics.
    #[error("API returned HTTP {status}")]
    Api { status: u16, body: Option<String> },

    /// A request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl Error {
    pub(crate) fn connector(message: impl Into<String>) -> Self {
        Error::Connector {
            message: message.into(),
        }
    }

    pub(crate) fn serialization(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }

    /// HTTP status carried by an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
