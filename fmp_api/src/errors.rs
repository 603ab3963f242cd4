//! Error types for the API client.

use crate::schema::FieldKind;

/// Errors that can occur when making API requests.
///
/// `Api` and `Authentication` together form the "API rejected the request"
/// family; use [`Error::is_api_error`] to match both.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API answered with a non-success status, or flagged an error
    /// in-band inside a 2xx body.
    #[error("API error{}: {message}", fmt_status(.status))]
    Api { status: Option<u16>, message: String },
    /// The API rejected the credential (HTTP 401) or its permissions (HTTP 403).
    #[error("authentication failed (HTTP {status}): {message}")]
    Authentication { status: u16, message: String },
    /// The transport could not complete the request (connect, DNS, timeout).
    #[error("network error")]
    Network(#[source] reqwest::Error),
    /// A 2xx body was not valid JSON.
    #[error("failed to parse JSON response (HTTP {status})")]
    Json {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    /// The response JSON did not match the expected record shape.
    #[error(transparent)]
    Schema(#[from] SchemaValidationError),
    /// The base URL and path did not form a valid URL.
    #[error("invalid request URL")]
    InvalidUrl(#[from] url::ParseError),
    /// The client was used after `close()`.
    #[error("client used after close")]
    Closed,
}

impl Error {
    /// True for `Api` and its `Authentication` specialization.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. } | Error::Authentication { .. })
    }

    /// HTTP status carried by API-level errors, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => *status,
            Error::Authentication { status, .. } => Some(*status),
            Error::Json { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message carried by API-level errors.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Api { message, .. } | Error::Authentication { message, .. } => Some(message),
            _ => None,
        }
    }
}

fn fmt_status(status: &Option<u16>) -> String {
    match status {
        Some(status) => format!(" (HTTP {status})"),
        None => String::new(),
    }
}

/// A JSON payload that does not fit the declared record schema.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaValidationError {
    #[error("{entity}: missing required field `{field}` (wire name `{wire}`)")]
    MissingField {
        entity: &'static str,
        field: &'static str,
        wire: &'static str,
    },
    #[error("{entity}: field `{field}` expected {expected}, found {actual}")]
    TypeMismatch {
        entity: &'static str,
        field: &'static str,
        expected: FieldKind,
        actual: &'static str,
    },
    #[error("{entity}: expected a JSON {expected}, found {actual}")]
    UnexpectedShape {
        entity: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl SchemaValidationError {
    /// Canonical name of the offending field, when the failure is field-level.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } | Self::TypeMismatch { field, .. } => Some(field),
            Self::UnexpectedShape { .. } => None,
        }
    }

    /// Name of the record type being decoded.
    pub fn entity(&self) -> &'static str {
        match self {
            Self::MissingField { entity, .. }
            | Self::TypeMismatch { entity, .. }
            | Self::UnexpectedShape { entity, .. } => entity,
        }
    }
}
