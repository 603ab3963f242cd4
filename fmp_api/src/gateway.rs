//! The single chokepoint for HTTP dispatch and response classification.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde_json::Value;
use url::Url;

use crate::client::ClientConfig;
use crate::query::Params;
use crate::schema::{parse_records, Record};
use crate::Error;

/// Query key carrying the credential. Callers cannot override it.
pub const API_KEY_PARAM: &str = "apikey";

/// Key the API uses to report failures inside a 2xx body.
pub const ERROR_MESSAGE_KEY: &str = "Error Message";

const INVALID_KEY_MESSAGE: &str = "Invalid API key";
const FORBIDDEN_MESSAGE: &str = "Access forbidden - check your API key permissions";

/// An in-band failure: a success status whose body is `{"Error Message": ...}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub message: String,
}

impl ErrorEnvelope {
    /// Returns the envelope when `value` is an object carrying the error key.
    pub fn detect(value: &Value) -> Option<Self> {
        let message = value.as_object()?.get(ERROR_MESSAGE_KEY)?;
        let message = match message {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Some(Self { message })
    }
}

/// Owns the credential, base URL and transport handle.
///
/// The transport is opened at construction and released exactly once, by
/// [`Gateway::close`] or on drop. Requests after `close` fail with
/// [`Error::Closed`].
#[derive(Debug)]
pub struct Gateway {
    base_url: String,
    api_key: String,
    timeout: Duration,
    transport: RwLock<Option<reqwest::Client>>,
}

impl Gateway {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;
        let transport = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e)
            })?;
        Ok(Self {
            base_url,
            api_key: config.api_key.clone(),
            timeout: config.timeout,
            transport: RwLock::new(Some(transport)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the full request URL: caller parameters in order, then the
    /// credential.
    pub fn url_for(&self, path: &str, mut params: Params) -> Result<Url, Error> {
        if params.remove(API_KEY_PARAM).is_some() {
            tracing::warn!(
                "Ignoring caller-supplied `{}` parameter; the configured key is used",
                API_KEY_PARAM
            );
        }
        let url = Url::parse(&format!(
            "{}/{}",
            self.base_url,
            path.trim_start_matches('/')
        ))?;
        let mut url = params.add_to_url(&url);
        url.query_pairs_mut().append_pair(API_KEY_PARAM, &self.api_key);
        Ok(url)
    }

    /// Performs one request and returns the classified JSON payload.
    pub async fn execute(&self, method: Method, path: &str, params: Params) -> Result<Value, Error> {
        let transport = self.transport()?;
        let param_count = params.len();
        let url = self.url_for(path, params)?;
        tracing::debug!(%method, path, params = param_count, "dispatching request");

        let resp = transport.request(method, url).send().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Request to {} failed: {}", path, e);
            Error::Network(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        classify(status, &body)
    }

    pub async fn get(&self, path: &str, params: Params) -> Result<Value, Error> {
        self.execute(Method::GET, path, params).await
    }

    /// GETs `path` and validates the payload as a list of `T`.
    pub async fn get_records<T: Record>(&self, path: &str, params: Params) -> Result<Vec<T>, Error> {
        let value = self.get(path, params).await?;
        Ok(parse_records(&value)?)
    }

    /// Releases the transport. Calling it again is a no-op.
    pub fn close(&self) {
        let mut slot = self.transport.write().unwrap_or_else(PoisonError::into_inner);
        if slot.take().is_some() {
            tracing::debug!("transport closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.transport
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    fn transport(&self) -> Result<reqwest::Client, Error> {
        self.transport
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(Error::Closed)
    }
}

/// Maps a status and raw body to the parsed payload or a typed error.
pub(crate) fn classify(status: StatusCode, body: &str) -> Result<Value, Error> {
    match status {
        StatusCode::UNAUTHORIZED => {
            tracing::error!("Request rejected with status {}", status);
            return Err(Error::Authentication {
                status: status.as_u16(),
                message: INVALID_KEY_MESSAGE.to_string(),
            });
        }
        StatusCode::FORBIDDEN => {
            tracing::error!("Request rejected with status {}", status);
            return Err(Error::Authentication {
                status: status.as_u16(),
                message: FORBIDDEN_MESSAGE.to_string(),
            });
        }
        _ => {}
    }

    if !status.is_success() {
        tracing::error!("Request failed with status {}: {}", status, truncate_body(body));
        return Err(Error::Api {
            status: Some(status.as_u16()),
            message: body.to_string(),
        });
    }

    let value = serde_json::from_str::<Value>(body).map_err(|e| {
        tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(body));
        Error::Json {
            status: status.as_u16(),
            source: e,
        }
    })?;

    if let Some(envelope) = ErrorEnvelope::detect(&value) {
        tracing::error!("API reported an error: {}", envelope.message);
        return Err(Error::Api {
            status: Some(status.as_u16()),
            message: envelope.message,
        });
    }

    Ok(value)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
