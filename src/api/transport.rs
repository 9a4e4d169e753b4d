//! Authenticated JSON requests against the game server.

use super::credentials::Credentials;
use super::error::ApiError;
use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

/// Decoded JSON object returned on success.
pub type JsonObject = Map<String, Value>;

/// Where the message of a 401/406 response lives.
///
/// The service is not consistent across endpoints: some answer with plain
/// text, others with a JSON body carrying a `message` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    /// The whole response body is the message.
    RawText,
    /// The message is the `message` field of a JSON body.
    MessageField,
}

/// HTTP transport bound to one server.
#[derive(Debug, Clone)]
pub struct Transport {
    base_url: String,
    client: reqwest::Client,
}

impl Transport {
    /// Creates a transport for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Gets the base URL, always ending with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and decodes the response.
    #[instrument(skip(self, method, credentials, payload), fields(method = %method, idul = %credentials.idul()))]
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        credentials: &Credentials,
        payload: Option<&Value>,
        source: MessageSource,
    ) -> Result<JsonObject, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Sending request");

        let mut request = self
            .client
            .request(method, &url)
            .basic_auth(credentials.idul(), Some(credentials.secret()));
        if let Some(body) = payload {
            debug!(body = %body, "Attaching JSON body");
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Request failed");
            ApiError::Connectivity { status: None }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(error = %e, status = %status, "Failed to read response body");
            ApiError::Connectivity { status: None }
        })?;
        debug!(status = %status, body_len = body.len(), "Got response");

        classify(status, &body, source)
    }
}

/// Maps a status code and body to the decoded object or a typed error.
pub fn classify(status: StatusCode, body: &str, source: MessageSource) -> Result<JsonObject, ApiError> {
    match status {
        StatusCode::OK => decode_object(body),
        StatusCode::UNAUTHORIZED => Err(ApiError::Authentication(extract_message(body, source))),
        StatusCode::NOT_ACCEPTABLE => Err(ApiError::Validation(extract_message(body, source))),
        other => {
            warn!(status = %other, "Unexpected status");
            Err(ApiError::Connectivity {
                status: Some(other.as_u16()),
            })
        }
    }
}

fn decode_object(body: &str) -> Result<JsonObject, ApiError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => Err(ApiError::Decode(format!("expected a JSON object, got {}", other))),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

// Falls back to the raw body when the `message` field is unavailable.
fn extract_message(body: &str, source: MessageSource) -> String {
    match source {
        MessageSource::RawText => body.to_string(),
        MessageSource::MessageField => serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| json.get("message").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| body.to_string()),
    }
}
