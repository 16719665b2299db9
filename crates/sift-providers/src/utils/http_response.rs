//! HTTP Response Utilities
//!
//! Elasticsearch reports failures as
//! `{"error": {"type": "...", "reason": "..."}, "status": 404}`; proxies and
//! older clusters may answer with a bare string `error` or plain text.

use reqwest::{Response, StatusCode};
use serde_json::Value;
use sift_domain::error::{Error, Result};

use crate::constants::ES_INDEX_NOT_FOUND;

/// Error type and reason pulled from an Elasticsearch error body
struct EngineErrorBody {
    /// `error.type`, e.g. `index_not_found_exception`
    kind: Option<String>,
    /// `error.reason`, or the whole body when it is not structured
    reason: String,
}

impl EngineErrorBody {
    fn parse(body: &str) -> Self {
        let structured = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| json.get("error").cloned());

        match structured {
            Some(Value::String(reason)) => Self { kind: None, reason },
            Some(error) => Self {
                kind: error.get("type").and_then(Value::as_str).map(str::to_string),
                reason: error
                    .get("reason")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            None => Self {
                kind: None,
                reason: body.trim().to_string(),
            },
        }
    }

    fn details(&self) -> String {
        match (&self.kind, self.reason.is_empty()) {
            (Some(kind), false) => format!("{kind}: {}", self.reason),
            (Some(kind), true) => kind.clone(),
            (None, false) => self.reason.clone(),
            (None, true) => "empty response body".to_string(),
        }
    }
}

/// Utilities for processing HTTP responses from the search engine
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// A non-success status becomes an upstream error naming the provider and
    /// the engine's error type. A success body that is not JSON is a
    /// [`Error::Json`].
    pub async fn check_and_parse(response: Response, provider_name: &str) -> Result<Value> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::upstream_with_source(format!("{provider_name} response body unreadable"), e)
        })?;

        if !status.is_success() {
            return Err(Self::status_error(provider_name, status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn status_error(provider_name: &str, status: StatusCode, body: &str) -> Error {
        let error = EngineErrorBody::parse(body);
        let code = status.as_u16();
        let context = match code {
            401 | 403 => "authentication failed".to_string(),
            404 if error.kind.as_deref() == Some(ES_INDEX_NOT_FOUND) => {
                "index not found".to_string()
            }
            404 => "endpoint not found".to_string(),
            429 => "rate limit exceeded".to_string(),
            500..=599 => format!("server error ({code})"),
            _ => format!("request failed ({code})"),
        };
        Error::upstream(format!("{provider_name} {context}: {}", error.details()))
    }
}
