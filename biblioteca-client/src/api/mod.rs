//! HTTP seam and the JSON request wrapper
//!
//! [`HttpClient`] abstracts the transport so the controller can be driven by a
//! mock in tests. [`ApiClient`] adds the base URL, the default JSON content
//! type and error normalization on top of it.

mod livros;
pub mod mock;
mod reqwest_http;

pub use livros::LivrosApi;
pub use reqwest_http::ReqwestHttpClient;

use crate::error::{ApiError, HttpError};
use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully resolved outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Trait for HTTP transports.
///
/// Implementations include the production reqwest-based client and the
/// recording mock in [`mock`].
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a request and collect the full response body
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Per-call options for [`ApiClient::request`]
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    /// Merged over the default `Content-Type: application/json`
    pub headers: Headers,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Serialize `body` as the JSON request body
    pub fn json<B: serde::Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Error body returned by the backend
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    erro: Option<String>,
}

/// JSON request wrapper around an [`HttpClient`]
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request against `base_url + path` and decode the JSON response
    ///
    /// A non-2xx status becomes [`ApiError::Request`] carrying the backend's
    /// `erro` message, or `HTTP error! status: N` when the body has none. An
    /// empty success body decodes as JSON `null`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.extend(options.headers);

        let request = HttpRequest {
            method: options.method,
            url,
            headers,
            body: options.body,
        };
        tracing::debug!(method = request.method.as_str(), url = %request.url, "API request");

        let method = request.method;
        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(method = method.as_str(), path, "API Error: {}", e);
                return Err(e.into());
            }
        };

        if !response.is_success() {
            let status = response.status;
            let body: ErrorBody = response.json().unwrap_or_default();
            let message = body
                .erro
                .unwrap_or_else(|| format!("HTTP error! status: {}", status));
            tracing::error!(method = method.as_str(), path, status, "API Error: {}", message);
            return Err(ApiError::Request { status, message });
        }

        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }

        response.json().map_err(|e| {
            tracing::error!(method = method.as_str(), path, "API Error: {}", e);
            ApiError::Decode(e)
        })
    }
}
