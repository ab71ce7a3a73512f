//! Builder-style HTTP client.

use std::collections::HashMap;

use reqwest::Method;
use serde::Serialize;

use crate::{FetchError, Response};

/// HTTP client for outbound requests.
///
/// Relative URLs are resolved against the base URL; default headers are
/// added to every request. There is no retry and no timeout beyond what the
/// underlying client applies.
#[derive(Debug, Clone)]
pub struct FetchClient {
    inner: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder {
        let url = self.resolve_url(url.into());
        let mut builder = RequestBuilder {
            client: self.inner.clone(),
            method,
            url,
            headers: Vec::new(),
            body: None,
        };
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder
    }

    /// Resolve a URL against the base URL.
    pub fn resolve_url(&self, url: String) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url,
        }
    }
}

/// A request being built.
#[derive(Debug)]
pub struct RequestBuilder {
    client: reqwest::Client,
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Set the request body as JSON, with a JSON content type.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, FetchError> {
        self.body = Some(serde_json::to_vec(value)?);
        Ok(self.header("Content-Type", "application/json"))
    }

    /// Target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the request and read the full response.
    pub async fn send(self) -> Result<Response, FetchError> {
        tracing::debug!(method = %self.method, url = %self.url, "sending request");

        let mut request = self.client.request(self.method, &self.url);
        for (key, value) in &self.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = self.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_lowercase(),
                    v.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(status, bytes = body.len(), "response received");
        Ok(Response::new(status, headers, body))
    }
}
