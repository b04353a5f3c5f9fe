//! Raw HTTP exchange behind the typed API client.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Elsewhere: [`BrowserTransport`] fails every call with a network error, so
//! native builds and tests never touch the network by accident.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;

use super::error::ApiError;

#[cfg(any(test, feature = "csr"))]
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
}

/// A fully resolved request: absolute URL, optional bearer token, body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Body,
}

impl ApiRequest {
    pub fn new(method: Method, url: String) -> Self {
        Self { method, url, bearer: None, body: Body::Empty }
    }

    #[must_use]
    pub fn bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = Body::Json(value);
        self
    }

    #[must_use]
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = Body::Form(pairs);
        self
    }
}

/// Status code and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can carry an [`ApiRequest`] to the backend.
///
/// Implementations return `Err` only when no response was received; HTTP
/// error statuses come back as `Ok` and are classified by the caller.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// A body that cannot be read is a transport failure, not an empty body.
#[cfg(any(test, feature = "csr"))]
fn read_body<E: std::fmt::Display>(body: Result<String, E>) -> Result<String, ApiError> {
    body.map_err(|e| ApiError::Network(format!("reading response body: {e}")))
}

/// `fetch`-backed transport used by the running app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    #[allow(clippy::unused_async)]
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            if let Some(token) = request.bearer.as_deref() {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let prepared = match &request.body {
                Body::Empty => builder.build(),
                Body::Json(value) => builder.json(value),
                Body::Form(pairs) => builder
                    .header("Content-Type", FORM_CONTENT_TYPE)
                    .body(encode_form(pairs)?),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = read_body(resp.text().await)?;
            log::debug!("{:?} {} -> {status}", request.method, request.url);
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Network("HTTP is only available in the browser".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
fn encode_form(pairs: &[(String, String)]) -> Result<String, ApiError> {
    let params = web_sys::UrlSearchParams::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    for (key, value) in pairs {
        params.append(key, value);
    }
    Ok(String::from(params.to_string()))
}
