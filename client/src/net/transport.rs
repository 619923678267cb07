//! `fetch`-backed [`Transport`] for the workout API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every send fails with a transport error, since the API
//! is only ever called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Only failures that produce no HTTP response are errors here; status codes
//! are interpreted by `session::ApiResponse`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use session::{ApiError, ApiRequest, ApiResponse, Transport};

use crate::config;

/// Browser transport bound to one API origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserTransport {
    base_url: &'static str,
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self::new(config::api_base_url())
    }
}

impl BrowserTransport {
    pub fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &'static str {
        self.base_url
    }
}

/// Headers to attach to `request`, in send order.
fn request_headers(request: &ApiRequest) -> Vec<(&'static str, String)> {
    let mut headers = Vec::new();
    if let Some(authorization) = request.authorization_header() {
        headers.push(("Authorization", authorization));
    }
    if let Some(content_type) = request.content_type() {
        headers.push(("Content-Type", content_type.to_owned()));
    }
    headers
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Request, RequestBuilder};

            let url = request.url(self.base_url);
            let mut builder: RequestBuilder = match request.method {
                session::Method::Get => Request::get(&url),
                session::Method::Post => Request::post(&url),
                session::Method::Delete => Request::delete(&url),
            };
            for (name, value) in request_headers(&request) {
                builder = builder.header(name, &value);
            }
            let prepared = match request.encoded_body() {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let response = prepared
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            log::debug!("{} {} -> {status}", request.method.as_str(), request.path);
            Ok(ApiResponse::new(status, body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request_headers(&request);
            Err(ApiError::Transport(format!(
                "{} {} is only available in the browser",
                request.method.as_str(),
                request.path
            )))
        }
    }
}
