//! `reqwest`-backed [`Transport`] for the workout API.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use session::{ApiError, ApiRequest, ApiResponse, Method, Transport};

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = request.url(&self.base_url);
        let mut builder = self.client.request(reqwest_method(request.method), &url);
        if let Some(authorization) = request.authorization_header() {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        if let Some(content_type) = request.content_type() {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        if let Some(body) = request.encoded_body() {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!(method = request.method.as_str(), path = %request.path, status, "api response");
        Ok(ApiResponse::new(status, body))
    }
}
