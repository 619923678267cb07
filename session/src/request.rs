//! Transport-agnostic description of one API call.
//!
//! DESIGN
//! ======
//! Authorization is a field of each request rather than a default header on
//! a shared client, so every caller attaches the session's token explicitly
//! and no request inherits credentials it was not given.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::Serialize;

use crate::error::ApiError;
use crate::types::BearerToken;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Form(Vec<(String, String)>),
    Json(serde_json::Value),
}

impl RequestBody {
    #[must_use]
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Form(_) => Some(FORM_CONTENT_TYPE),
            Self::Json(_) => Some(JSON_CONTENT_TYPE),
        }
    }

    /// Serialized body, `None` for bodiless requests.
    #[must_use]
    pub fn encode(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Form(pairs) => Some(encode_pairs(pairs)),
            Self::Json(value) => Some(value.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<BearerToken>,
    pub body: RequestBody,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            authorization: None,
            body: RequestBody::Empty,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn bearer(mut self, token: &BearerToken) -> Self {
        self.authorization = Some(token.clone());
        self
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    #[must_use]
    pub fn form(mut self, pairs: &[(&str, &str)]) -> Self {
        self.body = RequestBody::Form(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        );
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Json`] if `body` cannot be serialized.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Absolute URL for this request against `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&encode_pairs(&self.query));
        }
        url
    }

    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.authorization.as_ref().map(BearerToken::header_value)
    }

    #[must_use]
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.content_type()
    }

    #[must_use]
    pub fn encoded_body(&self) -> Option<String> {
        self.body.encode()
    }
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
