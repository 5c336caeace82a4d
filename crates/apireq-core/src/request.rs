//! Immutable request value produced by the builder

use crate::builder::ApiRequestBuilder;
use crate::merge::Fields;
use serde::Serialize;
use std::fmt;

/// A validated, immutable API request
///
/// Only `ApiRequestBuilder::finalize` creates values of this type. There are
/// no setters; to derive a changed request, restage it with [`ApiRequest::to_builder`]
/// and finalize again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiRequest {
    method: String,
    url: String,
    headers: Fields,
    params: Fields,
    timeout: u64,
}

impl ApiRequest {
    pub(crate) fn new(
        method: String,
        url: String,
        headers: Fields,
        params: Fields,
        timeout: u64,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            params,
            timeout,
        }
    }

    /// HTTP method token
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Target url
    pub fn url(&self) -> &str {
        &self.url
    }

    /// All headers
    pub fn headers(&self) -> &Fields {
        &self.headers
    }

    /// All query parameters
    pub fn params(&self) -> &Fields {
        &self.params
    }

    /// Timeout in milliseconds
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Look up a single header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Look up a single query parameter value
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Stage a copy of this request in a new builder
    pub fn to_builder(&self) -> ApiRequestBuilder {
        let mut builder = ApiRequestBuilder::new(self.url.clone());
        builder
            .set_method(self.method.clone())
            .set_timeout(self.timeout)
            .add_headers(self.headers.clone())
            .add_params(self.params.clone());
        builder
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (timeout: {}ms)", self.method, self.url, self.timeout)
    }
}
