//! Fluent staging area for `ApiRequest`
//!
//! Every mutator takes `&mut self` and hands the same builder back, so calls
//! chain in place. Validation is deferred until `finalize`, which only reads
//! the staged state and copies it into a fresh `ApiRequest`.

use crate::error::{Result, ValidationError};
use crate::merge::{Fields, merge_pairs};
use crate::options::{FinalizeOptions, RequestDefaults};
use crate::request::ApiRequest;
use tracing::{debug, info, warn};

const HTTPS_PREFIX: &str = "https://";

const CONTENT_TYPE: &str = "Content-Type";

/// Mutable builder for [`ApiRequest`]
///
/// Not thread-safe; one logical owner at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequestBuilder {
    url: String,
    method: String,
    headers: Fields,
    params: Fields,
    timeout: u64,
}

impl ApiRequestBuilder {
    /// Create a builder for `url` with the standard defaults
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_defaults(url, &RequestDefaults::default())
    }

    /// Create a builder for `url` seeded from `defaults`
    pub fn with_defaults(url: impl Into<String>, defaults: &RequestDefaults) -> Self {
        let builder = Self {
            url: url.into(),
            method: defaults.method.clone(),
            headers: defaults.headers.clone(),
            params: defaults.params.clone(),
            timeout: defaults.timeout,
        };
        debug!("Created request builder for {}", builder.url);
        builder
    }

    /// Replace the HTTP method
    pub fn set_method(&mut self, method: impl Into<String>) -> &mut Self {
        self.method = method.into();
        self
    }

    /// Replace the timeout, in milliseconds
    pub fn set_timeout(&mut self, timeout_ms: u64) -> &mut Self {
        self.timeout = timeout_ms;
        self
    }

    /// Set a header, overwriting any previous value for `name`
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set several headers in order; later pairs win over earlier ones
    pub fn add_headers<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        merge_pairs(&mut self.headers, pairs);
        self
    }

    /// Set the `Content-Type` header
    pub fn set_content_type(&mut self, content_type: impl Into<String>) -> &mut Self {
        self.add_header(CONTENT_TYPE, content_type)
    }

    /// Set a query parameter, overwriting any previous value for `name`
    pub fn add_param(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Set several query parameters in order; later pairs win over earlier ones
    pub fn add_params<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        merge_pairs(&mut self.params, pairs);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn headers(&self) -> &Fields {
        &self.headers
    }

    pub fn params(&self) -> &Fields {
        &self.params
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Validate the staged state and produce an [`ApiRequest`]
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// the HTTPS requirement, then the timeout limit. The builder is left
    /// untouched either way, so it can be fixed and finalized again.
    pub fn finalize(&self, options: FinalizeOptions) -> Result<ApiRequest> {
        if let Err(e) = self.validate(&options) {
            warn!("Rejected request to {}: {}", self.url, e);
            return Err(e);
        }

        let request = ApiRequest::new(
            self.method.clone(),
            self.url.clone(),
            self.headers.clone(),
            self.params.clone(),
            self.timeout,
        );

        if options.debug {
            info!("Validated request: {}", request);
        } else {
            debug!("Validated request: {}", request);
        }

        Ok(request)
    }

    /// Finalize with the default options
    pub fn build(&self) -> Result<ApiRequest> {
        self.finalize(FinalizeOptions::default())
    }

    fn validate(&self, options: &FinalizeOptions) -> Result<()> {
        if options.require_https && !self.url.starts_with(HTTPS_PREFIX) {
            return Err(ValidationError::HttpsRequired {
                url: self.url.clone(),
            });
        }

        if self.timeout > options.max_timeout {
            return Err(ValidationError::TimeoutTooHigh {
                timeout: self.timeout,
                max_timeout: options.max_timeout,
            });
        }

        Ok(())
    }
}
