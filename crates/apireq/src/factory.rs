//! Builders and finalization driven by a shared configuration

use apireq_core::{ApiRequest, ApiRequestBuilder, FinalizeOptions};
use tracing::debug;

use crate::config::RequestConfig;
use crate::error::Result;

/// Hands out builders seeded from a [`RequestConfig`] and finalizes them
/// with its validation rules
#[derive(Debug, Clone, Default)]
pub struct RequestFactory {
    config: RequestConfig,
}

impl RequestFactory {
    /// Create a factory from a configuration
    pub fn new(config: RequestConfig) -> Self {
        debug!(
            "Request factory: require_https={}, max_timeout={}",
            config.validation.require_https, config.validation.max_timeout
        );
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Validation rules used by [`RequestFactory::finalize`]
    pub fn options(&self) -> FinalizeOptions {
        self.config.validation
    }

    /// Start a builder for `url` with the configured defaults
    pub fn builder(&self, url: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::with_defaults(url, &self.config.defaults)
    }

    /// Finalize `builder` with the configured validation rules
    pub fn finalize(&self, builder: &ApiRequestBuilder) -> Result<ApiRequest> {
        Ok(builder.finalize(self.config.validation)?)
    }
}
