//! Construction defaults and finalize options

use crate::merge::Fields;
use serde::{Deserialize, Serialize};

/// Method used when none is given
pub const DEFAULT_METHOD: &str = "GET";

/// Timeout in milliseconds used when none is given
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Largest timeout accepted by finalize unless configured otherwise
pub const DEFAULT_MAX_TIMEOUT_MS: u64 = 60000;

/// Content type written by `set_content_type` callers that want the usual JSON
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Starting values for a new builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    /// HTTP method token
    pub method: String,

    /// Headers staged before any chained call
    pub headers: Fields,

    /// Query parameters staged before any chained call
    pub params: Fields,

    /// Timeout in milliseconds
    pub timeout: u64,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            method: DEFAULT_METHOD.to_string(),
            headers: Fields::new(),
            params: Fields::new(),
            timeout: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Rules applied by `ApiRequestBuilder::finalize`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalizeOptions {
    /// Reject urls that do not start with `https://`
    pub require_https: bool,

    /// Largest accepted timeout in milliseconds
    pub max_timeout: u64,

    /// Log the validated request at info level
    pub debug: bool,
}

impl Default for FinalizeOptions {
    fn default() -> Self {
        Self {
            require_https: false,
            max_timeout: DEFAULT_MAX_TIMEOUT_MS,
            debug: false,
        }
    }
}

impl FinalizeOptions {
    /// Options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Require or allow non-HTTPS urls
    pub fn require_https(mut self, required: bool) -> Self {
        self.require_https = required;
        self
    }

    /// Set the maximum timeout in milliseconds
    pub fn max_timeout(mut self, max_timeout: u64) -> Self {
        self.max_timeout = max_timeout;
        self
    }

    /// Enable or disable logging of validated requests
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }
}
