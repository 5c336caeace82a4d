//! Main crate for apireq
//!
//! Re-exports the core builder types and adds the configuration layer:
//! [`RequestConfig`] for defaults and validation rules, and
//! [`RequestFactory`] for producing builders and requests from it.

pub mod config;
pub mod error;
pub mod factory;

// Re-export core types
pub use apireq_core::{
    ApiRequest, ApiRequestBuilder, DEFAULT_CONTENT_TYPE, DEFAULT_MAX_TIMEOUT_MS, DEFAULT_METHOD,
    DEFAULT_TIMEOUT_MS, Fields, FinalizeOptions, HttpMethod, RequestDefaults, ValidationError,
    merge_pairs,
};

pub use config::RequestConfig;
pub use error::{ApireqError, Result};
pub use factory::RequestFactory;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::factory::RequestFactory;
    pub use apireq_core::{ApiRequest, ApiRequestBuilder, FinalizeOptions, HttpMethod};
}
