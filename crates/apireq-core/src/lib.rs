//! # apireq core
//!
//! Mutable request builder with a validating finalize step that produces
//! immutable [`ApiRequest`] values.

pub mod builder;
pub mod error;
pub mod merge;
pub mod method;
pub mod options;
pub mod request;

pub use builder::ApiRequestBuilder;
pub use error::{Result, ValidationError};
pub use merge::{Fields, merge_pairs};
pub use method::HttpMethod;
pub use options::{
    DEFAULT_CONTENT_TYPE, DEFAULT_MAX_TIMEOUT_MS, DEFAULT_METHOD, DEFAULT_TIMEOUT_MS,
    FinalizeOptions, RequestDefaults,
};
pub use request::ApiRequest;
