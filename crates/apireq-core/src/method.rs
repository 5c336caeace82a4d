//! HTTP method tokens

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Well-known HTTP methods
///
/// The builder stores the method as free text, so any token is accepted.
/// This enum only covers the common verbs and converts into that text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.to_string()
    }
}
