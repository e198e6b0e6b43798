use serde::{Deserialize, Serialize};

/// Callback parameters sent by the OAuth provider via query string
#[derive(Deserialize, Debug, Default)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// Validated callback data with the query values echoed unchanged
///
/// `state` is `None` when neither the query parameter nor the `state` cookie
/// was present; the two are compared as options, so both-absent counts as a
/// match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCallback {
    pub code: String,
    pub state: Option<String>,
}

/// Metadata embedded in an organization email address
///
/// Derived from the configured pattern's capture groups: a two-digit
/// matriculation year suffix and a numeric member index. Both fields are `0`
/// when the pattern carries no usable capture groups.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserMetadata {
    pub year: u32,
    pub index: u64,
}
