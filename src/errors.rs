//! Setup-time error types.
//!
//! All variants here are fatal at configuration load: a rule string that
//! cannot be parsed must abort before any warning event is processed.
//! Runtime event handling never surfaces errors (a bad event line is
//! dropped, at worst under-reporting), so there is no runtime error type.

use thiserror::Error;

/// Errors produced while building a `PolicyTable` from raw rule strings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The rule string does not have the `action:pattern:allowed` shape.
    #[error("malformed policy rule '{raw}': {reason}")]
    MalformedRule { raw: String, reason: &'static str },

    /// The action field is neither `enforce` nor `observe`.
    #[error("unknown action '{action}' in policy rule '{raw}' (expected 'enforce' or 'observe')")]
    UnknownAction { raw: String, action: String },

    /// The allowed-count field is non-blank but not a non-negative integer.
    #[error("invalid allowed count '{value}' in policy rule '{raw}'")]
    InvalidAllowedCount { raw: String, value: String },

    /// The pattern field is not a valid regular expression.
    #[error("invalid pattern in policy rule '{raw}': {source}")]
    InvalidPattern {
        raw: String,
        #[source]
        source: regex::Error,
    },
}
