//! CORS policy errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An access policy that cannot be turned into a working CORS layer.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum PolicyError {
    /// Browsers reject `Access-Control-Allow-Origin: *` on credentialed requests
    #[error("Wildcard origin (*) cannot be combined with allow_credentials=true")]
    WildcardWithCredentials,

    /// Origin is not a valid header value
    #[error("Invalid origin '{origin}': {message}")]
    InvalidOrigin {
        /// The rejected origin string
        origin: String,
        /// Parser error message
        message: String,
    },

    /// Method name is not a valid HTTP method token
    #[error("Invalid method '{method}'")]
    InvalidMethod {
        /// The rejected method string
        method: String,
    },

    /// Header name is not a valid HTTP header name
    #[error("Invalid header name '{header}'")]
    InvalidHeader {
        /// The rejected header string
        header: String,
    },
}
