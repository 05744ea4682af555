//! Cross-origin access policy.

use serde::{Deserialize, Serialize};

/// Origin string that matches every origin.
pub const WILDCARD_ORIGIN: &str = "*";
/// Production web frontend.
pub const PRODUCTION_ORIGIN: &str = "https://www.alazie.express";
/// Local frontend dev server.
pub const DEVELOPMENT_ORIGIN: &str = "http://localhost:3000";

/// Methods or headers a policy admits: everything, or an explicit list.
///
/// Serialized as a string list. Only the exact list `["*"]` means
/// [`Allowance::Any`]; a `"*"` mixed with other entries stays literal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum Allowance {
    #[default]
    Any,
    Only(Vec<String>),
}

impl Allowance {
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl From<Vec<String>> for Allowance {
    fn from(values: Vec<String>) -> Self {
        if matches!(values.as_slice(), [only] if only == WILDCARD_ORIGIN) {
            Self::Any
        } else {
            Self::Only(values)
        }
    }
}

impl From<Allowance> for Vec<String> {
    fn from(allowance: Allowance) -> Self {
        match allowance {
            Allowance::Any => vec![WILDCARD_ORIGIN.to_string()],
            Allowance::Only(values) => values,
        }
    }
}

/// Which browser origins may call the API, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    /// Exact-match origins; `"*"` is the wildcard sentinel
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Allowance,
    pub allowed_headers: Allowance,
    pub allow_credentials: bool,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::with_origins([PRODUCTION_ORIGIN, DEVELOPMENT_ORIGIN])
    }
}

impl AccessPolicy {
    /// Credentialed policy admitting any method and header from `origins`.
    pub fn with_origins<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
            allowed_methods: Allowance::Any,
            allowed_headers: Allowance::Any,
            allow_credentials: true,
        }
    }

    pub fn has_wildcard_origin(&self) -> bool {
        self.allows_origin(WILDCARD_ORIGIN)
    }

    /// Exact string match against the allow-list. No pattern matching.
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }
}
