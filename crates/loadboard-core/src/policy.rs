//! CORS policy checklist.
//!
//! [`validate`] is a pure function over an [`AccessPolicy`]. The server runs
//! it at startup and the `check-cors` command prints its findings.

use serde::Serialize;

use loadboard_types::{AccessPolicy, DEVELOPMENT_ORIGIN, PRODUCTION_ORIGIN, WILDCARD_ORIGIN};

/// One item of the fixed checklist, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyCheck {
    CredentialsEnabled,
    ProductionOrigin,
    DevelopmentOrigin,
    NoWildcardOrigin,
    AnyMethod,
    AnyHeader,
}

impl PolicyCheck {
    pub const ALL: [Self; 6] = [
        Self::CredentialsEnabled,
        Self::ProductionOrigin,
        Self::DevelopmentOrigin,
        Self::NoWildcardOrigin,
        Self::AnyMethod,
        Self::AnyHeader,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::CredentialsEnabled => "allow_credentials",
            Self::ProductionOrigin => "production origin",
            Self::DevelopmentOrigin => "development origin",
            Self::NoWildcardOrigin => "wildcard origin",
            Self::AnyMethod => "allow_methods",
            Self::AnyHeader => "allow_headers",
        }
    }

    fn evaluate(self, policy: &AccessPolicy) -> Finding {
        let (passed, detail) = match self {
            Self::CredentialsEnabled => {
                if policy.allow_credentials {
                    (true, "allow_credentials is true".to_string())
                } else {
                    (false, "allow_credentials should be true".to_string())
                }
            }
            Self::ProductionOrigin => origin_present(policy, PRODUCTION_ORIGIN, "Production"),
            Self::DevelopmentOrigin => origin_present(policy, DEVELOPMENT_ORIGIN, "Development"),
            Self::NoWildcardOrigin => {
                if policy.has_wildcard_origin() {
                    (
                        false,
                        format!(
                            "wildcard origin ({WILDCARD_ORIGIN}) must not be allowed when \
                             allow_credentials is true"
                        ),
                    )
                } else {
                    (true, format!("no wildcard origin ({WILDCARD_ORIGIN}) present"))
                }
            }
            Self::AnyMethod => {
                if policy.allowed_methods.is_any() {
                    (true, r#"allow_methods is ["*"]"#.to_string())
                } else {
                    (false, r#"allow_methods should be ["*"]"#.to_string())
                }
            }
            Self::AnyHeader => {
                if policy.allowed_headers.is_any() {
                    (true, r#"allow_headers is ["*"]"#.to_string())
                } else {
                    (false, r#"allow_headers should be ["*"]"#.to_string())
                }
            }
        };
        Finding { check: self, passed, detail }
    }
}

fn origin_present(policy: &AccessPolicy, origin: &str, which: &str) -> (bool, String) {
    if policy.allows_origin(origin) {
        (true, format!("{which} origin ({origin}) is present"))
    } else {
        (false, format!("{which} origin ({origin}) is missing"))
    }
}

/// Result of a single checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub check: PolicyCheck,
    pub passed: bool,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyReport {
    pub findings: Vec<Finding>,
}

impl PolicyReport {
    /// True when every check passed.
    pub fn passed(&self) -> bool {
        self.findings.iter().all(|f| f.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.findings.iter().filter(|f| f.passed).count()
    }

    pub fn total(&self) -> usize {
        self.findings.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.passed)
    }
}

/// Run the fixed six-item checklist against `policy`.
pub fn validate(policy: &AccessPolicy) -> PolicyReport {
    PolicyReport { findings: PolicyCheck::ALL.iter().map(|c| c.evaluate(policy)).collect() }
}
