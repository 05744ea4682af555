//! Typed error definitions.
//!
//! Both error types are plain data: `ValidationError` is serialized into
//! HTTP 422 bodies, `PolicyError` is reported at startup.

mod policy;
mod validation;

pub use policy::PolicyError;
pub use validation::ValidationError;
