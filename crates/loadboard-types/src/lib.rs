//! # LoadBoard Types
//!
//! Records, payloads, access policy and error definitions for the LoadBoard API.
//!
//! - **`error`** - Typed errors for payload validation and CORS policy construction
//! - **`models`** - Resource records (upgrade requests, AI integrations) and the access policy
//!
//! ## Architecture Role
//!
//! `loadboard-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     loadboard-types (this crate)
//!              │
//!              ▼
//!       loadboard-core
//!              │
//!              ▼
//!      loadboard-server
//! ```
//!
//! Nothing in here performs I/O. Records are `Serialize + Deserialize + Clone`
//! so they can be handed straight to the HTTP layer.

pub mod error;
pub mod models;

pub use error::{PolicyError, ValidationError};

pub use models::{
    AccessPolicy, AiIntegration, Allowance, NewUpgradeRequest, UpgradeRequest,
    DEVELOPMENT_ORIGIN, PRODUCTION_ORIGIN, WILDCARD_ORIGIN,
};
