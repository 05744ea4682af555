//! # LoadBoard Core
//!
//! Shared state and policy logic behind the LoadBoard API.
//!
//! ```text
//! loadboard-core/src/
//! ├── store.rs          # In-memory upgrade requests + AI integrations
//! ├── seed.rs           # Demo records for `--seed`
//! ├── policy.rs         # Pure CORS checklist (validate)
//! └── middleware/
//!     └── cors.rs       # AccessPolicy -> tower-http CorsLayer
//! ```

pub mod middleware;
pub mod policy;
pub mod seed;
pub mod store;

pub use middleware::cors_layer;
pub use policy::{validate, Finding, PolicyCheck, PolicyReport};
pub use store::ResourceStore;
