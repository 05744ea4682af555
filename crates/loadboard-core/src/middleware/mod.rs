// Middleware module - Axum/tower layers

pub mod cors;

pub use cors::cors_layer;
