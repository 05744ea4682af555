//! Application State
//!
//! Shared by every handler through axum's `State` extractor.

use std::sync::Arc;

use loadboard_core::ResourceStore;

#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub store: ResourceStore,
}

impl AppState {
    pub fn new(store: ResourceStore) -> Self {
        Self { inner: Arc::new(AppStateInner { store }) }
    }

    pub fn store(&self) -> &ResourceStore {
        &self.inner.store
    }
}
