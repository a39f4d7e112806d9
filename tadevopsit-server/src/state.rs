//! Application state shared across handlers

use std::sync::Arc;

use crate::db::TrackerStore;

/// Shared application state
///
/// Holds the storage handle the router was built with; nothing else is
/// shared between requests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn TrackerStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TrackerStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    pub fn store(&self) -> Arc<dyn TrackerStore> {
        Arc::clone(&self.inner.store)
    }
}
