use parking_lot::Mutex;
use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::demo::DemoStore;

/// Application state handed to every route through axum `State`.
/// Built once at startup; dropped when the server shuts down.
pub struct AppState {
    /// Day-state store. Each request holds the lock for one whole operation.
    pub store: Mutex<DemoStore>,

    pub config: ServiceConfig,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: DemoStore, config: ServiceConfig) -> Self {
        Self {
            store: Mutex::new(store),
            config,
        }
    }

    /// State with host clock and OS-seeded randomness for the configured station.
    pub fn from_config(config: ServiceConfig) -> Self {
        let store = DemoStore::with_system_sources(config.station());
        Self::new(store, config)
    }

    /// Explicit startup seeding so no request pays for it.
    pub fn initialize(&self) -> bool {
        self.store.lock().seed_if_needed()
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
