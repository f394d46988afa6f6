// Library crate entry to allow integration tests to access internal modules
pub mod app_state;
pub mod config;
pub mod demo;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::ServiceConfig;
pub use routes::create_router;
