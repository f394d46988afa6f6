pub mod service;

pub use service::{ServiceConfig, DEFAULT_CONFIG_FILE};
