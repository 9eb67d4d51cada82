//! Equipment Registry
//!
//! Office equipment inventory: staff register assets (tag, name, brand,
//! model, serial, type, value, acquisition date, condition, charger wattage)
//! into a single JSON data file, and any front-end can ask for a sorted,
//! filtered table with total value and type distribution through a REST JSON
//! API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire the JSON file store configured in `config` into the services.
    pub fn new(config: AppConfig) -> Self {
        let store = Arc::new(repository::JsonFileStore::from_config(&config.storage));
        let services = services::Services::new(store, &config.display);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
