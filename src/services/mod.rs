//! Business logic services

pub mod equipment;

use std::sync::Arc;

use crate::{config::DisplayConfig, repository::EquipmentStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: Arc<dyn EquipmentStore>, display: &DisplayConfig) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(store, display),
        }
    }
}
