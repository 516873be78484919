use std::sync::Arc;

use hearth_core::error::CoreError;
use hearth_core::suggestions::catalog::{default_catalog, load_catalog_from_path};
use hearth_core::suggestions::MaintenanceTemplate;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind `Arc` and read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Maintenance template catalog, in evaluation order.
    pub catalog: Arc<Vec<MaintenanceTemplate>>,
}

impl AppState {
    /// Build state from configuration, loading the catalog from
    /// `MAINTENANCE_CATALOG_PATH` when set and the built-in one otherwise.
    pub fn from_config(config: ServerConfig) -> Result<Self, CoreError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let catalog = load_catalog_from_path(path)?;
                tracing::info!(
                    path = %path.display(),
                    templates = catalog.len(),
                    "Loaded maintenance catalog from file"
                );
                catalog
            }
            None => {
                let catalog = default_catalog();
                tracing::info!(templates = catalog.len(), "Using built-in maintenance catalog");
                catalog
            }
        };

        Ok(Self::with_catalog(config, catalog))
    }

    pub fn with_catalog(config: ServerConfig, catalog: Vec<MaintenanceTemplate>) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}
