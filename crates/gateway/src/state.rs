//! Application state shared across handlers.

use std::sync::Arc;

use bonbon_engine::ShopEngine;

use crate::config::GatewayConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the shop engine.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: GatewayConfig,
    engine: ShopEngine,
}

impl AppState {
    /// Create application state over the built-in sweets assortment.
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_engine(config, ShopEngine::sweet_shop())
    }

    /// Create application state over a specific engine.
    #[must_use]
    pub fn with_engine(config: GatewayConfig, engine: ShopEngine) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, engine }),
        }
    }

    /// Get a reference to the gateway configuration.
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.inner.config
    }

    /// Get a reference to the shop engine.
    #[must_use]
    pub fn engine(&self) -> &ShopEngine {
        &self.inner.engine
    }
}
