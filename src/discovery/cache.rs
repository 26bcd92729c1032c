use super::build::discover_routes;
use super::types::RouteRecord;
use crate::error::DiscoveryError;
use crate::registry::TypeRegistry;
use crate::runtime_config::DiscoveryConfig;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Route table discovered once and shared read-only afterwards.
///
/// The first successful [`RouteCatalog::routes`] call runs discovery; every
/// later call returns the same table. Concurrent first callers block on the
/// initialization guard, so nobody observes a partially built table. A
/// failed discovery is not cached and is retried by the next call.
pub struct RouteCatalog<R> {
    registry: R,
    config: DiscoveryConfig,
    routes: OnceCell<Arc<[RouteRecord]>>,
}

impl<R: TypeRegistry> RouteCatalog<R> {
    pub fn new(registry: R, config: DiscoveryConfig) -> Self {
        RouteCatalog {
            registry,
            config,
            routes: OnceCell::new(),
        }
    }

    pub fn routes(&self) -> Result<Arc<[RouteRecord]>, DiscoveryError> {
        self.routes
            .get_or_try_init(|| discover_routes(&self.registry, &self.config).map(Arc::from))
            .map(Arc::clone)
    }

    pub fn is_initialized(&self) -> bool {
        self.routes.get().is_some()
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }
}
