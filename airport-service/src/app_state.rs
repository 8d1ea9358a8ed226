use std::sync::Arc;

use crate::{
    config::Config,
    store::{object_store::ObjectStore, registry::AirportRegistry},
};

#[derive(Debug, Clone)]
pub struct AppState(pub Arc<InnerAppState>);

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.0.config
    }

    #[must_use]
    pub fn registry(&self) -> &AirportRegistry {
        &self.0.registry
    }

    #[must_use]
    pub fn object_store(&self) -> &ObjectStore {
        &self.0.object_store
    }
}

#[derive(Debug)]
pub struct InnerAppState {
    pub config: Config,
    pub registry: AirportRegistry,
    pub object_store: ObjectStore,
}
