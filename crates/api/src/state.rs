use prometheus_client::registry::Registry;
use shared::{
    di::{DependenciesInject, DependenciesInjectDeps},
    store::InMemoryStore,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &"<Registry>")
            .finish()
    }
}

impl AppState {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        let mut registry = Registry::default();

        let deps = DependenciesInjectDeps { store };
        let di_container = DependenciesInject::new(deps, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
        }
    }
}
