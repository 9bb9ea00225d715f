use crate::{
    repository::{ProductRepository, UserRepository},
    service::{ProductService, UserService},
    store::InMemoryStore,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_service: ProductService,
    pub user_service: UserService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_service", &"<ProductService>")
            .field("user_service", &"<UserService>")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub store: Arc<InMemoryStore>,
}

impl DependenciesInject {
    /// Wires repositories and services over one shared store. Every service
    /// registers its metric families in `registry`.
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps { store } = deps;

        let product_repository = ProductRepository::new(store.clone());
        let user_repository = UserRepository::new(store.clone());

        let product_service = ProductService::new(
            product_repository.query.clone(),
            product_repository.command.clone(),
            registry,
        );

        let user_service = UserService::new(
            user_repository.query.clone(),
            user_repository.command.clone(),
            registry,
        );

        Self {
            product_service,
            user_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::CreateUserRequest;
    use testresult::TestResult;

    #[tokio::test]
    async fn services_share_the_injected_store() -> TestResult {
        let store = Arc::new(InMemoryStore::new());
        let mut registry = Registry::default();
        let di = DependenciesInject::new(
            DependenciesInjectDeps {
                store: store.clone(),
            },
            &mut registry,
        );

        let req = CreateUserRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "pw".to_string(),
        };
        di.user_service.command.create_user(&req).await?;

        assert_eq!(store.users().read().await.len(), 1);
        assert!(di.product_service.query.find_all().await?.is_empty());
        Ok(())
    }
}
