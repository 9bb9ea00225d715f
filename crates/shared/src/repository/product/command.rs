use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product as ProductModel,
    store::InMemoryStore,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct ProductCommandRepository {
    store: Arc<InMemoryStore>,
}

impl ProductCommandRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let product = self
            .store
            .products()
            .write()
            .await
            .create(req)
            .inspect_err(|err| error!("❌ Failed to create product {}: {err}", req.name))?;

        info!("✅ Created product ID {} ({})", product.id, product.name);
        Ok(product)
    }

    async fn update_product(&self, id: i32, req: &UpdateProductRequest) -> Option<ProductModel> {
        let result = self.store.products().write().await.update(id, req);

        match &result {
            Some(product) => info!("🔄 Updated product ID {} ({})", product.id, product.name),
            None => warn!("⚠️ Product ID {id} not found for update"),
        }
        result
    }

    async fn delete_product(&self, id: i32) -> bool {
        let removed = self.store.products().write().await.delete(id);

        if removed {
            info!("🗑️ Permanently deleted product ID {id}");
        } else {
            warn!("⚠️ Product ID {id} not found for deletion");
        }
        removed
    }
}
