use crate::{
    abstract_trait::ProductQueryRepositoryTrait, model::Product as ProductModel,
    store::InMemoryStore,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub struct ProductQueryRepository {
    store: Arc<InMemoryStore>,
}

impl ProductQueryRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Vec<ProductModel> {
        let products = self.store.products().read().await.list_all();

        info!("📦 Found {} products", products.len());
        products
    }

    async fn find_by_id(&self, id: i32) -> Option<ProductModel> {
        self.store.products().read().await.get(id)
    }
}
