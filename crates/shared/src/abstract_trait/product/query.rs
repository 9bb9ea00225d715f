use crate::{
    domain::responses::ProductResponse, errors::ServiceError, model::Product as ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Vec<ProductModel>;
    async fn find_by_id(&self, id: i32) -> Option<ProductModel>;
}

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError>;
}
