use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{MessageResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    /// `None` when no product has this id.
    async fn update_product(&self, id: i32, req: &UpdateProductRequest) -> Option<ProductModel>;
    /// `false` when no product has this id.
    async fn delete_product(&self, id: i32) -> bool;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<MessageResponse, ServiceError>;
}
