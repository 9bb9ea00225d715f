use crate::{domain::responses::UserResponse, errors::ServiceError, model::User as UserModel};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;
pub type DynUserQueryService = Arc<dyn UserQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_all(&self) -> Vec<UserModel>;
    async fn find_by_id(&self, id: i32) -> Option<UserModel>;
}

#[async_trait]
pub trait UserQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<UserResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<UserResponse, ServiceError>;
}
