use crate::{
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::{MessageResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::User as UserModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;
pub type DynUserCommandService = Arc<dyn UserCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError>;
    async fn update_user(&self, id: i32, req: &UpdateUserRequest) -> Option<UserModel>;
    async fn delete_user(&self, id: i32) -> bool;
}

#[async_trait]
pub trait UserCommandServiceTrait {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserResponse, ServiceError>;
    async fn update_user(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<UserResponse, ServiceError>;
    async fn delete_user(&self, id: i32) -> Result<MessageResponse, ServiceError>;
}
