use crate::{
    abstract_trait::{DynUserCommandRepository, UserCommandServiceTrait},
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::{MessageResponse, UserResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, OperationContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;

pub struct UserCommandService {
    pub command: DynUserCommandRepository,
    pub metrics: Metrics,
}

impl UserCommandService {
    pub fn new(command: DynUserCommandRepository, registry: &mut Registry) -> Self {
        let metrics =
            Metrics::registered(registry, "user_command_service", "UserCommandService");

        Self { command, metrics }
    }

    fn not_found(&self, op: &OperationContext, method: Method, id: i32) -> ServiceError {
        op.finish(
            &self.metrics,
            method,
            false,
            &format!("User ID {id} not found"),
        );
        ServiceError::NotFound("User not found".to_string())
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserCommandService {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserResponse, ServiceError> {
        let op = OperationContext::start("CreateUser");

        let user = match self.command.create_user(req).await {
            Ok(user) => user,
            Err(err) => {
                op.finish(&self.metrics, Method::Post, false, &err.to_string());
                return Err(ServiceError::from(err));
            }
        };

        op.finish(
            &self.metrics,
            Method::Post,
            true,
            &format!("Created user ID {}", user.id),
        );

        Ok(UserResponse::from(user))
    }

    async fn update_user(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<UserResponse, ServiceError> {
        let op = OperationContext::start("UpdateUser");

        let Some(user) = self.command.update_user(id, req).await else {
            return Err(self.not_found(&op, Method::Put, id));
        };

        op.finish(
            &self.metrics,
            Method::Put,
            true,
            &format!("Updated user ID {id}"),
        );

        Ok(UserResponse::from(user))
    }

    async fn delete_user(&self, id: i32) -> Result<MessageResponse, ServiceError> {
        let op = OperationContext::start("DeleteUser");

        if !self.command.delete_user(id).await {
            return Err(self.not_found(&op, Method::Delete, id));
        }

        op.finish(
            &self.metrics,
            Method::Delete,
            true,
            &format!("Deleted user ID {id}"),
        );

        Ok(MessageResponse::new("User deleted successfully"))
    }
}
