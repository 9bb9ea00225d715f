use crate::{
    abstract_trait::{DynUserQueryRepository, UserQueryServiceTrait},
    domain::responses::UserResponse,
    errors::ServiceError,
    utils::{Method, Metrics, OperationContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;

pub struct UserQueryService {
    pub query: DynUserQueryRepository,
    pub metrics: Metrics,
}

impl UserQueryService {
    pub fn new(query: DynUserQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::registered(registry, "user_query_service", "UserQueryService");

        Self { query, metrics }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(&self) -> Result<Vec<UserResponse>, ServiceError> {
        let op = OperationContext::start("FindAllUsers");

        let users: Vec<UserResponse> = self
            .query
            .find_all()
            .await
            .into_iter()
            .map(UserResponse::from)
            .collect();

        op.finish(
            &self.metrics,
            Method::Get,
            true,
            &format!("Fetched {} users", users.len()),
        );

        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> Result<UserResponse, ServiceError> {
        let op = OperationContext::start("FindUserById");

        let Some(user) = self.query.find_by_id(id).await else {
            op.finish(
                &self.metrics,
                Method::Get,
                false,
                &format!("User ID {id} not found"),
            );
            return Err(ServiceError::NotFound("User not found".to_string()));
        };

        op.finish(
            &self.metrics,
            Method::Get,
            true,
            &format!("Fetched user ID {id}"),
        );

        Ok(UserResponse::from(user))
    }
}
