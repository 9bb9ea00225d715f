use crate::{
    abstract_trait::UserCommandRepositoryTrait,
    domain::requests::{CreateUserRequest, UpdateUserRequest},
    errors::RepositoryError,
    model::User as UserModel,
    store::InMemoryStore,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct UserCommandRepository {
    store: Arc<InMemoryStore>,
}

impl UserCommandRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let user = self
            .store
            .users()
            .write()
            .await
            .create(req)
            .inspect_err(|err| error!("❌ Failed to create user {}: {err}", req.email))?;

        info!("✅ Created user ID {} ({})", user.id, user.email);
        Ok(user)
    }

    async fn update_user(&self, id: i32, req: &UpdateUserRequest) -> Option<UserModel> {
        let result = self.store.users().write().await.update(id, req);

        match &result {
            Some(user) => info!("🔄 Updated user ID {} ({})", user.id, user.email),
            None => warn!("⚠️ User ID {id} not found for update"),
        }
        result
    }

    async fn delete_user(&self, id: i32) -> bool {
        let removed = self.store.users().write().await.delete(id);

        if removed {
            info!("🗑️ Permanently deleted user ID {id}");
        } else {
            warn!("⚠️ User ID {id} not found for deletion");
        }
        removed
    }
}
