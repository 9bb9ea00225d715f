use crate::{abstract_trait::UserQueryRepositoryTrait, model::User as UserModel, store::InMemoryStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub struct UserQueryRepository {
    store: Arc<InMemoryStore>,
}

impl UserQueryRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_all(&self) -> Vec<UserModel> {
        let users = self.store.users().read().await.list_all();

        info!("👥 Found {} users", users.len());
        users
    }

    async fn find_by_id(&self, id: i32) -> Option<UserModel> {
        self.store.users().read().await.get(id)
    }
}
