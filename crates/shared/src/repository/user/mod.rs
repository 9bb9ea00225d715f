mod command;
mod query;

use self::command::UserCommandRepository;
use self::query::UserQueryRepository;

use crate::{
    abstract_trait::{DynUserCommandRepository, DynUserQueryRepository},
    store::InMemoryStore,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserRepository {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
}

impl UserRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        let query = Arc::new(UserQueryRepository::new(store.clone())) as DynUserQueryRepository;
        let command =
            Arc::new(UserCommandRepository::new(store.clone())) as DynUserCommandRepository;

        Self { query, command }
    }
}
