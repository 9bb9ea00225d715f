mod command;
mod query;

use self::command::ProductCommandRepository;
use self::query::ProductQueryRepository;

use crate::{
    abstract_trait::{DynProductCommandRepository, DynProductQueryRepository},
    store::InMemoryStore,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductRepository {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl ProductRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        let query = Arc::new(ProductQueryRepository::new(store.clone())) as DynProductQueryRepository;

        let command =
            Arc::new(ProductCommandRepository::new(store.clone())) as DynProductCommandRepository;

        Self { query, command }
    }
}
