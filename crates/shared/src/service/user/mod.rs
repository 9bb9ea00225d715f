mod command;
mod query;

use self::command::UserCommandService;
use self::query::UserQueryService;
use crate::abstract_trait::{
    DynUserCommandRepository, DynUserCommandService, DynUserQueryRepository, DynUserQueryService,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct UserService {
    pub query: DynUserQueryService,
    pub command: DynUserCommandService,
}

impl fmt::Debug for UserService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserService")
            .field("query", &"Arc<dyn UserQueryServiceTrait>")
            .field("command", &"Arc<dyn UserCommandServiceTrait>")
            .finish()
    }
}

impl UserService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let query = Arc::new(UserQueryService::new(query, registry)) as DynUserQueryService;
        let command = Arc::new(UserCommandService::new(command, registry)) as DynUserCommandService;

        Self { query, command }
    }
}
