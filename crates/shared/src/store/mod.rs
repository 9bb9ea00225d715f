mod collection;
mod seed;

pub use self::collection::{Collection, Record};

use crate::{
    errors::RepositoryError,
    model::{Product, User},
};
use tokio::sync::RwLock;
use tracing::info;

/// Process-wide data for both resources.
///
/// Each collection sits behind its own lock so a product write never waits
/// on a user write. Callers hold the write guard for the whole
/// read-modify-write of create, update and delete.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: RwLock<Collection<Product>>,
    users: RwLock<Collection<User>>,
}

impl InMemoryStore {
    /// Empty collections, both counters at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collections pre-filled with the demo catalogue the service ships with.
    pub fn with_sample_data() -> Result<Self, RepositoryError> {
        let mut products = Collection::new();
        for req in seed::sample_products() {
            products.create(&req)?;
        }

        let mut users = Collection::new();
        for req in seed::sample_users() {
            users.create(&req)?;
        }

        info!(
            "🌱 Seeded store with {} products and {} users",
            products.len(),
            users.len()
        );

        Ok(Self {
            products: RwLock::new(products),
            users: RwLock::new(users),
        })
    }

    pub fn products(&self) -> &RwLock<Collection<Product>> {
        &self.products
    }

    pub fn users(&self) -> &RwLock<Collection<User>> {
        &self.users
    }
}
