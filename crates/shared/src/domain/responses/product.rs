use crate::model::Product as ProductModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub tags: Vec<String>,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            category: value.category,
            tags: value.tags,
            in_stock: value.in_stock,
            created_at: value.created_at,
        }
    }
}
