use crate::utils::present;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_in_stock() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Test Product")]
    pub name: String,

    #[schema(example = "Test Description")]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    #[schema(example = 99.99)]
    pub price: f64,

    #[schema(example = "Test Category")]
    pub category: String,

    #[serde(default)]
    #[schema(example = json!(["test", "sample"]))]
    pub tags: Vec<String>,

    #[serde(default = "default_in_stock")]
    #[schema(example = true)]
    pub in_stock: bool,
}

/// Partial update: `None` means the key was absent from the payload and the
/// stored value is kept. A present key always overwrites, even with `""`,
/// `false` or `[]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Updated Product")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    #[schema(example = 149.99)]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}
