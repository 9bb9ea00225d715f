use crate::{
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    store::Record,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub tags: Vec<String>,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for Product {
    type Create = CreateProductRequest;
    type Update = UpdateProductRequest;

    fn build(id: i32, created_at: DateTime<Utc>, req: &CreateProductRequest) -> Self {
        Product {
            id,
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            category: req.category.clone(),
            tags: req.tags.clone(),
            in_stock: req.in_stock,
            created_at,
        }
    }

    fn merge(&mut self, req: &UpdateProductRequest) {
        if let Some(name) = &req.name {
            self.name = name.clone();
        }
        if let Some(description) = &req.description {
            self.description = description.clone();
        }
        if let Some(price) = req.price {
            self.price = price;
        }
        if let Some(category) = &req.category {
            self.category = category.clone();
        }
        if let Some(tags) = &req.tags {
            self.tags = tags.clone();
        }
        if let Some(in_stock) = req.in_stock {
            self.in_stock = in_stock;
        }
    }
}
