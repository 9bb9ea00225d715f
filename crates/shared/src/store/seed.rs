use crate::domain::requests::{CreateProductRequest, CreateUserRequest};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| (*t).to_string()).collect()
}

pub(super) fn sample_products() -> Vec<CreateProductRequest> {
    vec![
        CreateProductRequest {
            name: "Laptop".to_string(),
            description: "High-performance laptop for professionals".to_string(),
            price: 1299.99,
            category: "Electronics".to_string(),
            tags: tags(&["computer", "portable", "work"]),
            in_stock: true,
        },
        CreateProductRequest {
            name: "Wireless Mouse".to_string(),
            description: "Ergonomic wireless mouse with long battery life".to_string(),
            price: 29.99,
            category: "Electronics".to_string(),
            tags: tags(&["accessory", "wireless"]),
            in_stock: true,
        },
        CreateProductRequest {
            name: "Coffee Mug".to_string(),
            description: "Ceramic mug, 350 ml".to_string(),
            price: 12.5,
            category: "Kitchen".to_string(),
            tags: tags(&["ceramic"]),
            in_stock: false,
        },
    ]
}

pub(super) fn sample_users() -> Vec<CreateUserRequest> {
    vec![
        CreateUserRequest {
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            password: "alice123".to_string(),
        },
        CreateUserRequest {
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            password: "bob12345".to_string(),
        },
    ]
}
