use crate::{
    domain::requests::{CreateUserRequest, UpdateUserRequest},
    store::Record,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Passwords are kept exactly as submitted; nothing here hashes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Record for User {
    type Create = CreateUserRequest;
    type Update = UpdateUserRequest;

    fn build(id: i32, created_at: DateTime<Utc>, req: &CreateUserRequest) -> Self {
        User {
            id,
            name: req.name.clone(),
            email: req.email.clone(),
            password: req.password.clone(),
            created_at,
        }
    }

    fn merge(&mut self, req: &UpdateUserRequest) {
        if let Some(name) = &req.name {
            self.name = name.clone();
        }
        if let Some(email) = &req.email {
            self.email = email.clone();
        }
        if let Some(password) = &req.password {
            self.password = password.clone();
        }
    }
}
