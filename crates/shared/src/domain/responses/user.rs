use crate::model::User as UserModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The password is echoed back exactly as stored.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserModel> for UserResponse {
    fn from(value: UserModel) -> Self {
        UserResponse {
            id: value.id,
            name: value.name,
            email: value.email,
            password: value.password,
            created_at: value.created_at,
        }
    }
}
