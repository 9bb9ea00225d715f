mod message;
mod product;
mod user;

pub use self::message::{HealthResponse, MessageResponse};
pub use self::product::ProductResponse;
pub use self::user::UserResponse;
