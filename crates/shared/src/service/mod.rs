mod product;
mod user;

pub use self::product::ProductService;
pub use self::user::UserService;
