mod product;
mod user;

pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserCommandService, DynUserQueryRepository, DynUserQueryService,
    UserCommandRepositoryTrait, UserCommandServiceTrait, UserQueryRepositoryTrait,
    UserQueryServiceTrait,
};
