//! Domain layer - repository seams and the service facade

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{
    CategoryRepository, DiscountRepository, OrderRepository, ProductRepository,
    ReviewRepository, UserRepository,
};
pub use service::{Repositories, Service};
