//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::StorefrontApi;
pub use error::{StorefrontError, StorefrontResult};
pub use model::{
    Category, Discount, DiscountType, NewCategory, NewDiscount, NewOrder, NewOrderItem,
    NewProduct, NewProductImage, NewProductVariant, NewReview, NewUser, Order, OrderItem,
    OrderStatus, Product, ProductImage, ProductVariant, Review, User, UserRole,
    DEFAULT_ORDER_STATUS,
};
