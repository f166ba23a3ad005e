//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs
//!
//! `find_*` methods return `Ok(None)` on a miss. `update`/`delete` and the
//! relationship accessors report `StorefrontError::NotFound` when the addressed
//! row does not exist. Child collections are ordered by id.

use crate::contract::{
    Category, Discount, NewCategory, NewDiscount, NewOrder, NewOrderItem, NewProduct,
    NewProductImage, NewProductVariant, NewReview, NewUser, Order, OrderItem, OrderStatus,
    Product, ProductImage, ProductVariant, Review, StorefrontResult, User,
};
use async_trait::async_trait;

/// Repository for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> StorefrontResult<User>;

    async fn find_by_id(&self, id: i32) -> StorefrontResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> StorefrontResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> StorefrontResult<Option<User>>;

    async fn list(&self) -> StorefrontResult<Vec<User>>;

    /// Overwrite every column except `created_at` and stamp `updated_at`
    async fn update(&self, user: &User) -> StorefrontResult<User>;

    async fn delete(&self, id: i32) -> StorefrontResult<()>;
}

/// Repository for product categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &NewCategory) -> StorefrontResult<Category>;

    async fn find_by_id(&self, id: i32) -> StorefrontResult<Option<Category>>;

    async fn find_by_name(&self, name: &str) -> StorefrontResult<Option<Category>>;

    async fn list(&self) -> StorefrontResult<Vec<Category>>;

    async fn update(&self, category: &Category) -> StorefrontResult<Category>;

    /// Fails with a foreign key violation while products still reference the category
    async fn delete(&self, id: i32) -> StorefrontResult<()>;

    async fn products_of(&self, category_id: i32) -> StorefrontResult<Vec<Product>>;
}

/// Repository for products and their variants and images
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &NewProduct) -> StorefrontResult<Product>;

    async fn find_by_id(&self, id: i32) -> StorefrontResult<Option<Product>>;

    async fn list_by_category(&self, category_id: i32) -> StorefrontResult<Vec<Product>>;

    async fn update(&self, product: &Product) -> StorefrontResult<Product>;

    /// Removes the product's variants, images and reviews with it
    async fn delete(&self, id: i32) -> StorefrontResult<()>;

    async fn category_of(&self, product_id: i32) -> StorefrontResult<Option<Category>>;

    async fn add_variant(&self, variant: &NewProductVariant) -> StorefrontResult<ProductVariant>;

    async fn variants_of(&self, product_id: i32) -> StorefrontResult<Vec<ProductVariant>>;

    async fn delete_variant(&self, id: i32) -> StorefrontResult<()>;

    async fn add_image(&self, image: &NewProductImage) -> StorefrontResult<ProductImage>;

    async fn images_of(&self, product_id: i32) -> StorefrontResult<Vec<ProductImage>>;

    async fn delete_image(&self, id: i32) -> StorefrontResult<()>;
}

/// Repository for discount codes
#[async_trait]
pub trait DiscountRepository: Send + Sync {
    async fn create(&self, discount: &NewDiscount) -> StorefrontResult<Discount>;

    async fn find_by_id(&self, id: i32) -> StorefrontResult<Option<Discount>>;

    async fn find_by_code(&self, code: &str) -> StorefrontResult<Option<Discount>>;

    async fn list(&self) -> StorefrontResult<Vec<Discount>>;

    async fn update(&self, discount: &Discount) -> StorefrontResult<Discount>;

    /// Orders that used the discount keep existing with `discount_id` cleared
    async fn delete(&self, id: i32) -> StorefrontResult<()>;

    async fn orders_of(&self, discount_id: i32) -> StorefrontResult<Vec<Order>>;
}

/// Repository for orders, their items and status history
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: &NewOrder) -> StorefrontResult<Order>;

    async fn find_by_id(&self, id: i32) -> StorefrontResult<Option<Order>>;

    async fn list_by_user(&self, user_id: i32) -> StorefrontResult<Vec<Order>>;

    async fn update(&self, order: &Order) -> StorefrontResult<Order>;

    /// Removes the order's items and status history with it
    async fn delete(&self, id: i32) -> StorefrontResult<()>;

    async fn user_of(&self, order_id: i32) -> StorefrontResult<Option<User>>;

    /// `Ok(None)` when the order carries no discount
    async fn discount_of(&self, order_id: i32) -> StorefrontResult<Option<Discount>>;

    async fn add_item(&self, item: &NewOrderItem) -> StorefrontResult<OrderItem>;

    async fn items_of(&self, order_id: i32) -> StorefrontResult<Vec<OrderItem>>;

    /// Set the order's status and append it to the history, atomically
    async fn record_status(&self, order_id: i32, status: &str) -> StorefrontResult<OrderStatus>;

    async fn status_history(&self, order_id: i32) -> StorefrontResult<Vec<OrderStatus>>;
}

/// Repository for product reviews
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &NewReview) -> StorefrontResult<Review>;

    async fn find_by_id(&self, id: i32) -> StorefrontResult<Option<Review>>;

    async fn list_by_product(&self, product_id: i32) -> StorefrontResult<Vec<Review>>;

    async fn list_by_user(&self, user_id: i32) -> StorefrontResult<Vec<Review>>;

    async fn delete(&self, id: i32) -> StorefrontResult<()>;
}
