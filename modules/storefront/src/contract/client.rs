//! Native client trait for inter-module communication
//!
//! This trait defines the API other modules use to reach the storefront store.
//! NO HTTP - direct function calls.

use super::error::StorefrontError;
use super::model::{
    Category, Discount, NewCategory, NewDiscount, NewOrder, NewProduct, NewProductImage,
    NewProductVariant, NewReview, NewUser, Order, OrderItem, OrderStatus, Product, ProductImage,
    ProductVariant, Review, User,
};
use async_trait::async_trait;

/// Storefront store API for inter-module communication
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    // ===== User Operations =====

    /// Create a user account
    async fn register_user(&self, user: NewUser) -> Result<User, StorefrontError>;

    async fn get_user(&self, id: i32) -> Result<User, StorefrontError>;

    async fn get_user_by_username(&self, username: &str) -> Result<User, StorefrontError>;

    async fn get_user_by_email(&self, email: &str) -> Result<User, StorefrontError>;

    async fn list_users(&self) -> Result<Vec<User>, StorefrontError>;

    async fn update_user(&self, user: User) -> Result<User, StorefrontError>;

    /// Delete a user; fails while the user still has orders
    async fn delete_user(&self, id: i32) -> Result<(), StorefrontError>;

    async fn user_orders(&self, user_id: i32) -> Result<Vec<Order>, StorefrontError>;

    async fn user_reviews(&self, user_id: i32) -> Result<Vec<Review>, StorefrontError>;

    // ===== Category Operations =====

    async fn create_category(&self, category: NewCategory) -> Result<Category, StorefrontError>;

    async fn get_category(&self, id: i32) -> Result<Category, StorefrontError>;

    async fn get_category_by_name(&self, name: &str) -> Result<Category, StorefrontError>;

    async fn list_categories(&self) -> Result<Vec<Category>, StorefrontError>;

    async fn update_category(&self, category: Category) -> Result<Category, StorefrontError>;

    /// Delete a category; fails while products reference it
    async fn delete_category(&self, id: i32) -> Result<(), StorefrontError>;

    async fn category_products(&self, category_id: i32) -> Result<Vec<Product>, StorefrontError>;

    // ===== Product Operations =====

    async fn create_product(&self, product: NewProduct) -> Result<Product, StorefrontError>;

    async fn get_product(&self, id: i32) -> Result<Product, StorefrontError>;

    async fn list_products_in_category(&self, category_id: i32) -> Result<Vec<Product>, StorefrontError>;

    async fn update_product(&self, product: Product) -> Result<Product, StorefrontError>;

    /// Delete a product together with its variants, images and reviews
    async fn delete_product(&self, id: i32) -> Result<(), StorefrontError>;

    /// Category the product belongs to
    async fn product_category(&self, product_id: i32) -> Result<Category, StorefrontError>;

    async fn add_product_variant(&self, variant: NewProductVariant) -> Result<ProductVariant, StorefrontError>;

    async fn product_variants(&self, product_id: i32) -> Result<Vec<ProductVariant>, StorefrontError>;

    async fn remove_product_variant(&self, id: i32) -> Result<(), StorefrontError>;

    async fn add_product_image(&self, image: NewProductImage) -> Result<ProductImage, StorefrontError>;

    async fn product_images(&self, product_id: i32) -> Result<Vec<ProductImage>, StorefrontError>;

    async fn remove_product_image(&self, id: i32) -> Result<(), StorefrontError>;

    async fn product_reviews(&self, product_id: i32) -> Result<Vec<Review>, StorefrontError>;

    // ===== Discount Operations =====

    async fn create_discount(&self, discount: NewDiscount) -> Result<Discount, StorefrontError>;

    async fn get_discount(&self, id: i32) -> Result<Discount, StorefrontError>;

    async fn get_discount_by_code(&self, code: &str) -> Result<Discount, StorefrontError>;

    async fn list_discounts(&self) -> Result<Vec<Discount>, StorefrontError>;

    async fn update_discount(&self, discount: Discount) -> Result<Discount, StorefrontError>;

    /// Delete a discount; orders using it keep existing without one
    async fn delete_discount(&self, id: i32) -> Result<(), StorefrontError>;

    async fn discount_orders(&self, discount_id: i32) -> Result<Vec<Order>, StorefrontError>;

    // ===== Order Operations =====

    /// Create an order; a missing status defaults to "pending"
    async fn place_order(&self, order: NewOrder) -> Result<Order, StorefrontError>;

    async fn get_order(&self, id: i32) -> Result<Order, StorefrontError>;

    async fn update_order(&self, order: Order) -> Result<Order, StorefrontError>;

    async fn delete_order(&self, id: i32) -> Result<(), StorefrontError>;

    async fn order_user(&self, order_id: i32) -> Result<User, StorefrontError>;

    /// Discount applied to the order, if any
    async fn order_discount(&self, order_id: i32) -> Result<Option<Discount>, StorefrontError>;

    /// Add a line to an order with `subtotal = quantity * price`
    async fn add_order_item(&self, order_id: i32, product_id: i32, quantity: i32, price: f64) -> Result<OrderItem, StorefrontError>;

    async fn order_items(&self, order_id: i32) -> Result<Vec<OrderItem>, StorefrontError>;

    /// Change the order status and append it to the history
    async fn set_order_status(&self, order_id: i32, status: &str) -> Result<OrderStatus, StorefrontError>;

    async fn order_status_history(&self, order_id: i32) -> Result<Vec<OrderStatus>, StorefrontError>;

    // ===== Review Operations =====

    async fn post_review(&self, review: NewReview) -> Result<Review, StorefrontError>;

    async fn get_review(&self, id: i32) -> Result<Review, StorefrontError>;

    async fn delete_review(&self, id: i32) -> Result<(), StorefrontError>;
}
