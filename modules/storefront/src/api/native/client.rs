//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Category, Discount, NewCategory, NewDiscount, NewOrder, NewProduct, NewProductImage,
    NewProductVariant, NewReview, NewUser, Order, OrderItem, OrderStatus, Product, ProductImage,
    ProductVariant, Review, StorefrontApi, StorefrontError, User,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl StorefrontApi for NativeClient {
    async fn register_user(&self, user: NewUser) -> Result<User, StorefrontError> {
        self.service.register_user(user).await
    }

    async fn get_user(&self, id: i32) -> Result<User, StorefrontError> {
        self.service.get_user(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, StorefrontError> {
        self.service.get_user_by_username(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, StorefrontError> {
        self.service.get_user_by_email(email).await
    }

    async fn list_users(&self) -> Result<Vec<User>, StorefrontError> {
        self.service.list_users().await
    }

    async fn update_user(&self, user: User) -> Result<User, StorefrontError> {
        self.service.update_user(user).await
    }

    async fn delete_user(&self, id: i32) -> Result<(), StorefrontError> {
        self.service.delete_user(id).await
    }

    async fn user_orders(&self, user_id: i32) -> Result<Vec<Order>, StorefrontError> {
        self.service.user_orders(user_id).await
    }

    async fn user_reviews(&self, user_id: i32) -> Result<Vec<Review>, StorefrontError> {
        self.service.user_reviews(user_id).await
    }

    async fn create_category(&self, category: NewCategory) -> Result<Category, StorefrontError> {
        self.service.create_category(category).await
    }

    async fn get_category(&self, id: i32) -> Result<Category, StorefrontError> {
        self.service.get_category(id).await
    }

    async fn get_category_by_name(&self, name: &str) -> Result<Category, StorefrontError> {
        self.service.get_category_by_name(name).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StorefrontError> {
        self.service.list_categories().await
    }

    async fn update_category(&self, category: Category) -> Result<Category, StorefrontError> {
        self.service.update_category(category).await
    }

    async fn delete_category(&self, id: i32) -> Result<(), StorefrontError> {
        self.service.delete_category(id).await
    }

    async fn category_products(&self, category_id: i32) -> Result<Vec<Product>, StorefrontError> {
        self.service.category_products(category_id).await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, StorefrontError> {
        self.service.create_product(product).await
    }

    async fn get_product(&self, id: i32) -> Result<Product, StorefrontError> {
        self.service.get_product(id).await
    }

    async fn list_products_in_category(&self, category_id: i32) -> Result<Vec<Product>, StorefrontError> {
        self.service.list_products_in_category(category_id).await
    }

    async fn update_product(&self, product: Product) -> Result<Product, StorefrontError> {
        self.service.update_product(product).await
    }

    async fn delete_product(&self, id: i32) -> Result<(), StorefrontError> {
        self.service.delete_product(id).await
    }

    async fn product_category(&self, product_id: i32) -> Result<Category, StorefrontError> {
        self.service.product_category(product_id).await
    }

    async fn add_product_variant(&self, variant: NewProductVariant) -> Result<ProductVariant, StorefrontError> {
        self.service.add_product_variant(variant).await
    }

    async fn product_variants(&self, product_id: i32) -> Result<Vec<ProductVariant>, StorefrontError> {
        self.service.product_variants(product_id).await
    }

    async fn remove_product_variant(&self, id: i32) -> Result<(), StorefrontError> {
        self.service.remove_product_variant(id).await
    }

    async fn add_product_image(&self, image: NewProductImage) -> Result<ProductImage, StorefrontError> {
        self.service.add_product_image(image).await
    }

    async fn product_images(&self, product_id: i32) -> Result<Vec<ProductImage>, StorefrontError> {
        self.service.product_images(product_id).await
    }

    async fn remove_product_image(&self, id: i32) -> Result<(), StorefrontError> {
        self.service.remove_product_image(id).await
    }

    async fn product_reviews(&self, product_id: i32) -> Result<Vec<Review>, StorefrontError> {
        self.service.product_reviews(product_id).await
    }

    async fn create_discount(&self, discount: NewDiscount) -> Result<Discount, StorefrontError> {
        self.service.create_discount(discount).await
    }

    async fn get_discount(&self, id: i32) -> Result<Discount, StorefrontError> {
        self.service.get_discount(id).await
    }

    async fn get_discount_by_code(&self, code: &str) -> Result<Discount, StorefrontError> {
        self.service.get_discount_by_code(code).await
    }

    async fn list_discounts(&self) -> Result<Vec<Discount>, StorefrontError> {
        self.service.list_discounts().await
    }

    async fn update_discount(&self, discount: Discount) -> Result<Discount, StorefrontError> {
        self.service.update_discount(discount).await
    }

    async fn delete_discount(&self, id: i32) -> Result<(), StorefrontError> {
        self.service.delete_discount(id).await
    }

    async fn discount_orders(&self, discount_id: i32) -> Result<Vec<Order>, StorefrontError> {
        self.service.discount_orders(discount_id).await
    }

    async fn place_order(&self, order: NewOrder) -> Result<Order, StorefrontError> {
        self.service.place_order(order).await
    }

    async fn get_order(&self, id: i32) -> Result<Order, StorefrontError> {
        self.service.get_order(id).await
    }

    async fn update_order(&self, order: Order) -> Result<Order, StorefrontError> {
        self.service.update_order(order).await
    }

    async fn delete_order(&self, id: i32) -> Result<(), StorefrontError> {
        self.service.delete_order(id).await
    }

    async fn order_user(&self, order_id: i32) -> Result<User, StorefrontError> {
        self.service.order_user(order_id).await
    }

    async fn order_discount(&self, order_id: i32) -> Result<Option<Discount>, StorefrontError> {
        self.service.order_discount(order_id).await
    }

    async fn add_order_item(&self, order_id: i32, product_id: i32, quantity: i32, price: f64) -> Result<OrderItem, StorefrontError> {
        self.service.add_order_item(order_id, product_id, quantity, price).await
    }

    async fn order_items(&self, order_id: i32) -> Result<Vec<OrderItem>, StorefrontError> {
        self.service.order_items(order_id).await
    }

    async fn set_order_status(&self, order_id: i32, status: &str) -> Result<OrderStatus, StorefrontError> {
        self.service.set_order_status(order_id, status).await
    }

    async fn order_status_history(&self, order_id: i32) -> Result<Vec<OrderStatus>, StorefrontError> {
        self.service.order_status_history(order_id).await
    }

    async fn post_review(&self, review: NewReview) -> Result<Review, StorefrontError> {
        self.service.post_review(review).await
    }

    async fn get_review(&self, id: i32) -> Result<Review, StorefrontError> {
        self.service.get_review(id).await
    }

    async fn delete_review(&self, id: i32) -> Result<(), StorefrontError> {
        self.service.delete_review(id).await
    }
}
