//! Domain service - thin orchestration over the repositories
//!
//! Checks column limits before writes and turns lookups that miss into
//! `StorefrontError::NotFound`. Constraint enforcement stays with the database.

use super::repository::{
    CategoryRepository, DiscountRepository, OrderRepository, ProductRepository,
    ReviewRepository, UserRepository,
};
use super::validation;
use crate::contract::{
    Category, Discount, NewCategory, NewDiscount, NewOrder, NewOrderItem, NewProduct,
    NewProductImage, NewProductVariant, NewReview, NewUser, Order, OrderItem, OrderStatus,
    Product, ProductImage, ProductVariant, Review, StorefrontError, User,
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, StorefrontError>;

/// Repository handles the service is built from
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub discounts: Arc<dyn DiscountRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
}

/// Domain service for the storefront store
pub struct Service {
    repos: Repositories,
}

impl Service {
    /// Create a new service instance
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    // ===== User Operations =====

    pub async fn register_user(&self, user: NewUser) -> Result<User> {
        validation::validate_new_user(&user)?;
        let created = self.repos.users.create(&user).await?;
        tracing::info!(user_id = created.id, role = ?created.role, "user registered");
        Ok(created)
    }

    pub async fn get_user(&self, id: i32) -> Result<User> {
        self.repos
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| StorefrontError::not_found("user", id))
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<User> {
        self.repos
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| StorefrontError::not_found("user", username))
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<User> {
        self.repos
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| StorefrontError::not_found("user", email))
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.repos.users.list().await
    }

    pub async fn update_user(&self, user: User) -> Result<User> {
        validation::validate_required("username", &user.username, validation::USERNAME_MAX)?;
        validation::validate_required("email", &user.email, validation::EMAIL_MAX)?;
        validation::validate_required(
            "hashed_password",
            &user.hashed_password,
            validation::PASSWORD_HASH_MAX,
        )?;
        self.repos.users.update(&user).await
    }

    pub async fn delete_user(&self, id: i32) -> Result<()> {
        self.repos.users.delete(id).await
    }

    pub async fn user_orders(&self, user_id: i32) -> Result<Vec<Order>> {
        self.repos.orders.list_by_user(user_id).await
    }

    pub async fn user_reviews(&self, user_id: i32) -> Result<Vec<Review>> {
        self.repos.reviews.list_by_user(user_id).await
    }

    // ===== Category Operations =====

    pub async fn create_category(&self, category: NewCategory) -> Result<Category> {
        validation::validate_new_category(&category)?;
        self.repos.categories.create(&category).await
    }

    pub async fn get_category(&self, id: i32) -> Result<Category> {
        self.repos
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| StorefrontError::not_found("category", id))
    }

    pub async fn get_category_by_name(&self, name: &str) -> Result<Category> {
        self.repos
            .categories
            .find_by_name(name)
            .await?
            .ok_or_else(|| StorefrontError::not_found("category", name))
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.repos.categories.list().await
    }

    pub async fn update_category(&self, category: Category) -> Result<Category> {
        validation::validate_required("category name", &category.name, validation::NAME_MAX)?;
        self.repos.categories.update(&category).await
    }

    pub async fn delete_category(&self, id: i32) -> Result<()> {
        self.repos.categories.delete(id).await
    }

    pub async fn category_products(&self, category_id: i32) -> Result<Vec<Product>> {
        self.repos.categories.products_of(category_id).await
    }

    // ===== Product Operations =====

    pub async fn create_product(&self, product: NewProduct) -> Result<Product> {
        validation::validate_new_product(&product)?;
        self.repos.products.create(&product).await
    }

    pub async fn get_product(&self, id: i32) -> Result<Product> {
        self.repos
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| StorefrontError::not_found("product", id))
    }

    pub async fn list_products_in_category(&self, category_id: i32) -> Result<Vec<Product>> {
        self.repos.products.list_by_category(category_id).await
    }

    pub async fn update_product(&self, product: Product) -> Result<Product> {
        validation::validate_required("product name", &product.name, validation::NAME_MAX)?;
        self.repos.products.update(&product).await
    }

    pub async fn delete_product(&self, id: i32) -> Result<()> {
        self.repos.products.delete(id).await?;
        tracing::info!(product_id = id, "product deleted with its variants, images and reviews");
        Ok(())
    }

    pub async fn product_category(&self, product_id: i32) -> Result<Category> {
        self.repos
            .products
            .category_of(product_id)
            .await?
            .ok_or_else(|| StorefrontError::not_found("category of product", product_id))
    }

    pub async fn add_product_variant(&self, variant: NewProductVariant) -> Result<ProductVariant> {
        validation::validate_new_variant(&variant)?;
        self.repos.products.add_variant(&variant).await
    }

    pub async fn product_variants(&self, product_id: i32) -> Result<Vec<ProductVariant>> {
        self.repos.products.variants_of(product_id).await
    }

    pub async fn remove_product_variant(&self, id: i32) -> Result<()> {
        self.repos.products.delete_variant(id).await
    }

    pub async fn add_product_image(&self, image: NewProductImage) -> Result<ProductImage> {
        validation::validate_new_image(&image)?;
        self.repos.products.add_image(&image).await
    }

    pub async fn product_images(&self, product_id: i32) -> Result<Vec<ProductImage>> {
        self.repos.products.images_of(product_id).await
    }

    pub async fn remove_product_image(&self, id: i32) -> Result<()> {
        self.repos.products.delete_image(id).await
    }

    pub async fn product_reviews(&self, product_id: i32) -> Result<Vec<Review>> {
        self.repos.reviews.list_by_product(product_id).await
    }

    // ===== Discount Operations =====

    pub async fn create_discount(&self, discount: NewDiscount) -> Result<Discount> {
        validation::validate_new_discount(&discount)?;
        self.repos.discounts.create(&discount).await
    }

    pub async fn get_discount(&self, id: i32) -> Result<Discount> {
        self.repos
            .discounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| StorefrontError::not_found("discount", id))
    }

    pub async fn get_discount_by_code(&self, code: &str) -> Result<Discount> {
        self.repos
            .discounts
            .find_by_code(code)
            .await?
            .ok_or_else(|| StorefrontError::not_found("discount", code))
    }

    pub async fn list_discounts(&self) -> Result<Vec<Discount>> {
        self.repos.discounts.list().await
    }

    pub async fn update_discount(&self, discount: Discount) -> Result<Discount> {
        validation::validate_required(
            "discount code",
            &discount.code,
            validation::DISCOUNT_CODE_MAX,
        )?;
        self.repos.discounts.update(&discount).await
    }

    pub async fn delete_discount(&self, id: i32) -> Result<()> {
        self.repos.discounts.delete(id).await
    }

    pub async fn discount_orders(&self, discount_id: i32) -> Result<Vec<Order>> {
        self.repos.discounts.orders_of(discount_id).await
    }

    // ===== Order Operations =====

    pub async fn place_order(&self, order: NewOrder) -> Result<Order> {
        validation::validate_new_order(&order)?;
        let created = self.repos.orders.create(&order).await?;
        tracing::info!(
            order_id = created.id,
            user_id = created.user_id,
            status = %created.status,
            "order placed"
        );
        Ok(created)
    }

    pub async fn get_order(&self, id: i32) -> Result<Order> {
        self.repos
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| StorefrontError::not_found("order", id))
    }

    pub async fn update_order(&self, order: Order) -> Result<Order> {
        validation::validate_order_status(&order.status)?;
        self.repos.orders.update(&order).await
    }

    pub async fn delete_order(&self, id: i32) -> Result<()> {
        self.repos.orders.delete(id).await
    }

    pub async fn order_user(&self, order_id: i32) -> Result<User> {
        self.repos
            .orders
            .user_of(order_id)
            .await?
            .ok_or_else(|| StorefrontError::not_found("user of order", order_id))
    }

    pub async fn order_discount(&self, order_id: i32) -> Result<Option<Discount>> {
        self.repos.orders.discount_of(order_id).await
    }

    /// Add a line to an order; the subtotal is always `quantity * price`
    pub async fn add_order_item(
        &self,
        order_id: i32,
        product_id: i32,
        quantity: i32,
        price: f64,
    ) -> Result<OrderItem> {
        let item = NewOrderItem::priced(order_id, product_id, quantity, price);
        self.repos.orders.add_item(&item).await
    }

    pub async fn order_items(&self, order_id: i32) -> Result<Vec<OrderItem>> {
        self.repos.orders.items_of(order_id).await
    }

    pub async fn set_order_status(&self, order_id: i32, status: &str) -> Result<OrderStatus> {
        validation::validate_order_status(status)?;
        self.repos.orders.record_status(order_id, status).await
    }

    pub async fn order_status_history(&self, order_id: i32) -> Result<Vec<OrderStatus>> {
        self.repos.orders.status_history(order_id).await
    }

    // ===== Review Operations =====

    pub async fn post_review(&self, review: NewReview) -> Result<Review> {
        self.repos.reviews.create(&review).await
    }

    pub async fn get_review(&self, id: i32) -> Result<Review> {
        self.repos
            .reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| StorefrontError::not_found("review", id))
    }

    pub async fn delete_review(&self, id: i32) -> Result<()> {
        self.repos.reviews.delete(id).await
    }
}
