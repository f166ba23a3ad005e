//! SeaORM repository implementations

use crate::contract::{
    Category, Discount, NewCategory, NewDiscount, NewOrder, NewOrderItem, NewProduct,
    NewProductImage, NewProductVariant, NewReview, NewUser, Order, OrderItem, OrderStatus,
    Product, ProductImage, ProductVariant, Review, StorefrontError, StorefrontResult, User,
};
use crate::domain::repository::{
    CategoryRepository, DiscountRepository, OrderRepository, ProductRepository,
    ReviewRepository, UserRepository,
};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Set}, ColumnTrait, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, ModelTrait, PrimaryKeyTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::sync::Arc;

use super::entity::{
    category, discount, order, order_item, order_status, product, product_image,
    product_variant, review, user,
};
use super::error::classify;

// ===== Helpers =====

/// Load a row by primary key, or report it missing
async fn find_required<E>(
    db: &DatabaseConnection,
    resource: &'static str,
    id: i32,
) -> StorefrontResult<E::Model>
where
    E: EntityTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    E::find_by_id(id)
        .one(db)
        .await
        .map_err(classify)?
        .ok_or_else(|| StorefrontError::not_found(resource, id))
}

/// Update errors: a row that matched nothing is a miss, not a database failure
fn update_error(resource: &'static str, id: i32) -> impl FnOnce(DbErr) -> StorefrontError {
    move |err| match err {
        DbErr::RecordNotUpdated => StorefrontError::not_found(resource, id),
        other => classify(other),
    }
}

fn ensure_deleted(result: DeleteResult, resource: &str, id: i32) -> StorefrontResult<()> {
    if result.rows_affected == 0 {
        return Err(StorefrontError::not_found(resource, id));
    }
    Ok(())
}

// ===== User Repository =====

pub struct SeaOrmUserRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, new: &NewUser) -> StorefrontResult<User> {
        let active: user::ActiveModel = new.into();
        let created = user::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(classify)?;

        tracing::debug!(user_id = created.id, "user created");
        Ok(created.into())
    }

    async fn find_by_id(&self, id: i32) -> StorefrontResult<Option<User>> {
        let result = user::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> StorefrontResult<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> StorefrontResult<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self) -> StorefrontResult<Vec<User>> {
        let results = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, model: &User) -> StorefrontResult<User> {
        let active: user::ActiveModel = model.into();
        let updated = user::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(update_error("user", model.id))?;

        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> StorefrontResult<()> {
        let result = user::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(classify)?;

        ensure_deleted(result, "user", id)
    }
}

// ===== Category Repository =====

pub struct SeaOrmCategoryRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn create(&self, new: &NewCategory) -> StorefrontResult<Category> {
        let active: category::ActiveModel = new.into();
        let created = category::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(classify)?;

        Ok(created.into())
    }

    async fn find_by_id(&self, id: i32) -> StorefrontResult<Option<Category>> {
        let result = category::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> StorefrontResult<Option<Category>> {
        let result = category::Entity::find()
            .filter(category::Column::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self) -> StorefrontResult<Vec<Category>> {
        let results = category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, model: &Category) -> StorefrontResult<Category> {
        let active: category::ActiveModel = model.into();
        let updated = category::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(update_error("category", model.id))?;

        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> StorefrontResult<()> {
        let result = category::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(classify)?;

        ensure_deleted(result, "category", id)
    }

    async fn products_of(&self, category_id: i32) -> StorefrontResult<Vec<Product>> {
        let parent = find_required::<category::Entity>(&self.db, "category", category_id).await?;
        let results = parent
            .find_related(product::Entity)
            .order_by_asc(product::Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}

// ===== Product Repository =====

pub struct SeaOrmProductRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn create(&self, new: &NewProduct) -> StorefrontResult<Product> {
        let active: product::ActiveModel = new.into();
        let created = product::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(classify)?;

        tracing::debug!(
            product_id = created.id,
            category_id = created.category_id,
            "product created"
        );
        Ok(created.into())
    }

    async fn find_by_id(&self, id: i32) -> StorefrontResult<Option<Product>> {
        let result = product::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn list_by_category(&self, category_id: i32) -> StorefrontResult<Vec<Product>> {
        let results = product::Entity::find()
            .filter(product::Column::CategoryId.eq(category_id))
            .order_by_asc(product::Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, model: &Product) -> StorefrontResult<Product> {
        let active: product::ActiveModel = model.into();
        let updated = product::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(update_error("product", model.id))?;

        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> StorefrontResult<()> {
        let result = product::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(classify)?;

        ensure_deleted(result, "product", id)
    }

    async fn category_of(&self, product_id: i32) -> StorefrontResult<Option<Category>> {
        let parent = find_required::<product::Entity>(&self.db, "product", product_id).await?;
        let result = parent
            .find_related(category::Entity)
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn add_variant(&self, new: &NewProductVariant) -> StorefrontResult<ProductVariant> {
        let active: product_variant::ActiveModel = new.into();
        let created = product_variant::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(classify)?;

        Ok(created.into())
    }

    async fn variants_of(&self, product_id: i32) -> StorefrontResult<Vec<ProductVariant>> {
        let parent = find_required::<product::Entity>(&self.db, "product", product_id).await?;
        let results = parent
            .find_related(product_variant::Entity)
            .order_by_asc(product_variant::Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn delete_variant(&self, id: i32) -> StorefrontResult<()> {
        let result = product_variant::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(classify)?;

        ensure_deleted(result, "product variant", id)
    }

    async fn add_image(&self, new: &NewProductImage) -> StorefrontResult<ProductImage> {
        let active: product_image::ActiveModel = new.into();
        let created = product_image::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(classify)?;

        Ok(created.into())
    }

    async fn images_of(&self, product_id: i32) -> StorefrontResult<Vec<ProductImage>> {
        let parent = find_required::<product::Entity>(&self.db, "product", product_id).await?;
        let results = parent
            .find_related(product_image::Entity)
            .order_by_asc(product_image::Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn delete_image(&self, id: i32) -> StorefrontResult<()> {
        let result = product_image::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(classify)?;

        ensure_deleted(result, "product image", id)
    }
}

// ===== Discount Repository =====

pub struct SeaOrmDiscountRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmDiscountRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DiscountRepository for SeaOrmDiscountRepository {
    async fn create(&self, new: &NewDiscount) -> StorefrontResult<Discount> {
        let active: discount::ActiveModel = new.into();
        let created = discount::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(classify)?;

        tracing::debug!(discount_id = created.id, code = %created.code, "discount created");
        Ok(created.into())
    }

    async fn find_by_id(&self, id: i32) -> StorefrontResult<Option<Discount>> {
        let result = discount::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_code(&self, code: &str) -> StorefrontResult<Option<Discount>> {
        let result = discount::Entity::find()
            .filter(discount::Column::Code.eq(code))
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self) -> StorefrontResult<Vec<Discount>> {
        let results = discount::Entity::find()
            .order_by_asc(discount::Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, model: &Discount) -> StorefrontResult<Discount> {
        let active: discount::ActiveModel = model.into();
        let updated = discount::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(update_error("discount", model.id))?;

        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> StorefrontResult<()> {
        let result = discount::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(classify)?;

        ensure_deleted(result, "discount", id)
    }

    async fn orders_of(&self, discount_id: i32) -> StorefrontResult<Vec<Order>> {
        let parent = find_required::<discount::Entity>(&self.db, "discount", discount_id).await?;
        let results = parent
            .find_related(order::Entity)
            .order_by_asc(order::Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}

// ===== Order Repository =====

pub struct SeaOrmOrderRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOrderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn create(&self, new: &NewOrder) -> StorefrontResult<Order> {
        let active: order::ActiveModel = new.into();
        let created = order::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(classify)?;

        tracing::debug!(order_id = created.id, user_id = created.user_id, "order created");
        Ok(created.into())
    }

    async fn find_by_id(&self, id: i32) -> StorefrontResult<Option<Order>> {
        let result = order::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn list_by_user(&self, user_id: i32) -> StorefrontResult<Vec<Order>> {
        let results = order::Entity::find()
            .filter(order::Column::UserId.eq(user_id))
            .order_by_asc(order::Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, model: &Order) -> StorefrontResult<Order> {
        let active: order::ActiveModel = model.into();
        let updated = order::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(update_error("order", model.id))?;

        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> StorefrontResult<()> {
        let result = order::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(classify)?;

        ensure_deleted(result, "order", id)
    }

    async fn user_of(&self, order_id: i32) -> StorefrontResult<Option<User>> {
        let parent = find_required::<order::Entity>(&self.db, "order", order_id).await?;
        let result = parent
            .find_related(user::Entity)
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn discount_of(&self, order_id: i32) -> StorefrontResult<Option<Discount>> {
        let parent = find_required::<order::Entity>(&self.db, "order", order_id).await?;
        if parent.discount_id.is_none() {
            return Ok(None);
        }

        let result = parent
            .find_related(discount::Entity)
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn add_item(&self, new: &NewOrderItem) -> StorefrontResult<OrderItem> {
        let active: order_item::ActiveModel = new.into();
        let created = order_item::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(classify)?;

        Ok(created.into())
    }

    async fn items_of(&self, order_id: i32) -> StorefrontResult<Vec<OrderItem>> {
        let parent = find_required::<order::Entity>(&self.db, "order", order_id).await?;
        let results = parent
            .find_related(order_item::Entity)
            .order_by_asc(order_item::Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn record_status(&self, order_id: i32, status: &str) -> StorefrontResult<OrderStatus> {
        let txn = self.db.begin().await.map_err(classify)?;

        let current = order::Entity::find_by_id(order_id)
            .one(&txn)
            .await
            .map_err(classify)?
            .ok_or_else(|| StorefrontError::not_found("order", order_id))?;

        let now = Utc::now();
        let mut active = current.into_active_model();
        active.status = Set(status.to_string());
        active.updated_at = Set(Some(now));
        active.update(&txn).await.map_err(classify)?;

        let entry = order_status::ActiveModel {
            id: NotSet,
            order_id: Set(order_id),
            status: Set(status.to_string()),
            changed_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(classify)?;

        txn.commit().await.map_err(classify)?;

        tracing::info!(order_id, status, "order status recorded");
        Ok(entry.into())
    }

    async fn status_history(&self, order_id: i32) -> StorefrontResult<Vec<OrderStatus>> {
        let parent = find_required::<order::Entity>(&self.db, "order", order_id).await?;
        let results = parent
            .find_related(order_status::Entity)
            .order_by_asc(order_status::Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}

// ===== Review Repository =====

pub struct SeaOrmReviewRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmReviewRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for SeaOrmReviewRepository {
    async fn create(&self, new: &NewReview) -> StorefrontResult<Review> {
        let active: review::ActiveModel = new.into();
        let created = review::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(classify)?;

        Ok(created.into())
    }

    async fn find_by_id(&self, id: i32) -> StorefrontResult<Option<Review>> {
        let result = review::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn list_by_product(&self, product_id: i32) -> StorefrontResult<Vec<Review>> {
        let results = review::Entity::find()
            .filter(review::Column::ProductId.eq(product_id))
            .order_by_asc(review::Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn list_by_user(&self, user_id: i32) -> StorefrontResult<Vec<Review>> {
        let results = review::Entity::find()
            .filter(review::Column::UserId.eq(user_id))
            .order_by_asc(review::Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: i32) -> StorefrontResult<()> {
        let result = review::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(classify)?;

        ensure_deleted(result, "review", id)
    }
}
