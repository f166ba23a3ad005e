//! Contract models for the storefront store
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Status assigned by the store to orders created without an explicit one
pub const DEFAULT_ORDER_STATUS: &str = "pending";

/// Role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserRole {
    #[default]
    Customer,
    Vendor,
    Admin,
}

/// How a discount value is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountType {
    /// `value` is a percentage of the order total
    Percentage,
    /// `value` is a fixed amount
    Fixed,
}

// ===== Users =====

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub is_admin: bool,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    /// Unset until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub is_admin: bool,
    pub role: UserRole,
}

// ===== Catalog =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Units on hand, never negative
    pub stock: i32,
    pub is_active: bool,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub is_active: bool,
    pub category_id: i32,
}

/// A named option of a product, e.g. "Color" = "Red"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductVariant {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductVariant {
    pub product_id: i32,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductImage {
    pub product_id: i32,
    pub url: String,
}

// ===== Discounts =====

/// Coupon definition. Usage limits are recorded, not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    pub id: i32,
    pub code: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub value: f64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_active: bool,
    /// `None` means unlimited
    pub max_uses: Option<i32>,
    pub times_used: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDiscount {
    pub code: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub value: f64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_active: bool,
    pub max_uses: Option<i32>,
}

// ===== Orders =====

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    /// Free text; transitions are not constrained by the store
    pub status: String,
    pub total_amount: f64,
    pub discount_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i32,
    /// `None` falls back to the column default ([`DEFAULT_ORDER_STATUS`])
    pub status: Option<String>,
    pub total_amount: f64,
    pub discount_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    /// Unit price at the time of ordering
    pub price: f64,
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
    /// Stored as given; see [`NewOrderItem::priced`]
    pub subtotal: f64,
}

impl NewOrderItem {
    /// Build an item whose subtotal is `quantity * price`
    pub fn priced(order_id: i32, product_id: i32, quantity: i32, price: f64) -> Self {
        Self {
            order_id,
            product_id,
            quantity,
            price,
            subtotal: f64::from(quantity) * price,
        }
    }
}

/// One entry of an order's status history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatus {
    pub id: i32,
    pub order_id: i32,
    pub status: String,
    pub changed_at: DateTime<Utc>,
}

// ===== Reviews =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub product_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priced_item_multiplies_quantity_by_unit_price() {
        let item = NewOrderItem::priced(1, 2, 3, 19.5);
        assert_eq!(item.subtotal, 58.5);
    }

    #[test]
    fn new_users_default_to_customer() {
        assert_eq!(NewUser::default().role, UserRole::Customer);
    }
}
