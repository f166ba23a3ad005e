//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{
    self, category, discount, order, order_item, order_status, product, product_image,
    product_variant, review, user,
};
use crate::contract::{
    Category, Discount, DiscountType, NewCategory, NewDiscount, NewOrder, NewOrderItem,
    NewProduct, NewProductImage, NewProductVariant, NewReview, NewUser, Order, OrderItem,
    OrderStatus, Product, ProductImage, ProductVariant, Review, User, UserRole,
};
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Enum Conversions =====

impl From<entity::sea_orm_active_enums::UserRole> for UserRole {
    fn from(role: entity::sea_orm_active_enums::UserRole) -> Self {
        use entity::sea_orm_active_enums::UserRole as Db;
        match role {
            Db::Customer => Self::Customer,
            Db::Vendor => Self::Vendor,
            Db::Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for entity::sea_orm_active_enums::UserRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Customer => Self::Customer,
            UserRole::Vendor => Self::Vendor,
            UserRole::Admin => Self::Admin,
        }
    }
}

impl From<entity::sea_orm_active_enums::DiscountType> for DiscountType {
    fn from(kind: entity::sea_orm_active_enums::DiscountType) -> Self {
        use entity::sea_orm_active_enums::DiscountType as Db;
        match kind {
            Db::Percentage => Self::Percentage,
            Db::Fixed => Self::Fixed,
        }
    }
}

impl From<DiscountType> for entity::sea_orm_active_enums::DiscountType {
    fn from(kind: DiscountType) -> Self {
        match kind {
            DiscountType::Percentage => Self::Percentage,
            DiscountType::Fixed => Self::Fixed,
        }
    }
}

// ===== User Conversions =====

impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            hashed_password: m.hashed_password,
            is_admin: m.is_admin,
            role: m.role.into(),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<&NewUser> for user::ActiveModel {
    fn from(new: &NewUser) -> Self {
        Self {
            id: NotSet,
            username: Set(new.username.clone()),
            email: Set(new.email.clone()),
            hashed_password: Set(new.hashed_password.clone()),
            is_admin: Set(new.is_admin),
            role: Set(new.role.into()),
            created_at: Set(Utc::now()),
            updated_at: NotSet,
        }
    }
}

/// Full-row update; `created_at` is left untouched
impl From<&User> for user::ActiveModel {
    fn from(model: &User) -> Self {
        Self {
            id: Set(model.id),
            username: Set(model.username.clone()),
            email: Set(model.email.clone()),
            hashed_password: Set(model.hashed_password.clone()),
            is_admin: Set(model.is_admin),
            role: Set(model.role.into()),
            created_at: NotSet,
            updated_at: Set(Some(Utc::now())),
        }
    }
}

// ===== Catalog Conversions =====

impl From<category::Model> for Category {
    fn from(m: category::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
        }
    }
}

impl From<&NewCategory> for category::ActiveModel {
    fn from(new: &NewCategory) -> Self {
        Self {
            id: NotSet,
            name: Set(new.name.clone()),
            description: Set(new.description.clone()),
        }
    }
}

impl From<&Category> for category::ActiveModel {
    fn from(model: &Category) -> Self {
        Self {
            id: Set(model.id),
            name: Set(model.name.clone()),
            description: Set(model.description.clone()),
        }
    }
}

impl From<product::Model> for Product {
    fn from(m: product::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            stock: m.stock,
            is_active: m.is_active,
            category_id: m.category_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<&NewProduct> for product::ActiveModel {
    fn from(new: &NewProduct) -> Self {
        Self {
            id: NotSet,
            name: Set(new.name.clone()),
            description: Set(new.description.clone()),
            price: Set(new.price),
            stock: Set(new.stock),
            is_active: Set(new.is_active),
            category_id: Set(new.category_id),
            created_at: Set(Utc::now()),
            updated_at: NotSet,
        }
    }
}

impl From<&Product> for product::ActiveModel {
    fn from(model: &Product) -> Self {
        Self {
            id: Set(model.id),
            name: Set(model.name.clone()),
            description: Set(model.description.clone()),
            price: Set(model.price),
            stock: Set(model.stock),
            is_active: Set(model.is_active),
            category_id: Set(model.category_id),
            created_at: NotSet,
            updated_at: Set(Some(Utc::now())),
        }
    }
}

impl From<product_variant::Model> for ProductVariant {
    fn from(m: product_variant::Model) -> Self {
        Self {
            id: m.id,
            product_id: m.product_id,
            name: m.name,
            value: m.value,
        }
    }
}

impl From<&NewProductVariant> for product_variant::ActiveModel {
    fn from(new: &NewProductVariant) -> Self {
        Self {
            id: NotSet,
            product_id: Set(new.product_id),
            name: Set(new.name.clone()),
            value: Set(new.value.clone()),
        }
    }
}

impl From<product_image::Model> for ProductImage {
    fn from(m: product_image::Model) -> Self {
        Self {
            id: m.id,
            product_id: m.product_id,
            url: m.url,
        }
    }
}

impl From<&NewProductImage> for product_image::ActiveModel {
    fn from(new: &NewProductImage) -> Self {
        Self {
            id: NotSet,
            product_id: Set(new.product_id),
            url: Set(new.url.clone()),
        }
    }
}

// ===== Discount Conversions =====

impl From<discount::Model> for Discount {
    fn from(m: discount::Model) -> Self {
        Self {
            id: m.id,
            code: m.code,
            description: m.description,
            discount_type: m.discount_type.into(),
            value: m.value,
            start_date: m.start_date,
            end_date: m.end_date,
            is_active: m.is_active,
            max_uses: m.max_uses,
            times_used: m.times_used,
        }
    }
}

impl From<&NewDiscount> for discount::ActiveModel {
    fn from(new: &NewDiscount) -> Self {
        Self {
            id: NotSet,
            code: Set(new.code.clone()),
            description: Set(new.description.clone()),
            discount_type: Set(new.discount_type.into()),
            value: Set(new.value),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
            is_active: Set(new.is_active),
            max_uses: Set(new.max_uses),
            times_used: Set(0),
        }
    }
}

impl From<&Discount> for discount::ActiveModel {
    fn from(model: &Discount) -> Self {
        Self {
            id: Set(model.id),
            code: Set(model.code.clone()),
            description: Set(model.description.clone()),
            discount_type: Set(model.discount_type.into()),
            value: Set(model.value),
            start_date: Set(model.start_date),
            end_date: Set(model.end_date),
            is_active: Set(model.is_active),
            max_uses: Set(model.max_uses),
            times_used: Set(model.times_used),
        }
    }
}

// ===== Order Conversions =====

impl From<order::Model> for Order {
    fn from(m: order::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            status: m.status,
            total_amount: m.total_amount,
            discount_id: m.discount_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<&NewOrder> for order::ActiveModel {
    fn from(new: &NewOrder) -> Self {
        Self {
            id: NotSet,
            user_id: Set(new.user_id),
            // Unset status falls through to the column default
            status: new.status.clone().map_or(NotSet, Set),
            total_amount: Set(new.total_amount),
            discount_id: Set(new.discount_id),
            created_at: Set(Utc::now()),
            updated_at: NotSet,
        }
    }
}

impl From<&Order> for order::ActiveModel {
    fn from(model: &Order) -> Self {
        Self {
            id: Set(model.id),
            user_id: Set(model.user_id),
            status: Set(model.status.clone()),
            total_amount: Set(model.total_amount),
            discount_id: Set(model.discount_id),
            created_at: NotSet,
            updated_at: Set(Some(Utc::now())),
        }
    }
}

impl From<order_item::Model> for OrderItem {
    fn from(m: order_item::Model) -> Self {
        Self {
            id: m.id,
            order_id: m.order_id,
            product_id: m.product_id,
            quantity: m.quantity,
            price: m.price,
            subtotal: m.subtotal,
        }
    }
}

impl From<&NewOrderItem> for order_item::ActiveModel {
    fn from(new: &NewOrderItem) -> Self {
        Self {
            id: NotSet,
            order_id: Set(new.order_id),
            product_id: Set(new.product_id),
            quantity: Set(new.quantity),
            price: Set(new.price),
            subtotal: Set(new.subtotal),
        }
    }
}

impl From<order_status::Model> for OrderStatus {
    fn from(m: order_status::Model) -> Self {
        Self {
            id: m.id,
            order_id: m.order_id,
            status: m.status,
            changed_at: m.changed_at,
        }
    }
}

// ===== Review Conversions =====

impl From<review::Model> for Review {
    fn from(m: review::Model) -> Self {
        Self {
            id: m.id,
            product_id: m.product_id,
            user_id: m.user_id,
            rating: m.rating,
            comment: m.comment,
            created_at: m.created_at,
        }
    }
}

impl From<&NewReview> for review::ActiveModel {
    fn from(new: &NewReview) -> Self {
        Self {
            id: NotSet,
            product_id: Set(new.product_id),
            user_id: Set(new.user_id),
            rating: Set(new.rating),
            comment: Set(new.comment.clone()),
            created_at: Set(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    #[test]
    fn order_without_status_leaves_column_to_its_default() {
        let active: order::ActiveModel = (&NewOrder {
            user_id: 1,
            status: None,
            total_amount: 10.0,
            discount_id: None,
        })
            .into();
        assert!(matches!(active.status, ActiveValue::NotSet));
        assert!(matches!(active.discount_id, ActiveValue::Set(None)));
    }

    #[test]
    fn updates_do_not_rewrite_created_at() {
        let user = User {
            id: 7,
            username: "ana".into(),
            email: "ana@example.com".into(),
            hashed_password: "x".into(),
            is_admin: false,
            role: UserRole::Vendor,
            created_at: Utc::now(),
            updated_at: None,
        };
        let active: user::ActiveModel = (&user).into();
        assert!(matches!(active.created_at, ActiveValue::NotSet));
        assert!(matches!(active.updated_at, ActiveValue::Set(Some(_))));
        assert!(matches!(
            active.role,
            ActiveValue::Set(entity::sea_orm_active_enums::UserRole::Vendor)
        ));
    }
}
