//! Column-limit validation
//!
//! SQLite does not enforce `VARCHAR(n)`, so writes are checked against the declared
//! widths before they reach the store. Nothing here inspects business meaning.

use crate::contract::{
    NewCategory, NewDiscount, NewOrder, NewProduct, NewProductImage, NewProductVariant,
    NewUser, StorefrontError,
};

pub const USERNAME_MAX: usize = 50;
pub const EMAIL_MAX: usize = 100;
pub const PASSWORD_HASH_MAX: usize = 128;
pub const NAME_MAX: usize = 100;
pub const IMAGE_URL_MAX: usize = 255;
pub const DISCOUNT_CODE_MAX: usize = 50;
pub const ORDER_STATUS_MAX: usize = 50;

/// Validate a required string column
///
/// Width is counted in characters, matching `VARCHAR(n)` semantics.
pub fn validate_required(field: &str, value: &str, max: usize) -> Result<(), StorefrontError> {
    if value.trim().is_empty() {
        return Err(StorefrontError::validation(format!("{} cannot be empty", field)));
    }

    let len = value.chars().count();
    if len > max {
        return Err(StorefrontError::validation(format!(
            "{} is {} characters long, maximum is {}",
            field, len, max
        )));
    }

    Ok(())
}

pub fn validate_new_user(user: &NewUser) -> Result<(), StorefrontError> {
    validate_required("username", &user.username, USERNAME_MAX)?;
    validate_required("email", &user.email, EMAIL_MAX)?;
    validate_required("hashed_password", &user.hashed_password, PASSWORD_HASH_MAX)
}

pub fn validate_new_category(category: &NewCategory) -> Result<(), StorefrontError> {
    validate_required("category name", &category.name, NAME_MAX)
}

pub fn validate_new_product(product: &NewProduct) -> Result<(), StorefrontError> {
    validate_required("product name", &product.name, NAME_MAX)
}

pub fn validate_new_variant(variant: &NewProductVariant) -> Result<(), StorefrontError> {
    validate_required("variant name", &variant.name, NAME_MAX)?;
    validate_required("variant value", &variant.value, NAME_MAX)
}

pub fn validate_new_image(image: &NewProductImage) -> Result<(), StorefrontError> {
    validate_required("image url", &image.url, IMAGE_URL_MAX)
}

pub fn validate_new_discount(discount: &NewDiscount) -> Result<(), StorefrontError> {
    validate_required("discount code", &discount.code, DISCOUNT_CODE_MAX)
}

pub fn validate_order_status(status: &str) -> Result<(), StorefrontError> {
    validate_required("order status", status, ORDER_STATUS_MAX)
}

pub fn validate_new_order(order: &NewOrder) -> Result<(), StorefrontError> {
    match &order.status {
        Some(status) => validate_order_status(status),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_values_are_rejected() {
        assert!(validate_required("username", "", USERNAME_MAX).is_err());
        assert!(validate_required("username", "   ", USERNAME_MAX).is_err());
    }

    #[test]
    fn width_is_counted_in_characters() {
        let name = "ñ".repeat(NAME_MAX);
        assert!(validate_required("product name", &name, NAME_MAX).is_ok());

        let too_long = "a".repeat(NAME_MAX + 1);
        let err = validate_required("product name", &too_long, NAME_MAX).unwrap_err();
        assert!(matches!(err, StorefrontError::Validation { .. }));
    }

    #[test]
    fn order_without_status_is_valid() {
        let order = NewOrder {
            user_id: 1,
            status: None,
            total_amount: 0.0,
            discount_id: None,
        };
        assert!(validate_new_order(&order).is_ok());
    }

    #[test]
    fn user_fields_are_checked_in_order() {
        let user = NewUser {
            username: "alice".into(),
            email: String::new(),
            hashed_password: "hash".into(),
            ..Default::default()
        };
        match validate_new_user(&user) {
            Err(StorefrontError::Validation { message }) => assert!(message.starts_with("email")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
