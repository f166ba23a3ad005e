//! Constraint enforcement: every violation is raised by the database and
//! classified into the store error taxonomy

mod common;

use common::*;
use sea_orm::{ActiveValue::NotSet, ActiveValue::Set, ConnectionTrait, EntityTrait};
use storefront::contract::*;
use storefront::infra::storage::entity::category;
use storefront::infra::storage::error::classify;

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    print_test_header(
        "test_duplicate_username_is_rejected",
        &["Two users may not share a username, even with different emails."],
    );

    let module = setup().await;
    let service = module.service();

    service.register_user(new_user("bob")).await.unwrap();

    let mut clash = new_user("bob");
    clash.email = "other@example.com".to_string();
    let err = service.register_user(clash).await.unwrap_err();

    println!("   Error: {}", err);
    assert!(matches!(err, StorefrontError::UniqueViolation { .. }));
    assert_eq!(service.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    print_test_header(
        "test_duplicate_email_is_rejected",
        &["Two users may not share an email address."],
    );

    let module = setup().await;
    let service = module.service();

    service.register_user(new_user("carol")).await.unwrap();

    let mut clash = new_user("caroline");
    clash.email = "carol@example.com".to_string();
    let err = service.register_user(clash).await.unwrap_err();

    assert!(matches!(err, StorefrontError::UniqueViolation { .. }));
}

#[tokio::test]
async fn test_duplicate_category_name_is_rejected() {
    print_test_header(
        "test_duplicate_category_name_is_rejected",
        &["Category names are globally unique."],
    );

    let module = setup().await;
    let service = module.service();

    service
        .create_category(new_category("Books"))
        .await
        .unwrap();
    let err = service
        .create_category(new_category("Books"))
        .await
        .unwrap_err();

    assert!(matches!(err, StorefrontError::UniqueViolation { .. }));
}

#[tokio::test]
async fn test_duplicate_discount_code_is_rejected() {
    print_test_header(
        "test_duplicate_discount_code_is_rejected",
        &["Creating a discount with an existing code fails with a unique violation."],
    );

    let module = setup().await;
    let service = module.service();

    let first = service.create_discount(new_discount("SUMMER15")).await.unwrap();
    assert_eq!(first.times_used, 0);

    let err = service
        .create_discount(new_discount("SUMMER15"))
        .await
        .unwrap_err();

    assert!(matches!(err, StorefrontError::UniqueViolation { .. }));
    assert_eq!(service.list_discounts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_into_existing_username_is_rejected() {
    print_test_header(
        "test_update_into_existing_username_is_rejected",
        &["Uniqueness also holds for updates."],
    );

    let module = setup().await;
    let service = module.service();

    service.register_user(new_user("dave")).await.unwrap();
    let mut erin = service.register_user(new_user("erin")).await.unwrap();

    erin.username = "dave".to_string();
    let err = service.update_user(erin).await.unwrap_err();

    assert!(matches!(err, StorefrontError::UniqueViolation { .. }));
}

#[tokio::test]
async fn test_order_for_missing_user_is_rejected() {
    print_test_header(
        "test_order_for_missing_user_is_rejected",
        &["An order referencing a nonexistent user_id fails with a foreign key violation."],
    );

    let module = setup().await;
    let err = module
        .service()
        .place_order(new_order(9999, None))
        .await
        .unwrap_err();

    println!("   Error: {}", err);
    assert!(matches!(err, StorefrontError::ForeignKeyViolation { .. }));
}

#[tokio::test]
async fn test_product_in_missing_category_is_rejected() {
    print_test_header(
        "test_product_in_missing_category_is_rejected",
        &["Product.category_id must reference an existing category."],
    );

    let module = setup().await;
    let err = module
        .service()
        .create_product(new_product("Orphan", 1.0, 4242))
        .await
        .unwrap_err();

    assert!(matches!(err, StorefrontError::ForeignKeyViolation { .. }));
}

#[tokio::test]
async fn test_children_of_missing_parents_are_rejected() {
    print_test_header(
        "test_children_of_missing_parents_are_rejected",
        &["Variants, images, reviews and order items all need an existing parent."],
    );

    let module = setup().await;
    let service = module.service();
    let catalog = seed_catalog(&module).await;

    let variant = service
        .add_product_variant(NewProductVariant {
            product_id: 777,
            name: "Color".into(),
            value: "Red".into(),
        })
        .await;
    assert!(matches!(variant, Err(StorefrontError::ForeignKeyViolation { .. })));

    let image = service
        .add_product_image(NewProductImage {
            product_id: 777,
            url: "https://cdn.example.com/p/777.png".into(),
        })
        .await;
    assert!(matches!(image, Err(StorefrontError::ForeignKeyViolation { .. })));

    let review = service
        .post_review(NewReview {
            product_id: catalog.product.id,
            user_id: 777,
            rating: 5,
            comment: None,
        })
        .await;
    assert!(matches!(review, Err(StorefrontError::ForeignKeyViolation { .. })));

    let item = service.add_order_item(777, catalog.product.id, 1, 500.0).await;
    assert!(matches!(item, Err(StorefrontError::ForeignKeyViolation { .. })));
}

#[tokio::test]
async fn test_category_with_products_cannot_be_deleted() {
    print_test_header(
        "test_category_with_products_cannot_be_deleted",
        &[
            "Deleting a referenced category is restricted.",
            "Once its products are gone the category can be removed.",
        ],
    );

    let module = setup().await;
    let service = module.service();
    let catalog = seed_catalog(&module).await;

    println!("\n📝 Stage 1: Delete category while Phone references it");
    let err = service
        .delete_category(catalog.category.id)
        .await
        .unwrap_err();
    assert!(matches!(err, StorefrontError::ForeignKeyViolation { .. }));
    assert!(service.get_category(catalog.category.id).await.is_ok());

    println!("\n📝 Stage 2: Delete the product, then the category");
    service.delete_product(catalog.product.id).await.unwrap();
    service.delete_category(catalog.category.id).await.unwrap();

    let err = service.get_category(catalog.category.id).await.unwrap_err();
    assert!(matches!(err, StorefrontError::NotFound { .. }));
}

#[tokio::test]
async fn test_negative_stock_is_rejected() {
    print_test_header(
        "test_negative_stock_is_rejected",
        &["products.stock carries a CHECK (stock >= 0)."],
    );

    let module = setup().await;
    let service = module.service();
    let catalog = seed_catalog(&module).await;

    let mut product = new_product("Cable", 9.99, catalog.category.id);
    product.stock = -1;
    let err = service.create_product(product).await.unwrap_err();
    assert!(matches!(err, StorefrontError::CheckViolation { .. }));

    let mut phone = catalog.product.clone();
    phone.stock = -5;
    let err = service.update_product(phone).await.unwrap_err();
    assert!(matches!(err, StorefrontError::CheckViolation { .. }));
}

#[tokio::test]
async fn test_unknown_role_is_rejected_by_the_store() {
    print_test_header(
        "test_unknown_role_is_rejected_by_the_store",
        &["users.role only accepts customer, vendor or admin, even from raw SQL."],
    );

    let module = setup().await;
    let db = module.connection();

    let err = db
        .execute_unprepared(
            "INSERT INTO users (username, email, hashed_password, role) \
             VALUES ('mallory', 'mallory@example.com', 'x', 'superuser')",
        )
        .await
        .unwrap_err();

    assert!(matches!(classify(err), StorefrontError::CheckViolation { .. }));
}

#[tokio::test]
async fn test_missing_required_column_is_rejected() {
    print_test_header(
        "test_missing_required_column_is_rejected",
        &["Omitting a NOT NULL column surfaces as a not-null violation."],
    );

    let module = setup().await;
    let db = module.connection();

    let active = category::ActiveModel {
        id: NotSet,
        name: NotSet,
        description: Set(Some("no name".to_string())),
    };
    let err = category::Entity::insert(active)
        .exec(&*db)
        .await
        .unwrap_err();

    let err = classify(err);
    println!("   Error: {}", err);
    assert!(matches!(err, StorefrontError::NotNullViolation { .. }));
}

#[tokio::test]
async fn test_defaults_are_applied_by_the_store() {
    print_test_header(
        "test_defaults_are_applied_by_the_store",
        &["Column defaults fill in is_admin, role, is_active, stock and times_used."],
    );

    let module = setup().await;
    let db = module.connection();
    let service = module.service();

    db.execute_unprepared(
        "INSERT INTO users (username, email, hashed_password) \
         VALUES ('frank', 'frank@example.com', 'x')",
    )
    .await
    .unwrap();
    let frank = service.get_user_by_username("frank").await.unwrap();
    assert!(!frank.is_admin);
    assert_eq!(frank.role, UserRole::Customer);
    assert!(frank.updated_at.is_none());

    let category = service.create_category(new_category("Garden")).await.unwrap();
    db.execute_unprepared(&format!(
        "INSERT INTO products (name, price, category_id) VALUES ('Rake', 12.5, {})",
        category.id
    ))
    .await
    .unwrap();
    let rake = &service.category_products(category.id).await.unwrap()[0];
    assert_eq!(rake.stock, 0);
    assert!(rake.is_active);
}
