//! Service behaviour: defaults, status history, pricing, lookups and migrations

mod common;

use common::*;
use sea_orm_migration::MigratorTrait;
use storefront::contract::*;
use storefront::infra::storage::migrations::Migrator;
use storefront::StorefrontApi;

#[tokio::test]
async fn test_order_status_defaults_to_pending() {
    print_test_header(
        "test_order_status_defaults_to_pending",
        &["An order created without a status reads back as \"pending\"."],
    );

    let module = setup().await;
    let service = module.service();
    let catalog = seed_catalog(&module).await;

    let order = service
        .place_order(new_order(catalog.user.id, None))
        .await
        .unwrap();
    assert_eq!(order.status, DEFAULT_ORDER_STATUS);

    let fetched = service.get_order(order.id).await.unwrap();
    assert_eq!(fetched.status, "pending");
    assert_eq!(fetched.total_amount, 500.0);

    let mut explicit = new_order(catalog.user.id, None);
    explicit.status = Some("paid".to_string());
    let paid = service.place_order(explicit).await.unwrap();
    assert_eq!(paid.status, "paid");
}

#[tokio::test]
async fn test_status_changes_are_recorded_in_order() {
    print_test_header(
        "test_status_changes_are_recorded_in_order",
        &[
            "set_order_status updates the order and appends to its history.",
            "History comes back oldest first.",
        ],
    );

    let module = setup().await;
    let service = module.service();
    let catalog = seed_catalog(&module).await;

    let order = service
        .place_order(new_order(catalog.user.id, None))
        .await
        .unwrap();
    assert!(service.order_status_history(order.id).await.unwrap().is_empty());

    println!("\n📝 Stage 1: Move through paid and shipped");
    let paid = service.set_order_status(order.id, "paid").await.unwrap();
    assert_eq!(paid.order_id, order.id);
    service.set_order_status(order.id, "shipped").await.unwrap();

    let current = service.get_order(order.id).await.unwrap();
    assert_eq!(current.status, "shipped");
    assert!(current.updated_at.is_some());

    let history: Vec<_> = service
        .order_status_history(order.id)
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.status)
        .collect();
    println!("   History: {:?}", history);
    assert_eq!(history, vec!["paid", "shipped"]);

    println!("\n📝 Stage 2: Unknown order");
    let err = service.set_order_status(9999, "paid").await.unwrap_err();
    assert!(matches!(err, StorefrontError::NotFound { .. }));

    println!("\n📝 Stage 3: Blank status");
    let err = service.set_order_status(order.id, "  ").await.unwrap_err();
    assert!(matches!(err, StorefrontError::Validation { .. }));
}

#[tokio::test]
async fn test_order_item_subtotal_is_quantity_times_price() {
    print_test_header(
        "test_order_item_subtotal_is_quantity_times_price",
        &["The stored subtotal equals quantity x unit price."],
    );

    let module = setup().await;
    let service = module.service();
    let catalog = seed_catalog(&module).await;

    let order = service
        .place_order(new_order(catalog.user.id, None))
        .await
        .unwrap();
    let item = service
        .add_order_item(order.id, catalog.product.id, 3, 19.5)
        .await
        .unwrap();
    assert_eq!(item.subtotal, 58.5);

    let items = service.order_items(order.id).await.unwrap();
    assert_eq!(items, vec![item]);
}

#[tokio::test]
async fn test_update_user_stamps_updated_at() {
    print_test_header(
        "test_update_user_stamps_updated_at",
        &["Updates set updated_at and leave created_at untouched."],
    );

    let module = setup().await;
    let service = module.service();

    let mut user = service.register_user(new_user("grace")).await.unwrap();
    assert!(user.updated_at.is_none());
    let created_at = user.created_at;

    user.role = UserRole::Vendor;
    let updated = service.update_user(user).await.unwrap();

    assert_eq!(updated.role, UserRole::Vendor);
    assert_eq!(updated.created_at, created_at);
    assert!(updated.updated_at.is_some());

    let reloaded = service.get_user(updated.id).await.unwrap();
    assert_eq!(reloaded.role, UserRole::Vendor);
}

#[tokio::test]
async fn test_missing_rows_report_not_found() {
    print_test_header(
        "test_missing_rows_report_not_found",
        &["Reads, updates and deletes of absent rows fail with NotFound."],
    );

    let module = setup().await;
    let service = module.service();
    let ghost = service.register_user(new_user("ghost")).await.unwrap();
    service.delete_user(ghost.id).await.unwrap();

    assert!(matches!(
        service.get_user(ghost.id).await,
        Err(StorefrontError::NotFound { .. })
    ));
    assert!(matches!(
        service.update_user(ghost.clone()).await,
        Err(StorefrontError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete_user(ghost.id).await,
        Err(StorefrontError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete_review(4242).await,
        Err(StorefrontError::NotFound { .. })
    ));
    assert!(matches!(
        service.remove_product_image(4242).await,
        Err(StorefrontError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_overlong_username_is_rejected_before_insert() {
    print_test_header(
        "test_overlong_username_is_rejected_before_insert",
        &["Values wider than their column never reach the store."],
    );

    let module = setup().await;
    let service = module.service();

    let err = service
        .register_user(new_user(&"x".repeat(51)))
        .await
        .unwrap_err();
    println!("   Error: {}", err);
    assert!(matches!(err, StorefrontError::Validation { .. }));

    let err = service.register_user(new_user("")).await.unwrap_err();
    assert!(matches!(err, StorefrontError::Validation { .. }));

    assert!(service.list_users().await.unwrap().is_empty());

    // Exactly at the limit is fine
    service
        .register_user(new_user(&"y".repeat(50)))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_lookups_by_natural_keys() {
    print_test_header(
        "test_lookups_by_natural_keys",
        &["Users by username and email, categories by name, discounts by code."],
    );

    let module = setup().await;
    let service = module.service();
    let catalog = seed_catalog(&module).await;

    let by_name = service.get_user_by_username("alice").await.unwrap();
    let by_email = service
        .get_user_by_email("alice@example.com")
        .await
        .unwrap();
    assert_eq!(by_name, catalog.user);
    assert_eq!(by_email, catalog.user);

    let electronics = service.get_category_by_name("Electronics").await.unwrap();
    assert_eq!(electronics.id, catalog.category.id);

    let created = service.create_discount(new_discount("SPRING10")).await.unwrap();
    let found = service.get_discount_by_code("SPRING10").await.unwrap();
    assert_eq!(found, created);
    assert_eq!(found.discount_type, DiscountType::Percentage);
    assert_eq!(found.max_uses, Some(100));

    assert!(matches!(
        service.get_discount_by_code("NOPE").await,
        Err(StorefrontError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_native_client_delegates_to_service() {
    print_test_header(
        "test_native_client_delegates_to_service",
        &["The in-process client sees the same store as the service."],
    );

    let module = setup().await;
    let client = module.client();

    let user = client.register_user(new_user("heidi")).await.unwrap();
    let category = client
        .create_category(new_category("Kitchen"))
        .await
        .unwrap();
    let kettle = client
        .create_product(new_product("Kettle", 35.0, category.id))
        .await
        .unwrap();
    let review = client
        .post_review(NewReview {
            product_id: kettle.id,
            user_id: user.id,
            rating: 5,
            comment: Some("Boils fast".to_string()),
        })
        .await
        .unwrap();

    let via_service = module.service().get_review(review.id).await.unwrap();
    assert_eq!(via_service, review);
    assert_eq!(client.product_category(kettle.id).await.unwrap(), category);
}

#[tokio::test]
async fn test_migrations_are_reversible() {
    print_test_header(
        "test_migrations_are_reversible",
        &["After init nothing is pending; down then up rebuilds the schema."],
    );

    let module = setup().await;
    let db = module.connection();

    let pending = Migrator::get_pending_migrations(&*db).await.unwrap();
    assert!(pending.is_empty());

    Migrator::down(&*db, None).await.unwrap();
    Migrator::up(&*db, None).await.unwrap();

    let catalog = seed_catalog(&module).await;
    assert_eq!(catalog.product.category_id, catalog.category.id);
}
