//! Common test utilities: an isolated in-memory store and seed data

#![allow(dead_code)]

use chrono::NaiveDate;
use storefront::contract::*;
use storefront::{Config, StorefrontModule};

/// Fresh in-memory SQLite store with all migrations applied
pub async fn setup() -> StorefrontModule {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    StorefrontModule::init(Config::in_memory())
        .await
        .expect("in-memory store should initialize")
}

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        hashed_password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        ..Default::default()
    }
}

pub fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        description: None,
    }
}

pub fn new_product(name: &str, price: f64, category_id: i32) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: None,
        price,
        stock: 10,
        is_active: true,
        category_id,
    }
}

pub fn new_discount(code: &str) -> NewDiscount {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid start date");
    let end = NaiveDate::from_ymd_opt(2024, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .expect("valid end date");

    NewDiscount {
        code: code.to_string(),
        description: Some("Seasonal promotion".to_string()),
        discount_type: DiscountType::Percentage,
        value: 15.0,
        start_date: start,
        end_date: end,
        is_active: true,
        max_uses: Some(100),
    }
}

pub fn new_order(user_id: i32, discount_id: Option<i32>) -> NewOrder {
    NewOrder {
        user_id,
        status: None,
        total_amount: 500.0,
        discount_id,
    }
}

/// A user, the "Electronics" category and a "Phone" product in it
pub struct Catalog {
    pub user: User,
    pub category: Category,
    pub product: Product,
}

pub async fn seed_catalog(module: &StorefrontModule) -> Catalog {
    let service = module.service();
    let user = service.register_user(new_user("alice")).await.unwrap();
    let category = service
        .create_category(new_category("Electronics"))
        .await
        .unwrap();
    let product = service
        .create_product(new_product("Phone", 500.0, category.id))
        .await
        .unwrap();

    Catalog {
        user,
        category,
        product,
    }
}
