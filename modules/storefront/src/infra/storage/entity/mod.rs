//! SeaORM entities for database tables
//!
//! One module per table. Each module declares every relation it takes part in,
//! so both sides of a foreign key are visible from either entity.

pub mod category;
pub mod discount;
pub mod order;
pub mod order_item;
pub mod order_status;
pub mod product;
pub mod product_image;
pub mod product_variant;
pub mod review;
pub mod sea_orm_active_enums;
pub mod user;
