use super::sea_orm_active_enums::DiscountType;
use sea_orm::entity::prelude::*;

/// Discount code table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "discounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    /// Percentage or fixed amount, depending on `discount_type`
    #[sea_orm(column_type = "Double")]
    pub value: f64,
    pub start_date: DateTime,
    pub end_date: DateTime,
    pub is_active: bool,
    pub max_uses: Option<i32>,
    pub times_used: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
