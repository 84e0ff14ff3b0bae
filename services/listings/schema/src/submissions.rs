use sea_orm::entity::prelude::*;

/// Apartment listing collected against a code. The `code` column is a
/// logical link to `codes.code`, not an enforced foreign key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub owner_name: Option<String>,
    pub price: Option<String>,
    pub size: Option<i32>,
    pub bedrooms: Option<String>,
    pub baths: Option<String>,
    pub condition: Option<String>,
    /// Ordered JSON array of attachment reference strings.
    pub images: Json,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
