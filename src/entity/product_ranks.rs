use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Select};

/// Precomputed rank of a product for one aspect of its category.
///
/// The four id columns form the key. They are not foreign keys: rank rows
/// are loaded from an offline scoring job and trusted as given.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_ranks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_rank_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub aspect_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: i32,
    pub product_rank: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    pub fn find_by_aspect_ordered(aspect_id: i32) -> Select<Entity> {
        Self::find()
            .filter(Column::AspectId.eq(aspect_id))
            .order_by_desc(Column::ProductRank)
            .order_by_asc(Column::ProductId)
    }
}
