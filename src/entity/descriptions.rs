use sea_orm::entity::prelude::*;

/// Long-form product copy, keyed by the product it describes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "descriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary_exp: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary_cook: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary_store: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub caution_allergy1: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub caution_allergy2: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub caution_store: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub size_description: Option<String>,
    pub size_image_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub ingredient: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub nutrition: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_good_taste: Option<String>,
    pub review_good_taste_num: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_good_delivery: Option<String>,
    pub review_good_delivery_num: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_bad_taste: Option<String>,
    pub review_bad_taste_num: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_bad_delivery: Option<String>,
    pub review_bad_delivery_num: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id",
        on_delete = "Cascade"
    )]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
