use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Body for both product create and product update.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub category_id: i32,
    #[validate(custom(function = "crate::dto::not_blank", message = "Product name is required"))]
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub thumbnail_caption: Option<String>,
    pub thumbnail_caption_short: Option<String>,
    pub mall: Option<String>,
    #[validate(range(min = 0, message = "Price must be 0 or more"))]
    pub price: Option<i32>,
    #[validate(range(min = 0, message = "Stock must be 0 or more"))]
    pub stock: Option<i32>,
    #[validate(range(min = 0.0, message = "Rating must be 0 or more"))]
    pub rating: Option<f32>,
    pub coupon: Option<String>,
    pub delivery: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring matched against product names.
    pub name: String,
}
