use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[validate(custom(function = "crate::dto::not_blank", message = "Category name is required"))]
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AspectRequest {
    #[validate(custom(function = "crate::dto::not_blank", message = "Aspect is required"))]
    pub aspect: String,
}
